//! PNG strips of finished gradients, and PNG pixel loading for palette
//! extraction.

use std::io::Cursor;

use gradient_engine::{Rgb, Rgb8, Target};

use crate::error::RenderError;
use crate::models::Orientation;

/// Draw `gradient` as a strip, each entry shown as the target displays it.
///
/// Vertical strips are `repeat` pixels wide with one row per entry;
/// horizontal strips are `repeat` pixels high with one column per entry.
pub fn render_strip(
    gradient: &[Rgb8],
    target: &Target,
    orientation: Orientation,
    repeat: u32,
) -> Result<Vec<u8>, RenderError> {
    let length = u32::try_from(gradient.len()).unwrap_or(u32::MAX);
    let (width, height) = match orientation {
        Orientation::Vertical => (repeat, length),
        Orientation::Horizontal => (length, repeat),
    };
    if width == 0 || height == 0 {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }

    let shown: Vec<Rgb8> = gradient
        .iter()
        .map(|&c| target.adjust_color(Rgb::from_bytes(c)).to_bytes())
        .collect();

    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height as usize {
        for x in 0..width as usize {
            let index = match orientation {
                Orientation::Vertical => y,
                Orientation::Horizontal => x,
            };
            data.extend_from_slice(&shown[index]);
        }
    }

    tracing::debug!(width, height, "Encoding gradient strip");
    encode_rgb(width, height, &data)
}

fn encode_rgb(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Decode a PNG into RGB pixels. Alpha is dropped, grayscale expanded.
pub fn decode_pixels(bytes: &[u8]) -> Result<Vec<Rgb8>, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let pixels = match info.color_type {
        png::ColorType::Rgb => data.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect(),
        png::ColorType::Rgba => data.chunks_exact(4).map(|p| [p[0], p[1], p[2]]).collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| [v; 3]).collect(),
        png::ColorType::GrayscaleAlpha => data.chunks_exact(2).map(|p| [p[0]; 3]).collect(),
        other => {
            return Err(RenderError::UnsupportedPng(format!("{other:?}")));
        }
    };
    Ok(pixels)
}
