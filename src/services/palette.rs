//! Median-cut palette extraction from PNG images.

use std::path::Path;

use gradient_engine::{median_cut_quantize, output::encode_hex6, ColorMap, GradientError};

use crate::error::AppError;
use crate::rendering::decode_pixels;

/// Reduce the colors of the PNG at `path` to at most `max_colors`.
pub fn extract_palette(path: &Path, max_colors: usize) -> Result<ColorMap, AppError> {
    let bytes = std::fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let pixels = decode_pixels(&bytes)?;
    tracing::debug!(pixels = pixels.len(), max_colors, "Quantizing image");

    median_cut_quantize(&pixels, max_colors).map_err(|e| AppError::Gradient(GradientError::from(e)))
}

/// Palette colors as `#rrggbb` lines
pub fn format_palette(map: &ColorMap) -> String {
    map.colors()
        .iter()
        .map(|&c| format!("#{}", encode_hex6(c)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Orientation;
    use crate::rendering::render_strip;
    use gradient_engine::TargetId;

    #[test]
    fn test_two_color_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bw.png");
        let png = render_strip(
            &[[0, 0, 0], [255, 255, 255]],
            TargetId::AmigaAga.profile(),
            Orientation::Vertical,
            3,
        )
        .unwrap();
        std::fs::write(&path, png).unwrap();

        let map = extract_palette(&path, 2).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(format_palette(&map), "#fcfcfc\n#040404");
    }

    #[test]
    fn test_missing_file() {
        let err = extract_palette(Path::new("/nonexistent/image.png"), 4).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }

    #[test]
    fn test_bad_color_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.png");
        let png = render_strip(
            &[[10, 20, 30]],
            TargetId::AmigaAga.profile(),
            Orientation::Vertical,
            2,
        )
        .unwrap();
        std::fs::write(&path, png).unwrap();
        assert!(matches!(
            extract_palette(&path, 300),
            Err(AppError::Gradient(GradientError::Quantize(_)))
        ));
    }
}
