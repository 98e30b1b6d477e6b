//! Target hardware profiles
//!
//! A [`Target`] bundles everything the engine needs to know about one
//! piece of hardware: how colors are restricted (a bit depth, or a fixed
//! palette), whether gradients are flicker-interlaced, how a single color
//! becomes register values, and which outputs make sense. Encoders only
//! ever talk to a `Target`; they never branch on which machine it is.
//!
//! # Example
//!
//! ```
//! use gradient_engine::{Rgb, TargetId};
//!
//! let ocs = TargetId::AmigaOcs.profile();
//! let shown = ocs.adjust_color(Rgb::new(130.0, 64.0, 250.0));
//! assert_eq!(shown.to_bytes(), [137, 68, 255]);
//! assert_eq!(ocs.encode_one([137, 68, 255]), vec!["84f".to_string()]);
//! ```

mod catalogue;
mod format;

use std::fmt;
use std::str::FromStr;

pub use format::OutputFormat;

use crate::bits::{quantize, reduce_bits, Bits};
use crate::color::{Oklab, Rgb, Rgb8};
use crate::error::{ConfigError, EncodeError};
use crate::output::hex::{
    encode_hex3, encode_hex_falcon, encode_hex_falcon24, encode_hex_falcon_true,
    encode_hex_neo_geo, encode_hex_pair_aga, encode_hex_ste,
};
use crate::palette::Palette;

/// Identifier of a built-in target profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    AmigaOcs,
    AmigaOcsLace,
    AmigaAga,
    AtariSt,
    AtariSte,
    AtariFalcon,
    AtariFalcon24,
    AtariFalconTrue,
    NeoGeo,
    AmstradCpc,
}

impl TargetId {
    pub const ALL: [TargetId; 10] = [
        TargetId::AmigaOcs,
        TargetId::AmigaOcsLace,
        TargetId::AmigaAga,
        TargetId::AtariSt,
        TargetId::AtariSte,
        TargetId::AtariFalcon,
        TargetId::AtariFalcon24,
        TargetId::AtariFalconTrue,
        TargetId::NeoGeo,
        TargetId::AmstradCpc,
    ];

    /// Identifier used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetId::AmigaOcs => "amigaOcs",
            TargetId::AmigaOcsLace => "amigaOcsLace",
            TargetId::AmigaAga => "amigaAga",
            TargetId::AtariSt => "atariSt",
            TargetId::AtariSte => "atariSte",
            TargetId::AtariFalcon => "atariFalcon",
            TargetId::AtariFalcon24 => "atariFalcon24",
            TargetId::AtariFalconTrue => "atariFalconTrue",
            TargetId::NeoGeo => "neoGeo",
            TargetId::AmstradCpc => "amstradCpc",
        }
    }

    /// The static profile for this target.
    pub fn profile(self) -> &'static Target {
        catalogue::profile(self)
    }
}

impl Default for TargetId {
    fn default() -> Self {
        TargetId::AmigaOcs
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownName {
                kind: "target",
                name: s.to_string(),
            })
    }
}

/// How one color becomes register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One hex digit per channel, levels at the given depth
    Hex3(Bits),
    /// STe nibble rotation of 4-bit levels
    Ste,
    /// Two 12-bit words per color: high nibbles, then low nibbles
    AgaPair,
    /// Falcon `RRGG00BB` long word from 6-bit levels
    Falcon,
    /// Falcon `RRGG00BB` long word from full bytes
    Falcon24,
    /// 5/6/5 truecolor word
    FalconTrue,
    /// Neo Geo word with shared dark bit
    NeoGeo,
    /// Index into the target's fixed palette, as two hex digits
    PaletteIndex,
}

/// Copper list support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopperMode {
    /// No copper on this hardware
    None,
    /// One 12-bit color write per change
    Ocs,
    /// High and low nibble writes, toggled through BPLCON3
    Aga,
}

/// Static description of one target machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: TargetId,
    /// Human readable name
    pub label: &'static str,
    /// Color depth per channel. For palette targets this is the nominal
    /// depth used to scale dither strength.
    pub depth: Bits,
    /// Gradients are split into odd/even fields shown on alternate frames
    pub interlaced: bool,
    /// Fixed hardware palette; takes precedence over `depth` when present
    pub palette: Option<&'static [Rgb8]>,
    /// Entries per row when presenting the palette
    pub palette_row_size: Option<usize>,
    pub encoding: Encoding,
    pub copper: CopperMode,
    /// Supported outputs, preferred first
    pub outputs: &'static [OutputFormat],
}

impl Target {
    /// Snap `color` to what the hardware can show: nearest palette entry
    /// for palette targets, otherwise quantized at `depth`.
    pub fn adjust_color(&self, color: Rgb) -> Rgb {
        match self.matcher() {
            Some(palette) => Rgb::from_bytes(palette.nearest(color)),
            None => quantize(color, self.depth),
        }
    }

    /// Cached matcher for [`Target::palette`].
    pub fn matcher(&self) -> Option<&'static Palette> {
        catalogue::palette_matcher(self.id)
    }

    /// True when the hardware shows both colors identically.
    pub fn same_output(&self, a: Rgb, b: Rgb) -> bool {
        self.adjust_color(a) == self.adjust_color(b)
    }

    /// Encode one finished color as register values.
    ///
    /// Most encodings yield one item; [`Encoding::AgaPair`] yields two.
    pub fn encode_one(&self, color: Rgb8) -> Vec<String> {
        let rgb = Rgb::from_bytes(color);
        match self.encoding {
            Encoding::Hex3(bits) => vec![encode_hex3(reduce_bits(rgb, bits))],
            Encoding::Ste => vec![encode_hex_ste(reduce_bits(rgb, self.depth))],
            Encoding::AgaPair => encode_hex_pair_aga(color).into(),
            Encoding::Falcon => vec![encode_hex_falcon(reduce_bits(rgb, self.depth))],
            Encoding::Falcon24 => vec![encode_hex_falcon24(color)],
            Encoding::FalconTrue => {
                vec![encode_hex_falcon_true(reduce_bits(rgb, self.depth))]
            }
            Encoding::NeoGeo => vec![encode_hex_neo_geo(reduce_bits(rgb, self.depth))],
            Encoding::PaletteIndex => {
                let index = self
                    .matcher()
                    .map_or(0, |palette| palette.find_nearest(Oklab::from(rgb)).0);
                vec![format!("{:02x}", index)]
            }
        }
    }

    /// Encode a whole sequence, flattening multi-item encodings.
    pub fn encode_all(&self, gradient: &[Rgb8]) -> Vec<String> {
        gradient.iter().flat_map(|&c| self.encode_one(c)).collect()
    }

    /// Default table row length.
    pub fn default_row_size(&self) -> usize {
        match self.encoding {
            Encoding::Falcon => 4,
            _ => 8,
        }
    }

    pub fn supports(&self, format: OutputFormat) -> bool {
        self.outputs.contains(&format)
    }

    /// `Ok` if `format` is one of this target's outputs.
    pub fn check_format(&self, format: OutputFormat) -> Result<(), EncodeError> {
        if self.supports(format) {
            Ok(())
        } else {
            Err(EncodeError::UnsupportedFormat {
                target: self.id,
                format,
            })
        }
    }
}
