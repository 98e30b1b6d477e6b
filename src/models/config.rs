use serde::Deserialize;
use std::path::Path;

use gradient_engine::{
    BlendMode, CopperOptions, CopperSyntax, DitherMode, GradientBlaster, GradientPoint, Hsv,
    OutputFormat, Rgb, TableOptions, TableSyntax, Target, TargetId,
};

use crate::error::AppError;

/// A gradient document loaded from YAML or JSON
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradientDocument {
    /// Target id, e.g. `amigaOcs`
    #[serde(default = "default_target")]
    pub target: String,

    /// Number of gradient entries
    #[serde(default = "default_steps")]
    pub steps: usize,

    #[serde(default = "default_blend_mode")]
    pub blend_mode: String,

    #[serde(default = "default_dither_mode")]
    pub dither_mode: String,

    /// Dither strength, 0..=100
    #[serde(default)]
    pub dither_amount: f64,

    /// Swaps per position for shuffle dithering, 1..=5
    #[serde(default = "default_shuffle_count")]
    pub shuffle_count: u8,

    /// Seed for the white noise modes
    #[serde(default)]
    pub seed: Option<u64>,

    pub points: Vec<PointConfig>,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_target() -> String {
    TargetId::default().as_str().to_string()
}

fn default_steps() -> usize {
    256
}

fn default_blend_mode() -> String {
    BlendMode::default().as_str().to_string()
}

fn default_dither_mode() -> String {
    DitherMode::default().as_str().to_string()
}

fn default_shuffle_count() -> u8 {
    1
}

/// One anchor: a position plus either a hex color or HSV components
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PointConfig {
    pub pos: f64,

    /// `#RGB` or `#RRGGBB`
    #[serde(default)]
    pub color: Option<String>,

    /// Hue, saturation, value, each 0.0..=1.0
    #[serde(default)]
    pub hsv: Option<[f64; 3]>,
}

/// PNG strip direction
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// One row per entry
    #[default]
    Vertical,
    /// One column per entry
    Horizontal,
}

/// Artifact options
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Output format; defaults to the target's first supported format
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default = "default_label")]
    pub label: String,

    /// Label of the odd field on interlaced targets
    #[serde(default = "default_label_odd")]
    pub label_odd: String,

    /// Label of the even field on interlaced targets
    #[serde(default = "default_label_even")]
    pub label_even: String,

    /// Table values per row; defaults to the target's preference
    #[serde(default)]
    pub row_size: Option<usize>,

    /// First copper scanline
    #[serde(default = "default_start_line")]
    pub start_line: u32,

    /// Copper color register index
    #[serde(default)]
    pub color_index: u8,

    #[serde(default = "default_true")]
    pub wait_start: bool,

    #[serde(default = "default_true")]
    pub end_list: bool,

    #[serde(default)]
    pub orientation: Orientation,

    /// PNG strip thickness; defaults to the gradient length
    #[serde(default)]
    pub repeat: Option<u32>,
}

fn default_label() -> String {
    "Gradient".to_string()
}

fn default_label_odd() -> String {
    "GradientOdd".to_string()
}

fn default_label_even() -> String {
    "GradientEven".to_string()
}

fn default_start_line() -> u32 {
    0x2b
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            label: default_label(),
            label_odd: default_label_odd(),
            label_even: default_label_even(),
            row_size: None,
            start_line: default_start_line(),
            color_index: 0,
            wait_start: true,
            end_list: true,
            orientation: Orientation::default(),
            repeat: None,
        }
    }
}

impl OutputConfig {
    /// Table options for `target`, labelled `label`.
    pub fn table_options(&self, target: &Target, syntax: TableSyntax, label: &str) -> TableOptions {
        let options = TableOptions::for_target(target, syntax).label(label);
        match self.row_size {
            Some(row_size) => options.row_size(row_size),
            None => options,
        }
    }

    /// Copper options, labelled `label`.
    pub fn copper_options(&self, syntax: CopperSyntax, label: &str) -> CopperOptions {
        CopperOptions {
            start_line: self.start_line,
            label: label.to_string(),
            color_index: self.color_index,
            wait_start: self.wait_start,
            end_list: self.end_list,
            syntax,
        }
    }
}

impl GradientDocument {
    /// Load a document, choosing JSON for `.json` files and YAML otherwise
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let document = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        tracing::info!(
            path = %path.display(),
            target = %document.target,
            steps = document.steps,
            points = document.points.len(),
            "Loaded gradient document"
        );
        Ok(document)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolve target, blend and dither names into a configured builder
    pub fn blaster(&self) -> Result<GradientBlaster, AppError> {
        let target: TargetId = self.target.parse().map_err(gradient_error)?;
        let blend_mode: BlendMode = self.blend_mode.parse().map_err(gradient_error)?;
        let dither_mode: DitherMode = self.dither_mode.parse().map_err(gradient_error)?;

        let blaster = GradientBlaster::new(target)
            .steps(self.steps)
            .blend_mode(blend_mode)
            .dither_mode(dither_mode)
            .dither_amount(self.dither_amount)
            .shuffle_count(self.shuffle_count);

        Ok(match self.seed {
            Some(seed) => blaster.seed(seed),
            None => blaster,
        })
    }

    /// Anchor points in document order
    pub fn gradient_points(&self) -> Result<Vec<GradientPoint>, AppError> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| match (&point.color, point.hsv) {
                (Some(hex), None) => {
                    let rgb: Rgb = hex.parse().map_err(gradient_error)?;
                    Ok(GradientPoint::from_rgb(point.pos, rgb))
                }
                (None, Some([h, s, v])) => Ok(GradientPoint::new(point.pos, Hsv::new(h, s, v))),
                _ => Err(AppError::InvalidConfig(format!(
                    "point {index} needs exactly one of color or hsv"
                ))),
            })
            .collect()
    }

    /// Requested output format, or the target's first one
    pub fn output_format(&self, target: &Target) -> Result<OutputFormat, AppError> {
        match &self.output.format {
            Some(name) => name.parse().map_err(gradient_error),
            None => target.outputs.first().copied().ok_or_else(|| {
                AppError::InvalidConfig(format!("target {} has no outputs", target.id))
            }),
        }
    }
}

fn gradient_error(err: impl Into<gradient_engine::GradientError>) -> AppError {
    AppError::Gradient(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_engine::ConfigError;

    const MINIMAL: &str = r##"
points:
  - { pos: 0.0, color: "#000" }
  - { pos: 1.0, hsv: [0.0, 0.0, 1.0] }
"##;

    #[test]
    fn test_defaults() {
        let doc = GradientDocument::from_yaml_str(MINIMAL).unwrap();

        assert_eq!(doc.target, "amigaOcs");
        assert_eq!(doc.steps, 256);
        assert_eq!(doc.blend_mode, "oklab");
        assert_eq!(doc.dither_mode, "off");
        assert_eq!(doc.dither_amount, 0.0);
        assert_eq!(doc.shuffle_count, 1);
        assert_eq!(doc.seed, None);
        assert_eq!(doc.output, OutputConfig::default());
        assert_eq!(doc.output.start_line, 0x2b);
    }

    #[test]
    fn test_full_document() {
        let yaml = r##"
target: amigaOcsLace
steps: 64
blendMode: perceptual
ditherMode: blueNoise
ditherAmount: 30
shuffleCount: 2
seed: 42
points:
  - { pos: 0.0, color: "#102030" }
  - { pos: 1.0, color: "#ffeedd" }
output:
  format: copperListC
  labelOdd: Odd
  rowSize: 4
  startLine: 60
  colorIndex: 3
  waitStart: false
  orientation: horizontal
  repeat: 8
"##;
        let doc = GradientDocument::from_yaml_str(yaml).unwrap();
        assert_eq!(doc.output.label_odd, "Odd");
        assert_eq!(doc.output.label_even, "GradientEven");
        assert_eq!(doc.output.orientation, Orientation::Horizontal);
        assert!(doc.output.end_list);

        let blaster = doc.blaster().unwrap();
        assert_eq!(blaster.target_id(), TargetId::AmigaOcsLace);
        assert_eq!(blaster.step_count(), 64);
        assert_eq!(blaster.dither_config().mode, DitherMode::BlueNoise);
        assert_eq!(blaster.dither_config().seed, Some(42));

        let format = doc.output_format(blaster.target()).unwrap();
        assert_eq!(format, OutputFormat::CopperListC);

        let copper = doc.output.copper_options(CopperSyntax::C, "Odd");
        assert_eq!(copper.start_line, 60);
        assert_eq!(copper.color_index, 3);
        assert!(!copper.wait_start);
    }

    #[test]
    fn test_json_document() {
        let json = r##"{"target": "atariSte", "steps": 10, "points": [{"pos": 0.5, "color": "#abc"}]}"##;
        let doc = GradientDocument::from_json_str(json).unwrap();
        assert_eq!(doc.steps, 10);
        assert_eq!(doc.points.len(), 1);
        assert_eq!(
            doc.output_format(TargetId::AtariSte.profile()).unwrap(),
            OutputFormat::TableAsm
        );
    }

    #[test]
    fn test_points_need_one_color() {
        let yaml = r##"
points:
  - { pos: 0.0 }
"##;
        let doc = GradientDocument::from_yaml_str(yaml).unwrap();
        assert!(matches!(
            doc.gradient_points(),
            Err(AppError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_hex_color() {
        let yaml = r##"
points:
  - { pos: 0.0, color: "#12" }
"##;
        let doc = GradientDocument::from_yaml_str(yaml).unwrap();
        assert!(matches!(doc.gradient_points(), Err(AppError::Gradient(_))));
    }

    #[test]
    fn test_unknown_target() {
        let doc = GradientDocument {
            target: "c64".to_string(),
            ..GradientDocument::from_yaml_str(MINIMAL).unwrap()
        };
        match doc.blaster() {
            Err(AppError::Gradient(gradient_engine::GradientError::Config(
                ConfigError::UnknownName { kind, name },
            ))) => {
                assert_eq!(kind, "target");
                assert_eq!(name, "c64");
            }
            other => panic!("Expected unknown target, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_points_rejected() {
        assert!(matches!(
            GradientDocument::from_yaml_str("target: amigaAga\n"),
            Err(AppError::Yaml(_))
        ));
    }

    #[test]
    fn test_hex_start_line() {
        let doc = GradientDocument::from_yaml_str(&format!("{MINIMAL}output:\n  startLine: 0x44\n"))
            .unwrap();
        assert_eq!(doc.output.start_line, 0x44);
    }
}
