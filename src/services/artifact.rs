//! Assembles finished gradients into downloadable artifacts: source text
//! with a header comment, binary blobs, or a PNG strip.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use gradient_engine::{
    encode_binary, encode_copper_list, encode_hex_list, encode_table, CopperSyntax, GradientBlaster,
    OutputFormat, Rgb8, TableSyntax,
};

use crate::error::AppError;
use crate::models::OutputConfig;
use crate::rendering::render_strip;

/// One output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ArtifactFile {
    fn text(file_name: &str, content: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            bytes: content.into_bytes(),
        }
    }

    /// Contents as standard base64, for text transport of binary files
    pub fn base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Encoded output for one format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Source text
    Text(ArtifactFile),
    /// Binary blobs, one per interlace field
    Binary(Vec<ArtifactFile>),
    /// PNG strip
    Png(ArtifactFile),
}

impl Artifact {
    pub fn files(&self) -> Vec<&ArtifactFile> {
        match self {
            Artifact::Text(file) | Artifact::Png(file) => vec![file],
            Artifact::Binary(files) => files.iter().collect(),
        }
    }

    /// Source text, if this is a text artifact
    pub fn text(&self) -> Option<&str> {
        match self {
            Artifact::Text(file) => std::str::from_utf8(&file.bytes).ok(),
            _ => None,
        }
    }

    /// Write every file into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for file in self.files() {
            let path = dir.join(&file.file_name);
            std::fs::write(&path, &file.bytes)?;
            tracing::info!(path = %path.display(), bytes = file.bytes.len(), "Wrote artifact");
            written.push(path);
        }
        Ok(written)
    }
}

/// Gradient split into labelled sections: one for plain targets, odd and
/// even fields for interlaced ones.
struct Sections {
    parts: Vec<(String, Vec<Rgb8>)>,
}

impl Sections {
    fn new(gradient: &[Rgb8], blaster: &GradientBlaster, output: &OutputConfig) -> Self {
        let parts = match blaster.fields(gradient) {
            Some((odd, even)) => vec![
                (output.label_odd.clone(), odd),
                (output.label_even.clone(), even),
            ],
            None => vec![(output.label.clone(), gradient.to_vec())],
        };
        Self { parts }
    }

    /// Render each section and join them with a single newline.
    fn render(
        &self,
        mut f: impl FnMut(&str, &[Rgb8]) -> Result<String, AppError>,
    ) -> Result<String, AppError> {
        let rendered = self
            .parts
            .iter()
            .map(|(label, colors)| f(label.as_str(), colors.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join("\n"))
    }
}

/// Settings summary used as the first line of text artifacts
pub fn header(blaster: &GradientBlaster, comment_prefix: &str) -> String {
    let dither = blaster.dither_config();
    let mut line = format!(
        "{comment_prefix}Gradient Blaster: target={} steps={} blend={} dither={}",
        blaster.target_id(),
        blaster.step_count(),
        blaster.blend(),
        dither.mode
    );
    if dither.mode != gradient_engine::DitherMode::Off {
        line.push_str(&format!(" amount={}", dither.amount));
    }
    line
}

/// Encode `gradient` in `format`.
///
/// Interlaced targets get separate odd/even sections (or files).
pub fn assemble(
    gradient: &[Rgb8],
    blaster: &GradientBlaster,
    format: OutputFormat,
    output: &OutputConfig,
) -> Result<Artifact, AppError> {
    let target = blaster.target();
    target
        .check_format(format)
        .map_err(|e| AppError::Gradient(e.into()))?;
    let sections = Sections::new(gradient, blaster, output);

    let artifact = match format {
        OutputFormat::CopperList | OutputFormat::CopperListC => {
            let syntax = match format {
                OutputFormat::CopperListC => CopperSyntax::C,
                _ => CopperSyntax::Asm,
            };
            let body = sections.render(|label, colors| {
                let options = output.copper_options(syntax, label);
                encode_copper_list(colors, target, format, &options)
                    .map_err(|e| AppError::Gradient(e.into()))
            })?;
            let content = format!("{}\n{body}", header(blaster, syntax.comment_prefix()));
            Artifact::Text(ArtifactFile::text(file_name(format), content))
        }
        OutputFormat::TableAsm
        | OutputFormat::TableC
        | OutputFormat::TableAmos
        | OutputFormat::TableStos => {
            let syntax = TableSyntax::for_format(format).unwrap_or(TableSyntax::Asm);
            let body = sections.render(|label, colors| {
                let options = output.table_options(target, syntax, label);
                encode_table(colors, target, format, &options).map_err(|e| AppError::Gradient(e.into()))
            })?;
            let content = format!("{}\n{body}", header(blaster, syntax.comment_prefix()));
            Artifact::Text(ArtifactFile::text(file_name(format), content))
        }
        OutputFormat::HexList => {
            let content = sections.render(|_, colors| {
                encode_hex_list(colors, target).map_err(|e| AppError::Gradient(e.into()))
            })?;
            Artifact::Text(ArtifactFile::text(file_name(format), content))
        }
        OutputFormat::TableBin => {
            let interlaced = sections.parts.len() > 1;
            let files = sections
                .parts
                .iter()
                .enumerate()
                .map(|(index, (_, colors))| {
                    let file_name = match (interlaced, index) {
                        (false, _) => "gradient.bin",
                        (true, 0) => "gradientOdd.bin",
                        (true, _) => "gradientEven.bin",
                    };
                    let bytes = encode_binary(colors, target).map_err(|e| AppError::Gradient(e.into()))?;
                    Ok(ArtifactFile {
                        file_name: file_name.to_string(),
                        bytes,
                    })
                })
                .collect::<Result<Vec<_>, AppError>>()?;
            Artifact::Binary(files)
        }
        OutputFormat::ImagePng => {
            let repeat = output
                .repeat
                .unwrap_or_else(|| u32::try_from(gradient.len()).unwrap_or(u32::MAX));
            let bytes = render_strip(gradient, target, output.orientation, repeat)?;
            Artifact::Png(ArtifactFile {
                file_name: file_name(format).to_string(),
                bytes,
            })
        }
    };

    tracing::debug!(%format, files = artifact.files().len(), "Assembled artifact");
    Ok(artifact)
}

/// Default file name for a format
pub fn file_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::CopperList | OutputFormat::TableAsm => "gradient.s",
        OutputFormat::CopperListC | OutputFormat::TableC => "gradient.c",
        OutputFormat::TableAmos | OutputFormat::TableStos | OutputFormat::HexList => "gradient.txt",
        OutputFormat::TableBin => "gradient.bin",
        OutputFormat::ImagePng => "gradient.png",
    }
}
