use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gradient_blaster::models::GradientDocument;
use gradient_blaster::services::{self, Artifact};
use gradient_engine::{OutputFormat, TargetId};

#[derive(Parser)]
#[command(name = "gradient-blaster")]
#[command(about = "Build and encode color gradients for retro hardware")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a gradient document and encode it
    Build {
        /// Gradient document (YAML, or JSON with a .json extension)
        config: PathBuf,

        /// Output format, overriding the document (e.g. "copperList", "tableC")
        #[arg(short, long)]
        format: Option<String>,

        /// Directory to write files into; text is printed to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print binary files as base64 instead of writing them
        #[arg(long)]
        base64: bool,
    },
    /// List target profiles and their outputs
    Targets,
    /// Print a median-cut palette of a PNG image
    Palette {
        /// PNG image
        image: PathBuf,

        /// Maximum number of colors (2-256)
        #[arg(short, long, default_value_t = 16)]
        colors: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build {
            config,
            format,
            output,
            base64,
        }) => {
            init_logging();
            run_build_command(&config, format.as_deref(), output.as_deref(), base64)
        }
        Some(Commands::Targets) => {
            run_targets_command();
            Ok(())
        }
        Some(Commands::Palette { image, colors }) => {
            init_logging();
            run_palette_command(&image, colors)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gradient_blaster=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Build a gradient document and write or print the result
fn run_build_command(
    config: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    base64: bool,
) -> anyhow::Result<()> {
    let mut document = GradientDocument::load(config)?;
    if let Some(format) = format {
        document.output.format = Some(format.to_string());
    }

    let blaster = document.blaster()?;
    let points = document.gradient_points()?;
    let format = document.output_format(blaster.target())?;

    let gradient = blaster.build(&points)?;
    let artifact = services::assemble(&gradient, &blaster, format, &document.output)?;

    match (&artifact, output) {
        (Artifact::Text(_), None) => {
            if let Some(text) = artifact.text() {
                println!("{text}");
            }
        }
        (Artifact::Binary(files), None) if base64 => {
            for file in files {
                println!("{}: {}", file.file_name, file.base64());
            }
        }
        (_, dir) => {
            let dir = dir.unwrap_or_else(|| Path::new("."));
            for path in artifact.write_to(dir)? {
                eprintln!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

/// List every target profile
fn run_targets_command() {
    for id in TargetId::ALL {
        let target = id.profile();
        let depth = match target.palette {
            Some(palette) => format!("{} colors", palette.len()),
            None => {
                let [r, g, b] = target.depth.channels();
                if r == g && g == b {
                    format!("{r}-bit")
                } else {
                    format!("{r}/{g}/{b}-bit")
                }
            }
        };
        let interlaced = if target.interlaced { ", interlaced" } else { "" };
        let outputs: Vec<&str> = target.outputs.iter().map(|f| f.as_str()).collect();

        println!("{:<16} {} ({depth}{interlaced})", id.as_str(), target.label);
        println!("{:<16} outputs: {}", "", outputs.join(", "));
    }
}

/// Print a median-cut palette for a PNG image
fn run_palette_command(image: &Path, colors: usize) -> anyhow::Result<()> {
    let map = services::palette::extract_palette(image, colors)?;
    println!("{}", services::palette::format_palette(&map));
    Ok(())
}

/// Display version and usage hints
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Gradient Blaster v{VERSION}");
    println!("Color gradients for Amiga, Atari, Neo Geo and Amstrad CPC\n");

    println!("Targets:  {}", TargetId::ALL.len());
    println!(
        "Formats:  {}",
        OutputFormat::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("\nRun 'gradient-blaster build <config>' to encode a gradient.");
    println!("Run 'gradient-blaster targets' to list target profiles.");
}
