// main.rs
//
// Renders the inverse-kinematics linkage schematic to an SVG file (or stdout).

use anyhow::{Context, Result};
use clap::Parser;
use kinframe::diagram::{DiagramConfig, inverse_kinematics};
use kinframe::io::svg::SvgCanvas;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Render the inverse-kinematics linkage schematic as SVG")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "inverse-kinematics.svg")]
    output: PathBuf,

    /// Write the SVG to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Page width in device units
    #[arg(
        long,
        default_value_t = DiagramConfig::default().width,
        value_parser = clap::value_parser!(u32).range(1..=DiagramConfig::MAX_EXTENT as i64),
    )]
    width: u32,

    /// Page height in device units
    #[arg(
        long,
        default_value_t = DiagramConfig::default().height,
        value_parser = clap::value_parser!(u32).range(1..=DiagramConfig::MAX_EXTENT as i64),
    )]
    height: u32,

    /// Corner radius of the page background
    #[arg(
        long,
        default_value_t = DiagramConfig::default().corner_radius,
        value_parser = clap::value_parser!(u32).range(0..=DiagramConfig::MAX_EXTENT as i64),
    )]
    corner_radius: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = DiagramConfig {
        width: args.width,
        height: args.height,
        corner_radius: args.corner_radius,
    };

    let mut canvas = SvgCanvas::new(config.width, config.height);
    inverse_kinematics(&mut canvas, &config);

    if args.stdout {
        canvas
            .write_to(std::io::stdout().lock())
            .context("failed to write SVG to stdout")?;
    } else {
        canvas
            .save(&args.output)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        log::info!("wrote {}", args.output.display());
    }

    Ok(())
}
