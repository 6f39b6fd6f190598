/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use png_to_header::{ConvertConfig, convert};

#[derive(Parser)]
#[command(name = "png_to_header")]
#[command(about = "Convert an image into a C header with a packed 0xAARRGGBB pixel array")]
struct Cli {
    /// Input image (PNG or any other format the decoder understands)
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Output header, overwritten if it exists
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Base name for <name>_width, <name>_height and <name>_data
    #[arg(allow_hyphen_values = true)]
    var_name: String,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let program = args
        .first()
        .map_or_else(|| "png_to_header".into(), |a| a.to_string_lossy().into_owned());

    // Too few arguments is not an error: print usage and exit 0.
    if args.len() < 4 {
        println!("Usage: {program} <input.png> <output.h> <var_name>");
        return Ok(());
    }

    let cli = Cli::try_parse_from(&args).unwrap_or_else(|e| e.exit());

    if !cli.extra.is_empty() {
        tracing::warn!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let config = ConvertConfig::new(cli.input, cli.output, cli.var_name)?;

    tracing::info!("Converting {:?} -> {:?}", config.input, config.output);
    let summary = convert(&config)
        .with_context(|| format!("Failed to convert {:?}", config.input))?;

    tracing::info!(
        "Wrote {}x{} image data to {:?}",
        summary.width,
        summary.height,
        summary.output
    );

    Ok(())
}
