//! `imgscale <factor> <input> <output>`: always scales, no mode flag.

use anyhow::Context;
use clap::Parser;
use imgresize::cli::{init_logging, FilterArg};
use imgresize::{file_ops::resize_file, ResizeOptions, ResizeRequest};
use std::path::PathBuf;

/// Shrink an image by a scale factor, preserving its aspect ratio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scale factor, e.g. 0.5
    #[arg(allow_hyphen_values = true)]
    factor: String,

    /// Input image file path
    input: PathBuf,

    /// Output image file path
    output: PathBuf,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = FilterArg::CatmullRom)]
    filter: FilterArg,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = ResizeOptions {
        filter: args.filter.into(),
        ..ResizeOptions::default()
    };
    let request = ResizeRequest::scale(&args.factor, args.input, args.output)?;

    let outcome = resize_file(&request, &options)
        .with_context(|| format!("Could not resize {:?}", request.input))?;

    println!("{}", outcome);
    println!("Output saved to: {:?}", request.output);

    Ok(())
}
