//! Image Resizer CLI
//!
//! `imgresize <mode> <size> <input> <output>`, where mode is `-S` (scale by a
//! factor) or `-R` (fit within a square of `size` pixels). The mode is always
//! the first argument; options go anywhere after it.

use anyhow::Context;
use clap::Parser;
use imgresize::cli::{init_logging, FilterArg};
use imgresize::{
    file_ops::resize_file, ResizeAction, ResizeOptions, ResizeRequest, UnknownModePolicy,
};
use std::ffi::OsString;
use std::path::PathBuf;

/// Resize an image by a scale factor or to fit a square box
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    override_usage = "imgresize <MODE> [OPTIONS] <SIZE> <INPUT> <OUTPUT>",
    after_help = "MODE is always the first argument, case-insensitive: -S (scale by factor) \
or -R (fit within SIZE x SIZE). Any other token saves the image unchanged."
)]
struct Args {
    /// Taken from the first argument, never from clap
    #[arg(skip)]
    mode: String,

    /// Scale factor for -S, or bounding box side in pixels for -R
    #[arg(allow_hyphen_values = true)]
    size: String,

    /// Input image file path
    input: PathBuf,

    /// Output image file path; the extension selects the format
    output: PathBuf,

    /// Fail on an unrecognized mode instead of saving the image unchanged
    #[arg(long)]
    strict: bool,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = FilterArg::CatmullRom)]
    filter: FilterArg,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Pull the mode out of the first argument before clap sees it, so tokens
    /// that spell an option (`-v`, `-h`, `--strict`) still count as a mode.
    /// A lone argument is left to clap so `--help` and `--version` work.
    fn parse_with_mode<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut raw: Vec<OsString> = raw.into_iter().collect();
        let mode = if raw.len() > 2 {
            Some(raw.remove(1))
        } else {
            None
        };

        let mut args = Args::parse_from(raw);
        if let Some(mode) = mode {
            args.mode = mode.to_string_lossy().into_owned();
        }
        args
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_with_mode(std::env::args_os());
    init_logging(args.verbose);

    let options = ResizeOptions {
        filter: args.filter.into(),
        unknown_mode: if args.strict {
            UnknownModePolicy::Fail
        } else {
            UnknownModePolicy::CopyThrough
        },
    };

    let request =
        ResizeRequest::from_tokens(&args.mode, &args.size, args.input, args.output, &options)?;

    if let ResizeAction::CopyThrough { token } = &request.action {
        println!("Unexpected mode {:?}! Saving the image unchanged", token);
    }

    let outcome = resize_file(&request, &options)
        .with_context(|| format!("Could not resize {:?}", request.input))?;

    println!("{}", outcome);
    println!("Output saved to: {:?}", request.output);

    Ok(())
}
