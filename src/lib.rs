//! Image Resizer Library
//!
//! Core logic for resizing a single image. Shared between the CLI binaries and
//! the WASM target.
//!
//! A resize never enlarges: the image is fitted inside a bounding box derived
//! from the selected mode, keeping its aspect ratio, the same way a thumbnail
//! is produced.

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat};
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for resize operations
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Unexpected mode `{0}`: expected -S (scale) or -R (fixed size)")]
    UnknownMode(String),

    #[error("Invalid scale factor `{value}`: {reason}")]
    InvalidScale { value: String, reason: String },

    #[error("Invalid size `{value}`: must be a positive integer")]
    InvalidSize { value: String },

    #[error("Failed to load image {path:?}")]
    Load {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Failed to decode image")]
    Decode(#[source] ImageError),

    #[error("Failed to save image {path:?}")]
    Save {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Failed to encode image")]
    Encode(#[source] ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// What to do when the mode token is neither `-S` nor `-R`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownModePolicy {
    /// Warn and save the decoded image unchanged
    #[default]
    CopyThrough,
    /// Reject the request before touching any file
    Fail,
}

/// Options for image resizing
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    /// Resampling filter used when the image has to shrink
    pub filter: FilterType,
    /// Handling of unrecognized mode tokens
    pub unknown_mode: UnknownModePolicy,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            filter: FilterType::CatmullRom,
            unknown_mode: UnknownModePolicy::CopyThrough,
        }
    }
}

/// Mode selected by the command-line flag, before its parameter is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFlag {
    /// `-S`
    Scale,
    /// `-R`
    Fixed,
}

/// Recognize a mode token, ignoring letter case.
pub fn parse_mode_token(token: &str) -> Option<ModeFlag> {
    if token.eq_ignore_ascii_case("-S") {
        Some(ModeFlag::Scale)
    } else if token.eq_ignore_ascii_case("-R") {
        Some(ModeFlag::Fixed)
    } else {
        None
    }
}

/// How the bounding box is derived from the image
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeMode {
    /// Multiply both sides by a factor
    Scale(f64),
    /// Square box with the given side in pixels
    Fixed(u32),
}

impl ResizeMode {
    /// Parse the numeric parameter belonging to `flag`.
    pub fn parse(flag: ModeFlag, size: &str) -> Result<Self, ResizeError> {
        match flag {
            ModeFlag::Scale => parse_scale_factor(size).map(ResizeMode::Scale),
            ModeFlag::Fixed => parse_fixed_size(size).map(ResizeMode::Fixed),
        }
    }

    /// Bounding box for an image of the given size. Each side is at least 1.
    pub fn target_box(&self, width: u32, height: u32) -> (u32, u32) {
        match *self {
            ResizeMode::Scale(factor) => {
                // float -> int casts saturate, so huge factors just yield a box larger than the image
                let box_width = (width as f64 * factor).floor() as u32;
                let box_height = (height as f64 * factor).floor() as u32;
                (box_width.max(1), box_height.max(1))
            }
            ResizeMode::Fixed(size) => (size.max(1), size.max(1)),
        }
    }

    /// Final pixel dimensions for an image of the given size
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let (box_width, box_height) = self.target_box(width, height);
        fit_within(width, height, box_width, box_height)
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeMode::Scale(factor) => write!(f, "scale x{}", factor),
            ResizeMode::Fixed(size) => write!(f, "fit within {}x{}", size, size),
        }
    }
}

fn parse_scale_factor(value: &str) -> Result<f64, ResizeError> {
    let invalid = |reason: &str| ResizeError::InvalidScale {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let factor: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid("not a number"))?;
    if !factor.is_finite() {
        return Err(invalid("must be finite"));
    }
    if factor <= 0.0 {
        return Err(invalid("must be greater than 0"));
    }
    Ok(factor)
}

fn parse_fixed_size(value: &str) -> Result<u32, ResizeError> {
    match value.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ResizeError::InvalidSize {
            value: value.to_string(),
        }),
    }
}

/// Fit `width`x`height` inside a `box_width`x`box_height` box, preserving the
/// aspect ratio and never enlarging.
///
/// When one side is pinned to the box, the other is rounded to whichever of
/// floor/ceil keeps the ratio closest to the original (floor on ties), and is
/// never less than 1.
pub fn fit_within(width: u32, height: u32, box_width: u32, box_height: u32) -> (u32, u32) {
    let box_width = box_width.max(1);
    let box_height = box_height.max(1);

    if width == 0 || height == 0 || (box_width >= width && box_height >= height) {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let bw = box_width as f64;
    let bh = box_height as f64;

    if bw / bh >= aspect {
        let new_width = round_aspect(bh * aspect, |w| (aspect - w / bh).abs());
        (new_width, box_height)
    } else {
        let new_height = round_aspect(bw / aspect, |h| {
            if h == 0.0 {
                0.0
            } else {
                (aspect - bw / h).abs()
            }
        });
        (box_width, new_height)
    }
}

fn round_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let lower = value.floor();
    let upper = value.ceil();
    let best = if error(upper) < error(lower) { upper } else { lower };
    (best as u32).max(1)
}

/// Resize an image according to `mode`. An image already inside the box is
/// returned as is.
pub fn resize_image(
    img: DynamicImage,
    mode: ResizeMode,
    filter: FilterType,
) -> (DynamicImage, ResizeOutcome) {
    let original = (img.width(), img.height());
    let target = mode.target_dimensions(original.0, original.1);
    tracing::debug!(
        "{}: {}x{} -> {}x{}",
        mode,
        original.0,
        original.1,
        target.0,
        target.1
    );

    if target == original {
        let outcome = ResizeOutcome {
            original,
            output: original,
            status: ResizeStatus::AlreadyFits,
        };
        return (img, outcome);
    }

    let resized = img.resize_exact(target.0, target.1, filter);
    let outcome = ResizeOutcome {
        original,
        output: (resized.width(), resized.height()),
        status: ResizeStatus::Resized,
    };
    (resized, outcome)
}

/// What the resizer does with the loaded image
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeAction {
    Resize(ResizeMode),
    /// The mode token was not recognized; the image is saved as decoded
    CopyThrough { token: String },
}

impl ResizeAction {
    /// Build an action from the raw mode and size tokens.
    ///
    /// The size token is only parsed when the mode is recognized.
    pub fn from_tokens(
        mode: &str,
        size: &str,
        policy: UnknownModePolicy,
    ) -> Result<Self, ResizeError> {
        match parse_mode_token(mode) {
            Some(flag) => Ok(ResizeAction::Resize(ResizeMode::parse(flag, size)?)),
            None => match policy {
                UnknownModePolicy::CopyThrough => Ok(ResizeAction::CopyThrough {
                    token: mode.to_string(),
                }),
                UnknownModePolicy::Fail => Err(ResizeError::UnknownMode(mode.to_string())),
            },
        }
    }
}

/// A single, validated resize invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequest {
    pub action: ResizeAction,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ResizeRequest {
    /// Validate the four positional tokens of a `<mode> <size> <input> <output>` invocation
    pub fn from_tokens(
        mode: &str,
        size: &str,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        options: &ResizeOptions,
    ) -> Result<Self, ResizeError> {
        Ok(Self {
            action: ResizeAction::from_tokens(mode, size, options.unknown_mode)?,
            input: input.into(),
            output: output.into(),
        })
    }

    /// Validate a `<factor> <input> <output>` invocation, which always scales
    pub fn scale(
        factor: &str,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Result<Self, ResizeError> {
        Ok(Self {
            action: ResizeAction::Resize(ResizeMode::parse(ModeFlag::Scale, factor)?),
            input: input.into(),
            output: output.into(),
        })
    }
}

/// What happened to the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeStatus {
    Resized,
    /// Already inside the bounding box; saved without resampling
    AlreadyFits,
    /// Unknown mode; saved without resampling
    CopiedThrough,
}

/// Result of a resize operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub original: (u32, u32),
    pub output: (u32, u32),
    pub status: ResizeStatus,
}

impl fmt::Display for ResizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.original;
        let (out_w, out_h) = self.output;
        match self.status {
            ResizeStatus::Resized => write!(f, "Resized {}x{} -> {}x{}", w, h, out_w, out_h),
            ResizeStatus::AlreadyFits => {
                write!(f, "Image is {}x{}, already within bounds; not resized", w, h)
            }
            ResizeStatus::CopiedThrough => {
                write!(f, "Image is {}x{}, copied through unchanged", w, h)
            }
        }
    }
}

/// Apply `action` to a decoded image
fn apply_action(
    img: DynamicImage,
    action: &ResizeAction,
    options: &ResizeOptions,
) -> (DynamicImage, ResizeOutcome) {
    match action {
        ResizeAction::CopyThrough { token } => {
            tracing::debug!("Unknown mode {:?}, keeping the image unchanged", token);
            let original = (img.width(), img.height());
            let outcome = ResizeOutcome {
                original,
                output: original,
                status: ResizeStatus::CopiedThrough,
            };
            (img, outcome)
        }
        ResizeAction::Resize(mode) => resize_image(img, *mode, options.filter),
    }
}

/// Resize an encoded image in memory and return it encoded as `format`
pub fn resize_bytes(
    input_bytes: &[u8],
    action: &ResizeAction,
    format: ImageFormat,
    options: &ResizeOptions,
) -> Result<(Vec<u8>, ResizeOutcome), ResizeError> {
    let img = image::load_from_memory(input_bytes).map_err(ResizeError::Decode)?;
    tracing::debug!("Decoded {} bytes into {}x{}", input_bytes.len(), img.width(), img.height());

    let (img, outcome) = apply_action(img, action, options);

    let mut output = Cursor::new(Vec::new());
    img.write_to(&mut output, format)
        .map_err(ResizeError::Encode)?;

    Ok((output.into_inner(), outcome))
}

/// Look up an output format by extension or name, e.g. `png` or `jpg`
pub fn output_format_from_name(name: &str) -> Result<ImageFormat, ResizeError> {
    let name = name.trim().trim_start_matches('.');
    ImageFormat::from_extension(name)
        .ok_or_else(|| ResizeError::UnsupportedFormat(name.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub mod file_ops {
    use super::*;
    use image::ImageReader;
    use std::path::Path;

    fn load_image(path: &Path) -> Result<DynamicImage, ResizeError> {
        let load_err = |source: ImageError| ResizeError::Load {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| load_err(ImageError::IoError(e)))?;
        reader.decode().map_err(load_err)
    }

    /// Resize the image at `request.input` and save it to `request.output`
    pub fn resize_file(
        request: &ResizeRequest,
        options: &ResizeOptions,
    ) -> Result<ResizeOutcome, ResizeError> {
        // Resolve the output format first so a bad extension fails before any I/O
        let format = ImageFormat::from_path(&request.output).map_err(|_| {
            ResizeError::UnsupportedFormat(request.output.display().to_string())
        })?;

        let img = load_image(&request.input)?;
        tracing::debug!(
            "Loaded {:?}: {}x{} {:?}",
            request.input,
            img.width(),
            img.height(),
            img.color()
        );

        let (img, outcome) = apply_action(img, &request.action, options);

        img.save_with_format(&request.output, format)
            .map_err(|source| ResizeError::Save {
                path: request.output.clone(),
                source,
            })?;
        tracing::debug!("Saved {:?} as {:?}", request.output, format);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_mode_token_is_case_insensitive() {
        assert_eq!(parse_mode_token("-S"), Some(ModeFlag::Scale));
        assert_eq!(parse_mode_token("-s"), Some(ModeFlag::Scale));
        assert_eq!(parse_mode_token("-R"), Some(ModeFlag::Fixed));
        assert_eq!(parse_mode_token("-r"), Some(ModeFlag::Fixed));
        assert_eq!(parse_mode_token("S"), None);
        assert_eq!(parse_mode_token("-X"), None);
        assert_eq!(parse_mode_token(""), None);
    }

    #[test]
    fn test_scale_mode_example() {
        let mode = ResizeMode::parse(ModeFlag::Scale, "0.5").unwrap();
        assert_eq!(mode.target_box(1000, 500), (500, 250));
        assert_eq!(mode.target_dimensions(1000, 500), (500, 250));
    }

    #[test]
    fn test_fixed_mode_example() {
        let mode = ResizeMode::parse(ModeFlag::Fixed, "200").unwrap();
        assert_eq!(mode.target_box(1000, 500), (200, 200));
        assert_eq!(mode.target_dimensions(1000, 500), (200, 100));
    }

    #[test]
    fn test_fixed_mode_portrait() {
        assert_eq!(ResizeMode::Fixed(200).target_dimensions(300, 600), (100, 200));
    }

    #[test]
    fn test_never_upscales() {
        assert_eq!(ResizeMode::Scale(2.0).target_dimensions(640, 480), (640, 480));
        assert_eq!(ResizeMode::Scale(1.0).target_dimensions(640, 480), (640, 480));
        assert_eq!(ResizeMode::Fixed(1024).target_dimensions(640, 480), (640, 480));
        assert_eq!(ResizeMode::Fixed(640).target_dimensions(640, 480), (640, 480));
    }

    #[test]
    fn test_fit_rounds_to_nearest_ratio() {
        // 333x100 in a 100x100 box: height is 30.03, floor keeps the ratio closer
        assert_eq!(fit_within(333, 100, 100, 100), (100, 30));
        // 100x3 in a 50x50 box: height 1.5, and 50x2 is closer to 100:3 than 50x1
        assert_eq!(fit_within(100, 3, 50, 50), (50, 2));
        // 3x2 in 2x2: 2x1 and 2x2 are equally far from 3:2, floor wins
        assert_eq!(fit_within(3, 2, 2, 2), (2, 1));
    }

    #[test]
    fn test_fit_never_collapses_to_zero() {
        assert_eq!(fit_within(10_000, 1, 10, 10), (10, 1));
        assert_eq!(fit_within(1, 10_000, 10, 10), (1, 10));
        assert_eq!(ResizeMode::Scale(0.0001).target_dimensions(100, 50), (1, 1));
    }

    #[test]
    fn test_fit_with_one_side_already_inside() {
        // only the width exceeds the box
        assert_eq!(fit_within(400, 100, 200, 300), (200, 50));
    }

    #[test]
    fn test_invalid_scale_factor() {
        for value in ["abc", "", "0", "-0.5", "inf", "NaN"] {
            let err = ResizeMode::parse(ModeFlag::Scale, value).unwrap_err();
            assert!(
                matches!(err, ResizeError::InvalidScale { .. }),
                "{value}: {err}"
            );
        }
    }

    #[test]
    fn test_scale_factor_accepts_padding_and_exponent() {
        assert_eq!(
            ResizeMode::parse(ModeFlag::Scale, " 0.25 ").unwrap(),
            ResizeMode::Scale(0.25)
        );
        assert_eq!(
            ResizeMode::parse(ModeFlag::Scale, "5e-1").unwrap(),
            ResizeMode::Scale(0.5)
        );
    }

    #[test]
    fn test_invalid_fixed_size() {
        for value in ["abc", "", "0", "-5", "2.5"] {
            let err = ResizeMode::parse(ModeFlag::Fixed, value).unwrap_err();
            assert!(matches!(err, ResizeError::InvalidSize { .. }), "{value}: {err}");
        }
    }

    #[test]
    fn test_unknown_mode_copies_through_by_default() {
        let action =
            ResizeAction::from_tokens("-X", "not-a-number", UnknownModePolicy::CopyThrough)
                .unwrap();
        assert_eq!(
            action,
            ResizeAction::CopyThrough {
                token: "-X".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_mode_fails_when_strict() {
        let err = ResizeAction::from_tokens("-X", "2", UnknownModePolicy::Fail).unwrap_err();
        assert!(matches!(err, ResizeError::UnknownMode(ref token) if token == "-X"));
    }

    #[test]
    fn test_request_from_tokens() {
        let request = ResizeRequest::from_tokens(
            "-r",
            "64",
            "in.png",
            "out.png",
            &ResizeOptions::default(),
        )
        .unwrap();
        assert_eq!(request.action, ResizeAction::Resize(ResizeMode::Fixed(64)));
        assert_eq!(request.input, PathBuf::from("in.png"));
        assert_eq!(request.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_scale_request() {
        let request = ResizeRequest::scale("0.75", "a.jpg", "b.jpg").unwrap();
        assert_eq!(request.action, ResizeAction::Resize(ResizeMode::Scale(0.75)));
        assert!(ResizeRequest::scale("-1", "a.jpg", "b.jpg").is_err());
    }

    #[test]
    fn test_resize_image_dimensions() {
        let (resized, outcome) =
            resize_image(gradient(100, 50), ResizeMode::Fixed(20), FilterType::Triangle);
        assert_eq!((resized.width(), resized.height()), (20, 10));
        assert_eq!(outcome.status, ResizeStatus::Resized);
        assert_eq!(outcome.output, (20, 10));

        let img = gradient(100, 50);
        let (untouched, outcome) =
            resize_image(img.clone(), ResizeMode::Scale(3.0), FilterType::Triangle);
        assert_eq!(outcome.status, ResizeStatus::AlreadyFits);
        assert_eq!(untouched.as_bytes(), img.as_bytes());
    }

    #[test]
    fn test_resize_bytes_round_trip() {
        let img = gradient(40, 30);
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png).unwrap();

        let action = ResizeAction::Resize(ResizeMode::Scale(0.5));
        let (bytes, outcome) = resize_bytes(
            png.get_ref(),
            &action,
            ImageFormat::Png,
            &ResizeOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome.status, ResizeStatus::Resized);
        assert_eq!(outcome.original, (40, 30));
        assert_eq!(outcome.output, (20, 15));
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 15));
    }

    #[test]
    fn test_resize_bytes_copy_through_is_pixel_identical() {
        let img = gradient(17, 9);
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png).unwrap();

        let action = ResizeAction::CopyThrough {
            token: "-Q".to_string(),
        };
        let (bytes, outcome) = resize_bytes(
            png.get_ref(),
            &action,
            ImageFormat::Png,
            &ResizeOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome.status, ResizeStatus::CopiedThrough);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.to_rgb8().as_raw(), img.to_rgb8().as_raw());
    }

    #[test]
    fn test_resize_bytes_rejects_garbage() {
        let action = ResizeAction::Resize(ResizeMode::Fixed(10));
        let err = resize_bytes(
            b"definitely not an image",
            &action,
            ImageFormat::Png,
            &ResizeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ResizeError::Decode(_)));
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(output_format_from_name("png").unwrap(), ImageFormat::Png);
        assert_eq!(output_format_from_name(".JPG").unwrap(), ImageFormat::Jpeg);
        assert!(matches!(
            output_format_from_name("docx"),
            Err(ResizeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_outcome_display() {
        let outcome = ResizeOutcome {
            original: (1000, 500),
            output: (200, 100),
            status: ResizeStatus::Resized,
        };
        assert_eq!(outcome.to_string(), "Resized 1000x500 -> 200x100");
    }

    #[quickcheck]
    fn prop_scale_fits_scaled_box(width: u16, height: u16, percent: u8) -> TestResult {
        if width == 0 || height == 0 || percent == 0 {
            return TestResult::discard();
        }
        let (width, height) = (width as u32, height as u32);
        let factor = percent as f64 / 100.0;
        let mode = ResizeMode::Scale(factor);
        let (box_width, box_height) = mode.target_box(width, height);
        let (w, h) = mode.target_dimensions(width, height);

        TestResult::from_bool(
            w <= box_width
                && h <= box_height
                && w <= width
                && h <= height
                && aspect_within_one_pixel(width, height, (box_width, box_height), (w, h)),
        )
    }

    #[quickcheck]
    fn prop_fixed_fits_square(width: u16, height: u16, bound: u16) -> TestResult {
        if width == 0 || height == 0 || bound == 0 {
            return TestResult::discard();
        }
        let (width, height, bound) = (width as u32, height as u32, bound as u32);
        let (w, h) = ResizeMode::Fixed(bound).target_dimensions(width, height);

        TestResult::from_bool(
            w <= bound
                && h <= bound
                && w <= width
                && h <= height
                && aspect_within_one_pixel(width, height, (bound, bound), (w, h)),
        )
    }

    #[quickcheck]
    fn prop_inside_box_is_unchanged(width: u16, height: u16, extra_w: u8, extra_h: u8) -> bool {
        let (width, height) = (width as u32 + 1, height as u32 + 1);
        fit_within(width, height, width + extra_w as u32, height + extra_h as u32)
            == (width, height)
    }

    /// The side pinned to the box is exact; the free side is within one pixel
    /// of what the original ratio asks for.
    fn aspect_within_one_pixel(
        width: u32,
        height: u32,
        (box_width, box_height): (u32, u32),
        (w, h): (u32, u32),
    ) -> bool {
        if (w, h) == (width, height) {
            return true;
        }
        let aspect = width as f64 / height as f64;
        if box_width as f64 / box_height as f64 >= aspect {
            h == box_height && (w as f64 - h as f64 * aspect).abs() <= 1.0
        } else {
            w == box_width && (h as f64 - w as f64 / aspect).abs() <= 1.0
        }
    }

    #[test]
    fn test_free_side_follows_the_ratio() {
        // 1000x300 in a 200x200 box: width is pinned, height must be 60
        let (w, h) = ResizeMode::Fixed(200).target_dimensions(1000, 300);
        assert_eq!((w, h), (200, 60));
        assert!(aspect_within_one_pixel(1000, 300, (200, 200), (w, h)));
        assert!(!aspect_within_one_pixel(1000, 300, (200, 200), (200, 62)));
        assert!(!aspect_within_one_pixel(1000, 300, (200, 200), (198, 60)));
    }
}
