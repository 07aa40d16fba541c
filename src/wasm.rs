//! WebAssembly bindings for the Image Resizer

use crate::{
    output_format_from_name, resize_bytes, ResizeAction, ResizeError, ResizeOptions,
    ResizeOutcome, ResizeStatus,
};
use serde::Serialize;
use std::error::Error as _;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Flatten an error and its causes into one message for JavaScript
fn js_error(err: ResizeError) -> JsError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    JsError::new(&message)
}

fn run(
    image_bytes: &[u8],
    mode: &str,
    size: &str,
    format: &str,
) -> Result<(Vec<u8>, ResizeOutcome), ResizeError> {
    let options = ResizeOptions::default();
    let action = ResizeAction::from_tokens(mode, size, options.unknown_mode)?;
    let format = output_format_from_name(format)?;
    resize_bytes(image_bytes, &action, format, &options)
}

/// Resize an encoded image
///
/// # Arguments
/// * `image_bytes` - The input image file as a byte array
/// * `mode` - `-S` to scale by a factor, `-R` to fit within a square (case-insensitive)
/// * `size` - Scale factor for `-S`, box side in pixels for `-R`
/// * `format` - Output format extension, e.g. `png` or `jpg`
///
/// # Returns
/// The encoded output image, or throws an error
#[wasm_bindgen]
pub fn resize_image(
    image_bytes: &[u8],
    mode: &str,
    size: &str,
    format: &str,
) -> Result<Vec<u8>, JsError> {
    let (output_bytes, _outcome) = run(image_bytes, mode, size, format).map_err(js_error)?;
    Ok(output_bytes)
}

/// Resize an encoded image and report what happened
#[wasm_bindgen]
pub fn resize_image_with_info(
    image_bytes: &[u8],
    mode: &str,
    size: &str,
    format: &str,
) -> Result<ResizeResultJs, JsError> {
    let (output_bytes, outcome) = run(image_bytes, mode, size, format).map_err(js_error)?;

    let info_json = serde_json::to_string(&outcome_to_json(&outcome))
        .unwrap_or_else(|_| "{}".to_string());

    Ok(ResizeResultJs {
        image_bytes: output_bytes,
        info_json,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeJson {
    status: &'static str,
    original_width: u32,
    original_height: u32,
    width: u32,
    height: u32,
    summary: String,
}

fn outcome_to_json(outcome: &ResizeOutcome) -> OutcomeJson {
    let status = match outcome.status {
        ResizeStatus::Resized => "resized",
        ResizeStatus::AlreadyFits => "alreadyFits",
        ResizeStatus::CopiedThrough => "copiedThrough",
    };
    OutcomeJson {
        status,
        original_width: outcome.original.0,
        original_height: outcome.original.1,
        width: outcome.output.0,
        height: outcome.output.1,
        summary: outcome.to_string(),
    }
}

/// Result of an image resize with a JSON summary
#[wasm_bindgen]
pub struct ResizeResultJs {
    image_bytes: Vec<u8>,
    info_json: String,
}

#[wasm_bindgen]
impl ResizeResultJs {
    /// Get the encoded output image
    #[wasm_bindgen(getter)]
    pub fn image_bytes(&self) -> Vec<u8> {
        self.image_bytes.clone()
    }

    /// Get dimensions and status as JSON string
    #[wasm_bindgen(getter)]
    pub fn info_json(&self) -> String {
        self.info_json.clone()
    }
}
