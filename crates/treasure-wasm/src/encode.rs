//! JPEG encoding WASM bindings.

use crate::types::JsDecodedImage;
use treasure_core::encode::{self, Quality};
use wasm_bindgen::prelude::*;

/// Encode an image to JPEG at a fractional quality.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - Quality in `[0, 1]`; values outside are clamped
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match the dimensions or
/// the encoder fails.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsDecodedImage, quality: f64) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_decoded(), Quality::new(quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
