//! WASM-compatible wrapper types.
//!
//! JavaScript-friendly types wrapping the core types, handling conversion
//! between Rust and JavaScript data representations.

use treasure_core::compress::{Compressed, Outcome};
use treasure_core::decode::DecodedImage;
use wasm_bindgen::prelude::*;

/// A decoded photo wrapper for JavaScript.
///
/// The pixel data stays in WASM memory; `pixels()` copies it out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create an image from RGB pixel data (3 bytes per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// RGB pixel data as a `Uint8Array` copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Core view of this image. Clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Result of `compress_image_with`: the JPEG bytes and how they were chosen.
#[wasm_bindgen]
pub struct JsCompressionReport {
    bytes: Vec<u8>,
    quality: f64,
    baseline_length: usize,
    outcome: Outcome,
    attempts: u32,
}

#[wasm_bindgen]
impl JsCompressionReport {
    /// JPEG bytes as a `Uint8Array` copy.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// Length of the maximum-quality encoding.
    #[wasm_bindgen(getter, js_name = baselineLength)]
    pub fn baseline_length(&self) -> usize {
        self.baseline_length
    }

    /// `"withinBudget"`, `"reduced"` or `"fallbackToBaseline"`.
    #[wasm_bindgen(getter)]
    pub fn outcome(&self) -> String {
        self.outcome.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl From<Compressed> for JsCompressionReport {
    fn from(compressed: Compressed) -> Self {
        Self {
            quality: compressed.quality.value(),
            baseline_length: compressed.baseline_len,
            outcome: compressed.outcome,
            attempts: compressed.attempts,
            bytes: compressed.bytes,
        }
    }
}
