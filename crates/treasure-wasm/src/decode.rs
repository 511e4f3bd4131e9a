//! Photo decoding WASM bindings.

use crate::types::JsDecodedImage;
use treasure_core::decode;
use wasm_bindgen::prelude::*;

/// Decode JPEG or PNG bytes into an upright RGB image.
///
/// EXIF orientation is applied, so a portrait phone photo comes back
/// portrait.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const photo = decode_photo(bytes);
/// console.log(`Decoded ${photo.width}x${photo.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_photo(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_photo(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
