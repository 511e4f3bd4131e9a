//! Photo compression WASM bindings.
//!
//! # Functions
//!
//! - [`compress_image`] - Compress a decoded image under the 256 KiB budget
//! - [`compress_photo`] - Decode photo bytes, then compress them
//! - [`compress_image_with`] - Compress with custom settings and get a report
//!
//! # Example
//!
//! ```typescript
//! import { compress_photo, compress_image_with } from '@treasureventure/wasm';
//!
//! const upload = compress_photo(new Uint8Array(await file.arrayBuffer()));
//!
//! const report = compress_image_with(photo, { strategy: { kind: 'bisect' } });
//! console.log(`${report.outcome} at ${report.quality}`);
//! ```

use crate::types::{JsCompressionReport, JsDecodedImage};
use treasure_core::compress::{self, CompressError, CompressionConfig, ImageSizeCompressor};
use wasm_bindgen::prelude::*;

/// Compress an image to JPEG bytes with the default settings.
#[wasm_bindgen]
pub fn compress_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    compress::compress_image(&image.to_decoded()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode JPEG/PNG bytes and compress them with the default settings.
#[wasm_bindgen]
pub fn compress_photo(bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    compress::compress_photo(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress an image with custom settings.
///
/// `config` is a partial `CompressionConfig` object
/// (`{ targetKib, baselineQuality, minQuality, strategy }`); `undefined` or
/// `null` selects the defaults. An invalid config throws a `TypeError`.
#[wasm_bindgen]
pub fn compress_image_with(
    image: &JsDecodedImage,
    config: JsValue,
) -> Result<JsCompressionReport, JsValue> {
    let config = parse_config(config)?;
    let compressor = ImageSizeCompressor::new()
        .with_config(config)
        .map_err(config_error)?;

    compressor
        .compress_detailed(&image.to_decoded())
        .map(JsCompressionReport::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_config(value: JsValue) -> Result<CompressionConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(CompressionConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| js_sys::TypeError::new(&format!("Invalid compression config: {e}")).into())
}

fn config_error(error: CompressError) -> JsValue {
    js_sys::TypeError::new(&error.to_string()).into()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_compress_image() {
        let img = JsDecodedImage::new(40, 40, vec![128u8; 40 * 40 * 3]);
        let jpeg = compress_image(&img).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_compress_photo_rejects_garbage() {
        assert!(compress_photo(&[0, 1, 2]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_compress_with_default_config() {
        let img = JsDecodedImage::new(40, 40, vec![128u8; 40 * 40 * 3]);
        let report = compress_image_with(&img, JsValue::UNDEFINED).unwrap();
        assert_eq!(report.outcome(), "withinBudget");
        assert_eq!(report.attempts(), 1);
    }

    #[wasm_bindgen_test]
    fn test_compress_with_invalid_config() {
        let img = JsDecodedImage::new(4, 4, vec![0u8; 4 * 4 * 3]);
        let config = serde_wasm_bindgen::to_value(&zero_target_config()).unwrap();
        assert!(compress_image_with(&img, config).is_err());
    }

    fn zero_target_config() -> CompressionConfig {
        CompressionConfig {
            target_kib: 0,
            ..CompressionConfig::default()
        }
    }
}
