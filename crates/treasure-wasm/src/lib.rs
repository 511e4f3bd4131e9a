//! Treasureventure WASM - WebAssembly bindings for Treasureventure
//!
//! This crate exposes the treasure-core functionality to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images and compression reports
//! - `decode` - Photo decoding (JPEG/PNG with EXIF orientation)
//! - `encode` - JPEG encoding at a fractional quality
//! - `compress` - Size-bounded compression for uploads
//! - `settings` - First-launch flag backed by `localStorage`
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_photo, is_first_time } from '@treasureventure/wasm';
//!
//! await init();
//!
//! const upload = compress_photo(new Uint8Array(await file.arrayBuffer()));
//! console.log(`Uploading ${upload.byteLength} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod encode;
mod settings;
mod types;

pub use compress::{compress_image, compress_image_with, compress_photo};
pub use decode::decode_photo;
pub use encode::encode_jpeg;
pub use settings::{complete_onboarding, is_first_time, set_first_time, LocalStorageStore};
pub use types::{JsCompressionReport, JsDecodedImage};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
