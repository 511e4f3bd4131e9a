//! JPEG encoding.
//!
//! This module provides:
//! - [`Quality`], the fractional quality factor used by the compressor
//! - the [`Encoder`] trait, the seam between compression policy and codec
//! - [`ImageJpegEncoder`], the default codec backed by the `image` crate
//!
//! All operations are synchronous and pure.
//!
//! # Examples
//!
//! ```ignore
//! use treasure_core::decode::DecodedImage;
//! use treasure_core::encode::{encode_jpeg, Quality};
//!
//! let image = DecodedImage::solid(100, 100, [128, 128, 128]);
//! let jpeg_bytes = encode_jpeg(&image, Quality::new(0.9))?;
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;
mod quality;

#[cfg(test)]
pub(crate) use jpeg::gradient;
pub use jpeg::{encode_jpeg, EncodeError, Encoder, ImageJpegEncoder};
pub use quality::Quality;
