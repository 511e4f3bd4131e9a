//! Size-bounded photo compression.
//!
//! Photos are uploaded as JPEG and must fit a fixed budget (256 KiB). The
//! pipeline is:
//! 1. Encode at maximum quality. Failure here fails the whole call.
//! 2. If the result is within budget (whole KiB), return it untouched.
//! 3. Otherwise pick a reduced quality and re-encode once. Failure here is
//!    absorbed and the maximum-quality bytes are returned.
//!
//! The default [`QualityStrategy::Linear`] assumes size scales linearly with
//! quality, so the output can still land slightly over budget.
//! [`QualityStrategy::Bisect`] spends a few more encodes to stay under it.
//!
//! # Examples
//!
//! ```ignore
//! use treasure_core::compress::ImageSizeCompressor;
//! use treasure_core::decode::decode_photo;
//!
//! let photo = decode_photo(&std::fs::read("clue.jpg")?)?;
//! let jpeg = ImageSizeCompressor::new().compress(&photo)?;
//! assert!(jpeg.len() / 1024 <= 300);
//! ```

mod compressor;
mod config;
mod estimate;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

pub use compressor::{compress_image, compress_photo, Compressed, ImageSizeCompressor, Outcome};
pub use config::{CompressionConfig, QualityStrategy, DEFAULT_BISECT_ATTEMPTS, TARGET_SIZE_KIB};
pub use estimate::estimate_quality;

/// Errors surfaced by the compressor.
///
/// Failures of the reduced-quality encode never appear here.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Could not decode photo: {0}")]
    Decode(#[from] DecodeError),

    /// The maximum-quality encode failed, so there is nothing to return.
    #[error("Baseline encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// The maximum-quality encode succeeded but produced no bytes.
    #[error("Baseline encoding produced no bytes")]
    EmptyOutput,

    #[error("Invalid compression config: {0}")]
    InvalidConfig(String),
}
