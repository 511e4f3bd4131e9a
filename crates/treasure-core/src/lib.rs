//! Treasureventure Core - photo compression and launch state
//!
//! This crate holds the non-UI logic of the Treasureventure scavenger hunt:
//! decoding picked photos, compressing them under the upload budget, and
//! remembering whether onboarding has already been shown.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod settings;

pub use compress::{
    compress_image, compress_photo, CompressError, CompressionConfig, ImageSizeCompressor,
    QualityStrategy,
};
pub use decode::{decode_photo, DecodeError, DecodedImage};
pub use encode::{encode_jpeg, EncodeError, Encoder, Quality};
pub use settings::{FirstLaunchFlag, KeyValueStore, StoreError};
