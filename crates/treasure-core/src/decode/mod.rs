//! Photo decoding for the compression pipeline.
//!
//! Photos arrive from an image picker or upload control as encoded bytes.
//! This module turns them into [`DecodedImage`] buffers:
//! - JPEG and PNG are accepted, anything else is rejected
//! - EXIF orientation is applied so the pixels are upright
//! - Output is always RGB8, row-major
//!
//! # Examples
//!
//! ```ignore
//! use treasure_core::decode::decode_photo;
//!
//! let bytes = std::fs::read("clue.jpg")?;
//! let photo = decode_photo(&bytes)?;
//! println!("Decoded {}x{} photo", photo.width, photo.height);
//! ```

mod photo;
mod types;

pub use photo::{decode_photo, read_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
