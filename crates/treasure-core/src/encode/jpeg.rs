//! JPEG encoding backed by the `image` crate.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use super::Quality;
use crate::decode::DecodedImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Something that turns a decoded image into bytes at a given quality.
///
/// The compressor is generic over this so encoders can be swapped, and so
/// tests can inject faults at a chosen quality.
pub trait Encoder {
    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        (**self).encode(image, quality)
    }
}

/// Baseline JPEG encoder from the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegEncoder;

impl Encoder for ImageJpegEncoder {
    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError> {
        image.validate()?;

        let mut buffer = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut buffer, quality.to_jpeg_scale())
            .write_image(
                &image.pixels,
                image.width,
                image.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

        Ok(buffer.into_inner())
    }
}

/// Encode a decoded image to JPEG bytes.
///
/// # Errors
///
/// Fails when the image has a zero dimension, when its pixel buffer does
/// not hold exactly `width * height * 3` bytes, or when the codec fails.
pub fn encode_jpeg(image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, EncodeError> {
    ImageJpegEncoder.encode(image, quality)
}

#[cfg(test)]
pub(crate) fn gradient(width: u32, height: u32) -> DecodedImage {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width) as u8);
            pixels.push((y * 255 / height) as u8);
            pixels.push(((x ^ y) & 0xFF) as u8);
        }
    }
    DecodedImage::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_jpeg_markers(bytes: &[u8]) {
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let image = DecodedImage::solid(100, 100, [128, 128, 128]);
        let bytes = encode_jpeg(&image, Quality::MAX).unwrap();
        assert_jpeg_markers(&bytes);
    }

    #[test]
    fn test_lower_quality_is_smaller() {
        let image = gradient(128, 128);

        let low = encode_jpeg(&image, Quality::new(0.2)).unwrap();
        let high = encode_jpeg(&image, Quality::MAX).unwrap();

        assert!(low.len() < high.len(), "low={} high={}", low.len(), high.len());
    }

    #[test]
    fn test_zero_quality_still_encodes() {
        let image = DecodedImage::solid(8, 8, [0, 0, 0]);
        let bytes = encode_jpeg(&image, Quality::new(0.0)).unwrap();
        assert_jpeg_markers(&bytes);
    }

    #[test]
    fn test_invalid_pixel_data() {
        let image = DecodedImage {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 3],
        };
        let result = encode_jpeg(&image, Quality::MAX);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_zero_dimensions() {
        let image = DecodedImage {
            width: 100,
            height: 0,
            pixels: vec![],
        };
        let result = encode_jpeg(&image, Quality::MAX);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encoder_by_reference() {
        fn encode_with<E: Encoder>(encoder: E) -> usize {
            let image = DecodedImage::solid(4, 4, [9, 9, 9]);
            encoder.encode(&image, Quality::MAX).unwrap().len()
        }
        let encoder = ImageJpegEncoder;
        assert!(encode_with(&encoder) > 0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
