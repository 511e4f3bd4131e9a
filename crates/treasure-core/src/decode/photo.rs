//! Decoding of picked photos (JPEG or PNG) into upright RGB buffers.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};

use super::{DecodeError, DecodedImage, Orientation};

/// Decode photo bytes into an upright RGB image.
///
/// The EXIF orientation is baked into the pixels because the JPEG produced
/// by the compressor carries no EXIF block of its own.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for an empty slice,
/// `DecodeError::UnsupportedFormat` when the bytes are neither JPEG nor PNG,
/// and `DecodeError::Corrupted` when decoding fails part way.
pub fn decode_photo(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let format = match reader.format() {
        Some(format @ (ImageFormat::Jpeg | ImageFormat::Png)) => format,
        _ => return Err(DecodeError::UnsupportedFormat),
    };

    let img = reader
        .decode()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    let orientation = read_orientation(bytes);
    tracing::debug!(
        ?format,
        ?orientation,
        width = img.width(),
        height = img.height(),
        "decoded photo"
    );

    let upright = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(upright.into_rgb8()))
}

/// Read the EXIF orientation tag.
///
/// Photos without EXIF, or with an unreadable block, are treated as
/// `Orientation::Normal`.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
