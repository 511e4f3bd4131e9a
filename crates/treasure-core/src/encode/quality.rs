//! JPEG quality factor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Encoder quality as a fraction in `[0, 1]`.
///
/// The compressor reasons in fractions (`0.51`), while the JPEG codec takes
/// an integer on a 1-100 scale. [`Quality::to_jpeg_scale`] is the only place
/// the two meet.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(f64);

impl Quality {
    /// Highest quality, the baseline for every compression.
    pub const MAX: Quality = Quality(1.0);

    /// Lowest quality the compressor will ever request.
    pub const MIN: Quality = Quality(0.01);

    /// Create a quality factor, clamping into `[0, 1]`. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Quality(0.0);
        }
        Quality(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Map onto the JPEG encoder's 1-100 scale.
    ///
    /// A fraction of 0 still encodes at 1, the lowest setting the codec
    /// accepts.
    pub fn to_jpeg_scale(self) -> u8 {
        let scaled = (self.0 * 100.0).round().clamp(1.0, 100.0);
        scaled as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Quality::MAX
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
