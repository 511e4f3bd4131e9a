//! The size-bounded JPEG compressor.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{estimate_quality, CompressError, CompressionConfig, QualityStrategy};
use crate::decode::{decode_photo, DecodedImage};
use crate::encode::{Encoder, ImageJpegEncoder, Quality};

/// How the returned bytes were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// The baseline encoding already fit the budget.
    WithinBudget,
    /// A lower-quality encoding replaced the baseline.
    Reduced,
    /// Re-encoding failed or did not shrink the output, so the baseline
    /// bytes were kept.
    FallbackToBaseline,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::WithinBudget => "withinBudget",
            Outcome::Reduced => "reduced",
            Outcome::FallbackToBaseline => "fallbackToBaseline",
        }
    }
}

/// Compressed bytes plus how they were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    /// JPEG bytes handed to the caller.
    pub bytes: Vec<u8>,
    /// Quality the returned bytes were encoded at.
    pub quality: Quality,
    /// Length of the baseline (first) encoding.
    pub baseline_len: usize,
    pub outcome: Outcome,
    /// Number of encoder calls, baseline included.
    pub attempts: u32,
}

impl Compressed {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Re-encodes photos so they fit an upload budget (256 KiB by default).
///
/// The baseline encode runs at maximum quality. If that is over budget, a
/// reduced quality is picked according to the configured
/// [`QualityStrategy`]. Only the baseline encode can fail the call; any
/// later failure falls back to the baseline bytes.
#[derive(Debug, Clone)]
pub struct ImageSizeCompressor<E = ImageJpegEncoder> {
    encoder: E,
    config: CompressionConfig,
}

impl ImageSizeCompressor {
    /// Compressor with the default budget and the `image` crate's JPEG codec.
    pub fn new() -> Self {
        Self {
            encoder: ImageJpegEncoder,
            config: CompressionConfig::default(),
        }
    }
}

impl Default for ImageSizeCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoder> ImageSizeCompressor<E> {
    /// Compressor with the default budget and a custom encoder.
    pub fn with_encoder(encoder: E) -> Self {
        Self {
            encoder,
            config: CompressionConfig::default(),
        }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: CompressionConfig) -> Result<Self, CompressError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Compress an image, returning only the bytes.
    ///
    /// # Errors
    ///
    /// Returns `CompressError::Encode` when the baseline encode fails and
    /// `CompressError::EmptyOutput` when it yields no bytes.
    pub fn compress(&self, image: &DecodedImage) -> Result<Vec<u8>, CompressError> {
        self.compress_detailed(image).map(|compressed| compressed.bytes)
    }

    /// Compress an image and report how the result was reached.
    pub fn compress_detailed(&self, image: &DecodedImage) -> Result<Compressed, CompressError> {
        let baseline_quality = self.config.baseline_quality;
        let baseline = self.encoder.encode(image, baseline_quality)?;
        if baseline.is_empty() {
            return Err(CompressError::EmptyOutput);
        }

        let size_kib = baseline.len() / 1024;
        if size_kib <= self.config.target_kib {
            debug!(size_kib, target_kib = self.config.target_kib, "photo within budget");
            return Ok(Compressed {
                baseline_len: baseline.len(),
                bytes: baseline,
                quality: baseline_quality,
                outcome: Outcome::WithinBudget,
                attempts: 1,
            });
        }

        let compressed = match self.config.strategy {
            QualityStrategy::Linear => self.reduce_linear(image, baseline, size_kib),
            QualityStrategy::Bisect { max_attempts } => {
                self.reduce_bisect(image, baseline, max_attempts)
            }
        };

        debug!(
            baseline_len = compressed.baseline_len,
            len = compressed.len(),
            quality = %compressed.quality,
            outcome = compressed.outcome.as_str(),
            attempts = compressed.attempts,
            "compressed photo"
        );
        Ok(compressed)
    }

    /// Proportional estimate clamped into `[min_quality, baseline_quality]`.
    pub fn reduced_quality(&self, size_kib: usize) -> Quality {
        let estimate = estimate_quality(size_kib, self.config.target_kib);
        let min = self.config.min_quality.value();
        let max = self.config.baseline_quality.value();
        Quality::new(estimate.clamp(min, max))
    }

    fn reduce_linear(&self, image: &DecodedImage, baseline: Vec<u8>, size_kib: usize) -> Compressed {
        let quality = self.reduced_quality(size_kib);
        debug!(size_kib, %quality, "re-encoding over-budget photo");

        match self.encoder.encode(image, quality) {
            Ok(bytes) if !bytes.is_empty() && bytes.len() <= baseline.len() => Compressed {
                baseline_len: baseline.len(),
                bytes,
                quality,
                outcome: Outcome::Reduced,
                attempts: 2,
            },
            Ok(bytes) => {
                warn!(
                    len = bytes.len(),
                    baseline_len = baseline.len(),
                    %quality,
                    "reduced encoding did not shrink the photo, keeping baseline"
                );
                self.fallback(baseline, 2)
            }
            Err(error) => {
                warn!(%error, %quality, "reduced encoding failed, keeping baseline");
                self.fallback(baseline, 2)
            }
        }
    }

    /// Search the 0.01 grid for the highest quality whose encoding fits in
    /// `target_bytes`. Candidates lie in `[min_quality, baseline_quality)`
    /// since the baseline is known not to fit.
    fn reduce_bisect(&self, image: &DecodedImage, baseline: Vec<u8>, max_attempts: u32) -> Compressed {
        let limit = self.config.target_bytes();
        let mut low = percent(self.config.min_quality);
        let mut high = percent(self.config.baseline_quality).saturating_sub(1);

        let mut best: Option<(Quality, Vec<u8>)> = None;
        let mut smallest: Option<(Quality, Vec<u8>)> = None;
        let mut tries = 0;

        while low <= high && tries < max_attempts {
            let mid = low + (high - low) / 2;
            let quality = Quality::new(f64::from(mid) / 100.0);
            tries += 1;

            let bytes = match self.encoder.encode(image, quality) {
                Ok(bytes) if !bytes.is_empty() => bytes,
                Ok(_) => {
                    warn!(%quality, "candidate encoding was empty, stopping search");
                    break;
                }
                Err(error) => {
                    warn!(%error, %quality, "candidate encoding failed, stopping search");
                    break;
                }
            };
            trace!(%quality, len = bytes.len(), limit, "bisect step");

            if bytes.len() <= limit {
                low = mid + 1;
                best = Some((quality, bytes));
            } else {
                if smallest.as_ref().map_or(true, |(_, s)| bytes.len() < s.len()) {
                    smallest = Some((quality, bytes));
                }
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }

        let attempts = tries + 1;
        match best.or(smallest) {
            Some((quality, bytes)) if bytes.len() <= baseline.len() => Compressed {
                baseline_len: baseline.len(),
                bytes,
                quality,
                outcome: Outcome::Reduced,
                attempts,
            },
            _ => self.fallback(baseline, attempts),
        }
    }

    fn fallback(&self, baseline: Vec<u8>, attempts: u32) -> Compressed {
        Compressed {
            baseline_len: baseline.len(),
            bytes: baseline,
            quality: self.config.baseline_quality,
            outcome: Outcome::FallbackToBaseline,
            attempts,
        }
    }
}

fn percent(quality: Quality) -> u32 {
    (quality.value() * 100.0).round() as u32
}

/// Compress an image with the default settings.
pub fn compress_image(image: &DecodedImage) -> Result<Vec<u8>, CompressError> {
    ImageSizeCompressor::new().compress(image)
}

/// Decode photo bytes, then compress with the default settings.
pub fn compress_photo(bytes: &[u8]) -> Result<Vec<u8>, CompressError> {
    let image = decode_photo(bytes)?;
    compress_image(&image)
}
