//! Compression settings.

use serde::{Deserialize, Serialize};

use super::CompressError;
use crate::encode::Quality;

/// Size budget for uploaded photos, in KiB.
pub const TARGET_SIZE_KIB: usize = 256;

/// Encode budget for [`QualityStrategy::Bisect`]. Seven halvings cover the
/// whole 1-100 quality grid.
pub const DEFAULT_BISECT_ATTEMPTS: u32 = 7;

/// How the reduced quality is chosen once the baseline is over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QualityStrategy {
    /// One proportional estimate, one re-encode.
    #[default]
    Linear,
    /// Binary search on a 0.01 quality grid, at most `max_attempts`
    /// re-encodes.
    Bisect {
        #[serde(rename = "maxAttempts", default = "default_bisect_attempts")]
        max_attempts: u32,
    },
}

fn default_bisect_attempts() -> u32 {
    DEFAULT_BISECT_ATTEMPTS
}

/// Settings for [`ImageSizeCompressor`](super::ImageSizeCompressor).
///
/// Missing fields fall back to their defaults when deserializing, so hosts
/// can pass a partial object such as `{"targetKib": 128}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressionConfig {
    /// Budget in KiB. Encodings of `len / 1024 <= target_kib` are kept.
    pub target_kib: usize,
    /// Quality of the first encode.
    pub baseline_quality: Quality,
    /// Floor for any reduced quality.
    pub min_quality: Quality,
    pub strategy: QualityStrategy,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            target_kib: TARGET_SIZE_KIB,
            baseline_quality: Quality::MAX,
            min_quality: Quality::MIN,
            strategy: QualityStrategy::Linear,
        }
    }
}

impl CompressionConfig {
    /// Default settings with the bisecting strategy.
    pub fn bisect() -> Self {
        Self {
            strategy: QualityStrategy::Bisect {
                max_attempts: DEFAULT_BISECT_ATTEMPTS,
            },
            ..Self::default()
        }
    }

    pub fn target_bytes(&self) -> usize {
        self.target_kib * 1024
    }

    /// Reject settings the compressor cannot honor.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.target_kib == 0 {
            return Err(CompressError::InvalidConfig(
                "targetKib must be greater than zero".to_string(),
            ));
        }

        for (name, quality) in [
            ("baselineQuality", self.baseline_quality),
            ("minQuality", self.min_quality),
        ] {
            let value = quality.value();
            if !(value > 0.0 && value <= 1.0) {
                return Err(CompressError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }

        if self.min_quality > self.baseline_quality {
            return Err(CompressError::InvalidConfig(format!(
                "minQuality ({}) exceeds baselineQuality ({})",
                self.min_quality, self.baseline_quality
            )));
        }

        if let QualityStrategy::Bisect { max_attempts: 0 } = self.strategy {
            return Err(CompressError::InvalidConfig(
                "maxAttempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompressionConfig::default();
        assert_eq!(config.target_kib, 256);
        assert_eq!(config.target_bytes(), 262_144);
        assert_eq!(config.baseline_quality, Quality::MAX);
        assert_eq!(config.min_quality, Quality::MIN);
        assert_eq!(config.strategy, QualityStrategy::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CompressionConfig = serde_json::from_str(r#"{"targetKib": 128}"#).unwrap();
        assert_eq!(config.target_kib, 128);
        assert_eq!(config.baseline_quality, Quality::MAX);
        assert_eq!(config.strategy, QualityStrategy::Linear);
    }

    #[test]
    fn test_strategy_json() {
        let config: CompressionConfig =
            serde_json::from_str(r#"{"strategy": {"kind": "bisect", "maxAttempts": 4}}"#).unwrap();
        assert_eq!(config.strategy, QualityStrategy::Bisect { max_attempts: 4 });

        let config: CompressionConfig =
            serde_json::from_str(r#"{"strategy": {"kind": "bisect"}}"#).unwrap();
        assert_eq!(
            config.strategy,
            QualityStrategy::Bisect {
                max_attempts: DEFAULT_BISECT_ATTEMPTS
            }
        );
    }

    #[test]
    fn test_json_roundtrip_keys() {
        let json = serde_json::to_value(CompressionConfig::bisect()).unwrap();
        assert_eq!(json["targetKib"], 256);
        assert_eq!(json["baselineQuality"], 1.0);
        assert_eq!(json["strategy"]["kind"], "bisect");
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        let mut config = CompressionConfig::default();
        config.target_kib = 0;
        assert!(matches!(
            config.validate(),
            Err(CompressError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_quality() {
        let config: CompressionConfig =
            serde_json::from_str(r#"{"baselineQuality": 1.5}"#).unwrap();
        assert!(config.validate().is_err());

        let mut config = CompressionConfig::default();
        config.min_quality = Quality::new(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = CompressionConfig::default();
        config.baseline_quality = Quality::new(0.5);
        config.min_quality = Quality::new(0.6);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = CompressionConfig::default();
        config.strategy = QualityStrategy::Bisect { max_attempts: 0 };
        assert!(config.validate().is_err());
    }
}
