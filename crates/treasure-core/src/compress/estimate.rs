//! Proportional quality estimate.

/// Estimate the quality that brings an encoding of `size_kib` down to
/// `target_kib`, assuming size scales linearly with quality.
///
/// The ratio is truncated (not rounded) to two decimals:
/// `floor((target_kib / size_kib) * 100) / 100`. The result is unclamped:
/// it is above 1 for sizes under the target and reaches 0 once the size is
/// more than a hundred times the target.
///
/// `size_kib` of zero yields `f64::INFINITY`.
pub fn estimate_quality(size_kib: usize, target_kib: usize) -> f64 {
    if size_kib == 0 {
        return f64::INFINITY;
    }
    // Integer division is an exact floor, which keeps ratios like 256/320
    // from landing a hair under 0.80.
    let percent = target_kib.saturating_mul(100) / size_kib;
    percent as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        // 512,000 bytes -> 500 KiB -> 256/500 = 0.512 -> 0.51
        assert_eq!(estimate_quality(512_000 / 1024, 256), 0.51);
    }

    #[test]
    fn test_exact_ratios() {
        assert_eq!(estimate_quality(512, 256), 0.5);
        assert_eq!(estimate_quality(320, 256), 0.8);
        assert_eq!(estimate_quality(640, 256), 0.4);
        assert_eq!(estimate_quality(1024, 256), 0.25);
    }

    #[test]
    fn test_truncates_rather_than_rounds() {
        // 256/257 = 0.99610...
        assert_eq!(estimate_quality(257, 256), 0.99);
        // 256/300 = 0.85333...
        assert_eq!(estimate_quality(300, 256), 0.85);
        // 256/383 = 0.66840...
        assert_eq!(estimate_quality(383, 256), 0.66);
    }

    #[test]
    fn test_huge_images_reach_zero() {
        assert_eq!(estimate_quality(25_600, 256), 0.01);
        assert_eq!(estimate_quality(25_601, 256), 0.0);
        assert_eq!(estimate_quality(1_000_000, 256), 0.0);
    }

    #[test]
    fn test_zero_size() {
        assert!(estimate_quality(0, 256).is_infinite());
    }
}
