//! Utility functions for the statistics modules.

/// Denominator used for a percentage over `total` items.
///
/// A generation whose population has died out has a total of 0. Its
/// percentages are computed against 1 instead, so they all read `0.0`
/// rather than NaN. Only the denominator is substituted; the reported
/// total stays 0.
#[inline]
pub fn safe_denominator(total: usize) -> f64 {
    if total == 0 { 1.0 } else { total as f64 }
}

/// `100 * count / total`, guarded by [`safe_denominator`].
#[inline]
pub fn percentage(count: usize, total: usize) -> f64 {
    100.0 * count as f64 / safe_denominator(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_denominator() {
        assert_eq!(safe_denominator(0), 1.0);
        assert_eq!(safe_denominator(1), 1.0);
        assert_eq!(safe_denominator(250), 250.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(4, 4), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
        assert!(!percentage(0, 0).is_nan());
    }
}
