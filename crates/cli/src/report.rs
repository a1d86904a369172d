//! Human-readable result line.

/// Round to two decimals the way the reference output does: correctly
/// rounded from the exact binary value, exact ties to even.
///
/// `{:.2}` formats from the exact decimal expansion, so `2.675` (stored as
/// 2.67499...) gives `2.67` and the exact tie `0.125` gives `0.12`.
pub fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

/// `{:?}` keeps one trailing zero for whole numbers (`10.0`) and prints the
/// shortest exact form otherwise (`2.83`).
pub fn format_min_distance(distance: f64) -> String {
    format!(
        "The minimum Euclidean distance between the convex polygon and the line is: {:?}",
        round2(distance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(2.828427), 2.83);
        assert_eq!(round2(4.004), 4.0);
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(-1.005), -1.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn exact_ties_round_to_even() {
        for (x, expected) in [(0.125, 0.12), (0.375, 0.38), (0.625, 0.62), (0.875, 0.88)] {
            assert_eq!(round2(x), expected, "{x}");
        }
        assert!(format_min_distance(0.125).ends_with(": 0.12"));
    }

    #[test]
    fn non_finite_passes_through() {
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert!(round2(f64::NAN).is_nan());
    }

    #[test]
    fn formats_like_the_reference_output() {
        assert_eq!(
            format_min_distance(10.0),
            "The minimum Euclidean distance between the convex polygon and the line is: 10.0"
        );
        assert!(format_min_distance(2.0f64.sqrt() * 2.0).ends_with(": 2.83"));
    }
}
