//! # Numeric Formatting
//!
//! Fixed-notation rendering of real values and vectors into OpenSCAD source
//! text. The generated text feeds a syntax-sensitive parser, so the format is
//! pinned: fixed fractional precision, never scientific notation.

use config::constants::REAL_DECIMALS;
use glam::DVec3;

/// Render a real value with the pinned fractional precision.
///
/// ## Example
///
/// ```rust
/// use scadforge_shapes::format_real;
///
/// assert_eq!(format_real(5.0), "5.000000");
/// assert_eq!(format_real(-2.5), "-2.500000");
/// ```
pub fn format_real(value: f64) -> String {
    format!("{value:.prec$}", prec = REAL_DECIMALS)
}

/// Render a vector as an OpenSCAD vector literal `[X, Y, Z]`.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use scadforge_shapes::format_vec3;
///
/// assert_eq!(
///     format_vec3(DVec3::new(1.0, 2.0, 3.0)),
///     "[1.000000, 2.000000, 3.000000]"
/// );
/// ```
pub fn format_vec3(v: DVec3) -> String {
    format!(
        "[{}, {}, {}]",
        format_real(v.x),
        format_real(v.y),
        format_real(v.z)
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real_pads_trailing_zeros() {
        assert_eq!(format_real(10.0), "10.000000");
        assert_eq!(format_real(0.5), "0.500000");
    }

    #[test]
    fn test_format_real_keeps_sign() {
        assert_eq!(format_real(-3.0), "-3.000000");
    }

    #[test]
    fn test_format_real_avoids_scientific_notation() {
        assert_eq!(format_real(1_000_000.0), "1000000.000000");
        assert_eq!(format_real(0.0000001), "0.000000");
    }

    #[test]
    fn test_format_vec3_origin() {
        assert_eq!(
            format_vec3(DVec3::ZERO),
            "[0.000000, 0.000000, 0.000000]"
        );
    }
}
