//! sRGB transfer function (IEC 61966-2-1).
//!
//! ```text
//! to_linear:  V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
//!             V <= 0.04045 → V / 12.92
//!
//! to_encoded: L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
//!             L <= 0.0031308 → L × 12.92
//! ```

/// Convert a normalized sRGB channel to linear light.
pub fn to_linear(encoded: f64) -> f64 {
    if encoded > 0.04045 {
        ((encoded + 0.055) / 1.055).powf(2.4)
    } else {
        encoded / 12.92
    }
}

/// Convert linear light to a normalized sRGB channel.
pub fn to_encoded(linear: f64) -> f64 {
    if linear > 0.0031308 {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_srgb_roundtrip_preserves_values() {
        for &v in &[0.0, 0.001, 0.01, 0.1, 0.5, 0.9, 1.0] {
            let back = to_encoded(to_linear(v));
            assert!((v - back).abs() < EPSILON, "roundtrip failed for {v}: {back}");
        }
    }

    #[test]
    fn test_srgb_linearize_known_values() {
        assert!(to_linear(0.0).abs() < EPSILON);
        assert!((to_linear(1.0) - 1.0).abs() < EPSILON);
        // Mid-gray sRGB ≈ 0.5 encodes ~0.214 linear
        assert!((to_linear(0.5) - 0.214041).abs() < 0.001);
    }

    #[test]
    fn test_srgb_linear_segment_below_threshold() {
        assert!((to_linear(0.02) - 0.02 / 12.92).abs() < EPSILON);
        assert!((to_encoded(0.001) - 0.01292).abs() < EPSILON);
    }

    #[test]
    fn test_srgb_breakpoints() {
        // The two published thresholds are not exact inverses of each other.
        assert!((to_encoded(0.0031308) - 0.0031308 * 12.92).abs() < EPSILON);
        assert!((to_linear(0.04045) - 0.04045 / 12.92).abs() < EPSILON);
        let back = to_encoded(to_linear(0.04045));
        assert!((back - 0.04045).abs() < 1e-6, "breakpoint roundtrip: {back}");
    }
}
