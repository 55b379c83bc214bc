//! Shared numerical primitives.

use std::f64::consts::PI;

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Area of a circle with the given `diameter`.
#[inline]
#[must_use]
pub fn circle_area(diameter: Scalar) -> Scalar {
    PI * diameter * diameter / 4.0
}

/// Diameter of a circle enclosing `area`.
///
/// Negative areas yield `NaN`.
#[inline]
#[must_use]
pub fn circle_diameter(area: Scalar) -> Scalar {
    2.0 * (area / PI).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn unit_diameter_area() {
        assert_relative_eq!(circle_area(1.0), PI / 4.0, epsilon = 1.0e-15);
    }

    #[test]
    fn diameter_inverts_area() {
        let d = 1.38e-3;
        assert_relative_eq!(circle_diameter(circle_area(d)), d, max_relative = 1.0e-12);
    }

    #[test]
    fn negative_area_is_nan() {
        assert!(circle_diameter(-1.0).is_nan());
    }
}
