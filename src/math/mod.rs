/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linear interpolation `(1 - t) * a + t * b`, evaluated per coordinate.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    Point3::new(
        (1.0 - t) * a.x + t * b.x,
        (1.0 - t) * a.y + t * b.y,
        (1.0 - t) * a.z + t * b.z,
    )
}

/// The three vertices of an equilateral triangle inscribed in a circle of
/// radius `r` in the plane `y = height`, centered on the y-axis.
///
/// Vertices come in rotational order at 0, 120 and 240 degrees:
/// `(r, y, 0)`, `(-r/2, y, r*sqrt(3)/2)`, `(-r/2, y, -r*sqrt(3)/2)`.
#[must_use]
pub fn equilateral_ring(r: f64, height: f64) -> [Point3; 3] {
    let sqrt3 = 3.0_f64.sqrt();
    [
        Point3::new(r, height, 0.0),
        Point3::new(-r / 2.0, height, r * 0.5 * sqrt3),
        Point3::new(-r / 2.0, height, -r * 0.5 * sqrt3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_endpoints() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(-1.0, 0.0, 5.0);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 4.0, -6.0);
        let m = lerp(&a, &b, 0.5);
        assert_relative_eq!(m, Point3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn ring_is_equilateral() {
        let r = 2.0;
        let [v0, v1, v2] = equilateral_ring(r, 1.5);
        let side = r * 3.0_f64.sqrt();
        assert_relative_eq!((v1 - v0).norm(), side, epsilon = TOLERANCE);
        assert_relative_eq!((v2 - v1).norm(), side, epsilon = TOLERANCE);
        assert_relative_eq!((v0 - v2).norm(), side, epsilon = TOLERANCE);
    }

    #[test]
    fn ring_lies_on_circle_at_height() {
        for v in equilateral_ring(0.75, -3.0) {
            assert!((v.y + 3.0).abs() < TOLERANCE);
            assert!((v.x.hypot(v.z) - 0.75).abs() < TOLERANCE);
        }
    }

    #[test]
    fn ring_starts_on_positive_x_axis() {
        let [v0, v1, _] = equilateral_ring(1.0, 0.0);
        assert_eq!(v0, Point3::new(1.0, 0.0, 0.0));
        assert!(v1.z > 0.0);
    }
}
