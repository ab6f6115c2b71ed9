//! Involute of a circle.
//!
//! The involute is the curve traced by the end of a taut string unwound
//! from a base circle. Its parameter `theta` is the unwound angle.

use crate::math::Point2;

/// Returns the point on the involute of the circle of radius `r` at
/// parameter `theta`.
///
/// x = r(cos θ + θ·sin θ)
/// y = r(sin θ − θ·cos θ)
#[must_use]
pub fn point(r: f64, theta: f64) -> Point2 {
    let (s, c) = theta.sin_cos();
    Point2::new(r * (c + theta * s), r * (s - theta * c))
}

/// Returns the involute parameter at which the curve reaches radial
/// distance `d` from the centre: θ = √((d/r)² − 1).
///
/// Only defined for `d >= r`; callers clamp with `max(r, d)` first.
#[must_use]
pub fn angle(r: f64, d: f64) -> f64 {
    let x = d / r;
    (x * x - 1.0).sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn angle_at_base_circle_is_zero() {
        assert_abs_diff_eq!(angle(7.5, 7.5), 0.0);
    }

    #[test]
    fn angle_at_twice_base_radius() {
        assert_abs_diff_eq!(angle(2.0, 4.0), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn point_starts_on_base_circle() {
        let p = point(3.0, 0.0);
        assert_abs_diff_eq!(p.x, 3.0);
        assert_abs_diff_eq!(p.y, 0.0);
    }

    #[test]
    fn angle_inverts_point_radius() {
        let r = 5.0;
        for d in [5.0, 5.5, 6.25, 9.0] {
            let p = point(r, angle(r, d));
            assert_abs_diff_eq!(p.coords.norm(), d, epsilon = 1e-12);
        }
    }

    #[test]
    fn curve_unwinds_counter_clockwise() {
        let p = point(1.0, 0.5);
        assert!(p.y > 0.0);
    }
}
