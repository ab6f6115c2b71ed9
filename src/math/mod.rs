pub mod box_2d;
pub mod distance_2d;

pub use box_2d::Box2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Archimedes' constant (π).
pub const PI: f64 = std::f64::consts::PI;

/// The full circle constant (τ = 2π).
pub const TAU: f64 = std::f64::consts::TAU;

/// Rotates `p` counter-clockwise about the origin by `angle` radians.
#[must_use]
pub fn rotate(p: Point2, angle: f64) -> Point2 {
    let (s, c) = angle.sin_cos();
    Point2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

/// Folds `x` into the centered period `[-period/2, period/2)`.
///
/// Taking `abs` of the result maps every period onto `[0, period/2]`.
#[must_use]
pub fn sawtooth(x: f64, period: f64) -> f64 {
    let shifted = x + period * 0.5;
    let t = shifted / period;
    period * (t - t.floor()) - period * 0.5
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate(Point2::new(1.0, 0.0), PI / 2.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_preserves_length() {
        let p = rotate(Point2::new(3.0, 4.0), 1.234);
        assert_abs_diff_eq!(p.coords.norm(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn sawtooth_inside_period_is_identity() {
        assert_abs_diff_eq!(sawtooth(0.3, 2.0), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(sawtooth(-0.7, 2.0), -0.7, epsilon = 1e-12);
    }

    #[test]
    fn sawtooth_wraps_whole_periods() {
        assert_abs_diff_eq!(sawtooth(4.3, 2.0), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(sawtooth(-5.7, 2.0), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn sawtooth_half_period_maps_to_lower_edge() {
        assert_abs_diff_eq!(sawtooth(1.0, 2.0), -1.0, epsilon = 1e-12);
    }
}
