use super::Point2;

/// Returns the minimum distance from point `p` to the line segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Returns the signed offset of `p` from the line through `origin` with unit
/// direction `dir`.
///
/// Positive on the right-hand side of `dir`.
#[must_use]
pub fn signed_line_offset(p: Point2, origin: Point2, dir: &super::Vector2) -> f64 {
    let v = p - origin;
    v.x * dir.y - v.y * dir.x
}
