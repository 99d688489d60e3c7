use super::{Point2, Vector2};

/// 2D scalar cross product: `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` points to the left of `a`, zero when the vectors are
/// parallel.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Component-wise strict comparison: `a.x < b.x && a.y < b.y`.
///
/// This is a partial order, not a total one: two points can each fail to
/// be less than the other. It must not be used as a sort comparator.
#[must_use]
pub fn strictly_less(a: &Point2, b: &Point2) -> bool {
    a.x < b.x && a.y < b.y
}
