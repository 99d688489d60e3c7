use crate::math::vec_2d::cross_2d;
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Arc, Segment};

/// A straight segment between two endpoints.
///
/// Degenerate segments (`a == b`) are representable; queries on them fall
/// out of the general formulas rather than being special-cased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: Point2,
    b: Point2,
}

fn near(p: &Point2, q: &Point2) -> bool {
    (p - q).norm() <= TOLERANCE
}

impl Line {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns the start endpoint.
    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.a
    }

    /// Returns the end endpoint.
    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.b
    }

    /// Returns the direction vector `b - a`. Not normalized.
    #[must_use]
    pub fn delta(&self) -> Vector2 {
        self.b - self.a
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Perp product of the endpoints, `b.x * a.y - b.y * a.x`.
    ///
    /// Twice the signed area of the triangle formed by the origin, `b` and
    /// `a`. Arc intersection consumes this as the constant term of the
    /// carrier line's implicit equation.
    #[must_use]
    pub fn cross_product(&self) -> f64 {
        self.b.x * self.a.y - self.b.y * self.a.x
    }

    /// Evaluates the carrier line at parameter `t`.
    ///
    /// `t = 0` is `a` and `t = 1` is `b`; values outside `[0, 1]` land
    /// beyond the endpoints.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.a + self.delta() * t
    }

    /// Returns whether `p` lies on the segment, endpoints included.
    ///
    /// Uses the distance-sum test: `p` is on the segment exactly when the
    /// detour `a -> p -> b` is no longer than the segment itself, within
    /// [`TOLERANCE`].
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let detour = (p - self.a).norm() + (p - self.b).norm();
        (detour - self.length()).abs() <= TOLERANCE
    }

    /// Returns the shortest distance from `p` to the segment.
    #[must_use]
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let d = self.delta();
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return (p - self.a).norm();
        }
        let t = ((p - self.a).dot(&d) / len_sq).clamp(0.0, 1.0);
        (p - self.point_at(t)).norm()
    }

    /// Intersects two segments.
    ///
    /// Segments sharing an endpoint (within [`TOLERANCE`]) intersect at
    /// that endpoint, parallel angles included. Otherwise the crossing of
    /// the two carrier lines is solved for both parameters, each of which
    /// must land in `[0, 1]`; the returned point is evaluated at the
    /// average of the two parameters. Parallel and collinear segments
    /// without a shared endpoint yield `None`.
    #[must_use]
    pub fn intersect_line(&self, other: &Line) -> Option<Point2> {
        if near(&self.a, &other.a) || near(&self.a, &other.b) {
            return Some(self.a);
        }
        if near(&self.b, &other.a) || near(&self.b, &other.b) {
            return Some(self.b);
        }

        let da = self.delta();
        let db = other.delta();
        let denom = cross_2d(&da, &db);
        if denom.abs() < TOLERANCE {
            return None;
        }

        let dab = other.a - self.a;
        let t = cross_2d(&dab, &db) / denom;
        let u = cross_2d(&dab, &da) / denom;

        if t < -TOLERANCE || t > 1.0 + TOLERANCE || u < -TOLERANCE || u > 1.0 + TOLERANCE {
            return None;
        }

        Some(self.point_at((t + u) / 2.0))
    }

    /// Intersects the segment with an arc.
    ///
    /// See [`Arc::intersect_line`] for the exact semantics; in particular
    /// only the arc's angular range bounds the result.
    #[must_use]
    pub fn intersect_arc(&self, arc: &Arc) -> Option<Point2> {
        arc.intersect_line(self)
    }

    /// Intersects with a segment of either kind.
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> Option<Point2> {
        match other {
            Segment::Line(line) => self.intersect_line(line),
            Segment::Arc(arc) => self.intersect_arc(arc),
        }
    }
}
