mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::math::Point2;

/// Either of the two concrete segment kinds.
///
/// The set of kinds is closed: every pairwise operation dispatches through
/// an exhaustive match, so adding a kind forces every algorithm to handle
/// it at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// A straight segment between two endpoints.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl Segment {
    /// Intersects two segments of any concrete kinds.
    ///
    /// Resolves the four pairings and delegates to the matching pairwise
    /// algorithm. Line-arc and arc-line run the same computation.
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> Option<Point2> {
        match (self, other) {
            (Segment::Line(a), Segment::Line(b)) => a.intersect_line(b),
            (Segment::Line(a), Segment::Arc(b)) => a.intersect_arc(b),
            (Segment::Arc(a), Segment::Line(b)) => a.intersect_line(b),
            (Segment::Arc(a), Segment::Arc(b)) => a.intersect_arc(b),
        }
    }

    /// Returns the segment's length.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(line) => line.length(),
            Segment::Arc(arc) => arc.length(),
        }
    }

    /// Returns whether `p` lies on the segment.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        match self {
            Segment::Line(line) => line.contains_point(p),
            Segment::Arc(arc) => arc.contains_point(p),
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Segment::Arc(arc)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::math::TOLERANCE;

    fn assert_point_near(p: &Point2, x: f64, y: f64) {
        assert!(
            (p - Point2::new(x, y)).norm() < 1e-9,
            "point {p:?} not near ({x}, {y})"
        );
    }

    // ── dispatch ──

    #[test]
    fn line_line_dispatch_matches_direct_call() {
        let a = Line::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = Line::new(Point2::new(1.0, 0.0), Point2::new(0.0, 1.0));

        let via_enum = Segment::from(a).intersect(&Segment::from(b));
        assert_eq!(via_enum, a.intersect_line(&b));
        assert_point_near(&via_enum.unwrap(), 0.5, 0.5);
    }

    #[test]
    fn line_arc_dispatch_matches_direct_call() {
        let line = Line::new(Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0));
        let arc = Arc::new(Point2::new(0.0, 0.0), 1.0, 0.0, PI).unwrap();

        let via_enum = Segment::from(line).intersect(&Segment::from(arc));
        assert_eq!(via_enum, line.intersect_arc(&arc));
        assert_point_near(&via_enum.unwrap(), 1.0, 0.0);
    }

    #[test]
    fn arc_line_dispatch_is_symmetric() {
        let line = Line::new(Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0));
        let arc = Arc::new(Point2::new(0.0, 0.0), 1.0, 0.0, PI).unwrap();

        let line_first = Segment::from(line).intersect(&Segment::from(arc));
        let arc_first = Segment::from(arc).intersect(&Segment::from(line));
        assert_eq!(line_first, arc_first);
    }

    #[test]
    fn arc_arc_dispatch_matches_direct_call() {
        let a = Arc::new(Point2::new(0.0, 0.0), 1.0, -PI, 2.0 * PI).unwrap();
        let b = Arc::new(Point2::new(1.0, 0.0), 1.0, -PI, 2.0 * PI).unwrap();

        let via_enum = Segment::from(a).intersect(&Segment::from(b));
        assert_eq!(via_enum, a.intersect_arc(&b));
        assert!(via_enum.is_some());
    }

    // ── delegated queries ──

    #[test]
    fn length_dispatches_per_kind() {
        let line = Segment::from(Line::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)));
        let arc = Segment::from(Arc::new(Point2::new(0.0, 0.0), 2.0, 0.0, PI).unwrap());

        assert!((line.length() - 5.0).abs() < TOLERANCE);
        assert!((arc.length() - 2.0 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn contains_point_dispatches_per_kind() {
        let line = Segment::from(Line::new(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)));
        let arc = Segment::from(Arc::new(Point2::new(0.0, 0.0), 1.0, 0.0, PI).unwrap());

        assert!(line.contains_point(&Point2::new(1.0, 0.0)));
        assert!(!line.contains_point(&Point2::new(1.0, 0.5)));
        assert!(arc.contains_point(&Point2::new(0.0, 1.0)));
        assert!(!arc.contains_point(&Point2::new(0.0, -1.0)));
    }
}
