use crate::math::Point2;

use super::segment::Segment;

/// A self-intersection of a path, keyed by the segment index pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathIntersection {
    /// Index of the earlier segment.
    pub first: usize,
    /// Index of the later segment, always greater than `first`.
    pub second: usize,
    /// Where the two segments meet.
    pub point: Point2,
}

/// An ordered trail of line and arc segments.
///
/// Consecutive segments are assumed to connect end to start; nothing is
/// validated at construction. A closed path additionally connects its last
/// segment back to its first.
#[derive(Debug, Clone)]
pub struct Path {
    pub segments: Vec<Segment>,
    pub is_closed: bool,
}

impl Path {
    /// Creates a path from its segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>, is_closed: bool) -> Self {
        Self {
            segments,
            is_closed,
        }
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Finds all intersections between non-adjacent segments.
    ///
    /// Consecutive segments connect by construction and are not tested, nor
    /// is the first/last pair of a closed path. Every other intersecting
    /// pair is reported, shared endpoints included. Results come out
    /// ordered by index pair.
    #[must_use]
    pub fn self_intersections(&self) -> Vec<PathIntersection> {
        let seg_count = self.segments.len();
        let mut results = Vec::new();
        if seg_count < 3 {
            return results;
        }

        for i in 0..seg_count {
            for j in (i + 2)..seg_count {
                // The closing pair of a closed path is adjacent too.
                if self.is_closed && i == 0 && j == seg_count - 1 {
                    continue;
                }
                if let Some(point) = self.segments[i].intersect(&self.segments[j]) {
                    results.push(PathIntersection {
                        first: i,
                        second: j,
                        point,
                    });
                }
            }
        }

        results
    }

    /// Returns the first segment hit by `probe`, in path order, along with
    /// the intersection point.
    #[must_use]
    pub fn first_intersection(&self, probe: &Segment) -> Option<(usize, Point2)> {
        self.segments
            .iter()
            .enumerate()
            .find_map(|(i, seg)| seg.intersect(probe).map(|p| (i, p)))
    }
}
