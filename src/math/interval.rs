/// A closed scalar range `[start, end]`.
///
/// Intervals represent arc angular sweeps and their overlaps. An interval
/// with `start > end` is *invalid* (empty); invalid intervals come out of
/// [`Interval::intersection`] and act as the sentinel for "no overlap".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Start of the range.
    pub start: f64,
    /// End of the range.
    pub end: f64,
}

impl Interval {
    /// Creates a new interval.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns whether `t` lies in `[start, end]`, endpoints included.
    ///
    /// Always false for an invalid interval.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Returns whether the interval is non-empty (`start <= end`).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Returns the overlap of two intervals.
    ///
    /// The result may be invalid (empty); callers must check
    /// [`Interval::is_valid`] before trusting it as a real range.
    #[must_use]
    pub fn intersection(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Returns whether the two intervals overlap at all, endpoints included.
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.intersection(other).is_valid()
    }
}
