use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{GeometryError, Result};
use crate::math::vec_2d::cross_2d;
use crate::math::{Interval, Point2, Vector2, TOLERANCE};

use super::{Line, Segment};

/// A circular arc, stored as center, radius, start angle and signed sweep.
///
/// Angles are in radians. The swept range is the ascending interval between
/// `start_angle` and `start_angle + sweep`, so a negative sweep covers the
/// same set of angles as its positive mirror. Angles are kept as given and
/// never reduced modulo 2π; range tests shift candidates instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc {
    /// Creates an arc from its center, radius, start angle and sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the radius is negative.
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeometryError::Degenerate(
                "arc radius must be non-negative".to_string(),
            ));
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Creates an arc from its chord endpoints and a bulge factor.
    ///
    /// Bulge convention: `bulge = tan(sweep / 4)`.
    /// - `bulge > 0`: counter-clockwise arc
    /// - `bulge < 0`: clockwise arc
    /// - `|bulge| = 1`: semicircle
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the chord endpoints
    /// coincide or the bulge is near zero, since no finite circle fits
    /// either configuration.
    pub fn from_bulge(start: Point2, end: Point2, bulge: f64) -> Result<Self> {
        let chord = end - start;
        let chord_len = chord.norm();
        if chord_len < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "bulge arc requires distinct chord endpoints".to_string(),
            ));
        }
        if bulge.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "zero bulge describes a straight segment, not an arc".to_string(),
            ));
        }

        // Signed distance from chord midpoint to center, as a fraction of
        // the half-chord.
        let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
        let mid = Point2::new((start.x + end.x) * 0.5, (start.y + end.y) * 0.5);
        let normal = Vector2::new(-chord.y, chord.x) / chord_len;
        let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

        let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let sweep = 4.0 * bulge.atan();

        Ok(Self {
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Returns the point on the arc's circle at angle `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.center + Vector2::new(self.radius * t.cos(), self.radius * t.sin())
    }

    /// Returns the swept angular range as an ascending interval.
    ///
    /// The interval is valid for either sweep direction.
    #[must_use]
    pub fn interval(&self) -> Interval {
        let end = self.start_angle + self.sweep;
        Interval::new(self.start_angle.min(end), self.start_angle.max(end))
    }

    /// Returns whether angle `t` falls within the swept range.
    ///
    /// Plain interval containment; `t` is compared as given, without
    /// 2π reduction.
    #[must_use]
    pub fn contains_angle(&self, t: f64) -> bool {
        self.interval().contains(t)
    }

    /// Returns the endpoint at the start angle.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(self.start_angle)
    }

    /// Returns the endpoint at the end of the sweep.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(self.start_angle + self.sweep)
    }

    /// Returns the arc length, `radius * |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    /// Accepts a candidate angle if it, or one of its 2π-shifted copies,
    /// falls within the swept range. Returns the accepted copy.
    fn accept_angle(&self, t: f64) -> Option<f64> {
        for cand in [t, t - TAU, t + TAU] {
            if self.contains_angle(cand) {
                return Some(cand);
            }
        }
        None
    }

    /// Returns whether `p` lies on the arc.
    ///
    /// True when `p` sits on the circle within [`TOLERANCE`] and its polar
    /// angle about the center falls within the swept range.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let v = p - self.center;
        if (v.norm() - self.radius).abs() > TOLERANCE {
            return false;
        }
        self.accept_angle(v.y.atan2(v.x)).is_some()
    }

    /// Returns the shortest distance from `p` to the arc.
    ///
    /// Radial distance when the polar angle of `p` falls within the swept
    /// range, otherwise the nearer endpoint distance.
    #[must_use]
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        let v = p - self.center;
        if self.accept_angle(v.y.atan2(v.x)).is_some() {
            return (v.norm() - self.radius).abs();
        }
        let to_start = (p - self.start_point()).norm();
        let to_end = (p - self.end_point()).norm();
        to_start.min(to_end)
    }

    /// Intersects the arc with the **carrier line** of `line`.
    ///
    /// The segment bounds of `line` are not consulted; a crossing anywhere
    /// on the infinite line counts. Only the arc's swept range restricts
    /// the result. When both candidate angles fall on the arc, the one at
    /// `p - q` is returned.
    ///
    /// Writing the carrier as all points with `cross(delta, x - a) = 0`,
    /// a circle point `c + r * (cos t, sin t)` lies on it exactly when
    /// `sin(t - phi) = -offset / r`, where `phi` is the direction angle of
    /// `delta` and `offset` the signed distance of the center from the
    /// carrier. The two solutions are `p - q` and `p + q` for
    /// `p = phi + π/2` and `q = acos(-offset / r)`.
    #[must_use]
    pub fn intersect_line(&self, line: &Line) -> Option<Point2> {
        let d = line.delta();
        let len = d.norm();
        let offset = (cross_2d(&d, &self.center.coords) - line.cross_product()) / len;
        if offset.abs() > self.radius + TOLERANCE {
            return None;
        }

        let q = (-offset / self.radius).clamp(-1.0, 1.0).acos();
        let p = d.y.atan2(d.x) + FRAC_PI_2;

        for cand in [p - q, p + q] {
            if let Some(t) = self.accept_angle(cand) {
                return Some(self.point_at(t));
            }
        }
        None
    }

    /// Intersects two arcs by circle-circle case analysis.
    ///
    /// Candidate angles are tested against this arc's swept range only. A
    /// reported point is therefore on this arc and on the other circle,
    /// but not necessarily within the other arc's sweep; intersect in both
    /// directions when both sweeps matter. When both candidates fall on
    /// this arc, the one at `theta - p` is returned.
    #[must_use]
    pub fn intersect_arc(&self, other: &Arc) -> Option<Point2> {
        let delta = other.center - self.center;
        let dist = delta.norm();

        // Circles too far apart to touch.
        if dist > self.radius + other.radius + TOLERANCE {
            return None;
        }
        // One circle strictly inside the other.
        if dist < (self.radius - other.radius).abs() - TOLERANCE {
            return None;
        }
        // Same circle: the arcs intersect wherever their sweeps overlap.
        if dist <= TOLERANCE && (self.radius - other.radius).abs() <= TOLERANCE {
            let overlap = self.interval().intersection(&other.interval());
            if overlap.is_valid() {
                return Some(self.point_at(overlap.start));
            }
            return None;
        }
        // Externally tangent: the single touch point sits on the
        // center-to-center line, independent of either sweep.
        if (self.radius + other.radius - dist).abs() <= TOLERANCE {
            return Some(self.center + delta * (self.radius / dist));
        }

        // Two crossing points, symmetric about the center-to-center
        // direction `theta` at angular half-width `p`.
        let h = (self.radius * self.radius - other.radius * other.radius + dist * dist)
            / (2.0 * dist);
        let p = (h / self.radius).clamp(-1.0, 1.0).acos();
        let theta = delta.y.atan2(delta.x);

        for cand in [theta - p, theta + p] {
            if let Some(t) = self.accept_angle(cand) {
                return Some(self.point_at(t));
            }
        }
        None
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
