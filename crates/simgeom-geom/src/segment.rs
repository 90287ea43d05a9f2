// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimum distance between points and finite 3-D line segments.
//!
//! Segment-to-segment distance minimizes the quadratic
//!
//! ```text
//! Q(s0, s1) = s0² + 2·a01·s0·s1 + s1² + 2·b0·s0 + 2·b1·s1 + c
//! ```
//!
//! over the rectangle `|s0| <= e0`, `|s1| <= e1`, where each segment is
//! written `origin + s·direction` with a unit direction and half-length
//! extent `e`. The unconstrained minimum of the supporting lines falls into
//! one of nine regions of the `(s0, s1)` plane relative to that rectangle,
//! see [`Region`]; each region has its own clamped solution.

use simgeom_math::Vec3;
use tracing::trace;

/// Below this, `1 - a01²` is treated as zero and the segments as parallel.
const PARALLEL_TOLERANCE: f64 = 1e-8;

/// Distance from `point` to the segment `start → end`.
///
/// `direction` must be exactly `end - start`; it is taken as a parameter so
/// callers testing many points against one segment compute it once. A
/// mismatched direction silently yields a wrong answer.
///
/// A zero-length segment (direction within 1e-6 of zero) is treated as the
/// point `start`.
///
/// # Examples
/// ```
/// use simgeom_geom::distance_to_point;
/// use simgeom_math::Vec3;
/// let (start, end) = (Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0));
/// let d = distance_to_point(&start, &end, &end.sub(&start), &Vec3::new(5.0, 3.0, 0.0));
/// assert_eq!(d, 3.0);
/// ```
pub fn distance_to_point(start: &Vec3, end: &Vec3, direction: &Vec3, point: &Vec3) -> f64 {
    if direction.approx_eq(&Vec3::ZERO) {
        return point.distance(start);
    }
    let u = direction.dot(&point.sub(start)) / direction.length_squared();
    if u <= 0.0 {
        point.distance(start)
    } else if u >= 1.0 {
        point.distance(end)
    } else {
        point.distance(&start.add(&direction.scale(u)))
    }
}

/// Minimum distance between segments `a_start → a_end` and
/// `b_start → b_end`.
///
/// # Examples
/// ```
/// use simgeom_geom::segment_distance;
/// use simgeom_math::Vec3;
/// let d = segment_distance(
///     &Vec3::new(0.0, 0.0, 0.0),
///     &Vec3::new(10.0, 0.0, 0.0),
///     &Vec3::new(5.0, 5.0, 0.0),
///     &Vec3::new(5.0, 1.0, 0.0),
/// );
/// assert!((d - 1.0).abs() < 1e-12);
/// ```
pub fn segment_distance(a_start: &Vec3, a_end: &Vec3, b_start: &Vec3, b_end: &Vec3) -> f64 {
    closest_approach(a_start, a_end, b_start, b_end).distance
}

/// Full result of a segment-to-segment query.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentApproach {
    /// Minimum distance between the segments.
    pub distance: f64,
    /// Parameter on the first segment, in `[-e0, e0]` from its midpoint.
    pub first_parameter: f64,
    /// Parameter on the second segment, in `[-e1, e1]` from its midpoint.
    pub second_parameter: f64,
    /// Closest point on the first segment.
    pub first_point: Vec3,
    /// Closest point on the second segment.
    pub second_point: Vec3,
    /// Which case of the minimization produced the answer.
    pub region: Region,
}

/// Which end of a segment's extent a parameter was clamped to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// `-extent` (toward the segment start).
    Start,
    /// `+extent` (toward the segment end).
    End,
}

impl Side {
    const fn sign(self) -> f64 {
        match self {
            Self::Start => -1.0,
            Self::End => 1.0,
        }
    }

    /// Classifies `s` against `[-bound, bound]`; `None` when inside.
    fn of(s: f64, bound: f64) -> Option<Self> {
        if s >= -bound {
            if s <= bound {
                None
            } else {
                Some(Self::End)
            }
        } else {
            Some(Self::Start)
        }
    }
}

/// Location of the supporting lines' closest approach relative to the
/// parameter rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    /// Both parameters fall inside their extents.
    Interior,
    /// The first parameter is out of range on the given side; the second is
    /// inside.
    ClampFirst(Side),
    /// The second parameter is out of range on the given side; the first is
    /// inside.
    ClampSecond(Side),
    /// Both parameters are out of range.
    Corner {
        /// Side of the first parameter.
        first: Side,
        /// Side of the second parameter.
        second: Side,
    },
    /// The directions are parallel (or nearly so); the minimum is not
    /// unique.
    Parallel,
}

/// Segment as midpoint, unit direction, and half-length.
#[derive(Debug, Copy, Clone)]
struct CenteredSegment {
    origin: Vec3,
    direction: Vec3,
    extent: f64,
}

impl CenteredSegment {
    fn new(start: &Vec3, end: &Vec3) -> Self {
        let diff = end.sub(start);
        Self {
            origin: start.add(end).scale(0.5),
            direction: diff.normalize(),
            extent: diff.length() / 2.0,
        }
    }

    fn point_at(&self, s: f64) -> Vec3 {
        self.origin.add(&self.direction.scale(s))
    }
}

/// Coefficients of `Q(s0, s1)` plus the extents of both segments.
#[derive(Debug, Copy, Clone)]
struct Quadratic {
    a01: f64,
    b0: f64,
    b1: f64,
    c: f64,
    e0: f64,
    e1: f64,
}

/// Minimizing parameters and the squared distance there.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Solution {
    s0: f64,
    s1: f64,
    sqr_distance: f64,
}

/// `value` clamped into `[-extent, extent]`.
///
/// Unlike `f64::clamp`, a NaN extent does not panic.
#[allow(clippy::manual_clamp)]
fn clamp_to_extent(value: f64, extent: f64) -> f64 {
    if value < -extent {
        -extent
    } else if value <= extent {
        value
    } else {
        extent
    }
}

impl Quadratic {
    fn new(seg0: &CenteredSegment, seg1: &CenteredSegment) -> Self {
        let diff = seg0.origin.sub(&seg1.origin);
        Self {
            a01: seg0.direction.scale(-1.0).dot(&seg1.direction),
            b0: diff.dot(&seg0.direction),
            b1: diff.scale(-1.0).dot(&seg1.direction),
            c: diff.length_squared(),
            e0: seg0.extent,
            e1: seg1.extent,
        }
    }

    fn det(&self) -> f64 {
        (1.0 - self.a01 * self.a01).abs()
    }

    /// Picks the region holding the unconstrained minimum.
    fn classify(&self) -> Region {
        let det = self.det();
        if det < PARALLEL_TOLERANCE {
            return Region::Parallel;
        }
        let (s0, s1) = self.scaled_line_parameters();
        match (Side::of(s0, self.e0 * det), Side::of(s1, self.e1 * det)) {
            (None, None) => Region::Interior,
            (Some(first), None) => Region::ClampFirst(first),
            (None, Some(second)) => Region::ClampSecond(second),
            (Some(first), Some(second)) => Region::Corner { first, second },
        }
    }

    /// Closest-approach parameters of the supporting lines, times `det`.
    fn scaled_line_parameters(&self) -> (f64, f64) {
        (
            self.a01 * self.b1 - self.b0,
            self.a01 * self.b0 - self.b1,
        )
    }

    fn solve(&self, region: Region) -> Solution {
        match region {
            Region::Interior => self.interior(),
            Region::ClampFirst(side) => self.with_first_fixed(side.sign() * self.e0),
            Region::ClampSecond(side) => self.with_second_fixed(side.sign() * self.e1),
            Region::Corner { first, second } => self.corner(first, second),
            Region::Parallel => self.parallel(),
        }
    }

    fn interior(&self) -> Solution {
        let (mut s0, mut s1) = self.scaled_line_parameters();
        let inv_det = 1.0 / self.det();
        s0 *= inv_det;
        s1 *= inv_det;
        let sqr_distance = s0 * (s0 + self.a01 * s1 + 2.0 * self.b0)
            + s1 * (self.a01 * s0 + s1 + 2.0 * self.b1)
            + self.c;
        Solution {
            s0,
            s1,
            sqr_distance,
        }
    }

    /// Fixes `s0`, then minimizes over `s1` and clamps it to its extent.
    fn with_first_fixed(&self, s0: f64) -> Solution {
        let target = -(self.a01 * s0 + self.b1);
        let s1 = clamp_to_extent(target, self.e1);
        Solution {
            s0,
            s1,
            sqr_distance: s1 * (s1 - 2.0 * target) + s0 * (s0 + 2.0 * self.b0) + self.c,
        }
    }

    /// Fixes `s1`, then minimizes over `s0` and clamps it to its extent.
    fn with_second_fixed(&self, s1: f64) -> Solution {
        let target = -(self.a01 * s1 + self.b0);
        let s0 = clamp_to_extent(target, self.e0);
        Solution {
            s0,
            s1,
            sqr_distance: s0 * (s0 - 2.0 * target) + s1 * (s1 + 2.0 * self.b1) + self.c,
        }
    }

    /// Tries the edge `s1 = second·e1` first. If the best `s0` along it
    /// overshoots the `first` end, the minimum lies on the edge
    /// `s0 = first·e0` instead.
    fn corner(&self, first: Side, second: Side) -> Solution {
        let s1 = second.sign() * self.e1;
        let target = -(self.a01 * s1 + self.b0);
        let overshoots = match first {
            Side::End => target > self.e0,
            Side::Start => target < -self.e0,
        };
        if overshoots {
            self.with_first_fixed(first.sign() * self.e0)
        } else {
            self.with_second_fixed(s1)
        }
    }

    /// Parallel lines: the distance depends only on the offset `λ` along the
    /// shared direction, clamped to the combined extent.
    fn parallel(&self) -> Solution {
        let combined = self.e0 + self.e1;
        let sign = if self.a01 > 0.0 { -1.0 } else { 1.0 };
        let lambda = clamp_to_extent(-self.b0, combined);
        // Split λ between the two segments in proportion to their extents.
        let s1 = if combined > 0.0 {
            -sign * lambda * self.e1 / combined
        } else {
            0.0
        };
        let s0 = lambda + sign * s1;
        trace!(a01 = self.a01, lambda, "segments are parallel");
        Solution {
            s0,
            s1,
            sqr_distance: lambda * (lambda + 2.0 * self.b0) + self.c,
        }
    }
}

/// Closest approach between segments `a_start → a_end` and
/// `b_start → b_end`, with the parameters and points that realize it.
///
/// Zero-length segments are handled: their direction normalizes to zero and
/// they behave as points. Parallel segments (`|1 - a01²| < 1e-8`) have no
/// unique closest pair; one minimizing pair inside both segments is
/// returned.
pub fn closest_approach(
    a_start: &Vec3,
    a_end: &Vec3,
    b_start: &Vec3,
    b_end: &Vec3,
) -> SegmentApproach {
    let seg0 = CenteredSegment::new(a_start, a_end);
    let seg1 = CenteredSegment::new(b_start, b_end);
    let quadratic = Quadratic::new(&seg0, &seg1);
    let region = quadratic.classify();
    let solution = quadratic.solve(region);
    SegmentApproach {
        // Cancellation can leave a tiny negative square.
        distance: solution.sqr_distance.abs().sqrt(),
        first_parameter: solution.s0,
        second_parameter: solution.s1,
        first_point: seg0.point_at(solution.s0),
        second_point: seg1.point_at(solution.s1),
        region,
    }
}
