// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use simgeom_math::Vec3;
use tracing::{debug, trace};

use crate::Polygon;

/// Minimum-area oriented rectangle enclosing a point set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRectangle {
    /// The four corners, wrapped verbatim (see [`minimum_bounding_rectangle`]
    /// for their order).
    pub polygon: Polygon,
    /// Rectangle area in the XY plane.
    pub area: f64,
}

/// Extent of the hull along one edge's local axes.
struct EdgeFrame {
    start: Vec3,
    par: Vec3,
    perp: Vec3,
    par_min: f64,
    par_max: f64,
    perp_min: f64,
    perp_max: f64,
}

impl EdgeFrame {
    fn measure(hull: &[Vec3], start: Vec3, end: Vec3) -> Self {
        let par = end.sub(&start).normalize();
        let perp = Vec3::new(par.y(), -par.x(), 0.0);
        let mut frame = Self {
            start,
            par,
            perp,
            par_min: f64::INFINITY,
            par_max: f64::NEG_INFINITY,
            perp_min: f64::INFINITY,
            perp_max: f64::NEG_INFINITY,
        };
        for p in hull {
            let offset = p.sub(&start);
            let along = offset.dot(&par);
            let across = offset.dot(&perp);
            frame.par_min = nan_min(frame.par_min, along);
            frame.par_max = nan_max(frame.par_max, along);
            frame.perp_min = nan_min(frame.perp_min, across);
            frame.perp_max = nan_max(frame.perp_max, across);
        }
        frame
    }

    fn area(&self) -> f64 {
        (self.perp_max - self.perp_min) * (self.par_max - self.par_min)
    }

    fn corner(&self, along: f64, across: f64) -> Vec3 {
        self.start
            .add(&self.par.scale(along))
            .add(&self.perp.scale(across))
    }

    fn corners(&self) -> Vec<Vec3> {
        vec![
            self.corner(self.par_min, self.perp_min),
            self.corner(self.par_min, self.perp_max),
            self.corner(self.par_max, self.perp_max),
            self.corner(self.par_max, self.perp_min),
        ]
    }
}

/// Like `f64::min`, but a NaN operand wins.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Like `f64::max`, but a NaN operand wins.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Minimum-area bounding rectangle of `points` (rotating calipers over the
/// convex hull).
///
/// Each hull edge in order defines a frame: `par` along the edge and `perp`
/// its clockwise perpendicular. The hull is projected onto every frame and
/// the first frame with the strictly smallest area wins. Corners follow
/// `(par, perp)` extrema in the order `(min, min)`, `(min, max)`,
/// `(max, max)`, `(max, min)`; world-space winding is not re-checked.
///
/// One or two distinct points yield a degenerate zero-area rectangle.
/// Returns `None` for an empty input or when no edge produces a comparable
/// area. A NaN coordinate on any hull vertex poisons every edge's area, so
/// such inputs yield `None`.
pub fn minimum_bounding_rectangle(points: &[Vec3]) -> Option<BoundingRectangle> {
    let hull = Polygon::convex_hull(points);
    let hull = hull.points();
    if hull.is_empty() {
        debug!("bounding rectangle requested for an empty point set");
        return None;
    }

    let mut best: Option<(f64, EdgeFrame)> = None;
    for (i, start) in hull.iter().enumerate() {
        let end = hull[(i + 1) % hull.len()];
        let frame = EdgeFrame::measure(hull, *start, end);
        let area = frame.area();
        let best_area = best.as_ref().map_or(f64::INFINITY, |(a, _)| *a);
        if area < best_area {
            trace!(edge = i, area, "new minimum bounding rectangle candidate");
            best = Some((area, frame));
        }
    }

    let Some((area, frame)) = best else {
        debug!(
            hull_points = hull.len(),
            "no bounding rectangle candidate has a comparable area"
        );
        return None;
    };
    Some(BoundingRectangle {
        polygon: Polygon::from_points(frame.corners()),
        area,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn single_point_collapses_to_itself() {
        let p = Vec3::new(3.0, -2.0, 1.0);
        let rect = minimum_bounding_rectangle(&[p, p]).unwrap();
        assert_eq!(rect.area, 0.0);
        assert_eq!(rect.polygon.points(), &[p, p, p, p]);
    }

    #[test]
    fn empty_input_has_no_rectangle() {
        assert!(minimum_bounding_rectangle(&[]).is_none());
    }

    #[test]
    fn nan_coordinates_have_no_rectangle() {
        let pts = [
            Vec3::new(f64::NAN, 0.0, 0.0),
            Vec3::new(1.0, f64::NAN, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
        ];
        assert!(minimum_bounding_rectangle(&pts).is_none());
    }

    #[test]
    fn one_nan_hull_vertex_poisons_every_edge() {
        // The NaN corner survives into the hull; its neighbours' edges alone
        // would otherwise give a finite 4 x 3 rectangle.
        let pts = [
            Vec3::new(0.0, f64::NAN, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(4.0, 3.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        ];
        assert_eq!(Polygon::convex_hull(&pts).len(), 4);
        assert!(minimum_bounding_rectangle(&pts).is_none());
    }

    #[test]
    fn nan_min_max_propagate() {
        assert!(nan_min(1.0, f64::NAN).is_nan());
        assert!(nan_max(f64::NAN, 1.0).is_nan());
        assert_eq!(nan_min(1.0, 2.0), 1.0);
        assert_eq!(nan_max(1.0, 2.0), 2.0);
    }
}
