// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::cmp::Ordering;

use simgeom_math::Vec3;
use tracing::debug;

use crate::Aabb;

/// Ordered, unclosed polygon in the XY plane.
///
/// The last vertex is not a repeat of the first. Only `x`/`y` are
/// geometrically meaningful; `z` is carried through untouched.
///
/// Two construction paths exist:
/// * [`Polygon::convex_hull`]: convex, counter-clockwise, duplicates removed;
/// * [`Polygon::from_points`]: the caller's vertex list verbatim, with no
///   convexity or orientation guarantee.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polygon {
    points: Vec<Vec3>,
}

impl Polygon {
    /// Convex hull of `points` via Andrew's monotone chain.
    ///
    /// Exact duplicates are removed first. Fewer than three distinct points
    /// are returned as-is, in input order. If every point shares one `x`,
    /// the result is the lowest and highest point of that vertical line (one
    /// point if they coincide). Otherwise the hull is counter-clockwise and
    /// starts at the lexicographically smallest `(x, y)` point.
    ///
    /// # Examples
    /// ```
    /// use simgeom_geom::Polygon;
    /// use simgeom_math::Vec3;
    /// let hull = Polygon::convex_hull(&[
    ///     Vec3::new(0.0, 0.0, 0.0),
    ///     Vec3::new(1.0, 1.0, 0.0),
    ///     Vec3::new(0.5, 0.5, 0.0),
    ///     Vec3::new(1.0, 0.0, 0.0),
    /// ]);
    /// assert_eq!(hull.len(), 3);
    /// ```
    pub fn convex_hull(points: &[Vec3]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(lexical_order);
        let unique = dedup_sorted(sorted);

        if unique.len() < 3 {
            debug!(
                distinct = unique.len(),
                "convex hull of fewer than three points; passing through"
            );
            return Self {
                points: dedup_in_order(points),
            };
        }
        Self {
            points: monotone_chain(&unique),
        }
    }

    /// Wraps an ordered vertex list verbatim.
    pub fn from_points(points: impl Into<Vec<Vec3>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Vertices in order, without a closing duplicate.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Even-odd (crossing number) containment test in the XY plane.
    ///
    /// A horizontal ray is cast toward +X. Each edge counts over the
    /// half-open `y` interval `[min, max)`, so a vertex lying exactly on the
    /// ray is counted once. Works for concave polygons too; points on the
    /// boundary may land on either side.
    pub fn contains(&self, point: &Vec3) -> bool {
        let (x, y) = (point.x(), point.y());
        let mut inside = false;
        let mut j = match self.points.len().checked_sub(1) {
            Some(last) => last,
            None => return false,
        };
        for (i, pi) in self.points.iter().enumerate() {
            let pj = &self.points[j];
            let straddles = (pi.y() <= y && y < pj.y()) || (pj.y() <= y && y < pi.y());
            if straddles && x < (pj.x() - pi.x()) * (y - pi.y()) / (pj.y() - pi.y()) + pi.x() {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Arithmetic mean of the vertices (all three components).
    ///
    /// This is the vertex centroid, not the area centroid. `None` for an empty
    /// polygon.
    pub fn centroid(&self) -> Option<Vec3> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc.add(p));
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Some(sum.scale(1.0 / n))
    }

    /// Axis-aligned 3-D bounds of the vertices. `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }
}

impl From<Vec<Vec3>> for Polygon {
    fn from(points: Vec<Vec3>) -> Self {
        Self::from_points(points)
    }
}

/// Signed twice-area of the triangle `(p0, p1, p2)` in the XY plane.
///
/// `> 0` when `p2` lies left of the directed line `p0 → p1` (a
/// counter-clockwise turn), `0` when colinear, `< 0` when right.
pub fn is_left(p0: &Vec3, p1: &Vec3, p2: &Vec3) -> f64 {
    (p1.x() - p0.x()) * (p2.y() - p0.y()) - (p2.x() - p0.x()) * (p1.y() - p0.y())
}

/// Orders by `x`, then `y`. `-0.0` and `0.0` compare equal.
fn lexical_order(a: &Vec3, b: &Vec3) -> Ordering {
    let canon = |v: f64| v + 0.0;
    canon(a.x())
        .total_cmp(&canon(b.x()))
        .then_with(|| canon(a.y()).total_cmp(&canon(b.y())))
}

/// Drops exact duplicates from a lexically sorted list. Duplicates share an
/// `(x, y)` run, so only the current run is searched.
fn dedup_sorted(sorted: Vec<Vec3>) -> Vec<Vec3> {
    let mut out: Vec<Vec3> = Vec::with_capacity(sorted.len());
    let mut run_start = 0;
    for p in sorted {
        if out
            .last()
            .is_some_and(|last| lexical_order(last, &p) != Ordering::Equal)
        {
            run_start = out.len();
        }
        if !out[run_start..].contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Drops exact duplicates, keeping first occurrences in input order.
fn dedup_in_order(points: &[Vec3]) -> Vec<Vec3> {
    let mut out: Vec<Vec3> = Vec::new();
    for p in points {
        if !out.contains(p) {
            out.push(*p);
        }
    }
    out
}

/// Andrew's monotone chain over at least three distinct, lexically sorted
/// points.
#[allow(clippy::float_cmp)]
fn monotone_chain(pts: &[Vec3]) -> Vec<Vec3> {
    let n = pts.len();
    let mut stack: Vec<Vec3> = Vec::with_capacity(n + 1);

    // Points sharing the minimum x: indices minmin..=minmax.
    let xmin = pts[0].x();
    let minmin = 0;
    let minmax = pts[1..]
        .iter()
        .position(|p| p.x() != xmin)
        .unwrap_or(n - 1);

    if minmax == n - 1 {
        debug!(points = n, "all points share one x; hull is a vertical segment");
        stack.push(pts[minmin]);
        if pts[minmax].y() != pts[minmin].y() {
            stack.push(pts[minmax]);
        }
        return stack;
    }

    // Points sharing the maximum x: indices maxmin..=maxmax.
    let xmax = pts[n - 1].x();
    let maxmax = n - 1;
    let maxmin = pts[..maxmax]
        .iter()
        .rposition(|p| p.x() != xmax)
        .map_or(0, |i| i + 1);

    // Lower hull, left to right.
    stack.push(pts[minmin]);
    for i in (minmax + 1)..=maxmin {
        if i < maxmin && is_left(&pts[minmin], &pts[maxmin], &pts[i]) >= 0.0 {
            continue;
        }
        pop_non_left_turns(&mut stack, 1, &pts[i]);
        stack.push(pts[i]);
    }

    // Upper hull, right to left.
    if maxmax != maxmin {
        stack.push(pts[maxmax]);
    }
    let upper_base = stack.len();
    for i in (minmax..maxmin).rev() {
        if i > minmax && is_left(&pts[maxmax], &pts[minmax], &pts[i]) >= 0.0 {
            continue;
        }
        pop_non_left_turns(&mut stack, upper_base, &pts[i]);
        stack.push(pts[i]);
    }

    // With a single min-x point the chain closes back onto it.
    if minmax == minmin {
        stack.pop();
    }
    stack
}

/// Pops the stack top while it and its predecessor do not make a strict left
/// turn toward `next`, never shrinking below `floor` entries.
fn pop_non_left_turns(stack: &mut Vec<Vec3>, floor: usize, next: &Vec3) {
    while stack.len() > floor {
        let top = stack.len() - 1;
        if is_left(&stack[top - 1], &stack[top], next) > 0.0 {
            break;
        }
        stack.pop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec3 {
        Vec3::new(x, y, 0.0)
    }

    #[test]
    fn is_left_sign_convention() {
        let (a, b) = (v(0.0, 0.0), v(1.0, 0.0));
        assert!(is_left(&a, &b, &v(0.5, 1.0)) > 0.0);
        assert!(is_left(&a, &b, &v(0.5, -1.0)) < 0.0);
        assert_eq!(is_left(&a, &b, &v(3.0, 0.0)), 0.0);
    }

    #[test]
    fn lexical_order_treats_signed_zero_as_equal() {
        assert_eq!(lexical_order(&v(-0.0, 1.0), &v(0.0, 1.0)), Ordering::Equal);
        assert_eq!(lexical_order(&v(0.0, 2.0), &v(0.0, 1.0)), Ordering::Greater);
        assert_eq!(lexical_order(&v(-1.0, 5.0), &v(0.0, 1.0)), Ordering::Less);
    }

    #[test]
    fn dedup_sorted_keeps_distinct_z_in_same_run() {
        let pts = vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let out = dedup_sorted(pts);
        assert_eq!(
            out,
            vec![
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(1.0, 0.0, 0.0)
            ]
        );
    }

    #[test]
    fn vertical_line_keeps_extremes() {
        let hull = monotone_chain(&[v(0.0, 0.0), v(0.0, 1.0), v(0.0, 3.0)]);
        assert_eq!(hull, vec![v(0.0, 0.0), v(0.0, 3.0)]);
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert!(!Polygon::default().contains(&Vec3::ZERO));
        assert_eq!(Polygon::default().centroid(), None);
        assert_eq!(Polygon::default().bounding_box(), None);
    }
}
