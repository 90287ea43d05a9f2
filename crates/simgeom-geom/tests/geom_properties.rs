// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]
use proptest::prelude::*;
use simgeom_geom::{
    closest_approach, distance_to_point, is_left, minimum_bounding_rectangle, segment_distance,
    Polygon,
};
use simgeom_math::Vec3;

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn planar() -> impl Strategy<Value = Vec3> {
    (coord(), coord()).prop_map(|(x, y)| Vec3::new(x, y, 0.0))
}

/// Sampled minimum over both segments; an upper bound on the true distance.
fn sampled_distance(a0: &Vec3, a1: &Vec3, b0: &Vec3, b1: &Vec3) -> f64 {
    const STEPS: u32 = 64;
    let dir = b1.sub(b0);
    let mut best = f64::INFINITY;
    for i in 0..=STEPS {
        let t = f64::from(i) / f64::from(STEPS);
        let p = a0.add(&a1.sub(a0).scale(t));
        best = best.min(distance_to_point(b0, b1, &dir, &p));
    }
    best
}

proptest! {
    #[test]
    fn segment_distance_is_symmetric(a0 in vec3(), a1 in vec3(), b0 in vec3(), b1 in vec3()) {
        let ab = segment_distance(&a0, &a1, &b0, &b1);
        let ba = segment_distance(&b0, &b1, &a0, &a1);
        prop_assert!((ab - ba).abs() < 1e-4, "{} vs {}", ab, ba);
    }

    #[test]
    fn segment_distance_to_itself_is_zero(a0 in vec3(), a1 in vec3()) {
        prop_assert!(segment_distance(&a0, &a1, &a0, &a1) < 1e-4);
    }

    #[test]
    fn segment_distance_never_exceeds_sampled(a0 in vec3(), a1 in vec3(), b0 in vec3(), b1 in vec3()) {
        let exact = segment_distance(&a0, &a1, &b0, &b1);
        let sampled = sampled_distance(&a0, &a1, &b0, &b1);
        prop_assert!(exact <= sampled + 1e-4, "exact {} sampled {}", exact, sampled);
    }

    #[test]
    fn closest_points_realize_distance(a0 in vec3(), a1 in vec3(), b0 in vec3(), b1 in vec3()) {
        let d0 = a1.sub(&a0).normalize();
        let d1 = b1.sub(&b0).normalize();
        let a01 = d0.dot(&d1);
        prop_assume!((1.0 - a01 * a01).abs() >= 1e-6);
        let approach = closest_approach(&a0, &a1, &b0, &b1);
        let gap = approach.first_point.distance(&approach.second_point);
        prop_assert!((gap - approach.distance).abs() < 1e-4, "{} vs {}", gap, approach.distance);
    }

    #[test]
    fn hull_is_convex_and_counter_clockwise(points in prop::collection::vec(planar(), 3..40)) {
        let hull = Polygon::convex_hull(&points);
        let pts = hull.points();
        prop_assume!(pts.len() >= 3);
        for i in 0..pts.len() {
            let turn = is_left(&pts[i], &pts[(i + 1) % pts.len()], &pts[(i + 2) % pts.len()]);
            prop_assert!(turn > 0.0, "non-left turn at {}", i);
        }
    }

    #[test]
    fn hull_vertices_come_from_input(points in prop::collection::vec(planar(), 0..40)) {
        let hull = Polygon::convex_hull(&points);
        for p in hull.points() {
            prop_assert!(points.contains(p));
        }
    }

    #[test]
    fn hull_contains_its_centroid(points in prop::collection::vec(planar(), 3..40)) {
        let hull = Polygon::convex_hull(&points);
        prop_assume!(hull.len() >= 3);
        let centroid = hull.centroid().unwrap();
        prop_assert!(hull.contains(&centroid));
    }

    #[test]
    fn bounding_rectangle_area_is_at_most_axis_aligned(points in prop::collection::vec(planar(), 1..40)) {
        let rect = minimum_bounding_rectangle(&points).unwrap();
        let bounds = Polygon::from_points(points).bounding_box().unwrap();
        let size = bounds.size();
        prop_assert!(rect.area >= 0.0);
        prop_assert!(rect.area <= size.x() * size.y() + 1e-6);
    }
}
