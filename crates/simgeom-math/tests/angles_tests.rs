// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use simgeom_math::angles::{
    angle_difference, angle_difference_toward, angle_difference_with_turn, bearing,
    bounded_angle_degrees, bounded_angle_radians, bounded_positive_angle_degrees,
    bounded_positive_angle_radians, math_radians_to_nav_radians, nav_radians_to_math_radians,
};
use simgeom_math::{TurnDirection, Vec3};

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-9, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn bounded_degrees_boundaries() {
    assert_eq!(bounded_angle_degrees(180.0), 180.0);
    assert_eq!(bounded_angle_degrees(181.0), -179.0);
    assert_eq!(bounded_angle_degrees(-180.0), 180.0);
    assert_eq!(bounded_angle_degrees(-181.0), 179.0);
    assert_eq!(bounded_angle_degrees(360.0), 0.0);
    assert_eq!(bounded_angle_degrees(720.0 + 10.0), 10.0);
}

#[test]
fn bounded_positive_degrees_boundaries() {
    assert_eq!(bounded_positive_angle_degrees(0.0), 360.0);
    assert_eq!(bounded_positive_angle_degrees(360.0), 360.0);
    assert_eq!(bounded_positive_angle_degrees(361.0), 1.0);
    assert_eq!(bounded_positive_angle_degrees(-90.0), 270.0);
    assert_eq!(bounded_positive_angle_degrees(-720.0), 360.0);
}

#[test]
fn bounded_radians_boundaries() {
    assert_eq!(bounded_angle_radians(PI), PI);
    assert_eq!(bounded_angle_radians(-PI), PI);
    approx_eq(bounded_angle_radians(3.0 * FRAC_PI_2), -FRAC_PI_2);
    approx_eq(bounded_angle_radians(-3.0 * FRAC_PI_2), FRAC_PI_2);
    assert_eq!(bounded_positive_angle_radians(0.0), TAU);
    assert_eq!(bounded_positive_angle_radians(TAU), TAU);
    approx_eq(bounded_positive_angle_radians(-FRAC_PI_2), 3.0 * FRAC_PI_2);
}

#[test]
fn bearing_zero_is_north() {
    assert_eq!(bearing(&Vec3::UNIT_Y), 0.0);
    approx_eq(bearing(&Vec3::UNIT_X), FRAC_PI_2);
    approx_eq(bearing(&Vec3::new(-1.0, 0.0, 0.0)), -FRAC_PI_2);
    approx_eq(bearing(&Vec3::new(0.0, -1.0, 0.0)), PI);
    assert_eq!(bearing(&Vec3::ZERO), 0.0);
}

#[test]
fn nav_and_math_conversions_are_mutually_inverse() {
    // East in math convention is 90° in navigation convention.
    approx_eq(math_radians_to_nav_radians(0.0), FRAC_PI_2);
    approx_eq(nav_radians_to_math_radians(FRAC_PI_2), 0.0);
    approx_eq(math_radians_to_nav_radians(PI), -FRAC_PI_2);
    for a in [-3.0, -1.0, 0.0, 0.5, 2.0, 3.1] {
        approx_eq(nav_radians_to_math_radians(math_radians_to_nav_radians(a)), a);
        assert_eq!(math_radians_to_nav_radians(a), nav_radians_to_math_radians(a));
    }
}

#[test]
fn shortest_difference_wraps() {
    approx_eq(angle_difference(0.1, -0.1), 0.2);
    approx_eq(angle_difference(PI - 0.1, -PI + 0.1), -0.2);
    approx_eq(angle_difference(-PI + 0.1, PI - 0.1), 0.2);
}

#[test]
fn turn_direction_fixes_the_sign() {
    let (a, b) = (0.0, FRAC_PI_4);
    approx_eq(angle_difference_toward(a, b, Some(TurnDirection::Right)), -FRAC_PI_4);
    approx_eq(
        angle_difference_toward(a, b, Some(TurnDirection::Left)),
        TAU - FRAC_PI_4,
    );
    approx_eq(angle_difference_toward(a, b, None), -FRAC_PI_4);
    // Same heading going right is a full turn.
    approx_eq(angle_difference_toward(1.0, 1.0, Some(TurnDirection::Right)), -TAU);
}

#[test]
fn string_turn_direction_falls_back_on_unknown_values() {
    let (a, b) = (0.0, FRAC_PI_4);
    assert_eq!(
        angle_difference_with_turn(a, b, Some("left")),
        angle_difference_toward(a, b, Some(TurnDirection::Left))
    );
    assert_eq!(
        angle_difference_with_turn(a, b, Some("right")),
        angle_difference_toward(a, b, Some(TurnDirection::Right))
    );
    assert_eq!(angle_difference_with_turn(a, b, Some("sideways")), angle_difference(a, b));
    assert_eq!(angle_difference_with_turn(a, b, None), angle_difference(a, b));
}
