// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar angle normalization and conversion helpers.
//!
//! Two conventions coexist in callers:
//! * math: radians counter-clockwise from east (+X);
//! * navigation: radians clockwise from north (+Y).
//!
//! The bounding functions map any finite angle into a half-open interval of
//! one period. Inputs already inside the interval are returned bit-for-bit;
//! everything else is reduced in constant time. Non-finite inputs yield NaN.

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::str::FromStr;

use crate::{MathError, Vec3};

/// Maps `value` into `(lower, lower + period]`.
fn bounded(value: f64, lower: f64, period: f64) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    let upper = lower + period;
    if value > lower && value <= upper {
        return value;
    }
    let mut reduced = lower + (value - lower).rem_euclid(period);
    if reduced <= lower {
        reduced += period;
    }
    if reduced > upper {
        reduced -= period;
    }
    reduced
}

/// Bounds an angle in degrees to `(-180, 180]`.
///
/// # Examples
/// ```
/// use simgeom_math::angles::bounded_angle_degrees;
/// assert_eq!(bounded_angle_degrees(180.0), 180.0);
/// assert_eq!(bounded_angle_degrees(-180.0), 180.0);
/// assert_eq!(bounded_angle_degrees(181.0), -179.0);
/// ```
pub fn bounded_angle_degrees(value: f64) -> f64 {
    bounded(value, -180.0, 360.0)
}

/// Bounds an angle in degrees to `(0, 360]`.
pub fn bounded_positive_angle_degrees(value: f64) -> f64 {
    bounded(value, 0.0, 360.0)
}

/// Bounds an angle in radians to `(-π, π]`.
pub fn bounded_angle_radians(value: f64) -> f64 {
    bounded(value, -PI, TAU)
}

/// Bounds an angle in radians to `(0, 2π]`.
pub fn bounded_positive_angle_radians(value: f64) -> f64 {
    bounded(value, 0.0, TAU)
}

/// Navigation bearing of a velocity, `atan2(x, y)`.
///
/// The arguments are swapped relative to the usual `atan2(y, x)` so that a
/// bearing of 0 points north (+Y) and bearings grow clockwise. A zero
/// velocity has bearing 0.
pub fn bearing(velocity: &Vec3) -> f64 {
    velocity.x().atan2(velocity.y())
}

/// `bounded(π/2 - angle)`. Reflection about the 45° line is its own inverse,
/// so one formula converts in both directions.
fn reflect_about_diagonal(angle: f64) -> f64 {
    bounded_angle_radians(FRAC_PI_2 - angle)
}

/// Converts a math angle (CCW from east) to a navigation angle (CW from north).
pub fn math_radians_to_nav_radians(angle: f64) -> f64 {
    reflect_about_diagonal(angle)
}

/// Converts a navigation angle (CW from north) to a math angle (CCW from east).
pub fn nav_radians_to_math_radians(angle: f64) -> f64 {
    reflect_about_diagonal(angle)
}

/// Shortest signed difference `angle - other`, bounded to `(-π, π]`.
pub fn angle_difference(angle: f64, other: f64) -> f64 {
    bounded_angle_radians(angle - other)
}

/// Direction of travel when measuring an angular difference.
///
/// "Left" and "right" are relative to the angle convention in use: in the
/// math convention a left turn increases the angle, in the navigation
/// convention it decreases it. Callers must pick accordingly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    /// Measure the difference going left: result in `(0, 2π]`.
    Left,
    /// Measure the difference going right: result in `[-2π, 0)`.
    Right,
}

impl FromStr for TurnDirection {
    type Err = MathError;

    /// Accepts exactly `"left"` or `"right"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(MathError::InvalidArgument(format!(
                "unknown turn direction '{other}'"
            ))),
        }
    }
}

/// Difference between two angles measured in a fixed turn direction.
///
/// * `Some(Right)`: `-bounded_positive(other - angle)`.
/// * `Some(Left)`: `bounded_positive(angle - other)`.
/// * `None`: the shortest difference, [`angle_difference`].
pub fn angle_difference_toward(angle: f64, other: f64, turn: Option<TurnDirection>) -> f64 {
    match turn {
        Some(TurnDirection::Right) => -bounded_positive_angle_radians(other - angle),
        Some(TurnDirection::Left) => bounded_positive_angle_radians(angle - other),
        None => angle_difference(angle, other),
    }
}

/// String-keyed form of [`angle_difference_toward`].
///
/// `"left"` and `"right"` select a turn direction; anything else, including
/// `None`, falls back to the shortest difference.
pub fn angle_difference_with_turn(angle: f64, other: f64, turn: Option<&str>) -> f64 {
    let turn = turn.and_then(|s| s.parse::<TurnDirection>().ok());
    angle_difference_toward(angle, other, turn)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_through_unchanged() {
        for v in [-179.5, -1.0, 0.0, 1e-300, 90.0, 180.0] {
            assert_eq!(bounded_angle_degrees(v).to_bits(), v.to_bits());
        }
        assert_eq!(bounded_angle_radians(PI), PI);
    }

    #[test]
    fn lower_bounds_are_exclusive() {
        assert_eq!(bounded_angle_degrees(-180.0), 180.0);
        assert_eq!(bounded_positive_angle_degrees(0.0), 360.0);
        assert_eq!(bounded_positive_angle_degrees(360.0), 360.0);
        assert_eq!(bounded_angle_radians(-PI), PI);
        assert_eq!(bounded_positive_angle_radians(0.0), TAU);
    }

    #[test]
    fn large_inputs_reduce_without_looping() {
        assert_eq!(bounded_angle_degrees(540.0), 180.0);
        assert_eq!(bounded_angle_degrees(-540.0), 180.0);
        assert_eq!(bounded_angle_degrees(3600.0 + 45.0), 45.0);
        let huge = bounded_angle_degrees(1e18);
        assert!(huge > -180.0 && huge <= 180.0);
    }

    #[test]
    fn non_finite_inputs_are_nan() {
        assert!(bounded_angle_degrees(f64::INFINITY).is_nan());
        assert!(bounded_positive_angle_radians(f64::NEG_INFINITY).is_nan());
        assert!(bounded_angle_radians(f64::NAN).is_nan());
    }

    #[test]
    fn turn_direction_parses_exact_names() {
        assert_eq!("left".parse::<TurnDirection>(), Ok(TurnDirection::Left));
        assert_eq!("right".parse::<TurnDirection>(), Ok(TurnDirection::Right));
        assert!("Left".parse::<TurnDirection>().is_err());
        assert!("".parse::<TurnDirection>().is_err());
    }
}
