// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::str::FromStr;

use crate::{MathError, EPSILON};

/// Immutable 3-D vector used throughout the kernel.
///
/// * Components may represent either points or directions depending on the
///   calling context; planar routines only look at `x` and `y`.
/// * Equality (`==`) is exact per component, so `-0.0 == 0.0` and a NaN
///   component never compares equal. Use [`Vec3::epsilon_eq`] for tolerant
///   comparisons.
/// * Arithmetic is plain IEEE-754: `ZERO.scale(f64::INFINITY)` is all-NaN.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Indexed component access (`0 => x`, `1 => y`, `2 => z`).
    pub fn get(&self, index: usize) -> Result<f64, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index })
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.sub(other).length_squared()
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Vectors shorter than [`EPSILON`] normalize to [`Vec3::ZERO`] so callers
    /// can detect the degenerate case by value.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len.abs() < EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Projects onto the plane through the origin with the given normal:
    /// `v - (v·n)n`.
    ///
    /// `normal` is assumed to be unit length; a non-unit normal silently
    /// produces a scaled result.
    pub fn project_onto_plane(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(self.dot(normal)))
    }

    /// Angle in radians between two vectors, `acos(a·b / (|a||b|))`.
    ///
    /// Returns `0.0` whenever the cosine is undefined (either operand has
    /// zero length, or rounding pushes the ratio outside `[-1, 1]`).
    pub fn angle_to(&self, other: &Self) -> f64 {
        let angle = (self.dot(other) / (self.length() * other.length())).acos();
        if angle.is_nan() {
            0.0
        } else {
            angle
        }
    }

    /// Component-wise comparison with a strict absolute tolerance.
    pub fn epsilon_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// [`Vec3::epsilon_eq`] with the default tolerance [`EPSILON`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.epsilon_eq(other, EPSILON)
    }
}

/// Converts a 3-element `[f64; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use simgeom_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

/// Renders as `(x, y, z)`, the form accepted by [`parse_vector`].
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

impl FromStr for Vec3 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vector(s)
    }
}

/// Parses `"(x, y, z)"` or `"x, y, z"`.
///
/// Surrounding whitespace and whitespace around commas is ignored. The
/// parentheses are optional but must be balanced, and there must be exactly
/// three numeric fields.
///
/// # Examples
/// ```
/// use simgeom_math::{parse_vector, Vec3};
/// assert_eq!(parse_vector(" (1.0 ,2, 3)").unwrap(), Vec3::new(1.0, 2.0, 3.0));
/// assert!(parse_vector("(1, 2, 3").is_err());
/// ```
pub fn parse_vector(input: &str) -> Result<Vec3, MathError> {
    let trimmed = input.trim();
    if trimmed.len() < 2 {
        return Err(MathError::InvalidArgument(format!(
            "invalid vector string '{trimmed}'"
        )));
    }

    let body = match (trimmed.starts_with('('), trimmed.ends_with(')')) {
        (true, true) => trimmed[1..trimmed.len() - 1].trim(),
        (false, false) => trimmed,
        _ => {
            return Err(MathError::InvalidArgument(format!(
                "unbalanced parentheses in '{trimmed}'"
            )))
        }
    };

    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(MathError::InvalidArgument(format!(
            "expected three vector components, got {}",
            fields.len()
        )));
    }

    let mut data = [0.0; 3];
    for (slot, field) in data.iter_mut().zip(&fields) {
        *slot = field.parse::<f64>().map_err(|err| {
            MathError::InvalidArgument(format!("invalid vector component '{field}': {err}"))
        })?;
    }
    Ok(Vec3::from(data))
}

/// Linear interpolation `v0·(1-u) + v1·u`.
///
/// `u` is not clamped; values outside `[0, 1]` extrapolate along the line.
pub fn interpolate(v0: &Vec3, v1: &Vec3, u: f64) -> Vec3 {
    v0.scale(1.0 - u).add(&v1.scale(u))
}

/// Planar distance between two points, ignoring Z.
pub fn lateral_distance(a: &Vec3, b: &Vec3) -> f64 {
    Vec3::new(a.x(), a.y(), 0.0).distance(&Vec3::new(b.x(), b.y(), 0.0))
}
