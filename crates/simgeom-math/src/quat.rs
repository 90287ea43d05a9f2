// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::Vec3;

/// Quaternion stored as a scalar part `w` and a vector part `v`.
///
/// * Represents a rotation only when unit length; construction does not
///   normalize, call [`Quat::normalize`] explicitly.
/// * All angles are expressed in radians.
/// * The conjugate is computed on demand, so values stay plain `Copy` data.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    w: f64,
    v: Vec3,
}

impl Quat {
    /// The identity rotation `(1, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, Vec3::ZERO);

    /// Creates a quaternion from its scalar and vector parts.
    ///
    /// Use [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(w: f64, v: Vec3) -> Self {
        Self { w, v }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Scalar part.
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Vector part.
    pub const fn v(&self) -> Vec3 {
        self.v
    }

    /// Rotation of `angle` radians about `axis`: `(cos(θ/2), sin(θ/2)·â)`.
    ///
    /// The axis is normalized first. A degenerate axis normalizes to zero,
    /// which yields `(cos(θ/2), 0)`: not unit length unless `θ` is a
    /// multiple of 2π.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let half = angle / 2.0;
        Self::new(half.cos(), axis.normalize().scale(half.sin()))
    }

    /// Smallest rotation taking direction `start` onto direction `end`.
    ///
    /// Both inputs must already be unit vectors. When they are colinear the
    /// cross product vanishes and the axis falls back to `start × X`, then to
    /// `start × Y` if `start` lies along X.
    ///
    /// # Examples
    /// ```
    /// use simgeom_math::{Quat, Vec3};
    /// let q = Quat::from_mapping(Vec3::UNIT_X, Vec3::UNIT_Y);
    /// assert!(q.rotate(Vec3::UNIT_X).approx_eq(&Vec3::UNIT_Y));
    /// ```
    pub fn from_mapping(start: Vec3, end: Vec3) -> Self {
        let mut axis = start.cross(&end);
        if Vec3::ZERO.approx_eq(&axis) {
            axis = start.cross(&Vec3::UNIT_X);
            if Vec3::ZERO.approx_eq(&axis) {
                axis = start.cross(&Vec3::UNIT_Y);
            }
        }
        // Unit inputs can round to a dot product just past ±1.
        let angle = start.dot(&end).clamp(-1.0, 1.0).acos();
        Self::from_axis_angle(axis, angle)
    }

    /// Rotation from Euler angles: roll about X, pitch about Y, heading about Z.
    ///
    /// Uses the half-angle product expansion
    ///
    /// ```text
    /// w = cφ cθ cψ + sφ sθ sψ
    /// x = sφ cθ cψ - cφ sθ sψ
    /// y = cφ sθ cψ + sφ cθ sψ
    /// z = cφ cθ sψ - sφ sθ cψ
    /// ```
    ///
    /// with `φ = roll/2`, `θ = pitch/2`, `ψ = heading/2`. The result equals
    /// `heading_z * pitch_y * roll_x`: roll is applied first.
    pub fn from_euler_angles(roll: f64, pitch: f64, heading: f64) -> Self {
        let (sin_phi, cos_phi) = (roll / 2.0).sin_cos();
        let (sin_theta, cos_theta) = (pitch / 2.0).sin_cos();
        let (sin_psi, cos_psi) = (heading / 2.0).sin_cos();

        let w = cos_phi * cos_theta * cos_psi + sin_phi * sin_theta * sin_psi;
        let x = sin_phi * cos_theta * cos_psi - cos_phi * sin_theta * sin_psi;
        let y = cos_phi * sin_theta * cos_psi + sin_phi * cos_theta * sin_psi;
        let z = cos_phi * cos_theta * sin_psi - sin_phi * sin_theta * cos_psi;
        Self::new(w, Vec3::new(x, y, z))
    }

    /// Scales every component by `s`.
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.w * s, self.v.scale(s))
    }

    /// Hamilton product `self * other`.
    ///
    /// Non-commutative. For unit operands the result is the rotation `other`
    /// followed by `self` when applied with [`Quat::rotate`].
    pub fn multiply(&self, other: &Self) -> Self {
        let (aw, [ax, ay, az]) = (self.w, self.v.to_array());
        let (bw, [bx, by, bz]) = (other.w, other.v.to_array());

        Self::new(
            aw * bw - ax * bx - ay * by - az * bz,
            Vec3::new(
                aw * bx + ax * bw + ay * bz - az * by,
                aw * by + ay * bw + az * bx - ax * bz,
                aw * bz + az * bw + ax * by - ay * bx,
            ),
        )
    }

    /// Conjugate `(w, -v)`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, self.v.scale(-1.0))
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    ///
    /// A zero quaternion has no inverse; the result is non-finite.
    pub fn inverse(&self) -> Self {
        self.conjugate().scale(1.0 / self.length_squared())
    }

    /// Unit quaternion in the same direction, `q / |q|`.
    ///
    /// Not guarded: normalizing the zero quaternion yields NaN components.
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f64 {
        self.w * self.w + self.v.dot(&self.v)
    }

    /// Norm.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Rotates `v` by this (unit) quaternion via `q · (0, v) · q*`.
    ///
    /// Returns `v` untouched when `w` is within 1e-6 of 1 (identity) or when
    /// `v` is approximately zero.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        if (self.w - 1.0).abs() < 1e-6 {
            return v;
        }
        if v.approx_eq(&Vec3::ZERO) {
            return v;
        }
        self.multiply(&Self::new(0.0, v))
            .multiply(&self.conjugate())
            .v
    }

    /// Rotation angle `2·acos(w)`, in `[0, 2π]` for unit quaternions.
    pub fn rotation_angle(&self) -> f64 {
        2.0 * self.w.acos()
    }

    /// Rotation axis `v / sqrt(1 - w²)`.
    ///
    /// The axis is undefined for rotations of ≈0 or ≈2π; in that case
    /// [`Vec3::UNIT_Y`] is returned.
    pub fn rotation_axis(&self) -> Vec3 {
        let s = (1.0 - self.w * self.w).sqrt();
        if s.abs() > 1e-5 {
            return self.v.scale(1.0 / s);
        }
        Vec3::UNIT_Y
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Renders as `[w, (x, y, z)]`.
impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.w, self.v)
    }
}
