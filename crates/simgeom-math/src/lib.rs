// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Math primitives for the simgeom kernel: 3-D vectors, scalar angle
//! normalization, and quaternion rotations.
//!
//! Everything here is a pure function over `Copy` values. Nothing caches,
//! nothing locks, and any call may run on any thread.
//!
//! Arithmetic is `f64` throughout. Degenerate inputs (zero-length vectors,
//! undefined angles) resolve to documented fallback values instead of errors;
//! only textual parsing and component indexing can fail, see [`MathError`].

pub mod angles;
mod error;
mod quat;
mod vec3;

pub use angles::TurnDirection;
pub use error::MathError;
pub use quat::Quat;
pub use vec3::{interpolate, lateral_distance, parse_vector, Vec3};

/// Degeneracy threshold shared by the math routines.
///
/// Vectors shorter than this normalize to [`Vec3::ZERO`], and it is the
/// default tolerance of [`Vec3::approx_eq`].
pub const EPSILON: f64 = 1e-6;
