// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Planar and spatial geometry built on `simgeom-math`.

This crate provides:
- Convex hulls and point containment (`Polygon`).
- Axis-aligned bounds of point sets (`Aabb`).
- Minimum-area oriented bounding rectangles (`bounding_rect`).
- Exact point-to-segment and segment-to-segment distances (`segment`).
- Arc-length walking along polylines (`PathInterpolator`).

Design notes:
- Planar algorithms read `x` and `y` only; `z` rides along untouched.
- Every routine is a pure function over its inputs and brute-forces the
  given point set; there is no spatial index.
- Degenerate inputs produce documented fallback values, never panics.
  Fallbacks are reported as `tracing` debug events.
"]

/// Axis-aligned bounding boxes.
pub mod aabb;
/// Minimum-area oriented bounding rectangles.
pub mod bounding_rect;
/// Arc-length interpolation along polylines.
pub mod path;
/// Convex hulls and point-in-polygon tests.
pub mod polygon;
/// Point-to-segment and segment-to-segment distance.
pub mod segment;

pub use aabb::Aabb;
pub use bounding_rect::{minimum_bounding_rectangle, BoundingRectangle};
pub use path::PathInterpolator;
pub use polygon::{is_left, Polygon};
pub use segment::{closest_approach, distance_to_point, segment_distance, SegmentApproach};
