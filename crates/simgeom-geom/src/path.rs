// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::cmp::Ordering;

use simgeom_math::Vec3;
use tracing::debug;

/// Cursor that walks a polyline by arc length.
///
/// The cursor sits on segment `current_point_index → current_point_index + 1`
/// at `distance_from_current_point` along it. Once the index reaches the last
/// point the path is complete and the cursor stays on the final point.
///
/// With wraparound, arriving at the last point jumps back to the first point
/// instead; the closing segment from last to first is never traversed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInterpolator {
    path: Vec<Vec3>,
    current: usize,
    distance: f64,
    wraparound: bool,
}

impl PathInterpolator {
    /// Walks `path` once, stopping at its last point.
    pub fn new(path: impl Into<Vec<Vec3>>) -> Self {
        Self {
            path: path.into(),
            current: 0,
            distance: 0.0,
            wraparound: false,
        }
    }

    /// Walks `path` forever, restarting from the first point.
    pub fn with_wraparound(path: impl Into<Vec<Vec3>>) -> Self {
        Self {
            wraparound: true,
            ..Self::new(path)
        }
    }

    /// The polyline being walked.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// Index of the point starting the current segment.
    pub fn current_point_index(&self) -> usize {
        self.current
    }

    /// Distance travelled along the current segment.
    pub fn distance_from_current_point(&self) -> f64 {
        self.distance
    }

    /// Returns `true` once the cursor has reached the last point. A path with
    /// fewer than two points is complete from the start.
    pub fn is_path_complete(&self) -> bool {
        self.current + 1 >= self.path.len()
    }

    /// Advances the cursor by `distance`, crossing as many segments as needed.
    ///
    /// A segment is left only when the carried distance strictly exceeds its
    /// length, so a NaN distance stays on the current segment. Negative
    /// distances move backward within the current segment but never cross to
    /// a previous one. When wrapping, whole laps are skipped in one step and
    /// the result matches adding the same total in smaller steps.
    pub fn add_distance(&mut self, distance: f64) {
        self.distance += distance;
        loop {
            if self.is_path_complete() {
                self.distance = 0.0;
                return;
            }
            let segment = self.segment_length();
            if self.distance.partial_cmp(&segment) != Some(Ordering::Greater) {
                return;
            }
            self.current += 1;
            self.distance -= segment;
            if self.wraparound && self.is_path_complete() {
                self.current = 0;
                let lap = self.lap_length();
                let traversable = lap > 0.0 && lap.is_finite() && self.distance.is_finite();
                if !traversable {
                    debug!(lap, "wrapping path cannot be traversed; cursor parked at start");
                    self.distance = 0.0;
                    return;
                }
                if self.distance > lap {
                    // Remainder stays in (0, lap]: an exact multiple ends on the last point.
                    let laps = (self.distance / lap).ceil() - 1.0;
                    self.distance -= laps * lap;
                    if self.distance <= 0.0 {
                        self.distance += lap;
                    }
                }
            }
        }
    }

    /// Current position on the path.
    ///
    /// The last point once complete; `None` for an empty path.
    pub fn position(&self) -> Option<Vec3> {
        if self.is_path_complete() {
            return self.path.last().copied();
        }
        let start = self.path[self.current];
        let end = self.path[self.current + 1];
        Some(start.add(&end.sub(&start).normalize().scale(self.distance)))
    }

    /// Moves the cursor back to the first point.
    pub fn reset(&mut self) {
        self.current = 0;
        self.distance = 0.0;
    }

    fn segment_length(&self) -> f64 {
        self.path[self.current].distance(&self.path[self.current + 1])
    }

    /// Length of one wraparound lap: first point to last, open.
    fn lap_length(&self) -> f64 {
        self.path
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}
