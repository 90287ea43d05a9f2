// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors raised by the fallible math entry points.
///
/// Degenerate geometry is never an error; see the crate docs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Malformed textual input (bad arity, unbalanced parentheses, non-numeric field).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Vector component index outside `0..=2`.
    #[error("component index {index} out of range (expected 0, 1, or 2)")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}
