//! # Subdivision Errors
//!
//! Error types for the subdivision algorithms. Every variant is an input
//! contract violation; nothing here is transient or recoverable.

use thiserror::Error;

/// Errors raised by the subdivision entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubdivideError {
    /// A flattened lattice has the wrong number of points for the stated
    /// resolution.
    #[error("point count mismatch: expected {expected} lattice points, got {actual}")]
    PointCountMismatch {
        /// Point count implied by the resolution.
        expected: usize,
        /// Point count actually supplied.
        actual: usize,
    },

    /// A plane point list cannot be reassembled because its length is not
    /// a perfect square (or the grid has fewer than two points per side).
    #[error("point list of length {count} is not a square grid")]
    NotASquareGrid {
        /// Length of the offending point list.
        count: usize,
    },

    /// The requested resolution exceeds the configured safety bound.
    #[error("resolution too high: {cuts} cuts (max: {max})")]
    ResolutionTooHigh {
        /// Requested cut count.
        cuts: u32,
        /// Configured maximum.
        max: u32,
    },
}

impl SubdivideError {
    /// Creates a point count mismatch error.
    pub fn point_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::PointCountMismatch { expected, actual }
    }

    /// Creates a resolution error against the configured maximum.
    pub fn resolution_too_high(cuts: u32) -> Self {
        Self::ResolutionTooHigh {
            cuts,
            max: config::constants::MAX_SUBDIVISION_CUTS,
        }
    }
}

/// Rejects resolutions beyond [`config::constants::MAX_SUBDIVISION_CUTS`].
pub(crate) fn check_resolution(cuts: u32) -> Result<(), SubdivideError> {
    if cuts > config::constants::MAX_SUBDIVISION_CUTS {
        return Err(SubdivideError::resolution_too_high(cuts));
    }
    Ok(())
}
