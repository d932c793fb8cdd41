//! # Configuration Constants
//!
//! Centralized constants for the tessella mesh pipeline. All precision
//! tolerances, tessellation limits, and STL layout sizes are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Maximum values for safety bounds
//! - **STL Layout**: Fixed byte sizes of the binary STL format

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Tolerance shared by every test that compares coordinates produced by
/// the subdivision arithmetic. Interpolation steps accumulate at most a
/// few ulps of rounding, so anything within `1e-10` of the expected
/// value counts as equal; the geometry types themselves compare exactly
/// and leave tolerance to call sites.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let lattice_corner: f64 = 2.0 / 3.0 * 3.0;
/// assert!((lattice_corner - 2.0).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Checks if two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a floating-point value is approximately zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-12));
/// assert!(!approx_zero(0.001));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum cut count accepted by the subdivision algorithms.
///
/// A planar grid at this resolution already produces over 33 million
/// facets; anything beyond it is almost certainly a caller bug and would
/// exhaust memory long before the mesh is useful. Subdivision entry points
/// reject higher resolutions instead of attempting the allocation.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SUBDIVISION_CUTS;
///
/// let requested = 128;
/// assert!(requested <= MAX_SUBDIVISION_CUTS);
/// ```
pub const MAX_SUBDIVISION_CUTS: u32 = 4096;

// =============================================================================
// STL LAYOUT
// =============================================================================

/// Length in bytes of the binary STL file header.
///
/// The header is reserved space; this writer fills it with zeros.
pub const STL_HEADER_LEN: usize = 80;

/// Length in bytes of the little-endian facet count that follows the
/// binary STL header.
pub const STL_COUNT_LEN: usize = 4;

/// Length in bytes of one facet record in a binary STL file.
///
/// A record is a 12-byte normal, three 12-byte vertices, and a 2-byte
/// attribute count: `12 + 36 + 2 = 50`.
///
/// # Example
///
/// ```rust
/// use config::constants::{STL_HEADER_LEN, STL_COUNT_LEN, STL_FACET_LEN};
///
/// // Total size of a binary STL solid with 100 facets.
/// let size = STL_HEADER_LEN + STL_COUNT_LEN + 100 * STL_FACET_LEN;
/// assert_eq!(size, 5084);
/// ```
pub const STL_FACET_LEN: usize = 50;

/// Length in bytes of one vertex record in a binary STL facet
/// (three little-endian 32-bit floats).
pub const STL_VERTEX_LEN: usize = 12;
