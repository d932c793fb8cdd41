//! # Tessella Subdivide
//!
//! Pure tessellation algorithms for the tessella mesh kernel: every
//! function takes corner vertices and a resolution and returns either a
//! point lattice or a fully stitched fragment of facets.
//!
//! ## Architecture
//!
//! ```text
//! corner vertices + cuts → tessella-subdivide → Node fragments
//!                                             → point lattices
//! ```
//!
//! All algorithms are deterministic and side-effect free. The resolution
//! parameter only controls granularity, never topology choice. Entry
//! points validate their inputs and return [`SubdivideError`] on contract
//! violations.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use tessella_subdivide::{subdivide_points, triangles_from_subdivision_points};
//!
//! let points = subdivide_points(
//!     3,
//!     DVec3::new(0.0, 0.0, 1.0),
//!     DVec3::new(3.0, 0.0, 1.0),
//!     DVec3::new(0.0, 3.0, 1.0),
//! )
//! .unwrap();
//! assert_eq!(points.len(), 10);
//!
//! let facets = triangles_from_subdivision_points(3, &points, false).unwrap();
//! assert_eq!(facets.triangle_count(), 9);
//! ```

pub mod barycentric;
pub mod error;
pub mod interpolate;
pub mod plane;
pub mod quad;

pub use barycentric::{
    lattice_index, lattice_len, subdivide_points, triangles_from_subdivision_points,
};
pub use error::SubdivideError;
pub use interpolate::{lerp, polar_vertex};
pub use plane::{plane_subdivision_points, quads_from_plane_subdivision_points};
pub use quad::{ladder_subdivide_quads, quad_subdivision};
