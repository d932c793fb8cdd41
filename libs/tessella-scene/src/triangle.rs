//! # Triangle Primitive
//!
//! A single facet: three vertices in caller-determined winding order.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An ordered triple of vertices defining one facet.
///
/// Winding order is whatever the caller supplies; no normal is computed
/// or validated, and zero-area triangles are legal. Consumers that need
/// normals recompute them from the winding.
///
/// # Example
///
/// ```rust
/// use tessella_scene::{DVec3, Triangle};
///
/// let tri = Triangle::new(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(tri.reversed().a, tri.c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub a: DVec3,
    /// Second vertex.
    pub b: DVec3,
    /// Third vertex.
    pub c: DVec3,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    pub fn new(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self { a, b, c }
    }

    /// Returns the triangle with its vertex order reversed.
    ///
    /// Reversing the order flips the implied winding, which is how bottom
    /// faces are produced from the same point lattice as their tops.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.c,
            b: self.b,
            c: self.a,
        }
    }

    /// Returns the vertices as an array in order.
    pub fn vertices(&self) -> [DVec3; 3] {
        [self.a, self.b, self.c]
    }
}
