//! # Tessella Scene
//!
//! Vectors, primitives, and the composite scene tree for the tessella
//! mesh kernel.
//!
//! ## Architecture
//!
//! ```text
//! tessella-scene (Node tree) → tessella-stl (ASCII / binary STL)
//! ```
//!
//! Vertices are plain [`glam::DVec3`] values, so all vector arithmetic
//! (add, sub, scalar and component-wise multiply, scalar divide) comes
//! from glam's operator implementations and is checked at compile time.
//! Everything renderable is a [`Node`]: triangle and vertex leaves,
//! ordered fragments, and named solids.
//!
//! ## Usage
//!
//! ```rust
//! use tessella_scene::{DVec3, Node};
//!
//! let tri = Node::triangle(
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(0.0, 1.0, 0.0),
//! );
//! let scene = Node::solid("sample", Node::fragment(vec![tri]));
//! assert_eq!(scene.triangle_count(), 1);
//! ```

pub mod node;
pub mod triangle;

pub use glam::DVec3;
pub use node::Node;
pub use triangle::Triangle;
