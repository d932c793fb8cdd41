//! # Tessella STL
//!
//! Serializes a [`tessella_scene::Node`] tree to the STL mesh format,
//! as text or bytes.
//!
//! ## Architecture
//!
//! ```text
//! tessella-scene (Node tree) → render        → ASCII STL String
//!                            → render_binary → binary STL Vec<u8>
//! ```
//!
//! Both renderers are pure recursive walks in document order; the only
//! sink is the returned buffer. Normals are always emitted as zero,
//! which is legal STL — consumers recompute them from winding.
//!
//! ## Usage
//!
//! ```rust
//! use tessella_scene::{DVec3, Node};
//! use tessella_stl::{render, render_binary};
//!
//! let scene = Node::solid(
//!     "sample",
//!     Node::fragment(vec![Node::triangle(
//!         DVec3::new(0.0, 0.0, 0.0),
//!         DVec3::new(1.0, 0.0, 0.0),
//!         DVec3::new(0.0, 1.0, 0.0),
//!     )]),
//! );
//!
//! assert!(render(&scene).starts_with("solid sample\n"));
//! assert_eq!(render_binary(&scene).len(), 84 + 50);
//! ```

pub mod ascii;
pub mod binary;

pub use ascii::render;
pub use binary::render_binary;
