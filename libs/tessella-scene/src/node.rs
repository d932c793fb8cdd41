//! # Scene Tree Nodes
//!
//! The closed set of renderable node kinds. Every procedurally built
//! model is a tree of these values: leaves emit themselves, fragments
//! emit their children in order, and solids name a subtree for the STL
//! `solid` / `endsolid` brackets.
//!
//! The tree is a pure value structure: every node exclusively owns its
//! children and nothing is mutated after construction.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::triangle::Triangle;

/// A node in the renderable scene tree.
///
/// # Example
///
/// ```rust
/// use tessella_scene::{DVec3, Node};
///
/// let quad = Node::quad(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// );
/// // A quad is sugar for a fragment of two triangles.
/// assert_eq!(quad.children().len(), 2);
/// assert_eq!(quad.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A bare vertex leaf.
    ///
    /// Mostly useful inside fragments that are still being assembled;
    /// a finished STL scene normally contains only triangles.
    Vertex(DVec3),

    /// A single facet leaf.
    Triangle(Triangle),

    /// An ordered sequence of child nodes with no extra semantics.
    ///
    /// Fragments nest arbitrarily and may be empty; an empty fragment
    /// serializes to an empty span.
    Fragment(Vec<Node>),

    /// A named mesh group: the STL `solid`.
    Solid {
        /// Name written into the `solid` / `endsolid` brackets.
        name: String,
        /// The wrapped subtree, typically a fragment of facets.
        child: Box<Node>,
    },
}

impl Node {
    /// Creates a vertex leaf from components.
    pub fn vertex(x: f64, y: f64, z: f64) -> Self {
        Self::Vertex(DVec3::new(x, y, z))
    }

    /// Creates a triangle leaf from three vertices.
    pub fn triangle(a: DVec3, b: DVec3, c: DVec3) -> Self {
        Self::Triangle(Triangle::new(a, b, c))
    }

    /// Creates the two-triangle decomposition of a four-sided patch.
    ///
    /// The quad `(a, b, c, d)` always becomes the triangles `(a, b, c)`
    /// and `(a, c, d)`; a quad is never serialized directly.
    pub fn quad(a: DVec3, b: DVec3, c: DVec3, d: DVec3) -> Self {
        Self::Fragment(vec![Self::triangle(a, b, c), Self::triangle(a, c, d)])
    }

    /// Creates an ordered composite from any number of children.
    pub fn fragment(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }

    /// Wraps a subtree with a solid name.
    pub fn solid(name: impl Into<String>, child: Node) -> Self {
        Self::Solid {
            name: name.into(),
            child: Box::new(child),
        }
    }

    /// Returns the direct children of a fragment, or an empty slice for
    /// every other node kind. A solid's subtree is reached via
    /// [`Node::child`] instead.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Fragment(children) => children,
            _ => &[],
        }
    }

    /// Returns the wrapped subtree of a solid.
    pub fn child(&self) -> Option<&Node> {
        match self {
            Self::Solid { child, .. } => Some(child),
            _ => None,
        }
    }

    /// Returns the solid name, if this node is a solid.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Solid { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Counts the triangle leaves in this subtree.
    ///
    /// This is the value the binary STL writer emits in the facet count
    /// field; vertex leaves contribute nothing.
    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Vertex(_) => 0,
            Self::Triangle(_) => 1,
            Self::Fragment(children) => children.iter().map(Node::triangle_count).sum(),
            Self::Solid { child, .. } => child.triangle_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> DVec3 {
        DVec3::new(x, y, z)
    }

    #[test]
    fn test_vertex_arithmetic_round_trips() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(4.0, 5.0, 6.0);
        assert_eq!((a + b) - b, a);
        assert_eq!((a * 2.0) / 2.0, a);
    }

    #[test]
    fn test_vertex_scale_is_component_wise() {
        let a = v(1.0, -2.0, 3.0);
        assert_eq!(a * 3.0, v(3.0, -6.0, 9.0));
        // Hadamard product scales each axis independently.
        assert_eq!(a * v(2.0, 0.5, -1.0), v(2.0, -1.0, -3.0));
    }

    #[test]
    fn test_quad_decomposes_into_two_triangles() {
        let quad = Node::quad(
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
        );
        assert_eq!(
            quad,
            Node::fragment(vec![
                Node::triangle(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0)),
                Node::triangle(v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)),
            ])
        );
    }

    #[test]
    fn test_quad_equality_is_structural() {
        let corners = [
            v(0.0, 0.0, 0.0),
            v(2.0, 0.0, 0.0),
            v(2.0, 2.0, 0.0),
            v(0.0, 2.0, 0.0),
        ];
        let a = Node::quad(corners[0], corners[1], corners[2], corners[3]);
        let b = Node::quad(corners[0], corners[1], corners[2], corners[3]);
        let rotated = Node::quad(corners[1], corners[2], corners[3], corners[0]);
        assert_eq!(a, b);
        assert_ne!(a, rotated);
    }

    #[test]
    fn test_empty_fragment_is_legal() {
        let empty = Node::fragment(Vec::new());
        assert!(empty.children().is_empty());
        assert_eq!(empty.triangle_count(), 0);
    }

    #[test]
    fn test_nested_fragment_triangle_count() {
        let tri = Node::triangle(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0));
        let scene = Node::solid(
            "sample",
            Node::fragment(vec![
                tri.clone(),
                Node::fragment(vec![tri.clone(), tri.clone()]),
                Node::Vertex(v(9.0, 9.0, 9.0)),
            ]),
        );
        assert_eq!(scene.triangle_count(), 3);
        assert_eq!(scene.name(), Some("sample"));
        assert!(scene.child().is_some());
    }

    #[test]
    fn test_scene_tree_serde_round_trip() {
        let scene = Node::solid(
            "sample",
            Node::fragment(vec![
                Node::triangle(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)),
                Node::quad(
                    v(0.0, 0.0, 1.0),
                    v(1.0, 0.0, 1.0),
                    v(1.0, 1.0, 1.0),
                    v(0.0, 1.0, 1.0),
                ),
                Node::fragment(Vec::new()),
                Node::Vertex(v(0.5, -0.5, 2.0)),
            ]),
        );
        let json = serde_json::to_string(&scene).unwrap();
        let restored: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, scene);
    }
}
