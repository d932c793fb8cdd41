//! # ASCII STL Rendering
//!
//! Text form of the scene tree. Siblings within a fragment are joined
//! by a single newline; a fragment never adds a leading or trailing
//! separator of its own, so nesting fragments cannot introduce blank
//! lines or doubled separators.

use glam::DVec3;
use tessella_scene::{Node, Triangle};

/// Renders any renderable node to its ASCII STL text.
///
/// A full file is a solid node; rendering a bare fragment or leaf gives
/// the corresponding span of the document, which is how sub-models are
/// composed before naming.
///
/// # Example
///
/// ```rust
/// use tessella_scene::Node;
/// use tessella_stl::render;
///
/// assert_eq!(render(&Node::vertex(1.0, 2.0, 3.0)), "vertex 1.0 2.0 3.0");
/// ```
pub fn render(node: &Node) -> String {
    match node {
        Node::Vertex(vertex) => render_vertex(vertex),
        Node::Triangle(triangle) => render_triangle(triangle),
        Node::Fragment(children) => {
            let rendered: Vec<String> = children
                .iter()
                .map(render)
                .filter(|text| !text.is_empty())
                .collect();
            rendered.join("\n")
        }
        Node::Solid { name, child } => {
            let body = render(child);
            if body.is_empty() {
                format!("solid {name}\nendsolid {name}")
            } else {
                format!("solid {name}\n{body}\nendsolid {name}")
            }
        }
    }
}

fn render_vertex(vertex: &DVec3) -> String {
    // Debug formatting keeps the decimal point on integral values
    // (1 renders as "1.0"), which some STL readers insist on.
    format!("vertex {:?} {:?} {:?}", vertex.x, vertex.y, vertex.z)
}

fn render_triangle(triangle: &Triangle) -> String {
    format!(
        "facet normal 0 0 0\n  outer loop\n    {}\n    {}\n    {}\n  endloop\nendfacet",
        render_vertex(&triangle.a),
        render_vertex(&triangle.b),
        render_vertex(&triangle.c),
    )
}
