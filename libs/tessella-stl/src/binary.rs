//! # Binary STL Rendering
//!
//! Byte form of the scene tree. The layout per solid is the standard
//! one: an 80-byte reserved header (zero-filled), a little-endian u32
//! facet count, then one 50-byte record per facet — a zero normal,
//! three f32 vertices, and a zero attribute byte count.
//!
//! Coordinates are narrowed from f64 to f32 only here, at the byte
//! boundary.

use config::constants::{STL_COUNT_LEN, STL_FACET_LEN, STL_HEADER_LEN, STL_VERTEX_LEN};
use glam::DVec3;
use tessella_scene::{Node, Triangle};

/// Renders any renderable node to its binary STL bytes.
///
/// A solid produces a complete, standard binary STL stream; fragments
/// and leaves produce the corresponding span of records, concatenated
/// in document order.
///
/// # Example
///
/// ```rust
/// use tessella_scene::{DVec3, Node};
/// use tessella_stl::render_binary;
///
/// let tri = Node::triangle(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(render_binary(&tri).len(), 50);
/// ```
pub fn render_binary(node: &Node) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        STL_HEADER_LEN + STL_COUNT_LEN + node.triangle_count() * STL_FACET_LEN,
    );
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut Vec<u8>) {
    match node {
        Node::Vertex(vertex) => write_vertex(vertex, out),
        Node::Triangle(triangle) => write_triangle(triangle, out),
        Node::Fragment(children) => {
            for child in children {
                write_node(child, out);
            }
        }
        // The binary header carries no name; the 80 reserved bytes stay
        // zero and the facet count covers the whole subtree.
        Node::Solid { child, .. } => {
            out.extend_from_slice(&[0u8; STL_HEADER_LEN]);
            out.extend_from_slice(&(child.triangle_count() as u32).to_le_bytes());
            write_node(child, out);
        }
    }
}

fn write_vertex(vertex: &DVec3, out: &mut Vec<u8>) {
    for component in [vertex.x, vertex.y, vertex.z] {
        out.extend_from_slice(&(component as f32).to_le_bytes());
    }
}

fn write_triangle(triangle: &Triangle, out: &mut Vec<u8>) {
    // Zero normal (three f32 zeros); readers recompute from winding.
    out.extend_from_slice(&[0u8; STL_VERTEX_LEN]);
    for vertex in triangle.vertices() {
        write_vertex(&vertex, out);
    }
    // Attribute byte count, always zero.
    out.extend_from_slice(&0u16.to_le_bytes());
}
