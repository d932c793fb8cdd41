//! # Triangular Prism Model
//!
//! A radially placed triangular prism: ladder-subdivided lateral bands,
//! a flat bottom facet, and a heightmap-displaced top lattice.

use glam::DVec3;
use tessella_scene::Node;
use tessella_subdivide::{
    ladder_subdivide_quads, polar_vertex, subdivide_points, triangles_from_subdivision_points,
    SubdivideError,
};

/// Builds a triangular prism wrapped in `solid "prism"`.
///
/// The three corners sit on a circle of the given radius at 120° steps.
/// Each lateral face is a ladder of `side_cuts` quads between its bottom
/// and top rails, the bottom is a single facet, and the top is a
/// barycentric lattice at `top_detail` displaced in z by the sample.
/// Sample coordinates are the unit square over the prism's bounding
/// circle.
///
/// # Arguments
///
/// * `radius` - Circumradius of the triangular cross-section
/// * `height` - Prism height, centered on `z = 0`
/// * `side_cuts` - Ladder resolution of each lateral face
/// * `top_detail` - Barycentric resolution of the top face
/// * `sample` - Heightmap lookup over the unit square
///
/// # Example
///
/// ```rust
/// use tessella_models::prism_model;
///
/// let model = prism_model(1.0, 0.25, 72, 10, |_, _| 0.0).unwrap();
/// // 3 walls of 72 quads, one bottom facet, 100 top facets.
/// assert_eq!(model.triangle_count(), 3 * 72 * 2 + 1 + 100);
/// ```
pub fn prism_model(
    radius: f64,
    height: f64,
    side_cuts: u32,
    top_detail: u32,
    sample: impl Fn(f64, f64) -> f64,
) -> Result<Node, SubdivideError> {
    let half = height / 2.0;
    let mut parts = Vec::with_capacity(5);

    for angle in [0.0, 120.0, 240.0] {
        parts.push(ladder_subdivide_quads(
            polar_vertex(radius, angle, -half),
            polar_vertex(radius, angle + 120.0, -half),
            polar_vertex(radius, angle + 120.0, half),
            polar_vertex(radius, angle, half),
            side_cuts,
        )?);
    }

    parts.push(Node::triangle(
        polar_vertex(radius, 0.0, -half),
        polar_vertex(radius, 120.0, -half),
        polar_vertex(radius, 240.0, -half),
    ));

    let top: Vec<DVec3> = subdivide_points(
        top_detail,
        polar_vertex(radius, 0.0, half),
        polar_vertex(radius, 120.0, half),
        polar_vertex(radius, 240.0, half),
    )?
    .into_iter()
    .map(|p| {
        let x = p.x / (2.0 * radius) + 0.5;
        let y = p.y / (2.0 * radius) + 0.5;
        p + DVec3::new(0.0, 0.0, sample(x, y))
    })
    .collect();
    parts.push(triangles_from_subdivision_points(top_detail, &top, false)?);

    Ok(Node::solid("prism", Node::fragment(parts)))
}
