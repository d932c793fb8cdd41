//! # Hexagonal Tile Terrain
//!
//! Six triangular tiles forming a hexagon, each a closed solid: a
//! heightmap-displaced top lattice, a flat bottom lattice with reversed
//! winding, and three walls of lerp-built quads along the lattice
//! edges. Tiles are nudged outward radially so the pieces print (or
//! preview) with a visible seam.

use std::f64::consts::PI;

use glam::DVec3;
use tessella_scene::{Node, Triangle};
use tessella_subdivide::{
    lerp, subdivide_points, triangles_from_subdivision_points, SubdivideError,
};

/// The six triangular tiles of a hexagon of the given width, fanned
/// around the origin in the `z = 0` plane.
///
/// The quarter-width `a = width / 4` and row height `b = a·√3` place
/// the hexagon's corners at `(±2a, 0)` and `(±a, ±b)`.
pub fn hex_tiles(width: f64) -> [Triangle; 6] {
    let a = width / 4.0;
    let b = a * 3.0_f64.sqrt();
    let v = |x: f64, y: f64| DVec3::new(x, y, 0.0);

    [
        Triangle::new(v(0.0, 0.0), v(2.0 * a, 0.0), v(a, b)),
        Triangle::new(v(-a, b), v(0.0, 0.0), v(a, b)),
        Triangle::new(v(-2.0 * a, 0.0), v(0.0, 0.0), v(-a, b)),
        Triangle::new(v(-2.0 * a, 0.0), v(-a, -b), v(0.0, 0.0)),
        Triangle::new(v(-a, -b), v(a, -b), v(0.0, 0.0)),
        Triangle::new(v(0.0, 0.0), v(a, -b), v(2.0 * a, 0.0)),
    ]
}

/// Builds the six tile solids, named by tile index `"0"` through `"5"`.
///
/// Each tile's top lattice is displaced in z by `sample`, looked up in
/// unit coordinates over the hexagon's bounding box; the bottom stays
/// at `z = 0` with reversed winding, and the two surfaces are joined by
/// walls with `vertical_detail` rungs.
///
/// # Example
///
/// ```rust
/// use tessella_models::hex_tile_models;
///
/// let tiles = hex_tile_models(4.0, 2, 1, |_, _| 0.25).unwrap();
/// assert_eq!(tiles.len(), 6);
/// // Per tile: 4 top + 4 bottom facets, three walls of 2 quads each.
/// assert_eq!(tiles[0].triangle_count(), 4 + 4 + 3 * 2 * 2);
/// ```
pub fn hex_tile_models(
    width: f64,
    detail: u32,
    vertical_detail: u32,
    sample: impl Fn(f64, f64) -> f64,
) -> Result<Vec<Node>, SubdivideError> {
    let fragments = hex_tile_fragments(width, detail, vertical_detail, &sample)?;
    Ok(fragments
        .into_iter()
        .enumerate()
        .map(|(index, fragment)| Node::solid(index.to_string(), fragment))
        .collect())
}

/// Builds the whole terrain as one named solid.
///
/// Same geometry as [`hex_tile_models`], but all six tiles share a
/// single `solid` bracket.
pub fn hex_tile_model(
    name: &str,
    width: f64,
    detail: u32,
    vertical_detail: u32,
    sample: impl Fn(f64, f64) -> f64,
) -> Result<Node, SubdivideError> {
    let fragments = hex_tile_fragments(width, detail, vertical_detail, &sample)?;
    Ok(Node::solid(name, Node::fragment(fragments)))
}

fn hex_tile_fragments(
    width: f64,
    detail: u32,
    vertical_detail: u32,
    sample: &dyn Fn(f64, f64) -> f64,
) -> Result<Vec<Node>, SubdivideError> {
    let a = width / 4.0;
    let b = a * 3.0_f64.sqrt();

    hex_tiles(width)
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            // Nudge each tile outward along its bisector.
            let angle = (1.0 - index as f64) * PI / 3.0;
            let offset = DVec3::new(angle.sin(), angle.cos(), 0.0) * (a / 4.0);

            let lattice = subdivide_points(detail, tile.a, tile.b, tile.c)?;
            let top: Vec<DVec3> = lattice
                .iter()
                .map(|p| {
                    // Unit coordinates over the hexagon's bounding box.
                    let x = (p.x + 2.0 * a) / (4.0 * a);
                    let y = (p.y + b) / (2.0 * b);
                    DVec3::new(p.x, p.y, sample(x, y)) + offset
                })
                .collect();
            let bottom: Vec<DVec3> = lattice.iter().map(|p| *p + offset).collect();

            let parts = vec![
                triangles_from_subdivision_points(detail, &top, false)?,
                triangles_from_subdivision_points(detail, &bottom, true)?,
                wall(
                    &bottom_edge(&top, detail),
                    &bottom_edge(&bottom, detail),
                    vertical_detail,
                ),
                wall(
                    &left_edge(&top, detail),
                    &left_edge(&bottom, detail),
                    vertical_detail,
                ),
                wall(
                    &hypotenuse_edge(&top, detail),
                    &hypotenuse_edge(&bottom, detail),
                    vertical_detail,
                ),
            ];
            Ok(Node::fragment(parts))
        })
        .collect()
}

/// Joins a top and bottom edge with `vertical_detail` rows of quads.
fn wall(top: &[DVec3], bottom: &[DVec3], vertical_detail: u32) -> Node {
    debug_assert_eq!(top.len(), bottom.len());
    let columns = top.len().saturating_sub(1);

    let mut quads = Vec::with_capacity(vertical_detail as usize * columns);
    for y in 0..vertical_detail {
        for x in 0..columns {
            quads.push(Node::quad(
                lerp(bottom[x], top[x], y, vertical_detail),
                lerp(bottom[x + 1], top[x + 1], y, vertical_detail),
                lerp(bottom[x + 1], top[x + 1], y + 1, vertical_detail),
                lerp(bottom[x], top[x], y + 1, vertical_detail),
            ));
        }
    }
    Node::fragment(quads)
}

/// `x`-th triangular number, the row offset arithmetic of the lattice
/// tail.
fn tri_num(x: usize) -> usize {
    x * (x + 1) / 2
}

/// The lattice row `y = 0`: the tile's `v1 → v2` edge.
fn bottom_edge(points: &[DVec3], detail: u32) -> Vec<DVec3> {
    points[..=detail as usize].to_vec()
}

/// First point of each row, walked from the apex down: `v3 → v1`.
fn left_edge(points: &[DVec3], detail: u32) -> Vec<DVec3> {
    (0..=detail as usize)
        .map(|i| points[points.len() - tri_num(i + 1)])
        .collect()
}

/// Last point of each row, walked up: the `v2 → v3` hypotenuse.
fn hypotenuse_edge(points: &[DVec3], detail: u32) -> Vec<DVec3> {
    let detail = detail as usize;
    (0..=detail)
        .map(|i| points[points.len() - 1 - tri_num(detail - i)])
        .collect()
}
