//! # Planar Grid Subdivision
//!
//! The general-purpose flat-grid tessellator: a regular point grid on
//! the canonical `[-1, 1]²` plane, and the reassembly of any square
//! row-major grid into quads. Displacement pipelines run between the
//! two calls — sample a heightmap per point, then stitch.

use glam::DVec3;
use tessella_scene::Node;

use crate::error::{check_resolution, SubdivideError};
use crate::interpolate::lerp;

/// Builds the `(cuts + 1)²` regular grid on the canonical `[-1, 1]²`
/// plane at `z = 0`, row-major (`y` outer, `x` inner).
///
/// `cuts = 0` yields the single corner point `(-1, -1, 0)`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tessella_subdivide::plane_subdivision_points;
///
/// let points = plane_subdivision_points(2).unwrap();
/// assert_eq!(points.len(), 9);
/// assert_eq!(points[4], DVec3::new(0.0, 0.0, 0.0));
/// ```
pub fn plane_subdivision_points(cuts: u32) -> Result<Vec<DVec3>, SubdivideError> {
    check_resolution(cuts)?;

    let min = DVec3::new(-1.0, -1.0, 0.0);
    if cuts == 0 {
        return Ok(vec![min]);
    }

    let side = cuts + 1;
    let mut points = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        let row_start = lerp(min, DVec3::new(-1.0, 1.0, 0.0), y, cuts);
        let row_end = lerp(
            DVec3::new(1.0, -1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            y,
            cuts,
        );
        for x in 0..side {
            points.push(lerp(row_start, row_end, x, cuts));
        }
    }
    Ok(points)
}

/// Reassembles a square row-major point grid into a fragment of quads,
/// one per grid cell: `(p(x, y), p(x+1, y), p(x+1, y+1), p(x, y+1))`,
/// row by row.
///
/// The side length is inferred from the list length, so displaced grids
/// from [`plane_subdivision_points`] can be passed straight through.
///
/// # Errors
///
/// Returns [`SubdivideError::NotASquareGrid`] when the length is not a
/// perfect square of at least 2 × 2.
///
/// # Example
///
/// ```rust
/// use tessella_subdivide::{plane_subdivision_points, quads_from_plane_subdivision_points};
///
/// let points = plane_subdivision_points(4).unwrap();
/// let grid = quads_from_plane_subdivision_points(&points).unwrap();
/// assert_eq!(grid.children().len(), 16);
/// assert_eq!(grid.triangle_count(), 32);
/// ```
pub fn quads_from_plane_subdivision_points(points: &[DVec3]) -> Result<Node, SubdivideError> {
    let side = grid_side(points.len()).ok_or(SubdivideError::NotASquareGrid {
        count: points.len(),
    })?;

    let at = |x: usize, y: usize| points[y * side + x];

    let mut quads = Vec::with_capacity((side - 1) * (side - 1));
    for y in 0..side - 1 {
        for x in 0..side - 1 {
            quads.push(Node::quad(
                at(x, y),
                at(x + 1, y),
                at(x + 1, y + 1),
                at(x, y + 1),
            ));
        }
    }
    Ok(Node::fragment(quads))
}

/// Side length of a square grid with `count` points, if it is one.
fn grid_side(count: usize) -> Option<usize> {
    let side = (count as f64).sqrt().round() as usize;
    (side >= 2 && side * side == count).then_some(side)
}
