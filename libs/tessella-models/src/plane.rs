//! # Plane Terrain Model
//!
//! A flat grid displaced by a heightmap sample, the classic
//! plane-from-heightmap terrain.

use glam::DVec3;
use tessella_scene::Node;
use tessella_subdivide::{
    plane_subdivision_points, quads_from_plane_subdivision_points, SubdivideError,
};

/// Builds a heightmap-displaced plane wrapped in `solid "plane"`.
///
/// The canonical `[-1, 1]²` grid at the given resolution is mapped to
/// the unit square, lifted in z by `sample(x, y)`, re-centered, and
/// finally scaled per axis by the Hadamard product with `scale` — so a
/// scale of `(50, 50, 4)` spans 50 units of ground with heights in
/// `[0, 4]` for a unit-range sample.
///
/// # Arguments
///
/// * `cuts` - Grid resolution; the result has `2 · cuts²` facets
/// * `scale` - Per-axis output scale
/// * `sample` - Heightmap lookup over the unit square
///
/// # Errors
///
/// Propagates [`SubdivideError`] for out-of-range resolutions; `cuts`
/// must be at least 1 to form any cell.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tessella_models::plane_model;
///
/// let flat = plane_model(8, DVec3::new(10.0, 10.0, 1.0), |_, _| 0.0).unwrap();
/// assert_eq!(flat.triangle_count(), 128);
/// ```
pub fn plane_model(
    cuts: u32,
    scale: DVec3,
    sample: impl Fn(f64, f64) -> f64,
) -> Result<Node, SubdivideError> {
    let points: Vec<DVec3> = plane_subdivision_points(cuts)?
        .into_iter()
        .map(|p| {
            let unit = (p + DVec3::new(1.0, 1.0, 0.0)) * 0.5;
            let lifted = unit + DVec3::new(0.0, 0.0, sample(unit.x, unit.y));
            (lifted - DVec3::new(0.5, 0.5, 0.0)) * scale
        })
        .collect();

    let grid = quads_from_plane_subdivision_points(&points)?;
    Ok(Node::solid("plane", grid))
}
