//! # Quad Subdivision
//!
//! Two ways of cutting a four-sided patch into smaller quads:
//!
//! - **Ladder** subdivision treats the quad as a ruled surface between
//!   two rails and produces a single strip of rungs. The rails may have
//!   different lengths or directions, which is what makes it suitable
//!   for frustum faces and cylindrical bands.
//! - **Bilinear** subdivision cuts the patch both ways into a full
//!   `cuts × cuts` grid of sub-quads.

use glam::DVec3;
use tessella_scene::Node;

use crate::error::{check_resolution, SubdivideError};
use crate::interpolate::lerp;

/// Subdivides a quad into `cuts` rung quads between the rails `v1 → v2`
/// and `v4 → v3`.
///
/// Both rails are interpolated at the same resolution and corresponding
/// points are paired, so the first rung starts exactly on the `(v1, v4)`
/// side and the last ends exactly on `(v2, v3)`.
///
/// Returns a fragment of exactly `cuts` quads; `cuts = 0` yields an
/// empty fragment.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tessella_subdivide::ladder_subdivide_quads;
///
/// let strip = ladder_subdivide_quads(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(2.0, 2.0, 0.0),
///     DVec3::new(0.0, 2.0, 0.0),
///     2,
/// )
/// .unwrap();
/// assert_eq!(strip.children().len(), 2);
/// ```
pub fn ladder_subdivide_quads(
    v1: DVec3,
    v2: DVec3,
    v3: DVec3,
    v4: DVec3,
    cuts: u32,
) -> Result<Node, SubdivideError> {
    check_resolution(cuts)?;

    let mut quads = Vec::with_capacity(cuts as usize);
    for i in 0..cuts {
        quads.push(Node::quad(
            lerp(v1, v2, i, cuts),
            lerp(v1, v2, i + 1, cuts),
            lerp(v4, v3, i + 1, cuts),
            lerp(v4, v3, i, cuts),
        ));
    }
    Ok(Node::fragment(quads))
}

/// Subdivides a quad into a `cuts × cuts` grid of sub-quads by bilinear
/// interpolation of its corners.
///
/// The outer loop walks the `v1 → v2` axis and the inner loop the
/// `v1 → v4` axis; each cell is emitted as
/// `(p(x, y), p(x, y+1), p(x+1, y+1), p(x+1, y))`.
///
/// Returns a fragment of `cuts²` quads; `cuts = 0` yields an empty
/// fragment.
pub fn quad_subdivision(
    v1: DVec3,
    v2: DVec3,
    v3: DVec3,
    v4: DVec3,
    cuts: u32,
) -> Result<Node, SubdivideError> {
    check_resolution(cuts)?;

    if cuts == 0 {
        return Ok(Node::fragment(Vec::new()));
    }

    // Bilinear lattice point: along v1->v2 / v4->v3 by x, then across by y.
    let point = |x: u32, y: u32| {
        let near = lerp(v1, v2, x, cuts);
        let far = lerp(v4, v3, x, cuts);
        lerp(near, far, y, cuts)
    };

    let mut quads = Vec::with_capacity((cuts * cuts) as usize);
    for x in 0..cuts {
        for y in 0..cuts {
            quads.push(Node::quad(
                point(x, y),
                point(x, y + 1),
                point(x + 1, y + 1),
                point(x + 1, y),
            ));
        }
    }
    Ok(Node::fragment(quads))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> DVec3 {
        DVec3::new(x, y, 0.0)
    }

    #[test]
    fn test_ladder_matches_manual_split() {
        let strip =
            ladder_subdivide_quads(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), 2).unwrap();
        assert_eq!(
            strip,
            Node::fragment(vec![
                Node::quad(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 2.0), v(0.0, 2.0)),
                Node::quad(v(1.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(1.0, 2.0)),
            ])
        );
    }

    #[test]
    fn test_ladder_produces_cuts_quads() {
        let strip =
            ladder_subdivide_quads(v(0.0, 0.0), v(3.0, 0.0), v(4.0, 5.0), v(0.0, 5.0), 7).unwrap();
        assert_eq!(strip.children().len(), 7);
        assert_eq!(strip.triangle_count(), 14);
    }

    #[test]
    fn test_ladder_reconstructs_rail_endpoints() {
        // Rails of different length and direction, as on a frustum face.
        let (v1, v2) = (v(0.0, 0.0), v(6.0, 0.0));
        let (v3, v4) = (v(5.0, 3.0), v(1.0, 3.0));
        let strip = ladder_subdivide_quads(v1, v2, v3, v4, 3).unwrap();

        // First rung starts on the (v1, v4) side.
        let Node::Triangle(opening) = &strip.children()[0].children()[0] else {
            panic!("expected a triangle child");
        };
        assert_eq!(opening.a, v1);
        // Last rung ends exactly on v2 / v3.
        let Node::Triangle(closing) = &strip.children()[2].children()[0] else {
            panic!("expected a triangle child");
        };
        assert_eq!(closing.b, v2);
        assert_eq!(closing.c, v3);
    }

    #[test]
    fn test_ladder_zero_cuts_is_empty() {
        let strip =
            ladder_subdivide_quads(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), 0).unwrap();
        assert_eq!(strip, Node::fragment(Vec::new()));
    }

    #[test]
    fn test_ladder_rejects_excessive_resolution() {
        let cuts = config::constants::MAX_SUBDIVISION_CUTS + 1;
        let result =
            ladder_subdivide_quads(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), cuts);
        assert!(matches!(
            result,
            Err(SubdivideError::ResolutionTooHigh { .. })
        ));
    }

    #[test]
    fn test_quad_subdivision_matches_manual_grid() {
        let grid =
            quad_subdivision(v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), 2).unwrap();
        assert_eq!(
            grid,
            Node::fragment(vec![
                Node::quad(v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(1.0, 0.0)),
                Node::quad(v(0.0, 1.0), v(0.0, 2.0), v(1.0, 2.0), v(1.0, 1.0)),
                Node::quad(v(1.0, 0.0), v(1.0, 1.0), v(2.0, 1.0), v(2.0, 0.0)),
                Node::quad(v(1.0, 1.0), v(1.0, 2.0), v(2.0, 2.0), v(2.0, 1.0)),
            ])
        );
    }

    #[test]
    fn test_quad_subdivision_count_is_cuts_squared() {
        let grid =
            quad_subdivision(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), 5).unwrap();
        assert_eq!(grid.children().len(), 25);
    }
}
