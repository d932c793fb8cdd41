//! # Barycentric Triangle Subdivision
//!
//! Subdivides a triangle into a regular triangular lattice and stitches
//! the lattice back into facets.
//!
//! The lattice enumerates all `(x, y)` with `x + y <= n` in row-major
//! order (`y` outer, `x` inner), giving the upper-triangular point count
//! `(n + 1)(n + 2) / 2`. Rows shrink as `y` grows, so the flat index of
//! a lattice point needs the closed form in [`lattice_index`] rather
//! than a plain `y * width + x`.

use glam::DVec3;
use tessella_scene::{Node, Triangle};

use crate::error::{check_resolution, SubdivideError};

/// Number of points in the triangular lattice at the given resolution.
///
/// # Example
///
/// ```rust
/// use tessella_subdivide::lattice_len;
///
/// assert_eq!(lattice_len(3), 10);
/// assert_eq!(lattice_len(0), 1);
/// ```
#[inline]
pub fn lattice_len(points_per_side: u32) -> usize {
    let n = points_per_side as usize;
    (n + 1) * (n + 2) / 2
}

/// Flat index of lattice point `(x, y)` in the row-major triangular
/// lattice of resolution `points_per_side`.
///
/// Row `y` starts at the triangular row offset `y·(2n − y + 3) / 2`.
/// Requires `points_per_side >= 1` and `x + y <= points_per_side`.
///
/// # Example
///
/// ```rust
/// use tessella_subdivide::lattice_index;
///
/// // Resolution 3: rows start at 0, 4, 7, 9.
/// assert_eq!(lattice_index(3, 0, 1), 4);
/// assert_eq!(lattice_index(3, 2, 1), 6);
/// assert_eq!(lattice_index(3, 0, 3), 9);
/// ```
#[inline]
pub fn lattice_index(points_per_side: u32, x: u32, y: u32) -> usize {
    debug_assert!(points_per_side >= 1);
    debug_assert!(x + y <= points_per_side);
    let n = points_per_side as usize;
    let (x, y) = (x as usize, y as usize);
    y * (n * 2 - y + 3) / 2 + x
}

/// Subdivides the triangle `(v1, v2, v3)` into its barycentric point
/// lattice.
///
/// The edge vectors `v2 − v1` and `v3 − v1` are each divided into
/// `points_per_side` steps; the result holds every combination with
/// `x + y <= points_per_side`, `y` outer, `x` inner — exactly
/// [`lattice_len`] points. A resolution of zero degenerates to `[v1]`.
///
/// This is the canonical way to subdivide a triangle into a regular
/// lattice without distortion near any vertex.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tessella_subdivide::subdivide_points;
///
/// let points = subdivide_points(
///     2,
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(0.0, 2.0, 0.0),
/// )
/// .unwrap();
/// assert_eq!(points.len(), 6);
/// assert_eq!(points[4], DVec3::new(1.0, 1.0, 0.0));
/// ```
pub fn subdivide_points(
    points_per_side: u32,
    v1: DVec3,
    v2: DVec3,
    v3: DVec3,
) -> Result<Vec<DVec3>, SubdivideError> {
    check_resolution(points_per_side)?;

    let n = points_per_side;
    if n == 0 {
        return Ok(vec![v1]);
    }

    let step_u = (v2 - v1) / f64::from(n);
    let step_v = (v3 - v1) / f64::from(n);

    let mut points = Vec::with_capacity(lattice_len(n));
    for y in 0..=n {
        for x in 0..=(n - y) {
            points.push(v1 + step_u * f64::from(x) + step_v * f64::from(y));
        }
    }
    Ok(points)
}

/// Stitches a flattened barycentric lattice into `n²` facets.
///
/// Two families tile the triangle exactly, with no gaps or overlaps:
///
/// - upright facets `(x, y)-(x+1, y)-(x, y+1)` for every cell, and
/// - inverted facets `(x+1, y)-(x+1, y+1)-(x, y+1)` for rows that have
///   a successor.
///
/// All upright facets are emitted first, then all inverted ones, each
/// family in row-major order. With `reversed` set, every facet's vertex
/// order is flipped — that is how a bottom face is built from the same
/// lattice as its top.
///
/// # Errors
///
/// Returns [`SubdivideError::PointCountMismatch`] when `points` does not
/// hold exactly [`lattice_len`] entries for the stated resolution.
pub fn triangles_from_subdivision_points(
    points_per_side: u32,
    points: &[DVec3],
    reversed: bool,
) -> Result<Node, SubdivideError> {
    check_resolution(points_per_side)?;

    let n = points_per_side;
    let expected = lattice_len(n);
    if points.len() != expected {
        return Err(SubdivideError::point_count_mismatch(expected, points.len()));
    }
    if n == 0 {
        return Ok(Node::fragment(Vec::new()));
    }

    let at = |x: u32, y: u32| points[lattice_index(n, x, y)];
    let emit = |a: DVec3, b: DVec3, c: DVec3| {
        let facet = Triangle::new(a, b, c);
        Node::Triangle(if reversed { facet.reversed() } else { facet })
    };

    let mut facets = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..(n - y) {
            facets.push(emit(at(x, y), at(x + 1, y), at(x, y + 1)));
        }
    }
    for y in 0..n {
        for x in 0..(n - y - 1) {
            facets.push(emit(at(x + 1, y), at(x + 1, y + 1), at(x, y + 1)));
        }
    }
    Ok(Node::fragment(facets))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> DVec3 {
        DVec3::new(x, y, z)
    }

    fn sample_lattice() -> Vec<DVec3> {
        subdivide_points(3, v(0.0, 0.0, 1.0), v(3.0, 0.0, 1.0), v(0.0, 3.0, 1.0)).unwrap()
    }

    #[test]
    fn test_lattice_len_is_triangular() {
        assert_eq!(lattice_len(1), 3);
        assert_eq!(lattice_len(2), 6);
        assert_eq!(lattice_len(3), 10);
        assert_eq!(lattice_len(10), 66);
    }

    #[test]
    fn test_lattice_index_matches_enumeration_order() {
        // The closed form must agree with the y-outer x-inner emission
        // order for every valid cell.
        for n in 1..=8u32 {
            let mut flat = 0usize;
            for y in 0..=n {
                for x in 0..=(n - y) {
                    assert_eq!(lattice_index(n, x, y), flat, "n={} x={} y={}", n, x, y);
                    flat += 1;
                }
            }
            assert_eq!(flat, lattice_len(n));
        }
    }

    #[test]
    fn test_subdivide_points_worked_example() {
        assert_eq!(
            sample_lattice(),
            vec![
                v(0.0, 0.0, 1.0),
                v(1.0, 0.0, 1.0),
                v(2.0, 0.0, 1.0),
                v(3.0, 0.0, 1.0),
                v(0.0, 1.0, 1.0),
                v(1.0, 1.0, 1.0),
                v(2.0, 1.0, 1.0),
                v(0.0, 2.0, 1.0),
                v(1.0, 2.0, 1.0),
                v(0.0, 3.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_subdivide_points_zero_resolution_is_apex() {
        let points =
            subdivide_points(0, v(5.0, 5.0, 5.0), v(9.0, 0.0, 0.0), v(0.0, 9.0, 0.0)).unwrap();
        assert_eq!(points, vec![v(5.0, 5.0, 5.0)]);
    }

    #[test]
    fn test_triangles_worked_example() {
        let facets = triangles_from_subdivision_points(3, &sample_lattice(), false).unwrap();
        assert_eq!(facets.children().len(), 9);

        // First upright facet.
        assert_eq!(
            facets.children()[0],
            Node::triangle(v(0.0, 0.0, 1.0), v(1.0, 0.0, 1.0), v(0.0, 1.0, 1.0))
        );
        // Last inverted facet.
        assert_eq!(
            facets.children()[8],
            Node::triangle(v(1.0, 1.0, 1.0), v(1.0, 2.0, 1.0), v(0.0, 2.0, 1.0))
        );
    }

    #[test]
    fn test_triangle_count_is_resolution_squared() {
        for n in 1..=6u32 {
            let points =
                subdivide_points(n, v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)).unwrap();
            let facets = triangles_from_subdivision_points(n, &points, false).unwrap();
            assert_eq!(facets.children().len(), (n * n) as usize);
        }
    }

    #[test]
    fn test_reversed_flips_each_facet() {
        let points = sample_lattice();
        let forward = triangles_from_subdivision_points(3, &points, false).unwrap();
        let backward = triangles_from_subdivision_points(3, &points, true).unwrap();
        for (f, b) in forward.children().iter().zip(backward.children()) {
            let (Node::Triangle(f), Node::Triangle(b)) = (f, b) else {
                panic!("expected triangle children");
            };
            assert_eq!(f.reversed(), *b);
        }
    }

    #[test]
    fn test_wrong_point_count_is_rejected() {
        let mut points = sample_lattice();
        points.pop();
        assert_eq!(
            triangles_from_subdivision_points(3, &points, false),
            Err(SubdivideError::point_count_mismatch(10, 9))
        );
    }

    #[test]
    fn test_zero_resolution_stitches_nothing() {
        let apex = [v(1.0, 1.0, 1.0)];
        let facets = triangles_from_subdivision_points(0, &apex, false).unwrap();
        assert_eq!(facets, Node::fragment(Vec::new()));
    }
}
