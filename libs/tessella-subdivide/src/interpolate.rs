//! # Interpolation Primitives
//!
//! Linear interpolation by a rational fraction and polar vertex
//! placement. `lerp` is the primitive underneath every higher
//! subdivision routine.

use glam::DVec3;

/// Linearly interpolates from `a` to `b` by the fraction
/// `numerator / denominator`.
///
/// Subdivision loops call this with an integer step index over an
/// integer cut count, which keeps endpoints exact: `lerp(a, b, 0, n)`
/// is `a` and `lerp(a, b, n, n)` lands on `b` up to float rounding.
///
/// `denominator` must be non-zero; no caller in this crate subdivides by
/// zero steps.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use tessella_subdivide::lerp;
///
/// let a = DVec3::new(0.0, 0.0, 0.0);
/// let b = DVec3::new(4.0, 2.0, 0.0);
/// assert_eq!(lerp(a, b, 1, 4), DVec3::new(1.0, 0.5, 0.0));
/// ```
#[inline]
pub fn lerp(a: DVec3, b: DVec3, numerator: u32, denominator: u32) -> DVec3 {
    debug_assert!(denominator != 0, "lerp denominator must be non-zero");
    a + (b - a) * (f64::from(numerator) / f64::from(denominator))
}

/// Places a vertex on a circle of the given radius at the given height.
///
/// The angle is in degrees, measured counter-clockwise from the +x axis.
///
/// # Example
///
/// ```rust
/// use tessella_subdivide::polar_vertex;
///
/// let v = polar_vertex(2.0, 90.0, 64.0);
/// assert!(v.x.abs() < 1e-9);
/// assert!((v.y - 2.0).abs() < 1e-9);
/// assert_eq!(v.z, 64.0);
/// ```
pub fn polar_vertex(radius: f64, angle_degrees: f64, z: f64) -> DVec3 {
    let theta = angle_degrees.to_radians();
    DVec3::new(radius * theta.cos(), radius * theta.sin(), z)
}
