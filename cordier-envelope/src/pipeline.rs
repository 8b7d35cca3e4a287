//! End-to-end envelope pipeline
//!
//! Composes the two stages into the single library boundary consumed by
//! plotting tools: `(points, tetrahedra, alpha, axis, sense) -> CoveringSurface`.

use crate::alpha_shape::extract_alpha_shape;
use crate::covering::{classify_covering_surface, Axis, Sense};
use cordier_core::{CoveringSurface, PointCloud3d, Result, Tetrahedron};

/// Extract the alpha shape of `cloud` and classify its boundary against the
/// orientation predicate in one call.
pub fn upper_envelope(
    cloud: &PointCloud3d,
    tetrahedra: &[Tetrahedron],
    alpha: f64,
    axis: Axis,
    sense: Sense,
) -> Result<CoveringSurface> {
    let shape = extract_alpha_shape(cloud, tetrahedra, alpha)?;
    classify_covering_surface(cloud, &shape.triangles, axis, sense)
}

/// The Cordier-diagram case: efficiency on the Z axis, covering surface seen
/// from above (the best-efficiency envelope over speed and diameter).
pub fn cordier_envelope(
    cloud: &PointCloud3d,
    tetrahedra: &[Tetrahedron],
    alpha: f64,
) -> Result<CoveringSurface> {
    upper_envelope(cloud, tetrahedra, alpha, Axis::Z, Sense::Downward)
}
