//! Circumsphere radius of a tetrahedron
//!
//! Closed-form evaluation via the homogeneous vertex determinants, see
//! <http://mathworld.wolfram.com/Circumsphere.html>. The radius is the
//! alpha-shape inclusion test: a cell belongs to the shape iff its
//! circumsphere is smaller than the alpha threshold.

use cordier_core::{Error, Point3d, Result};
use nalgebra::Matrix4;

/// Below this magnitude the homogeneous determinant is treated as zero and
/// the cell as degenerate (near-coplanar vertices, unbounded circumsphere).
const DEGENERACY_EPS: f64 = 1e-12;

/// Radius of the unique sphere passing through the 4 vertices of a
/// tetrahedron.
///
/// Returns [`Error::DegenerateCell`] when the vertices are (near-)coplanar;
/// such a cell has no finite circumsphere and can never pass the alpha test.
pub fn circumradius(p0: &Point3d, p1: &Point3d, p2: &Point3d, p3: &Point3d) -> Result<f64> {
    let pts = [p0, p1, p2, p3];
    let norms = pts.map(|p| p.coords.norm_squared());

    let a = det4(|i| [pts[i].x, pts[i].y, pts[i].z, 1.0]);
    if a.abs() < DEGENERACY_EPS {
        return Err(Error::DegenerateCell);
    }

    let dx = det4(|i| [norms[i], pts[i].y, pts[i].z, 1.0]);
    let dy = -det4(|i| [norms[i], pts[i].x, pts[i].z, 1.0]);
    let dz = det4(|i| [norms[i], pts[i].x, pts[i].y, 1.0]);
    let c = det4(|i| [norms[i], pts[i].x, pts[i].y, pts[i].z]);

    // Clamp against roundoff; the exact radicand is non-negative.
    let radicand = (dx * dx + dy * dy + dz * dz - 4.0 * a * c).max(0.0);
    Ok(radicand.sqrt() / (2.0 * a.abs()))
}

fn det4(row: impl Fn(usize) -> [f64; 4]) -> f64 {
    Matrix4::from_fn(|r, c| row(r)[c]).determinant()
}
