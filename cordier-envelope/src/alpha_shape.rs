//! Alpha-shape boundary extraction
//!
//! The alpha shape is a family of concave hulls parameterized by a radius
//! threshold: at alpha → ∞ it equals the convex hull of the cloud, and it
//! erodes to reveal concavities as alpha decreases. Cells whose circumsphere
//! is larger than alpha are considered too sparse and dropped; the boundary
//! is then the set of faces owned by exactly one surviving cell.

use crate::circumsphere::circumradius;
use crate::parallel;
use cordier_core::{AlphaShape, Edge, Error, PointCloud3d, Result, Tetrahedron, Triangle};
use itertools::Itertools;

/// Extract the alpha-shape boundary of `cloud` from an externally computed
/// tetrahedralization.
///
/// The returned vertex and edge sets are exactly the closure of the triangle
/// set, and all three are ascending-sorted, so identical inputs yield
/// bitwise-identical results. An empty result (no cell passed the alpha
/// test, or `tetrahedra` was empty) is a valid output, not an error.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the cloud has fewer than 4 points or a cell
/// references an out-of-range point index. Validation happens before any
/// computation; a partially-correct surface is never produced. Degenerate
/// (near-coplanar) cells are skipped, not surfaced.
pub fn extract_alpha_shape(
    cloud: &PointCloud3d,
    tetrahedra: &[Tetrahedron],
    alpha: f64,
) -> Result<AlphaShape> {
    if cloud.len() < 4 {
        return Err(Error::InvalidInput(format!(
            "alpha shape needs at least 4 points, got {}",
            cloud.len()
        )));
    }
    if let Some((cell, tet)) = tetrahedra
        .iter()
        .enumerate()
        .find(|(_, tet)| tet.max_index() >= cloud.len())
    {
        return Err(Error::InvalidInput(format!(
            "tetrahedron {} references point index {} but the cloud has {} points",
            cell,
            tet.max_index(),
            cloud.len()
        )));
    }

    // Pure function per cell; a degenerate cell has no finite circumsphere
    // and can never satisfy r < alpha.
    let radii = parallel::parallel_map(tetrahedra, |tet| {
        let [a, b, c, d] = tet.vertices();
        circumradius(&cloud[a], &cloud[b], &cloud[c], &cloud[d]).ok()
    });

    // A canonical face owned by two retained cells is interior; boundary
    // faces are owned by exactly one.
    let face_counts = tetrahedra
        .iter()
        .zip(&radii)
        .filter(|(_, radius)| matches!(radius, Some(r) if *r < alpha))
        .flat_map(|(tet, _)| tet.faces())
        .counts();

    let mut triangles: Vec<Triangle> = face_counts
        .into_iter()
        .filter_map(|(tri, n)| (n == 1).then_some(tri))
        .collect();
    triangles.sort_unstable();

    let mut edges: Vec<Edge> = triangles.iter().flat_map(|tri| tri.edges()).collect();
    edges.sort_unstable();
    edges.dedup();

    let mut vertices: Vec<usize> = triangles.iter().flat_map(|tri| tri.indices()).collect();
    vertices.sort_unstable();
    vertices.dedup();

    Ok(AlphaShape {
        vertices,
        edges,
        triangles,
    })
}
