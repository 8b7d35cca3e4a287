//! Upper-envelope classification of boundary triangles
//!
//! Selects the subset of an alpha-shape boundary that "covers" the shape
//! along one axis. With efficiency on the Z axis, the covering surface seen
//! from above approximates the envelope of best achievable efficiency for
//! each (specific speed, specific diameter) combination.
//!
//! Face normals are computed with ascending-index winding and then oriented
//! toward the interior of the cloud (its centroid), so the sign of the axis
//! component is meaningful for every triangle: a face on top of the shape
//! has an interior-pointing normal with a negative "up" component.
//!
//! Known limitation: the orientation predicate is a heuristic proxy for a
//! true upper-envelope computation. It is exact only when the boundary is
//! single-valued per location on the ground plane; if the surface folds back
//! on itself along the chosen axis, triangles may be both under- and
//! over-selected.

use cordier_core::{CoveringSurface, Error, PointCloud3d, Result, Triangle, Vector3d};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Coordinate axis the covering surface is classified against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn component(&self, v: &Vector3d) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Which side of the shape counts as the covering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    /// Faces visible when looking along the axis from -∞ (lower envelope)
    Upward,
    /// Faces visible when looking along the axis from +∞ (upper envelope)
    Downward,
}

impl Sense {
    /// Whether an interior-oriented normal component selects the face
    fn selects(&self, component: f64) -> bool {
        match self {
            Sense::Upward => component > 0.0,
            Sense::Downward => component < 0.0,
        }
    }
}

/// Classify `triangles` against the orientation predicate and collect the
/// covering surface.
///
/// Triangles are visited in input order; the vertex set preserves first-seen
/// order across the selected triangles. An empty selection is a valid
/// result, not an error — callers rendering a contour should treat it as
/// "no data" and skip the plot.
///
/// # Errors
///
/// [`Error::InvalidInput`] if the cloud is empty or a triangle references an
/// out-of-range point index.
pub fn classify_covering_surface(
    cloud: &PointCloud3d,
    triangles: &[Triangle],
    axis: Axis,
    sense: Sense,
) -> Result<CoveringSurface> {
    let centroid = cloud
        .centroid()
        .ok_or_else(|| Error::InvalidInput("cannot classify against an empty point cloud".to_string()))?;
    if let Some(tri) = triangles.iter().find(|tri| tri.max_index() >= cloud.len()) {
        return Err(Error::InvalidInput(format!(
            "triangle references point index {} but the cloud has {} points",
            tri.max_index(),
            cloud.len()
        )));
    }

    let mut selected = Vec::new();
    let mut vertices = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    for tri in triangles {
        let [i, j, k] = tri.indices();
        let (pi, pj, pk) = (cloud[i], cloud[j], cloud[k]);
        let normal = (pj - pi).cross(&(pk - pi));
        // Orient toward the bulk of the cloud. A face whose plane passes
        // through the centroid keeps its ascending-index winding.
        let normal = if normal.dot(&(centroid - pi)) < 0.0 {
            -normal
        } else {
            normal
        };

        if sense.selects(axis.component(&normal)) {
            selected.push(*tri);
            for index in tri.indices() {
                if seen.insert(index) {
                    vertices.push(index);
                }
            }
        }
    }

    Ok(CoveringSurface {
        vertices,
        triangles: selected,
    })
}
