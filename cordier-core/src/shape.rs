//! Boundary surface result objects
//!
//! Both types are value objects computed in one pass and never mutated
//! afterwards. Empty results are valid outputs, not errors; a renderer
//! receiving an empty surface should skip the plot rather than fail.

use crate::cells::{Edge, Triangle};
use crate::cloud::PointCloud3d;
use crate::point::Point3d;
use serde::{Deserialize, Serialize};

/// The boundary of an alpha shape: vertices, edges and triangles of all
/// tetrahedra whose circumsphere radius is below the alpha threshold
///
/// The vertex and edge sets are exactly the closure of the triangle set, and
/// all three are ascending-sorted and duplicate-free, so identical inputs
/// produce bitwise-identical shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphaShape {
    /// Point indices appearing in at least one boundary triangle
    pub vertices: Vec<usize>,
    /// Canonical edges of the boundary triangles, deduplicated
    pub edges: Vec<Edge>,
    /// Canonical boundary triangles, each appearing exactly once
    pub triangles: Vec<Triangle>,
}

impl AlphaShape {
    /// Check whether the shape has no boundary at all
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of boundary vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of boundary edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of boundary triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// The subset of an alpha shape's boundary selected by the orientation
/// predicate: the surface "covering" the shape along a chosen axis
///
/// Triangles keep the order of the classifier input; vertices are listed in
/// first-seen order across the selected triangles, which downstream contour
/// renderers may rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveringSurface {
    /// Point indices of the selected triangles, first-seen order
    pub vertices: Vec<usize>,
    /// Selected triangles, a subset of the classified triangle set
    pub triangles: Vec<Triangle>,
}

impl CoveringSurface {
    /// Check whether no triangle satisfied the orientation predicate
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of covering vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of covering triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Resolve the covering vertices to coordinates in `cloud`, in the same
    /// order as `vertices`
    pub fn vertex_positions(&self, cloud: &PointCloud3d) -> Vec<Point3d> {
        self.vertices.iter().map(|&i| cloud[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shape() {
        let shape = AlphaShape::default();
        assert!(shape.is_empty());
        assert_eq!(shape.vertex_count(), 0);
        assert_eq!(shape.edge_count(), 0);
        assert_eq!(shape.triangle_count(), 0);
    }

    #[test]
    fn test_vertex_positions_order() {
        let cloud = PointCloud3d::from_points(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(2.0, 0.0, 0.0),
        ]);
        let surface = CoveringSurface {
            vertices: vec![2, 0],
            triangles: vec![],
        };
        let positions = surface.vertex_positions(&cloud);
        assert_eq!(positions[0].x, 2.0);
        assert_eq!(positions[1].x, 0.0);
    }
}
