//! Canonical simplicial cells
//!
//! Tetrahedra, triangles and edges are unordered index tuples. Each type
//! sorts its indices on construction so two cells over the same points
//! compare equal regardless of discovery order; deduplication everywhere in
//! the workspace relies on this canonical form rather than object identity.

use serde::{Deserialize, Serialize};

/// An unordered pair of point indices in canonical (sorted) form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge([usize; 2]);

impl Edge {
    /// Create an edge; index order does not matter
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self([a, b])
        } else {
            Self([b, a])
        }
    }

    /// The two point indices in ascending order
    pub fn indices(&self) -> [usize; 2] {
        self.0
    }
}

/// An unordered triple of point indices in canonical (sorted) form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triangle([usize; 3]);

impl Triangle {
    /// Create a triangle; index order does not matter
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let mut indices = [a, b, c];
        indices.sort_unstable();
        Self(indices)
    }

    /// The three point indices in ascending order
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// All size-2 subsets of the triangle, in canonical form
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.0;
        [Edge::new(a, b), Edge::new(a, c), Edge::new(b, c)]
    }

    /// Largest point index referenced by the triangle
    pub fn max_index(&self) -> usize {
        self.0[2]
    }
}

/// An unordered 4-tuple of point indices forming one cell of a
/// tetrahedralization, in canonical (sorted) form
///
/// Cells are produced by an external tetrahedralization routine and consumed
/// read-only; this workspace never constructs a tetrahedralization itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tetrahedron([usize; 4]);

impl Tetrahedron {
    /// Create a tetrahedron; index order does not matter
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        let mut indices = [a, b, c, d];
        indices.sort_unstable();
        Self(indices)
    }

    /// The four point indices in ascending order
    pub fn vertices(&self) -> [usize; 4] {
        self.0
    }

    /// All size-3 subsets of the cell, in canonical form
    pub fn faces(&self) -> [Triangle; 4] {
        let [a, b, c, d] = self.0;
        [
            Triangle::new(a, b, c),
            Triangle::new(a, b, d),
            Triangle::new(a, c, d),
            Triangle::new(b, c, d),
        ]
    }

    /// Largest point index referenced by the cell
    pub fn max_index(&self) -> usize {
        self.0[3]
    }
}
