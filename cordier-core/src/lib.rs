//! Core data structures for cordier
//!
//! This crate provides the fundamental types shared by the cordier workspace:
//! double-precision points and point clouds, canonical simplicial cells
//! (tetrahedra, triangles, edges) and the immutable boundary-surface results
//! produced by the envelope extraction.

pub mod cells;
pub mod cloud;
pub mod error;
pub mod point;
pub mod shape;

pub use cells::*;
pub use cloud::*;
pub use error::*;
pub use point::*;
pub use shape::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};

/// Common result type for cordier operations
pub type Result<T> = std::result::Result<T, Error>;
