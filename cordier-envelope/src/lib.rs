//! # Cordier Envelope
//!
//! Alpha-shape boundary extraction and upper-envelope classification for
//! scattered 3D design-point clouds.
//!
//! Given a point cloud (specific speed, specific diameter, efficiency) and a
//! tetrahedralization supplied by an external computational-geometry library,
//! this crate erodes the convex hull down to a concave hull at a chosen alpha
//! scale and then isolates the subset of the boundary that covers the shape
//! along one axis. That covering surface approximates the Pareto-like
//! envelope of best achievable efficiency drawn in a Cordier diagram.
//!
//! The whole pipeline is a pure in-memory transformation,
//! `(points, tetrahedra, alpha, axis, sense) -> CoveringSurface`, evaluated
//! once per input with no file I/O and no shared mutable state.

pub mod alpha_shape;
pub mod circumsphere;
pub mod covering;
pub mod parallel;
pub mod pipeline;

// Re-export commonly used items
pub use alpha_shape::*;
pub use circumsphere::*;
pub use covering::*;
pub use pipeline::*;
