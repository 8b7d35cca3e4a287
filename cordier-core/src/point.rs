//! Point and vector type aliases
//!
//! Archive data and circumsphere determinants are double precision, so the
//! workspace standardizes on `f64` coordinates.

use nalgebra::{Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;
