//! # Cordier Archive
//!
//! Ingestion and reshaping of raw multi-objective optimization archives from
//! a pump/turbine design study.
//!
//! Raw archives are whitespace-delimited, headerless `Gen.csv` files whose
//! column order differs between optimization runs. This crate reads them
//! against a [`ColumnLayout`], filters out invalid and
//! constraint-violating evaluations, derives the dimensionless hydraulic
//! quantities (specific speeds, specific diameters, head and flow
//! coefficients), and exposes the (specific speed, specific diameter,
//! efficiency) point cloud consumed by `cordier-envelope`.

pub mod derived;
pub mod error;
pub mod export;
pub mod gen_csv;

pub use derived::*;
pub use error::*;
pub use export::*;
pub use gen_csv::*;

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;
