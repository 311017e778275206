//! Free-electron Fermi surface library
//!
//! Implements the Harrison construction on a 2D square reciprocal lattice: every
//! reciprocal lattice point carries a disk with the Fermi radius, and a k-point
//! belongs to the n-th Fermi-surface branch when at least n disks cover it.
//!
//! Quick reference
//! - Lattice range: [`select_lattice_range`], [`select_lattice_range_for_region`], [`LatticePointSet`]
//! - Overlap counting: [`count_overlaps`]
//! - Branch membership: [`classify_branch`], [`build_classification_grid`], [`build_overlap_grid`]
//! - Convenience wrapper: [`FermiSurface`]
//! - Fermi radius from electron count: [`fermi_radius_from_valence`]

pub mod config;
pub mod error;
pub mod fermi;
pub mod geometries;
pub mod interfaces;
pub mod lattice;

pub use error::FermiError;
pub use interfaces::{LatticeCoord, Point};

pub use lattice::{LatticePointSet, select_lattice_range, select_lattice_range_for_region};

pub use fermi::{
    ClassificationGrid, FermiSurface, FermiSurfaceReport, MeshGrid, OverlapGrid,
    build_classification_grid, build_overlap_grid, classify_branch, count_overlaps,
    fermi_radius_from_valence,
};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, FermiError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
