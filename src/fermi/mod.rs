// Fermi module: Contains the free-electron Fermi-surface classification of the Harrison construction
// This module counts Fermi-disk overlaps and derives branch-membership grids in reciprocal space

// ======================== MODULE DECLARATIONS ========================
pub mod branch;
pub mod grid;
pub mod harrison;
pub mod overlap;
pub mod report;
pub mod surface;

mod _tests_harrison;
mod _tests_overlap;

// ======================== OVERLAP COUNTING & BRANCHES ========================
pub use overlap::count_overlaps; // fn(point: Point, radius: f64, lattice: &LatticePointSet) -> usize - disks covering a point
pub use branch::classify_branch; // fn(point: Point, branch_index: i64, radius: f64, lattice: &LatticePointSet) -> Result<u8> - 1 iff >= n disks

// ======================== GRID SAMPLING ========================
pub use grid::{
    ClassificationGrid,             // struct - branch indicator per sample, row i ↔ y, column j ↔ x
    Evaluation,                     // enum - Sequential or Parallel (rayon) sample scheduling
    MeshGrid,                       // type - Vec<Vec<f64>> meshgrid coordinate array
    OverlapGrid,                    // struct - raw overlap count per sample
    build_classification_grid,      // fn(branch_index: i64, radius: f64, lattice: &LatticePointSet, grid_size: usize, grid_range: f64) -> Result<(MeshGrid, MeshGrid, ClassificationGrid)>
    build_classification_grid_with, // fn(branch_index: i64, radius: f64, lattice: &LatticePointSet, spec: &GridSpec, evaluation: Evaluation) -> Result<ClassificationGrid>
    build_overlap_grid,             // fn(radius: f64, lattice: &LatticePointSet, spec: &GridSpec) -> Result<OverlapGrid>
    build_overlap_grid_with,        // fn(radius: f64, lattice: &LatticePointSet, spec: &GridSpec, evaluation: Evaluation) -> Result<OverlapGrid>
    meshgrid,                       // fn(axis: &[f64]) -> (MeshGrid, MeshGrid)
};
// ClassificationGrid impl methods:
//   shape(&self) -> (usize, usize)                 - (rows, columns)
//   get(&self, row: usize, col: usize) -> Option<u8> - indicator at (x_col, y_row)
//   rows(&self) / to_rows(&self)                   - row-major access
//   filled_count / filled_fraction / filled_area   - branch coverage of the sampled square
// OverlapGrid impl methods:
//   max_overlap(&self) -> usize                    - highest count over the grid
//   histogram(&self) -> Vec<usize>                 - samples per overlap count
//   branch(&self, branch_index: i64) -> Result<ClassificationGrid> - threshold into any branch

// ======================== FREE-ELECTRON PARAMETERS ========================
pub use harrison::{
    fermi_radius_from_valence, // fn(valence_electrons: f64) -> Result<f64> - r = sqrt(Z / 2π)
    occupied_zone_area,        // fn(valence_electrons: f64) -> Result<f64> - Z / 2 zone areas
    valence_from_fermi_radius, // fn(radius: f64) -> Result<f64> - Z = 2πr²
};

// ======================== CONVENIENCE WRAPPERS ========================
pub use surface::FermiSurface; // struct - validated radius + immutable lattice point set
pub use report::{FermiSurfaceReport, render_ascii}; // serializable branch report and text preview
