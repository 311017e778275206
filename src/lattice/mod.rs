// Lattice module: Contains the reciprocal lattice point sets of the Harrison construction
// This module selects which square-lattice points can contribute a Fermi disk to a sampling region

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_range;


// ======================== LATTICE POINT SETS ========================
pub use lattice_range::LatticePointSet; // struct - immutable, duplicate-free set of integer lattice points
// LatticePointSet impl methods:
//   from_coords(coords: impl IntoIterator<Item = (i32, i32)>) -> Self - builds a set, dropping repeats
//   rectangle(x_range: (i32, i32), y_range: (i32, i32)) -> Self      - all integer points of a rectangle
//   try_rectangle(x_range, y_range) -> Option<Self>                  - same, None when too large to allocate
//   square(half_extent: i32) -> Self                                 - block [-k, k]² of (2k+1)² points
//   len(&self) -> usize / is_empty(&self) -> bool                    - set size
//   coords(&self) -> &[LatticeCoord]                                 - integer coordinates
//   points(&self) -> &[Point] / iter(&self)                          - points embedded in reciprocal space
//   contains(&self, x: i32, y: i32) -> bool                          - membership test
//   half_extent(&self) -> Option<i32>                                - largest |x| or |y|
//   reversed(&self) -> Self                                          - same set, reversed iteration order

// ======================== RANGE SELECTION ========================
pub use lattice_range::{
    select_lattice_range,            // fn(radius: f64) -> Result<LatticePointSet> - block [-k, k]², k = ceil(1.5 + r)
    select_lattice_range_for_region, // fn(region: &BoundingBox2D, radius: f64) -> Result<LatticePointSet> - region grown by r
};
