// Geometries module: Contains the geometric primitives of the Harrison construction
// This module provides closed disks and axis-aligned regions in reciprocal space

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d;
pub mod geometry2d_bounding_box;

// Test modules
mod _tests_geometry2d;

// ======================== PRIMITIVE GEOMETRY TYPES ========================
pub use geometry2d::Disk; // struct - closed 2D disk (Fermi disk around a lattice point)
// Disk impl methods:
//   new(center: Vector2<f64>, radius: f64) -> Self           - creates disk with center and radius
//   contains_point(&self, point: Vector2<f64>) -> bool       - squared-distance closed-disk test
//   intersects_box(&self, region: &BoundingBox2D) -> bool    - checks whether the disk reaches a region

// ======================== GEOMETRIC UTILITIES ========================
pub use geometry2d_bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min: Vector2<f64>, max: Vector2<f64>) -> Self        - creates bounding box from corners
//   centered_square(half_extent: f64) -> Self                - creates [-h, h]² around Γ
//   contains(&self, point: Vector2<f64>) -> bool             - checks if point is inside box (inclusive)
//   width(&self) / height(&self) / area(&self) -> f64        - box dimensions
//   expand(&self, margin: f64) -> BoundingBox2D              - expands box by margin in all directions
//   integer_bounds(&self) -> Option<((i32, i32), (i32, i32))> - outward-rounded integer index ranges
