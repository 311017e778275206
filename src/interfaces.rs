// Definitions that are used throughout all modules

use nalgebra::Vector2;

/// A point in reciprocal space, (kx, ky) in units of the reciprocal lattice constant.
pub type Point = Vector2<f64>;

/// Integer coordinates of a reciprocal lattice point.
pub type LatticeCoord = Vector2<i32>;

/// Embed an integer lattice coordinate into reciprocal space.
#[inline]
pub fn lattice_coord_to_point(coord: &LatticeCoord) -> Point {
    Point::new(f64::from(coord.x), f64::from(coord.y))
}
