// 2D geometry module: closed disks centered on reciprocal lattice points
// Every lattice point of the Harrison construction carries one of these with the Fermi radius

use nalgebra::Vector2;

use crate::geometries::geometry2d_bounding_box::BoundingBox2D;

/// Closed disk geometry
///
/// Membership is decided on squared distances, so a point exactly `radius`
/// away from the center is inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Disk {
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "Disk radius must be non-negative");
        Self { center, radius }
    }

    /// Closed-disk membership test: |point - center|² <= radius²
    #[inline]
    pub fn contains_point(&self, point: Vector2<f64>) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Whether the disk reaches any point of `region`.
    pub fn intersects_box(&self, region: &BoundingBox2D) -> bool {
        // Closest point of the box to the center
        let closest = Vector2::new(
            self.center.x.clamp(region.min.x, region.max.x),
            self.center.y.clamp(region.min.y, region.max.y),
        );
        self.contains_point(closest)
    }
}
