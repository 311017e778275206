// Constants and sampling configuration

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::FermiError;
use crate::geometries::BoundingBox2D;

// Region of interest
pub const REGION_HALF_EXTENT: f64 = 1.5; // Covers the 3x3 block of unit lattice points around Γ

// Sampling defaults
pub const DEFAULT_GRID_SIZE: usize = 500;
pub const DEFAULT_GRID_RANGE: f64 = REGION_HALF_EXTENT;

// CLI defaults
pub const DEFAULT_VALENCE_ELECTRONS: f64 = 18.0;
pub const DEFAULT_BRANCH_INDEX: i64 = 9;

/// Square sampling grid: `size` evenly spaced samples per axis over `[-range, range]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub size: usize,
    pub range: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            range: DEFAULT_GRID_RANGE,
        }
    }
}

impl GridSpec {
    pub fn new(size: usize, range: f64) -> Self {
        Self { size, range }
    }

    /// Reject empty or degenerate grids before any sampling happens.
    pub fn validate(&self) -> crate::Result<()> {
        if self.size == 0 {
            return Err(FermiError::invalid_parameter(
                "grid_size",
                self.size,
                "must be at least 1",
            ));
        }
        if !self.range.is_finite() || self.range <= 0.0 {
            return Err(FermiError::invalid_parameter(
                "grid_range",
                self.range,
                "must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Sample coordinates along one axis, endpoints included.
    pub fn axis(&self) -> Vec<f64> {
        match self.size {
            0 => Vec::new(),
            1 => vec![-self.range],
            n => {
                let step = 2.0 * self.range / (n - 1) as f64;
                let mut axis: Vec<f64> = (0..n).map(|i| -self.range + step * i as f64).collect();
                axis[n - 1] = self.range;
                axis
            }
        }
    }

    /// The sampled square [-range, range]².
    ///
    /// Built without the corner-order assertion, so an unvalidated spec yields
    /// an empty box instead of panicking.
    pub fn region(&self) -> BoundingBox2D {
        BoundingBox2D {
            min: Vector2::new(-self.range, -self.range),
            max: Vector2::new(self.range, self.range),
        }
    }

    /// Area of the sampled square.
    pub fn area(&self) -> f64 {
        self.region().area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_conventional_region() {
        let spec = GridSpec::default();
        assert_eq!(spec.size, 500);
        assert_eq!(spec.range, REGION_HALF_EXTENT);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_axis_endpoints_and_spacing() {
        let axis = GridSpec::new(7, 1.5).axis();
        assert_eq!(axis.len(), 7);
        assert_eq!(axis[0], -1.5);
        assert_eq!(axis[6], 1.5);
        assert!((axis[3]).abs() < 1e-12);
        for pair in axis.windows(2) {
            assert!((pair[1] - pair[0] - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_sample_axis() {
        assert_eq!(GridSpec::new(1, 2.0).axis(), vec![-2.0]);
    }

    #[test]
    fn test_validate_rejects_degenerate_grids() {
        assert_eq!(
            GridSpec::new(0, 1.5).validate().unwrap_err().parameter(),
            "grid_size"
        );
        assert_eq!(
            GridSpec::new(10, 0.0).validate().unwrap_err().parameter(),
            "grid_range"
        );
        assert!(GridSpec::new(10, -1.0).validate().is_err());
        assert!(GridSpec::new(10, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_region_and_area() {
        let spec = GridSpec::new(3, 2.5);
        assert_eq!(spec.region(), BoundingBox2D::centered_square(2.5));
        assert!((GridSpec::new(3, 1.5).area() - 9.0).abs() < 1e-12);
        assert!((spec.area() - 25.0).abs() < 1e-12);

        // Degenerate specs still produce a box; validate() rejects them
        let inverted = GridSpec::new(3, -1.0).region();
        assert!(!inverted.contains(Vector2::new(0.0, 0.0)));
    }
}
