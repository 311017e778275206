// 2D bounding box module: axis-aligned sampling regions in reciprocal space
// Used to describe the region of interest and to bound which lattice points can reach it

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2D axis-aligned bounding box
///
/// Represents a closed rectangular region [min.x, max.x] × [min.y, max.y].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum corner (bottom-left in standard coordinate system)
    pub min: Vector2<f64>,
    /// Maximum corner (top-right in standard coordinate system)
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// This function will panic in debug mode if min coordinates are greater than max coordinates
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y,
                     "Minimum coordinates must be less than or equal to maximum coordinates");
        Self { min, max }
    }

    /// Square [-half_extent, half_extent]² centered on Γ
    pub fn centered_square(half_extent: f64) -> Self {
        Self::new(
            Vector2::new(-half_extent, -half_extent),
            Vector2::new(half_extent, half_extent),
        )
    }

    /// Check if a point is inside the bounding box (inclusive of boundaries)
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the area of the bounding box
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Expand the bounding box by a given margin in all directions
    pub fn expand(&self, margin: f64) -> BoundingBox2D {
        let margin_vec = Vector2::new(margin, margin);
        BoundingBox2D {
            min: self.min - margin_vec,
            max: self.max + margin_vec,
        }
    }

    /// Smallest integer index ranges `(x_lo..=x_hi, y_lo..=y_hi)` covering the box.
    ///
    /// Rounds outward on every side, so every integer point inside the box
    /// (boundary included) falls inside the returned ranges. `None` when a
    /// rounded bound does not fit in `i32`.
    pub fn integer_bounds(&self) -> Option<((i32, i32), (i32, i32))> {
        Some((
            (to_index(self.min.x.floor())?, to_index(self.max.x.ceil())?),
            (to_index(self.min.y.floor())?, to_index(self.max.y.ceil())?),
        ))
    }
}

// `as` would saturate silently
fn to_index(value: f64) -> Option<i32> {
    if value.is_finite() && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

impl Default for BoundingBox2D {
    /// The conventional region of interest around the 3x3 block of unit lattice points
    fn default() -> Self {
        Self::centered_square(crate::config::REGION_HALF_EXTENT)
    }
}
