// Lattice range selection for the Harrison construction
//
// Only finitely many reciprocal lattice points can place a disk of radius r over
// a bounded sampling region. This module enumerates that set once per radius so
// every overlap query can reuse it.

// ======================== IMPORTS ========================
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::REGION_HALF_EXTENT;
use crate::error::{FermiError, validate_radius};
use crate::geometries::BoundingBox2D;
use crate::interfaces::{LatticeCoord, Point, lattice_coord_to_point};

// ======================== LATTICE POINT SET ========================

/// Immutable set of integer reciprocal lattice points.
///
/// Points are kept in insertion order without duplicates. Each point is stored
/// both as its integer coordinate and as its embedding in reciprocal space so
/// overlap queries never convert in the hot loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<(i32, i32)>", from = "Vec<(i32, i32)>")]
pub struct LatticePointSet {
    coords: Vec<LatticeCoord>,
    points: Vec<Point>,
}

impl LatticePointSet {
    /// Build a set from arbitrary integer coordinates, dropping repeats.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut seen = HashSet::new();
        let coords: Vec<LatticeCoord> = coords
            .into_iter()
            .filter(|&c| seen.insert(c))
            .map(|(x, y)| LatticeCoord::new(x, y))
            .collect();
        let points = coords.iter().map(lattice_coord_to_point).collect();
        Self { coords, points }
    }

    /// All integer points of the rectangle [x_lo, x_hi] × [y_lo, y_hi].
    pub fn rectangle(x_range: (i32, i32), y_range: (i32, i32)) -> Self {
        let capacity = block_len(x_range, y_range).unwrap_or(0);
        let mut coords = Vec::with_capacity(capacity);
        let mut points = Vec::with_capacity(capacity);
        push_block(&mut coords, &mut points, x_range, y_range);
        Self { coords, points }
    }

    /// Like [`rectangle`](Self::rectangle), but `None` instead of aborting when
    /// the block is too large to count or allocate.
    pub fn try_rectangle(x_range: (i32, i32), y_range: (i32, i32)) -> Option<Self> {
        let len = block_len(x_range, y_range)?;
        let mut coords = Vec::new();
        coords.try_reserve_exact(len).ok()?;
        let mut points = Vec::new();
        points.try_reserve_exact(len).ok()?;
        push_block(&mut coords, &mut points, x_range, y_range);
        Some(Self { coords, points })
    }

    /// Square block [-k, k]² of (2k+1)² points.
    pub fn square(half_extent: i32) -> Self {
        Self::rectangle((-half_extent, half_extent), (-half_extent, half_extent))
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Integer coordinates in insertion order.
    pub fn coords(&self) -> &[LatticeCoord] {
        &self.coords
    }

    /// Lattice points embedded in reciprocal space, same order as [`coords`](Self::coords).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.coords.iter().any(|c| c.x == x && c.y == y)
    }

    /// Largest |x| or |y| over the set, i.e. k for a square block [-k, k]².
    pub fn half_extent(&self) -> Option<i32> {
        self.coords.iter().map(|c| c.x.abs().max(c.y.abs())).max()
    }

    /// Same points, iterated in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            coords: self.coords.iter().rev().copied().collect(),
            points: self.points.iter().rev().copied().collect(),
        }
    }
}

/// Number of integer points in the block, `None` on overflow.
fn block_len((x_lo, x_hi): (i32, i32), (y_lo, y_hi): (i32, i32)) -> Option<usize> {
    if x_hi < x_lo || y_hi < y_lo {
        return Some(0);
    }
    let width = usize::try_from(i64::from(x_hi) - i64::from(x_lo) + 1).ok()?;
    let height = usize::try_from(i64::from(y_hi) - i64::from(y_lo) + 1).ok()?;
    width.checked_mul(height)
}

// Rectangle enumeration cannot repeat, so no dedup pass
fn push_block(
    coords: &mut Vec<LatticeCoord>,
    points: &mut Vec<Point>,
    (x_lo, x_hi): (i32, i32),
    (y_lo, y_hi): (i32, i32),
) {
    for x in x_lo..=x_hi {
        for y in y_lo..=y_hi {
            let coord = LatticeCoord::new(x, y);
            points.push(lattice_coord_to_point(&coord));
            coords.push(coord);
        }
    }
}

impl From<Vec<(i32, i32)>> for LatticePointSet {
    fn from(coords: Vec<(i32, i32)>) -> Self {
        Self::from_coords(coords)
    }
}

impl From<LatticePointSet> for Vec<(i32, i32)> {
    fn from(lattice: LatticePointSet) -> Self {
        lattice.coords.iter().map(|c| (c.x, c.y)).collect()
    }
}

impl<'a> IntoIterator for &'a LatticePointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ======================== RANGE SELECTION ========================

/// Select every lattice point whose disk of radius `radius` can reach the
/// conventional region [-1.5, 1.5]².
///
/// Returns the full square block [-k, k]² with k = ceil(1.5 + r), i.e.
/// (2k+1)² points. The bound is conservative: it may include points whose
/// disks miss the region, never the reverse.
///
/// # Errors
/// `InvalidParameter` when `radius` is negative, not finite, or so large that
/// the block cannot be enumerated.
pub fn select_lattice_range(radius: f64) -> crate::Result<LatticePointSet> {
    let radius = validate_radius(radius)?;
    let half_extent = (REGION_HALF_EXTENT + radius).ceil();
    if half_extent > f64::from(i32::MAX) {
        return Err(too_large(radius));
    }
    let k = half_extent as i32;
    let lattice = LatticePointSet::try_rectangle((-k, k), (-k, k)).ok_or_else(|| too_large(radius))?;
    debug!(
        "Selected {} lattice points in [-{k}, {k}]² for r = {:.4}",
        lattice.len(),
        radius,
        k = k
    );
    Ok(lattice)
}

/// Select every lattice point whose disk of radius `radius` can reach `region`.
///
/// Covers the region grown by r on every side, rounded outward to integers.
/// For the conventional square region this yields exactly
/// [`select_lattice_range`]'s set.
///
/// # Errors
/// `InvalidParameter` when `radius` is negative, not finite, or the grown
/// region is too large to enumerate.
pub fn select_lattice_range_for_region(
    region: &BoundingBox2D,
    radius: f64,
) -> crate::Result<LatticePointSet> {
    let radius = validate_radius(radius)?;
    let (x_range, y_range) = region
        .expand(radius)
        .integer_bounds()
        .ok_or_else(|| too_large(radius))?;
    let lattice = LatticePointSet::try_rectangle(x_range, y_range).ok_or_else(|| too_large(radius))?;
    debug!(
        "Selected {} lattice points in [{}, {}] x [{}, {}] for r = {:.4}",
        lattice.len(),
        x_range.0,
        x_range.1,
        y_range.0,
        y_range.1,
        radius
    );
    Ok(lattice)
}

fn too_large(radius: f64) -> FermiError {
    FermiError::invalid_parameter("radius", radius, "lattice block too large to enumerate")
}
