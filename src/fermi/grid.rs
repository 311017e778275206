// Grid sampling of the Harrison construction
//
// Samples a square k-space grid and evaluates every sample independently. Rows are
// distributed over the rayon pool when the `parallel` feature is enabled; the
// output never depends on the evaluation order.

// ======================== IMPORTS ========================
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::error::{validate_branch_index, validate_radius};
use crate::fermi::branch::in_branch;
use crate::fermi::overlap::count_overlaps;
use crate::interfaces::Point;
use crate::lattice::LatticePointSet;

/// Row-major coordinate array as produced by a meshgrid: `grid[i][j]`.
pub type MeshGrid = Vec<Vec<f64>>;

/// How grid samples are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// One sample after the other on the calling thread
    Sequential,
    /// Rows fan out over the rayon pool (falls back to sequential without the `parallel` feature)
    #[default]
    Parallel,
}

// ======================== CLASSIFICATION GRID ========================

/// Branch indicator per sample: `get(i, j)` classifies (x_j, y_i).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationGrid {
    spec: GridSpec,
    branch_index: usize,
    cells: Vec<u8>,
}

impl ClassificationGrid {
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn branch_index(&self) -> usize {
        self.branch_index
    }

    /// (rows, columns); always square.
    pub fn shape(&self) -> (usize, usize) {
        (self.spec.size, self.spec.size)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.spec.size || col >= self.spec.size {
            return None;
        }
        self.cells.get(row * self.spec.size + col).copied()
    }

    /// Flat row-major indicator values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.cells.chunks(self.spec.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Number of samples inside the branch.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    pub fn filled_fraction(&self) -> f64 {
        self.filled_count() as f64 / self.cells.len() as f64
    }

    /// Sample-based estimate of the branch area inside [-range, range]².
    pub fn filled_area(&self) -> f64 {
        self.filled_fraction() * self.spec.area()
    }
}

// ======================== OVERLAP GRID ========================

/// Raw overlap count per sample; every branch can be read off a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGrid {
    spec: GridSpec,
    counts: Vec<usize>,
}

impl OverlapGrid {
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.spec.size, self.spec.size)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.spec.size || col >= self.spec.size {
            return None;
        }
        self.counts.get(row * self.spec.size + col).copied()
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Highest overlap count over the grid; also the highest non-empty branch.
    pub fn max_overlap(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of samples per overlap count, indexed 0..=max_overlap.
    pub fn histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.max_overlap() + 1];
        for &count in &self.counts {
            histogram[count] += 1;
        }
        histogram
    }

    /// Indicator grid of branch `branch_index`.
    ///
    /// # Errors
    /// `InvalidParameter` when `branch_index` <= 0.
    pub fn branch(&self, branch_index: i64) -> crate::Result<ClassificationGrid> {
        let threshold = validate_branch_index(branch_index)?;
        Ok(ClassificationGrid {
            spec: self.spec,
            branch_index: threshold,
            cells: self.counts.iter().map(|&count| u8::from(count >= threshold)).collect(),
        })
    }
}

// ======================== GRID CONSTRUCTION ========================

/// Meshgrid of an axis: `x[i][j] = axis[j]`, `y[i][j] = axis[i]`.
pub fn meshgrid(axis: &[f64]) -> (MeshGrid, MeshGrid) {
    let x = axis.iter().map(|_| axis.to_vec()).collect();
    let y = axis.iter().map(|&value| vec![value; axis.len()]).collect();
    (x, y)
}

/// Classify a `grid_size × grid_size` evenly spaced grid over
/// [-grid_range, grid_range]² for branch `branch_index`.
///
/// Returns the X and Y meshgrid arrays alongside the indicator grid.
///
/// # Errors
/// `InvalidParameter` for an empty or degenerate grid, `branch_index` <= 0, or an
/// invalid radius. Nothing is sampled in that case.
pub fn build_classification_grid(
    branch_index: i64,
    radius: f64,
    lattice: &LatticePointSet,
    grid_size: usize,
    grid_range: f64,
) -> crate::Result<(MeshGrid, MeshGrid, ClassificationGrid)> {
    let spec = GridSpec::new(grid_size, grid_range);
    let grid = build_classification_grid_with(branch_index, radius, lattice, &spec, Evaluation::default())?;
    let (x, y) = meshgrid(&spec.axis());
    Ok((x, y, grid))
}

/// [`build_classification_grid`] with an explicit sampling spec and schedule.
pub fn build_classification_grid_with(
    branch_index: i64,
    radius: f64,
    lattice: &LatticePointSet,
    spec: &GridSpec,
    evaluation: Evaluation,
) -> crate::Result<ClassificationGrid> {
    spec.validate()?;
    let threshold = validate_branch_index(branch_index)?;
    let radius = validate_radius(radius)?;

    debug!(
        "Classifying branch {} on a {}x{} grid over [-{r}, {r}]² ({} lattice points, {:?})",
        threshold,
        spec.size,
        spec.size,
        lattice.len(),
        evaluation,
        r = spec.range
    );

    let cells = sample_grid(&spec.axis(), evaluation, |point| {
        u8::from(in_branch(point, threshold, radius, lattice))
    });

    Ok(ClassificationGrid {
        spec: *spec,
        branch_index: threshold,
        cells,
    })
}

/// Overlap count for every sample of `spec`.
///
/// # Errors
/// `InvalidParameter` for a degenerate grid or an invalid radius.
pub fn build_overlap_grid(
    radius: f64,
    lattice: &LatticePointSet,
    spec: &GridSpec,
) -> crate::Result<OverlapGrid> {
    build_overlap_grid_with(radius, lattice, spec, Evaluation::default())
}

/// [`build_overlap_grid`] with an explicit schedule.
pub fn build_overlap_grid_with(
    radius: f64,
    lattice: &LatticePointSet,
    spec: &GridSpec,
    evaluation: Evaluation,
) -> crate::Result<OverlapGrid> {
    spec.validate()?;
    let radius = validate_radius(radius)?;

    debug!(
        "Counting overlaps on a {}x{} grid ({} lattice points, {:?})",
        spec.size,
        spec.size,
        lattice.len(),
        evaluation
    );

    let counts = sample_grid(&spec.axis(), evaluation, |point| {
        count_overlaps(point, radius, lattice)
    });

    Ok(OverlapGrid {
        spec: *spec,
        counts,
    })
}

// ======================== SAMPLING ========================

fn sample_grid<T, F>(axis: &[f64], evaluation: Evaluation, sample: F) -> Vec<T>
where
    T: Copy + Default + Send,
    F: Fn(Point) -> T + Sync,
{
    let n = axis.len();
    if n == 0 {
        return Vec::new();
    }
    let mut cells = vec![T::default(); n * n];

    match evaluation {
        #[cfg(feature = "parallel")]
        Evaluation::Parallel => cells
            .par_chunks_mut(n)
            .zip(axis.par_iter())
            .for_each(|(row, &y)| fill_row(row, y, axis, &sample)),
        _ => cells
            .chunks_mut(n)
            .zip(axis.iter())
            .for_each(|(row, &y)| fill_row(row, y, axis, &sample)),
    }

    cells
}

#[inline]
fn fill_row<T, F>(row: &mut [T], y: f64, axis: &[f64], sample: &F)
where
    F: Fn(Point) -> T,
{
    for (cell, &x) in row.iter_mut().zip(axis) {
        *cell = sample(Point::new(x, y));
    }
}
