// Report module: serializable summary of one classified branch for external renderers

use serde::{Deserialize, Serialize};

use crate::config::GridSpec;
use crate::fermi::grid::ClassificationGrid;
use crate::fermi::surface::FermiSurface;

/// Everything a renderer needs to draw one branch: axes, indicator rows and the
/// parameters they were computed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FermiSurfaceReport {
    pub valence_electrons: Option<f64>,
    pub radius: f64,
    pub branch_index: usize,
    pub grid: GridSpec,
    pub lattice_points: usize,
    pub filled_fraction: f64,
    pub filled_area: f64,
    /// Sample coordinates along kx (columns)
    pub x: Vec<f64>,
    /// Sample coordinates along ky (rows)
    pub y: Vec<f64>,
    /// Indicator rows, `z[i][j]` for (x[j], y[i])
    pub z: Vec<Vec<u8>>,
}

impl FermiSurfaceReport {
    pub fn new(
        surface: &FermiSurface,
        grid: &ClassificationGrid,
        valence_electrons: Option<f64>,
    ) -> Self {
        let axis = grid.spec().axis();
        Self {
            valence_electrons,
            radius: surface.radius(),
            branch_index: grid.branch_index(),
            grid: *grid.spec(),
            lattice_points: surface.lattice().len(),
            filled_fraction: grid.filled_fraction(),
            filled_area: grid.filled_area(),
            x: axis.clone(),
            y: axis,
            z: grid.to_rows(),
        }
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        let electrons = self
            .valence_electrons
            .map(|z| format!("Z = {}, ", z))
            .unwrap_or_default();
        format!(
            "branch {}: {}r = {:.4}, {} lattice points, {}x{} samples over [-{r}, {r}]², filled {:.2}% (area {:.4})",
            self.branch_index,
            electrons,
            self.radius,
            self.lattice_points,
            self.grid.size,
            self.grid.size,
            100.0 * self.filled_fraction,
            self.filled_area,
            r = self.grid.range
        )
    }
}

/// Character preview of an indicator grid, `#` inside the branch and `.` outside.
///
/// The top line is the largest ky. Grids wider than `max_columns` are
/// subsampled with a uniform stride in both directions.
pub fn render_ascii(grid: &ClassificationGrid, max_columns: usize) -> String {
    let (rows, cols) = grid.shape();
    let stride = cols.div_ceil(max_columns.max(1)).max(1);

    let mut out = String::new();
    for i in (0..rows).rev().step_by(stride) {
        for j in (0..cols).step_by(stride) {
            out.push(match grid.get(i, j) {
                Some(1) => '#',
                _ => '.',
            });
        }
        out.push('\n');
    }
    out
}
