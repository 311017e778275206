use log::{debug, warn};

use crate::config::GridSpec;
use crate::error::validate_radius;
use crate::fermi::branch::classify_branch;
use crate::fermi::grid::{
    ClassificationGrid, Evaluation, OverlapGrid, build_classification_grid_with,
    build_overlap_grid_with,
};
use crate::fermi::harrison::fermi_radius_from_valence;
use crate::fermi::overlap::count_overlaps;
use crate::geometries::BoundingBox2D;
use crate::interfaces::Point;
use crate::lattice::{LatticePointSet, select_lattice_range_for_region};

/// Harrison construction for one Fermi radius.
///
/// Holds the validated radius together with the lattice points selected for
/// its sampling region. The set is computed once here and only read afterwards,
/// so one instance can serve any number of queries and threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FermiSurface {
    radius: f64,
    region: BoundingBox2D,
    lattice: LatticePointSet,
}

impl FermiSurface {
    /// Construction over the conventional region [-1.5, 1.5]².
    pub fn new(radius: f64) -> crate::Result<Self> {
        Self::for_region(BoundingBox2D::default(), radius)
    }

    /// Construction for `valence_electrons` electrons per unit cell.
    pub fn from_valence(valence_electrons: f64) -> crate::Result<Self> {
        Self::new(fermi_radius_from_valence(valence_electrons)?)
    }

    /// Construction whose lattice covers the whole sampling square of `spec`.
    pub fn covering(radius: f64, spec: &GridSpec) -> crate::Result<Self> {
        spec.validate()?;
        Self::for_region(spec.region(), radius)
    }

    pub fn for_region(region: BoundingBox2D, radius: f64) -> crate::Result<Self> {
        let radius = validate_radius(radius)?;
        let lattice = select_lattice_range_for_region(&region, radius)?;
        debug!("Fermi surface r = {:.4} over {} lattice points", radius, lattice.len());
        Ok(Self {
            radius,
            region,
            lattice,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn region(&self) -> &BoundingBox2D {
        &self.region
    }

    pub fn lattice(&self) -> &LatticePointSet {
        &self.lattice
    }

    pub fn count_overlaps(&self, point: Point) -> usize {
        count_overlaps(point, self.radius, &self.lattice)
    }

    pub fn classify_branch(&self, point: Point, branch_index: i64) -> crate::Result<u8> {
        classify_branch(point, branch_index, self.radius, &self.lattice)
    }

    pub fn classification_grid(
        &self,
        branch_index: i64,
        spec: &GridSpec,
    ) -> crate::Result<ClassificationGrid> {
        self.check_coverage(spec);
        build_classification_grid_with(
            branch_index,
            self.radius,
            &self.lattice,
            spec,
            Evaluation::default(),
        )
    }

    pub fn overlap_grid(&self, spec: &GridSpec) -> crate::Result<OverlapGrid> {
        self.check_coverage(spec);
        build_overlap_grid_with(self.radius, &self.lattice, spec, Evaluation::default())
    }

    /// Whether every sample of `spec` lies inside the lattice selection region.
    pub fn covers(&self, spec: &GridSpec) -> bool {
        let sampled = spec.region();
        self.region.contains(sampled.min) && self.region.contains(sampled.max)
    }

    // Samples outside the selection region may miss disks
    fn check_coverage(&self, spec: &GridSpec) {
        if spec.validate().is_ok() && !self.covers(spec) {
            warn!(
                "Grid range {} exceeds the lattice selection region [{}, {}] x [{}, {}]; overlap counts near the edges may be too low",
                spec.range, self.region.min.x, self.region.max.x, self.region.min.y, self.region.max.y
            );
        }
    }
}
