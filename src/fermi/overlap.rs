// Overlap counting: how many Fermi disks cover a k-point

use crate::geometries::Disk;
use crate::interfaces::Point;
use crate::lattice::LatticePointSet;

/// Count the lattice points whose closed disk of radius `radius` covers `point`.
///
/// A lattice point ℓ counts when |point - ℓ|² <= radius², so points exactly on
/// a disk rim are covered. Linear in the size of `lattice`; the set is only read.
///
/// `radius` is expected to be validated (non-negative) by the caller.
pub fn count_overlaps(point: Point, radius: f64, lattice: &LatticePointSet) -> usize {
    debug_assert!(radius >= 0.0, "Fermi radius must be non-negative");
    lattice
        .iter()
        .filter(|&&center| Disk::new(center, radius).contains_point(point))
        .count()
}

