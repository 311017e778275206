// Branch membership: a k-point lies in the n-th Fermi-surface branch when at
// least n disks cover it

use crate::error::{validate_branch_index, validate_radius};
use crate::fermi::overlap::count_overlaps;
use crate::interfaces::Point;
use crate::lattice::LatticePointSet;

/// Indicator for the n-th Fermi-surface branch: 1 if `point` is covered by at
/// least `branch_index` disks, 0 otherwise.
///
/// A branch index above the largest attainable overlap simply yields 0.
///
/// # Errors
/// `InvalidParameter` when `branch_index` <= 0 or `radius` is negative or not finite.
pub fn classify_branch(
    point: Point,
    branch_index: i64,
    radius: f64,
    lattice: &LatticePointSet,
) -> crate::Result<u8> {
    let threshold = validate_branch_index(branch_index)?;
    let radius = validate_radius(radius)?;
    Ok(u8::from(in_branch(point, threshold, radius, lattice)))
}

/// Unchecked membership test for already validated parameters.
#[inline]
pub(crate) fn in_branch(
    point: Point,
    threshold: usize,
    radius: f64,
    lattice: &LatticePointSet,
) -> bool {
    count_overlaps(point, radius, lattice) >= threshold
}
