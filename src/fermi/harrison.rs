// Fermi radius of the 2D free-electron gas on a unit square lattice

use std::f64::consts::PI;

use crate::error::FermiError;

/// Fermi radius for `valence_electrons` electrons per unit cell.
///
/// With two spin states per k-point and one k-point per Brillouin zone area,
/// the filled Fermi disk satisfies 2·πr² = Z, so r = sqrt(Z / 2π) in units of
/// the reciprocal lattice constant.
///
/// # Errors
/// `InvalidParameter` when `valence_electrons` is not finite or not positive.
pub fn fermi_radius_from_valence(valence_electrons: f64) -> crate::Result<f64> {
    if !valence_electrons.is_finite() || valence_electrons <= 0.0 {
        return Err(FermiError::invalid_parameter(
            "valence_electrons",
            valence_electrons,
            "must be finite and positive",
        ));
    }
    Ok((valence_electrons / (2.0 * PI)).sqrt())
}

/// Electron count per unit cell that fills a Fermi disk of radius `radius`.
pub fn valence_from_fermi_radius(radius: f64) -> crate::Result<f64> {
    let radius = crate::error::validate_radius(radius)?;
    Ok(2.0 * PI * radius * radius)
}

/// Fermi disk area in units of the Brillouin zone area, Z / 2.
///
/// Summed over all branches, the area covered inside one zone equals this value.
pub fn occupied_zone_area(valence_electrons: f64) -> crate::Result<f64> {
    fermi_radius_from_valence(valence_electrons)?;
    Ok(valence_electrons / 2.0)
}
