// Error module: the single failure mode of the classifier is a parameter outside its domain.
// Every public entry point validates its inputs up front and returns one of these before any work is done.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FermiError {
    /// A caller-supplied parameter violated its precondition.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl FermiError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        FermiError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            FermiError::InvalidParameter { name, .. } => name,
        }
    }
}

// ======================== SHARED VALIDATORS ========================

/// Radius must be finite and non-negative.
pub(crate) fn validate_radius(radius: f64) -> crate::Result<f64> {
    if !radius.is_finite() {
        return Err(FermiError::invalid_parameter("radius", radius, "must be finite"));
    }
    if radius < 0.0 {
        return Err(FermiError::invalid_parameter("radius", radius, "must be non-negative"));
    }
    Ok(radius)
}

/// Branch index must be a positive integer; returns it as a count threshold.
pub(crate) fn validate_branch_index(branch_index: i64) -> crate::Result<usize> {
    if branch_index <= 0 {
        return Err(FermiError::invalid_parameter(
            "branch_index",
            branch_index,
            "must be at least 1",
        ));
    }
    usize::try_from(branch_index).map_err(|_| {
        FermiError::invalid_parameter("branch_index", branch_index, "does not fit in usize")
    })
}
