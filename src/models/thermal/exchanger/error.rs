use thiserror::Error;

use crate::support::{constraint::ConstraintError, hx::TemperatureCross};

/// Errors from the sizing pipeline.
///
/// Compliance violations are deliberately absent: an invalid design is data,
/// not an error. These variants cover the two genuinely fatal conditions —
/// a configuration no calculation exists for, and an infeasible temperature
/// profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExchangerError {
    /// A field of the input configuration is outside its physical domain.
    /// Locally recoverable by the caller correcting the input.
    #[error("invalid configuration: {scope}.{field}: {source}")]
    InvalidConfiguration {
        scope: &'static str,
        field: &'static str,
        source: ConstraintError,
    },

    /// The terminal temperature differences are infeasible.
    #[error(transparent)]
    TemperatureCross(#[from] TemperatureCross),
}

impl ExchangerError {
    pub(crate) fn invalid(
        scope: &'static str,
        field: &'static str,
        source: ConstraintError,
    ) -> Self {
        Self::InvalidConfiguration {
            scope,
            field,
            source,
        }
    }
}
