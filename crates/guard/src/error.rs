//! Error types for the roseau-guard crate.

/// Error type for every guard in the roseau-guard crate.
///
/// Both variants name the offending parameter using the display name the
/// caller passed to the guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// Returned when an argument that must be present is absent.
    #[error("value cannot be absent (parameter '{param}')")]
    NullArgument {
        /// Display name of the absent argument.
        param: String,
    },

    /// Returned when a value violates an ordering or size constraint.
    #[error("{message} (parameter '{param}')")]
    OutOfRange {
        /// Display name of the offending argument.
        param: String,
        /// Description of the violated constraint.
        message: String,
    },
}

impl GuardError {
    pub(crate) fn null_argument(param: &str) -> Self {
        Self::NullArgument {
            param: param.to_owned(),
        }
    }

    pub(crate) fn out_of_range(param: &str, message: String) -> Self {
        Self::OutOfRange {
            param: param.to_owned(),
            message,
        }
    }

    /// Returns the display name of the parameter that failed its guard.
    pub fn param(&self) -> &str {
        match self {
            Self::NullArgument { param } | Self::OutOfRange { param, .. } => param,
        }
    }
}
