//! Input configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A tunable is outside its meaningful range.
    #[error("Invalid input config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl InputError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        InputError::InvalidConfig { field, reason }
    }
}
