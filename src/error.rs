//! Error type for checked access to an [`Optional`](crate::Optional).

use thiserror::Error;

/// Errors raised by checked accessors.
///
/// There is a single failure mode: asking an absent optional for its value.
/// Callers that want to branch without an error check
/// [`Optional::has_value`](crate::Optional::has_value) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Checked access on an optional that holds no value
    #[error("Bad optional access")]
    BadOptionalAccess,
}

/// Result type for checked optional access.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a bad-optional-access error.
    pub fn is_bad_access(&self) -> bool {
        matches!(self, Error::BadOptionalAccess)
    }
}
