//! Player validation errors
//!
//! Every variant is a request-validation failure: the caller sent a record
//! that can never be stored.

use thiserror::Error;

/// Result type for player validation
pub type PlayerResult<T> = Result<T, PlayerError>;

/// Write-side validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Create without a name
    #[error("name is required")]
    MissingName,

    /// Name empty or too long
    #[error("name must be 1 to {max} characters, got {len}")]
    InvalidName { len: usize, max: usize },

    /// Title too long
    #[error("title must be at most {max} characters, got {len}")]
    TitleTooLong { len: usize, max: usize },

    /// Experience outside 0..=MAX_EXPERIENCE
    #[error("experience {value} is outside 0..={max}")]
    ExperienceOutOfRange { value: i64, max: i64 },

    /// Birthday before the epoch
    #[error("birthday {0} is before the epoch")]
    NegativeBirthday(i64),
}
