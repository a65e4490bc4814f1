//! Rating-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, StoryId, ValidationError};

/// Errors raised by rating operations.
///
/// A failed refresh of a story's cached aggregate is not an error of the
/// triggering operation; it is reported on the operation's result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The rated story does not exist.
    StoryNotFound(StoryId),
    /// Score or identifier rejected.
    ValidationFailed { field: String, message: String },
    /// The store rejected a write on a uniqueness constraint.
    Conflict(String),
    /// The store could not be reached or failed.
    Infrastructure(String),
}

impl RatingError {
    pub fn story_not_found(id: StoryId) -> Self {
        RatingError::StoryNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RatingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RatingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RatingError::StoryNotFound(_) => ErrorCode::StoryNotFound,
            RatingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RatingError::Conflict(_) => ErrorCode::Conflict,
            RatingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RatingError::StoryNotFound(id) => format!("Story not found: {}", id),
            RatingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RatingError::Conflict(msg) => format!("Conflict: {}", msg),
            RatingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RatingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RatingError {}

impl From<ValidationError> for RatingError {
    fn from(err: ValidationError) -> Self {
        RatingError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for RatingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            code if code.is_validation() => RatingError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::Conflict => RatingError::Conflict(err.message),
            _ => RatingError::Infrastructure(err.to_string()),
        }
    }
}
