//! Catalog-specific error types.
//!
//! | Error | Kind |
//! |-------|------|
//! | StoryNotFound / StorySlugNotFound / GenreNotFound | NotFound |
//! | ValidationFailed | InvalidInput |
//! | Conflict | ConflictOrConstraint |
//! | Infrastructure | StorageUnavailable |

use crate::domain::foundation::{DomainError, ErrorCode, GenreId, StoryId, ValidationError};

/// Errors raised by catalog queries and genre management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No story with this id.
    StoryNotFound(StoryId),
    /// No published story with this slug.
    StorySlugNotFound(String),
    /// No genre with this id.
    GenreNotFound(GenreId),
    /// Caller input was rejected.
    ValidationFailed { field: String, message: String },
    /// A store uniqueness constraint was violated.
    Conflict(String),
    /// The store could not be reached or failed.
    Infrastructure(String),
}

impl CatalogError {
    pub fn story_not_found(id: StoryId) -> Self {
        CatalogError::StoryNotFound(id)
    }

    pub fn genre_not_found(id: GenreId) -> Self {
        CatalogError::GenreNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CatalogError::Infrastructure(message.into())
    }

    /// Returns true for the not-found family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::StoryNotFound(_)
                | CatalogError::StorySlugNotFound(_)
                | CatalogError::GenreNotFound(_)
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::StoryNotFound(_) | CatalogError::StorySlugNotFound(_) => {
                ErrorCode::StoryNotFound
            }
            CatalogError::GenreNotFound(_) => ErrorCode::GenreNotFound,
            CatalogError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CatalogError::Conflict(_) => ErrorCode::Conflict,
            CatalogError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CatalogError::StoryNotFound(id) => format!("Story not found: {}", id),
            CatalogError::StorySlugNotFound(slug) => format!("Story not found: {}", slug),
            CatalogError::GenreNotFound(id) => format!("Genre not found: {}", id),
            CatalogError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CatalogError::Conflict(msg) => format!("Conflict: {}", msg),
            CatalogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err.code {
            code if code.is_validation() => CatalogError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::Conflict => CatalogError::Conflict(err.message),
            _ => CatalogError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_keeps_field_name() {
        let err: CatalogError = ValidationError::out_of_range("page", 1, 10, 0).into();
        assert!(matches!(
            err,
            CatalogError::ValidationFailed { ref field, .. } if field == "page"
        ));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err: CatalogError = DomainError::database("connection refused").into();
        assert!(matches!(err, CatalogError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn conflict_is_preserved() {
        let err: CatalogError = DomainError::new(ErrorCode::Conflict, "duplicate slug").into();
        assert_eq!(err, CatalogError::Conflict("duplicate slug".to_string()));
    }

    #[test]
    fn not_found_family_is_detected() {
        assert!(CatalogError::story_not_found(StoryId::new()).is_not_found());
        assert!(CatalogError::StorySlugNotFound("x".to_string()).is_not_found());
        assert!(!CatalogError::infrastructure("down").is_not_found());
    }

    #[test]
    fn message_includes_identifier() {
        let id = GenreId::new();
        let err = CatalogError::genre_not_found(id);
        assert_eq!(err.to_string(), format!("Genre not found: {}", id));
    }
}
