//! Database error type

/// Errors from the storage layer
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The targeted statement matched no row
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// An id that does not coerce to an integer column
    #[error("invalid input syntax for type integer: '{raw}'")]
    InvalidId { raw: String },

    /// A value that does not coerce to a boolean column
    #[error("invalid input syntax for type boolean: '{raw}'")]
    InvalidBool { raw: String },

    /// Failure reported by a non-SQL backend
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
