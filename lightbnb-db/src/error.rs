//! Store error type

use lightbnb_core::ValidationError;

/// Failure of a store operation.
///
/// Absence of rows is not represented here: lookups return `Option` and
/// listings return an empty `Vec`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Insert referenced a row that does not exist (foreign key)
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Insert collided with a unique constraint
    #[error("conflict: {resource} already exists ({detail})")]
    Conflict {
        resource: &'static str,
        detail: String,
    },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl DbError {
    /// Classify a failed INSERT.
    ///
    /// Unique violations become [`DbError::Conflict`], foreign-key violations
    /// become [`DbError::NotFound`] for `referenced`; anything else stays a
    /// plain [`DbError::Sqlx`].
    pub fn from_insert(
        err: sqlx::Error,
        resource: &'static str,
        referenced: Option<(&'static str, String)>,
    ) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict {
                    resource,
                    detail: db_err.message().to_owned(),
                };
            }
            if db_err.is_foreign_key_violation() {
                if let Some((resource, id)) = referenced {
                    return Self::NotFound { resource, id };
                }
            }
        }
        Self::Sqlx(err)
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
