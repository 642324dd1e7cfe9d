//! User repository
//!
//! Lookups by email and id return `None` when no row matches.

use lightbnb_core::NewUser;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::DbError;
use crate::records::UserRecord;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user given their email.
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserRecord>, DbError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        debug!(found = user.is_some(), "user lookup by email");
        Ok(user)
    }

    /// Get a single user given their id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserRecord>, DbError> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        debug!(found = user.is_some(), "user lookup by id");
        Ok(user)
    }

    /// Add a new user, returning the inserted row.
    ///
    /// A duplicate email surfaces as [`DbError::Conflict`] when the schema
    /// enforces uniqueness.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: &NewUser) -> Result<UserRecord, DbError> {
        user.validate()?;

        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, "user", None))
    }
}
