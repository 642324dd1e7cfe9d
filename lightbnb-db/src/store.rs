//! Store Connection shared across callers

use lightbnb_core::{NewProperty, NewUser, SearchFilters};
use sqlx::PgPool;

use crate::config::StoreConfig;
use crate::error::DbError;
use crate::pool::create_pool;
use crate::records::{PropertyListing, PropertyRecord, ReservationRecord, UserRecord};
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// Owns the connection pool for the life of the process.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &StoreConfig) -> Result<Self, DbError> {
        config.validate()?;
        let pool = create_pool(config).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(&self.pool)
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(&self.pool)
    }

    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<UserRecord>, DbError> {
        self.users().get_by_email(email).await
    }

    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<UserRecord>, DbError> {
        self.users().get_by_id(id).await
    }

    pub async fn add_user(&self, user: &NewUser) -> Result<UserRecord, DbError> {
        self.users().create(user).await
    }

    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationRecord>, DbError> {
        self.reservations().list_for_guest(guest_id, limit).await
    }

    pub async fn get_all_properties(
        &self,
        filters: &SearchFilters,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, DbError> {
        self.properties().search(filters, limit).await
    }

    pub async fn add_property(&self, property: &NewProperty) -> Result<PropertyRecord, DbError> {
        self.properties().create(property).await
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
