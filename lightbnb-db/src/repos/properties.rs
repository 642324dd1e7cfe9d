//! Property repository
//!
//! Search runs a planned query from [`lightbnb_core::build_property_search`];
//! creation is a fixed-shape INSERT.

use lightbnb_core::{build_property_search, NewProperty, SearchFilters};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::DbError;
use crate::executor;
use crate::records::{PropertyListing, PropertyRecord};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties, cheapest first.
    ///
    /// `limit` falls back to 10 when absent or non-positive.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        filters: &SearchFilters,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, DbError> {
        let plan = build_property_search(filters, limit);
        let listings: Vec<PropertyListing> = executor::fetch_plan_as(self.pool, &plan).await?;

        debug!(
            filters = filters.active_count(),
            rows = listings.len(),
            "property search"
        );
        Ok(listings)
    }

    /// Add a property, returning the inserted row.
    ///
    /// The nightly cost arrives in cents and is stored in whole major units.
    /// An unknown owner surfaces as [`DbError::NotFound`].
    #[instrument(skip(self, property), fields(owner_id = property.owner_id, title = %property.title))]
    pub async fn create(&self, property: &NewProperty) -> Result<PropertyRecord, DbError> {
        property.validate()?;
        let cost_per_night = property.cost_per_night_major()?;

        sqlx::query_as::<_, PropertyRecord>(
            r#"
            INSERT INTO properties (owner_id, title, description, thumbnail_photo_url,
                cover_photo_url, cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            DbError::from_insert(
                e,
                "property",
                Some(("owner", property.owner_id.to_string())),
            )
        })
    }
}
