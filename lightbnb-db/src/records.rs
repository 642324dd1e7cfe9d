//! Row shapes returned by the store
//!
//! These are passthrough records: columns come back as the store holds them.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Row of `users`
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Row of `properties`; `cost_per_night` is in major units
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyRecord {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property search result: the property plus its average review rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: PropertyRecord,
    pub average_rating: Option<f64>,
}

/// Reservation joined with its property and the property's rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReservationRecord {
    pub id: i32,
    pub property_id: i32,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cost_per_night: i32,
    pub average_rating: Option<f64>,
}
