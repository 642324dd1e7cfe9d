//! Insert inputs with validation
//!
//! Store operations validate these before issuing any SQL. Invalid input
//! returns ValidationError, not panic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::money::Cents;
use crate::validation::ValidationError;

/// Column width for VARCHAR(255) fields
const MAX_TEXT_LEN: usize = 255;

/// Largest nightly cost, in cents, that fits the INTEGER column in major units
pub const MAX_COST_PER_NIGHT_CENTS: i64 = i32::MAX as i64 * 100;

/// Loose shape check; deliverability is not our concern
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    bounded(field, value)
}

fn bounded(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field,
            min: 0,
            value,
        });
    }
    Ok(())
}

/// User registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain",
            });
        }
        required("password", &self.password)?;
        Ok(())
    }
}

/// Property listing payload.
///
/// `cost_per_night` is in cents like every other inbound price; the store
/// receives it in whole major units, so fractional cents are rejected rather
/// than rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title)?;
        bounded("thumbnail_photo_url", &self.thumbnail_photo_url)?;
        bounded("cover_photo_url", &self.cover_photo_url)?;
        self.cost_per_night_major()?;
        required("street", &self.street)?;
        required("city", &self.city)?;
        required("province", &self.province)?;
        required("post_code", &self.post_code)?;
        required("country", &self.country)?;
        non_negative("parking_spaces", i64::from(self.parking_spaces))?;
        non_negative("number_of_bathrooms", i64::from(self.number_of_bathrooms))?;
        non_negative("number_of_bedrooms", i64::from(self.number_of_bedrooms))?;
        Ok(())
    }

    /// Nightly cost as the store holds it: whole major units.
    pub fn cost_per_night_major(&self) -> Result<i32, ValidationError> {
        const FIELD: &str = "cost_per_night";
        let cents = self.cost_per_night.get();
        non_negative(FIELD, cents)?;
        if cents > MAX_COST_PER_NIGHT_CENTS {
            return Err(ValidationError::TooLarge {
                field: FIELD,
                max: MAX_COST_PER_NIGHT_CENTS,
                value: cents,
            });
        }
        let major = self
            .cost_per_night
            .whole_major()
            .ok_or(ValidationError::InvalidFormat {
                field: FIELD,
                reason: "must be a multiple of 100 cents",
            })?;
        i32::try_from(major).map_err(|_| ValidationError::TooLarge {
            field: FIELD,
            max: MAX_COST_PER_NIGHT_CENTS,
            value: cents,
        })
    }
}
