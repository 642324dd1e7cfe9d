//! Property search filters

use serde::{Deserialize, Serialize};

use crate::money::Cents;

/// Optional criteria for a property search.
///
/// Every slot is independent; `None` imposes no constraint. Field names match
/// the keys a search form submits, and unknown keys are ignored on
/// deserialization so newer clients keep working against older builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Partial, case-sensitive match on the property city
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub owner_id: Option<i32>,

    /// Lower bound on the nightly cost, in cents
    #[serde(default)]
    pub minimum_price_per_night: Option<Cents>,

    /// Upper bound on the nightly cost, in cents
    #[serde(default)]
    pub maximum_price_per_night: Option<Cents>,

    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn minimum_price_per_night(mut self, cents: impl Into<Cents>) -> Self {
        self.minimum_price_per_night = Some(cents.into());
        self
    }

    pub fn maximum_price_per_night(mut self, cents: impl Into<Cents>) -> Self {
        self.maximum_price_per_night = Some(cents.into());
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Number of filters that will contribute a predicate.
    pub fn active_count(&self) -> usize {
        [
            self.city.is_some(),
            self.owner_id.is_some(),
            self.minimum_price_per_night.is_some(),
            self.maximum_price_per_night.is_some(),
            self.minimum_rating.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}
