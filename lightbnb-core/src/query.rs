//! Property search query planning
//!
//! Turns a [`SearchFilters`] record and a result limit into one
//! positionally-parameterized PostgreSQL query. Values never enter the query
//! text; each one is bound separately through its `$N` placeholder.
//!
//! # Shape
//!
//! ```text
//! SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
//! FROM properties
//! JOIN property_reviews ON properties.id = property_reviews.property_id
//! WHERE properties.city LIKE $1          -- first predicate opens the clause
//!   AND property_reviews.rating >= $2    -- later predicates are conjunctions
//! GROUP BY properties.id
//! ORDER BY properties.cost_per_night ASC, properties.id ASC
//! LIMIT $3                               -- limit is always the last parameter
//! ```
//!
//! Predicates are collected into an accumulator first and only numbered when
//! the text is rendered, so placeholder `$k` is always parameter `k` no matter
//! which filters were present.

use serde::Serialize;
use std::fmt;

use crate::filters::SearchFilters;

/// Result limit used when the caller gives none, or a non-positive one.
pub const DEFAULT_LIMIT: i64 = 10;

const SELECT_PROPERTIES: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating\n\
FROM properties\n\
JOIN property_reviews ON properties.id = property_reviews.property_id";

const GROUP_AND_ORDER: &str = "GROUP BY properties.id\n\
ORDER BY properties.cost_per_night ASC, properties.id ASC";

/// A scalar bound to one positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{:?}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Planned query: rendered text, its predicates and the aligned parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    text: String,
    predicates: Vec<String>,
    params: Vec<QueryValue>,
    limit: i64,
}

impl QueryPlan {
    /// Full query text with `$N` placeholders.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Predicate fragments in evaluation order, without their keywords.
    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    /// Bound values; entry `k - 1` belongs to placeholder `$k`.
    pub fn params(&self) -> &[QueryValue] {
        &self.params
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

/// Ordered (condition, value) pairs awaiting placeholder numbers.
#[derive(Default)]
struct PredicateAccumulator {
    entries: Vec<(&'static str, QueryValue)>,
}

impl PredicateAccumulator {
    /// `condition` is the predicate up to, not including, its placeholder.
    fn push(&mut self, condition: &'static str, value: impl Into<QueryValue>) {
        self.entries.push((condition, value.into()));
    }

    fn render(self, limit: i64) -> QueryPlan {
        let mut text = String::from(SELECT_PROPERTIES);
        let mut predicates = Vec::with_capacity(self.entries.len());
        let mut params = Vec::with_capacity(self.entries.len() + 1);

        for (index, (condition, value)) in self.entries.into_iter().enumerate() {
            let fragment = format!("{} ${}", condition, index + 1);
            let keyword = if index == 0 { "WHERE" } else { "  AND" };

            text.push('\n');
            text.push_str(keyword);
            text.push(' ');
            text.push_str(&fragment);

            predicates.push(fragment);
            params.push(value);
        }

        params.push(QueryValue::Int(limit));
        text.push('\n');
        text.push_str(GROUP_AND_ORDER);
        text.push_str(&format!("\nLIMIT ${}", params.len()));

        QueryPlan {
            text,
            predicates,
            params,
            limit,
        }
    }
}

/// Plan a property search.
///
/// Each present filter contributes one predicate and one parameter, in the
/// order city, owner, minimum price, maximum price, minimum rating. Prices
/// arrive in cents and are bound in major units. A `None`, zero or negative
/// `limit` falls back to [`DEFAULT_LIMIT`].
///
/// # Example
///
/// ```
/// use lightbnb_core::{build_property_search, QueryValue, SearchFilters};
///
/// let filters = SearchFilters::new().city("van").minimum_rating(4.0);
/// let plan = build_property_search(&filters, Some(5));
///
/// assert_eq!(
///     plan.params(),
///     &[
///         QueryValue::Text("%van%".into()),
///         QueryValue::Float(4.0),
///         QueryValue::Int(5),
///     ]
/// );
/// assert!(plan.text().ends_with("LIMIT $3"));
/// ```
pub fn build_property_search(filters: &SearchFilters, limit: Option<i64>) -> QueryPlan {
    let mut acc = PredicateAccumulator::default();

    if let Some(city) = &filters.city {
        acc.push("properties.city LIKE", format!("%{}%", city));
    }

    if let Some(owner_id) = filters.owner_id {
        acc.push("properties.owner_id =", owner_id);
    }

    if let Some(min) = filters.minimum_price_per_night {
        acc.push("properties.cost_per_night >=", min.to_major());
    }

    if let Some(max) = filters.maximum_price_per_night {
        acc.push("properties.cost_per_night <=", max.to_major());
    }

    if let Some(rating) = filters.minimum_rating {
        acc.push("property_reviews.rating >=", rating);
    }

    let limit = match limit {
        Some(n) if n > 0 => n,
        _ => DEFAULT_LIMIT,
    };

    acc.render(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Cents;

    fn keyword_count(text: &str, keyword: &str) -> usize {
        text.split_whitespace().filter(|word| *word == keyword).count()
    }

    #[test]
    fn no_filters_has_no_condition_clause() {
        let plan = build_property_search(&SearchFilters::default(), None);

        assert_eq!(keyword_count(plan.text(), "WHERE"), 0);
        assert_eq!(keyword_count(plan.text(), "AND"), 0);
        assert!(plan.predicates().is_empty());
        assert_eq!(plan.params(), &[QueryValue::Int(DEFAULT_LIMIT)]);
        assert!(plan.text().ends_with("LIMIT $1"));
    }

    #[test]
    fn single_filter_opens_clause_once() {
        let plan = build_property_search(&SearchFilters::new().owner_id(3), None);

        assert_eq!(keyword_count(plan.text(), "WHERE"), 1);
        assert_eq!(keyword_count(plan.text(), "AND"), 0);
        assert!(plan.text().contains("WHERE properties.owner_id = $1"));
        assert_eq!(plan.params(), &[QueryValue::Int(3), QueryValue::Int(10)]);
    }

    #[test]
    fn first_present_filter_opens_clause_even_when_not_city() {
        let plan = build_property_search(
            &SearchFilters::new()
                .maximum_price_per_night(30000)
                .minimum_rating(3.5),
            None,
        );

        assert!(plan
            .text()
            .contains("WHERE properties.cost_per_night <= $1"));
        assert!(plan.text().contains("AND property_reviews.rating >= $2"));
        assert!(plan.text().ends_with("LIMIT $3"));
    }

    #[test]
    fn all_filters_follow_fixed_order() {
        let filters = SearchFilters::new()
            .minimum_rating(4.0)
            .maximum_price_per_night(20000)
            .minimum_price_per_night(5000)
            .owner_id(9)
            .city("Van");
        let plan = build_property_search(&filters, Some(25));

        assert_eq!(
            plan.predicates(),
            &[
                "properties.city LIKE $1",
                "properties.owner_id = $2",
                "properties.cost_per_night >= $3",
                "properties.cost_per_night <= $4",
                "property_reviews.rating >= $5",
            ]
        );
        assert_eq!(
            plan.params(),
            &[
                QueryValue::Text("%Van%".into()),
                QueryValue::Int(9),
                QueryValue::Float(50.0),
                QueryValue::Float(200.0),
                QueryValue::Float(4.0),
                QueryValue::Int(25),
            ]
        );
        assert_eq!(keyword_count(plan.text(), "WHERE"), 1);
        assert_eq!(keyword_count(plan.text(), "AND"), 4);
    }

    #[test]
    fn prices_are_normalized_to_major_units() {
        let plan = build_property_search(
            &SearchFilters::new().minimum_price_per_night(Cents(5000)),
            None,
        );
        assert_eq!(plan.params()[0], QueryValue::Float(50.0));

        let plan = build_property_search(
            &SearchFilters::new().maximum_price_per_night(Cents(12345)),
            None,
        );
        assert_eq!(plan.params()[0], QueryValue::Float(123.45));
    }

    #[test]
    fn zero_price_is_present_not_absent() {
        let plan = build_property_search(
            &SearchFilters::new().minimum_price_per_night(Cents(0)),
            None,
        );
        assert_eq!(keyword_count(plan.text(), "WHERE"), 1);
        assert!(plan.text().contains("WHERE properties.cost_per_night >= $1"));
        assert_eq!(
            plan.params(),
            &[QueryValue::Float(0.0), QueryValue::Int(10)]
        );
    }

    #[test]
    fn blank_city_still_renders_a_predicate() {
        for city in ["", "   "] {
            let plan = build_property_search(&SearchFilters::new().city(city), None);
            assert_eq!(plan.params()[0], QueryValue::Text(format!("%{}%", city)));
            assert_eq!(keyword_count(plan.text(), "WHERE"), 1);
        }
    }

    #[test]
    fn city_text_is_bound_not_interpolated() {
        let hostile = "x'; DROP TABLE users; --";
        let plan = build_property_search(&SearchFilters::new().city(hostile), None);

        assert!(!plan.text().contains("DROP TABLE"));
        assert_eq!(plan.params()[0], QueryValue::Text(format!("%{}%", hostile)));
    }

    #[test]
    fn non_positive_limits_fall_back_to_default() {
        for limit in [None, Some(0), Some(-4)] {
            let plan = build_property_search(&SearchFilters::default(), limit);
            assert_eq!(plan.limit(), DEFAULT_LIMIT);
            assert_eq!(plan.params().last(), Some(&QueryValue::Int(DEFAULT_LIMIT)));
        }
    }

    #[test]
    fn van_with_rating_scenario() {
        let filters = SearchFilters::new().city("van").minimum_rating(4.0);
        let plan = build_property_search(&filters, Some(5));

        assert_eq!(
            plan.params(),
            &[
                QueryValue::Text("%van%".into()),
                QueryValue::Float(4.0),
                QueryValue::Int(5),
            ]
        );
        assert_eq!(keyword_count(plan.text(), "WHERE"), 1);
        assert_eq!(keyword_count(plan.text(), "AND"), 1);
        assert!(plan.text().contains("GROUP BY properties.id"));
        assert!(plan.text().contains("ORDER BY properties.cost_per_night ASC"));
        assert!(plan.text().ends_with("LIMIT $3"));
    }

    #[test]
    fn ordering_clause_follows_conditions() {
        let plan = build_property_search(&SearchFilters::new().city("a").owner_id(1), None);
        let text = plan.text();

        let and_at = text.find("AND").unwrap();
        let group_at = text.find("GROUP BY").unwrap();
        let order_at = text.find("ORDER BY").unwrap();
        let limit_at = text.find("LIMIT").unwrap();
        assert!(and_at < group_at && group_at < order_at && order_at < limit_at);
    }

    #[test]
    fn values_serialize_as_plain_json_scalars() {
        let plan = build_property_search(&SearchFilters::new().city("van").minimum_rating(4.0), Some(5));
        let json = serde_json::to_string(plan.params()).unwrap();
        assert_eq!(json, r#"["%van%",4.0,5]"#);
    }
}
