//! lightbnb-core: domain types and query planning for LightBnB
//!
//! Everything in this crate is pure. Nothing here touches the database:
//! the property search is planned into a [`QueryPlan`] which the store
//! layer (`lightbnb-db`) binds and executes.

pub mod filters;
pub mod models;
pub mod money;
pub mod query;
pub mod validation;

pub use filters::SearchFilters;
pub use models::{NewProperty, NewUser};
pub use money::Cents;
pub use query::{build_property_search, QueryPlan, QueryValue, DEFAULT_LIMIT};
pub use validation::ValidationError;
