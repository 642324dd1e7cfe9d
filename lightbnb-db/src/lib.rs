//! lightbnb-db: PostgreSQL store for LightBnB
//!
//! # Design Principles
//!
//! - One connection pool per process, shared by cloning [`Store`]
//! - Every operation returns `Result<_, DbError>`, reads and writes alike
//! - "No rows" is `Ok(None)` or an empty `Vec`, never an error
//! - Dynamic SQL only comes from a [`lightbnb_core::QueryPlan`]; values are always bound

pub mod config;
pub mod error;
pub mod executor;
pub mod pool;
pub mod records;
pub mod repos;
pub mod store;

pub use config::StoreConfig;
pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use records::{PropertyListing, PropertyRecord, ReservationRecord, UserRecord};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
pub use store::Store;
