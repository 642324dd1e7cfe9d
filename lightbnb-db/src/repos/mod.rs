//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool; no connection is held between calls
//! - Returns inserted rows via RETURNING (no read-after-write)
//! - Maps constraint violations to typed errors instead of pre-checking

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
