//! Command implementations for the lightbnb CLI

pub mod properties;
pub mod reservations;
pub mod search;
pub mod users;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lightbnb_db::{Store, StoreConfig};
use serde::Serialize;
use tracing::debug;

pub use properties::run_properties;
pub use reservations::run_reservations;
pub use search::run_search;
pub use users::run_users;

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// PostgreSQL connection URL (overrides DATABASE_URL and config files)
    #[arg(long, global = true, value_name = "URL")]
    pub database_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve configuration and open the store.
pub async fn connect(global: &GlobalOpts) -> Result<Store> {
    let mut config = StoreConfig::load().context("Failed to load store configuration")?;
    if let Some(url) = &global.database_url {
        debug!("Using --database-url override");
        config.database_url = url.clone();
    }

    Store::connect(&config)
        .await
        .context("Failed to connect to the database")
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
