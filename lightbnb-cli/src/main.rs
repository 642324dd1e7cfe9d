//! lightbnb CLI - command-line access to the LightBnB store
//!
//! - Property search with optional filters (`search`, `--explain` to print the planned SQL)
//! - User lookup and registration (`users`)
//! - Guest reservations (`reservations`)
//! - Property listing creation (`properties`)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::GlobalOpts;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and update the LightBnB rental listing store",
    long_about = "Search properties, look up users and reservations, and add listings. \
                  Connection settings come from DATABASE_URL, ./lightbnb.toml or \
                  ~/.lightbnb/config.toml."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search properties by city, owner, price and rating
    Search(commands::search::SearchArgs),
    /// Look up or register users
    Users(commands::users::UsersArgs),
    /// List a guest's reservations
    Reservations(commands::reservations::ReservationsArgs),
    /// Add property listings
    Properties(commands::properties::PropertiesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.global.debug,
    })
    .ok();

    match cli.command {
        Commands::Search(args) => commands::run_search(&cli.global, args).await?,
        Commands::Users(args) => commands::run_users(&cli.global, args).await?,
        Commands::Reservations(args) => commands::run_reservations(&cli.global, args).await?,
        Commands::Properties(args) => commands::run_properties(&cli.global, args).await?,
    }
    Ok(())
}
