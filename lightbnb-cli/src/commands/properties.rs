//! Property listing commands

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_core::NewProperty;
use lightbnb_db::DbError;

use super::{connect, print_json, GlobalOpts, OutputFormat};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommands {
    /// Add a property listing from a JSON description
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// JSON file describing the property ('-' for stdin); cost_per_night in cents, whole dollars only
    #[arg(long, value_name = "PATH")]
    pub from_json: PathBuf,
}

pub async fn run_properties(global: &GlobalOpts, args: PropertiesArgs) -> Result<()> {
    match args.command {
        PropertiesCommands::Add(add) => run_add(global, add).await,
    }
}

fn read_property(path: &Path) -> Result<NewProperty> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read property from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read property file: {}", path.display()))?
    };

    let property: NewProperty =
        serde_json::from_str(&contents).context("Invalid property JSON")?;
    property.validate()?;
    Ok(property)
}

async fn run_add(global: &GlobalOpts, args: AddArgs) -> Result<()> {
    let property = read_property(&args.from_json)?;

    let store = connect(global).await?;
    let result = store.add_property(&property).await;
    store.close().await;

    let created = match result {
        Ok(created) => created,
        Err(DbError::NotFound { id, .. }) => {
            return Err(anyhow!("Owner {} does not exist", id));
        }
        Err(e) => return Err(e.into()),
    };

    match global.format {
        OutputFormat::Json => print_json(&created),
        OutputFormat::Text => {
            println!(
                "Added property #{} '{}' in {} at ${}/night",
                created.id, created.title, created.city, created.cost_per_night
            );
            Ok(())
        }
    }
}
