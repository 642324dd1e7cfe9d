//! Property search command
//!
//! Filters come from flags, optionally layered over a JSON object
//! (`--filters-json`). Prices are given in cents.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_core::{build_property_search, Cents, SearchFilters};
use lightbnb_db::PropertyListing;

use super::{connect, print_json, GlobalOpts, OutputFormat};

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Partial city name
    #[arg(long)]
    pub city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    pub owner_id: Option<i32>,

    /// Minimum nightly price in cents
    #[arg(long, value_name = "CENTS")]
    pub min_price: Option<i64>,

    /// Maximum nightly price in cents
    #[arg(long, value_name = "CENTS")]
    pub max_price: Option<i64>,

    /// Minimum review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum number of results (default 10)
    #[arg(long, short = 'n')]
    pub limit: Option<i64>,

    /// Read base filters from a JSON object file ('-' for stdin); flags override it
    #[arg(long, value_name = "PATH")]
    pub filters_json: Option<PathBuf>,

    /// Print the planned query and parameters without running it
    #[arg(long)]
    pub explain: bool,
}

impl SearchArgs {
    fn filters(&self) -> Result<SearchFilters> {
        let mut filters = match &self.filters_json {
            Some(path) => read_filters(path)?,
            None => SearchFilters::default(),
        };

        if let Some(city) = &self.city {
            filters.city = Some(city.clone());
        }
        if let Some(owner_id) = self.owner_id {
            filters.owner_id = Some(owner_id);
        }
        if let Some(min) = self.min_price {
            filters.minimum_price_per_night = Some(Cents(min));
        }
        if let Some(max) = self.max_price {
            filters.maximum_price_per_night = Some(Cents(max));
        }
        if let Some(rating) = self.min_rating {
            filters.minimum_rating = Some(rating);
        }

        Ok(filters)
    }
}

fn read_filters(path: &Path) -> Result<SearchFilters> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read filters from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read filters file: {}", path.display()))?
    };

    serde_json::from_str(&contents).context("Filters must be a JSON object")
}

pub async fn run_search(global: &GlobalOpts, args: SearchArgs) -> Result<()> {
    let filters = args.filters()?;

    if args.explain {
        let plan = build_property_search(&filters, args.limit);
        return match global.format {
            OutputFormat::Json => print_json(&plan),
            OutputFormat::Text => {
                println!("{}", plan.text());
                println!();
                for (i, value) in plan.params().iter().enumerate() {
                    println!("${} = {}", i + 1, value);
                }
                Ok(())
            }
        };
    }

    let store = connect(global).await?;
    let listings = store.get_all_properties(&filters, args.limit).await?;
    store.close().await;

    match global.format {
        OutputFormat::Json => print_json(&listings),
        OutputFormat::Text => {
            print_listings(&listings);
            Ok(())
        }
    }
}

fn print_listings(listings: &[PropertyListing]) {
    if listings.is_empty() {
        println!("No properties found");
        return;
    }

    for listing in listings {
        let p = &listing.property;
        let rating = listing
            .average_rating
            .map(|r| format!("{:.2}", r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<5} {:<40} {:<20} ${:>6}/night  rating {}",
            p.id, p.title, p.city, p.cost_per_night, rating
        );
    }
}
