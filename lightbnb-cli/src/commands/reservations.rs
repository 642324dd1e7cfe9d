//! Reservation listing command

use anyhow::Result;
use clap::Parser;

use super::{connect, print_json, GlobalOpts, OutputFormat};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    pub guest_id: i32,

    /// Maximum number of reservations (default 10)
    #[arg(long, short = 'n')]
    pub limit: Option<i64>,
}

pub async fn run_reservations(global: &GlobalOpts, args: ReservationsArgs) -> Result<()> {
    let store = connect(global).await?;
    let reservations = store
        .get_all_reservations(args.guest_id, args.limit)
        .await?;
    store.close().await;

    if global.format == OutputFormat::Json {
        return print_json(&reservations);
    }

    if reservations.is_empty() {
        println!("No reservations for guest {}", args.guest_id);
        return Ok(());
    }

    for r in &reservations {
        let rating = r
            .average_rating
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<5} {} -> {}  {:<40} ${:>6}/night  rating {}",
            r.id, r.start_date, r.end_date, r.title, r.cost_per_night, rating
        );
    }
    Ok(())
}
