use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use maintlog_core::{DueEstimator, ServiceIntervalTable, VehicleState};
use maintlog_data::ServiceHistoryLoader;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print the maintenance due summary for a vehicle.
///
/// Loads a service-history CSV export, projects the next due odometer
/// reading and date for every known service type, and prints one line per
/// type together with the total recorded spend.
#[derive(Parser, Debug)]
#[command(name = "maintlog-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the service-history CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Current odometer reading
    #[arg(short, long)]
    odometer: u32,

    /// Odometer reading when the vehicle was acquired
    #[arg(long, default_value_t = 0)]
    initial: u32,

    /// Evaluation date, ISO format (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,
}

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let rows = ServiceHistoryLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;
    debug!(rows = rows.len(), "parsed history rows");

    let history = ServiceHistoryLoader::into_records(rows)
        .context("Failed to convert history rows into service records")?;

    let vehicle = VehicleState::with_current(args.initial, args.odometer);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let table = ServiceIntervalTable::default();
    let estimator = DueEstimator::new(&table);
    let summary = estimator
        .build_summary(&vehicle, &history, today)
        .context("Failed to build due summary")?;

    println!(
        "Maintenance due summary as of {} (odometer {})",
        today, vehicle.current_odometer
    );
    println!();

    for prediction in &summary {
        let last = match (
            prediction.last_service_date,
            prediction.last_service_odometer,
        ) {
            (Some(date), Some(odometer)) => format!("{date} @ {odometer}"),
            _ => "never".to_string(),
        };
        let due_date = prediction
            .estimated_due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<14} last {:<18} next due {:>7}  est {:<10}  [{}]",
            prediction.service_type.label(),
            last,
            prediction.next_due_odometer,
            due_date,
            prediction.status.label(),
        );
    }

    if !history.is_empty() {
        let total_spend: Decimal = history.iter().filter_map(|r| r.cost).sum();
        println!();
        println!(
            "{} recorded services, total spend {}",
            history.len(),
            total_spend
        );
    }

    Ok(())
}
