//! Write the LAWF series for every program of every event
//!
//! Usage: cargo run --bin lawf_report -- [--data-dir data] [--output lawf_report.csv]
//!
//! The curve is the illustrative placeholder; this report exists to feed the
//! chart panel in bulk, not to support reserving decisions.

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use reserving_system::store::DEFAULT_DATA_PATH;
use reserving_system::{InMemoryStore, LawfParams, LawfSeries, ReservingError, ReservingStore};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "lawf_report", about = "Placeholder LAWF series for all programs")]
struct Args {
    /// Directory holding events.csv and programs.csv
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_dir: PathBuf,

    /// Use the built-in sample data instead of --data-dir
    #[arg(long)]
    sample: bool,

    /// Output CSV path
    #[arg(long, default_value = "lawf_report.csv")]
    output: PathBuf,

    /// Number of development periods
    #[arg(long, default_value_t = reserving_system::lawf::DEFAULT_LAWF_PERIODS)]
    periods: u32,
}

/// One output line: a program's loss at one development period
#[derive(Debug, Serialize)]
struct ReportRow {
    #[serde(rename = "EventID")]
    event_id: u32,
    #[serde(rename = "Event")]
    event_name: String,
    #[serde(rename = "ProgramID")]
    program_id: u32,
    #[serde(rename = "Cedant")]
    cedant: String,
    #[serde(rename = "Dev Period")]
    dev_period: u32,
    #[serde(rename = "Gross Loss ($000)")]
    gross_loss: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let store = if args.sample {
        InMemoryStore::sample()
    } else {
        InMemoryStore::from_csv_dir(&args.data_dir)
            .with_context(|| format!("Unable to load data from {}", args.data_dir.display()))?
    };

    let events = store.events()?;
    if events.is_empty() {
        return Err(ReservingError::NoEvents { hint: store.describe() }.into());
    }

    let params = LawfParams {
        periods: args.periods,
        ..Default::default()
    };

    let mut rows: Vec<ReportRow> = Vec::new();
    for event in &events {
        let programs = store.programs(event.id)?;

        // Series are independent per program
        let mut event_rows: Vec<ReportRow> = programs
            .as_slice()
            .par_iter()
            .flat_map_iter(|program| {
                let series = LawfSeries::for_program(program, &params);
                series
                    .points()
                    .iter()
                    .map(|point| ReportRow {
                        event_id: event.id,
                        event_name: event.event_name.clone(),
                        program_id: program.id,
                        cedant: program.cedant.clone(),
                        dev_period: point.dev_period,
                        gross_loss: point.gross_loss,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        println!("  {}: {} programs", event.label(), programs.len());
        rows.append(&mut event_rows);
    }

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {} ({} rows)", args.output.display(), rows.len());
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
