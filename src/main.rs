//! Reserving System CLI
//!
//! Opens a dashboard session, applies optional edits and prints the main
//! screen: event bar, program grid, layer detail and the LAWF series.

use anyhow::{Context, Result};
use clap::Parser;
use reserving_system::layer::{read_layer_csv, write_layer_csv, LAYER_SLOTS, TOTAL_COLUMN};
use reserving_system::store::DEFAULT_DATA_PATH;
use reserving_system::{
    DashboardView, EventContextEdit, InMemoryStore, LayerMatrix, LawfSeries, Session, SessionConfig,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "reserving", version, about = "Actuarial reserving dashboard (main screen)")]
struct Args {
    /// Directory holding events.csv and programs.csv
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    data_dir: PathBuf,

    /// Use the built-in sample data instead of --data-dir
    #[arg(long)]
    sample: bool,

    /// Event to open (defaults to the first event)
    #[arg(long)]
    event: Option<u32>,

    /// Program to select (defaults to the first program)
    #[arg(long)]
    program: Option<u32>,

    /// Override the event's accident year
    #[arg(long)]
    accident_year: Option<i32>,

    /// Override the event's period
    #[arg(long)]
    period: Option<i32>,

    /// Override the event's unit
    #[arg(long)]
    unit: Option<f64>,

    /// Override the event's legal entity
    #[arg(long)]
    le: Option<String>,

    /// Edited layer matrix (CSV) to apply to the selected program
    #[arg(long)]
    layer_edits: Option<PathBuf>,

    /// Write the selected layer matrix to this CSV file
    #[arg(long)]
    layer_csv: Option<PathBuf>,

    /// Write the LAWF series to this CSV file
    #[arg(long)]
    lawf_csv: Option<PathBuf>,

    /// Print the dashboard view as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Take an in-session snapshot after applying edits
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = if args.sample {
        InMemoryStore::sample()
    } else {
        InMemoryStore::from_csv_dir(&args.data_dir)
            .with_context(|| format!("Unable to load data from {}", args.data_dir.display()))?
    };

    let config = SessionConfig {
        event_id: args.event,
        ..Default::default()
    };
    let mut session = Session::open(store, config)?;

    session.update_event(&EventContextEdit {
        accident_year: args.accident_year,
        period: args.period,
        unit: args.unit,
        event_name: None,
        le_code: args.le.clone(),
    });

    if let Some(program_id) = args.program {
        session.select_program(program_id)?;
    }

    if let Some(path) = &args.layer_edits {
        let file = File::open(path).with_context(|| format!("Unable to open {}", path.display()))?;
        let edited = read_layer_csv(file)?;
        session.replace_layer_matrix(edited)?;
    }

    if args.save {
        let snapshot = session.save();
        println!(
            "Saved (in-session) at {}. Next step: persist to database / files.",
            snapshot.saved_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    let view = session.view();

    if let (Some(path), Some(matrix)) = (&args.layer_csv, &view.layer_matrix) {
        let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
        write_layer_csv(matrix, file)?;
        println!("Layer matrix written to: {}", path.display());
    }

    if let (Some(path), Some(lawf)) = (&args.lawf_csv, &view.lawf) {
        write_lawf_csv(path, lawf)?;
        println!("LAWF series written to: {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_dashboard(&view);
    }

    Ok(())
}

fn write_lawf_csv(path: &Path, lawf: &LawfSeries) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;
    for point in lawf.points() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

fn fmt_amount(value: Option<f64>) -> String {
    value.map(|v| format!("{:.0}", v)).unwrap_or_default()
}

fn print_dashboard(view: &DashboardView) {
    println!("Reserving System v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    // Top controls bar
    println!("Event: {}   Accident Year: {}   Period: {}   Unit: {}   LE: {}",
        view.event.event_name,
        view.event.accident_year,
        view.event.period,
        view.event.unit,
        view.event.le_code,
    );
    println!();

    // Program grid
    println!("Programs ({}):", view.programs.len());
    println!("{:>4} {:<30} {:>8} {:>4} {:>4} {:>12} {:>12} {:>12} {:>12} {:>10} {:>10}",
        "id", "Cedant", "Program#", "Type", "Cur", "Rep_FGU", "Rep_UNL", "Selected UNL", "Layer Loss", "Arch Loss", "Chg NetRP");
    println!("{}", "-".repeat(130));
    for p in &view.programs {
        let marker = if Some(p.id) == view.selected_program_id { "*" } else { " " };
        println!("{:>3}{} {:<30} {:>8} {:>4} {:>4} {:>12} {:>12} {:>12} {:>12} {:>10} {:>10}",
            p.id,
            marker,
            p.cedant,
            p.program_number,
            p.program_type,
            p.currency,
            fmt_amount(p.rep_fgu),
            fmt_amount(p.rep_unl),
            fmt_amount(p.selected_unl),
            fmt_amount(p.layer_loss),
            fmt_amount(p.arch_loss),
            fmt_amount(p.change_net_of_rp),
        );
    }
    let s = &view.program_summary;
    println!("{}", "-".repeat(130));
    println!("{:>4} {:<30} {:>8} {:>4} {:>4} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>10.0} {:>10.0}",
        "", "Total", "", "", "", s.rep_fgu, s.rep_unl, s.selected_unl, s.layer_loss, s.arch_loss, s.change_net_of_rp);
    println!();

    // Layer detail
    match (&view.layer_matrix, view.selected_program_id) {
        (Some(matrix), Some(id)) => {
            println!("Layer Detail (program {}):", id);
            print_layer_matrix(matrix);
        }
        _ => println!("Select a program to view layer detail."),
    }
    println!();

    // LAWF chart data
    match &view.lawf {
        Some(lawf) => {
            println!("LAWF (illustrative placeholder, not actuarial):");
            println!("{:>10} {:>18}", "Dev Period", "Gross Loss ($000)");
            for point in lawf.points() {
                println!("{:>10} {:>18.2}", point.dev_period, point.gross_loss);
            }
        }
        None => println!("Select a program to view chart."),
    }

    if let Some(saved_at) = view.last_saved_at {
        println!("\nLast saved: {}", saved_at.to_rfc3339());
    }
}

fn print_layer_matrix(matrix: &LayerMatrix) {
    print!("{:<22}", "Metric");
    for slot in LAYER_SLOTS {
        print!(" {:>11}", slot.as_str());
    }
    println!(" {:>12}", TOTAL_COLUMN);
    println!("{}", "-".repeat(22 + 12 * LAYER_SLOTS.len() + 13));

    for row in matrix.rows() {
        print!("{:<22}", row.metric.as_str());
        for cell in &row.cells {
            let text = cell.to_string();
            // Keep columns aligned for long descriptions
            let text: String = text.chars().take(11).collect();
            print!(" {:>11}", text);
        }
        println!(" {:>12}", row.total.map(|t| format!("{:.2}", t)).unwrap_or_default());
    }
}
