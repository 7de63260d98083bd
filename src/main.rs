mod analysis;
mod app;
mod color;
mod data;
mod error;
mod report;
mod state;
mod stats;
mod ui;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eframe::egui;

use app::PaygradeApp;
use error::AnalysisError;

/// One-shot salary dataset analysis: cleaning, one-sample t-tests, charts.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the salary CSV (columns: Company, Rating, Average, Lowest,
    /// Highest, yr/mo/hr).
    dataset: PathBuf,

    /// Expected salary; when absent it is read interactively.
    #[arg(long)]
    expected_salary: Option<f64>,

    /// Skip the chart window (report only).
    #[arg(long)]
    headless: bool,

    /// Emit the report as JSON instead of the textual summary.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let raw = data::loader::load_csv(&args.dataset)?;
    let population = data::clean::clean(&raw);

    let expected_salary = match args.expected_salary {
        Some(v) if v.is_finite() => v,
        Some(v) => return Err(AnalysisError::InvalidUserInput(v.to_string()).into()),
        None => prompt_expected_salary()?,
    };

    let result = analysis::analyze(population, expected_salary)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.report)?);
    } else {
        report::print_report(&result.report);
    }

    if args.headless {
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Paygrade – Salary Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(PaygradeApp::new(result)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}

/// Read the expected salary from the invoking user. Non-numeric input is a
/// hard error, not a retry loop.
fn prompt_expected_salary() -> Result<f64, AnalysisError> {
    print!("Enter your expected salary (INR): ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|_| AnalysisError::InvalidUserInput(String::new()))?;

    let trimmed = line.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AnalysisError::InvalidUserInput(trimmed.to_string()))
}
