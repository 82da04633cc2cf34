//! Project one or more scenarios, compare them and export CSV files
//!
//! Scenarios come from JSON files (a single object or an array per file),
//! or from the built-in demo pair with `--demo`.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use household_projection::{
    calendar::format_date,
    export::export_to_dir,
    projection::{compare_scenarios, DEFAULT_MAX_DURATION_MONTHS},
    scenario::{demo_scenarios, load_scenarios},
    ProjectionConfig, ProjectionEngine, ScenarioInput,
};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "run_scenarios", about = "Monthly savings projections for household scenarios")]
struct Args {
    /// Scenario JSON files
    files: Vec<PathBuf>,

    /// Include the built-in demo scenarios
    #[arg(long)]
    demo: bool,

    /// Scenario id to compare final balances against
    #[arg(long)]
    baseline: Option<String>,

    /// Directory for the monthly and summary CSV files; nothing is written when omitted
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Reject scenarios longer than this many months
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION_MONTHS)]
    max_months: u32,

    /// Print inflation-adjusted balances in the monthly table
    #[arg(long)]
    real: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let mut scenarios: Vec<ScenarioInput> = Vec::new();
    for path in &args.files {
        let loaded = load_scenarios(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()))?;
        scenarios.extend(loaded);
    }
    if args.demo || args.files.is_empty() {
        scenarios.extend(demo_scenarios());
    }
    if scenarios.is_empty() {
        bail!("No scenarios to project");
    }
    info!("Loaded {} scenarios", scenarios.len());

    let engine = ProjectionEngine::new(ProjectionConfig {
        max_duration_months: args.max_months,
    });
    let baseline = args
        .baseline
        .clone()
        .or_else(|| scenarios.first().map(|s| s.id.clone()));

    let comparison = compare_scenarios(&engine, &scenarios, baseline.as_deref())
        .context("Projection failed")?;
    println!("Projected {} scenarios in {:?}", comparison.scenarios.len(), start.elapsed());

    for compared in &comparison.scenarios {
        let projection = &compared.projection;
        let summary = &compared.summary;

        println!("\n=== {} ({}) ===", summary.scenario_name, summary.scenario_id);
        println!("{:<12} {:>6} {:>12} {:>12} {:>12} {:>12} {:>14}",
                 "Date", "Month", "Gross", "Net", "Expenses", "Deposit", "Balance");
        for row in projection.rows.iter().filter(|r| r.month_index == 1 || r.month_index % 12 == 0) {
            let balance = if args.real { row.real_savings_balance } else { row.savings_balance };
            println!("{:<12} {:>6} {:>12} {:>12} {:>12} {:>12} {:>14}",
                     format_date(row.date),
                     row.month_index,
                     row.gross_salary,
                     row.net_salary,
                     row.expenses,
                     row.savings_deposit,
                     balance);
        }

        println!("\nSummary:");
        for (label, value) in summary.metrics() {
            println!("  {:<24} {:>14}", label, value);
        }
        if let Some(diff) = compared.final_balance_vs_baseline {
            println!("  {:<24} {:>14}", "Difference vs baseline", diff);
        }

        if let Some(dir) = &args.output_dir {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let (projection_path, summary_path) = export_to_dir(dir, projection, summary)?;
            println!("Output written to {} and {}", projection_path.display(), summary_path.display());
        }
    }

    if comparison.scenarios.len() > 1 {
        println!("\n=== Comparison ===");
        println!("{:<24} {:>14} {:>14} {:>14}", "Scenario", "Final balance", "Total interest", "Total expenses");
        for summary in comparison.summaries() {
            println!("{:<24} {:>14} {:>14} {:>14}",
                     summary.scenario_name,
                     summary.final_savings_balance,
                     summary.total_interest_earned,
                     summary.total_expenses);
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
