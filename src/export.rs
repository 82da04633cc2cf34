//! CSV export of projections and summaries

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::calendar::format_date;
use crate::error::Result;
use crate::projection::{ProjectionResult, SummaryResult};

/// Monthly export columns, in file order
pub const PROJECTION_HEADER: [&str; 13] = [
    "Date",
    "Month #",
    "Gross Salary",
    "Pension",
    "Tax",
    "Net Salary",
    "Expenses",
    "Savings Deposit",
    "Interest Rate (Annual)",
    "Interest Rate (Monthly)",
    "Inflation Rate (Annual)",
    "Inflation Rate (Monthly)",
    "Savings Balance",
];

pub const SUMMARY_HEADER: [&str; 2] = ["Metric", "Value"];

/// Write one row per projected month
pub fn write_projection<W: Write>(writer: W, projection: &ProjectionResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(PROJECTION_HEADER)?;

    for row in &projection.rows {
        csv.write_record([
            format_date(row.date),
            row.month_index.to_string(),
            row.gross_salary.to_string(),
            row.pension.to_string(),
            row.tax.to_string(),
            row.net_salary.to_string(),
            row.expenses.to_string(),
            row.savings_deposit.to_string(),
            row.interest_rate_annual.to_string(),
            row.interest_rate_monthly.to_string(),
            row.inflation_rate_annual.to_string(),
            row.inflation_rate_monthly.to_string(),
            row.savings_balance.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the summary as (metric, value) rows
pub fn write_summary<W: Write>(writer: W, summary: &SummaryResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(SUMMARY_HEADER)?;
    for (label, value) in summary.metrics() {
        csv.write_record([label.to_string(), value.to_string()])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn projection_file_name(scenario_name: &str) -> String {
    format!("{}-monthly-projection.csv", scenario_name)
}

pub fn summary_file_name(scenario_name: &str) -> String {
    format!("{}-summary.csv", scenario_name)
}

/// Write both CSV files for a scenario into `dir`, returning their paths
pub fn export_to_dir(
    dir: &Path,
    projection: &ProjectionResult,
    summary: &SummaryResult,
) -> Result<(PathBuf, PathBuf)> {
    let projection_path = dir.join(projection_file_name(&projection.scenario_name));
    write_projection(File::create(&projection_path)?, projection)?;

    let summary_path = dir.join(summary_file_name(&summary.scenario_name));
    write_summary(File::create(&summary_path)?, summary)?;

    info!(
        "Exported {} to {} and {}",
        projection.scenario_id,
        projection_path.display(),
        summary_path.display()
    );
    Ok((projection_path, summary_path))
}
