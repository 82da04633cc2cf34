//! Household Projection - deterministic monthly savings projections for household scenarios
//!
//! This library provides:
//! - Month-by-month salary, tax, pension, expense and savings projections
//! - Linearly transitioning inflation and savings interest curves
//! - Nominal and inflation-adjusted (real) balances
//! - Scenario summaries, parallel multi-scenario comparison and CSV export

pub mod error;
pub mod calendar;
pub mod assumptions;
pub mod scenario;
pub mod projection;
pub mod export;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use assumptions::{ScenarioAssumptions, TaxSchedule};
pub use scenario::{ScenarioInput, ExpenseItem, IncomeEvent};
pub use projection::{
    ProjectionEngine, ProjectionConfig, ProjectionRow, ProjectionResult, SummaryResult, summarize,
};
