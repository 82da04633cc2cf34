//! Projection engine for single and multi-scenario projections

mod state;
mod engine;
mod cashflows;
pub mod summary;
pub mod comparison;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use cashflows::{ProjectionRow, ProjectionResult};
pub use summary::{summarize, SummaryResult};
pub use comparison::{compare_scenarios, balance_timeline, ScenarioComparison, ComparedScenario, TimelinePoint};

/// Default upper bound on projection length (100 years)
pub const DEFAULT_MAX_DURATION_MONTHS: u32 = 1200;
