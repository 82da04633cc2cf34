//! Scenario input: assumptions, expense items and income events

mod data;
pub mod loader;
pub mod template;

pub use data::{ScenarioInput, ExpenseItem, IncomeEvent};
pub use loader::{load_scenarios, load_scenarios_from_reader};
pub use template::demo_scenarios;
