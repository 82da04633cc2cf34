//! Load scenarios from JSON files
//!
//! A file holds either a single scenario object or an array of scenarios.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::ScenarioInput;
use crate::error::Result;

#[derive(Deserialize)]
#[serde(untagged)]
enum ScenarioFile {
    Many(Vec<ScenarioInput>),
    One(Box<ScenarioInput>),
}

/// Load scenarios from any JSON reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioInput>> {
    let parsed: ScenarioFile = serde_json::from_reader(reader)?;
    Ok(match parsed {
        ScenarioFile::Many(scenarios) => scenarios,
        ScenarioFile::One(scenario) => vec![*scenario],
    })
}

/// Load scenarios from a JSON file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioInput>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let scenarios = load_scenarios_from_reader(BufReader::new(file))?;
    debug!("Loaded {} scenario(s) from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    const ASSUMPTIONS: &str = r#"{
        "startDate": "2024-01-01",
        "durationMonths": 24,
        "startingSavingsBalance": 1500000,
        "monthlySalaryBeforeTax": 900000,
        "annualSalaryIncreasePct": 0.04,
        "salaryChangeMonth": 25,
        "newMonthlySalaryBeforeTax": 980000,
        "currentSavingsAPY": 0.0675,
        "targetSavingsAPY": 0.035,
        "interestTransitionMonths": 24,
        "currentInflationAnnual": 0.055,
        "targetInflationAnnual": 0.028,
        "inflationTransitionMonths": 24,
        "pensionPct": 0.08,
        "personalAllowanceMonthly": 60000,
        "bracket1Limit": 350000,
        "bracket2Limit": 900000,
        "bracket1Rate": 0.31,
        "bracket2Rate": 0.37,
        "bracket3Rate": 0.46,
        "inflationImpactsExpenses": true
    }"#;

    fn scenario_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "name": "Scenario {id}",
                "assumptions": {ASSUMPTIONS},
                "expenseItems": [{{ "name": "Rent", "monthlyAmount": 280000, "annualIncreasePct": 0.03 }}],
                "incomeEvents": [{{ "name": "One-time bonus", "month": 6, "amount": 250000 }}]
            }}"#
        )
    }

    #[test]
    fn test_load_single_scenario() {
        let json = scenario_json("a");
        let scenarios = load_scenarios_from_reader(json.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 1);

        let scenario = &scenarios[0];
        assert_eq!(scenario.id, "a");
        assert_eq!(scenario.assumptions.current_savings_apy, 0.0675);
        assert!(scenario.assumptions.inflation_impacts_expenses);
        assert_eq!(scenario.expense_items[0].starts_month, 1);
        assert!(!scenario.income_events[0].recurring);
    }

    #[test]
    fn test_load_scenario_array() {
        let json = format!("[{}, {}]", scenario_json("a"), scenario_json("b"));
        let scenarios = load_scenarios_from_reader(json.as_bytes()).unwrap();
        let ids: Vec<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_json() {
        let result = load_scenarios_from_reader(r#"{ "id": "a" }"#.as_bytes());
        assert!(matches!(result, Err(ProjectionError::SerializationError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_scenarios("does/not/exist.json");
        assert!(matches!(result, Err(ProjectionError::IoError(_))));
    }
}
