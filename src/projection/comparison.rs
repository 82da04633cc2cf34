//! Multi-scenario comparison
//!
//! Scenarios are independent, so they are projected in parallel with one
//! engine call per scenario and no shared state.

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use super::cashflows::ProjectionResult;
use super::engine::ProjectionEngine;
use super::summary::{summarize, SummaryResult};
use crate::error::Result;
use crate::scenario::ScenarioInput;

/// One scenario's projection and summary within a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedScenario {
    pub projection: ProjectionResult,
    pub summary: SummaryResult,
    /// Final balance minus the baseline's; `None` for the baseline itself
    /// or when no baseline is selected
    pub final_balance_vs_baseline: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub baseline_id: Option<String>,
    /// In input order
    pub scenarios: Vec<ComparedScenario>,
}

impl ScenarioComparison {
    pub fn baseline(&self) -> Option<&ComparedScenario> {
        let baseline_id = self.baseline_id.as_deref()?;
        self.scenarios
            .iter()
            .find(|s| s.summary.scenario_id == baseline_id)
    }

    pub fn summaries(&self) -> impl Iterator<Item = &SummaryResult> {
        self.scenarios.iter().map(|s| &s.summary)
    }
}

/// Project and summarise every scenario, then diff final balances against the baseline.
///
/// Fails on the first invalid scenario; no partial comparison is returned.
/// An unknown `baseline_id` is logged and treated as no baseline.
pub fn compare_scenarios(
    engine: &ProjectionEngine,
    scenarios: &[ScenarioInput],
    baseline_id: Option<&str>,
) -> Result<ScenarioComparison> {
    debug!("Comparing {} scenarios", scenarios.len());

    let projections: Vec<ProjectionResult> = scenarios
        .par_iter()
        .map(|scenario| engine.project_scenario(scenario))
        .collect::<Result<Vec<_>>>()?;

    let summaries: Vec<SummaryResult> = projections.iter().map(summarize).collect();

    let baseline_final = baseline_id.and_then(|id| {
        let found = summaries.iter().find(|s| s.scenario_id == id);
        if found.is_none() {
            warn!("Baseline scenario '{}' not found among compared scenarios", id);
        }
        found.map(|s| s.final_savings_balance)
    });
    let resolved_baseline = baseline_final.and(baseline_id).map(str::to_string);

    let scenarios = projections
        .into_iter()
        .zip(summaries)
        .map(|(projection, summary)| {
            let is_baseline = resolved_baseline.as_deref() == Some(summary.scenario_id.as_str());
            let final_balance_vs_baseline = match baseline_final {
                Some(base) if !is_baseline => Some(summary.final_savings_balance - base),
                _ => None,
            };
            ComparedScenario {
                projection,
                summary,
                final_balance_vs_baseline,
            }
        })
        .collect();

    Ok(ScenarioComparison {
        baseline_id: resolved_baseline,
        scenarios,
    })
}

/// Balances of several projections aligned by month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub month_index: u32,
    /// One entry per projection, `None` once a shorter projection has ended
    pub balances: Vec<Option<i64>>,
}

/// Month-aligned balance series across projections, as long as the longest one
pub fn balance_timeline(projections: &[ProjectionResult], real: bool) -> Vec<TimelinePoint> {
    let max_months = projections.iter().map(|p| p.rows.len()).max().unwrap_or(0);

    (0..max_months)
        .map(|idx| TimelinePoint {
            month_index: idx as u32 + 1,
            balances: projections
                .iter()
                .map(|p| {
                    p.rows.get(idx).map(|row| {
                        if real {
                            row.real_savings_balance
                        } else {
                            row.savings_balance
                        }
                    })
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use crate::scenario::demo_scenarios;
    use crate::scenario::template::{BASELINE_ID, INFLATION_EXPENSES_ID};

    #[test]
    fn test_compare_demo_scenarios() {
        let engine = ProjectionEngine::default();
        let scenarios = demo_scenarios();
        let comparison = compare_scenarios(&engine, &scenarios, Some(BASELINE_ID)).unwrap();

        assert_eq!(comparison.baseline_id.as_deref(), Some(BASELINE_ID));
        assert_eq!(comparison.scenarios.len(), 2);

        let baseline = comparison.baseline().unwrap();
        assert_eq!(baseline.final_balance_vs_baseline, None);

        let other = &comparison.scenarios[1];
        assert_eq!(other.summary.scenario_id, INFLATION_EXPENSES_ID);
        let diff = other.final_balance_vs_baseline.unwrap();
        assert_eq!(
            diff,
            other.summary.final_savings_balance - baseline.summary.final_savings_balance
        );
        // Inflation-driven expense growth can only cost money
        assert!(diff < 0);

        let ids: Vec<&str> = comparison.summaries().map(|s| s.scenario_id.as_str()).collect();
        assert_eq!(ids, vec![BASELINE_ID, INFLATION_EXPENSES_ID]);

        // Parallel results match sequential projections
        for (compared, scenario) in comparison.scenarios.iter().zip(&scenarios) {
            assert_eq!(compared.projection, engine.project_scenario(scenario).unwrap());
        }
    }

    #[test]
    fn test_unknown_baseline() {
        let engine = ProjectionEngine::default();
        let comparison = compare_scenarios(&engine, &demo_scenarios(), Some("missing")).unwrap();
        assert_eq!(comparison.baseline_id, None);
        assert!(comparison.baseline().is_none());
        assert!(comparison.scenarios.iter().all(|s| s.final_balance_vs_baseline.is_none()));
    }

    #[test]
    fn test_invalid_scenario_fails_comparison() {
        let mut scenarios = demo_scenarios();
        scenarios[1].assumptions.duration_months = 0;
        let result = compare_scenarios(&ProjectionEngine::default(), &scenarios, None);
        assert!(matches!(result, Err(ProjectionError::InvalidDuration(0))));
    }

    #[test]
    fn test_balance_timeline_pads_shorter_projections() {
        let mut scenarios = demo_scenarios();
        scenarios[1].assumptions.duration_months = 12;
        let engine = ProjectionEngine::default();
        let projections: Vec<ProjectionResult> = scenarios
            .iter()
            .map(|s| engine.project_scenario(s).unwrap())
            .collect();

        let timeline = balance_timeline(&projections, false);
        assert_eq!(timeline.len(), 60);
        assert_eq!(timeline[0].month_index, 1);
        assert_eq!(timeline[11].balances[1], Some(projections[1].rows[11].savings_balance));
        assert_eq!(timeline[12].balances[1], None);
        assert_eq!(timeline[59].balances[0], Some(projections[0].rows[59].savings_balance));

        let real = balance_timeline(&projections, true);
        assert_eq!(real[59].balances[0], Some(projections[0].rows[59].real_savings_balance));

        assert!(balance_timeline(&[], false).is_empty());
    }
}
