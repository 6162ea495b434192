use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable planner configuration: the coverage roster and the inclusive
/// date range the week sequence is derived from. Built once at startup and
/// passed into [`crate::Planner::with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub roster: Vec<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            roster: vec![
                "Paul".to_string(),
                "Nnamdi".to_string(),
                "Peyton".to_string(),
            ],
            start: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
        }
    }
}
