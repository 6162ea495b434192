use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::{Availability, Board};
use crate::calendar;
use crate::config::PlannerConfig;
use crate::scheduler::{self, Assignee};

#[derive(Debug)]
pub enum PlannerError {
    DuplicateAssociate(String),
    UnknownAssociate(String),
    UnknownWeek(NaiveDate),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::DuplicateAssociate(name) => {
                write!(f, "associate '{name}' appears more than once in the roster")
            }
            PlannerError::UnknownAssociate(name) => {
                write!(f, "associate '{name}' is not on the roster")
            }
            PlannerError::UnknownWeek(week) => {
                write!(f, "week {week} is not in the planning range")
            }
        }
    }
}

impl std::error::Error for PlannerError {}

/// Outcome of a generate action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerateSummary {
    pub weeks_total: usize,
    pub weeks_covered: usize,
    pub weeks_unassigned: usize,
}

impl GenerateSummary {
    pub fn to_cli_summary(&self) -> String {
        format!(
            "{} weeks, {} covered, {} unassigned",
            self.weeks_total, self.weeks_covered, self.weeks_unassigned
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStatus {
    pub week: NaiveDate,
    pub status: Availability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociateAvailability {
    pub associate: String,
    pub weeks: Vec<WeekStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekAssignment {
    pub week: NaiveDate,
    /// Roster name or the `Unassigned` sentinel; `None` until the first
    /// generate action covers this week.
    pub assignee: Option<String>,
}

/// Read-only copy of the full planner state. Renderers re-read a fresh
/// snapshot after every mutation instead of holding state of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub roster: Vec<String>,
    pub weeks: Vec<NaiveDate>,
    pub availability: Vec<AssociateAvailability>,
    pub schedule: Vec<WeekAssignment>,
    pub revision: u64,
}

/// The state container for one planning session: the immutable configuration
/// and week sequence, the mutable availability board, and the derived
/// schedule. All mutation is synchronous; the revision counter tells
/// consumers when to re-read.
#[derive(Debug)]
pub struct Planner {
    config: PlannerConfig,
    weeks: Vec<NaiveDate>,
    board: Board,
    schedule: BTreeMap<NaiveDate, Assignee>,
    revision: u64,
}

impl Planner {
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default()).expect("default planner configuration is valid")
    }

    pub fn with_config(config: PlannerConfig) -> Result<Self, PlannerError> {
        let mut seen = HashSet::with_capacity(config.roster.len());
        for associate in &config.roster {
            if !seen.insert(associate.as_str()) {
                return Err(PlannerError::DuplicateAssociate(associate.clone()));
            }
        }

        let weeks = calendar::week_starts(config.start, config.end);
        Ok(Self {
            config,
            weeks,
            board: Board::new(),
            schedule: BTreeMap::new(),
            revision: 0,
        })
    }

    pub fn roster(&self) -> &[String] {
        &self.config.roster
    }

    pub fn weeks(&self) -> &[NaiveDate] {
        &self.weeks
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn schedule(&self) -> &BTreeMap<NaiveDate, Assignee> {
        &self.schedule
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records one (associate, week) availability cell, preserving every
    /// other cell, and bumps the revision so renderers re-read.
    ///
    /// Writes outside the configured roster or week sequence are rejected;
    /// the closed-domain controls of a UI never produce them, so the error
    /// only guards direct library callers.
    pub fn set_availability(
        &mut self,
        associate: &str,
        week: NaiveDate,
        status: Availability,
    ) -> Result<(), PlannerError> {
        if !self.config.roster.iter().any(|name| name == associate) {
            return Err(PlannerError::UnknownAssociate(associate.to_string()));
        }
        if !self.weeks.contains(&week) {
            return Err(PlannerError::UnknownWeek(week));
        }

        self.board.set(associate, week, status);
        self.revision += 1;
        tracing::debug!(associate, week = %week, status = status.as_label(), "availability updated");
        Ok(())
    }

    /// Recomputes the whole schedule from the current board, replacing any
    /// previous schedule. Idempotent while the board is unchanged.
    pub fn generate(&mut self) -> GenerateSummary {
        self.schedule = scheduler::assign(&self.weeks, &self.config.roster, &self.board);
        self.revision += 1;

        let weeks_unassigned = self
            .schedule
            .values()
            .filter(|assignee| matches!(assignee, Assignee::Unassigned))
            .count();
        let summary = GenerateSummary {
            weeks_total: self.weeks.len(),
            weeks_covered: self.weeks.len() - weeks_unassigned,
            weeks_unassigned,
        };
        tracing::info!(
            weeks_total = summary.weeks_total,
            weeks_covered = summary.weeks_covered,
            "schedule generated"
        );
        summary
    }

    /// Weeks assigned per roster member, in roster order, zeros included.
    pub fn assignment_counts(&self) -> Vec<(String, usize)> {
        scheduler::assignment_counts(&self.config.roster, &self.schedule)
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        let availability = self
            .config
            .roster
            .iter()
            .map(|associate| AssociateAvailability {
                associate: associate.clone(),
                weeks: self
                    .weeks
                    .iter()
                    .map(|&week| WeekStatus {
                        week,
                        status: self.board.get(associate, week),
                    })
                    .collect(),
            })
            .collect();

        let schedule = self
            .weeks
            .iter()
            .map(|&week| WeekAssignment {
                week,
                assignee: self.schedule.get(&week).map(|a| a.label().to_string()),
            })
            .collect();

        PlannerSnapshot {
            roster: self.config.roster.clone(),
            weeks: self.weeks.clone(),
            availability,
            schedule,
            revision: self.revision,
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_planner_starts_unscheduled() {
        let planner = Planner::new();
        assert!(planner.schedule().is_empty());
        assert_eq!(planner.revision(), 0);
    }

    #[test]
    fn with_config_rejects_duplicate_names() {
        let config = PlannerConfig {
            roster: vec!["Paul".into(), "Paul".into()],
            ..PlannerConfig::default()
        };
        assert!(matches!(
            Planner::with_config(config),
            Err(PlannerError::DuplicateAssociate(_))
        ));
    }
}
