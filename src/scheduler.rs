use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::availability::{Availability, Board};

/// Sentinel schedule value for a week no eligible associate covers.
pub const UNASSIGNED: &str = "Unassigned";

/// Placeholder shown and exported for a week the generate action has not
/// produced an entry for yet.
pub const PENDING: &str = "Pending";

/// The computed owner of one coverage week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    Associate(String),
    Unassigned,
}

impl Assignee {
    pub fn label(&self) -> &str {
        match self {
            Assignee::Associate(name) => name,
            Assignee::Unassigned => UNASSIGNED,
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Greedy per-week assignment.
///
/// Each week is decided independently: the candidate list is every roster
/// member reporting "NO ISSUES", in roster order, followed by every member
/// reporting "SUBOPTIMAL", in roster order. The first candidate wins; an
/// empty list yields [`Assignee::Unassigned`]. The tie-break is strictly
/// roster order: no rotation, no load balancing, so the same associate can
/// be picked every week.
pub fn assign(
    weeks: &[NaiveDate],
    roster: &[String],
    board: &Board,
) -> BTreeMap<NaiveDate, Assignee> {
    let mut schedule = BTreeMap::new();

    for &week in weeks {
        let mut candidates: Vec<&String> = roster
            .iter()
            .filter(|associate| board.get(associate, week) == Availability::NoIssues)
            .collect();
        candidates.extend(
            roster
                .iter()
                .filter(|associate| board.get(associate, week) == Availability::Suboptimal),
        );

        let assignee = match candidates.first() {
            Some(name) => Assignee::Associate((*name).clone()),
            None => Assignee::Unassigned,
        };
        schedule.insert(week, assignee);
    }

    schedule
}

/// Weeks assigned per roster member, in roster order.
///
/// Every member appears, zero counts included; unassigned weeks count toward
/// no one.
pub fn assignment_counts(
    roster: &[String],
    schedule: &BTreeMap<NaiveDate, Assignee>,
) -> Vec<(String, usize)> {
    roster
        .iter()
        .map(|associate| {
            let count = schedule
                .values()
                .filter(|assignee| matches!(assignee, Assignee::Associate(name) if name == associate))
                .count();
            (associate.clone(), count)
        })
        .collect()
}
