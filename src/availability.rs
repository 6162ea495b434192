use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported availability of one associate for one coverage week.
///
/// The wire labels are the exact strings the selection control offers;
/// `Unset` maps to the empty string (the control's "--" placeholder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "SUBOPTIMAL")]
    Suboptimal,
    #[serde(rename = "NO ISSUES")]
    NoIssues,
}

impl Availability {
    /// The closed option set, in the order the selection control lists it.
    pub const OPTIONS: [Availability; 4] = [
        Availability::Unset,
        Availability::Dns,
        Availability::Suboptimal,
        Availability::NoIssues,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            Availability::Unset => "",
            Availability::Dns => "DNS",
            Availability::Suboptimal => "SUBOPTIMAL",
            Availability::NoIssues => "NO ISSUES",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "" => Some(Availability::Unset),
            "DNS" => Some(Availability::Dns),
            "SUBOPTIMAL" => Some(Availability::Suboptimal),
            "NO ISSUES" => Some(Availability::NoIssues),
            _ => None,
        }
    }
}

/// Per-associate, per-week availability records.
///
/// Cells that were never written read back as [`Availability::Unset`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    entries: HashMap<String, HashMap<NaiveDate, Availability>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites one (associate, week) cell, leaving every other cell as is.
    pub fn set(&mut self, associate: &str, week: NaiveDate, status: Availability) {
        self.entries
            .entry(associate.to_string())
            .or_default()
            .insert(week, status);
    }

    pub fn get(&self, associate: &str, week: NaiveDate) -> Availability {
        self.entries
            .get(associate)
            .and_then(|weeks| weeks.get(&week))
            .copied()
            .unwrap_or(Availability::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_the_option_set() {
        for status in Availability::OPTIONS {
            assert_eq!(Availability::from_label(status.as_label()), Some(status));
        }
        assert_eq!(Availability::from_label("no issues"), None);
    }

    #[test]
    fn unwritten_cells_read_as_unset() {
        let week = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let mut board = Board::new();
        assert_eq!(board.get("Paul", week), Availability::Unset);

        board.set("Paul", week, Availability::Dns);
        assert_eq!(board.get("Paul", week), Availability::Dns);
        assert_eq!(board.get("Nnamdi", week), Availability::Unset);
    }
}
