use serde::{Deserialize, Serialize};

use crate::availability::Availability;
use crate::planner::PlannerSnapshot;
use crate::scheduler::PENDING;

/// One availability selector in an associate's input card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorRow {
    pub week: String,
    pub selected: String,
    pub options: Vec<String>,
}

/// Per-associate input card: one selector per planning week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociateCard {
    pub associate: String,
    pub selectors: Vec<SelectorRow>,
}

/// Read-only card showing one week's computed assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekCard {
    pub week: String,
    pub assigned: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRow {
    pub associate: String,
    pub weeks_assigned: usize,
}

/// The full visual tree: input cards, the coverage grid, and the summary
/// list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerView {
    pub cards: Vec<AssociateCard>,
    pub coverage: Vec<WeekCard>,
    pub summary: Vec<SummaryRow>,
}

/// Derives the visual tree from a snapshot.
///
/// Pure: holds no state of its own and recomputes the summary from the
/// schedule on every call. Summary rows iterate the roster, not the counts,
/// so associates with zero assignments still appear.
pub fn render(snapshot: &PlannerSnapshot) -> PlannerView {
    let options: Vec<String> = Availability::OPTIONS
        .iter()
        .map(|status| status.as_label().to_string())
        .collect();

    let cards = snapshot
        .availability
        .iter()
        .map(|entry| AssociateCard {
            associate: entry.associate.clone(),
            selectors: entry
                .weeks
                .iter()
                .map(|cell| SelectorRow {
                    week: cell.week.format("%Y-%m-%d").to_string(),
                    selected: cell.status.as_label().to_string(),
                    options: options.clone(),
                })
                .collect(),
        })
        .collect();

    let coverage = snapshot
        .schedule
        .iter()
        .map(|entry| WeekCard {
            week: entry.week.format("%Y-%m-%d").to_string(),
            assigned: entry
                .assignee
                .clone()
                .unwrap_or_else(|| PENDING.to_string()),
        })
        .collect();

    let summary = snapshot
        .roster
        .iter()
        .map(|associate| SummaryRow {
            associate: associate.clone(),
            weeks_assigned: snapshot
                .schedule
                .iter()
                .filter(|entry| entry.assignee.as_deref() == Some(associate.as_str()))
                .count(),
        })
        .collect();

    PlannerView {
        cards,
        coverage,
        summary,
    }
}

/// Lays the view out as a bordered text table, one row per week: each
/// associate's reported availability followed by the computed assignment,
/// with the summary list underneath.
pub fn render_text(view: &PlannerView) -> String {
    let mut headers = vec!["week".to_string()];
    headers.extend(view.cards.iter().map(|card| card.associate.clone()));
    headers.push("assigned".to_string());

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(view.coverage.len());
    for (idx, week_card) in view.coverage.iter().enumerate() {
        let mut row = vec![week_card.week.clone()];
        for card in &view.cards {
            let selected = card
                .selectors
                .get(idx)
                .map(|selector| selector.selected.clone())
                .unwrap_or_default();
            row.push(selected);
        }
        row.push(week_card.assigned.clone());
        rows.push(row);
    }

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &headers, &widths);
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push_str(&sep);
    out.push('\n');

    for row in &view.summary {
        out.push_str(&format!("{}: {} weeks\n", row.associate, row.weeks_assigned));
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (ci, cell) in cells.iter().enumerate() {
        out.push(' ');
        out.push_str(cell);
        let pad = widths[ci].saturating_sub(cell.len());
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Planner;

    #[test]
    fn unscheduled_view_shows_pending_everywhere() {
        let planner = Planner::new();
        let view = render(&planner.snapshot());

        assert_eq!(view.cards.len(), 3);
        assert!(view.coverage.iter().all(|card| card.assigned == PENDING));
        assert!(view.summary.iter().all(|row| row.weeks_assigned == 0));
    }

    #[test]
    fn selectors_offer_the_closed_option_set() {
        let planner = Planner::new();
        let view = render(&planner.snapshot());
        let selector = &view.cards[0].selectors[0];

        assert_eq!(selector.options, ["", "DNS", "SUBOPTIMAL", "NO ISSUES"]);
        assert_eq!(selector.selected, "");
    }

    #[test]
    fn text_rendering_carries_grid_and_summary() {
        let mut planner = Planner::new();
        let week = planner.weeks()[0];
        planner
            .set_availability("Nnamdi", week, Availability::NoIssues)
            .unwrap();
        planner.generate();

        let text = render_text(&render(&planner.snapshot()));
        assert!(text.contains("| week"));
        assert!(text.contains("2025-05-05"));
        assert!(text.contains("Nnamdi: 1 weeks"));
        assert!(text.contains("Paul: 0 weeks"));
    }
}
