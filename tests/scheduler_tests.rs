use chrono::NaiveDate;
use coverage_planner::availability::{Availability, Board};
use coverage_planner::scheduler::{Assignee, assign, assignment_counts};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn roster() -> Vec<String> {
    vec!["Paul".into(), "Nnamdi".into(), "Peyton".into()]
}

#[test]
fn no_issues_beats_suboptimal() {
    let week = d(2025, 5, 5);
    let mut board = Board::new();
    board.set("Paul", week, Availability::NoIssues);
    board.set("Nnamdi", week, Availability::Suboptimal);

    let schedule = assign(&[week], &roster(), &board);
    assert_eq!(schedule[&week], Assignee::Associate("Paul".into()));
}

#[test]
fn suboptimal_covers_when_no_one_is_clear() {
    let week = d(2025, 5, 5);
    let mut board = Board::new();
    board.set("Paul", week, Availability::Dns);
    board.set("Nnamdi", week, Availability::Suboptimal);

    let schedule = assign(&[week], &roster(), &board);
    assert_eq!(schedule[&week], Assignee::Associate("Nnamdi".into()));
}

#[test]
fn week_without_candidates_is_unassigned() {
    let week = d(2025, 5, 5);
    let mut board = Board::new();
    board.set("Paul", week, Availability::Dns);
    board.set("Nnamdi", week, Availability::Dns);

    let schedule = assign(&[week], &roster(), &board);
    assert_eq!(schedule[&week], Assignee::Unassigned);

    // A week nobody reported on behaves the same way.
    let untouched = d(2025, 5, 12);
    let schedule = assign(&[untouched], &roster(), &Board::new());
    assert_eq!(schedule[&untouched], Assignee::Unassigned);
}

#[test]
fn roster_order_breaks_ties_regardless_of_update_order() {
    let week = d(2025, 5, 5);
    let mut board = Board::new();
    board.set("Nnamdi", week, Availability::NoIssues);
    board.set("Paul", week, Availability::NoIssues);

    let schedule = assign(&[week], &roster(), &board);
    assert_eq!(schedule[&week], Assignee::Associate("Paul".into()));

    // Same rule within the SUBOPTIMAL tier.
    let mut board = Board::new();
    board.set("Peyton", week, Availability::Suboptimal);
    board.set("Nnamdi", week, Availability::Suboptimal);

    let schedule = assign(&[week], &roster(), &board);
    assert_eq!(schedule[&week], Assignee::Associate("Nnamdi".into()));
}

#[test]
fn weeks_are_decided_independently() {
    let weeks = [d(2025, 5, 5), d(2025, 5, 12), d(2025, 5, 19)];
    let mut board = Board::new();
    for &week in &weeks {
        board.set("Paul", week, Availability::NoIssues);
        board.set("Nnamdi", week, Availability::NoIssues);
    }

    // No rotation: the first roster member wins every week.
    let schedule = assign(&weeks, &roster(), &board);
    for week in &weeks {
        assert_eq!(schedule[week], Assignee::Associate("Paul".into()));
    }
}

#[test]
fn unchanged_board_reproduces_the_same_schedule() {
    let weeks = [d(2025, 5, 5), d(2025, 5, 12)];
    let mut board = Board::new();
    board.set("Peyton", weeks[0], Availability::Suboptimal);
    board.set("Nnamdi", weeks[1], Availability::NoIssues);

    let first = assign(&weeks, &roster(), &board);
    let second = assign(&weeks, &roster(), &board);
    assert_eq!(first, second);
}

#[test]
fn counts_cover_every_roster_member() {
    let weeks = [d(2025, 5, 5), d(2025, 5, 12), d(2025, 5, 19)];
    let mut board = Board::new();
    board.set("Paul", weeks[0], Availability::NoIssues);
    board.set("Paul", weeks[1], Availability::Suboptimal);

    let schedule = assign(&weeks, &roster(), &board);
    let counts = assignment_counts(&roster(), &schedule);

    assert_eq!(
        counts,
        vec![
            ("Paul".to_string(), 2),
            ("Nnamdi".to_string(), 0),
            ("Peyton".to_string(), 0),
        ]
    );

    let assigned_weeks = schedule
        .values()
        .filter(|assignee| **assignee != Assignee::Unassigned)
        .count();
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, assigned_weeks);
}
