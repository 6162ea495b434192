use chrono::{Duration, NaiveDate};

/// Ordered week-start dates from `start` through `end` (inclusive), stepping
/// 7 days at a time. An inverted range yields an empty sequence.
pub fn week_starts(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut weeks = Vec::new();
    let mut current = start;

    while current <= end {
        weeks.push(current);
        current = current + Duration::days(7);
    }
    weeks
}
