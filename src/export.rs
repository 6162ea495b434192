use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::scheduler::{Assignee, PENDING};

/// File name suggested to the host environment for the download.
pub const EXPORT_FILE_NAME: &str = "coverage_schedule.csv";
/// MIME type the download is served under.
pub const EXPORT_MIME: &str = "text/csv";

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "io error: {err}"),
            ExportError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

fn write_schedule<W: io::Write>(
    writer: W,
    weeks: &[NaiveDate],
    schedule: &BTreeMap<NaiveDate, Assignee>,
) -> ExportResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["Week", "Assigned"])?;
    for week in weeks {
        let assigned = schedule.get(week).map(Assignee::label).unwrap_or(PENDING);
        writer.write_record([week.format("%Y-%m-%d").to_string().as_str(), assigned])?;
    }
    writer.flush()?;
    Ok(())
}

/// Serializes the schedule as `Week,Assigned` rows in week order. Weeks the
/// schedule has no entry for export as `Pending`; exporting before any
/// generate action is not an error.
pub fn schedule_csv(
    weeks: &[NaiveDate],
    schedule: &BTreeMap<NaiveDate, Assignee>,
) -> ExportResult<String> {
    let mut buf = Vec::new();
    write_schedule(&mut buf, weeks, schedule)?;
    Ok(String::from_utf8(buf).expect("csv output is utf-8"))
}

/// Writes the CSV payload to `path`, the way a browser would save the
/// download to disk.
pub fn save_csv<P: AsRef<Path>>(
    weeks: &[NaiveDate],
    schedule: &BTreeMap<NaiveDate, Assignee>,
    path: P,
) -> ExportResult<()> {
    let file = File::create(&path)?;
    write_schedule(file, weeks, schedule)?;
    tracing::info!(path = %path.as_ref().display(), "schedule exported");
    Ok(())
}
