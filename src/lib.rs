pub mod availability;
pub mod calendar;
pub mod config;
pub mod export;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod planner;
pub mod scheduler;
pub mod view;

pub use availability::{Availability, Board};
pub use config::PlannerConfig;
pub use export::{EXPORT_FILE_NAME, EXPORT_MIME, ExportError, ExportResult, save_csv, schedule_csv};
pub use planner::{GenerateSummary, Planner, PlannerError, PlannerSnapshot};
pub use scheduler::{Assignee, assign, assignment_counts};
pub use view::{PlannerView, render, render_text};
