use super::report::{timed, Report};
use crate::data::Dataset;

/// Total and average trip duration
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_hours: f64,
    /// None for an empty dataset
    pub mean_minutes: Option<f64>,
}

pub fn duration_stats(data: &Dataset) -> DurationStats {
    let total_secs: f64 = data.records.iter().map(|r| r.duration_secs).sum();
    let mean_minutes = if data.is_empty() {
        None
    } else {
        Some(total_secs / data.len() as f64 / 60.0)
    };

    DurationStats {
        total_hours: total_secs / 3600.0,
        mean_minutes,
    }
}

pub fn duration_report(data: &Dataset) -> Report {
    timed("trip duration statistics", |report| {
        let stats = duration_stats(data);
        report.line(format!("Total travel time: {:.0} hours", stats.total_hours));
        match stats.mean_minutes {
            Some(mean) => report.line(format!("Average travel time: {:.0} minutes", mean)),
            None => report.line("Average travel time: n/a"),
        }
    })
}
