pub mod duration;
pub mod frequency;
pub mod report;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{duration_report, duration_stats, DurationStats};
pub use frequency::{most_frequent, modes, Frequency, Popular};
pub use report::Report;
pub use station::{station_report, station_stats, StationStats};
pub use time::{time_report, time_stats, TimeStats};
pub use user::{user_report, user_stats, UserStats};

use crate::data::Dataset;
use crate::models::FilterSelection;

/// Every report, in the order they are shown
pub fn all_reports(data: &Dataset, selection: &FilterSelection) -> Vec<Report> {
    vec![
        time_report(data, selection),
        station_report(data),
        duration_report(data),
        user_report(data),
    ]
}
