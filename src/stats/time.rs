use chrono::Month;

use super::frequency::{most_frequent, Popular};
use super::report::{timed, Report};
use crate::config::DAYS;
use crate::data::Dataset;
use crate::models::FilterSelection;

/// Most popular travel times
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// None when a month filter is active
    pub month: Option<Popular<u32>>,
    /// None when a day filter is active
    pub day: Option<Popular<u32>>,
    pub hour: Popular<u32>,
}

pub fn time_stats(data: &Dataset, selection: &FilterSelection) -> TimeStats {
    let records = &data.records;
    TimeStats {
        month: selection
            .month
            .is_none()
            .then(|| most_frequent(records.iter().map(|r| r.month))),
        day: selection
            .day
            .is_none()
            .then(|| most_frequent(records.iter().map(|r| r.weekday))),
        hour: most_frequent(records.iter().map(|r| r.hour)),
    }
}

pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or_else(|| month.to_string(), |m| m.name().to_string())
}

pub fn day_name(index: u32) -> String {
    DAYS.get(index as usize)
        .map_or_else(|| index.to_string(), |d| d.to_string())
}

pub fn time_report(data: &Dataset, selection: &FilterSelection) -> Report {
    timed("time statistics", |report| {
        let stats = time_stats(data, selection);
        if let Some(month) = &stats.month {
            report.top("Most popular month", month, |m| month_name(*m));
        }
        if let Some(day) = &stats.day {
            report.top("Most popular day", day, |d| day_name(*d));
        }
        report.top("Most popular hour", &stats.hour, |h| h.to_string());
    })
}
