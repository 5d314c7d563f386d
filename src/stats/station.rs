use super::frequency::{most_frequent, Frequency, Popular};
use super::report::{timed, Report};
use crate::data::Dataset;

/// Most popular stations and station pairs
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Popular<String>,
    pub end: Popular<String>,
    /// "start + end"
    pub trip: Popular<String>,
}

fn owned(popular: Popular<&str>) -> Popular<String> {
    popular.map(|f| Frequency {
        value: f.value.to_string(),
        count: f.count,
    })
}

pub fn station_stats(data: &Dataset) -> StationStats {
    let records = &data.records;
    StationStats {
        start: owned(most_frequent(records.iter().map(|r| r.start_station.as_str()))),
        end: owned(most_frequent(records.iter().map(|r| r.end_station.as_str()))),
        trip: most_frequent(records.iter().map(|r| r.trip())),
    }
}

pub fn station_report(data: &Dataset) -> Report {
    timed("station statistics", |report| {
        let stats = station_stats(data);
        report.top("Most common Start Station", &stats.start, String::clone);
        report.top("Most common End Station", &stats.end, String::clone);
        report.top("Most common Trip", &stats.trip, String::clone);
    })
}
