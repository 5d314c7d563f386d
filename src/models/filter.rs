use chrono::{Month, Weekday};
use std::fmt;

use super::TripRecord;
use crate::config::City;

/// Which time filters the user wants to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFilter {
    Month,
    Day,
    Both,
    None,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [Self::Month, Self::Day, Self::Both, Self::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Day => "day",
            Self::Both => "both",
            Self::None => "none",
        }
    }

    pub fn wants_month(&self) -> bool {
        matches!(self, Self::Month | Self::Both)
    }

    pub fn wants_day(&self) -> bool {
        matches!(self, Self::Day | Self::Both)
    }
}

/// The city and optional month/day chosen for one session iteration
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl FilterSelection {
    pub fn new(city: City, month: Option<Month>, day: Option<Weekday>) -> Self {
        Self { city, month, day }
    }

    /// Month as 1-based number (January = 1)
    pub fn month_number(&self) -> Option<u32> {
        self.month.map(|m| m.number_from_month())
    }

    /// Day as index from Monday (Monday = 0)
    pub fn day_index(&self) -> Option<u32> {
        self.day.map(|d| d.num_days_from_monday())
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month_number().map_or(true, |m| record.month == m)
            && self.day_index().map_or(true, |d| record.weekday == d)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.map_or("None", |m| m.name());
        let day = self.day.map_or_else(|| "None".to_string(), |d| d.to_string());
        write!(
            f,
            "City:  {}\nMonth: {}\nDay:   {}",
            self.city.name, month, day
        )
    }
}
