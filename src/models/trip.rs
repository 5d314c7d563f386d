use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

/// Raw CSV row, matched to columns by header name
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender")]
    #[serde(default)]
    pub gender: Option<String>,
    // Stored as a float in the source files ("1992.0")
    #[serde(rename = "Birth Year")]
    #[serde(default)]
    pub birth_year: Option<f64>,
}

/// One bike trip with its calendar fields derived at load time
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// 1 = January
    pub month: u32,
    /// 0 = Monday
    pub weekday: u32,
    pub hour: u32,
    /// Original column values in file order
    pub columns: Vec<String>,
}

impl TripRecord {
    /// Build a record from a parsed row, keeping its original column values
    pub fn from_raw(raw: RawTrip, columns: Vec<String>) -> Result<Self, String> {
        let start_time = parse_start_time(&raw.start_time)
            .ok_or_else(|| format!("invalid Start Time '{}'", raw.start_time))?;

        if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
            return Err(format!("invalid Trip Duration {}", raw.trip_duration));
        }

        let birth_year = match raw.birth_year {
            Some(year) if year.fract() == 0.0 && (1.0..=9999.0).contains(&year) => Some(year as i32),
            Some(year) => return Err(format!("invalid Birth Year {}", year)),
            None => None,
        };

        Ok(Self {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            duration_secs: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_empty(raw.user_type),
            gender: non_empty(raw.gender),
            birth_year,
            columns,
        })
    }

    /// Start and end station joined as "start + end"
    pub fn trip(&self) -> String {
        format!("{} + {}", self.start_station, self.end_station)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse "YYYY-MM-DD HH:MM:SS", with or without fractional seconds
pub fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(start_time: &str, duration: f64) -> RawTrip {
        RawTrip {
            start_time: start_time.to_string(),
            trip_duration: duration,
            start_station: "Canal St".to_string(),
            end_station: "Clark St".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: Some(String::new()),
            birth_year: Some(1992.0),
        }
    }

    #[test]
    fn test_derives_calendar_fields() {
        // 2017-06-23 was a Friday
        let record = TripRecord::from_raw(raw("2017-06-23 15:09:32", 321.0), vec![]).unwrap();
        assert_eq!(record.month, 6);
        assert_eq!(record.weekday, 4);
        assert_eq!(record.hour, 15);
        assert_eq!(record.birth_year, Some(1992));
        assert_eq!(record.gender, None);
    }

    #[test]
    fn test_parse_start_time_fractional() {
        assert!(parse_start_time("2017-01-01 00:07:57.123").is_some());
        assert!(parse_start_time("01/01/2017 00:07").is_none());
    }

    #[test]
    fn test_rejects_negative_duration() {
        assert!(TripRecord::from_raw(raw("2017-01-01 00:07:57", -1.0), vec![]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_birth_year() {
        let mut row = raw("2017-01-01 00:07:57", 60.0);
        row.birth_year = Some(1e12);
        let err = TripRecord::from_raw(row, vec![]).unwrap_err();
        assert!(err.contains("Birth Year"));

        let mut row = raw("2017-01-01 00:07:57", 60.0);
        row.birth_year = Some(1992.5);
        assert!(TripRecord::from_raw(row, vec![]).is_err());
    }

    #[test]
    fn test_trip_label() {
        let record = TripRecord::from_raw(raw("2017-01-01 00:07:57", 60.0), vec![]).unwrap();
        assert_eq!(record.trip(), "Canal St + Clark St");
    }
}
