use std::fs::File;
use std::path::Path;

use super::Dataset;
use crate::config::{City, Config};
use crate::error::{ExploreError, Result};
use crate::models::{FilterSelection, RawTrip, TripRecord};

const REQUIRED_COLUMNS: [&str; 4] = ["Start Time", "Trip Duration", "Start Station", "End Station"];

fn malformed(path: &Path, line: u64, reason: impl Into<String>) -> ExploreError {
    ExploreError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

fn csv_error(path: &Path, err: csv::Error) -> ExploreError {
    let line = err.position().map_or(0, |p| p.line());
    malformed(path, line, err.to_string())
}

/// Load a city's trips and apply the month/day filter
pub fn load_data(config: &Config, selection: &FilterSelection) -> Result<Dataset> {
    let path = config.city_path(&selection.city);
    tracing::debug!("loading {} from {:?}", selection.city.name, path);

    let dataset = read_trips(&path, &selection.city)?;
    let loaded = dataset.len();
    let dataset = dataset.apply(selection);

    tracing::info!(
        city = %dataset.city.name,
        loaded,
        kept = dataset.len(),
        "trip data loaded"
    );
    Ok(dataset)
}

/// Read every trip in a city's CSV file
pub fn read_trips(path: &Path, city: &City) -> Result<Dataset> {
    if !path.is_file() {
        return Err(ExploreError::MissingData {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(malformed(path, 1, format!("missing column '{}'", column)));
        }
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        let line = row.position().map_or(0, |p| p.line());

        let raw: RawTrip = row
            .deserialize(Some(&headers))
            .map_err(|e| csv_error(path, e))?;
        let columns = row.iter().map(str::to_string).collect();
        let record = TripRecord::from_raw(raw, columns).map_err(|reason| malformed(path, line, reason))?;

        records.push(record);
    }

    let headers = headers.iter().map(str::to_string).collect();
    Ok(Dataset::new(city.clone(), headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};
    use std::fs;
    use tempfile::TempDir;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Customer,,
";

    fn write_city(contents: &str) -> (TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chicago.csv"), contents).unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        (dir, config)
    }

    fn chicago(config: &Config) -> City {
        config.city("Chicago").unwrap().clone()
    }

    #[test]
    fn test_reads_all_rows() {
        let (_dir, config) = write_city(CHICAGO);
        let city = chicago(&config);
        let data = read_trips(&config.city_path(&city), &city).unwrap();

        assert_eq!(data.len(), 4);
        assert!(data.has_demographics);
        assert_eq!(data.headers.len(), 9);
        assert_eq!(data.records[0].columns[0], "1423854");
        assert_eq!(data.records[3].gender, None);
        assert_eq!(data.records[3].birth_year, None);
        assert_eq!(data.records[2].birth_year, Some(1981));
    }

    #[test]
    fn test_load_applies_filter() {
        let (_dir, config) = write_city(CHICAGO);
        let selection = FilterSelection::new(chicago(&config), Some(Month::June), None);
        let data = load_data(&config, &selection).unwrap();
        assert_eq!(data.city.name, "Chicago");
        assert_eq!(data.len(), 1);
        assert_eq!(data.records[0].start_station, "Wood St & Hubbard St");

        // 2017-01-04 was a Wednesday
        let selection = FilterSelection::new(chicago(&config), None, Some(Weekday::Wed));
        let data = load_data(&config, &selection).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.records[0].month, 1);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let (_dir, config) = write_city(CHICAGO);
        let selection = FilterSelection::new(config.city("Washington").unwrap().clone(), None, None);
        let err = load_data(&config, &selection).unwrap_err();
        assert!(matches!(err, ExploreError::MissingData { .. }));
        assert!(err.to_string().contains("washington.csv"));
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let (_dir, config) = write_city("Start Time,Trip Duration,Start Station\n2017-01-01 00:00:00,5,A\n");
        let city = chicago(&config);
        let err = read_trips(&config.city_path(&city), &city).unwrap_err();
        assert!(err.to_string().contains("End Station"));
    }

    #[test]
    fn test_bad_timestamp_reports_line() {
        let contents = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                        2017-01-01 00:00:00,5,A,B,Customer\n\
                        yesterday,5,A,B,Customer\n";
        let (_dir, config) = write_city(contents);
        let city = chicago(&config);
        match read_trips(&config.city_path(&city), &city) {
            Err(ExploreError::Malformed { line, reason, .. }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("yesterday"));
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_birth_year_is_malformed() {
        let contents = "Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n\
                        2017-01-01 00:00:00,5,A,B,Customer,Male,1e12\n";
        let (_dir, config) = write_city(contents);
        let city = chicago(&config);
        match read_trips(&config.city_path(&city), &city) {
            Err(ExploreError::Malformed { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("Birth Year"));
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_washington_has_no_demographics() {
        let contents = ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
                        1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber\n";
        let (_dir, config) = write_city(contents);
        let city = chicago(&config);
        let data = read_trips(&config.city_path(&city), &city).unwrap();
        assert!(!data.has_demographics);
        assert_eq!(data.records[0].duration_secs, 489.066);
    }
}
