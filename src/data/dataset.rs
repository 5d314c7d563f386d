use crate::config::City;
use crate::models::{FilterSelection, TripRecord};

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Trips of one city after filtering, indexed from zero
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub headers: Vec<String>,
    pub records: Vec<TripRecord>,
    /// Gender and Birth Year columns are present
    pub has_demographics: bool,
}

impl Dataset {
    pub fn new(city: City, headers: Vec<String>, records: Vec<TripRecord>) -> Self {
        let has_demographics = headers.iter().any(|h| h == GENDER_COLUMN)
            && headers.iter().any(|h| h == BIRTH_YEAR_COLUMN);
        Self {
            city,
            headers,
            records,
            has_demographics,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only trips in the given month (1 = January) and/or weekday (0 = Monday)
    pub fn filter(mut self, month: Option<u32>, day: Option<u32>) -> Self {
        if let Some(month) = month {
            self.records.retain(|r| r.month == month);
        }
        if let Some(day) = day {
            self.records.retain(|r| r.weekday == day);
        }
        self
    }

    pub fn apply(self, selection: &FilterSelection) -> Self {
        self.filter(selection.month_number(), selection.day_index())
    }

    /// Records in `start..start + size`, clipped to the end; empty past the end
    pub fn page(&self, start: usize, size: usize) -> &[TripRecord] {
        if start >= self.records.len() {
            return &[];
        }
        let end = start.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }

    /// Header labels for display; blank headers become "Unnamed: <position>"
    pub fn column_labels(&self) -> Vec<String> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.trim().is_empty() {
                    format!("Unnamed: {}", i)
                } else {
                    h.clone()
                }
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{dataset, trip};
    use super::*;
    use rstest::rstest;

    // Jan 2 2017 Mon, Jan 3 Tue, Feb 6 Mon, Feb 7 Tue, Mar 6 Mon
    fn sample() -> Dataset {
        dataset(vec![
            trip("2017-01-02 08:00:00", "A", "B", 60.0),
            trip("2017-01-03 09:00:00", "A", "C", 60.0),
            trip("2017-02-06 10:00:00", "B", "C", 60.0),
            trip("2017-02-07 11:00:00", "C", "A", 60.0),
            trip("2017-03-06 12:00:00", "A", "B", 60.0),
            trip("2017-01-09 13:00:00", "B", "A", 60.0),
        ])
    }

    #[rstest]
    #[case(Some(1), None, 3)]
    #[case(None, Some(0), 4)]
    #[case(Some(2), Some(1), 1)]
    #[case(Some(6), None, 0)]
    #[case(None, None, 6)]
    fn test_filter_keeps_only_matching(
        #[case] month: Option<u32>,
        #[case] day: Option<u32>,
        #[case] expected: usize,
    ) {
        let filtered = sample().filter(month, day);
        assert_eq!(filtered.len(), expected);
        assert!(filtered
            .records
            .iter()
            .all(|r| month.map_or(true, |m| r.month == m) && day.map_or(true, |d| r.weekday == d)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = sample().filter(Some(1), Some(0));
        let twice = once.clone().filter(Some(1), Some(0));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_filter_order_commutes() {
        let both = sample().filter(Some(1), Some(0));
        let month_then_day = sample().filter(Some(1), None).filter(None, Some(0));
        let day_then_month = sample().filter(None, Some(0)).filter(Some(1), None);
        assert_eq!(both.len(), 2);
        assert_eq!(month_then_day.len(), both.len());
        assert_eq!(day_then_month.len(), both.len());
    }

    #[test]
    fn test_page_clips_and_ends() {
        let data = sample();
        assert_eq!(data.page(0, 5).len(), 5);
        assert_eq!(data.page(5, 5).len(), 1);
        assert!(data.page(10, 5).is_empty());
        assert!(data.page(usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_column_labels_name_blank_headers() {
        let mut data = sample();
        data.headers.insert(0, String::new());
        assert_eq!(data.column_labels()[0], "Unnamed: 0");
        assert_eq!(data.column_labels()[1], "Start Time");
    }

    #[test]
    fn test_demographics_follow_headers() {
        assert!(!sample().has_demographics);
        let data = Dataset::new(
            City::new("Chicago", "chicago.csv"),
            vec!["Gender".to_string(), "Birth Year".to_string()],
            vec![],
        );
        assert!(data.has_demographics);
    }
}
