use super::frequency::{counts, modes};
use super::report::{timed, Report};
use crate::data::Dataset;

pub const USER_TYPES: [&str; 2] = ["Customer", "Subscriber"];
pub const GENDERS: [&str; 2] = ["Female", "Male"];

/// Rider demographics, only for cities that record them
#[derive(Debug, Clone, PartialEq)]
pub struct Demographics {
    pub genders: Vec<(&'static str, usize)>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    /// All years tied for most riders, ascending
    pub common_birth_years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(&'static str, usize)>,
    pub demographics: Option<Demographics>,
}

/// Count the `known` values of a column, in the order given.
/// Empty values are skipped; other values are logged and left out.
pub fn count_categories<'a>(
    column: &'static str,
    values: impl IntoIterator<Item = Option<&'a str>>,
    known: &[&'static str],
) -> Vec<(&'static str, usize)> {
    let counts = counts(values.into_iter().flatten());

    for (value, count) in &counts {
        if !known.iter().any(|k| k == value) {
            tracing::warn!(column, value = *value, count = *count, "ignoring unrecognized category");
        }
    }

    known
        .iter()
        .map(|&k| (k, counts.get(&k).copied().unwrap_or(0)))
        .collect()
}

pub fn user_stats(data: &Dataset) -> UserStats {
    let records = &data.records;
    let user_types = count_categories(
        "User Type",
        records.iter().map(|r| r.user_type.as_deref()),
        &USER_TYPES,
    );

    let demographics = data.has_demographics.then(|| {
        let genders = count_categories(
            "Gender",
            records.iter().map(|r| r.gender.as_deref()),
            &GENDERS,
        );
        let years = || records.iter().filter_map(|r| r.birth_year);

        Demographics {
            genders,
            earliest_birth_year: years().min(),
            latest_birth_year: years().max(),
            common_birth_years: modes(years()),
        }
    });

    UserStats {
        user_types,
        demographics,
    }
}

fn year_or_na(year: Option<i32>) -> String {
    year.map_or_else(|| "n/a".to_string(), |y| y.to_string())
}

pub fn user_report(data: &Dataset) -> Report {
    timed("user statistics", |report| {
        let stats = user_stats(data);

        report.line("User Type count");
        for (user_type, count) in &stats.user_types {
            report.line(format!("{}: {}", user_type, count));
        }

        if let Some(demo) = &stats.demographics {
            report.blank();
            report.line("Gender count");
            for (gender, count) in &demo.genders {
                report.line(format!("{}: {}", gender, count));
            }

            let common = if demo.common_birth_years.is_empty() {
                "n/a".to_string()
            } else {
                demo.common_birth_years
                    .iter()
                    .map(|y| y.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            report.blank();
            report.line(format!(
                "The earliest year of birth: {}",
                year_or_na(demo.earliest_birth_year)
            ));
            report.line(format!(
                "The most recent year of birth: {}",
                year_or_na(demo.latest_birth_year)
            ));
            report.line(format!("The most common year(s) of birth: {}", common));
        }
    })
}
