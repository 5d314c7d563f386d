use chrono::{Month, Weekday};
use std::io::{BufRead, Write};

use super::prompt::{lower_case, title_case, Console};
use super::styles::{rule, title_style};
use crate::config::{Config, DAYS, MONTHS};
use crate::error::Result;
use crate::models::{FilterSelection, TimeFilter};

fn ask_month<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Month> {
    let options: Vec<(&str, Month)> = MONTHS.iter().map(|m| (m.name(), *m)).collect();
    let names = MONTHS.iter().map(|m| m.name()).collect::<Vec<_>>().join(", ");
    console.choose(
        &format!("\nWhich month? {}?", names),
        &format!(
            "The month you entered is incorrect, please try again. Please enter one of: {}.",
            names
        ),
        &options,
        title_case,
    )
}

fn ask_day<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Weekday> {
    let labels: Vec<String> = DAYS.iter().map(|d| d.to_string()).collect();
    let options: Vec<(&str, Weekday)> = labels.iter().map(String::as_str).zip(DAYS).collect();
    let names = labels.join(", ");
    console.choose(
        &format!("\nWhich day? {}?", names),
        &format!(
            "The day you entered is incorrect, please try again. Which day? {}?",
            names
        ),
        &options,
        title_case,
    )
}

/// Ask for a city and optional month/day filter
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<FilterSelection> {
    writeln!(
        console.out(),
        "{}",
        title_style("\nHello! Let's explore some US bikeshare data!")
    )?;

    let cities: Vec<(&str, _)> = config
        .cities
        .iter()
        .map(|c| (c.name.as_str(), c.clone()))
        .collect();
    let city_names = config
        .cities
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let city = console.choose(
        &format!("\nWould you like to see the data for {}?", city_names),
        &format!(
            "The city name you entered is incorrect, please try again. Please enter one of: {}.",
            city_names
        ),
        &cities,
        title_case,
    )?;

    let modes: Vec<(&str, TimeFilter)> = TimeFilter::ALL.iter().map(|f| (f.as_str(), *f)).collect();
    let mode = console.choose(
        "\nWould you like to filter the data by month, day, both, or not at all? Type \"none\" for no time filter.",
        "The filter you entered is incorrect. Please enter \"month\", \"day\", \"both\", or \"none\".",
        &modes,
        lower_case,
    )?;

    let month = if mode.wants_month() {
        Some(ask_month(console)?)
    } else {
        None
    };
    let day = if mode.wants_day() {
        Some(ask_day(console)?)
    } else {
        None
    };

    let selection = FilterSelection::new(city, month, day);
    writeln!(console.out(), "{}", rule())?;
    writeln!(console.out(), "\nYour filter selection\n{}", selection)?;
    tracing::debug!(?selection, "filters chosen");

    Ok(selection)
}
