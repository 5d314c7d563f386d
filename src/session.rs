use std::io::{BufRead, Write};

use crate::config::Config;
use crate::console::{browse_raw_data, get_filters, write_report, Console};
use crate::data::load_data;
use crate::error::Result;
use crate::stats::all_reports;

/// One pass: filters, load, the four reports, then the raw browser
pub fn run_once<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    let selection = get_filters(console, config)?;
    let data = load_data(config, &selection)?;

    for report in all_reports(&data, &selection) {
        write_report(console.out(), &report)?;
    }

    let pages = browse_raw_data(console, &data, config.page_size)?;
    tracing::debug!(pages, "raw data browsing finished");
    Ok(())
}

/// Repeat passes until the user declines to restart
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    let mut iteration = 0u32;
    loop {
        iteration += 1;
        tracing::debug!(iteration, "starting pass");
        run_once(console, config)?;

        if !console.confirm("\nWould you like to restart? Enter \"yes\" or \"no\".")? {
            break;
        }
    }
    tracing::info!(iterations = iteration, "session finished");
    Ok(())
}
