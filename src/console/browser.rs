use std::io::{BufRead, Write};

use super::prompt::Console;
use super::styles::{muted_style, row_style};
use crate::data::Dataset;
use crate::error::Result;

pub const NO_MORE_RECORDS: &str = "No more trip data to display.";

/// Page through the original columns of the filtered trips.
/// Returns the number of pages shown.
pub fn browse_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data: &Dataset,
    page_size: usize,
) -> Result<usize> {
    let labels = data.column_labels();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut start = 0;
    let mut pages = 0;
    let mut question = format!(
        "\nWould you like to view the first {} individual trip records? Type \"yes\" or \"no\".",
        page_size
    );

    while console.confirm(&question)? {
        let page = data.page(start, page_size);
        if page.is_empty() {
            writeln!(console.out(), "{}", muted_style(NO_MORE_RECORDS))?;
            break;
        }

        writeln!(
            console.out(),
            "\nHere are rows {} to {}.",
            start + 1,
            start + page.len()
        )?;
        for (offset, record) in page.iter().enumerate() {
            writeln!(console.out(), "{}", row_style(&format!("Row {}", start + offset + 1)))?;
            for (label, value) in labels.iter().zip(&record.columns) {
                writeln!(console.out(), "{:<width$}  {}", label, value, width = width)?;
            }
            writeln!(console.out())?;
        }

        start += page.len();
        pages += 1;
        question = format!(
            "\nWould you like to view the next {} individual trip records? Type \"yes\" or \"no\".",
            page_size
        );
    }

    Ok(pages)
}
