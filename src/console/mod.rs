pub mod browser;
pub mod filters;
pub mod prompt;
pub mod styles;

pub use browser::browse_raw_data;
pub use filters::get_filters;
pub use prompt::Console;

use std::io::Write;

use crate::stats::Report;
use styles::{muted_style, title_style};

/// Print a report with its heading and timing
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    writeln!(out, "{}", title_style(&format!("\nWorking on {}...", report.title)))?;
    for line in &report.lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(
        out,
        "{}",
        muted_style(&format!("It took {:.6} seconds.", report.elapsed.as_secs_f64()))
    )
}
