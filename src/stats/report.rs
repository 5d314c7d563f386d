use std::time::{Duration, Instant};

use super::frequency::Popular;

pub const NO_TRIPS: &str = "No trips match the selected filters.";

/// Printable result of one statistics pass
#[derive(Debug, Clone)]
pub struct Report {
    pub title: &'static str,
    pub lines: Vec<String>,
    pub elapsed: Duration,
}

impl Report {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// "<label>: <value>, count: <n>"
    pub fn top<K>(&mut self, label: &str, popular: &Popular<K>, display: impl Fn(&K) -> String) {
        let line = match popular {
            Some(top) => format!("{}: {}, count: {}", label, display(&top.value), top.count),
            None => format!("{}: {}", label, NO_TRIPS),
        };
        self.lines.push(line);
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }
}

/// Build a report and record how long it took
pub fn timed(title: &'static str, build: impl FnOnce(&mut Report)) -> Report {
    let started = Instant::now();
    let mut report = Report::new(title);
    build(&mut report);
    report.elapsed = started.elapsed();
    report
}
