use std::io::{BufRead, Write};

use super::styles::{error_style, prompt_style};
use crate::error::{ExploreError, Result};

/// Normalisation applied to user input before matching
pub type Normalize = fn(&str) -> String;

/// "new YORK" -> "New York"
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn lower_case(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Line-based console over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line; a closed input is an error
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ExploreError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until the normalised answer matches one of `options`.
    pub fn choose<T: Clone>(
        &mut self,
        question: &str,
        retry: &str,
        options: &[(&str, T)],
        normalize: Normalize,
    ) -> Result<T> {
        writeln!(self.output, "{}", prompt_style(question))?;
        loop {
            let answer = normalize(&self.read_line()?);
            if let Some((_, value)) = options.iter().find(|(label, _)| *label == answer) {
                return Ok(value.clone());
            }
            tracing::debug!("rejected input '{}'", answer);
            writeln!(self.output, "{}", error_style(retry))?;
        }
    }

    /// Ask a yes/no question
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.choose(
            question,
            "The answer you entered is incorrect. Please enter \"yes\" or \"no\".",
            &[("yes", true), ("no", false)],
            lower_case,
        )
    }
}
