//! Mock terminal for testing.
//!
//! `MockTerminal` implements the `Terminal` trait, captures everything that
//! is written and answers prompts from a queue of scripted lines.
//!
//! # Example
//!
//! ```
//! use cmdkit::ui::{MockTerminal, Terminal};
//!
//! let mut term = MockTerminal::with_answers(["Alice"]);
//! let answer = term.read_line(" > ").unwrap();
//!
//! assert_eq!(answer.as_deref(), Some("Alice"));
//! assert_eq!(term.reads(), 1);
//! assert!(term.output().contains(" > "));
//! ```

use std::collections::VecDeque;

use crate::error::{CmdKitError, Result};

use super::Terminal;

/// Scripted terminal.
///
/// Once the answer queue is exhausted, reads report a closed input stream.
#[derive(Debug)]
pub struct MockTerminal {
    answers: VecDeque<String>,
    output: String,
    reads: usize,
    secret_reads: usize,
    can_hide: bool,
    decorated: bool,
    width: usize,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self {
            answers: VecDeque::new(),
            output: String::new(),
            reads: 0,
            secret_reads: 0,
            can_hide: true,
            decorated: false,
            width: 80,
        }
    }
}

impl MockTerminal {
    /// Create a mock with no scripted answers, 80 columns, no colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock answering with the given lines in order.
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue another answer.
    pub fn push_answer(&mut self, answer: &str) {
        self.answers.push_back(answer.to_string());
    }

    /// Set whether hidden input is supported.
    pub fn set_can_hide_input(&mut self, can_hide: bool) {
        self.can_hide = can_hide;
    }

    /// Set whether the terminal reports ANSI support.
    pub fn set_decorated(&mut self, decorated: bool) {
        self.decorated = decorated;
    }

    /// Set the reported width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Everything written so far, including cues and echoed answers.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Output lines with trailing whitespace removed.
    pub fn lines(&self) -> Vec<&str> {
        self.output.lines().map(str::trim_end).collect()
    }

    /// Number of reads attempted, visible and hidden.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Number of hidden reads attempted.
    pub fn secret_reads(&self) -> usize {
        self.secret_reads
    }

    /// Answers not consumed yet.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Check if the output contains a fragment.
    pub fn has_output(&self, fragment: &str) -> bool {
        self.output.contains(fragment)
    }

    /// Clear captured output and counters.
    pub fn clear(&mut self) {
        self.output.clear();
        self.reads = 0;
        self.secret_reads = 0;
    }

    fn next_answer(&mut self, cue: &str, echo: bool) -> Option<String> {
        self.output.push_str(cue);
        let answer = self.answers.pop_front()?;
        if echo {
            self.output.push_str(&answer);
        }
        self.output.push('\n');
        Some(answer)
    }
}

impl Terminal for MockTerminal {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self, cue: &str) -> Result<Option<String>> {
        self.reads += 1;
        Ok(self.next_answer(cue, true))
    }

    fn read_secret(&mut self, cue: &str) -> Result<Option<String>> {
        if !self.can_hide {
            return Err(CmdKitError::HiddenInputUnavailable);
        }
        self.reads += 1;
        self.secret_reads += 1;
        Ok(self.next_answer(cue, false))
    }

    fn can_hide_input(&self) -> bool {
        self.can_hide
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn width(&self) -> usize {
        self.width
    }
}
