//! Verbosity levels and the formatted output writer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::Formatter;

use super::Terminal;

/// Output verbosity level.
///
/// A write tagged with level `v` happens only when `v` is at most the
/// configured level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    /// Only writes explicitly tagged quiet.
    Quiet,
    /// Regular output.
    #[default]
    Normal,
    /// `-v`
    Verbose,
    /// `-vv`
    VeryVerbose,
    /// `-vvv`
    Debug,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" | "q" => Ok(Self::Quiet),
            "normal" | "" => Ok(Self::Normal),
            "verbose" | "v" => Ok(Self::Verbose),
            "very-verbose" | "very_verbose" | "vv" => Ok(Self::VeryVerbose),
            "debug" | "vvv" => Ok(Self::Debug),
            _ => Err(format!("unknown verbosity: {}", s)),
        }
    }
}

impl Verbosity {
    /// Level for a `-v` flag repeated `count` times.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::VeryVerbose,
            _ => Self::Debug,
        }
    }

    /// Whether a write tagged `level` is shown at this verbosity.
    pub fn allows(self, level: Verbosity) -> bool {
        level <= self
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
            Self::VeryVerbose => "very-verbose",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// How markup is treated on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// Interpret markup (styled when decorated, stripped otherwise).
    #[default]
    Normal,
    /// Write markup untouched.
    Raw,
    /// Strip markup even on a decorated terminal.
    Plain,
}

/// Writer that formats markup and respects verbosity.
pub struct Output<'t> {
    terminal: &'t mut dyn Terminal,
    formatter: Formatter,
    verbosity: Verbosity,
    output_type: OutputType,
    max_line_length: usize,
    written: bool,
    trailing_newlines: usize,
}

impl<'t> Output<'t> {
    /// Default cap on block width.
    pub const MAX_LINE_LENGTH: usize = 120;

    /// Create a writer over a terminal.
    pub fn new(terminal: &'t mut dyn Terminal, formatter: Formatter, verbosity: Verbosity) -> Self {
        Self {
            terminal,
            formatter,
            verbosity,
            output_type: OutputType::Normal,
            max_line_length: Self::MAX_LINE_LENGTH,
            written: false,
            trailing_newlines: 0,
        }
    }

    /// Set how markup is treated.
    pub fn with_output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    /// Cap the width used for blocks.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max.max(1);
        self
    }

    /// Configured verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Change the configured verbosity.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Configured output type.
    pub fn output_type(&self) -> OutputType {
        self.output_type
    }

    /// The markup formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// The markup formatter, for registering styles.
    pub fn formatter_mut(&mut self) -> &mut Formatter {
        &mut self.formatter
    }

    /// Whether writes carry ANSI styling.
    pub fn is_decorated(&self) -> bool {
        self.formatter.is_decorated() && self.output_type == OutputType::Normal
    }

    /// Width available for blocks: terminal width capped at the maximum.
    pub fn line_length(&self) -> usize {
        self.terminal.width().min(self.max_line_length).max(1)
    }

    /// The underlying terminal.
    pub fn terminal(&mut self) -> &mut dyn Terminal {
        &mut *self.terminal
    }

    /// Write a message, formatting markup per the output type.
    pub fn write(&mut self, message: &str, newline: bool, verbosity: Verbosity) -> Result<()> {
        if !self.verbosity.allows(verbosity) {
            return Ok(());
        }

        let mut text = match self.output_type {
            OutputType::Normal => self.formatter.format(message),
            OutputType::Raw => message.replace('\0', "\\"),
            OutputType::Plain => self.formatter.strip(message),
        };
        if newline {
            text.push('\n');
        }

        self.track(&text);
        self.terminal.write_str(&text)
    }

    /// Write a message followed by a newline at normal verbosity.
    pub fn writeln(&mut self, message: &str) -> Result<()> {
        self.write(message, true, Verbosity::Normal)
    }

    /// Write `count` newlines.
    pub fn new_line(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        self.write(&"\n".repeat(count), false, Verbosity::Normal)
    }

    /// Make sure the next write starts after exactly one blank line.
    pub fn ensure_blank_line(&mut self) -> Result<()> {
        if !self.written {
            return self.new_line(1);
        }
        self.new_line(2usize.saturating_sub(self.trailing_newlines))
    }

    /// Note that the terminal echoed a line of input.
    pub fn record_input_line(&mut self) {
        self.written = true;
        self.trailing_newlines = 1;
    }

    fn track(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.written = true;
        let trailing = text.chars().rev().take_while(|c| *c == '\n').count();
        if trailing == text.chars().count() {
            self.trailing_newlines = (self.trailing_newlines + trailing).min(2);
        } else {
            self.trailing_newlines = trailing.min(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleRegistry;
    use crate::ui::MockTerminal;

    fn formatter() -> Formatter {
        Formatter::new(StyleRegistry::with_defaults(), false)
    }

    #[test]
    fn verbosity_from_str() {
        assert_eq!("verbose".parse::<Verbosity>(), Ok(Verbosity::Verbose));
        assert_eq!("VV".parse::<Verbosity>(), Ok(Verbosity::VeryVerbose));
        assert_eq!("vvv".parse::<Verbosity>(), Ok(Verbosity::Debug));
        assert_eq!("QUIET".parse::<Verbosity>(), Ok(Verbosity::Quiet));
        assert!("loud".parse::<Verbosity>().is_err());
    }

    #[test]
    fn verbosity_ordering_gates_writes() {
        assert!(Verbosity::Normal.allows(Verbosity::Quiet));
        assert!(Verbosity::Normal.allows(Verbosity::Normal));
        assert!(!Verbosity::Normal.allows(Verbosity::Verbose));
        assert!(!Verbosity::Quiet.allows(Verbosity::Normal));
        assert!(Verbosity::Debug.allows(Verbosity::VeryVerbose));
    }

    #[test]
    fn verbosity_from_occurrences() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_occurrences(2), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::from_occurrences(7), Verbosity::Debug);
    }

    #[test]
    fn write_respects_verbosity() {
        let mut term = MockTerminal::new();
        {
            let mut out = Output::new(&mut term, formatter(), Verbosity::Normal);
            out.write("shown", false, Verbosity::Normal).unwrap();
            out.write("hidden", false, Verbosity::Verbose).unwrap();
        }
        assert_eq!(term.output(), "shown");
    }

    #[test]
    fn quiet_only_allows_quiet_writes() {
        let mut term = MockTerminal::new();
        {
            let mut out = Output::new(&mut term, formatter(), Verbosity::Quiet);
            out.writeln("normal").unwrap();
            out.write("quiet", false, Verbosity::Quiet).unwrap();
        }
        assert_eq!(term.output(), "quiet");
    }

    #[test]
    fn output_types_treat_markup_differently() {
        let mut raw = MockTerminal::new();
        Output::new(&mut raw, formatter(), Verbosity::Normal)
            .with_output_type(OutputType::Raw)
            .write("<error>hi</error>", false, Verbosity::Normal)
            .unwrap();
        assert_eq!(raw.output(), "<error>hi</error>");

        let mut plain = MockTerminal::new();
        let decorated = Formatter::new(StyleRegistry::with_defaults(), true);
        Output::new(&mut plain, decorated, Verbosity::Normal)
            .with_output_type(OutputType::Plain)
            .write("<error>hi</error>", false, Verbosity::Normal)
            .unwrap();
        assert_eq!(plain.output(), "hi");
    }

    #[test]
    fn ensure_blank_line_tops_up_newlines() {
        let mut term = MockTerminal::new();
        {
            let mut out = Output::new(&mut term, formatter(), Verbosity::Normal);
            out.ensure_blank_line().unwrap();
            out.writeln("a").unwrap();
            out.ensure_blank_line().unwrap();
            out.writeln("b").unwrap();
            out.new_line(1).unwrap();
            out.ensure_blank_line().unwrap();
            out.write("c", false, Verbosity::Normal).unwrap();
        }
        assert_eq!(term.output(), "\na\n\nb\n\nc");
    }

    #[test]
    fn line_length_is_capped() {
        let mut term = MockTerminal::new();
        term.set_width(300);
        let out = Output::new(&mut term, formatter(), Verbosity::Normal);
        assert_eq!(out.line_length(), Output::MAX_LINE_LENGTH);

        let mut narrow = MockTerminal::new();
        narrow.set_width(40);
        let out = Output::new(&mut narrow, formatter(), Verbosity::Normal).with_max_line_length(60);
        assert_eq!(out.line_length(), 40);
    }
}
