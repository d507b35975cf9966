//! The interactive helper handed to every command.
//!
//! [`Interact`] wraps an [`Output`] (and through it the injected
//! [`Terminal`](crate::ui::Terminal)) and offers:
//! - prompts: [`ask`](Interact::ask), [`secret`](Interact::secret),
//!   [`choice`](Interact::choice), [`confirm`](Interact::confirm)
//! - styled writes, titles, sections and blocks
//! - bulleted, numbered and key/value lists
//!
//! # Example
//!
//! ```
//! use cmdkit::interact::Interact;
//! use cmdkit::style::{Formatter, StyleRegistry};
//! use cmdkit::ui::{MockTerminal, Output, Verbosity};
//!
//! let mut term = MockTerminal::with_answers(["Alice"]);
//! {
//!     let formatter = Formatter::new(StyleRegistry::with_defaults(), false);
//!     let output = Output::new(&mut term, formatter, Verbosity::Normal);
//!     let mut io = Interact::new(output, true);
//!     let name = io.ask("Name?", None, None, None).unwrap();
//!     io.success_block(format!("Hello, {}", name), None).unwrap();
//! }
//! assert!(term.has_output("Hello, Alice"));
//! ```

mod blocks;
mod lists;
mod prompt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::{escape_trailing_backslash, StyleSpec};
use crate::ui::{Output, Verbosity};

pub use blocks::IntoMessages;
pub use prompt::CANCEL_MESSAGE;

/// How section headings are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyle {
    /// A block labelled with the label character repeated per level.
    #[default]
    Labeled,
    /// A `»` banner line followed by a blank line.
    Banner,
}

impl FromStr for SectionStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "labeled" | "labelled" => Ok(Self::Labeled),
            "banner" => Ok(Self::Banner),
            _ => Err(format!("unknown section style: {}", s)),
        }
    }
}

impl fmt::Display for SectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Labeled => f.write_str("labeled"),
            Self::Banner => f.write_str("banner"),
        }
    }
}

/// Per-invocation helper for prompts and formatted output.
pub struct Interact<'t> {
    output: Output<'t>,
    interactive: bool,
    section_style: SectionStyle,
}

impl<'t> Interact<'t> {
    /// Wrap an output writer.
    ///
    /// When `interactive` is false, prompts return their default without
    /// reading input.
    pub fn new(output: Output<'t>, interactive: bool) -> Self {
        Self {
            output,
            interactive,
            section_style: SectionStyle::default(),
        }
    }

    /// Choose how section headings are drawn.
    pub fn with_section_style(mut self, style: SectionStyle) -> Self {
        self.section_style = style;
        self
    }

    /// Change how section headings are drawn.
    pub fn set_section_style(&mut self, style: SectionStyle) {
        self.section_style = style;
    }

    /// Whether prompts read input.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Configured section heading style.
    pub fn section_style(&self) -> SectionStyle {
        self.section_style
    }

    /// Configured verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.output.verbosity()
    }

    /// The underlying output writer.
    pub fn output(&mut self) -> &mut Output<'t> {
        &mut self.output
    }

    /// Register one named style, replacing any style of the same name.
    pub fn register_style(&mut self, name: &str, spec: StyleSpec) {
        self.output.formatter_mut().styles_mut().set(name, spec);
    }

    /// Register several named styles.
    pub fn register_styles<I, K>(&mut self, styles: I)
    where
        I: IntoIterator<Item = (K, StyleSpec)>,
        K: AsRef<str>,
    {
        self.output.formatter_mut().styles_mut().merge(styles);
    }

    /// Write `message` without a trailing newline.
    ///
    /// With a style, the message is wrapped as `<style>message</style>`.
    /// With a verbosity, the write only happens when the configured
    /// verbosity allows that level.
    pub fn write(
        &mut self,
        message: &str,
        style: Option<&str>,
        verbosity: Option<Verbosity>,
    ) -> Result<()> {
        let styled = styled(message, style);
        self.output
            .write(&styled, false, verbosity.unwrap_or(Verbosity::Normal))
    }

    /// Like [`write`](Self::write), followed by a newline.
    pub fn writeln(
        &mut self,
        message: &str,
        style: Option<&str>,
        verbosity: Option<Verbosity>,
    ) -> Result<()> {
        let styled = styled(message, style);
        self.output
            .write(&styled, true, verbosity.unwrap_or(Verbosity::Normal))
    }

    /// Write `count` newlines.
    pub fn new_line(&mut self, count: usize) -> Result<()> {
        self.output.new_line(count)
    }
}

fn styled(message: &str, style: Option<&str>) -> String {
    match style {
        Some(style) => format!(
            "<{}>{}</{}>",
            style,
            escape_trailing_backslash(message),
            style
        ),
        None => message.to_string(),
    }
}
