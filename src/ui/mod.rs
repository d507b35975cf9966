//! Terminal access and layout primitives.
//!
//! This module provides:
//! - [`Terminal`] trait, the injected output sink and input source
//! - [`ConsoleTerminal`] for real terminals and piped stdin
//! - [`MockTerminal`] for scripted answers and captured output
//! - [`Output`] for verbosity-gated, formatted writes
//! - Block layout, bullets, list input and a small table renderer
//!
//! # Example
//!
//! ```
//! use cmdkit::style::{Formatter, StyleRegistry};
//! use cmdkit::ui::{MockTerminal, Output, Verbosity};
//!
//! let mut term = MockTerminal::new();
//! let formatter = Formatter::new(StyleRegistry::with_defaults(), false);
//! let mut output = Output::new(&mut term, formatter, Verbosity::Normal);
//! output.writeln("<info>ready</info>").unwrap();
//! drop(output);
//! assert_eq!(term.output(), "ready\n");
//! ```

pub mod block;
pub mod bullets;
pub mod list;
pub mod mock;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;

pub use block::{create_block, wrap_text, BlockOptions};
pub use bullets::{bullet, Bullet, ListSymbol};
pub use list::ListItems;
pub use mock::MockTerminal;
pub use output::{Output, OutputType, Verbosity};
pub use prompts::{Answer, ChoiceQuestion, Normalizer, Question, Validator, INPUT_CUE};
pub use table::{Table, TableStyle};
pub use terminal::{should_use_colors, ConsoleTerminal};

use crate::error::Result;

/// Output sink and input source for a command invocation.
///
/// This trait allows scripting the terminal in tests.
pub trait Terminal {
    /// Write already formatted text.
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Show `cue` and read one line of visible input.
    ///
    /// Returns `None` when the input stream is closed.
    fn read_line(&mut self, cue: &str) -> Result<Option<String>>;

    /// Show `cue` and read one line without echoing it.
    ///
    /// Only called when [`Terminal::can_hide_input`] is true.
    fn read_secret(&mut self, cue: &str) -> Result<Option<String>>;

    /// Whether input can be read without echo.
    fn can_hide_input(&self) -> bool;

    /// Whether the terminal renders ANSI styling.
    fn is_decorated(&self) -> bool;

    /// Width in columns.
    fn width(&self) -> usize;
}
