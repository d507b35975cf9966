//! cmdkit - Interactive command helpers.
//!
//! cmdkit gives every command a per-invocation [`interact::Interact`]
//! helper for validated prompts, styled blocks, sections and lists, with
//! named styles registered before the command body runs.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, the `Command` trait and dispatching
//! - [`config`] - Settings file loading
//! - [`error`] - Error types and result aliases
//! - [`interact`] - Prompts and formatted output for commands
//! - [`style`] - Named styles and inline markup
//! - [`ui`] - Terminal access, output writer and layout primitives
//!
//! # Example
//!
//! ```
//! use cmdkit::cli::{run_command, Command, CommandResult, InvocationContext};
//! use cmdkit::interact::Interact;
//! use cmdkit::ui::MockTerminal;
//!
//! struct Hello;
//!
//! impl Command for Hello {
//!     fn execute(&self, io: &mut Interact) -> cmdkit::Result<CommandResult> {
//!         let name = io.ask("Name?", Some("World"), None, None)?;
//!         io.success_block(format!("Hello, {}!", name), Some("OK"))?;
//!         Ok(CommandResult::success())
//!     }
//! }
//!
//! let mut term = MockTerminal::with_answers([""]);
//! let result = run_command(&Hello, &InvocationContext::default(), &mut term);
//! assert!(result.success);
//! assert!(term.has_output("[OK] Hello, World!"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod interact;
pub mod style;
pub mod ui;

pub use error::{CmdKitError, Result};
