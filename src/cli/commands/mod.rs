//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. [`run_command`] builds a fresh
//! [`Interact`](crate::interact::Interact) helper for every run, with the
//! default styles, the settings-file styles and the command's own styles
//! registered in that order.

pub mod completions;
pub mod dispatcher;
pub mod greet;
pub mod showcase;
pub mod styles;

pub use dispatcher::{run_command, Command, CommandDispatcher, CommandResult, InvocationContext};
