//! Command-line interface for cmdkit.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, GreetArgs, ShowcaseArgs, StylesArgs};
pub use commands::{run_command, Command, CommandDispatcher, CommandResult, InvocationContext};
