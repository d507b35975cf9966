//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::Verbosity;

/// cmdkit - Interactive command helpers for prompts, blocks and lists.
#[derive(Debug, Parser)]
#[command(name = "cmdkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides .cmdkit.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only show output explicitly marked quiet
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not ask any questions, use defaults
    #[arg(short = 'n', long, global = true)]
    pub no_interaction: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Verbosity requested on the command line, if any flag was given.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.verbose > 0 {
            Some(Verbosity::from_occurrences(self.verbose))
        } else {
            None
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask a few questions and greet the operator (default)
    Greet(GreetArgs),

    /// Render every block, section and list style
    Showcase(ShowcaseArgs),

    /// List the registered styles
    Styles(StylesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `greet` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GreetArgs {
    /// Default answer for the name question
    #[arg(long)]
    pub name: Option<String>,

    /// Maximum answers per question before giving up
    #[arg(long, value_name = "N")]
    pub attempts: Option<usize>,

    /// Allow picking several colors
    #[arg(long)]
    pub multiple: bool,

    /// Also ask for a secret word
    #[arg(long)]
    pub secret: bool,
}

/// Arguments for the `showcase` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowcaseArgs {
    /// Draw list rules
    #[arg(long)]
    pub border: bool,

    /// Bullet name or starting number for lists
    #[arg(long, default_value = "circle")]
    pub symbol: String,
}

/// Arguments for the `styles` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StylesArgs {
    /// Print styles as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
