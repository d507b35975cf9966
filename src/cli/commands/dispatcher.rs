//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`InvocationContext`] with the per-run output settings
//! - [`run_command`] which builds the [`Interact`] helper and runs a command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::collections::BTreeMap;

use crate::cli::args::{Cli, Commands, GreetArgs};
use crate::config::CmdKitConfig;
use crate::error::Result;
use crate::interact::{Interact, SectionStyle};
use crate::style::{Formatter, StyleRegistry, StyleSpec};
use crate::ui::{Output, OutputType, Terminal, Verbosity};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Styles this command adds or overrides, keyed by name.
    ///
    /// They are registered after the defaults and the settings file, so a
    /// name already in use is replaced.
    fn format_styles(&self) -> Vec<(String, StyleSpec)> {
        Vec::new()
    }

    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `io` - Helper for prompts and formatted output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, io: &mut Interact) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Output settings for one command run.
///
/// Built fresh for every invocation; nothing here is shared between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationContext {
    /// Configured verbosity.
    pub verbosity: Verbosity,
    /// How markup is written.
    pub output_type: OutputType,
    /// Whether output carries ANSI styling.
    pub decorated: bool,
    /// Whether prompts read input.
    pub interactive: bool,
    /// How section headings are drawn.
    pub section_style: SectionStyle,
    /// Cap on block width.
    pub max_line_length: usize,
    /// Styles from the settings file.
    pub styles: BTreeMap<String, StyleSpec>,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            output_type: OutputType::Normal,
            decorated: false,
            interactive: true,
            section_style: SectionStyle::Labeled,
            max_line_length: Output::MAX_LINE_LENGTH,
            styles: BTreeMap::new(),
        }
    }
}

impl InvocationContext {
    /// Combine command-line flags with the settings file.
    ///
    /// Flags win over settings; `terminal_colors` is what the terminal
    /// itself supports.
    pub fn resolve(cli: &Cli, config: &CmdKitConfig, terminal_colors: bool) -> Self {
        let settings = &config.settings;
        let decorated = !cli.no_color && settings.colors.unwrap_or(terminal_colors);

        Self {
            verbosity: cli
                .verbosity()
                .or(settings.verbosity)
                .unwrap_or_default(),
            output_type: settings.output,
            decorated,
            interactive: !cli.no_interaction && settings.interactive.unwrap_or(true),
            section_style: settings.section_style,
            max_line_length: settings.max_line_length,
            styles: config.styles.clone(),
        }
    }
}

/// Run a command against a terminal.
///
/// Registers the default styles, then the settings-file styles, then the
/// command's own styles, and executes the command. Prompt aborts have
/// already been reported by the prompt; other errors are reported in an
/// error block. Both map to exit code 1.
pub fn run_command(
    command: &dyn Command,
    ctx: &InvocationContext,
    terminal: &mut dyn Terminal,
) -> CommandResult {
    let mut styles = StyleRegistry::with_defaults();
    styles.merge(ctx.styles.iter().map(|(k, v)| (k.as_str(), v.clone())));
    styles.merge(command.format_styles());

    let formatter = Formatter::new(styles, ctx.decorated);
    let output = Output::new(terminal, formatter, ctx.verbosity)
        .with_output_type(ctx.output_type)
        .with_max_line_length(ctx.max_line_length);
    let mut io = Interact::new(output, ctx.interactive).with_section_style(ctx.section_style);

    match command.execute(&mut io) {
        Ok(result) => result,
        Err(e) if e.is_prompt_abort() => {
            tracing::debug!(error = %e, "command aborted at a prompt");
            CommandResult::failure(1)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if let Err(write_err) = io.error_block(e.to_string(), Some("ERROR")) {
                tracing::warn!(error = %write_err, "failed to report error");
            }
            CommandResult::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    ctx: InvocationContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given invocation settings.
    pub fn new(ctx: InvocationContext) -> Self {
        Self { ctx }
    }

    /// Get the invocation settings.
    pub fn context(&self) -> &InvocationContext {
        &self.ctx
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand, `greet` runs.
    pub fn dispatch(&self, cli: &Cli, terminal: &mut dyn Terminal) -> CommandResult {
        match &cli.command {
            Some(Commands::Greet(args)) => {
                let cmd = super::greet::GreetCommand::new(args.clone());
                run_command(&cmd, &self.ctx, terminal)
            }
            Some(Commands::Showcase(args)) => {
                let cmd = super::showcase::ShowcaseCommand::new(args.clone());
                run_command(&cmd, &self.ctx, terminal)
            }
            Some(Commands::Styles(args)) => {
                let cmd = super::styles::StylesCommand::new(args.clone());
                run_command(&cmd, &self.ctx, terminal)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                run_command(&cmd, &self.ctx, terminal)
            }
            None => {
                let cmd = super::greet::GreetCommand::new(GreetArgs::default());
                run_command(&cmd, &self.ctx, terminal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmdKitError;
    use crate::style::Color;
    use crate::ui::MockTerminal;
    use clap::Parser;

    struct Scripted {
        fail_with: Option<fn() -> CmdKitError>,
    }

    impl Command for Scripted {
        fn format_styles(&self) -> Vec<(String, StyleSpec)> {
            vec![("Brand-Name".to_string(), StyleSpec::fg(Color::Magenta))]
        }

        fn execute(&self, io: &mut Interact) -> Result<CommandResult> {
            if let Some(make) = self.fail_with {
                return Err(make());
            }
            let styles = io.output().formatter().styles();
            assert!(styles.has("brand_name"));
            assert_eq!(styles.get("success"), Some(&StyleSpec::fg(Color::Blue)));
            io.writeln("<brand_name>ok</>", None, None)?;
            Ok(CommandResult::success())
        }
    }

    fn ctx_with_success_override() -> InvocationContext {
        let mut ctx = InvocationContext::default();
        ctx.styles
            .insert("success".to_string(), StyleSpec::fg(Color::Blue));
        ctx
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn run_command_registers_styles_in_order() {
        let mut term = MockTerminal::new();
        let command = Scripted { fail_with: None };
        let result = run_command(&command, &ctx_with_success_override(), &mut term);
        assert_eq!(result, CommandResult::success());
        assert_eq!(term.output(), "ok\n");
    }

    #[test]
    fn prompt_abort_exits_one_without_extra_report() {
        let mut term = MockTerminal::new();
        let command = Scripted {
            fail_with: Some(|| CmdKitError::AttemptsExhausted { attempts: 2 }),
        };
        let result = run_command(&command, &InvocationContext::default(), &mut term);
        assert_eq!(result, CommandResult::failure(1));
        assert_eq!(term.output(), "");
    }

    #[test]
    fn other_errors_are_reported() {
        let mut term = MockTerminal::new();
        let command = Scripted {
            fail_with: Some(|| CmdKitError::HiddenInputUnavailable),
        };
        let result = run_command(&command, &InvocationContext::default(), &mut term);
        assert_eq!(result.exit_code, 1);
        assert!(term.has_output("[ERROR] Unable to hide the response"));
    }

    #[test]
    fn context_prefers_flags_over_settings() {
        let mut config = CmdKitConfig::default();
        config.settings.verbosity = Some(Verbosity::Verbose);
        config.settings.colors = Some(true);

        let cli = Cli::try_parse_from(["cmdkit", "-q", "--no-color", "-n"]).unwrap();
        let ctx = InvocationContext::resolve(&cli, &config, true);
        assert_eq!(ctx.verbosity, Verbosity::Quiet);
        assert!(!ctx.decorated);
        assert!(!ctx.interactive);

        let cli = Cli::try_parse_from(["cmdkit"]).unwrap();
        let ctx = InvocationContext::resolve(&cli, &config, false);
        assert_eq!(ctx.verbosity, Verbosity::Verbose);
        assert!(ctx.decorated);
        assert!(ctx.interactive);
    }

    #[test]
    fn dispatch_defaults_to_greet() {
        let cli = Cli::try_parse_from(["cmdkit", "-n"]).unwrap();
        let ctx = InvocationContext {
            interactive: false,
            ..InvocationContext::default()
        };
        let mut term = MockTerminal::new();
        let result = CommandDispatcher::new(ctx).dispatch(&cli, &mut term);
        // No default name in non-interactive mode.
        assert_eq!(result.exit_code, 1);
        assert!(term.has_output("non-interactive"));
    }
}
