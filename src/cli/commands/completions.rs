//! Shell completions generation.
//!
//! The `cmdkit completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::{CmdKitError, Result};
use crate::interact::Interact;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, io: &mut Interact) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "cmdkit", &mut buf);
        let script = String::from_utf8(buf).map_err(|e| CmdKitError::Other(e.into()))?;

        // Scripts may contain `<`, so bypass markup formatting.
        io.output().terminal().write_str(&script)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::{run_command, InvocationContext};
    use crate::ui::MockTerminal;
    use clap_complete::Shell;

    fn generate(shell: Shell) -> String {
        let mut term = MockTerminal::new();
        let result = run_command(
            &CompletionsCommand::new(CompletionsArgs { shell }),
            &InvocationContext::default(),
            &mut term,
        );
        assert!(result.success);
        term.output().to_string()
    }

    #[test]
    fn generates_bash_completions() {
        let output = generate(Shell::Bash);
        assert!(output.contains("cmdkit"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(generate(Shell::Zsh).contains("cmdkit"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = generate(Shell::Fish);
        assert!(output.contains("cmdkit"));
        assert!(output.contains("showcase"));
    }
}
