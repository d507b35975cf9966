//! The `showcase` command renders every output helper once.

use crate::cli::args::ShowcaseArgs;
use crate::error::Result;
use crate::interact::Interact;
use crate::ui::{BlockOptions, ListItems, ListSymbol, Verbosity};

use super::dispatcher::{Command, CommandResult};

/// The showcase command implementation.
pub struct ShowcaseCommand {
    args: ShowcaseArgs,
}

impl ShowcaseCommand {
    /// Create a new showcase command.
    pub fn new(args: ShowcaseArgs) -> Self {
        Self { args }
    }
}

impl Command for ShowcaseCommand {
    fn execute(&self, io: &mut Interact) -> Result<CommandResult> {
        let symbol = ListSymbol::from(self.args.symbol.as_str());

        io.title("cmdkit showcase")?;

        io.section("Text")?;
        io.write("Plain, ", None, None)?;
        io.write("info, ", Some("info"), None)?;
        io.write("comment", Some("comment"), None)?;
        io.new_line(1)?;
        io.writeln("Shown with -v", Some("comment"), Some(Verbosity::Verbose))?;
        io.writeln("Shown with -vvv", Some("comment"), Some(Verbosity::Debug))?;

        io.section_with("Blocks", 2, Some("#"), "comment")?;
        io.block(
            ["A plain block.", "It can hold several messages."],
            BlockOptions::default(),
        )?;
        io.highlight_block("Something to notice.", None)?;
        io.success_block("Everything worked.", Some("OK"))?;
        io.warning_block("This might need attention.", Some("WARNING"))?;
        io.error_block("Something went wrong.", Some("ERROR"))?;
        io.block(
            "<info>Markup</info> is kept when escaping is off.",
            BlockOptions::styled("comment").label(Some("!")).escape(false),
        )?;

        io.section_with("Lists", 2, Some("#"), "comment")?;
        io.write_list(
            vec!["alpha", "beta", "gamma"],
            symbol.clone(),
            Some("info"),
            self.args.border,
        )?;
        io.write_list(vec!["first", "second"], 1i64, Some("comment"), self.args.border)?;
        io.write_list(
            ListItems::from_pairs([("Name", "cmdkit"), ("Version", env!("CARGO_PKG_VERSION"))]),
            symbol,
            Some("info"),
            self.args.border,
        )?;

        io.write("Bullets: ", None, None)?;
        let names = [
            "disc",
            "circle",
            "square",
            "double-left-arrow",
            "double-right-arrow",
        ];
        let glyphs: Vec<&str> = names.iter().map(|name| io.bullet(name)).collect();
        io.writeln(&glyphs.join(" "), None, None)?;

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::{run_command, InvocationContext};
    use crate::ui::MockTerminal;

    fn run(args: ShowcaseArgs, ctx: InvocationContext) -> MockTerminal {
        let mut term = MockTerminal::new();
        let result = run_command(&ShowcaseCommand::new(args), &ctx, &mut term);
        assert_eq!(result, CommandResult::success());
        term
    }

    fn default_args() -> ShowcaseArgs {
        ShowcaseArgs {
            border: false,
            symbol: "circle".to_string(),
        }
    }

    #[test]
    fn renders_every_helper() {
        let term = run(default_args(), InvocationContext::default());
        assert!(term.has_output("cmdkit showcase\n==============="));
        assert!(term.has_output("[#] Text."));
        assert!(term.has_output("[##] Blocks."));
        assert!(term.has_output("Plain, info, comment\n"));
        assert!(term.has_output("[OK] Everything worked."));
        assert!(term.has_output("[ERROR] Something went wrong."));
        assert!(term.has_output("[!] Markup is kept"));
        assert!(term.has_output(" ○  alpha"));
        assert!(term.has_output(" 2.  second"));
        assert!(term.has_output(" ○ Name     :  cmdkit"));
        assert!(term.has_output("Bullets: • ○ ■ « »"));
    }

    #[test]
    fn verbose_lines_need_verbosity() {
        let term = run(default_args(), InvocationContext::default());
        assert!(!term.has_output("Shown with -v"));

        let ctx = InvocationContext {
            verbosity: Verbosity::Verbose,
            ..InvocationContext::default()
        };
        let term = run(default_args(), ctx);
        assert!(term.has_output("Shown with -v\n"));
        assert!(!term.has_output("Shown with -vvv"));
    }

    #[test]
    fn custom_symbol_and_border() {
        let args = ShowcaseArgs {
            border: true,
            symbol: "square".to_string(),
        };
        let term = run(args, InvocationContext::default());
        assert!(term.has_output(" ■  alpha"));
        assert!(term.lines().iter().any(|l| !l.is_empty() && l.chars().all(|c| c == '-')));
    }
}
