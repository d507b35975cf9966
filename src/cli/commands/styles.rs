//! The `styles` command lists every registered style.

use std::collections::BTreeMap;

use crate::cli::args::StylesArgs;
use crate::error::{CmdKitError, Result};
use crate::interact::Interact;
use crate::style::StyleSpec;
use crate::ui::{Table, TableStyle};

use super::dispatcher::{Command, CommandResult};

/// The styles command implementation.
pub struct StylesCommand {
    args: StylesArgs,
}

impl StylesCommand {
    /// Create a new styles command.
    pub fn new(args: StylesArgs) -> Self {
        Self { args }
    }
}

impl Command for StylesCommand {
    fn execute(&self, io: &mut Interact) -> Result<CommandResult> {
        let styles: BTreeMap<String, StyleSpec> = io
            .output()
            .formatter()
            .styles()
            .iter()
            .map(|(name, spec)| (name.to_string(), spec.clone()))
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&styles)
                .map_err(|e| CmdKitError::Other(e.into()))?;
            io.output().terminal().write_str(&format!("{}\n", json))?;
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["Style", "Foreground", "Background", "Options"])
            .with_style(TableStyle::Boxed)
            .with_header_style(Some("comment"));
        for (name, spec) in &styles {
            let options: Vec<String> = spec
                .options
                .iter()
                .map(|o| format!("{:?}", o).to_lowercase())
                .collect();
            table.add_row(&[
                format!("<{}>{}</>", name, name),
                spec.foreground.to_string(),
                spec.background.to_string(),
                options.join(", "),
            ]);
        }

        let lines = table.render(io.output().formatter());
        for line in &lines {
            io.writeln(line, None, None)?;
        }
        io.writeln(
            &format!("{} styles registered", styles.len()),
            Some("comment"),
            None,
        )?;

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::{run_command, InvocationContext};
    use crate::style::Color;
    use crate::ui::MockTerminal;

    #[test]
    fn lists_default_styles_in_a_table() {
        let mut term = MockTerminal::new();
        let result = run_command(
            &StylesCommand::new(StylesArgs { json: false }),
            &InvocationContext::default(),
            &mut term,
        );
        assert_eq!(result, CommandResult::success());
        for name in ["highlight", "success", "warning", "error", "info", "comment", "question"] {
            assert!(term.has_output(name), "missing {}", name);
        }
        assert!(term.has_output("┌"));
        assert!(term.has_output("white"));
        assert!(term.has_output("styles registered"));
    }

    #[test]
    fn json_includes_settings_styles() {
        let mut ctx = InvocationContext::default();
        ctx.styles
            .insert("brand".to_string(), StyleSpec::fg(Color::Magenta));

        let mut term = MockTerminal::new();
        run_command(&StylesCommand::new(StylesArgs { json: true }), &ctx, &mut term);

        let parsed: serde_json::Value = serde_json::from_str(term.output()).unwrap();
        assert_eq!(parsed["brand"]["foreground"], "magenta");
        assert_eq!(parsed["error"]["background"], "red");
    }
}
