//! The `greet` command: a short interactive session.

use crate::cli::args::GreetArgs;
use crate::error::Result;
use crate::interact::Interact;
use crate::style::{Color, StyleOption, StyleSpec};
use crate::ui::{Answer, ListItems, Validator};

use super::dispatcher::{Command, CommandResult};

const COLORS: [&str; 4] = ["red", "green", "blue", "yellow"];

/// The greet command implementation.
pub struct GreetCommand {
    args: GreetArgs,
}

impl GreetCommand {
    /// Create a new greet command.
    pub fn new(args: GreetArgs) -> Self {
        Self { args }
    }
}

fn required(label: &'static str) -> Validator {
    Box::new(move |answer: &str| {
        if answer.trim().is_empty() {
            Err(format!("{} cannot be empty", label))
        } else {
            Ok(answer.trim().to_string())
        }
    })
}

impl Command for GreetCommand {
    fn format_styles(&self) -> Vec<(String, StyleSpec)> {
        vec![(
            "name".to_string(),
            StyleSpec::fg(Color::Cyan).with_option(StyleOption::Bold),
        )]
    }

    fn execute(&self, io: &mut Interact) -> Result<CommandResult> {
        io.title("Hello there")?;

        let name = io.ask(
            "What is your name?",
            self.args.name.as_deref(),
            Some(required("Name")),
            self.args.attempts,
        )?;

        let secret = if self.args.secret {
            Some(io.secret(
                "Pick a secret word",
                true,
                Some(required("Secret word")),
                self.args.attempts,
            )?)
        } else {
            None
        };

        let colors = io.choice(
            "Favourite color?",
            &COLORS,
            Some("0"),
            self.args.attempts,
            self.args.multiple,
            Some(Box::new(|answer: &str| answer.to_lowercase())),
        )?;

        let mut summary = vec![
            ("Name".to_string(), name.clone()),
            ("Colors".to_string(), colors.as_string()),
        ];
        if let Some(secret) = &secret {
            summary.push(("Secret".to_string(), "*".repeat(secret.chars().count())));
        }

        if io.confirm("Show a summary?", true)? {
            io.section("Summary")?;
            io.write_list(ListItems::from_pairs(summary), "disc", Some("info"), false)?;
        }

        let favourite = match &colors {
            Answer::Single(color) => color.clone(),
            Answer::Multiple(colors) => colors.first().cloned().unwrap_or_default(),
        };
        io.success_block(
            format!("Hello, {}! Enjoy all things {}.", name, favourite),
            Some("OK"),
        )?;

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::{run_command, InvocationContext};
    use crate::interact::CANCEL_MESSAGE;
    use crate::ui::MockTerminal;

    fn run(args: GreetArgs, answers: &[&str], interactive: bool) -> (CommandResult, MockTerminal) {
        let mut term = MockTerminal::with_answers(answers.iter().copied());
        let ctx = InvocationContext {
            interactive,
            ..InvocationContext::default()
        };
        let result = run_command(&GreetCommand::new(args), &ctx, &mut term);
        (result, term)
    }

    #[test]
    fn greets_with_answers() {
        let (result, term) = run(GreetArgs::default(), &["Ada", "blue", "y"], true);
        assert_eq!(result, CommandResult::success());
        assert!(term.has_output("Selected: blue"));
        assert!(term.has_output("[#] Summary."));
        assert!(term.has_output("• Name"));
        assert!(term.has_output("Hello, Ada! Enjoy all things blue."));
    }

    #[test]
    fn multiple_colors_are_joined() {
        let args = GreetArgs {
            multiple: true,
            ..GreetArgs::default()
        };
        let (result, term) = run(args, &["Ada", "Red,2", "n"], true);
        assert_eq!(result.exit_code, 0);
        assert!(term.has_output("Selected: red, blue"));
        assert!(!term.has_output("Summary"));
        assert!(term.has_output("things red."));
    }

    #[test]
    fn blank_names_exhaust_attempts() {
        let args = GreetArgs {
            attempts: Some(2),
            ..GreetArgs::default()
        };
        let (result, term) = run(args, &["", " ", "late"], true);
        assert_eq!(result, CommandResult::failure(1));
        assert_eq!(term.reads(), 2);
        assert_eq!(term.output().matches("Name cannot be empty").count(), 2);
        assert!(term.has_output(CANCEL_MESSAGE));
        assert!(!term.has_output("Hello, "));
    }

    #[test]
    fn non_interactive_uses_defaults() {
        let args = GreetArgs {
            name: Some("Grace".to_string()),
            ..GreetArgs::default()
        };
        let (result, term) = run(args, &[], false);
        assert_eq!(result.exit_code, 0);
        assert_eq!(term.reads(), 0);
        assert!(term.has_output("Selected: red"));
        assert!(term.has_output("Hello, Grace! Enjoy all things red."));
    }

    #[test]
    fn secret_is_masked_in_summary() {
        let args = GreetArgs {
            secret: true,
            ..GreetArgs::default()
        };
        let (result, term) = run(args, &["Ada", "swordfish", "", ""], true);
        assert_eq!(result.exit_code, 0);
        assert_eq!(term.secret_reads(), 1);
        assert!(!term.has_output("swordfish"));
        assert!(term.has_output("*********"));
    }
}
