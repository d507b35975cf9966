//! Library integration tests.

use cmdkit::cli::{run_command, Command, CommandResult, InvocationContext};
use cmdkit::interact::Interact;
use cmdkit::style::{Color, StyleSpec};
use cmdkit::ui::{MockTerminal, OutputType};
use cmdkit::CmdKitError;

#[test]
fn error_types_are_public() {
    let err = CmdKitError::InvalidChoice {
        value: "purple".into(),
    };
    assert_eq!(err.to_string(), "Value \"purple\" is invalid");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cmdkit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use cmdkit::cli::{Cli, Commands};

    let cli = Cli::parse_from(["cmdkit", "styles", "--json"]);
    if let Some(Commands::Styles(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Styles command");
    }
}

/// A command with its own styles that asks one validated question.
struct Deploy;

impl Command for Deploy {
    fn format_styles(&self) -> Vec<(String, StyleSpec)> {
        vec![
            ("target".to_string(), StyleSpec::fg(Color::Cyan)),
            ("error".to_string(), StyleSpec::new(Color::Black, Color::Magenta)),
        ]
    }

    fn execute(&self, io: &mut Interact) -> cmdkit::Result<CommandResult> {
        io.section("Deploy")?;
        let target = io.choice("Target?", &["staging", "production"], None, Some(2), false, None)?;
        io.write(target.as_string().as_str(), Some("target"), None)?;
        io.new_line(1)?;
        Ok(CommandResult::success())
    }
}

#[test]
fn command_styles_override_defaults() {
    let mut term = MockTerminal::with_answers(["1"]);
    let ctx = InvocationContext {
        output_type: OutputType::Raw,
        ..InvocationContext::default()
    };
    let result = run_command(&Deploy, &ctx, &mut term);
    assert!(result.success);
    assert!(term.has_output("<target>production</target>"));
}

#[test]
fn exhausted_choice_exits_one() {
    let mut term = MockTerminal::with_answers(["mars", "venus", "staging"]);
    let result = run_command(&Deploy, &InvocationContext::default(), &mut term);
    assert_eq!(result, CommandResult::failure(1));
    assert_eq!(term.reads(), 2);
    assert!(term.has_output("Value \"venus\" is invalid"));
    assert!(term.has_output("Entered incorrect information multiple times."));
}
