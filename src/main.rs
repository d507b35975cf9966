//! cmdkit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use cmdkit::cli::{Cli, CommandDispatcher, InvocationContext};
use cmdkit::config::load_config;
use cmdkit::ui::{ConsoleTerminal, Terminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with command output.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cmdkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cmdkit=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cmdkit starting with args: {:?}", cli);

    let cwd = std::env::current_dir().unwrap_or_default();
    let config = match load_config(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let terminal = ConsoleTerminal::new();
    let ctx = InvocationContext::resolve(&cli, &config, terminal.is_decorated());
    let mut terminal = terminal.with_decorated(ctx.decorated);

    let dispatcher = CommandDispatcher::new(ctx);
    let result = dispatcher.dispatch(&cli, &mut terminal);
    ExitCode::from(result.exit_code.clamp(0, 255) as u8)
}
