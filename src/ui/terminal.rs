//! Terminal backed by `console` and `dialoguer`.

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::theme::Theme;
use dialoguer::{Input, Password};

use crate::error::{CmdKitError, Result};

use super::Terminal;

/// Width used when neither `COLUMNS` nor the terminal reports one.
const DEFAULT_WIDTH: usize = 80;

/// Convert dialoguer errors to CmdKitError.
fn map_dialoguer_err(e: dialoguer::Error) -> CmdKitError {
    CmdKitError::Io(e.into())
}

/// Dialoguer theme that prints the cue exactly as given.
struct CueTheme;

impl Theme for CueTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}", prompt)
    }

    fn format_password_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        write!(f, "{}", prompt)
    }
}

/// Where answers are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputSource {
    /// dialoguer, prompting on stdout.
    Stdout,
    /// dialoguer, prompting on stderr while stdout is redirected.
    Stderr,
    /// stdin read line by line.
    Piped,
}

/// Pick the input source from which standard streams are terminals.
///
/// Answers always come from stdin, so a redirected stdin is read as piped
/// lines even when stdout is a terminal.
fn input_source(stdin_tty: bool, stdout_tty: bool, stderr_tty: bool) -> InputSource {
    match (stdin_tty, stdout_tty, stderr_tty) {
        (false, _, _) => InputSource::Piped,
        (true, true, _) => InputSource::Stdout,
        (true, false, true) => InputSource::Stderr,
        (true, false, false) => InputSource::Piped,
    }
}

/// Standard output terminal reading answers from stdin.
///
/// When stdin is a TTY, lines are read through dialoguer (with hidden
/// input for secrets). Otherwise stdin is read line by line, which keeps
/// piped answers working.
pub struct ConsoleTerminal {
    term: Term,
    decorated: bool,
}

impl ConsoleTerminal {
    /// Create a terminal on stdout, decorating when colors are enabled.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            decorated: should_use_colors(),
        }
    }

    /// Override color detection.
    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Terminal dialoguer prompts on, or `None` for piped input.
    fn prompt_term(&self) -> Option<Term> {
        let stderr = Term::stderr();
        match input_source(
            io::stdin().is_terminal(),
            self.term.is_term(),
            stderr.is_term(),
        ) {
            InputSource::Stdout => Some(self.term.clone()),
            InputSource::Stderr => Some(stderr),
            InputSource::Piped => None,
        }
    }

    fn read_piped(&mut self, cue: &str) -> Result<Option<String>> {
        self.write_str(cue)?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }

        // Piped input is not echoed, keep the transcript on separate lines.
        self.write_str("\n")?;
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.term.write_all(text.as_bytes())?;
        self.term.flush()?;
        Ok(())
    }

    fn read_line(&mut self, cue: &str) -> Result<Option<String>> {
        let Some(term) = self.prompt_term() else {
            return self.read_piped(cue);
        };

        let answer: String = Input::with_theme(&CueTheme)
            .with_prompt(cue)
            .allow_empty(true)
            .report(false)
            .interact_text_on(&term)
            .map_err(map_dialoguer_err)?;
        Ok(Some(answer))
    }

    fn read_secret(&mut self, cue: &str) -> Result<Option<String>> {
        let Some(term) = self.prompt_term() else {
            return Err(CmdKitError::HiddenInputUnavailable);
        };

        let answer = Password::with_theme(&CueTheme)
            .with_prompt(cue)
            .allow_empty_password(true)
            .report(false)
            .interact_on(&term)
            .map_err(map_dialoguer_err)?;
        Ok(Some(answer))
    }

    fn can_hide_input(&self) -> bool {
        self.prompt_term().is_some()
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn width(&self) -> usize {
        if let Some(columns) = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|w| *w > 0)
        {
            return columns;
        }

        self.term
            .size_checked()
            .map(|(_, cols)| cols as usize)
            .unwrap_or(DEFAULT_WIDTH)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    Term::stdout().is_term()
}
