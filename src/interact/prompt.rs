//! Prompts with validation and bounded retries.

use crate::error::{CmdKitError, Result};
use crate::ui::prompts::literal;
use crate::ui::{Answer, ChoiceQuestion, Normalizer, Question, Validator, INPUT_CUE};

use super::Interact;

/// Shown when a prompt gives up after its last failed attempt.
pub const CANCEL_MESSAGE: &str =
    "Entered incorrect information multiple times. Cancel the action.";

/// Outcome of one attempt: an accepted value or a rejection message.
type Attempt<T> = std::result::Result<T, String>;

impl<'t> Interact<'t> {
    /// Ask a free-text question.
    ///
    /// An empty answer yields `default` (or the empty string). A failing
    /// validator prints its message in an error block and asks again, at
    /// most `max_attempts` times in total.
    ///
    /// # Errors
    ///
    /// [`CmdKitError::AttemptsExhausted`] after the last rejected answer,
    /// [`CmdKitError::MissingInput`] when input ends, and
    /// [`CmdKitError::NonInteractive`] when non-interactive with no default.
    pub fn ask(
        &mut self,
        question: &str,
        default: Option<&str>,
        validator: Option<Validator>,
        max_attempts: Option<usize>,
    ) -> Result<String> {
        let question = Question::new(question)
            .default_answer(default)
            .validator(validator)
            .max_attempts(max_attempts);
        self.ask_question(&question)
    }

    /// Ask a question without echoing the answer.
    ///
    /// With `fallback`, a terminal that cannot hide input reads visibly
    /// instead; otherwise that is an error.
    pub fn secret(
        &mut self,
        question: &str,
        fallback: bool,
        validator: Option<Validator>,
        max_attempts: Option<usize>,
    ) -> Result<String> {
        let question = Question::new(question)
            .hidden(fallback)
            .validator(validator)
            .max_attempts(max_attempts);
        self.ask_question(&question)
    }

    /// Ask a prepared [`Question`].
    pub fn ask_question(&mut self, question: &Question) -> Result<String> {
        if !self.interactive {
            return question
                .default
                .clone()
                .ok_or_else(|| CmdKitError::NonInteractive {
                    question: question.text.clone(),
                });
        }

        self.output.ensure_blank_line()?;
        self.attempt_loop(question.max_attempts, |io| {
            io.output.writeln(&question.render_prompt())?;
            let raw = io.read_answer(question.hidden, question.hidden_fallback)?;
            Ok(question.validate(&question.resolve_raw(&raw)))
        })
    }

    /// Ask the operator to pick from `choices`.
    ///
    /// Entries match a choice by value or by zero-based index; with
    /// `multiple`, several comma-separated entries are accepted. The
    /// normalizer rewrites the raw answer before matching. The selection
    /// is confirmed in a `Selected: ...` block.
    pub fn choice<S: AsRef<str>>(
        &mut self,
        question: &str,
        choices: &[S],
        default: Option<&str>,
        max_attempts: Option<usize>,
        multiple: bool,
        normalizer: Option<Normalizer>,
    ) -> Result<Answer> {
        let question = ChoiceQuestion::new(question, choices)
            .default_answer(default)
            .max_attempts(max_attempts)
            .multiselect(multiple)
            .normalizer(normalizer);
        self.choice_question(&question)
    }

    /// Ask a prepared [`ChoiceQuestion`].
    pub fn choice_question(&mut self, question: &ChoiceQuestion) -> Result<Answer> {
        let selected = if self.interactive {
            self.output.ensure_blank_line()?;
            self.attempt_loop(question.max_attempts, |io| {
                for line in question.render_prompt() {
                    io.output.writeln(&line)?;
                }
                let raw = io.read_answer(false, false)?;
                Ok(question.select(&question.resolve_raw(&raw)))
            })?
        } else {
            let default = question
                .default
                .as_deref()
                .ok_or_else(|| CmdKitError::NonInteractive {
                    question: question.text.clone(),
                })?;
            question
                .select(default)
                .map_err(|_| CmdKitError::InvalidChoice {
                    value: default.to_string(),
                })?
        };

        let answer = if question.multiselect {
            Answer::Multiple(selected)
        } else {
            Answer::Single(selected.into_iter().next().unwrap_or_default())
        };

        self.block(format!("Selected: {}", answer.as_string()), Default::default())?;
        Ok(answer)
    }

    /// Ask a yes/no question.
    ///
    /// An empty answer yields `default`; answers starting with `y` (any
    /// case) are yes, anything else is no.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            return Ok(default);
        }

        self.output.ensure_blank_line()?;
        let hint = if default { "yes" } else { "no" };
        self.output.writeln(&format!(
            " <info>{} (yes/no)</info> [<comment>{}</comment>]:",
            literal(question),
            hint
        ))?;

        let raw = match self.read_answer(false, false) {
            Err(CmdKitError::MissingInput) => return self.abort(CmdKitError::MissingInput),
            other => other?,
        };
        self.output.new_line(1)?;

        let answer = raw.trim();
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.starts_with(['y', 'Y']))
    }

    /// Run attempts until one is accepted or the budget is spent.
    fn attempt_loop<T>(
        &mut self,
        max_attempts: Option<usize>,
        mut attempt: impl FnMut(&mut Self) -> Result<Attempt<T>>,
    ) -> Result<T> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match attempt(self) {
                Ok(Ok(value)) => {
                    self.output.new_line(1)?;
                    return Ok(value);
                }
                Ok(Err(message)) => {
                    tracing::debug!(attempt = attempts, reason = %message, "answer rejected");
                    self.error_block(message, Some("ERROR"))?;
                    if max_attempts.is_some_and(|max| attempts >= max) {
                        return self.abort(CmdKitError::AttemptsExhausted { attempts });
                    }
                }
                Err(CmdKitError::MissingInput) => return self.abort(CmdKitError::MissingInput),
                Err(e) => return Err(e),
            }
        }
    }

    /// Report a prompt that cannot be answered and return `error`.
    fn abort<T>(&mut self, error: CmdKitError) -> Result<T> {
        let message = match &error {
            CmdKitError::AttemptsExhausted { .. } => CANCEL_MESSAGE.to_string(),
            other => other.to_string(),
        };
        tracing::debug!(error = %error, "prompt aborted");
        self.error_block(message, Some("ERROR"))?;
        Err(error)
    }

    /// Read one answer line, hidden when requested.
    fn read_answer(&mut self, hidden: bool, fallback: bool) -> Result<String> {
        let terminal = self.output.terminal();
        let answer = if !hidden {
            terminal.read_line(INPUT_CUE)?
        } else if terminal.can_hide_input() {
            terminal.read_secret(INPUT_CUE)?
        } else if fallback {
            tracing::debug!("hidden input unavailable, reading visibly");
            terminal.read_line(INPUT_CUE)?
        } else {
            return Err(CmdKitError::HiddenInputUnavailable);
        };
        self.output.record_input_line();
        answer.ok_or(CmdKitError::MissingInput)
    }
}
