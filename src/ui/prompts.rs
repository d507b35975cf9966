//! Prompt requests: free-text, hidden and choice questions.
//!
//! These types only describe a question and how its answers are checked.
//! Reading input and the retry loop live in [`crate::interact`].

use std::fmt;

use crate::style::{escape, escape_trailing_backslash};

/// Checks an answer, returning the accepted value or a rejection message.
pub type Validator = Box<dyn Fn(&str) -> Result<String, String>>;

/// Rewrites a raw answer before it is matched.
pub type Normalizer = Box<dyn Fn(&str) -> String>;

/// Cue shown where the operator types.
pub const INPUT_CUE: &str = " > ";

/// A free-text question.
pub struct Question {
    /// The question to display.
    pub text: String,
    /// Answer used when the operator just presses enter.
    pub default: Option<String>,
    /// Optional answer check.
    pub validator: Option<Validator>,
    /// Maximum number of answers before giving up (`None` = unlimited).
    pub max_attempts: Option<usize>,
    /// Read without echo.
    pub hidden: bool,
    /// Read visibly when the terminal cannot hide input.
    pub hidden_fallback: bool,
    /// Trim surrounding whitespace from answers.
    pub trimmable: bool,
}

impl Question {
    /// Create a visible question without default or validator.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            default: None,
            validator: None,
            max_attempts: None,
            hidden: false,
            hidden_fallback: true,
            trimmable: true,
        }
    }

    /// Set the default answer.
    pub fn default_answer(mut self, default: Option<&str>) -> Self {
        self.default = default.map(str::to_string);
        self
    }

    /// Set the validator.
    pub fn validator(mut self, validator: Option<Validator>) -> Self {
        self.validator = validator;
        self
    }

    /// Limit the number of attempts. `Some(0)` is treated as one attempt.
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts.map(|m| m.max(1));
        self
    }

    /// Hide the answer, optionally falling back to visible input.
    pub fn hidden(mut self, fallback: bool) -> Self {
        self.hidden = true;
        self.hidden_fallback = fallback;
        self
    }

    /// Keep surrounding whitespace in answers.
    pub fn keep_whitespace(mut self) -> Self {
        self.trimmable = false;
        self
    }

    /// Markup line introducing the question.
    pub fn render_prompt(&self) -> String {
        match &self.default {
            Some(default) if !self.hidden => format!(
                " <info>{}</info> [<comment>{}</comment>]:",
                literal(&self.text),
                literal(default)
            ),
            _ => format!(" <info>{}</info>:", literal(&self.text)),
        }
    }

    /// Apply trimming and the default to a raw answer.
    pub fn resolve_raw(&self, raw: &str) -> String {
        let answer = if self.trimmable { raw.trim() } else { raw };
        match &self.default {
            Some(default) if answer.is_empty() => default.clone(),
            _ => answer.to_string(),
        }
    }

    /// Run the validator, if any.
    pub fn validate(&self, answer: &str) -> Result<String, String> {
        match &self.validator {
            Some(validator) => validator(answer),
            None => Ok(answer.to_string()),
        }
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("text", &self.text)
            .field("default", &self.default)
            .field("validator", &self.validator.is_some())
            .field("max_attempts", &self.max_attempts)
            .field("hidden", &self.hidden)
            .field("hidden_fallback", &self.hidden_fallback)
            .field("trimmable", &self.trimmable)
            .finish()
    }
}

/// A question answered by picking from a list.
pub struct ChoiceQuestion {
    /// The question to display.
    pub text: String,
    /// Candidates, addressed by value or zero-based index.
    pub choices: Vec<String>,
    /// Default value or index (comma-separated for multi-select).
    pub default: Option<String>,
    /// Accept several comma-separated entries.
    pub multiselect: bool,
    /// Maximum number of answers before giving up (`None` = unlimited).
    pub max_attempts: Option<usize>,
    /// Applied to the raw answer before matching.
    pub normalizer: Option<Normalizer>,
    /// Rejection message; `{}` is replaced by the offending entry.
    pub error_message: String,
}

impl ChoiceQuestion {
    /// Create a single-select question.
    pub fn new<S: AsRef<str>>(text: &str, choices: &[S]) -> Self {
        Self {
            text: text.to_string(),
            choices: choices.iter().map(|c| c.as_ref().to_string()).collect(),
            default: None,
            multiselect: false,
            max_attempts: None,
            normalizer: None,
            error_message: "Value \"{}\" is invalid".to_string(),
        }
    }

    /// Set the default value or index.
    pub fn default_answer(mut self, default: Option<&str>) -> Self {
        self.default = default.map(str::to_string);
        self
    }

    /// Allow several entries.
    pub fn multiselect(mut self, multiselect: bool) -> Self {
        self.multiselect = multiselect;
        self
    }

    /// Limit the number of attempts. `Some(0)` is treated as one attempt.
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts.map(|m| m.max(1));
        self
    }

    /// Set the normalizer.
    pub fn normalizer(mut self, normalizer: Option<Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Set the rejection message template.
    pub fn error_message(mut self, template: &str) -> Self {
        self.error_message = template.to_string();
        self
    }

    /// Markup lines introducing the question and listing the choices.
    pub fn render_prompt(&self) -> Vec<String> {
        let mut lines = vec![match self.display_default() {
            Some(default) => format!(
                " <info>{}</info> [<comment>{}</comment>]:",
                literal(&self.text),
                literal(&default)
            ),
            None => format!(" <info>{}</info>:", literal(&self.text)),
        }];

        let width = self.choices.len().saturating_sub(1).to_string().len();
        for (i, choice) in self.choices.iter().enumerate() {
            lines.push(format!(
                "  [<comment>{:<width$}</comment>] {}",
                i,
                literal(choice),
                width = width
            ));
        }
        lines
    }

    /// Default shown next to the question, with indexes replaced by values.
    pub fn display_default(&self) -> Option<String> {
        let default = self.default.as_deref()?;
        let parts: Vec<&str> = if self.multiselect {
            default.split(',').map(str::trim).collect()
        } else {
            vec![default]
        };

        let shown: Vec<String> = parts
            .into_iter()
            .map(|part| self.lookup(part).unwrap_or(part).to_string())
            .collect();
        Some(shown.join(", "))
    }

    /// Apply the default and the normalizer to a raw answer.
    pub fn resolve_raw(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let answer = match &self.default {
            Some(default) if trimmed.is_empty() => default.as_str(),
            _ => trimmed,
        };
        match &self.normalizer {
            Some(normalizer) => normalizer(answer),
            None => answer.to_string(),
        }
    }

    /// Match an answer against the choices.
    ///
    /// Entries match a choice by value first, then by index.
    pub fn select(&self, answer: &str) -> Result<Vec<String>, String> {
        let entries: Vec<&str> = if self.multiselect {
            let parts: Vec<&str> = answer.split(',').collect();
            if parts.iter().any(|p| p.trim().is_empty()) {
                return Err(self.reject(answer));
            }
            parts
        } else {
            vec![answer]
        };

        let mut selected = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.trim();

            let matches = self.choices.iter().filter(|c| c.as_str() == entry).count();
            if matches > 1 {
                return Err(format!(
                    "The provided answer is ambiguous. Value should be one of \"{}\".",
                    self.choices.join("\" or \"")
                ));
            }

            match self.lookup(entry) {
                Some(choice) => selected.push(choice.to_string()),
                None => return Err(self.reject(entry)),
            }
        }

        Ok(selected)
    }

    fn lookup(&self, entry: &str) -> Option<&str> {
        if let Some(choice) = self.choices.iter().find(|c| c.as_str() == entry) {
            return Some(choice);
        }
        entry
            .parse::<usize>()
            .ok()
            .and_then(|i| self.choices.get(i))
            .map(String::as_str)
    }

    fn reject(&self, entry: &str) -> String {
        self.error_message.replace("{}", entry)
    }
}

impl fmt::Debug for ChoiceQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceQuestion")
            .field("text", &self.text)
            .field("choices", &self.choices)
            .field("default", &self.default)
            .field("multiselect", &self.multiselect)
            .field("max_attempts", &self.max_attempts)
            .field("normalizer", &self.normalizer.is_some())
            .finish()
    }
}

/// Result of a choice prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Single-select result.
    Single(String),
    /// Multi-select results, in the order given.
    Multiple(Vec<String>),
}

impl Answer {
    /// Selected values joined by `, `.
    pub fn as_string(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Multiple(v) => v.join(", "),
        }
    }

    /// Selected values as a list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Multiple(v) => v,
        }
    }

    /// The value of a single-select answer.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multiple(_) => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Text placed inside prompt markup, rendered literally.
pub(crate) fn literal(text: &str) -> String {
    escape_trailing_backslash(&escape(text))
}
