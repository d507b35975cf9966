//! Titles, sections and blocks.

use console::measure_text_width;

use crate::error::Result;
use crate::style::{escape, escape_trailing_backslash};
use crate::ui::{create_block, BlockOptions};

use super::{Interact, SectionStyle};

/// One or more block messages.
pub trait IntoMessages {
    /// Collect into owned messages.
    fn into_messages(self) -> Vec<String>;
}

impl IntoMessages for &str {
    fn into_messages(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoMessages for String {
    fn into_messages(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoMessages for &String {
    fn into_messages(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoMessages for Vec<String> {
    fn into_messages(self) -> Vec<String> {
        self
    }
}

impl IntoMessages for Vec<&str> {
    fn into_messages(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoMessages for &[&str] {
    fn into_messages(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoMessages for &[String] {
    fn into_messages(self) -> Vec<String> {
        self.to_vec()
    }
}

impl<const N: usize> IntoMessages for [&str; N] {
    fn into_messages(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<'t> Interact<'t> {
    /// Write a title underlined with `=`.
    pub fn title(&mut self, message: &str) -> Result<()> {
        self.output.ensure_blank_line()?;
        let width = measure_text_width(&self.output.formatter().strip(message));
        self.output
            .writeln(&format!("<comment>{}</>", escape_trailing_backslash(message)))?;
        self.output
            .writeln(&format!("<comment>{}</>", "=".repeat(width)))?;
        self.output.new_line(1)
    }

    /// Write a level-one heading labelled `#` in the `comment` style.
    pub fn section(&mut self, message: &str) -> Result<()> {
        self.section_with(message, 1, Some("#"), "comment")
    }

    /// Write a heading.
    ///
    /// The message is trimmed and gets a final `.` when it ends in a word
    /// character. In the labelled style the label is repeated `level` times
    /// (at least once); the banner style ignores level and label.
    pub fn section_with(
        &mut self,
        message: &str,
        level: usize,
        label: Option<&str>,
        style: &str,
    ) -> Result<()> {
        let mut message = message.trim().to_string();
        if message
            .chars()
            .last()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            message.push('.');
        }

        match self.section_style {
            SectionStyle::Labeled => {
                let label = label
                    .filter(|l| !l.is_empty())
                    .map(|l| l.repeat(level.max(1)));
                self.block(
                    message,
                    BlockOptions::styled(style)
                        .label(label.as_deref())
                        .prefix(""),
                )
            }
            SectionStyle::Banner => {
                self.output.ensure_blank_line()?;
                let message = escape_trailing_backslash(&escape(&message));
                self.output
                    .writeln(&format!("<{}>» {}</>", style, message))?;
                self.output.new_line(1)
            }
        }
    }

    /// Write messages as a block.
    ///
    /// The block starts after a blank line and is followed by a newline.
    pub fn block(&mut self, messages: impl IntoMessages, options: BlockOptions) -> Result<()> {
        let messages = messages.into_messages();
        self.output.ensure_blank_line()?;

        let lines = create_block(
            &messages,
            &options,
            self.output.formatter(),
            self.output.line_length(),
        );
        for line in &lines {
            self.output.writeln(line)?;
        }
        self.output.new_line(1)
    }

    /// Padded block in the `highlight` style.
    pub fn highlight_block(
        &mut self,
        messages: impl IntoMessages,
        label: Option<&str>,
    ) -> Result<()> {
        self.block(messages, BlockOptions::highlight().label(label))
    }

    /// Padded block in the `success` style.
    pub fn success_block(
        &mut self,
        messages: impl IntoMessages,
        label: Option<&str>,
    ) -> Result<()> {
        self.block(messages, BlockOptions::success().label(label))
    }

    /// Padded block in the `warning` style.
    pub fn warning_block(
        &mut self,
        messages: impl IntoMessages,
        label: Option<&str>,
    ) -> Result<()> {
        self.block(messages, BlockOptions::warning().label(label))
    }

    /// Padded block in the `error` style.
    pub fn error_block(
        &mut self,
        messages: impl IntoMessages,
        label: Option<&str>,
    ) -> Result<()> {
        self.block(messages, BlockOptions::error().label(label))
    }
}
