//! Inline markup formatter.
//!
//! Interprets `<name>text</name>`, `<name>text</>` and inline
//! `<fg=red;bg=blue;options=bold>text</>` tags. Tags that resolve to no
//! style are emitted literally, and `\<` always renders a literal `<`.

use std::sync::LazyLock;

use regex::Regex;

use super::{StyleRegistry, StyleSpec};

/// Opening or closing style tag.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)([a-z][^<>]*)?>").expect("TAG_REGEX must compile")
});

/// Renders markup using a style registry.
#[derive(Debug, Clone)]
pub struct Formatter {
    styles: StyleRegistry,
    decorated: bool,
}

impl Formatter {
    /// Create a formatter. With `decorated` off, tags are removed instead
    /// of rendered.
    pub fn new(styles: StyleRegistry, decorated: bool) -> Self {
        Self { styles, decorated }
    }

    /// Whether ANSI styling is emitted.
    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Enable or disable ANSI styling.
    pub fn set_decorated(&mut self, decorated: bool) {
        self.decorated = decorated;
    }

    /// The registry backing tag lookups.
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Mutable access to the registry.
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Render markup for the terminal.
    pub fn format(&self, message: &str) -> String {
        self.render(message, self.decorated)
    }

    /// Remove all recognised markup, leaving the visible text.
    pub fn strip(&self, message: &str) -> String {
        self.render(message, false)
    }

    fn render(&self, message: &str, decorated: bool) -> String {
        let mut out = String::with_capacity(message.len());
        let mut stack: Vec<StyleSpec> = Vec::new();
        let mut offset = 0;

        for caps in TAG_REGEX.captures_iter(message) {
            let Some(tag) = caps.get(0) else { continue };
            let pos = tag.start();

            if pos > 0 && message.as_bytes()[pos - 1] == b'\\' {
                continue;
            }

            push_segment(&mut out, &message[offset..pos], stack.last(), decorated);
            offset = tag.end();

            let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
            let name = caps.get(2).map(|m| m.as_str());

            let handled = match (closing, name) {
                (true, None) => {
                    stack.pop();
                    true
                }
                (true, Some(name)) => {
                    let known = self.resolve(name).is_some();
                    if known {
                        stack.pop();
                    }
                    known
                }
                (false, Some(name)) => match self.resolve(name) {
                    Some(spec) => {
                        stack.push(spec);
                        true
                    }
                    None => false,
                },
                (false, None) => false,
            };

            if !handled {
                push_segment(&mut out, tag.as_str(), stack.last(), decorated);
            }
        }

        push_segment(&mut out, &message[offset..], stack.last(), decorated);
        out
    }

    fn resolve(&self, name: &str) -> Option<StyleSpec> {
        if let Some(spec) = self.styles.get(name) {
            return Some(spec.clone());
        }
        StyleSpec::from_inline(name)
    }
}

fn push_segment(out: &mut String, text: &str, style: Option<&StyleSpec>, decorated: bool) {
    if text.is_empty() {
        return;
    }

    let text = text.replace("\\<", "<").replace('\0', "\\");
    match style {
        Some(spec) if decorated => {
            let styled = spec
                .to_console_style()
                .force_styling(true)
                .apply_to(text)
                .to_string();
            out.push_str(&styled);
        }
        _ => out.push_str(&text),
    }
}

/// Escape `<` so the text renders literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if ch == '<' && prev != Some('\\') {
            out.push('\\');
        }
        out.push(ch);
        prev = Some(ch);
    }
    out
}

/// Protect trailing backslashes so they cannot escape a tag appended after
/// the text.
///
/// They are held as NUL placeholders that rendering turns back into `\`.
pub fn escape_trailing_backslash(text: &str) -> String {
    let trimmed = text.trim_end_matches('\\');
    let count = text.len() - trimmed.len();
    if count == 0 {
        return text.to_string();
    }

    let mut out = trimmed.replace('\0', "");
    out.push_str(&"\0".repeat(count));
    out
}
