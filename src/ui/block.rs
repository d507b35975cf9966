//! Block layout: wrapped, labelled, padded regions of styled text.

use console::measure_text_width;

use crate::style::{escape, escape_trailing_backslash, Formatter};

/// How a block is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockOptions {
    /// Shown as `[LABEL] ` on the first line.
    pub label: Option<String>,
    /// Style name wrapped around every line.
    pub style: Option<String>,
    /// Text in front of every line.
    pub prefix: String,
    /// Add an empty line above and below (decorated output only).
    pub padding: bool,
    /// Escape markup in the messages.
    pub escape: bool,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            label: None,
            style: None,
            prefix: " ".to_string(),
            padding: false,
            escape: true,
        }
    }
}

impl BlockOptions {
    /// Options for a block in the given style.
    pub fn styled(style: &str) -> Self {
        Self {
            style: Some(style.to_string()),
            ..Self::default()
        }
    }

    /// Padded block in the `highlight` style.
    pub fn highlight() -> Self {
        Self::styled("highlight").padding(true)
    }

    /// Padded block in the `success` style.
    pub fn success() -> Self {
        Self::styled("success").padding(true)
    }

    /// Padded block in the `warning` style.
    pub fn warning() -> Self {
        Self::styled("warning").padding(true)
    }

    /// Padded block in the `error` style.
    pub fn error() -> Self {
        Self::styled("error").padding(true)
    }

    /// Set the label.
    pub fn label(mut self, label: Option<&str>) -> Self {
        self.label = label.map(str::to_string);
        self
    }

    /// Set the prefix.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Set padding.
    pub fn padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    /// Set escaping.
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}

/// Lay out `messages` as block lines (still containing markup).
///
/// Every line is right-padded to `line_length` visible columns. Multiple
/// messages are separated by an empty line. Escaping happens per wrapped
/// line, so a cut never separates `\` from the `<` it protects.
pub fn create_block(
    messages: &[String],
    options: &BlockOptions,
    formatter: &Formatter,
    line_length: usize,
) -> Vec<String> {
    let prefix_width = measure_text_width(&formatter.strip(&options.prefix));
    let label = options.label.as_ref().map(|l| format!("[{}] ", l));
    let indent_width = label.as_deref().map(measure_text_width).unwrap_or(0);
    let indentation = " ".repeat(indent_width);
    let wrap_width = line_length.saturating_sub(prefix_width + indent_width).max(1);

    let mut lines: Vec<String> = Vec::new();
    for (i, message) in messages.iter().enumerate() {
        let wrapped = wrap_text(message, wrap_width).into_iter();
        if options.escape {
            lines.extend(wrapped.map(|line| escape(&line)));
        } else {
            lines.extend(wrapped);
        }
        if messages.len() > 1 && i < messages.len() - 1 {
            lines.push(String::new());
        }
    }

    let mut first_line = 0;
    if options.padding && formatter.is_decorated() {
        first_line = 1;
        lines.insert(0, String::new());
        lines.push(String::new());
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let mut line = match &label {
                Some(label) if i == first_line => format!("{}{}", label, line),
                Some(_) => format!("{}{}", indentation, line),
                None => line,
            };
            line.insert_str(0, &options.prefix);

            let visible = measure_text_width(&formatter.strip(&line));
            line.push_str(&" ".repeat(line_length.saturating_sub(visible)));

            match &options.style {
                Some(style) => format!("<{}>{}</>", style, escape_trailing_backslash(&line)),
                None => line,
            }
        })
        .collect()
}

/// Wrap text at word boundaries, cutting words longer than `width`.
///
/// Existing line breaks are kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in source_line.split(' ') {
            let word_width = measure_text_width(word);

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 || !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            let mut chunk = String::new();
            let mut chunk_width = 0;
            for ch in word.chars() {
                let ch_width = measure_text_width(ch.encode_utf8(&mut [0; 4]));
                if chunk_width + ch_width > width && !chunk.is_empty() {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(ch);
                chunk_width += ch_width;
            }
            current = chunk;
            current_width = chunk_width;
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleRegistry;

    fn formatter(decorated: bool) -> Formatter {
        Formatter::new(StyleRegistry::with_defaults(), decorated)
    }

    #[test]
    fn wrap_keeps_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_breaks_at_spaces() {
        assert_eq!(
            wrap_text("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_cuts_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_keeps_line_breaks() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn block_pads_lines_to_width() {
        let lines = create_block(
            &["hi".to_string()],
            &BlockOptions::default(),
            &formatter(false),
            10,
        );
        assert_eq!(lines, vec![" hi       "]);
    }

    #[test]
    fn block_label_on_first_line_indent_after() {
        let options = BlockOptions::styled("error").label(Some("ERROR"));
        let lines = create_block(
            &["first".to_string(), "second".to_string()],
            &options,
            &formatter(false),
            20,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("<error> [ERROR] first{}</>", " ".repeat(6)));
        assert_eq!(lines[1], format!("<error>{}</>", " ".repeat(20)));
        assert_eq!(
            lines[2],
            format!("<error>{}second{}</>", " ".repeat(9), " ".repeat(5))
        );
    }

    #[test]
    fn block_escapes_markup_by_default() {
        let lines = create_block(
            &["<error>x</error>".to_string()],
            &BlockOptions::default(),
            &formatter(false),
            30,
        );
        assert!(lines[0].starts_with(" \\<error>x\\</error>"));
        assert_eq!(formatter(false).format(&lines[0]).trim_end(), " <error>x</error>");
    }

    #[test]
    fn cut_words_never_expose_escaped_tags() {
        let message = format!("{}<error>x", "a".repeat(10));
        let lines = create_block(&[message], &BlockOptions::default(), &formatter(false), 12);
        let rendered: Vec<String> = lines.iter().map(|l| formatter(false).format(l)).collect();
        assert_eq!(rendered, vec![" aaaaaaaaaa<", " error>x    "]);
    }

    #[test]
    fn trailing_backslash_in_full_styled_line() {
        let options = BlockOptions::styled("info").prefix("");
        let lines = create_block(&["C:\\dir\\".to_string()], &options, &formatter(false), 7);
        assert_eq!(formatter(false).format(&lines[0]), "C:\\dir\\");
    }

    #[test]
    fn block_without_escape_keeps_markup() {
        let options = BlockOptions::default().escape(false);
        let lines = create_block(&["<info>x</info>".to_string()], &options, &formatter(false), 10);
        assert_eq!(formatter(false).format(&lines[0]), " x        ");
    }

    #[test]
    fn padding_only_applies_when_decorated() {
        let options = BlockOptions::styled("success").padding(true);
        let plain = create_block(&["ok".to_string()], &options, &formatter(false), 10);
        assert_eq!(plain.len(), 1);

        let decorated = create_block(&["ok".to_string()], &options, &formatter(true), 10);
        assert_eq!(decorated.len(), 3);
        assert_eq!(decorated[0], "<success>          </>");
    }

    #[test]
    fn long_messages_wrap_inside_label_indent() {
        let options = BlockOptions::default().label(Some("!")).prefix("");
        let lines = create_block(
            &["aaaa bbbb cccc".to_string()],
            &options,
            &formatter(false),
            13,
        );
        assert_eq!(lines, vec!["[!] aaaa bbbb", "    cccc     "]);
    }
}
