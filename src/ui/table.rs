//! Table rendering for formatted output.
//!
//! Cells may contain markup; column widths are measured on the visible
//! text.

use console::measure_text_width;

use crate::style::Formatter;

/// Border drawing for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Box-drawing borders around every cell.
    Boxed,
    /// No vertical borders; optional `-` rules above and below.
    Compact { rules: bool },
}

/// A simple table for formatted output.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    style: TableStyle,
    header_style: Option<String>,
    horizontal: bool,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.as_ref().to_string()).collect(),
            rows: Vec::new(),
            style: TableStyle::Boxed,
            header_style: None,
            horizontal: false,
        }
    }

    /// Set the border style.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap header cells in a markup style.
    pub fn with_header_style(mut self, style: Option<&str>) -> Self {
        self.header_style = style.map(str::to_string);
        self
    }

    /// Render headers as the first column, one row per header.
    pub fn horizontal(mut self) -> Self {
        self.horizontal = true;
        self
    }

    /// Add a row to the table.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        self.rows
            .push(row.iter().map(|s| s.as_ref().to_string()).collect());
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as lines of markup.
    pub fn render(&self, formatter: &Formatter) -> Vec<String> {
        let header = self.styled_headers();
        let (header_row, body) = if self.horizontal {
            let rows: Vec<Vec<String>> = header
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let mut row = vec![h.clone()];
                    row.extend(
                        self.rows
                            .iter()
                            .map(|r| r.get(i).cloned().unwrap_or_default()),
                    );
                    row
                })
                .collect();
            (None, rows)
        } else {
            (Some(header), self.rows.clone())
        };

        let columns = header_row
            .iter()
            .chain(body.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in header_row.iter().chain(body.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(measure_text_width(&formatter.strip(cell)));
            }
        }

        match self.style {
            TableStyle::Boxed => render_boxed(&widths, header_row.as_deref(), &body, formatter),
            TableStyle::Compact { rules } => {
                render_compact(&widths, header_row.as_deref(), &body, rules, formatter)
            }
        }
    }

    fn styled_headers(&self) -> Vec<String> {
        match &self.header_style {
            Some(style) => self
                .headers
                .iter()
                .map(|h| format!("<{}>{}</>", style, h))
                .collect(),
            None => self.headers.clone(),
        }
    }
}

fn pad(cell: &str, width: usize, formatter: &Formatter) -> String {
    let visible = measure_text_width(&formatter.strip(cell));
    format!("{}{}", cell, " ".repeat(width.saturating_sub(visible)))
}

fn render_row(widths: &[usize], row: &[String], separator: &str, formatter: &Formatter) -> String {
    let mut s = String::from(separator);
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
        s.push(' ');
        s.push_str(&pad(cell, *width, formatter));
        s.push(' ');
        s.push_str(separator);
    }
    s
}

fn render_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut s = String::new();
    s.push(left);

    for (i, width) in widths.iter().enumerate() {
        s.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            s.push(mid);
        }
    }

    s.push(right);
    s
}

fn render_boxed(
    widths: &[usize],
    header: Option<&[String]>,
    body: &[Vec<String>],
    formatter: &Formatter,
) -> Vec<String> {
    let mut lines = vec![render_border(widths, '┌', '┬', '┐')];
    if let Some(header) = header {
        lines.push(render_row(widths, header, "│", formatter));
        lines.push(render_border(widths, '├', '┼', '┤'));
    }
    for row in body {
        lines.push(render_row(widths, row, "│", formatter));
    }
    lines.push(render_border(widths, '└', '┴', '┘'));
    lines
}

fn render_compact(
    widths: &[usize],
    header: Option<&[String]>,
    body: &[Vec<String>],
    rules: bool,
    formatter: &Formatter,
) -> Vec<String> {
    let total: usize = widths.iter().map(|w| w + 2).sum();
    let rule = "-".repeat(total);

    let mut lines = Vec::new();
    if rules {
        lines.push(rule.clone());
    }
    if let Some(header) = header {
        lines.push(render_row(widths, header, "", formatter));
        if rules {
            lines.push(rule.clone());
        }
    }
    for row in body {
        lines.push(render_row(widths, row, "", formatter));
    }
    if rules {
        lines.push(rule);
    }
    lines
}
