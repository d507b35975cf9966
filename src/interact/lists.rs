//! Bulleted, numbered and key/value lists.

use crate::error::Result;
use crate::ui::{bullet, ListItems, ListSymbol, Table, TableStyle};

use super::Interact;

impl<'t> Interact<'t> {
    /// Render items as a horizontal list.
    ///
    /// Sequences put one marker above each value. Key/value items put the
    /// marker and key in the first column, a `:` in the second and the
    /// value in the third. `style` wraps markers, keys and colons; `border`
    /// adds `-` rules above and below. A newline follows the list.
    pub fn write_list(
        &mut self,
        items: impl Into<ListItems>,
        symbol: impl Into<ListSymbol>,
        style: Option<&str>,
        border: bool,
    ) -> Result<()> {
        let items = items.into();
        let symbol = symbol.into();
        if items.is_empty() {
            return self.output.new_line(1);
        }

        let mut table;
        match &items {
            ListItems::Sequence(values) => {
                let headers: Vec<String> = (0..values.len()).map(|i| symbol.marker(i)).collect();
                table = Table::new(&headers);
                table.add_row(values);
            }
            ListItems::Assoc(pairs) => {
                let headers: Vec<String> = pairs
                    .iter()
                    .enumerate()
                    .map(|(i, (key, _))| format!("{} {}", symbol.marker(i), key))
                    .collect();
                let colon = match style {
                    Some(style) => format!("<{}>:</{}>", style, style),
                    None => ":".to_string(),
                };
                let values: Vec<&str> = pairs.iter().map(|(_, v)| v.as_str()).collect();

                table = Table::new(&headers);
                table.add_row(&vec![colon; pairs.len()]);
                table.add_row(&values);
            }
        }

        let lines = table
            .with_style(TableStyle::Compact { rules: border })
            .with_header_style(style)
            .horizontal()
            .render(self.output.formatter());
        for line in &lines {
            self.output.writeln(line)?;
        }
        self.output.new_line(1)
    }

    /// Render items with circle bullets in the `info` style.
    pub fn list(&mut self, items: impl Into<ListItems>) -> Result<()> {
        self.write_list(items, ListSymbol::default(), Some("info"), false)
    }

    /// Glyph for a bullet name; unknown names are returned unchanged.
    pub fn bullet<'a>(&self, name: &'a str) -> &'a str {
        bullet(name)
    }
}
