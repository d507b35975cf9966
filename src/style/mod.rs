//! Named styles and inline markup.
//!
//! This module provides:
//! - [`StyleSpec`] - a foreground/background color pair plus options
//! - [`StyleRegistry`] - the per-invocation map from style name to spec
//! - [`Formatter`] - interpretation of `<name>...</name>` markup
//!
//! Style names are always stored and looked up in their canonical
//! snake_case form (see [`normalize_style_name`]).

pub mod formatter;

pub use formatter::{escape, escape_trailing_backslash, Formatter};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CmdKitError;

/// A terminal color usable as foreground or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Leave the terminal's color untouched.
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright-black",
            Self::BrightRed => "bright-red",
            Self::BrightGreen => "bright-green",
            Self::BrightYellow => "bright-yellow",
            Self::BrightBlue => "bright-blue",
            Self::BrightMagenta => "bright-magenta",
            Self::BrightCyan => "bright-cyan",
            Self::BrightWhite => "bright-white",
        }
    }

    /// The base console color and whether the bright variant is used.
    fn console_color(self) -> Option<(console::Color, bool)> {
        let pair = match self {
            Self::Default => return None,
            Self::Black => (console::Color::Black, false),
            Self::Red => (console::Color::Red, false),
            Self::Green => (console::Color::Green, false),
            Self::Yellow => (console::Color::Yellow, false),
            Self::Blue => (console::Color::Blue, false),
            Self::Magenta => (console::Color::Magenta, false),
            Self::Cyan => (console::Color::Cyan, false),
            Self::White => (console::Color::White, false),
            Self::BrightBlack => (console::Color::Black, true),
            Self::BrightRed => (console::Color::Red, true),
            Self::BrightGreen => (console::Color::Green, true),
            Self::BrightYellow => (console::Color::Yellow, true),
            Self::BrightBlue => (console::Color::Blue, true),
            Self::BrightMagenta => (console::Color::Magenta, true),
            Self::BrightCyan => (console::Color::Cyan, true),
            Self::BrightWhite => (console::Color::White, true),
        };
        Some(pair)
    }
}

impl FromStr for Color {
    type Err = CmdKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s.trim().to_lowercase().replace('_', "-").as_str() {
            "" | "default" => Self::Default,
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" | "bright-black" => Self::BrightBlack,
            "bright-red" => Self::BrightRed,
            "bright-green" => Self::BrightGreen,
            "bright-yellow" => Self::BrightYellow,
            "bright-blue" => Self::BrightBlue,
            "bright-magenta" => Self::BrightMagenta,
            "bright-cyan" => Self::BrightCyan,
            "bright-white" => Self::BrightWhite,
            _ => {
                return Err(CmdKitError::UnknownColor {
                    name: s.to_string(),
                })
            }
        };
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = CmdKitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.name().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text attributes applied on top of the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleOption {
    Bold,
    Dim,
    Italic,
    #[serde(alias = "underline")]
    Underscore,
    Blink,
    Reverse,
    Conceal,
}

impl FromStr for StyleOption {
    type Err = CmdKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bold" => Ok(Self::Bold),
            "dim" => Ok(Self::Dim),
            "italic" => Ok(Self::Italic),
            "underscore" | "underline" => Ok(Self::Underscore),
            "blink" => Ok(Self::Blink),
            "reverse" => Ok(Self::Reverse),
            "conceal" => Ok(Self::Conceal),
            other => Err(CmdKitError::Other(anyhow::anyhow!(
                "unknown style option: {}",
                other
            ))),
        }
    }
}

/// A foreground/background color pair with optional text attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    /// Text color.
    pub foreground: Color,
    /// Fill color.
    pub background: Color,
    /// Extra attributes (bold, underscore, ...).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<StyleOption>,
}

impl StyleSpec {
    /// Create a spec from a color pair.
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            options: Vec::new(),
        }
    }

    /// Foreground only.
    pub fn fg(foreground: Color) -> Self {
        Self::new(foreground, Color::Default)
    }

    /// Add an attribute.
    pub fn with_option(mut self, option: StyleOption) -> Self {
        if !self.options.contains(&option) {
            self.options.push(option);
        }
        self
    }

    /// Parse an inline definition such as `fg=red;bg=blue;options=bold`.
    ///
    /// Returns `None` when the string is not a valid inline definition.
    pub fn from_inline(definition: &str) -> Option<Self> {
        let mut spec = Self::default();
        let mut matched = false;

        for part in definition.split(';') {
            let (key, value) = part.split_once('=')?;
            match key.trim() {
                "fg" => spec.foreground = value.parse().ok()?,
                "bg" => spec.background = value.parse().ok()?,
                "options" => {
                    for option in value.split(',') {
                        spec = spec.with_option(option.parse().ok()?);
                    }
                }
                _ => return None,
            }
            matched = true;
        }

        matched.then_some(spec)
    }

    /// Build the `console` style that renders this spec.
    pub fn to_console_style(&self) -> console::Style {
        let mut style = console::Style::new();

        if let Some((color, bright)) = self.foreground.console_color() {
            style = style.fg(color);
            if bright {
                style = style.bright();
            }
        }
        if let Some((color, bright)) = self.background.console_color() {
            style = style.bg(color);
            if bright {
                style = style.on_bright();
            }
        }

        for option in &self.options {
            style = match option {
                StyleOption::Bold => style.bold(),
                StyleOption::Dim => style.dim(),
                StyleOption::Italic => style.italic(),
                StyleOption::Underscore => style.underlined(),
                StyleOption::Blink => style.blink(),
                StyleOption::Reverse => style.reverse(),
                StyleOption::Conceal => style.hidden(),
            };
        }

        style
    }
}

impl fmt::Display for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.foreground, self.background)?;
        if !self.options.is_empty() {
            let names: Vec<String> = self
                .options
                .iter()
                .map(|o| format!("{:?}", o).to_lowercase())
                .collect();
            write!(f, " ({})", names.join(", "))?;
        }
        Ok(())
    }
}

/// Normalize a style name to snake_case.
///
/// `HighLight`, `highLight`, `high-light`, `high light` and `high_light`
/// all become `high_light`.
pub fn normalize_style_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for ch in name.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        } else if ch.is_uppercase() {
            if matches!(prev, Some(p) if p.is_lowercase() || p.is_ascii_digit())
                && !out.ends_with('_')
            {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Styles every formatter knows about, before any helper registration.
pub fn base_styles() -> Vec<(&'static str, StyleSpec)> {
    vec![
        ("info", StyleSpec::fg(Color::Green)),
        ("comment", StyleSpec::fg(Color::Yellow)),
        ("question", StyleSpec::new(Color::Black, Color::Cyan)),
        ("error", StyleSpec::new(Color::White, Color::Red)),
    ]
}

/// Block styles registered by the command helper.
pub fn default_styles() -> Vec<(&'static str, StyleSpec)> {
    vec![
        ("highlight", StyleSpec::new(Color::Black, Color::White)),
        ("success", StyleSpec::new(Color::Black, Color::Green)),
        ("warning", StyleSpec::new(Color::Black, Color::Yellow)),
        ("error", StyleSpec::new(Color::White, Color::Red)),
    ]
}

/// Map from canonical style name to its spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: BTreeMap<String, StyleSpec>,
}

impl StyleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the base formatter styles and the helper defaults.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.merge(base_styles());
        registry.merge(default_styles());
        registry
    }

    /// Register a style, replacing any style with the same canonical name.
    pub fn set(&mut self, name: &str, spec: StyleSpec) {
        let key = normalize_style_name(name);
        tracing::trace!(style = %key, spec = %spec, "registering style");
        self.styles.insert(key, spec);
    }

    /// Register every entry, later entries replacing earlier ones.
    pub fn merge<I, K>(&mut self, styles: I)
    where
        I: IntoIterator<Item = (K, StyleSpec)>,
        K: AsRef<str>,
    {
        for (name, spec) in styles {
            self.set(name.as_ref(), spec);
        }
    }

    /// Look up a style by any casing of its name.
    pub fn get(&self, name: &str) -> Option<&StyleSpec> {
        self.styles.get(&normalize_style_name(name))
    }

    /// Whether a style with this name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate styles ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleSpec)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_casing_conventions() {
        assert_eq!(normalize_style_name("highlight"), "highlight");
        assert_eq!(normalize_style_name("HighLight"), "high_light");
        assert_eq!(normalize_style_name("highLight"), "high_light");
        assert_eq!(normalize_style_name("high-light"), "high_light");
        assert_eq!(normalize_style_name("high light"), "high_light");
        assert_eq!(normalize_style_name("  high__light_ "), "high_light");
        assert_eq!(normalize_style_name("Error"), "error");
    }

    #[test]
    fn defaults_contain_block_styles() {
        let registry = StyleRegistry::with_defaults();
        assert_eq!(
            registry.get("highlight"),
            Some(&StyleSpec::new(Color::Black, Color::White))
        );
        assert_eq!(
            registry.get("success"),
            Some(&StyleSpec::new(Color::Black, Color::Green))
        );
        assert_eq!(
            registry.get("warning"),
            Some(&StyleSpec::new(Color::Black, Color::Yellow))
        );
        assert_eq!(
            registry.get("error"),
            Some(&StyleSpec::new(Color::White, Color::Red))
        );
        assert!(registry.has("info"));
        assert!(registry.has("comment"));
    }

    #[test]
    fn override_replaces_default() {
        let mut registry = StyleRegistry::with_defaults();
        registry.merge([("success", StyleSpec::new(Color::White, Color::Blue))]);
        assert_eq!(
            registry.get("success"),
            Some(&StyleSpec::new(Color::White, Color::Blue))
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = StyleRegistry::new();
        registry.set("BigAlert", StyleSpec::fg(Color::Red));
        assert!(registry.has("big_alert"));
        assert!(registry.has("big-alert"));
        assert!(registry.has("bigAlert"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn color_parsing() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("bright_blue".parse::<Color>().unwrap(), Color::BrightBlue);
        assert_eq!("".parse::<Color>().unwrap(), Color::Default);
        assert!(matches!(
            "octarine".parse::<Color>(),
            Err(CmdKitError::UnknownColor { .. })
        ));
    }

    #[test]
    fn inline_definition_parsing() {
        let spec = StyleSpec::from_inline("fg=red;bg=blue;options=bold,underscore").unwrap();
        assert_eq!(spec.foreground, Color::Red);
        assert_eq!(spec.background, Color::Blue);
        assert_eq!(spec.options, vec![StyleOption::Bold, StyleOption::Underscore]);

        assert!(StyleSpec::from_inline("info").is_none());
        assert!(StyleSpec::from_inline("fg=nope").is_none());
        assert!(StyleSpec::from_inline("size=3").is_none());
    }

    #[test]
    fn spec_deserializes_from_yaml() {
        let spec: StyleSpec =
            serde_yaml::from_str("foreground: white\nbackground: magenta\noptions: [bold]")
                .unwrap();
        assert_eq!(spec.foreground, Color::White);
        assert_eq!(spec.background, Color::Magenta);
        assert_eq!(spec.options, vec![StyleOption::Bold]);
    }

    #[test]
    fn spec_missing_colors_default() {
        let spec: StyleSpec = serde_yaml::from_str("foreground: red").unwrap();
        assert_eq!(spec.background, Color::Default);
    }

    #[test]
    fn display_shows_pair() {
        let spec = StyleSpec::new(Color::Black, Color::Green).with_option(StyleOption::Bold);
        assert_eq!(spec.to_string(), "black/green (bold)");
    }
}
