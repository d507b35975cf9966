//! Bullet glyphs and list numbering.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named bullet glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bullet {
    Disc,
    Circle,
    Square,
    DoubleLeftArrow,
    DoubleRightArrow,
}

impl Bullet {
    /// All named bullets.
    pub const ALL: [Bullet; 5] = [
        Self::Disc,
        Self::Circle,
        Self::Square,
        Self::DoubleLeftArrow,
        Self::DoubleRightArrow,
    ];

    /// Display glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Disc => "•",
            Self::Circle => "○",
            Self::Square => "■",
            Self::DoubleLeftArrow => "«",
            Self::DoubleRightArrow => "»",
        }
    }

    /// Symbolic name accepted by [`Bullet::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Disc => "disc",
            Self::Circle => "circle",
            Self::Square => "square",
            Self::DoubleLeftArrow => "double-left-arrow",
            Self::DoubleRightArrow => "double-right-arrow",
        }
    }

    /// Look up a bullet by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Map a symbolic bullet name to its glyph.
///
/// Unrecognised names are returned unchanged, so any string works as a
/// literal glyph.
pub fn bullet(name: &str) -> &str {
    match Bullet::from_name(name) {
        Some(b) => b.glyph(),
        None => name,
    }
}

/// Marker placed in front of each list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSymbol {
    /// A bullet name or literal glyph.
    Bullet(String),
    /// Auto-incrementing numbers starting at the given value.
    Numbered(i64),
}

impl Default for ListSymbol {
    fn default() -> Self {
        Self::Bullet(Bullet::Circle.name().to_string())
    }
}

impl ListSymbol {
    /// Marker for the item at `index` (zero-based).
    pub fn marker(&self, index: usize) -> String {
        match self {
            Self::Bullet(name) => bullet(name).to_string(),
            Self::Numbered(start) => format!("{}.", i128::from(*start) + index as i128),
        }
    }
}

impl FromStr for ListSymbol {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(n) => Self::Numbered(n),
            Err(_) => Self::Bullet(s.to_string()),
        })
    }
}

impl From<&str> for ListSymbol {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(symbol) => symbol,
            Err(never) => match never {},
        }
    }
}

impl From<Bullet> for ListSymbol {
    fn from(b: Bullet) -> Self {
        Self::Bullet(b.name().to_string())
    }
}

impl From<i64> for ListSymbol {
    fn from(start: i64) -> Self {
        Self::Numbered(start)
    }
}

impl fmt::Display for ListSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bullet(name) => f.write_str(bullet(name)),
            Self::Numbered(start) => write!(f, "{}.", start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bullets_map_to_glyphs() {
        assert_eq!(bullet("disc"), "•");
        assert_eq!(bullet("circle"), "○");
        assert_eq!(bullet("square"), "■");
        assert_eq!(bullet("double-left-arrow"), "«");
        assert_eq!(bullet("double-right-arrow"), "»");
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(bullet("unknown-name"), "unknown-name");
        assert_eq!(bullet("*"), "*");
        assert_eq!(bullet(""), "");
    }

    #[test]
    fn all_bullets_round_trip_by_name() {
        for b in Bullet::ALL {
            assert_eq!(Bullet::from_name(b.name()), Some(b));
        }
    }

    #[test]
    fn numeric_symbol_is_numbered() {
        assert_eq!(ListSymbol::from("3"), ListSymbol::Numbered(3));
        assert_eq!(ListSymbol::from("square"), ListSymbol::Bullet("square".into()));
    }

    #[test]
    fn markers_increment_for_numbered_lists() {
        let symbol = ListSymbol::Numbered(1);
        assert_eq!(symbol.marker(0), "1.");
        assert_eq!(symbol.marker(2), "3.");

        let symbol = ListSymbol::from(Bullet::Disc);
        assert_eq!(symbol.marker(5), "•");
    }

    #[test]
    fn numbering_past_i64_max_keeps_counting() {
        let symbol = ListSymbol::Numbered(i64::MAX);
        assert_eq!(symbol.marker(0), "9223372036854775807.");
        assert_eq!(symbol.marker(1), "9223372036854775808.");
        assert_eq!(ListSymbol::Numbered(i64::MIN).marker(1), "-9223372036854775807.");
    }

    #[test]
    fn default_symbol_is_circle() {
        assert_eq!(ListSymbol::default().marker(0), "○");
    }
}
