//! The fixed table of named styles.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::StyleError;
use super::token::{StyleToken, RESET};

/// Which channel a named style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Foreground,
    Background,
    Decoration,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StyleKind::Foreground => "foreground",
            StyleKind::Background => "background",
            StyleKind::Decoration => "decoration",
        };
        f.write_str(name)
    }
}

/// A named color, available for both foreground and background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Crimson,
}

impl Color {
    /// Every named color, in table order.
    pub const ALL: [Color; 10] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::Crimson,
    ];

    /// The lowercase name used by [`StyleTable::lookup`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::Crimson => "crimson",
        }
    }

    /// Escape sequence setting this color as the text color.
    pub fn foreground(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
            Color::Gray => "\x1b[90m",
            Color::Crimson => "\x1b[38;5;161m",
        }
    }

    /// Escape sequence setting this color as the background.
    pub fn background(self) -> &'static str {
        match self {
            Color::Black => "\x1b[40m",
            Color::Red => "\x1b[41m",
            Color::Green => "\x1b[42m",
            Color::Yellow => "\x1b[43m",
            Color::Blue => "\x1b[44m",
            Color::Magenta => "\x1b[45m",
            Color::Cyan => "\x1b[46m",
            Color::White => "\x1b[47m",
            Color::Gray => "\x1b[100m",
            Color::Crimson => "\x1b[48;5;161m",
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .ok_or_else(|| StyleError::UnknownColor {
                name: name.to_string(),
            })
    }
}

/// A settable text decoration.
///
/// Reset is not settable by name. It is only produced by
/// [`Console::apply`](crate::Console::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bright,
    Dim,
    Underscore,
    Blink,
    Reverse,
    Hidden,
}

impl Decoration {
    /// Every settable decoration, in table order.
    pub const ALL: [Decoration; 6] = [
        Decoration::Bright,
        Decoration::Dim,
        Decoration::Underscore,
        Decoration::Blink,
        Decoration::Reverse,
        Decoration::Hidden,
    ];

    /// The lowercase name used by [`StyleTable::lookup`].
    pub fn name(self) -> &'static str {
        match self {
            Decoration::Bright => "bright",
            Decoration::Dim => "dim",
            Decoration::Underscore => "underscore",
            Decoration::Blink => "blink",
            Decoration::Reverse => "reverse",
            Decoration::Hidden => "hidden",
        }
    }

    /// Escape sequence enabling this decoration.
    pub fn sequence(self) -> &'static str {
        match self {
            Decoration::Bright => "\x1b[1m",
            Decoration::Dim => "\x1b[2m",
            Decoration::Underscore => "\x1b[4m",
            Decoration::Blink => "\x1b[5m",
            Decoration::Reverse => "\x1b[7m",
            Decoration::Hidden => "\x1b[8m",
        }
    }
}

impl FromStr for Decoration {
    type Err = StyleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Decoration::ALL
            .into_iter()
            .find(|decoration| decoration.name() == name)
            .ok_or_else(|| StyleError::UnknownName {
                kind: StyleKind::Decoration,
                name: name.to_string(),
            })
    }
}

const RESET_NAME: &str = "reset";

type Names = HashMap<&'static str, &'static str>;

static TABLE: Lazy<HashMap<StyleKind, Names>> = Lazy::new(|| {
    let mut foreground = Names::new();
    let mut background = Names::new();
    for color in Color::ALL {
        foreground.insert(color.name(), color.foreground());
        background.insert(color.name(), color.background());
    }
    let mut decoration: Names = Decoration::ALL
        .into_iter()
        .map(|decoration| (decoration.name(), decoration.sequence()))
        .collect();
    decoration.insert(RESET_NAME, RESET);

    HashMap::from([
        (StyleKind::Foreground, foreground),
        (StyleKind::Background, background),
        (StyleKind::Decoration, decoration),
    ])
});

/// Read-only lookup from symbolic names to style tokens.
///
/// # Example
///
/// ```rust
/// use stylog::{StyleKind, StyleTable};
///
/// let red = StyleTable::lookup(StyleKind::Foreground, "red").unwrap();
/// assert_eq!(red.as_str(), "\x1b[31m");
///
/// // Reset exists in the table but cannot be set by name.
/// assert!(StyleTable::lookup(StyleKind::Decoration, "reset").is_err());
/// assert_eq!(StyleTable::reset().as_str(), "\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleTable;

impl StyleTable {
    /// Resolves a named style for the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Reserved`] for `"reset"` and
    /// [`StyleError::UnknownName`] for names not in the table.
    pub fn lookup(kind: StyleKind, name: &str) -> Result<StyleToken, StyleError> {
        if kind == StyleKind::Decoration && name == RESET_NAME {
            return Err(StyleError::Reserved {
                name: name.to_string(),
            });
        }
        TABLE
            .get(&kind)
            .and_then(|names| names.get(name))
            .map(|sequence| StyleToken::from(*sequence))
            .ok_or_else(|| StyleError::UnknownName {
                kind,
                name: name.to_string(),
            })
    }

    /// The reserved reset token.
    pub fn reset() -> StyleToken {
        StyleToken::from(RESET)
    }

    /// Number of entries in the table, reset included.
    pub fn len() -> usize {
        TABLE.values().map(HashMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_foreground_and_background() {
        for color in Color::ALL {
            let fg = StyleTable::lookup(StyleKind::Foreground, color.name()).unwrap();
            let bg = StyleTable::lookup(StyleKind::Background, color.name()).unwrap();
            assert_eq!(fg.as_str(), color.foreground());
            assert_eq!(bg.as_str(), color.background());
            assert_ne!(fg, bg);
        }
    }

    #[test]
    fn test_lookup_decorations() {
        for decoration in Decoration::ALL {
            let token = StyleTable::lookup(StyleKind::Decoration, decoration.name()).unwrap();
            assert_eq!(token.as_str(), decoration.sequence());
        }
    }

    #[test]
    fn test_lookup_reset_is_reserved() {
        let err = StyleTable::lookup(StyleKind::Decoration, "reset").unwrap_err();
        assert!(matches!(err, StyleError::Reserved { .. }));
        assert!(StyleTable::reset().is_reset());
    }

    #[test]
    fn test_lookup_unknown_name() {
        let err = StyleTable::lookup(StyleKind::Foreground, "teal").unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownName {
                kind: StyleKind::Foreground,
                name: "teal".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_wrong_kind() {
        assert!(StyleTable::lookup(StyleKind::Decoration, "red").is_err());
        assert!(StyleTable::lookup(StyleKind::Foreground, "dim").is_err());
    }

    #[test]
    fn test_table_size() {
        assert_eq!(StyleTable::len(), 10 * 2 + 6 + 1);
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("crimson".parse::<Color>().unwrap(), Color::Crimson);
        assert_eq!(
            "Crimson".parse::<Color>(),
            Err(StyleError::UnknownColor {
                name: "Crimson".to_string()
            })
        );
        assert_eq!("blink".parse::<Decoration>().unwrap(), Decoration::Blink);
        assert!("reset".parse::<Decoration>().is_err());
    }
}
