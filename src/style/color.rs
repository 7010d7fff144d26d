//! True-color conversion for custom hex and RGB colors.

use std::fmt;
use std::str::FromStr;

use super::error::StyleError;
use super::token::StyleToken;

/// The SGR channel a true color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Text color, SGR parameter 38.
    Foreground,
    /// Background color, SGR parameter 48.
    Background,
}

impl Channel {
    /// The SGR parameter selecting this channel.
    pub fn code(self) -> u8 {
        match self {
            Channel::Foreground => 38,
            Channel::Background => 48,
        }
    }
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses `#RRGGBB` or `#RGB`. The leading `#` is optional.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stylog::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#5AC981").unwrap(), Rgb(90, 201, 129));
    /// assert_eq!(Rgb::from_hex("fa0").unwrap(), Rgb(255, 170, 0));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidHex {
            input: hex.to_string(),
        };

        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            6 => Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                // Each shorthand digit is doubled: "a" -> "aa"
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Ok(Rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    /// Builds the true-color escape token for the given channel.
    pub fn to_token(self, channel: Channel) -> StyleToken {
        let Rgb(r, g, b) = self;
        StyleToken::from(format!("\x1b[{};2;{};{};{}m", channel.code(), r, g, b))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Converts a hex color to a true-color escape token.
///
/// # Example
///
/// ```rust
/// use stylog::{hex_to_ansi, Channel};
///
/// let token = hex_to_ansi("#5AC981", Channel::Foreground).unwrap();
/// assert_eq!(token.as_str(), "\x1b[38;2;90;201;129m");
/// ```
///
/// # Errors
///
/// Returns [`StyleError::InvalidHex`] if `hex` is not a valid color.
pub fn hex_to_ansi(hex: &str, channel: Channel) -> Result<StyleToken, StyleError> {
    Rgb::from_hex(hex).map(|rgb| rgb.to_token(channel))
}
