//! Style tokens.

use std::borrow::Cow;
use std::fmt;

/// The ANSI sequence that ends every open style run.
pub const RESET: &str = "\x1b[0m";

/// Placeholder marking where CSS declarations apply in browser-like consoles.
pub const CSS_PLACEHOLDER: &str = "%c";

/// A visual style instruction, as opposed to printable content.
///
/// Tokens never carry text of their own. During a flush consecutive tokens are
/// concatenated and fused onto the next textual payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// A complete SGR escape sequence such as `"\x1b[31m"`.
    Ansi(Cow<'static, str>),
    /// The CSS placeholder, injected when CSS declarations were requested.
    CssPlaceholder,
}

impl StyleToken {
    /// The reset token produced by [`Console::apply`](crate::Console::apply).
    pub const RESET: StyleToken = StyleToken::Ansi(Cow::Borrowed(RESET));

    /// Creates a token from an escape sequence.
    pub fn ansi(sequence: impl Into<Cow<'static, str>>) -> Self {
        StyleToken::Ansi(sequence.into())
    }

    /// Returns the token's literal text.
    pub fn as_str(&self) -> &str {
        match self {
            StyleToken::Ansi(sequence) => sequence.as_ref(),
            StyleToken::CssPlaceholder => CSS_PLACEHOLDER,
        }
    }

    /// Whether this is the reset token.
    pub fn is_reset(&self) -> bool {
        matches!(self, StyleToken::Ansi(sequence) if sequence == RESET)
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for StyleToken {
    fn from(sequence: &'static str) -> Self {
        StyleToken::Ansi(Cow::Borrowed(sequence))
    }
}

impl From<String> for StyleToken {
    fn from(sequence: String) -> Self {
        StyleToken::Ansi(Cow::Owned(sequence))
    }
}
