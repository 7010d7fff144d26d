//! Pending statements and the ANSI merge algorithm.
//!
//! A [`Statement`] records, in call order, the style tokens and payload values
//! appended by the builder, plus any CSS declaration groups. Flushing a
//! statement [merges](Statement::merge) it into the final argument list:
//!
//! 1. CSS, if requested, becomes a placeholder token at the front and the
//!    joined declarations as a trailing payload.
//! 2. Consecutive style tokens stack into one prefix that is fused onto the
//!    next textual payload. Structured and opaque payloads pass through
//!    untouched and leave the prefix pending.
//! 3. A leftover prefix is emitted on its own.
//! 4. If the final entry is a lone reset token (a leftover prefix, or a reset
//!    fused onto empty text) and the entry before it is text, the reset is
//!    appended to that text instead.
//!
//! # Example
//!
//! ```rust
//! use stylog::{Statement, StyleToken, Value};
//!
//! let mut statement = Statement::new();
//! statement
//!     .prepare(Some(StyleToken::from("\x1b[31m")), vec![Value::from("hello")])
//!     .prepare(Some(StyleToken::RESET), Vec::new());
//!
//! assert_eq!(statement.merge(), vec![Value::from("\x1b[31mhello\x1b[0m")]);
//! ```

use std::mem;

use crate::css::DECLARATION_SEPARATOR;
use crate::style::{StyleToken, RESET};
use crate::value::Value;

/// One entry of a pending statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Style(StyleToken),
    Payload(Value),
}

/// Style tokens and payloads accumulated since the last flush.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    items: Vec<Item>,
    /// `None` until the first CSS group is added.
    css: Option<Vec<String>>,
}

impl Statement {
    /// Creates an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an optional style token followed by `values`.
    ///
    /// With no token and no values this is a no-op.
    pub fn prepare(&mut self, style: Option<StyleToken>, values: Vec<Value>) -> &mut Self {
        if let Some(token) = style {
            self.items.push(Item::Style(token));
        }
        self.items.extend(values.into_iter().map(Item::Payload));
        self
    }

    /// Appends a joined declaration group.
    pub fn push_css(&mut self, group: String) -> &mut Self {
        self.css.get_or_insert_with(Vec::new).push(group);
        self
    }

    /// The pending items, in call order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The pending declaration groups, or `None` if CSS was never requested.
    pub fn css(&self) -> Option<&[String]> {
        self.css.as_deref()
    }

    /// Whether nothing has been recorded since creation or the last take.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.css.is_none()
    }

    /// Moves the pending state out, leaving an empty statement behind.
    pub fn take(&mut self) -> Statement {
        mem::take(self)
    }

    /// Consumes the statement and produces the final argument list.
    pub fn merge(self) -> Vec<Value> {
        let Statement { mut items, css } = self;

        if let Some(groups) = css.filter(|groups| !groups.is_empty()) {
            items.insert(0, Item::Style(StyleToken::CssPlaceholder));
            items.push(Item::Payload(Value::Text(
                groups.join(DECLARATION_SEPARATOR),
            )));
        }

        merge_items(items)
    }
}

/// Runs the merge walk over already ordered items.
///
/// See the [module documentation](self) for the rules.
pub fn merge_items<I>(items: I) -> Vec<Value>
where
    I: IntoIterator<Item = Item>,
{
    let mut output = Vec::new();
    let mut prefix = String::new();
    // Set while the last entry is a lone reset token with no text fused on.
    let mut trailing_reset = false;

    for item in items {
        match item {
            Item::Style(token) => prefix.push_str(token.as_str()),
            Item::Payload(Value::Text(text)) => {
                trailing_reset = text.is_empty() && prefix == RESET;
                let mut fused = mem::take(&mut prefix);
                fused.push_str(&text);
                output.push(Value::Text(fused));
            }
            Item::Payload(other) => {
                trailing_reset = false;
                output.push(other);
            }
        }
    }

    if !prefix.is_empty() {
        trailing_reset = prefix == RESET;
        output.push(Value::Text(prefix));
    }

    if trailing_reset && matches!(output.iter().rev().nth(1), Some(Value::Text(_))) {
        output.pop();
        if let Some(Value::Text(last)) = output.last_mut() {
            last.push_str(RESET);
        }
    }

    output
}
