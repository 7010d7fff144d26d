//! Style table and style tokens.
//!
//! This module provides the styling primitives the statement builder works with:
//!
//! - [`StyleToken`]: An opaque style instruction (ANSI escape or CSS placeholder)
//! - [`Color`] and [`Decoration`]: The fixed set of named styles
//! - [`StyleTable`]: Name based lookup for the generic "apply named style" entry point
//! - [`Rgb`] and [`hex_to_ansi`]: True-color conversion for custom colors
//! - [`StyleError`]: Errors from name and hex resolution
//!
//! Tokens are tagged values rather than plain strings, so a payload that happens
//! to look like an escape sequence is never mistaken for a style instruction.

mod color;
mod error;
mod table;
mod token;

pub use color::{hex_to_ansi, Channel, Rgb};
pub use error::StyleError;
pub use table::{Color, Decoration, StyleKind, StyleTable};
pub use token::{StyleToken, CSS_PLACEHOLDER, RESET};
