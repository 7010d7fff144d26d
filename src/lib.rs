//! Chainable, styled console output.
//!
//! `stylog` builds a log statement from left to right, attaching ANSI styles
//! (named colors, true colors, decorations) or CSS declarations to each piece,
//! then flushes everything in one call.
//!
//! # Core concepts
//!
//! - [`Console`]: The builder and flush engine, owned by its caller
//! - [`Statement`]: The style tokens and payloads pending since the last flush
//! - [`StyleToken`]: A tagged style instruction, never confused with payload text
//! - [`Value`] and [`IntoArgs`]: Payload values and variadic argument lists
//! - [`Sink`]: Where flushed output goes ([`TermSink`], [`MemorySink`])
//! - [`FormatOptions`]: Options for the printf-style formatter
//!
//! # Example
//!
//! ```rust
//! use stylog::{Color, Console, Decoration, MemorySink};
//!
//! let mut console = Console::new(MemorySink::new());
//! console
//!     .raw("build")
//!     .fg(Color::Green, "passed")
//!     .apply()
//!     .decoration(Decoration::Dim, "in 3s")
//!     .apply()
//!     .log(())
//!     .unwrap();
//!
//! assert_eq!(
//!     console.sink().last().unwrap().text(),
//!     "build \x1b[32mpassed \x1b[0m\x1b[2min 3s\x1b[0m"
//! );
//! ```
//!
//! A style called without payloads is armed for the next text appended by any
//! later call:
//!
//! ```rust
//! use stylog::{Color, Console, MemorySink};
//!
//! let mut console = Console::new(MemorySink::new());
//! console.fg(Color::Red, ()).log("hello").unwrap();
//! assert_eq!(console.sink().last().unwrap().text(), "\x1b[31mhello");
//! ```
//!
//! Terminal output uses [`Console::stdout`]:
//!
//! ```rust,no_run
//! use stylog::Console;
//!
//! let mut console = Console::stdout();
//! console.fg_hex("#5AC981", "custom").apply().log(())?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod css;
pub mod format;
pub mod sink;
pub mod style;

mod console;
mod statement;
mod value;

pub use console::Console;
pub use format::{format_with_options, ConfigError, FormatOptions, DEFAULT_FORMAT_OPTIONS};
pub use sink::{Call, MemorySink, Method, Sink, TermSink};
pub use statement::{merge_items, Item, Statement};
pub use style::{
    hex_to_ansi, Channel, Color, Decoration, Rgb, StyleError, StyleKind, StyleTable, StyleToken,
    RESET,
};
pub use value::{IntoArgs, Value};
