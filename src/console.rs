//! The chainable console.
//!
//! A [`Console`] owns a pending [`Statement`] and an output [`Sink`]. Builder
//! methods append style tokens and payloads and return `&mut Self` so calls
//! chain left to right in the order their styles apply. A terminating call
//! ([`log`](Console::log), [`info`](Console::info), [`group`](Console::group),
//! [`group_collapsed`](Console::group_collapsed)) merges the statement, emits
//! it, and resets all pending state, whether or not the sink succeeds.
//!
//! Each console is owned by its caller; independent statements should use
//! independent consoles.

use std::fmt;

use tracing::{trace, warn};

use crate::css::declaration_group;
use crate::format::{format_with_options, FormatOptions, DEFAULT_FORMAT_OPTIONS};
use crate::sink::{Method, Sink, TermSink};
use crate::statement::Statement;
use crate::style::{Channel, Color, Decoration, Rgb, StyleKind, StyleTable, StyleToken};
use crate::value::{IntoArgs, Value};

/// Builds styled statements and flushes them to a sink.
///
/// # Example
///
/// ```rust
/// use stylog::{Color, Console, MemorySink};
///
/// let mut console = Console::new(MemorySink::new());
/// console
///     .fg(Color::Red, "Red ")
///     .bg(Color::Black, ())
///     .fg(Color::Green, "Green")
///     .apply()
///     .fg(Color::Blue, " Blue")
///     .apply()
///     .log(())
///     .unwrap();
///
/// assert_eq!(
///     console.sink().last().unwrap().text(),
///     "\x1b[31mRed  \x1b[40m\x1b[32mGreen \x1b[0m\x1b[34m Blue\x1b[0m"
/// );
/// ```
pub struct Console<S = TermSink> {
    sink: S,
    statement: Statement,
    options: Option<FormatOptions>,
}

impl Console<TermSink> {
    /// Creates a console printing to the terminal.
    pub fn stdout() -> Self {
        Self::new(TermSink::new())
    }
}

impl Default for Console<TermSink> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<S: fmt::Debug> fmt::Debug for Console<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("sink", &self.sink)
            .field("statement", &self.statement)
            .field("options", &self.options)
            .finish()
    }
}

impl<S: Sink> Console<S> {
    /// Creates a console over `sink` with the default format options.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            statement: Statement::new(),
            options: Some(DEFAULT_FORMAT_OPTIONS),
        }
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the output sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the console, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The statement built since the last flush.
    pub fn pending(&self) -> &Statement {
        &self.statement
    }

    /// The format options the next flush will use.
    pub fn format_options(&self) -> Option<&FormatOptions> {
        self.options.as_ref()
    }

    // --- Builder ---

    /// Appends unstyled payloads.
    pub fn raw(&mut self, args: impl IntoArgs) -> &mut Self {
        self.statement.prepare(None, args.into_args());
        self
    }

    /// Appends a style token followed by payloads.
    ///
    /// With no payloads the style is armed for the next text appended by any
    /// later call before the flush.
    pub fn styled(&mut self, token: StyleToken, args: impl IntoArgs) -> &mut Self {
        self.statement.prepare(Some(token), args.into_args());
        self
    }

    /// Sets a named text color.
    pub fn fg(&mut self, color: Color, args: impl IntoArgs) -> &mut Self {
        self.styled(StyleToken::from(color.foreground()), args)
    }

    /// Sets a named background color.
    pub fn bg(&mut self, color: Color, args: impl IntoArgs) -> &mut Self {
        self.styled(StyleToken::from(color.background()), args)
    }

    /// Sets a text decoration.
    pub fn decoration(&mut self, decoration: Decoration, args: impl IntoArgs) -> &mut Self {
        self.styled(StyleToken::from(decoration.sequence()), args)
    }

    /// Sets a custom text color from a hex string such as `"#5AC981"`.
    ///
    /// An invalid color arms no style; the payloads are still appended.
    pub fn fg_hex(&mut self, hex: &str, args: impl IntoArgs) -> &mut Self {
        self.hex(hex, Channel::Foreground, args)
    }

    /// Sets a custom background color from a hex string.
    ///
    /// An invalid color arms no style; the payloads are still appended.
    pub fn bg_hex(&mut self, hex: &str, args: impl IntoArgs) -> &mut Self {
        self.hex(hex, Channel::Background, args)
    }

    /// Sets a custom text color.
    pub fn fg_rgb(&mut self, rgb: impl Into<Rgb>, args: impl IntoArgs) -> &mut Self {
        self.styled(rgb.into().to_token(Channel::Foreground), args)
    }

    /// Sets a custom background color.
    pub fn bg_rgb(&mut self, rgb: impl Into<Rgb>, args: impl IntoArgs) -> &mut Self {
        self.styled(rgb.into().to_token(Channel::Background), args)
    }

    /// Applies a style looked up by name, e.g. `(StyleKind::Foreground, "red")`.
    ///
    /// Unknown names, and the reserved `"reset"`, arm no style; the payloads
    /// are still appended.
    pub fn style(&mut self, kind: StyleKind, name: &str, args: impl IntoArgs) -> &mut Self {
        let token = StyleTable::lookup(kind, name)
            .map_err(|err| warn!(%err, "ignoring named style"))
            .ok();
        self.statement.prepare(token, args.into_args());
        self
    }

    /// Ends the current style run by appending the reset token.
    pub fn apply(&mut self) -> &mut Self {
        self.styled(StyleToken::RESET, ())
    }

    /// Adds a group of CSS declarations for browser-like sinks.
    ///
    /// Property names are converted to declaration case, so `fontSize`
    /// becomes `font-size`. The placeholder and declarations are only placed
    /// into the statement when it is flushed.
    pub fn css<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        self.statement.push_css(declaration_group(properties));
        self
    }

    /// Replaces the format options for the next flush.
    ///
    /// `None` disables formatting for one flush only; afterwards the console
    /// returns to [`DEFAULT_FORMAT_OPTIONS`].
    pub fn options(&mut self, options: Option<FormatOptions>) -> &mut Self {
        self.options = options;
        self
    }

    fn hex(&mut self, hex: &str, channel: Channel, args: impl IntoArgs) -> &mut Self {
        let token = Rgb::from_hex(hex)
            .map(|rgb| rgb.to_token(channel))
            .map_err(|err| warn!(%err, "ignoring custom color"))
            .ok();
        self.statement.prepare(token, args.into_args());
        self
    }

    // --- Terminating calls ---

    /// Flushes the statement, plus `args`, as a log line.
    ///
    /// # Errors
    ///
    /// Returns the sink's error. Pending state is reset regardless.
    pub fn log(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.flush(Method::Log, args.into_args())
    }

    /// Flushes the statement, plus `args`, as an info line.
    ///
    /// # Errors
    ///
    /// Returns the sink's error. Pending state is reset regardless.
    pub fn info(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.flush(Method::Info, args.into_args())
    }

    /// Flushes the statement, plus `args`, as a group label and opens a group.
    ///
    /// # Errors
    ///
    /// Returns the sink's error. Pending state is reset regardless.
    pub fn group(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.flush(Method::Group, args.into_args())
    }

    /// Like [`group`](Self::group), for a collapsed group.
    ///
    /// # Errors
    ///
    /// Returns the sink's error. Pending state is reset regardless.
    pub fn group_collapsed(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.flush(Method::GroupCollapsed, args.into_args())
    }

    fn flush(&mut self, method: Method, args: Vec<Value>) -> Result<(), S::Error> {
        if !args.is_empty() {
            self.statement.prepare(None, args);
        }

        let statement = self.statement.take();
        let options = self.options.replace(DEFAULT_FORMAT_OPTIONS);
        let parsed = statement.merge();

        match options {
            Some(options) if !options.is_empty() && self.sink.supports_formatting() => {
                let line = format_with_options(&options, &parsed);
                trace!(%method, args = parsed.len(), formatted = true, "flushing statement");
                self.sink.print(method, &[Value::Text(line)])
            }
            _ => {
                trace!(%method, args = parsed.len(), formatted = false, "flushing statement");
                self.sink.print(method, &parsed)
            }
        }
    }

    // --- Pass-through calls ---

    /// Prints a warning. Pending styles are untouched.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn warn(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Warn, args)
    }

    /// Prints an error. Pending styles are untouched.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn error(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Error, args)
    }

    /// Prints a debug message. Pending styles are untouched.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn debug(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Debug, args)
    }

    /// Prints a trace message.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn trace(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Trace, args)
    }

    /// Prints tabular data.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn table(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Table, args)
    }

    /// Prints inspected values.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn dir(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Dir, args)
    }

    /// Closes the innermost group.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn group_end(&mut self) -> Result<(), S::Error> {
        self.pass(Method::GroupEnd, ())
    }

    /// Increments and prints the counter for `label`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn count(&mut self, label: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Count, label)
    }

    /// Resets the counter for `label`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn count_reset(&mut self, label: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::CountReset, label)
    }

    /// Starts the timer for `label`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn time(&mut self, label: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Time, label)
    }

    /// Stops and prints the timer for `label`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn time_end(&mut self, label: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::TimeEnd, label)
    }

    /// Prints the running timer for the first argument, followed by the rest.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn time_log(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::TimeLog, args)
    }

    /// Prints the remaining arguments as a failure if the first is falsy.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn assert(&mut self, args: impl IntoArgs) -> Result<(), S::Error> {
        self.pass(Method::Assert, args)
    }

    /// Clears the output destination, if it supports it.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.pass(Method::Clear, ())
    }

    fn pass(&mut self, method: Method, args: impl IntoArgs) -> Result<(), S::Error> {
        self.sink.print(method, &args.into_args())
    }
}
