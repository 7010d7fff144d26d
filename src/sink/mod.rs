//! Output sinks.
//!
//! A [`Sink`] is the console-style capability a [`Console`](crate::Console)
//! flushes into. Print operations are named by intent through [`Method`].
//!
//! Two implementations are provided:
//!
//! - [`TermSink`]: writes to the process's stdout and stderr
//! - [`MemorySink`]: records every call, for tests and output capture

mod memory;
mod table;
mod term;

pub use memory::{Call, MemorySink};
pub use term::TermSink;

use std::fmt;

use crate::value::Value;

/// A console print operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Log,
    Info,
    Group,
    GroupCollapsed,
    Warn,
    Error,
    Debug,
    Trace,
    Table,
    Dir,
    GroupEnd,
    Count,
    CountReset,
    Time,
    TimeEnd,
    TimeLog,
    Assert,
    Clear,
}

impl Method {
    /// The console name of this method.
    pub fn name(self) -> &'static str {
        match self {
            Method::Log => "log",
            Method::Info => "info",
            Method::Group => "group",
            Method::GroupCollapsed => "groupCollapsed",
            Method::Warn => "warn",
            Method::Error => "error",
            Method::Debug => "debug",
            Method::Trace => "trace",
            Method::Table => "table",
            Method::Dir => "dir",
            Method::GroupEnd => "groupEnd",
            Method::Count => "count",
            Method::CountReset => "countReset",
            Method::Time => "time",
            Method::TimeEnd => "timeEnd",
            Method::TimeLog => "timeLog",
            Method::Assert => "assert",
            Method::Clear => "clear",
        }
    }

    /// Whether pending styles are merged into this method's output.
    pub fn is_styleable(self) -> bool {
        matches!(
            self,
            Method::Log | Method::Info | Method::Group | Method::GroupCollapsed
        )
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A console-style output destination.
pub trait Sink {
    /// Error raised by the destination. Consoles propagate it unchanged.
    type Error;

    /// Prints `args` through `method`.
    fn print(&mut self, method: Method, args: &[Value]) -> Result<(), Self::Error>;

    /// Whether flushed arguments may be pre-formatted into a single string.
    ///
    /// Browser-like destinations that interpret `%c` themselves return `false`.
    fn supports_formatting(&self) -> bool {
        true
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn print(&mut self, method: Method, args: &[Value]) -> Result<(), Self::Error> {
        (**self).print(method, args)
    }

    fn supports_formatting(&self) -> bool {
        (**self).supports_formatting()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    type Error = S::Error;

    fn print(&mut self, method: Method, args: &[Value]) -> Result<(), Self::Error> {
        (**self).print(method, args)
    }

    fn supports_formatting(&self) -> bool {
        (**self).supports_formatting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styleable_methods() {
        let styleable: Vec<_> = [
            Method::Log,
            Method::Info,
            Method::Group,
            Method::GroupCollapsed,
            Method::Warn,
            Method::Table,
        ]
        .into_iter()
        .filter(|m| m.is_styleable())
        .collect();
        assert_eq!(
            styleable,
            vec![Method::Log, Method::Info, Method::Group, Method::GroupCollapsed]
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GroupCollapsed.to_string(), "groupCollapsed");
        assert_eq!(Method::TimeEnd.to_string(), "timeEnd");
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut sink = MemorySink::without_formatter();
        {
            let mut by_ref = &mut sink;
            assert!(!Sink::supports_formatting(&by_ref));
            Sink::print(&mut by_ref, Method::Log, &[Value::from("x")]).unwrap();
        }
        assert_eq!(sink.calls().len(), 1);
    }
}
