//! In-memory recording sink.

use std::convert::Infallible;

use super::{Method, Sink};
use crate::format::{inspect, FormatOptions};
use crate::value::Value;

/// One recorded print call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub args: Vec<Value>,
}

impl Call {
    /// The arguments joined with spaces, text verbatim.
    ///
    /// Non-text arguments are inspected without colors.
    pub fn text(&self) -> String {
        self.args
            .iter()
            .map(|arg| match arg {
                Value::Text(text) => text.clone(),
                other => inspect(other, &FormatOptions::new()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A sink that records calls instead of printing them.
///
/// # Example
///
/// ```rust
/// use stylog::{Console, MemorySink, Method};
///
/// let mut console = Console::new(MemorySink::new());
/// console.log("hello").unwrap();
///
/// let call = console.sink().last().unwrap();
/// assert_eq!(call.method, Method::Log);
/// assert_eq!(call.text(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct MemorySink {
    calls: Vec<Call>,
    formatting: bool,
}

impl MemorySink {
    /// Creates a recording sink that accepts pre-formatted output.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            formatting: true,
        }
    }

    /// Creates a recording sink that receives raw argument lists, like a
    /// browser console that interprets `%c` itself.
    pub fn without_formatter() -> Self {
        Self {
            calls: Vec::new(),
            formatting: false,
        }
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// The most recent call.
    pub fn last(&self) -> Option<&Call> {
        self.calls.last()
    }

    /// Removes and returns all recorded calls.
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    type Error = Infallible;

    fn print(&mut self, method: Method, args: &[Value]) -> Result<(), Self::Error> {
        self.calls.push(Call {
            method,
            args: args.to_vec(),
        });
        Ok(())
    }

    fn supports_formatting(&self) -> bool {
        self.formatting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut sink = MemorySink::new();
        sink.print(Method::Log, &[Value::from("a")]).unwrap();
        sink.print(Method::Warn, &[Value::from("b"), Value::from(1)])
            .unwrap();

        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::Log);
        assert_eq!(calls[1].args, vec![Value::from("b"), Value::from(1)]);
    }

    #[test]
    fn test_take_empties_recording() {
        let mut sink = MemorySink::default();
        sink.print(Method::Info, &[]).unwrap();
        assert_eq!(sink.take().len(), 1);
        assert!(sink.calls().is_empty());
        assert!(sink.last().is_none());
    }

    #[test]
    fn test_call_text() {
        let call = Call {
            method: Method::Log,
            args: vec![Value::from("count:"), Value::from(3)],
        };
        assert_eq!(call.text(), "count: 3");
    }

    #[test]
    fn test_formatting_flag() {
        assert!(MemorySink::new().supports_formatting());
        assert!(!MemorySink::without_formatter().supports_formatting());
    }
}
