//! Terminal sink.

use console::Term;
use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use super::{table, Method, Sink};
use crate::format::{format_with_options, inspect, FormatOptions};
use crate::value::Value;

const GROUP_INDENT: usize = 2;
const DEFAULT_LABEL: &str = "default";

/// Which standard stream a line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// What a single print call produces.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Output {
    Line(Stream, String),
    Clear,
}

/// Group indentation, counters and timers.
///
/// Kept apart from the terminal handles so it can be exercised without I/O.
#[derive(Debug, Default)]
struct ConsoleState {
    indent: usize,
    counters: HashMap<String, u64>,
    timers: HashMap<String, Instant>,
}

impl ConsoleState {
    fn render(&mut self, method: Method, args: &[Value]) -> Vec<Output> {
        match method {
            Method::Log | Method::Info | Method::Debug => {
                vec![self.line(Stream::Stdout, &join(args))]
            }
            Method::Table => {
                let rendered = match args.first() {
                    Some(Value::Data(data)) => table::render(data, table::columns(args.get(1))),
                    _ => None,
                };
                let text = rendered.unwrap_or_else(|| join(args));
                vec![self.line(Stream::Stdout, &text)]
            }
            Method::Dir => {
                let options = FormatOptions::new();
                let text = args
                    .iter()
                    .map(|arg| inspect(arg, &options))
                    .collect::<Vec<_>>()
                    .join(" ");
                vec![self.line(Stream::Stdout, &text)]
            }
            Method::Warn | Method::Error => vec![self.line(Stream::Stderr, &join(args))],
            Method::Trace => {
                let message = join(args);
                let text = if message.is_empty() {
                    "Trace".to_string()
                } else {
                    format!("Trace: {}", message)
                };
                vec![self.line(Stream::Stderr, &text)]
            }
            Method::Group | Method::GroupCollapsed => {
                let mut out = Vec::new();
                if !args.is_empty() {
                    out.push(self.line(Stream::Stdout, &join(args)));
                }
                self.indent += GROUP_INDENT;
                out
            }
            Method::GroupEnd => {
                self.indent = self.indent.saturating_sub(GROUP_INDENT);
                Vec::new()
            }
            Method::Count => {
                let label = label(args);
                let count = self.counters.entry(label.clone()).or_insert(0);
                *count += 1;
                let text = format!("{}: {}", label, count);
                vec![self.line(Stream::Stdout, &text)]
            }
            Method::CountReset => {
                let label = label(args);
                match self.counters.get_mut(&label) {
                    Some(count) => {
                        *count = 0;
                        Vec::new()
                    }
                    None => {
                        let text = format!("Count for '{}' does not exist", label);
                        vec![self.line(Stream::Stderr, &text)]
                    }
                }
            }
            Method::Time => {
                let label = label(args);
                if self.timers.contains_key(&label) {
                    let text = format!("Label '{}' already exists for console.time()", label);
                    return vec![self.line(Stream::Stderr, &text)];
                }
                self.timers.insert(label, Instant::now());
                Vec::new()
            }
            Method::TimeEnd | Method::TimeLog => {
                let label = label(args);
                let started = if method == Method::TimeEnd {
                    self.timers.remove(&label)
                } else {
                    self.timers.get(&label).copied()
                };
                let Some(started) = started else {
                    let text = format!("No such label '{}' for console.{}()", label, method);
                    return vec![self.line(Stream::Stderr, &text)];
                };
                let mut text = format!("{}: {}", label, elapsed(started.elapsed()));
                if method == Method::TimeLog && args.len() > 1 {
                    text.push(' ');
                    text.push_str(&join(&args[1..]));
                }
                vec![self.line(Stream::Stdout, &text)]
            }
            Method::Assert => {
                let passed = args.first().is_some_and(Value::is_truthy);
                if passed {
                    return Vec::new();
                }
                let rest = args.get(1..).unwrap_or_default();
                let text = if rest.is_empty() {
                    "Assertion failed".to_string()
                } else {
                    format!("Assertion failed: {}", join(rest))
                };
                vec![self.line(Stream::Stderr, &text)]
            }
            Method::Clear => vec![Output::Clear],
        }
    }

    fn line(&self, stream: Stream, text: &str) -> Output {
        let pad = " ".repeat(self.indent);
        let text = text
            .split('\n')
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n");
        Output::Line(stream, text)
    }
}

fn join(args: &[Value]) -> String {
    format_with_options(&FormatOptions::new(), args)
}

fn label(args: &[Value]) -> String {
    match args.first() {
        Some(Value::Text(text)) => text.clone(),
        Some(other) => join(std::slice::from_ref(other)),
        None => DEFAULT_LABEL.to_string(),
    }
}

fn elapsed(duration: Duration) -> String {
    format!("{:.3}ms", duration.as_secs_f64() * 1000.0)
}

/// A sink that prints to the terminal.
///
/// Log, info, debug, dir, table, count and timer output goes to stdout;
/// `table` draws arrays and objects as a box table and prints anything else
/// like `log`.
/// warnings, errors, traces and failed assertions go to stderr. Groups indent
/// subsequent output by two spaces per level.
#[derive(Debug)]
pub struct TermSink {
    stdout: Term,
    stderr: Term,
    state: ConsoleState,
}

impl TermSink {
    /// Creates a sink over the process's standard streams.
    pub fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            state: ConsoleState::default(),
        }
    }

    /// Current group indentation in columns.
    pub fn indent(&self) -> usize {
        self.state.indent
    }
}

impl Default for TermSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for TermSink {
    type Error = io::Error;

    fn print(&mut self, method: Method, args: &[Value]) -> Result<(), Self::Error> {
        for output in self.state.render(method, args) {
            match output {
                Output::Line(Stream::Stdout, text) => self.stdout.write_line(&text)?,
                Output::Line(Stream::Stderr, text) => self.stderr.write_line(&text)?,
                Output::Clear => {
                    if self.stdout.is_term() {
                        self.stdout.clear_screen()?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    fn line(stream: Stream, s: &str) -> Vec<Output> {
        vec![Output::Line(stream, s.to_string())]
    }

    #[test]
    fn test_log_goes_to_stdout() {
        let mut state = ConsoleState::default();
        let out = state.render(Method::Log, &[text("count: %d"), Value::from(3)]);
        assert_eq!(out, line(Stream::Stdout, "count: 3"));
    }

    #[test]
    fn test_warn_and_error_go_to_stderr() {
        let mut state = ConsoleState::default();
        assert_eq!(
            state.render(Method::Warn, &[text("careful")]),
            line(Stream::Stderr, "careful")
        );
        assert_eq!(
            state.render(Method::Error, &[text("boom")]),
            line(Stream::Stderr, "boom")
        );
    }

    #[test]
    fn test_group_indents_until_group_end() {
        let mut state = ConsoleState::default();
        assert_eq!(
            state.render(Method::Group, &[text("Label")]),
            line(Stream::Stdout, "Label")
        );
        assert_eq!(
            state.render(Method::Info, &[text("a\nb")]),
            line(Stream::Stdout, "  a\n  b")
        );
        assert!(state.render(Method::GroupCollapsed, &[]).is_empty());
        assert_eq!(state.indent, 4);

        state.render(Method::GroupEnd, &[]);
        state.render(Method::GroupEnd, &[]);
        state.render(Method::GroupEnd, &[]);
        assert_eq!(state.indent, 0);
    }

    #[test]
    fn test_count_and_reset() {
        let mut state = ConsoleState::default();
        assert_eq!(state.render(Method::Count, &[]), line(Stream::Stdout, "default: 1"));
        assert_eq!(state.render(Method::Count, &[]), line(Stream::Stdout, "default: 2"));
        assert_eq!(
            state.render(Method::Count, &[text("jobs")]),
            line(Stream::Stdout, "jobs: 1")
        );
        assert!(state.render(Method::CountReset, &[]).is_empty());
        assert_eq!(state.render(Method::Count, &[]), line(Stream::Stdout, "default: 1"));
        assert_eq!(
            state.render(Method::CountReset, &[text("missing")]),
            line(Stream::Stderr, "Count for 'missing' does not exist")
        );
    }

    #[test]
    fn test_timers() {
        let mut state = ConsoleState::default();
        assert!(state.render(Method::Time, &[text("load")]).is_empty());
        assert_eq!(
            state.render(Method::Time, &[text("load")]),
            line(Stream::Stderr, "Label 'load' already exists for console.time()")
        );

        match state.render(Method::TimeLog, &[text("load"), text("step")]).as_slice() {
            [Output::Line(Stream::Stdout, text)] => {
                assert!(text.starts_with("load: "));
                assert!(text.ends_with("ms step"));
            }
            other => panic!("unexpected output: {:?}", other),
        }

        match state.render(Method::TimeEnd, &[text("load")]).as_slice() {
            [Output::Line(Stream::Stdout, text)] => assert!(text.ends_with("ms")),
            other => panic!("unexpected output: {:?}", other),
        }

        assert_eq!(
            state.render(Method::TimeEnd, &[text("load")]),
            line(Stream::Stderr, "No such label 'load' for console.timeEnd()")
        );
    }

    #[test]
    fn test_assert() {
        let mut state = ConsoleState::default();
        assert!(state.render(Method::Assert, &[Value::from(true)]).is_empty());
        assert_eq!(
            state.render(Method::Assert, &[Value::from(false)]),
            line(Stream::Stderr, "Assertion failed")
        );
        assert_eq!(
            state.render(Method::Assert, &[Value::from(0), text("value was %d"), Value::from(0)]),
            line(Stream::Stderr, "Assertion failed: value was 0")
        );
        assert_eq!(
            state.render(Method::Assert, &[]),
            line(Stream::Stderr, "Assertion failed")
        );
    }

    #[test]
    fn test_trace_and_dir() {
        let mut state = ConsoleState::default();
        assert_eq!(
            state.render(Method::Trace, &[text("here")]),
            line(Stream::Stderr, "Trace: here")
        );
        assert_eq!(
            state.render(Method::Dir, &[text("s"), Value::from(1)]),
            line(Stream::Stdout, "'s' 1")
        );
    }

    #[test]
    fn test_table_draws_structured_data() {
        let mut state = ConsoleState::default();
        let data = Value::from(serde_json::json!([{"a": 1}]));
        let expected = [
            "┌─────────┬───┐",
            "│ (index) │ a │",
            "├─────────┼───┤",
            "│ 0       │ 1 │",
            "└─────────┴───┘",
        ]
        .join("\n");
        assert_eq!(state.render(Method::Table, &[data]), line(Stream::Stdout, &expected));
        assert_eq!(
            state.render(Method::Table, &[text("plain"), Value::from(2)]),
            line(Stream::Stdout, "plain 2")
        );
    }

    #[test]
    fn test_clear() {
        let mut state = ConsoleState::default();
        assert_eq!(state.render(Method::Clear, &[]), vec![Output::Clear]);
    }

    #[test]
    fn test_term_sink_starts_unindented() {
        assert_eq!(TermSink::new().indent(), 0);
    }
}
