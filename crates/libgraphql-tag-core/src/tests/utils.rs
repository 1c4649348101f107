use crate::ast;
use crate::parser::DocumentParser;
use crate::parser::GraphQLParserV04;
use crate::parser::ParseOptions;
use crate::parser::SyntaxError;
use crate::StripLoc;
use std::cell::RefCell;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Once;

/// Delegates to [`GraphQLParserV04`] while counting invocations.
pub(super) struct CountingParser {
    calls: Arc<AtomicUsize>,
}

impl CountingParser {
    pub(super) fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { calls: Arc::clone(&calls) }, calls)
    }
}

impl DocumentParser for CountingParser {
    fn parse(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<ast::Node, SyntaxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        GraphQLParserV04::new().parse(source, options)
    }
}

/// Parses correctly but never attaches any location metadata.
pub(super) struct LoclessParser;

impl DocumentParser for LoclessParser {
    fn parse(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<ast::Node, SyntaxError> {
        match GraphQLParserV04::new().parse(source, options)? {
            ast::Node::Document(doc) =>
                Ok(ast::Node::Document(doc.strip_loc(true))),
            other => Ok(other),
        }
    }
}

/// Always "parses" to a bare selection set.
pub(super) struct SelectionSetParser;

impl DocumentParser for SelectionSetParser {
    fn parse(
        &self,
        _source: &str,
        _options: &ParseOptions,
    ) -> Result<ast::Node, SyntaxError> {
        Ok(ast::Node::SelectionSet(ast::SelectionSet {
            selections: vec![],
            loc: None,
        }))
    }
}

pub(super) fn parse_with_locs(source: &str) -> ast::Document {
    parse_with_options(source, ParseOptions::default())
}

pub(super) fn parse_with_options(
    source: &str,
    options: ParseOptions,
) -> ast::Document {
    match GraphQLParserV04::new().parse(source, &options).unwrap() {
        ast::Node::Document(doc) => doc,
        other => panic!("Expected a Document, got `{}`", other.kind()),
    }
}

/// Number of `loc` entries anywhere in the serialized form of `value`.
pub(super) fn count_locs(value: &impl serde::Serialize) -> usize {
    fn count(value: &serde_json::Value) -> usize {
        match value {
            serde_json::Value::Array(items) => items.iter().map(count).sum(),
            serde_json::Value::Object(fields) => fields
                .iter()
                .map(|(key, value)| usize::from(key == "loc") + count(value))
                .sum(),
            _ => 0,
        }
    }
    count(&serde_json::to_value(value).unwrap())
}

thread_local! {
    static CAPTURED_LOGS: RefCell<Vec<(log::Level, String)>> =
        const { RefCell::new(vec![]) };
}

/// Buffers every record per thread, so parallel tests never see each
/// other's output.
struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED_LOGS.with(|logs| {
            logs.borrow_mut().push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURING_LOGGER: CapturingLogger = CapturingLogger;

/// Runs `f`, returning its result along with every log record it emitted on
/// the current thread.
pub(super) fn capture_logs<T>(
    f: impl FnOnce() -> T,
) -> (T, Vec<(log::Level, String)>) {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURING_LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });

    CAPTURED_LOGS.with(|logs| logs.borrow_mut().clear());
    let result = f();
    (result, CAPTURED_LOGS.with(RefCell::take))
}

pub(super) fn warnings(logs: &[(log::Level, String)]) -> Vec<&str> {
    logs.iter()
        .filter(|(level, _)| *level == log::Level::Warn)
        .map(|(_, message)| message.as_str())
        .collect()
}
