mod common;

use std::cell::Cell;

use common::RecordingLogger;
use log::Level;
use logex::{fx, fx_debug, fx_error, fx_info, fx_trace, fx_warn, Logger};

#[test]
fn test_disabled_trace_not_forwarded() {
    let sink = RecordingLogger::with_enabled(false);
    let logger = Logger::new(&sink, "fx");

    fx_trace!(logger, "Message with {} and {}", "a", "b");

    assert_eq!(sink.enabled_checks(), 1);
    assert!(sink.records().is_empty());
}

#[test]
fn test_enabled_info_forwarded_unchanged() {
    let sink = RecordingLogger::new();
    let logger = Logger::new(&sink, "fx");

    fx_info!(logger, "x={}", 42);

    assert_eq!(sink.enabled_checks(), 1);
    assert_eq!(sink.records(), vec![(Level::Info, "x=42".to_string())]);
}

#[test]
fn test_every_level_follows_predicate() {
    let sink = RecordingLogger::new();
    let logger = Logger::new(&sink, "fx");

    for enabled in [true, false] {
        sink.set_enabled(enabled);
        fx_trace!(logger, "t{}", 1);
        fx_debug!(logger, "d{}", 2);
        fx_info!(logger, "i{}", 3);
        fx_warn!(logger, "w{}", 4);
        fx_error!(logger, "e{}", 5);
    }

    assert_eq!(sink.enabled_checks(), 10);
    assert_eq!(
        sink.records(),
        vec![
            (Level::Trace, "t1".to_string()),
            (Level::Debug, "d2".to_string()),
            (Level::Info, "i3".to_string()),
            (Level::Warn, "w4".to_string()),
            (Level::Error, "e5".to_string()),
        ]
    );
}

#[test]
fn test_heterogeneous_and_empty_arguments() {
    let sink = RecordingLogger::new();
    let logger = Logger::new(&sink, "fx");
    let missing: Option<u8> = None;

    fx::warn(&logger, format_args!("no placeholders"));
    fx::error(&logger, format_args!("{} {} {:?} {}", "s", 1.5, missing, true));

    assert_eq!(
        sink.messages(),
        vec!["no placeholders".to_string(), "s 1.5 None true".to_string()]
    );
}

#[test]
fn test_arguments_evaluated_before_guard() {
    let sink = RecordingLogger::with_enabled(false);
    let logger = Logger::new(&sink, "fx");
    let evaluated = Cell::new(0);
    let expensive = || {
        evaluated.set(evaluated.get() + 1);
        "value"
    };

    fx_debug!(logger, "{}", expensive());

    assert_eq!(evaluated.get(), 1);
    assert!(sink.records().is_empty());
}
