//! Thin handle over the `log` facade.
//!
//! A [`Logger`] pairs a `log::Log` sink with a target name. Fx and Ex only
//! ever talk to the backend through the handful of methods here: the
//! per-level `enabled` predicates and `write`, which hands a finished
//! `log::Record` to the sink.

use std::fmt;

use log::{Level, Log, Metadata, Record};

#[derive(Clone, Copy)]
pub struct Logger<'a> {
    sink: &'a dyn Log,
    target: &'a str,
}

impl Logger<'static> {
    /// Bind to the process-wide backend installed with `log::set_logger`
    /// (log4rs via [`crate::logger::setup_logger`] in the demo binary).
    pub fn global(target: &'static str) -> Self {
        Self {
            sink: log::logger(),
            target,
        }
    }
}

impl<'a> Logger<'a> {
    pub fn new(sink: &'a dyn Log, target: &'a str) -> Self {
        Self { sink, target }
    }

    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Ask the sink whether a record at `level` for this target would be kept.
    pub fn is_enabled(&self, level: Level) -> bool {
        let metadata = Metadata::builder()
            .level(level)
            .target(self.target)
            .build();
        self.sink.enabled(&metadata)
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// Hand a record to the sink. No level check happens here; the sink
    /// decides whether to emit.
    pub fn write(&self, level: Level, args: fmt::Arguments<'_>) {
        self.sink.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(self.target)
                .build(),
        );
    }

    /// Dispatch a finished message string.
    pub fn write_str(&self, level: Level, message: &str) {
        self.write(level, format_args!("{}", message));
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
