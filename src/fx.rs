//! Level-guarded formatted logging.
//!
//! Each function checks the sink's `enabled` predicate once and only then
//! forwards the format arguments untouched. Substitution is left to
//! `fmt::Arguments`; nothing here inspects or rewrites the arguments.
//!
//! The guard is coarse: the `fx_*!` macros build `format_args!` before the
//! check fires, so argument expressions are always evaluated. Call sites
//! with expensive arguments should test `Logger::is_enabled` themselves.

use std::fmt;

use log::Level;

use crate::facade::Logger;

/// Forward `args` to `level` if the sink has that level enabled.
pub fn log(logger: &Logger<'_>, level: Level, args: fmt::Arguments<'_>) {
    if logger.is_enabled(level) {
        logger.write(level, args);
    }
}

pub fn trace(logger: &Logger<'_>, args: fmt::Arguments<'_>) {
    log(logger, Level::Trace, args);
}

pub fn debug(logger: &Logger<'_>, args: fmt::Arguments<'_>) {
    log(logger, Level::Debug, args);
}

pub fn info(logger: &Logger<'_>, args: fmt::Arguments<'_>) {
    log(logger, Level::Info, args);
}

pub fn warn(logger: &Logger<'_>, args: fmt::Arguments<'_>) {
    log(logger, Level::Warn, args);
}

pub fn error(logger: &Logger<'_>, args: fmt::Arguments<'_>) {
    log(logger, Level::Error, args);
}

/// Guarded formatted logging with an explicit logger handle
///
/// ```
/// use logex::{fx_info, Logger};
///
/// let logger = Logger::global("settlement");
/// fx_info!(logger, "x={}", 42);
/// ```
#[macro_export]
macro_rules! fx_trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::fx::trace(&$logger, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fx_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::fx::debug(&$logger, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fx_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::fx::info(&$logger, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fx_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::fx::warn(&$logger, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fx_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::fx::error(&$logger, format_args!($($arg)+))
    };
}
