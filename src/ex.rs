//! Joined-parts logging.
//!
//! Message parts are rendered with `Display` and joined with `": "` into the
//! calling thread's scratch buffer, then handed to the sink at the requested
//! level. Unlike [`crate::fx`], no `enabled` check runs first: the message
//! is already assembled by the time a guard could fire, so the sink decides.
//!
//! ```
//! use logex::{ex_info, or_null, Logger, STARTING};
//!
//! let logger = Logger::global("orders");
//! let order_id: Option<u64> = None;
//! // emits "main: starting: null" at info
//! ex_info!(logger, logex::me!().unwrap(), STARTING, or_null(order_id));
//! ```
//!
//! Values without a `Display` impl (vectors, maps) can be passed as
//! `format_args!("{:?}", value)`.

use std::fmt::{self, Display, Write};

use log::Level;

use crate::facade::Logger;
use crate::thread_buffer;

pub const SEPARATOR: &str = ": ";

/// Rendering of an absent part.
pub const NULL_TEXT: &str = "null";

/// A part that may be absent. `None` renders as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrNull<T>(pub Option<T>);

impl<T: Display> Display for OrNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL_TEXT),
        }
    }
}

/// The absent part.
pub const NULL: OrNull<&str> = OrNull(None);

pub fn or_null<T: Display>(value: Option<T>) -> OrNull<T> {
    OrNull(value)
}

/// Append `parts` to `buffer`, separated by [`SEPARATOR`].
fn append_parts(buffer: &mut String, parts: &[&dyn Display]) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            buffer.push_str(SEPARATOR);
        }
        // writing into a String only fails if a Display impl reports an error
        let _ = write!(buffer, "{}", part);
    }
}

/// Assemble the message `log` would emit, without dispatching it.
pub fn join(parts: &[&dyn Display]) -> String {
    if parts.is_empty() {
        return String::new();
    }
    thread_buffer::with_buffer(|buffer| {
        append_parts(buffer, parts);
        buffer.clone()
    })
}

/// Join `parts` and dispatch the result to `level`.
pub fn log(logger: &Logger<'_>, level: Level, parts: &[&dyn Display]) {
    if parts.is_empty() {
        logger.write_str(level, "");
        return;
    }

    thread_buffer::with_buffer(|buffer| {
        append_parts(buffer, parts);
        let message: &str = buffer;
        logger.write_str(level, message);
    });
}

pub fn trace(logger: &Logger<'_>, parts: &[&dyn Display]) {
    log(logger, Level::Trace, parts);
}

pub fn debug(logger: &Logger<'_>, parts: &[&dyn Display]) {
    log(logger, Level::Debug, parts);
}

pub fn info(logger: &Logger<'_>, parts: &[&dyn Display]) {
    log(logger, Level::Info, parts);
}

pub fn warn(logger: &Logger<'_>, parts: &[&dyn Display]) {
    log(logger, Level::Warn, parts);
}

pub fn error(logger: &Logger<'_>, parts: &[&dyn Display]) {
    log(logger, Level::Error, parts);
}

/// Joined-parts logging at an explicit level
#[macro_export]
macro_rules! ex_log {
    ($logger:expr, $level:expr $(, $part:expr)* $(,)?) => {
        $crate::ex::log(
            &$logger,
            $level,
            &[$(&$part as &dyn ::core::fmt::Display),*],
        )
    };
}

#[macro_export]
macro_rules! ex_trace {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::ex_log!($logger, $crate::Level::Trace $(, $part)*)
    };
}

#[macro_export]
macro_rules! ex_debug {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::ex_log!($logger, $crate::Level::Debug $(, $part)*)
    };
}

#[macro_export]
macro_rules! ex_info {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::ex_log!($logger, $crate::Level::Info $(, $part)*)
    };
}

#[macro_export]
macro_rules! ex_warn {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::ex_log!($logger, $crate::Level::Warn $(, $part)*)
    };
}

#[macro_export]
macro_rules! ex_error {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::ex_log!($logger, $crate::Level::Error $(, $part)*)
    };
}
