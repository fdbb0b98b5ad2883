//! Common message phrases shared by call sites.

/// Common phrase 'starting'.
pub const STARTING: &str = "starting";

/// Common phrase 'finishing'.
pub const STOPPING: &str = "finishing";

/// Common phrase 'finished'.
pub const STOPPED: &str = "finished";

/// Common phrase 'starting -> finishing'.
pub const SHORT_RUN: &str = "starting -> finishing";

/// Common phrase 'exception thrown'.
pub const EXCEPTION_THROWN: &str = "exception thrown";
