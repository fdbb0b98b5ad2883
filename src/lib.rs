pub mod caller;
pub mod configure;
pub mod error;
pub mod ex;
pub mod facade;
pub mod fx;
pub mod logger;
pub mod phrases;
pub mod thread_buffer;

pub use caller::{cache_size, clear_method_cache, is_cache_populated, CallSiteKey};
pub use error::{LogExError, Result};
pub use ex::{or_null, OrNull, NULL};
pub use facade::Logger;
pub use log::Level;
pub use phrases::{EXCEPTION_THROWN, SHORT_RUN, STARTING, STOPPED, STOPPING};
pub use thread_buffer::cleanup_thread_local;

/// Target used by the crate's own housekeeping records.
pub(crate) const LOG_TARGET: &str = "logex";
