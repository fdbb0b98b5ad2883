//! Caller-name resolution with a process-wide memo cache.
//!
//! [`me!`](crate::me) identifies the function it is written in at compile
//! time: `module_path!()`, `line!()` and the type path of a marker item
//! declared inside the calling function, e.g.
//! `app::orders::submit::{{closure}}::__logex_here`. Turning that path into
//! the bare function name (`submit`) is the work the cache memoizes.
//!
//! Keys pin a source location, so a key always maps to the same name.
//! Duplicate inserts from racing threads are harmless and no
//! compare-and-swap is needed.

use std::any::type_name;
use std::fmt;
use std::sync::LazyLock;

use dashmap::DashMap;
use log::debug;

use crate::error::{LogExError, Result};
use crate::LOG_TARGET;

/// Name of the marker item `me!()` declares in the calling function.
#[doc(hidden)]
pub const MARKER: &str = "__logex_here";

const CLOSURE: &str = "{{closure}}";

static METHOD_NAME_CACHE: LazyLock<DashMap<CallSiteKey, &'static str>> =
    LazyLock::new(DashMap::new);

/// A call site: declaring module, frame path and source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSiteKey {
    pub scope: &'static str,
    pub frame: &'static str,
    pub line: u32,
}

impl fmt::Display for CallSiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}:{}", self.scope, self.frame, self.line)
    }
}

/// Name of the function that invoked `me!()`.
///
/// Closures and async blocks resolve to the named function around them.
///
/// ```
/// fn submit_order() -> &'static str {
///     logex::me!().unwrap()
/// }
///
/// assert_eq!(submit_order(), "submit_order");
/// ```
#[macro_export]
macro_rules! me {
    () => {{
        fn __logex_here() {}
        $crate::caller::resolve(
            ::core::module_path!(),
            $crate::caller::type_name_of(__logex_here),
            ::core::line!(),
        )
    }};
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    type_name::<T>()
}

/// Cache-backed lookup behind [`me!`](crate::me).
///
/// `frame` is the type path of an item declared in the calling function
/// (ending in [`MARKER`]) or the path of the function itself.
pub fn resolve(scope: &'static str, frame: &'static str, line: u32) -> Result<&'static str> {
    let key = CallSiteKey { scope, frame, line };

    if let Some(name) = METHOD_NAME_CACHE.get(&key) {
        return Ok(*name);
    }

    let name = function_name(frame)?;
    METHOD_NAME_CACHE.entry(key).or_insert(name);
    Ok(name)
}

/// Strip the marker and closure segments and return the last path segment.
fn function_name(frame: &'static str) -> Result<&'static str> {
    let mut path = frame
        .strip_suffix(MARKER)
        .and_then(|p| p.strip_suffix("::"))
        .unwrap_or(frame);
    while let Some(outer) = path.strip_suffix(CLOSURE) {
        path = outer.strip_suffix("::").unwrap_or(outer);
    }

    // a function always sits below at least a crate segment
    match path.rsplit_once("::") {
        Some((scope, name)) if !scope.is_empty() && !name.is_empty() => Ok(name),
        _ => Err(LogExError::InvariantViolation(
            "call stack too short".to_string(),
        )),
    }
}

/// Empty the method name cache.
pub fn clear_method_cache() {
    let before = METHOD_NAME_CACHE.len();
    METHOD_NAME_CACHE.clear();
    debug!(target: LOG_TARGET, "method name cache cleared ({} entries)", before);
}

/// Current number of cached call sites. The value may already be stale
/// when it returns.
pub fn cache_size() -> usize {
    METHOD_NAME_CACHE.len()
}

/// True when at least one call site is cached.
pub fn is_cache_populated() -> bool {
    !METHOD_NAME_CACHE.is_empty()
}

#[deprecated(note = "reports whether the cache holds entries; use `is_cache_populated`")]
pub fn is_cache_enabled() -> bool {
    is_cache_populated()
}
