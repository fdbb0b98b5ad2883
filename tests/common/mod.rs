#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use log::{Level, Log, Metadata, Record};

/// In-memory `log::Log` that records every dispatched message and counts
/// predicate checks.
pub struct RecordingLogger {
    enabled: AtomicBool,
    enabled_checks: AtomicUsize,
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            enabled_checks: AtomicUsize::new(0),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn enabled_checks(&self) -> usize {
        self.enabled_checks.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|(_, m)| m).collect()
    }

    pub fn contains(&self, level: Level, message: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|(l, m)| *l == level && m == message)
    }
}

impl Default for RecordingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        self.enabled_checks.fetch_add(1, Ordering::SeqCst);
        self.enabled.load(Ordering::SeqCst)
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
