//! Debug channel for the circle scan
//!
//! Observers see every spelling the locator compares. They cannot change
//! the result.

use crate::models::Side;

use super::locator::KeyLocation;

pub trait ScanObserver {
    /// Called once per spelling compared against the query root
    fn on_candidate(&mut self, index: usize, side: Side, spelling: &str, canonical: &str, matched: bool);

    /// Called once with the final result
    fn on_finish(&mut self, _result: &KeyLocation) {}
}

/// Ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {
    fn on_candidate(&mut self, _: usize, _: Side, _: &str, _: &str, _: bool) {}
}

/// Forwards the scan to `log::trace!`
#[derive(Debug, Default, Clone)]
pub struct LogObserver {
    root: String,
}

impl LogObserver {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl ScanObserver for LogObserver {
    fn on_candidate(&mut self, index: usize, side: Side, spelling: &str, canonical: &str, matched: bool) {
        log::trace!(
            "[key-center] {:?} #{}: {} -> {} vs '{}' {}",
            side,
            index,
            spelling,
            canonical,
            self.root,
            if matched { "MATCH" } else { "" }
        );
    }

    fn on_finish(&mut self, result: &KeyLocation) {
        log::trace!("[key-center] '{}' resolved to {:?}", self.root, result);
    }
}

/// Collects candidates in memory; used by tests and debugging tools
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub candidates: Vec<(usize, Side, String, bool)>,
    pub result: Option<KeyLocation>,
}

impl ScanObserver for RecordingObserver {
    fn on_candidate(&mut self, index: usize, side: Side, spelling: &str, _canonical: &str, matched: bool) {
        self.candidates.push((index, side, spelling.to_string(), matched));
    }

    fn on_finish(&mut self, result: &KeyLocation) {
        self.result = Some(*result);
    }
}
