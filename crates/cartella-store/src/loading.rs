//! Loading indicator for in-flight catalog reads.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts catalog reads that have been issued but not finished.
#[derive(Debug, Default)]
pub struct LoadingState {
    in_flight: AtomicUsize,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one read is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Mark a read as started. The read counts as finished when the guard drops,
    /// whether it returned normally, failed, or was abandoned mid-await.
    pub fn enter(&self) -> LoadingGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard { state: self }
    }
}

/// Clears one unit of loading on drop.
#[must_use = "loading ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard<'a> {
    state: &'a LoadingState,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
