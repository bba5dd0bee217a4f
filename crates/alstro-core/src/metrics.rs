//! Global atomic counters for site observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. when a slideshow session or a build ends).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Site counters. Relaxed atomics only.
pub struct Metrics {
    slides_rotated: AtomicU64,
    filter_selections: AtomicU64,
    contact_submissions: AtomicU64,
    pages_rendered: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            slides_rotated: AtomicU64::new(0),
            filter_selections: AtomicU64::new(0),
            contact_submissions: AtomicU64::new(0),
            pages_rendered: AtomicU64::new(0),
        }
    }

    /// Count one slide index change (timer or manual).
    pub fn inc_slides_rotated(&self) {
        self.slides_rotated.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "slides_rotated", "counter incremented");
    }

    /// Count one tag selection on the activities filter.
    pub fn inc_filter_selections(&self) {
        self.filter_selections.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "filter_selections", "counter incremented");
    }

    /// Count one acknowledged contact submission.
    pub fn inc_contact_submissions(&self) {
        self.contact_submissions.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "contact_submissions", "counter incremented");
    }

    /// Count one rendered HTML document.
    pub fn inc_pages_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "pages_rendered", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            slides_rotated = self.slides_rotated(),
            filter_selections = self.filter_selections(),
            contact_submissions = self.contact_submissions(),
            pages_rendered = self.pages_rendered(),
        );
    }

    pub fn slides_rotated(&self) -> u64 {
        self.slides_rotated.load(Ordering::Relaxed)
    }

    pub fn filter_selections(&self) -> u64 {
        self.filter_selections.load(Ordering::Relaxed)
    }

    pub fn contact_submissions(&self) -> u64 {
        self.contact_submissions.load(Ordering::Relaxed)
    }

    pub fn pages_rendered(&self) -> u64 {
        self.pages_rendered.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.slides_rotated.store(0, Ordering::Relaxed);
        self.filter_selections.store(0, Ordering::Relaxed);
        self.contact_submissions.store(0, Ordering::Relaxed);
        self.pages_rendered.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let m = Metrics::new();
        assert_eq!(m.slides_rotated(), 0);
        m.inc_slides_rotated();
        m.inc_slides_rotated();
        assert_eq!(m.slides_rotated(), 2);

        m.inc_filter_selections();
        assert_eq!(m.filter_selections(), 1);

        m.inc_contact_submissions();
        m.inc_pages_rendered();
        m.inc_pages_rendered();
        assert_eq!(m.contact_submissions(), 1);
        assert_eq!(m.pages_rendered(), 2);
    }

    #[test]
    fn reset_zeroes_all() {
        let m = Metrics::new();
        m.inc_slides_rotated();
        m.inc_filter_selections();
        m.inc_contact_submissions();
        m.inc_pages_rendered();
        m.reset();
        assert_eq!(m.slides_rotated(), 0);
        assert_eq!(m.filter_selections(), 0);
        assert_eq!(m.contact_submissions(), 0);
        assert_eq!(m.pages_rendered(), 0);
    }
}
