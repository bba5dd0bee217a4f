//! Structured observability hooks for site events.
//!
//! This module provides:
//! - Route-scoped tracing spans via the `ViewSpan` RAII guard
//! - Emission functions for routing, slide rotation, filtering, contact and
//!   publishing events
//!
//! Events are emitted at `info!` level unless noted; slide ticks are `debug!`
//! so a running slideshow does not flood the default log.

use tracing::{debug, info, warn};

/// RAII guard that enters a route-scoped span while a page is built and rendered.
///
/// # Example
///
/// ```ignore
/// let _span = ViewSpan::enter("/activities");
/// // every event below is tagged with route = "/activities"
/// ```
pub struct ViewSpan {
    _span: tracing::span::EnteredSpan,
}

impl ViewSpan {
    pub fn enter(route: &str) -> Self {
        let span = tracing::info_span!("alstro.view", route = %route);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a path matched a route.
pub fn emit_route_resolved(path: &str, route: &str) {
    debug!(event = "route.resolved", path = %path, route = %route);
}

/// Emit event: a path matched nothing (warning level).
pub fn emit_route_unmatched(path: &str) {
    warn!(event = "route.unmatched", path = %path);
}

/// Emit event: a slide ticker was armed.
pub fn emit_ticker_armed(period_ms: u64) {
    debug!(event = "slide.ticker_armed", period_ms = period_ms);
}

/// Emit event: a slide ticker was disarmed.
pub fn emit_ticker_disarmed() {
    debug!(event = "slide.ticker_disarmed");
}

/// Emit event: the visible slide changed.
pub fn emit_slide_rotated(trigger: &str, index: Option<usize>) {
    debug!(event = "slide.rotated", trigger = %trigger, index = ?index);
}

/// Emit event: the slider could not mount (warning level).
pub fn emit_slider_unavailable(error: &dyn std::fmt::Display) {
    warn!(event = "slide.unavailable", error = %error);
}

/// Emit event: a tag was selected on the activities filter.
pub fn emit_filter_selected(tag: &str, current: usize, past: usize) {
    info!(
        event = "filter.selected",
        tag = %tag,
        current = current,
        past = past,
    );
}

/// Emit event: a contact submission was acknowledged.
pub fn emit_contact_acknowledged(receipt_id: &str) {
    info!(event = "contact.acknowledged", receipt_id = %receipt_id);
}

/// Emit event: a contact submission was rejected by validation.
pub fn emit_contact_rejected(error: &dyn std::fmt::Display) {
    warn!(event = "contact.rejected", error = %error);
}

/// Emit event: the static site was written.
pub fn emit_site_published(out_dir: &str, pages: usize) {
    info!(event = "site.published", out_dir = %out_dir, pages = pages);
}
