//! Observability smoke tests: every emitter and span runs under a capturing
//! subscriber without panicking.

use alstro_core::obs::{
    emit_contact_acknowledged, emit_contact_rejected, emit_filter_selected, emit_route_resolved,
    emit_route_unmatched, emit_site_published, emit_slide_rotated, emit_slider_unavailable,
    emit_ticker_armed, emit_ticker_disarmed,
};
use alstro_core::{SiteError, ViewSpan, METRICS};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn test_route_events() {
    emit_route_resolved("/about/", "/about");
    emit_route_unmatched("/members");
}

#[traced_test]
#[test]
fn test_slide_events() {
    emit_ticker_armed(3000);
    emit_slide_rotated("tick", Some(1));
    emit_slide_rotated("manual_backward", None);
    emit_ticker_disarmed();
    emit_slider_unavailable(&SiteError::InvalidCatalog("slide"));
}

#[traced_test]
#[test]
fn test_filter_and_contact_events() {
    emit_filter_selected("performance", 1, 2);
    emit_contact_acknowledged("7f1c3a52-0000-4000-8000-000000000000");
    emit_contact_rejected(&"お名前 is required");
}

#[traced_test]
#[test]
fn test_publish_event() {
    emit_site_published("dist", 5);
}

#[traced_test]
#[test]
fn test_view_span_nests_events() {
    let span = ViewSpan::enter("/activities");
    emit_filter_selected("all", 3, 4);
    drop(span);
}

#[traced_test]
#[test]
fn test_metrics_flush() {
    METRICS.flush();
}
