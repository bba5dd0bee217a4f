//! Alstro Core Library
//!
//! Controllers, page views, rendering and publishing for the 劇團 或素翔鷺
//! (Gekidan Alstro) site. Catalog data comes from `alstro-content`.

pub mod config;
pub mod contact;
pub mod domain;
pub mod filter;
pub mod metrics;
pub mod obs;
pub mod pages;
pub mod publish;
pub mod render;
pub mod routes;
pub mod slider;
pub mod telemetry;

pub use config::SiteConfig;
pub use contact::{
    submit, Acknowledgment, ContactError, ContactForm, ContactResult, ContactTransport,
    StubTransport,
};
pub use domain::{Result, SiteError};
pub use filter::{available_tags, partition, ActivityPartition, FilterView, TagFilter, TagSelection};
pub use pages::{PageState, PageView, Site};
pub use publish::{publish_site, SiteManifest};
pub use render::{render_document, render_path};
pub use routes::{resolve, Route, NAV_ITEMS};
pub use slider::{SlideRotation, SlideShow, SLIDE_INTERVAL};

pub use metrics::METRICS;
pub use obs::ViewSpan;
pub use telemetry::init_tracing;

/// Alstro version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
