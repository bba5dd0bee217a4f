//! Page views.
//!
//! Every page is an ordered list of [`Section`]s made of [`Block`]s. Static
//! text lives in the page modules as constants; catalog-backed blocks borrow
//! from the [`Site`] they were built from. Building a page never mutates
//! anything, so the same `Site` can render any number of pages.

pub mod about;
pub mod activities;
pub mod bunkou;
pub mod contact;
pub mod home;
pub mod shell;

use std::sync::Arc;
use std::time::Duration;

use alstro_content::CatalogSource;
use tracing::info;

use crate::contact::FormField;
use crate::domain::{Activity, CatalogBundle, NewsItem, Result, SiteError, Slide};
use crate::filter::{FilterView, TagFilter};
use crate::obs::{self, ViewSpan};
use crate::routes::{self, Route};
use crate::slider::{SlideRotation, SlideShow};

/// An image with alternative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
    pub class: &'static str,
}

/// A hyperlink. `http…` targets open in a new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    pub aria_label: Option<&'static str>,
}

impl Link {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// The slider as it should appear right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderView<'a> {
    /// All slides, in catalog order. Empty when the catalog is empty or absent.
    pub slides: &'a [Slide],
    /// Index of the one visible slide.
    pub active: Option<usize>,
}

/// One content block of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Hero {
        title: &'static str,
        roman: &'static str,
        catchphrase: &'static str,
        background: &'static str,
    },
    Heading {
        level: u8,
        class: &'static str,
        text: &'static str,
    },
    /// One `<p>` per line; an empty line is kept as a spacer.
    Lines {
        class: &'static str,
        lines: &'static [&'static str],
    },
    Note {
        class: &'static str,
        text: &'static str,
    },
    Images(&'static [Image]),
    Links(&'static [Link]),
    News(&'a [NewsItem]),
    Slider(SliderView<'a>),
    Activities(FilterView<'a>),
    ContactForm(&'static [FormField]),
}

/// A titled group of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub class: &'static str,
    pub blocks: Vec<Block<'a>>,
}

impl<'a> Section<'a> {
    pub fn new(class: &'static str, blocks: Vec<Block<'a>>) -> Self {
        Self { class, blocks }
    }
}

/// A fully built page, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// `None` for a path that matched no route: the shell renders around an
    /// empty main area.
    pub route: Option<Route>,
    pub title: String,
    pub sections: Vec<Section<'a>>,
}

/// Per-view controller state supplied by whoever renders the page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Selection of the activities tag filter.
    pub filter: TagFilter,
    /// Rotation state of the home slider; a fresh rotation (first slide) when
    /// `None`.
    pub slider: Option<SlideRotation>,
}

/// The loaded catalogs of the site.
#[derive(Debug, Clone, Default)]
pub struct Site {
    slides: Option<Arc<[Slide]>>,
    activities: Option<Vec<Activity>>,
    news: Vec<NewsItem>,
}

impl Site {
    pub fn from_bundle(bundle: CatalogBundle) -> Self {
        Self {
            slides: bundle.slides.map(Arc::from),
            activities: bundle.activities,
            news: bundle.news,
        }
    }

    /// Load every catalog from a content source.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let bundle = source.load().await?;
        info!(source = %source.describe(), "site catalogs loaded");
        Ok(Self::from_bundle(bundle))
    }

    pub fn slides(&self) -> Option<&Arc<[Slide]>> {
        self.slides.as_ref()
    }

    pub fn activities(&self) -> Option<&[Activity]> {
        self.activities.as_deref()
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    /// A rotation positioned on the first slide.
    pub fn rotation(&self) -> Result<SlideRotation> {
        self.slides
            .clone()
            .map(SlideRotation::new)
            .ok_or(SiteError::InvalidCatalog("slide"))
    }

    /// Mount a live slide show over the slide catalog.
    pub fn mount_slideshow(&self, period: Duration) -> Result<SlideShow> {
        SlideShow::mount(self.slides.clone(), period)
    }

    /// Build the page for a route.
    pub fn page(&self, route: Route, state: &PageState) -> PageView<'_> {
        let _span = ViewSpan::enter(route.path());
        let sections = match route {
            Route::Home => home::sections(self, state.slider.as_ref()),
            Route::About => about::sections(),
            Route::Activities => activities::sections(self, &state.filter),
            Route::Bunkou => bunkou::sections(),
            Route::Contact => contact::sections(),
        };
        PageView {
            route: Some(route),
            title: document_title(Some(route)),
            sections,
        }
    }

    /// Build the page for a URL path; unknown paths yield an empty page.
    pub fn page_for_path(&self, path: &str, state: &PageState) -> PageView<'_> {
        match routes::resolve(path) {
            Some(route) => self.page(route, state),
            None => PageView {
                route: None,
                title: document_title(None),
                sections: Vec::new(),
            },
        }
    }

    /// Slider state for the home page, falling back to an empty slider when
    /// the catalog is absent.
    pub(crate) fn slider_view<'a>(&'a self, rotation: Option<&SlideRotation>) -> SliderView<'a> {
        match &self.slides {
            Some(slides) => {
                let active = match rotation {
                    Some(r) => r.current_index(),
                    None => SlideRotation::new(Arc::clone(slides)).current_index(),
                };
                SliderView {
                    slides: slides.as_ref(),
                    active,
                }
            }
            None => {
                obs::emit_slider_unavailable(&SiteError::InvalidCatalog("slide"));
                SliderView {
                    slides: &[],
                    active: None,
                }
            }
        }
    }
}

fn document_title(route: Option<Route>) -> String {
    match route {
        Some(Route::Home) | None => shell::COMPANY_NAME.to_string(),
        Some(route) => format!("{} | {}", route.title(), shell::COMPANY_NAME),
    }
}
