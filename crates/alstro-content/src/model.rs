//! Catalog data model.
//!
//! These are the records the site is assembled from. They mirror the JSON
//! catalog document one to one, so a bundle exported by a content editor can
//! be loaded without any mapping layer.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

// ---------------------------------------------------------------------------
// Slides
// ---------------------------------------------------------------------------

/// One entry of the home page activity slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Stable identifier, unique within the catalog.
    pub id: u32,
    /// Promotional image.
    pub image_url: String,
    pub title: String,
    /// Free-form schedule text, e.g. `2025年4月15日（火）〜 4月20日（日）`.
    pub schedule: String,
    /// Route path or external URL the slide points at.
    pub link: String,
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

/// Category of an activity. Drives the tag filter on the activities page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityTag {
    Performance,
    Event,
    Recruitment,
    External,
}

impl ActivityTag {
    pub const ALL: [ActivityTag; 4] = [
        ActivityTag::Performance,
        ActivityTag::Event,
        ActivityTag::Recruitment,
        ActivityTag::External,
    ];

    /// Label shown on tag chips and filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityTag::Performance => "公演",
            ActivityTag::Event => "イベント",
            ActivityTag::Recruitment => "募集",
            ActivityTag::External => "外部",
        }
    }

    /// ASCII form used on the command line and in catalog documents.
    pub fn slug(&self) -> &'static str {
        match self {
            ActivityTag::Performance => "performance",
            ActivityTag::Event => "event",
            ActivityTag::Recruitment => "recruitment",
            ActivityTag::External => "external",
        }
    }
}

impl fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity tag: {0}")]
pub struct ParseTagError(pub String);

impl FromStr for ActivityTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ActivityTag::ALL
            .into_iter()
            .find(|tag| tag.label() == needle || tag.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseTagError(s.to_string()))
    }
}

/// Whether an activity is listed as current/upcoming or past.
///
/// Assigned by whoever curates the catalog; it is never derived from the
/// activity dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[serde(rename = "current")]
    Upcoming,
    #[serde(rename = "past")]
    Past,
}

/// One entry of the activity catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub title: String,
    pub tag: ActivityTag,
    pub description: String,
    pub status: ActivityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

impl Activity {
    /// `2025.04.15`, or `2025.04.15 〜 2025.04.20` when an end date is set.
    pub fn date_label(&self) -> String {
        match self.end_date {
            Some(end) => format!(
                "{} 〜 {}",
                self.start_date.format("%Y.%m.%d"),
                end.format("%Y.%m.%d")
            ),
            None => self.start_date.format("%Y.%m.%d").to_string(),
        }
    }

    /// Check `end_date >= start_date`.
    ///
    /// Controllers never call this; it is offered to whoever supplies the
    /// catalog.
    pub fn validate_dates(&self) -> Result<(), ContentError> {
        match self.end_date {
            Some(end) if end < self.start_date => Err(ContentError::InvalidEntry {
                id: self.id,
                reason: format!(
                    "end date {} is before start date {}",
                    end, self.start_date
                ),
            }),
            _ => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// A line on the home page news board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub date: NaiveDate,
    pub title: String,
    pub tag: ActivityTag,
    pub link: String,
}

impl NewsItem {
    pub fn date_label(&self) -> String {
        self.date.format("%Y.%m.%d").to_string()
    }
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// Everything a content source hands to the site in one load.
///
/// `slides` and `activities` are optional on purpose: a document that omits
/// them has no catalog at all, which is different from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBundle {
    #[serde(default)]
    pub slides: Option<Vec<Slide>>,
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}
