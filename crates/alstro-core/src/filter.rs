//! Tag Filter Controller for the activities page.
//!
//! The only state is the selected tag. The tag list, the filtered list and
//! its current/past partition are pure functions of `(catalog, selection)`
//! and are recomputed on every render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{Activity, ActivityStatus, ActivityTag, ParseTagError};
use crate::metrics::METRICS;
use crate::obs;

/// Label of the catch-all filter button.
pub const ALL_LABEL: &str = "すべて";

/// A filter button: everything, or one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagSelection {
    #[default]
    All,
    Tag(ActivityTag),
}

impl TagSelection {
    pub fn label(&self) -> &'static str {
        match self {
            TagSelection::All => ALL_LABEL,
            TagSelection::Tag(tag) => tag.label(),
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            TagSelection::All => "all",
            TagSelection::Tag(tag) => tag.slug(),
        }
    }

    /// Whether an activity passes this selection.
    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            TagSelection::All => true,
            TagSelection::Tag(tag) => activity.tag == *tag,
        }
    }
}

impl fmt::Display for TagSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<ActivityTag> for TagSelection {
    fn from(tag: ActivityTag) -> Self {
        TagSelection::Tag(tag)
    }
}

impl FromStr for TagSelection {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if needle == ALL_LABEL || needle.eq_ignore_ascii_case("all") {
            return Ok(TagSelection::All);
        }
        needle.parse::<ActivityTag>().map(TagSelection::Tag)
    }
}

/// `[All]` followed by every tag used in the catalog, deduplicated, in order
/// of first appearance.
pub fn available_tags(catalog: &[Activity]) -> Vec<TagSelection> {
    let mut tags = vec![TagSelection::All];
    for activity in catalog {
        let tag = TagSelection::Tag(activity.tag);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Filtered activities split by status. Relative order is preserved in both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityPartition<'a> {
    pub current: Vec<&'a Activity>,
    pub past: Vec<&'a Activity>,
}

impl ActivityPartition<'_> {
    /// Both sides empty: the page shows the "no matching activity" placeholder.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.current.len() + self.past.len()
    }
}

/// Split a filtered list into current/upcoming and past entries.
pub fn partition<'a>(filtered: &[&'a Activity]) -> ActivityPartition<'a> {
    let (current, past): (Vec<&Activity>, Vec<&Activity>) = filtered
        .iter()
        .copied()
        .partition(|a| a.status == ActivityStatus::Upcoming);
    ActivityPartition { current, past }
}

/// Everything the activities page needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView<'a> {
    pub tags: Vec<TagSelection>,
    pub selected: TagSelection,
    pub partition: ActivityPartition<'a>,
}

/// Holds the selected tag of a mounted activities page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFilter {
    selected: TagSelection,
}

impl TagFilter {
    /// Starts on [`TagSelection::All`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selected: TagSelection) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> TagSelection {
        self.selected
    }

    /// Select a tag. Tags absent from the catalog are legal and simply match
    /// nothing.
    pub fn select(&mut self, tag: TagSelection) {
        self.selected = tag;
        METRICS.inc_filter_selections();
    }

    /// Catalog entries passing the selection, in catalog order.
    pub fn filtered<'a>(&self, catalog: &'a [Activity]) -> Vec<&'a Activity> {
        catalog.iter().filter(|a| self.selected.matches(a)).collect()
    }

    /// Tags, selection and partition for the renderer.
    pub fn view<'a>(&self, catalog: &'a [Activity]) -> FilterView<'a> {
        let filtered = self.filtered(catalog);
        let partition = partition(&filtered);
        obs::emit_filter_selected(
            self.selected.slug(),
            partition.current.len(),
            partition.past.len(),
        );
        FilterView {
            tags: available_tags(catalog),
            selected: self.selected,
            partition,
        }
    }
}
