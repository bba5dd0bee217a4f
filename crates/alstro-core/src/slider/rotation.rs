//! Slide rotation state machine.
//!
//! One state, `displaying(index)`, and two triggers. A timer tick and a manual
//! "next" share the same update rule; "previous" is its inverse. Catalogs with
//! fewer than two slides never move.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::Slide;

/// Direction of a manual slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// What caused a rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RotationTrigger {
    /// The repeating timer fired.
    Tick,
    /// A visitor pressed one of the arrow controls.
    Manual { direction: Direction },
}

impl RotationTrigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationTrigger::Tick => "tick",
            RotationTrigger::Manual {
                direction: Direction::Forward,
            } => "manual_forward",
            RotationTrigger::Manual {
                direction: Direction::Backward,
            } => "manual_backward",
        }
    }
}

/// Index of the visible slide within a fixed catalog.
///
/// # Invariants
///
/// `index` is `Some(i)` with `i < catalog.len()` for a non-empty catalog and
/// `None` for an empty one.
#[derive(Debug, Clone)]
pub struct SlideRotation {
    catalog: Arc<[Slide]>,
    index: Option<usize>,
}

impl SlideRotation {
    /// Start on the first slide.
    pub fn new(catalog: Arc<[Slide]>) -> Self {
        let index = if catalog.is_empty() { None } else { Some(0) };
        Self { catalog, index }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Whether any trigger can change the index.
    pub fn rotates(&self) -> bool {
        self.catalog.len() > 1
    }

    pub fn catalog(&self) -> &[Slide] {
        &self.catalog
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// The visible slide, or `None` when the catalog is empty.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.index.and_then(|i| self.catalog.get(i))
    }

    /// `index = (index + 1) mod len`. No-op for fewer than two slides.
    pub fn advance(&mut self) {
        let len = self.catalog.len();
        if len <= 1 {
            return;
        }
        if let Some(i) = self.index {
            self.index = Some((i + 1) % len);
        }
    }

    /// `index = (index - 1 + len) mod len`. No-op for fewer than two slides.
    pub fn retreat(&mut self) {
        let len = self.catalog.len();
        if len <= 1 {
            return;
        }
        if let Some(i) = self.index {
            self.index = Some((i + len - 1) % len);
        }
    }

    /// Apply a trigger and report whether the index changed.
    pub fn apply(&mut self, trigger: RotationTrigger) -> bool {
        let before = self.index;
        match trigger {
            RotationTrigger::Tick
            | RotationTrigger::Manual {
                direction: Direction::Forward,
            } => self.advance(),
            RotationTrigger::Manual {
                direction: Direction::Backward,
            } => self.retreat(),
        }
        before != self.index
    }
}
