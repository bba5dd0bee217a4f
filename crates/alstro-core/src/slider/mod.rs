//! Slide Rotation Controller.
//!
//! - [`SlideRotation`]: the pure index state machine
//! - [`SlideShow`]: the mounted controller that drives it from a repeating
//!   timer and from the manual arrow controls

pub mod rotation;
pub mod show;

pub use rotation::{Direction, RotationTrigger, SlideRotation};
pub use show::{SlideShow, SLIDE_INTERVAL};
