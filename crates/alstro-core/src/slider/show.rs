//! Mounted slide rotation controller.
//!
//! A [`SlideShow`] owns one [`SlideRotation`] and exactly one repeating ticker
//! for as long as it is mounted. The ticker runs on a fixed schedule: manual
//! `next`/`previous` calls change the index but never move the next tick.
//!
//! The ticker is a scoped resource. It is released by [`SlideShow::teardown`],
//! by [`SlideShow::reload`] before a new one is armed, and by `Drop` on every
//! other unmount path, so a dropped view can never keep rotating.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::rotation::{Direction, RotationTrigger, SlideRotation};
use crate::domain::{Result, SiteError, Slide};
use crate::metrics::METRICS;
use crate::obs;

/// Default rotation period.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(3000);

/// Repeating ticker bound to one rotation state.
struct Ticker {
    handle: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
    state: Arc<watch::Sender<SlideRotation>>,
}

impl Ticker {
    fn arm(state: Arc<watch::Sender<SlideRotation>>, period: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let task_state = Arc::clone(&state);
        let task_cancelled = Arc::clone(&cancelled);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                step(&task_state, RotationTrigger::Tick, Some(task_cancelled.as_ref()));
            }
        });

        obs::emit_ticker_armed(period.as_millis() as u64);
        Self {
            handle,
            cancelled,
            state,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Flip the flag under the watch lock so a tick racing on another
        // worker either lands before this point or not at all.
        let cancelled = &self.cancelled;
        self.state.send_if_modified(|_| {
            cancelled.store(true, Ordering::SeqCst);
            false
        });
        self.handle.abort();
        obs::emit_ticker_disarmed();
    }
}

/// Apply one trigger to the shared state, notifying watchers on change.
fn step(
    state: &watch::Sender<SlideRotation>,
    trigger: RotationTrigger,
    cancelled: Option<&AtomicBool>,
) -> Option<usize> {
    let mut index = None;
    let changed = state.send_if_modified(|rotation| {
        if cancelled.is_some_and(|c| c.load(Ordering::SeqCst)) {
            return false;
        }
        let changed = rotation.apply(trigger);
        index = rotation.current_index();
        changed
    });
    if changed {
        METRICS.inc_slides_rotated();
        obs::emit_slide_rotated(trigger.as_str(), index);
    }
    index
}

/// The slide rotation controller of a mounted slider view.
pub struct SlideShow {
    state: Arc<watch::Sender<SlideRotation>>,
    period: Duration,
    ticker: Option<Ticker>,
}

impl SlideShow {
    /// Mount the controller and arm its ticker.
    ///
    /// An absent catalog fails with [`SiteError::InvalidCatalog`] and arms
    /// nothing. An empty catalog is valid: it mounts, shows no slide, and its
    /// ticks change nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(catalog: Option<Arc<[Slide]>>, period: Duration) -> Result<Self> {
        let catalog = catalog.ok_or(SiteError::InvalidCatalog("slide"))?;
        if period.is_zero() {
            return Err(SiteError::InvalidConfig(
                "slide interval must be greater than zero".to_string(),
            ));
        }
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(SiteError::InvalidConfig(
                "slide show must be mounted inside a tokio runtime".to_string(),
            ));
        }

        let (tx, _rx) = watch::channel(SlideRotation::new(catalog));
        let state = Arc::new(tx);
        let ticker = Ticker::arm(Arc::clone(&state), period);
        Ok(Self {
            state,
            period,
            ticker: Some(ticker),
        })
    }

    /// Manual "next" control.
    pub fn next(&self) -> Option<usize> {
        step(
            &self.state,
            RotationTrigger::Manual {
                direction: Direction::Forward,
            },
            None,
        )
    }

    /// Manual "previous" control.
    pub fn previous(&self) -> Option<usize> {
        step(
            &self.state,
            RotationTrigger::Manual {
                direction: Direction::Backward,
            },
            None,
        )
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.borrow().current_index()
    }

    pub fn current_slide(&self) -> Option<Slide> {
        self.state.borrow().current_slide().cloned()
    }

    /// Observe every index change.
    pub fn subscribe(&self) -> watch::Receiver<SlideRotation> {
        self.state.subscribe()
    }

    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Swap in a new catalog, restarting from the first slide.
    ///
    /// The current ticker is disarmed before the replacement is armed. An
    /// absent catalog is rejected and leaves the running show untouched.
    pub fn reload(&mut self, catalog: Option<Arc<[Slide]>>) -> Result<()> {
        let catalog = catalog.ok_or(SiteError::InvalidCatalog("slide"))?;
        drop(self.ticker.take());
        self.state.send_replace(SlideRotation::new(catalog));
        self.ticker = Some(Ticker::arm(Arc::clone(&self.state), self.period));
        Ok(())
    }

    /// Unmount: disarm the ticker. Consumes the controller, so it can only
    /// happen once.
    pub fn teardown(mut self) {
        drop(self.ticker.take());
    }
}

impl Drop for SlideShow {
    fn drop(&mut self) {
        drop(self.ticker.take());
    }
}

impl std::fmt::Debug for SlideShow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideShow")
            .field("current_index", &self.current_index())
            .field("period", &self.period)
            .field("armed", &self.is_armed())
            .finish()
    }
}
