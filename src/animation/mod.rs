//! Tick-driven animation timelines.
//!
//! The host frame loop calls [`AnimationClock::tick`] with the elapsed
//! wall-time since the previous frame. Progress is always derived from the
//! time elapsed since a timeline started, so dropped or late frames only cost
//! smoothness.

mod easing;

pub use easing::Easing;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Purpose of a timeline. A clock runs at most one timeline per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationRole {
    /// One-shot reveal played when data is set.
    Entry,
    /// Repeating angular offset of pie slices.
    Rotation,
}

/// Opaque reference to a started timeline.
///
/// Handles of cancelled or superseded timelines stay valid to pass around;
/// every query on them simply yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    id: u64,
    role: AnimationRole,
}

impl AnimationHandle {
    #[must_use]
    pub fn role(self) -> AnimationRole {
        self.role
    }
}

/// Read-only snapshot of one timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    handle: AnimationHandle,
    started_at_ms: f64,
    duration_ms: f64,
    repeating: bool,
    easing: Easing,
    running: bool,
}

impl Timeline {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn raw_progress_at(&self, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        if self.duration_ms <= 0.0 {
            return if self.repeating { 0.0 } else { 1.0 };
        }
        if self.repeating {
            // Restart mode: 1.0 is never observed, it wraps straight to 0.
            (elapsed % self.duration_ms) / self.duration_ms
        } else {
            (elapsed / self.duration_ms).min(1.0)
        }
    }
}

/// Maps elapsed time to normalized progress for every running timeline.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    now_ms: f64,
    next_id: u64,
    timelines: SmallVec<[Timeline; 2]>,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds accumulated by [`Self::tick`] and [`Self::tick_to`].
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Starts a timeline, silently cancelling any previous one of the same role.
    ///
    /// A non-finite or non-positive duration completes a one-shot timeline at
    /// once and pins a repeating timeline at progress 0.
    pub fn start(
        &mut self,
        role: AnimationRole,
        duration_ms: f64,
        repeating: bool,
        easing: Easing,
    ) -> AnimationHandle {
        self.cancel_role(role);

        let duration_ms = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        let handle = AnimationHandle {
            id: self.next_id,
            role,
        };
        self.next_id += 1;
        self.timelines.push(Timeline {
            handle,
            started_at_ms: self.now_ms,
            duration_ms,
            repeating,
            easing,
            running: repeating || duration_ms > 0.0,
        });
        debug!(?role, duration_ms, repeating, "start animation");
        handle
    }

    /// Advances the clock by `delta_ms`.
    ///
    /// Returns whether any timeline is still running afterwards. Negative or
    /// non-finite deltas are ignored.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            trace!(delta_ms, "ignoring invalid animation delta");
            return self.is_animating();
        }
        self.advance_to(self.now_ms + delta_ms)
    }

    /// Advances the clock to an absolute host time. Earlier times are ignored.
    pub fn tick_to(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() || now_ms < self.now_ms {
            trace!(now_ms, current_ms = self.now_ms, "ignoring stale animation time");
            return self.is_animating();
        }
        self.advance_to(now_ms)
    }

    fn advance_to(&mut self, now_ms: f64) -> bool {
        self.now_ms = now_ms;
        for timeline in &mut self.timelines {
            if timeline.running
                && !timeline.repeating
                && now_ms - timeline.started_at_ms >= timeline.duration_ms
            {
                timeline.running = false;
                trace!(role = ?timeline.handle.role, "animation finished");
            }
        }
        self.is_animating()
    }

    /// Eased progress in `[0, 1]`, or `None` once the timeline was cancelled.
    ///
    /// A finished one-shot timeline keeps reporting `1.0`.
    #[must_use]
    pub fn progress(&self, handle: AnimationHandle) -> Option<f64> {
        self.timeline(handle)
            .map(|timeline| timeline.easing.apply(timeline.raw_progress_at(self.now_ms)))
    }

    /// Linear progress in `[0, 1]` ignoring the timeline easing.
    #[must_use]
    pub fn raw_progress(&self, handle: AnimationHandle) -> Option<f64> {
        self.timeline(handle)
            .map(|timeline| timeline.raw_progress_at(self.now_ms))
    }

    #[must_use]
    pub fn timeline(&self, handle: AnimationHandle) -> Option<&Timeline> {
        self.timelines
            .iter()
            .find(|timeline| timeline.handle == handle)
    }

    #[must_use]
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.timeline(handle).is_some_and(Timeline::is_running)
    }

    #[must_use]
    pub fn is_role_running(&self, role: AnimationRole) -> bool {
        self.timelines
            .iter()
            .any(|timeline| timeline.handle.role == role && timeline.running)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.timelines.iter().any(|timeline| timeline.running)
    }

    /// Cancels the timeline behind `handle`. Unknown handles are a no-op.
    ///
    /// Returns whether a timeline was removed.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        let before = self.timelines.len();
        self.timelines.retain(|timeline| timeline.handle != handle);
        let cancelled = self.timelines.len() != before;
        if cancelled {
            debug!(role = ?handle.role, "cancel animation");
        }
        cancelled
    }

    pub fn cancel_role(&mut self, role: AnimationRole) -> bool {
        let before = self.timelines.len();
        self.timelines.retain(|timeline| timeline.handle.role != role);
        let cancelled = self.timelines.len() != before;
        if cancelled {
            debug!(?role, "cancel animation role");
        }
        cancelled
    }

    pub fn cancel_all(&mut self) {
        if !self.timelines.is_empty() {
            debug!(count = self.timelines.len(), "cancel all animations");
        }
        self.timelines.clear();
    }
}
