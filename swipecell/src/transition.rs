//! Time-based transitions of the content offset.
//!
//! The animator is a single-slot scheduler over one shared value: starting a
//! new transition supersedes whatever is in flight, which is the only form of
//! cancellation. Sampling is poll-based against an explicit `Instant`, so a
//! frame loop drives it and tests can manufacture clocks.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Duration, curve and optional start delay of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    /// Fixed-duration settle after a drag release.
    pub const SETTLE: TransitionConfig = TransitionConfig {
        delay: Duration::ZERO,
        duration: Duration::from_millis(150),
        easing: Easing::Linear,
    };

    /// Mount-time demonstration: wait, then glide back from the peeked offset.
    pub const PEEK: TransitionConfig = TransitionConfig {
        delay: Duration::from_millis(400),
        duration: Duration::from_millis(1200),
        easing: Easing::ExpInOut,
    };

    /// Programmatic close triggered by the tap catcher.
    pub const CLOSE: TransitionConfig = TransitionConfig {
        delay: Duration::ZERO,
        duration: Duration::from_millis(400),
        easing: Easing::Spring,
    };

    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// What the widget records once a transition lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// Rest at the revealed position; the open flag becomes true.
    Open,
    /// Rest at the origin; the open flag becomes false.
    Closed,
    /// Purely cosmetic (mount peek); no flag update follows.
    Cosmetic,
}

/// Reported exactly once when a transition runs its course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Completion {
    /// Final value, snapped to the target.
    pub x: f32,
    pub settle: Settle,
}

#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: f32,
    to: f32,
    start: Instant,
    config: TransitionConfig,
    settle: Settle,
}

impl ActiveTransition {
    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.start);
        if elapsed < self.config.delay {
            return self.from;
        }
        let run = elapsed - self.config.delay;
        let progress = if self.config.duration.is_zero() {
            1.0
        } else {
            (run.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.config.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    fn is_complete(&self, now: Instant) -> bool {
        now.duration_since(self.start) >= self.config.delay + self.config.duration
    }
}

/// Single-slot animation scheduler for the content offset.
#[derive(Debug, Default)]
pub struct Animator {
    active: Option<ActiveTransition>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the in-flight transition, if any.
    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(|t| t.to)
    }

    /// Start a transition from `from` to `to`. Any transition already in
    /// flight is superseded; the slot is single-valued.
    pub fn animate_to(
        &mut self,
        from: f32,
        to: f32,
        config: TransitionConfig,
        settle: Settle,
        now: Instant,
    ) {
        if let Some(prev) = &self.active {
            log::debug!("[swipe] transition to {} superseded by {to}", prev.to);
        }
        self.active = Some(ActiveTransition {
            from,
            to,
            start: now,
            config,
            settle,
        });
    }

    /// Drop the in-flight transition without completing it.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Interpolated value at `now`; holds `from` while the start delay runs.
    /// None when idle.
    pub fn sample(&self, now: Instant) -> Option<f32> {
        self.active.as_ref().map(|t| t.value_at(now))
    }

    /// Report the completion once the transition has run its course,
    /// clearing the slot. Subsequent calls return None until a new
    /// transition is started.
    pub fn tick(&mut self, now: Instant) -> Option<Completion> {
        let t = self.active.as_ref()?;
        if !t.is_complete(now) {
            return None;
        }
        let done = Completion {
            x: t.to,
            settle: t.settle,
        };
        self.active = None;
        Some(done)
    }
}
