//! Horizontal drag recognition.
//!
//! The recognizer decides at the first meaningful movement whether the swipe
//! cell becomes the exclusive handler of a pointer sequence. Vertical-only or
//! sub-threshold motion is left to ancestor handlers so scrolling keeps
//! working; once captured, the gesture is never yielded back until release.

/// Cumulative horizontal displacement (in cells) past which a gesture is
/// claimed, in either direction.
pub const CAPTURE_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Armed { origin_x: f32 },
    Captured { origin_x: f32 },
}

/// Outcome of feeding a pointer sample to the recognizer.
///
/// All deltas are signed and cumulative since pointer-down, not since the
/// previous sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// No active gesture, or movement still below the capture threshold;
    /// ancestors keep the event.
    NotCaptured,
    /// First movement past the threshold; the widget claims the gesture.
    Captured { dx: f32 },
    /// Movement while captured.
    Moved { dx: f32 },
    /// Terminal release of a captured gesture with the final delta.
    Released { dx: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureRecognizer {
    phase: Phase,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Arm on pointer-down. The press itself is never claimed.
    pub fn begin(&mut self, x: u16, _y: u16) {
        self.phase = Phase::Armed {
            origin_x: x as f32,
        };
    }

    /// Feed a pointer movement.
    pub fn update(&mut self, x: u16, _y: u16) -> GestureUpdate {
        match self.phase {
            Phase::Idle => GestureUpdate::NotCaptured,
            Phase::Armed { origin_x } => {
                let dx = x as f32 - origin_x;
                if dx < -CAPTURE_THRESHOLD || dx > CAPTURE_THRESHOLD {
                    self.phase = Phase::Captured { origin_x };
                    log::debug!("[swipe] gesture captured at dx={dx}");
                    GestureUpdate::Captured { dx }
                } else {
                    GestureUpdate::NotCaptured
                }
            }
            Phase::Captured { origin_x } => GestureUpdate::Moved {
                dx: x as f32 - origin_x,
            },
        }
    }

    /// Feed the pointer release and reset.
    ///
    /// Emits `Released` only for a captured gesture; a press that never
    /// crossed the threshold stays unclaimed so taps can be dispatched.
    pub fn finish(&mut self, x: u16, _y: u16) -> GestureUpdate {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Captured { origin_x } => GestureUpdate::Released {
                dx: x as f32 - origin_x,
            },
            _ => GestureUpdate::NotCaptured,
        }
    }

    pub fn is_captured(&self) -> bool {
        matches!(self.phase, Phase::Captured { .. })
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
