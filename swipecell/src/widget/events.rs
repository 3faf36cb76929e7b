//! Pointer event handling for the swipe cell.
//!
//! The cell claims a pointer sequence only once the recognizer captures it;
//! presses and sub-threshold motion stay `Ignored` so the host can route
//! them to the wrapped content or keep scrolling.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::event::PointerEvent;
use crate::gesture::GestureUpdate;

use super::state::{Inner, PressHandler};
use super::SwipeCell;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation on this widget.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// What a resolved tap should do, decided under the state lock and executed
/// after it is released.
enum TapAction {
    Close,
    Press(Arc<Mutex<PressHandler>>),
    None,
}

impl SwipeCell {
    /// Route a pointer event through the gesture recognizer and, for plain
    /// taps, the hit regions recorded by the last render.
    pub fn handle_pointer(&self, event: PointerEvent, now: Instant) -> EventResult {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up { x, y } => self.on_pointer_up(x, y, now),
        }
    }

    fn on_pointer_down(&self, x: u16, y: u16) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.disposed || !guard.regions.area.contains(x, y) {
            return EventResult::Ignored;
        }
        guard.recognizer.begin(x, y);
        // The press itself is never claimed; capture happens on movement.
        EventResult::Ignored
    }

    fn on_pointer_move(&self, x: u16, y: u16) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.disposed {
            return EventResult::Ignored;
        }
        match guard.recognizer.update(x, y) {
            GestureUpdate::Captured { dx } => {
                guard.apply_drag(dx);
                self.dirty.store(true, Ordering::SeqCst);
                EventResult::StartDrag
            }
            GestureUpdate::Moved { dx } => {
                guard.apply_drag(dx);
                self.dirty.store(true, Ordering::SeqCst);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Releases resolve under the state lock; plain taps only decide there.
    /// The tap action runs after the guard is dropped, so the press handler
    /// is free to call back into the widget (for example `request_close`)
    /// without deadlocking.
    fn on_pointer_up(&self, x: u16, y: u16, now: Instant) -> EventResult {
        let action = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            if guard.disposed {
                return EventResult::Ignored;
            }
            match guard.recognizer.finish(x, y) {
                GestureUpdate::Released { dx } => {
                    guard.resolve_release(dx, now);
                    self.dirty.store(true, Ordering::SeqCst);
                    return EventResult::Consumed;
                }
                _ => tap_action(&guard, x, y),
            }
        };

        match action {
            TapAction::Close => {
                log::debug!("[swipe] tap catcher hit, closing");
                self.request_close(now);
                EventResult::Consumed
            }
            TapAction::Press(handler) => {
                log::debug!("[swipe] action button pressed");
                if let Ok(mut press) = handler.lock() {
                    press();
                }
                EventResult::Consumed
            }
            TapAction::None => EventResult::Ignored,
        }
    }
}

/// A press that never became a drag: route it to the tap catcher or the
/// revealed part of the action button.
fn tap_action(inner: &Inner, x: u16, y: u16) -> TapAction {
    if let Some(overlay) = inner.regions.overlay {
        if overlay.contains(x, y) {
            return TapAction::Close;
        }
    }
    if inner.regions.revealed.contains(x, y) {
        return TapAction::Press(Arc::clone(&inner.on_press));
    }
    TapAction::None
}
