//! Pointer events driving the swipe gesture.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A single touch of the pointer sequence: press, movement with the button
/// held, release. Release is the only terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: u16, y: u16 },
    Move { x: u16, y: u16 },
    Up { x: u16, y: u16 },
}

impl PointerEvent {
    /// Decode a crossterm mouse event. Only the left button participates in
    /// the gesture; everything else is None.
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Down {
                x: event.column,
                y: event.row,
            }),
            MouseEventKind::Drag(MouseButton::Left) => Some(Self::Move {
                x: event.column,
                y: event.row,
            }),
            MouseEventKind::Up(MouseButton::Left) => Some(Self::Up {
                x: event.column,
                y: event.row,
            }),
            _ => None,
        }
    }
}
