//! The animated offset of the content layer.

/// Two-dimensional offset. The swipe is horizontal, so `y` stays 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Holds the raw content offset.
///
/// Writes during a drag are direct and unclamped; the closed range
/// `[-button_width, 0]` is enforced only when reading the rendered offset,
/// never by mutating the stored value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionModel {
    value: Position,
}

impl PositionModel {
    pub fn new(x: f32) -> Self {
        Self {
            value: Position::new(x, 0.0),
        }
    }

    pub fn x(&self) -> f32 {
        self.value.x
    }

    pub fn get(&self) -> Position {
        self.value
    }

    pub fn set_x(&mut self, x: f32) {
        self.value.x = x;
    }

    /// Offset used for drawing: the raw value clamped through
    /// `[-button_width, 0]`. With an unmeasured button (width 0) this is
    /// always 0, so dragging open is visually a no-op.
    pub fn rendered_x(&self, button_width: f32) -> f32 {
        self.value.x.clamp(-button_width, 0.0)
    }
}

impl Default for PositionModel {
    fn default() -> Self {
        Self::new(0.0)
    }
}
