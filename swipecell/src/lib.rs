//! A swipeable row widget for the terminal.
//!
//! Dragging a cell's content horizontally with the mouse reveals an action
//! button beneath it; releasing settles the cell open or closed depending on
//! whether the drag crossed the button's midpoint, and tapping the content
//! while open closes it again. The widget is a self-contained state machine
//! (gesture recognizer, position model, transition animator) driven by
//! pointer events and a frame-loop `tick`, so it can be embedded in any
//! mouse-capable terminal host.

pub mod buffer;
pub mod easing;
pub mod error;
pub mod event;
pub mod gesture;
pub mod position;
pub mod rect;
pub mod style;
pub mod terminal;
pub mod transition;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use easing::Easing;
pub use error::BuildError;
pub use event::PointerEvent;
pub use gesture::{GestureRecognizer, GestureUpdate, CAPTURE_THRESHOLD};
pub use position::{Position, PositionModel};
pub use rect::Rect;
pub use style::{Rgb, Style, SwipeStyles};
pub use terminal::SwipeTerminal;
pub use transition::{Animator, Completion, Settle, TransitionConfig};
pub use widget::{Content, EventResult, SwipeCell, SwipeCellBuilder, SwipeCellId, SwipePhase, Target};
