//! The swipe cell widget: state machine, pointer dispatch and rendering.

mod events;
mod render;
mod state;

pub use events::EventResult;
pub use state::{Content, SwipeCell, SwipeCellBuilder, SwipeCellId, SwipePhase, Target};
