//! Pointer input plumbing and gesture recognition for the overscroll
//! container.

pub mod gesture_constants;
pub mod nodes;
mod view_configuration;

pub use gesture_constants::DRAG_THRESHOLD;
pub use nodes::input::gestures::{GestureUpdate, OverscrollDragGesture};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
pub use view_configuration::{ViewConfiguration, ViewConfigurationError};

pub mod prelude {
    pub use crate::nodes::input::prelude::*;
    pub use crate::view_configuration::ViewConfiguration;
}
