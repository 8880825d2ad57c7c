pub mod gestures;
pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerId, PointerPhase};

pub mod prelude {
    pub use super::gestures::{GestureUpdate, OverscrollDragGesture};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
}
