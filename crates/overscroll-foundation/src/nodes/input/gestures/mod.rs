pub mod overscroll_drag;

pub use overscroll_drag::{GestureUpdate, OverscrollDragGesture};
