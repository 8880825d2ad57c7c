//! Touch-driven horizontal overscroll container.
//!
//! [`OverscrollContainer`] hosts a single view created by an
//! [`OverscrollPolicy`]. When the policy allows it, a leftward drag past the
//! touch slop pulls the view along with the finger; on release the view eases
//! back to rest over a fixed duration, paced by the runtime's frame clock.

mod config;
mod overscroll_container;
mod policy;

pub use config::OverscrollConfig;
pub use overscroll_container::{OverscrollContainer, OverscrollState, TouchDisposition};
pub use policy::{policy_fn, FnPolicy, HostedView, OverscrollPolicy};

pub use overscroll_animation::{AnimationSpec, Easing};
pub use overscroll_foundation::{PointerEvent, PointerEventKind, ViewConfiguration};
pub use overscroll_ui_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::config::OverscrollConfig;
    pub use crate::overscroll_container::{OverscrollContainer, OverscrollState, TouchDisposition};
    pub use crate::policy::{policy_fn, HostedView, OverscrollPolicy};
}
