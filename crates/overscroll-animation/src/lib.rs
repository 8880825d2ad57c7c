//! Time-based animation for the overscroll container.
//!
//! [`Easing`] and [`AnimationSpec`] describe the shape and length of an
//! animation; [`ReturnAnimation`] is a single frame-driven run that brings an
//! integer offset back to rest.

mod animation;
mod return_animation;

pub use animation::{AnimationSpec, Easing};
pub use return_animation::{AnimationFrame, ReturnAnimation};
