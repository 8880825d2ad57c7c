//! Testing utilities and harness for the overscroll container.

mod stub;
pub mod testing;

pub use stub::{RecordingView, StubPolicy};
pub use testing::*;

pub mod prelude {
    pub use crate::stub::{RecordingView, StubPolicy};
    pub use crate::testing::*;
}
