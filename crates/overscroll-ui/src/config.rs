use overscroll_animation::AnimationSpec;
use overscroll_foundation::ViewConfiguration;

/// Construction-time settings for an [`crate::OverscrollContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverscrollConfig {
    /// Source of the touch slop. Read once when the container is built.
    pub view_configuration: ViewConfiguration,
    /// Shape and length of the return to rest. Defaults to 300 ms decelerate.
    pub return_animation: AnimationSpec,
}

impl OverscrollConfig {
    pub fn with_view_configuration(mut self, view_configuration: ViewConfiguration) -> Self {
        self.view_configuration = view_configuration;
        self
    }

    pub fn with_return_animation(mut self, return_animation: AnimationSpec) -> Self {
        self.return_animation = return_animation;
        self
    }
}
