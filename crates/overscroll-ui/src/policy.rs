use overscroll_ui_graphics::Rect;

/// A view the container can lay out.
pub trait HostedView {
    /// Positions the view inside the container. Called with the container's
    /// full bounds.
    fn place(&mut self, bounds: Rect);
}

/// Decides when overscroll is allowed and supplies the hosted view.
pub trait OverscrollPolicy {
    type View: HostedView;

    /// Cheap, side-effect free query made when a drag first crosses the
    /// touch slop.
    fn can_overscroll_at_end(&self) -> bool;

    /// Called exactly once, when the container is built.
    fn create_view(&mut self) -> Self::View;
}

/// Policy assembled from two closures. See [`policy_fn`].
pub struct FnPolicy<C, F, V> {
    can_overscroll_at_end: C,
    create_view: F,
    _view: std::marker::PhantomData<fn() -> V>,
}

/// Builds a policy from a permission query and a view factory.
pub fn policy_fn<C, F, V>(can_overscroll_at_end: C, create_view: F) -> FnPolicy<C, F, V>
where
    C: Fn() -> bool,
    F: FnMut() -> V,
    V: HostedView,
{
    FnPolicy {
        can_overscroll_at_end,
        create_view,
        _view: std::marker::PhantomData,
    }
}

impl<C, F, V> OverscrollPolicy for FnPolicy<C, F, V>
where
    C: Fn() -> bool,
    F: FnMut() -> V,
    V: HostedView,
{
    type View = V;

    fn can_overscroll_at_end(&self) -> bool {
        (self.can_overscroll_at_end)()
    }

    fn create_view(&mut self) -> V {
        (self.create_view)()
    }
}

impl<C, F, V> std::fmt::Debug for FnPolicy<C, F, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPolicy").finish_non_exhaustive()
    }
}
