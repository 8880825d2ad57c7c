//! Horizontal overscroll container.
//!
//! The container feeds every pointer event to an [`OverscrollDragGesture`].
//! Claimed drags move the hosted view with the finger; on release a
//! [`ReturnAnimation`] is driven one tick per display frame until the offset
//! is back at exactly zero.
//!
//! Only one return run exists at a time. Each run gets a fresh id and its
//! frame callback carries that id, so a callback belonging to a replaced or
//! cancelled run does nothing when it fires. A new `Down` cancels the
//! running return before the next frame.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use overscroll_animation::ReturnAnimation;
use overscroll_core::{FrameCallbackRegistration, FrameClock};
use overscroll_foundation::{GestureUpdate, OverscrollDragGesture, PointerEvent, PointerEventKind};
use overscroll_ui_graphics::{Rect, Size};

use crate::config::OverscrollConfig;
use crate::policy::{HostedView, OverscrollPolicy};

/// Whether the container claimed a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchDisposition {
    /// Route the event on to the hosted view or ancestors.
    PassThrough,
    /// The container owns the event; it has been marked consumed.
    Intercept,
}

impl TouchDisposition {
    pub fn is_intercepted(self) -> bool {
        self == TouchDisposition::Intercept
    }
}

/// Per-gesture lifecycle: `Idle -> Dragging -> Returning -> Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverscrollState {
    Idle,
    Dragging,
    Returning,
}

pub struct OverscrollContainer<P: OverscrollPolicy + 'static> {
    inner: Rc<RefCell<ContainerInner<P>>>,
}

struct ContainerInner<P: OverscrollPolicy> {
    policy: P,
    view: P::View,
    gesture: OverscrollDragGesture,
    config: OverscrollConfig,
    frame_clock: FrameClock,
    bounds: Rect,
    offset: f32,
    redraw_requested: bool,
    animation: Option<ReturnAnimation>,
    run_id: u64,
    registration: Option<FrameCallbackRegistration>,
}

impl<P: OverscrollPolicy> ContainerInner<P> {
    fn apply_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.redraw_requested = true;
        log::trace!("overscroll offset -> {offset}");
    }

    fn scroll_x(&self) -> i32 {
        -(self.offset as i32)
    }

    /// Stops the current return run. Any callback it left behind is stale.
    fn cancel_return(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.cancel();
        }
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.run_id += 1;
    }
}

impl<P: OverscrollPolicy + 'static> OverscrollContainer<P> {
    pub fn new(policy: P, frame_clock: FrameClock) -> Self {
        Self::with_config(policy, frame_clock, OverscrollConfig::default())
    }

    /// Builds the container. The policy's view is created here, once, and the
    /// touch slop is read from `config`.
    pub fn with_config(mut policy: P, frame_clock: FrameClock, config: OverscrollConfig) -> Self {
        let view = policy.create_view();
        let touch_slop = config.view_configuration.scaled_touch_slop();
        log::debug!("overscroll container created with touch slop {touch_slop}px");
        let inner = ContainerInner {
            policy,
            view,
            gesture: OverscrollDragGesture::new(touch_slop),
            config,
            frame_clock,
            bounds: Rect::default(),
            offset: 0.0,
            redraw_requested: false,
            animation: None,
            run_id: 0,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Handles one pointer event and reports whether the container claims it.
    pub fn on_pointer_event(&self, event: &PointerEvent) -> TouchDisposition {
        let (update, return_from) = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let policy = &inner.policy;
            let update = inner
                .gesture
                .on_event(event.kind, event.position.x, || policy.can_overscroll_at_end());

            let return_from = match update {
                GestureUpdate::Pressed { .. } => {
                    if inner.animation.is_some() {
                        log::debug!("pointer down interrupts return animation");
                    }
                    inner.cancel_return();
                    None
                }
                GestureUpdate::Ignored => {
                    // A down that interrupted a return can leave the view off
                    // rest without a drag to release it.
                    let gesture_ended =
                        matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel);
                    let stranded = inner.offset != 0.0 && inner.animation.is_none();
                    (gesture_ended && stranded).then_some(inner.offset)
                }
                GestureUpdate::DragStarted { offset } | GestureUpdate::Dragged { offset } => {
                    inner.apply_offset(offset);
                    None
                }
                GestureUpdate::Released { offset } => {
                    inner.apply_offset(offset);
                    Some(offset)
                }
            };
            (update, return_from)
        };

        if let Some(from) = return_from {
            self.start_return(from);
        }
        if update.is_claimed() {
            event.consume();
            TouchDisposition::Intercept
        } else {
            TouchDisposition::PassThrough
        }
    }

    /// Moves the hosted view horizontally. The container scrolls to
    /// `-offset`, so the content follows the finger. Any value is accepted.
    pub fn set_offset(&self, offset: f32) {
        self.inner.borrow_mut().apply_offset(offset);
    }

    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    /// Integer scroll position of the content, `-(offset as i32)`.
    pub fn scroll_x(&self) -> i32 {
        self.inner.borrow().scroll_x()
    }

    /// Eases the hosted view from `from_offset` back to rest.
    ///
    /// Replaces any return that is still running.
    pub fn start_return(&self, from_offset: f32) {
        let run_id = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_return();
            let from = from_offset as i32;
            let spec = inner.config.return_animation;
            log::debug!(
                "return animation {} started from {from} over {}ms",
                inner.run_id,
                spec.duration_millis
            );
            inner.animation = Some(ReturnAnimation::new(from, spec));
            inner.run_id
        };
        Self::schedule_frame(&self.inner, run_id);
    }

    fn schedule_frame(this: &Rc<RefCell<ContainerInner<P>>>, run_id: u64) {
        let clock = {
            let inner = this.borrow();
            if inner.run_id != run_id || inner.registration.is_some() {
                return;
            }
            inner.frame_clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, run_id, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<ContainerInner<P>>>, run_id: u64, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            if inner.run_id != run_id {
                log::trace!("stale return frame for run {run_id}; ignoring");
                return;
            }
            inner.registration = None;

            let frame = match inner.animation.as_mut() {
                Some(animation) => animation.tick(frame_time_nanos),
                None => return,
            };
            if let Some(offset) = frame.offset {
                inner.apply_offset(offset as f32);
            }
            if frame.done {
                inner.animation = None;
                log::debug!("return animation {run_id} settled at {}", inner.offset);
            }
            !frame.done
        };

        if schedule_next {
            Self::schedule_frame(this, run_id);
        }
    }

    pub fn state(&self) -> OverscrollState {
        let inner = self.inner.borrow();
        if inner.gesture.is_dragging() {
            OverscrollState::Dragging
        } else if inner.animation.is_some() {
            OverscrollState::Returning
        } else {
            OverscrollState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().gesture.is_dragging()
    }

    pub fn is_returning(&self) -> bool {
        self.inner.borrow().animation.is_some()
    }

    pub fn touch_slop(&self) -> f32 {
        self.inner.borrow().gesture.touch_slop()
    }

    pub fn config(&self) -> OverscrollConfig {
        self.inner.borrow().config
    }

    /// Sizes the container and stretches the hosted view over it.
    pub fn layout(&self, size: Size) {
        let mut inner = self.inner.borrow_mut();
        let bounds = Rect::from_size(size);
        inner.bounds = bounds;
        inner.view.place(bounds);
        inner.redraw_requested = true;
    }

    pub fn bounds(&self) -> Rect {
        self.inner.borrow().bounds
    }

    /// Where the hosted view is drawn once the scroll position is applied.
    pub fn content_bounds(&self) -> Rect {
        let inner = self.inner.borrow();
        inner.bounds.translate(-(inner.scroll_x() as f32), 0.0)
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().redraw_requested)
    }

    /// Borrow of the hosted view.
    ///
    /// Do not hold it across calls that feed events or frames to this
    /// container.
    pub fn overscroll_view(&self) -> Ref<'_, P::View> {
        Ref::map(self.inner.borrow(), |inner| &inner.view)
    }

    pub fn with_overscroll_view<R>(&self, f: impl FnOnce(&P::View) -> R) -> R {
        f(&self.inner.borrow().view)
    }

    pub fn with_overscroll_view_mut<R>(&self, f: impl FnOnce(&mut P::View) -> R) -> R {
        f(&mut self.inner.borrow_mut().view)
    }
}

impl<P: OverscrollPolicy + 'static> fmt::Debug for OverscrollContainer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("OverscrollContainer")
            .field("offset", &inner.offset)
            .field("dragging", &inner.gesture.is_dragging())
            .field("returning", &inner.animation.is_some())
            .field("bounds", &inner.bounds)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/overscroll_container_tests.rs"]
mod tests;
