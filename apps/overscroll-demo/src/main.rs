//! Replays a few swipes against an intro pager whose last slide allows
//! overscroll, printing the slide offset frame by frame.

mod pager;

use std::thread;
use std::time::Duration;

use overscroll_runtime_std::StdRuntime;
use overscroll_ui::{
    OverscrollConfig, OverscrollContainer, PointerEvent, PointerEventKind, Size,
    TouchDisposition, ViewConfiguration,
};

use pager::{IntroPager, PAGE_COUNT};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let density = std::env::var("OVERSCROLL_DENSITY")
        .ok()
        .map(|value| value.parse::<f32>())
        .transpose()?
        .unwrap_or(2.0);
    let config =
        OverscrollConfig::default().with_view_configuration(ViewConfiguration::new(density)?);

    let runtime = StdRuntime::new();
    let pager = IntroPager::new();
    let container = OverscrollContainer::with_config(pager.clone(), runtime.frame_clock(), config);
    container.layout(Size::new(360.0 * density, 640.0 * density));
    log::info!(
        "intro pager with {PAGE_COUNT} slides, touch slop {}px",
        container.touch_slop()
    );

    for _ in 0..PAGE_COUNT {
        let title = container.with_overscroll_view(|slides| slides.title(pager.page()));
        log::info!("slide {} of {PAGE_COUNT}: {title}", pager.page() + 1);

        let claimed = swipe_left(&container, &runtime, 600.0, 200.0);
        if claimed {
            log::info!("overscroll released at {}", container.offset());
            settle(&container, &runtime);
        } else {
            // Not ours: the pager turns the page.
            pager.next_page();
        }
    }

    Ok(())
}

/// Feeds a left swipe in 40px steps, one per frame.
fn swipe_left(
    container: &OverscrollContainer<IntroPager>,
    runtime: &StdRuntime,
    from: f32,
    to: f32,
) -> bool {
    let send = |kind, x| {
        let event = PointerEvent::at(kind, x, 300.0).with_time_nanos(runtime.frame_time_nanos());
        container.on_pointer_event(&event)
    };

    let mut claimed = false;
    send(PointerEventKind::Down, from);
    let mut x = from;
    while x > to {
        x -= 40.0;
        claimed |= send(PointerEventKind::Move, x) == TouchDisposition::Intercept;
        thread::sleep(FRAME);
        runtime.drain_frame_callbacks_now();
    }
    send(PointerEventKind::Up, x);
    claimed
}

fn settle(container: &OverscrollContainer<IntroPager>, runtime: &StdRuntime) {
    while runtime.take_frame_request() || runtime.runtime().has_frame_callbacks() {
        thread::sleep(FRAME);
        runtime.drain_frame_callbacks_now();
        if container.take_redraw_request() {
            log::info!(
                "frame {:>4}ms offset {:>6.1} content x {:>6.1}",
                runtime.frame_time_nanos() / 1_000_000,
                container.offset(),
                container.content_bounds().x
            );
        }
    }
    log::info!("slide back at rest");
}
