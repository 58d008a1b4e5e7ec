use anyhow::{bail, Context, Result};
use dragkit_foundation::PointerDispatcher;
use dragkit_ui::{
    ChildView, DragLayout, IntEdgeInsets, IntRect, IntSize, PointerEvent, PointerEventKind,
};

const HANDLE: u64 = 1;
const COMPANION: u64 = 2;
const STEPS: usize = 8;

#[derive(Clone, Copy, Debug)]
enum DemoMode {
    Horizontal,
    Vertical,
    Edge,
    Capture,
}

impl DemoMode {
    fn parse(arg: Option<&str>) -> Result<Self> {
        Ok(match arg.unwrap_or("vertical") {
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            "edge" => Self::Edge,
            "capture" => Self::Capture,
            other => bail!("unknown mode '{other}', expected horizontal|vertical|edge|capture"),
        })
    }

    fn apply(self, layout: &mut DragLayout) -> Result<()> {
        match self {
            Self::Horizontal => layout.set_horizontal(true)?,
            Self::Vertical => layout.set_vertical(true)?,
            Self::Edge => layout.set_edge_tracking(true)?,
            Self::Capture => layout.set_capture_restricted(true)?,
        }
        Ok(())
    }

    /// Where the scripted drag starts: on the handle, or in the left edge band
    /// for edge mode.
    fn start(self) -> (f32, f32) {
        match self {
            Self::Edge => (5.0, 200.0),
            _ => (25.0, 25.0),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let arg = std::env::args().nth(1);
    let mode = DemoMode::parse(arg.as_deref())?;

    let mut layout = DragLayout::new(IntSize::new(300, 300), IntEdgeInsets::ZERO);
    layout
        .inflate(
            ChildView::new(HANDLE, IntRect::new(0, 0, 50, 50)),
            ChildView::new(COMPANION, IntRect::new(0, 60, 50, 50)),
        )
        .context("inflating the demo layout")?;
    mode.apply(&mut layout)
        .with_context(|| format!("applying {mode:?} mode"))?;

    log::info!(
        "mode {mode:?}: modes {:?}, companion {:?}",
        layout.modes(),
        layout.companion_visibility()
    );

    let (from_x, from_y) = mode.start();
    let (to_x, to_y) = (400.0, 400.0);
    let mut dispatcher = PointerDispatcher::new();
    dispatcher.push(PointerEvent::down(from_x, from_y));
    for step in 1..=STEPS {
        let t = step as f32 / STEPS as f32;
        dispatcher.push(
            PointerEvent::moved(from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t)
                .with_time(step as i64 * 16),
        );
    }
    dispatcher.push(PointerEvent::up(to_x, to_y).with_time((STEPS as i64 + 1) * 16));

    // Children ignore touches, so the container owns the stream from the down.
    dispatcher.drain(|event| {
        if event.kind == PointerEventKind::Down {
            layout.on_intercept_touch(&event);
        }
        layout.on_touch(&event);
        log::info!(
            "{:?} at ({}, {}): {:?}, handle {:?}",
            event.kind,
            event.position.x,
            event.position.y,
            layout.drag_state(),
            layout.handle_frame()
        );
    });

    let frame = layout
        .handle_frame()
        .context("handle missing after the drag")?;
    log::info!(
        "final handle frame: left {} top {} ({}x{})",
        frame.left,
        frame.top,
        frame.width,
        frame.height
    );
    Ok(())
}
