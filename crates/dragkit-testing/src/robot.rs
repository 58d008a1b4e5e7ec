//! Robot-style touch scripting for drag containers
//!
//! [`TouchRobot`] owns a [`DragLayout`] and delivers pointer events the way a
//! parent view group does: the container's intercept step runs first, and
//! whoever ends up owning the sequence receives the remaining events.
//!
//! # Example
//!
//! ```
//! use dragkit_testing::{fixture_layout, TouchRobot};
//!
//! let mut layout = fixture_layout().unwrap();
//! layout.set_vertical(true).unwrap();
//!
//! let mut robot = TouchRobot::new(layout);
//! robot.drag((25.0, 25.0), (25.0, 400.0), 10);
//!
//! assert_eq!(robot.layout().handle_frame().unwrap().top, 250);
//! ```

use dragkit_foundation::{PointerEvent, PointerEventKind, PointerId};
use dragkit_ui::{ChildView, ConfigError, DragLayout};
use dragkit_ui_graphics::{IntEdgeInsets, IntRect, IntSize, Point};

pub const HANDLE_ID: u64 = 1;
pub const COMPANION_ID: u64 = 2;

/// 300×300 container without padding, a 50×50 handle in the top-left corner
/// and a 50×50 companion right below it.
pub fn fixture_layout() -> Result<DragLayout, ConfigError> {
    fixture_layout_with(
        IntSize::new(300, 300),
        IntEdgeInsets::ZERO,
        IntRect::new(0, 0, 50, 50),
    )
}

/// Fixture with custom container geometry and handle frame. The companion
/// is placed under the handle.
pub fn fixture_layout_with(
    size: IntSize,
    padding: IntEdgeInsets,
    handle: IntRect,
) -> Result<DragLayout, ConfigError> {
    let mut layout = DragLayout::new(size, padding);
    let companion = IntRect::new(handle.left, handle.bottom() + 10, 50, 50);
    layout.inflate(
        ChildView::new(HANDLE_ID, handle),
        ChildView::new(COMPANION_ID, companion),
    )?;
    layout.take_redraw();
    Ok(layout)
}

/// How the container's children treat touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChildTouchBehavior {
    /// Children ignore touches; the container owns every sequence from the
    /// down onwards.
    #[default]
    PassThrough,
    /// A child under the down consumes the sequence until the container
    /// intercepts it.
    Consume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchTarget {
    None,
    Child,
    Container,
}

/// What happened to one dispatched event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dispatch {
    pub event: PointerEvent,
    /// Result of the intercept step, `None` when it was skipped.
    pub intercepted: Option<bool>,
    /// Owner of the sequence after this event.
    pub target: TouchTarget,
}

pub struct TouchRobot {
    layout: DragLayout,
    behavior: ChildTouchBehavior,
    pointer: PointerId,
    frame_interval_ms: i64,
    time_ms: i64,
    position: Point,
    target: TouchTarget,
    history: Vec<Dispatch>,
}

impl TouchRobot {
    pub fn new(layout: DragLayout) -> Self {
        Self {
            layout,
            behavior: ChildTouchBehavior::default(),
            pointer: 0,
            frame_interval_ms: 16,
            time_ms: 0,
            position: Point::ZERO,
            target: TouchTarget::None,
            history: Vec::new(),
        }
    }

    pub fn with_child_behavior(mut self, behavior: ChildTouchBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }

    /// Time between two scripted moves.
    pub fn with_frame_interval(mut self, interval_ms: i64) -> Self {
        self.frame_interval_ms = interval_ms;
        self
    }

    pub fn layout(&self) -> &DragLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut DragLayout {
        &mut self.layout
    }

    pub fn into_layout(self) -> DragLayout {
        self.layout
    }

    pub fn target(&self) -> TouchTarget {
        self.target
    }

    pub fn history(&self) -> &[Dispatch] {
        &self.history
    }

    pub fn handle_frame(&self) -> Option<IntRect> {
        self.layout.handle_frame()
    }

    pub fn press(&mut self, x: f32, y: f32) -> Dispatch {
        self.scripted(PointerEventKind::Down, x, y)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> Dispatch {
        self.time_ms += self.frame_interval_ms;
        self.scripted(PointerEventKind::Move, x, y)
    }

    pub fn release(&mut self) -> Dispatch {
        let Point { x, y } = self.position;
        self.scripted(PointerEventKind::Up, x, y)
    }

    pub fn cancel(&mut self) -> Dispatch {
        let Point { x, y } = self.position;
        self.scripted(PointerEventKind::Cancel, x, y)
    }

    /// Press at `from`, move to `to` in `steps` evenly spaced moves, release.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) -> Vec<Dispatch> {
        let steps = steps.max(1);
        let mut dispatches = Vec::with_capacity(steps + 2);

        dispatches.push(self.press(from.0, from.1));
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            dispatches.push(self.move_to(x, y));
        }
        dispatches.push(self.release());
        dispatches
    }

    fn scripted(&mut self, kind: PointerEventKind, x: f32, y: f32) -> Dispatch {
        let event = PointerEvent::new(kind, Point::new(x, y))
            .with_id(self.pointer)
            .with_time(self.time_ms);
        self.dispatch(event)
    }

    /// Delivers `event` through the intercept and touch steps.
    pub fn dispatch(&mut self, event: PointerEvent) -> Dispatch {
        self.position = event.position;

        if event.kind == PointerEventKind::Down {
            self.target = TouchTarget::None;
        }

        let intercepted = match self.target {
            TouchTarget::Container => {
                self.layout.on_touch(&event);
                None
            }
            TouchTarget::None | TouchTarget::Child => {
                let intercepted = self.layout.on_intercept_touch(&event);
                if intercepted {
                    self.target = TouchTarget::Container;
                } else if self.target == TouchTarget::None {
                    self.target = self.initial_target(&event);
                    if self.target == TouchTarget::Container {
                        self.layout.on_touch(&event);
                    }
                }
                Some(intercepted)
            }
        };

        let dispatch = Dispatch {
            event,
            intercepted,
            target: self.target,
        };
        log::trace!("robot dispatched {dispatch:?}");

        if event.kind.is_terminal() {
            self.target = TouchTarget::None;
        }
        self.history.push(dispatch);
        dispatch
    }

    fn initial_target(&self, event: &PointerEvent) -> TouchTarget {
        if event.kind != PointerEventKind::Down {
            // Stray event outside a sequence: nobody owns it.
            return TouchTarget::None;
        }
        let child_hit = self.layout.children().any(|child| {
            child.is_visible() && child.frame.contains(event.position.x, event.position.y)
        });
        match self.behavior {
            ChildTouchBehavior::Consume if child_hit => TouchTarget::Child,
            _ => TouchTarget::Container,
        }
    }
}
