//! Decision callbacks consulted by the drag engine.

use dragkit_ui_graphics::{IntEdgeInsets, IntRect, IntSize};

use super::host::{DragHost, ViewId};
use crate::input::{EdgeFlags, PointerId};

/// Live view of the container handed to every [`DragCallback`] method.
///
/// Callbacks never talk to the engine directly. Instead they record requests
/// on the scope (capture a child, redraw the container) and the engine acts
/// on them once the callback returns.
pub struct DragScope<'a> {
    host: &'a dyn DragHost,
    capture_request: Option<ViewId>,
    invalidate_requested: bool,
}

impl<'a> DragScope<'a> {
    pub fn new(host: &'a dyn DragHost) -> Self {
        Self {
            host,
            capture_request: None,
            invalidate_requested: false,
        }
    }

    pub fn container_size(&self) -> IntSize {
        self.host.size()
    }

    pub fn padding(&self) -> IntEdgeInsets {
        self.host.padding()
    }

    pub fn child_frame(&self, child: ViewId) -> Option<IntRect> {
        self.host.child_frame(child)
    }

    /// Asks the engine to capture `child` for the pointer that triggered the
    /// current callback. The last request wins.
    pub fn capture_child_view(&mut self, child: ViewId) {
        self.capture_request = Some(child);
    }

    /// Asks the container to redraw.
    pub fn invalidate(&mut self) {
        self.invalidate_requested = true;
    }

    pub fn capture_request(&self) -> Option<ViewId> {
        self.capture_request
    }

    pub fn invalidate_requested(&self) -> bool {
        self.invalidate_requested
    }
}

/// Policy consulted by a [`ViewDragEngine`](super::ViewDragEngine).
///
/// Only [`can_capture`](DragCallback::can_capture) is required. The clamp
/// defaults keep the child where it already is, so an axis without a policy
/// never moves.
pub trait DragCallback {
    /// Whether `child` may become the target of the gesture driven by
    /// `pointer_id`.
    fn can_capture(&self, child: ViewId, pointer_id: PointerId) -> bool;

    /// The captured child moved to `(left, top)` by `(dx, dy)`.
    fn on_position_changed(
        &self,
        _scope: &mut DragScope<'_>,
        _child: ViewId,
        _left: i32,
        _top: i32,
        _dx: i32,
        _dy: i32,
    ) {
    }

    fn on_view_captured(&self, _scope: &mut DragScope<'_>, _child: ViewId, _pointer_id: PointerId) {
    }

    /// The captured child was let go with the given release velocity in
    /// pixels per second.
    fn on_view_released(&self, _scope: &mut DragScope<'_>, _child: ViewId, _xvel: f32, _yvel: f32) {}

    /// A pointer went down on one of the tracked edges.
    fn on_edge_touched(&self, _scope: &mut DragScope<'_>, _edges: EdgeFlags, _pointer_id: PointerId) {
    }

    /// A pointer that went down on a tracked edge started dragging away from
    /// it. Call [`DragScope::capture_child_view`] to begin dragging a child.
    fn on_edge_drag_started(
        &self,
        _scope: &mut DragScope<'_>,
        _edges: EdgeFlags,
        _pointer_id: PointerId,
    ) {
    }

    /// Horizontal distance `child` can travel. Zero locks the axis for the
    /// touch-slop check.
    fn horizontal_drag_range(&self, _scope: &DragScope<'_>, _child: ViewId) -> i32 {
        0
    }

    fn vertical_drag_range(&self, _scope: &DragScope<'_>, _child: ViewId) -> i32 {
        0
    }

    /// Resolves the proposed `left` for `child`.
    fn clamp_horizontal(&self, _scope: &DragScope<'_>, _child: ViewId, left: i32, dx: i32) -> i32 {
        left - dx
    }

    /// Resolves the proposed `top` for `child`.
    fn clamp_vertical(&self, _scope: &DragScope<'_>, _child: ViewId, top: i32, dy: i32) -> i32 {
        top - dy
    }
}
