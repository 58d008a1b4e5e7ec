//! Capture and clamping rules for the drag handle.

use dragkit_foundation::{DragCallback, DragScope, EdgeFlags, PointerId, ViewId};

use crate::modes::DragModes;

/// Decides which child a gesture may capture and where the handle may go.
///
/// Holds no gesture state: every answer is a function of the configured
/// [`DragModes`] and the geometry the scope reports at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPolicyController {
    handle: ViewId,
    modes: DragModes,
}

impl DragPolicyController {
    pub fn new(handle: ViewId) -> Self {
        Self::with_modes(handle, DragModes::default())
    }

    pub fn with_modes(handle: ViewId, modes: DragModes) -> Self {
        Self { handle, modes }
    }

    pub fn handle(&self) -> ViewId {
        self.handle
    }

    pub fn modes(&self) -> DragModes {
        self.modes
    }

    pub(crate) fn modes_mut(&mut self) -> &mut DragModes {
        &mut self.modes
    }

    /// `[padding.left, width - handle.width]`, read live.
    fn horizontal_bounds(&self, scope: &DragScope<'_>) -> Option<(i32, i32)> {
        let handle = scope.child_frame(self.handle)?;
        let left_bound = scope.padding().left;
        let right_bound = scope.container_size().width - handle.width;
        Some((left_bound, right_bound))
    }

    /// `[padding.top, height - handle.height]`, read live.
    fn vertical_bounds(&self, scope: &DragScope<'_>) -> Option<(i32, i32)> {
        let handle = scope.child_frame(self.handle)?;
        let top_bound = scope.padding().top;
        let bottom_bound = scope.container_size().height - handle.height;
        Some((top_bound, bottom_bound))
    }
}

/// Max against the lower bound first, then min against the upper bound.
/// An inverted range therefore resolves to `upper`. `i32::clamp` would panic.
fn clamp_to_bounds(value: i32, lower: i32, upper: i32) -> i32 {
    value.max(lower).min(upper)
}

impl DragCallback for DragPolicyController {
    fn can_capture(&self, child: ViewId, _pointer_id: PointerId) -> bool {
        !self.modes.capture_restricted || child == self.handle
    }

    fn on_position_changed(
        &self,
        scope: &mut DragScope<'_>,
        _child: ViewId,
        _left: i32,
        _top: i32,
        _dx: i32,
        _dy: i32,
    ) {
        scope.invalidate();
    }

    fn on_edge_drag_started(
        &self,
        scope: &mut DragScope<'_>,
        edges: EdgeFlags,
        pointer_id: PointerId,
    ) {
        if self.modes.edge {
            log::debug!(
                "edge drag {edges:?} by pointer {pointer_id} captures handle {}",
                self.handle
            );
            scope.capture_child_view(self.handle);
        }
    }

    fn horizontal_drag_range(&self, scope: &DragScope<'_>, _child: ViewId) -> i32 {
        if !self.modes.clamps_horizontally() {
            return 0;
        }
        self.horizontal_bounds(scope)
            .map_or(0, |(left, right)| (right - left).max(0))
    }

    fn vertical_drag_range(&self, scope: &DragScope<'_>, _child: ViewId) -> i32 {
        if !self.modes.vertical {
            return 0;
        }
        self.vertical_bounds(scope)
            .map_or(0, |(top, bottom)| (bottom - top).max(0))
    }

    fn clamp_horizontal(&self, scope: &DragScope<'_>, _child: ViewId, left: i32, dx: i32) -> i32 {
        if self.modes.clamps_horizontally() {
            if let Some((left_bound, right_bound)) = self.horizontal_bounds(scope) {
                return clamp_to_bounds(left, left_bound, right_bound);
            }
            log::warn!("drag handle {} missing, horizontal clamp skipped", self.handle);
        }
        left - dx
    }

    fn clamp_vertical(&self, scope: &DragScope<'_>, _child: ViewId, top: i32, dy: i32) -> i32 {
        if self.modes.vertical {
            if let Some((top_bound, bottom_bound)) = self.vertical_bounds(scope) {
                return clamp_to_bounds(top, top_bound, bottom_bound);
            }
            log::warn!("drag handle {} missing, vertical clamp skipped", self.handle);
        }
        top - dy
    }
}
