//! The container side of the drag contract.

use dragkit_ui_graphics::{IntEdgeInsets, IntRect, IntSize};

pub type ViewId = u64;

/// A container whose children can be dragged by a [`ViewDragEngine`].
///
/// All geometry is queried live on every call; implementations must not hand
/// out values cached from an earlier layout pass.
///
/// [`ViewDragEngine`]: super::ViewDragEngine
pub trait DragHost {
    /// Current container size.
    fn size(&self) -> IntSize;

    fn padding(&self) -> IntEdgeInsets;

    /// Frame of `child` in container coordinates, `None` for unknown ids.
    fn child_frame(&self, child: ViewId) -> Option<IntRect>;

    /// Topmost hit-testable child containing the point.
    fn find_top_child_under(&self, x: f32, y: f32) -> Option<ViewId>;

    /// Moves `child` by the given deltas.
    fn offset_child(&mut self, child: ViewId, dx: i32, dy: i32);

    /// Requests a redraw of the container.
    fn invalidate(&mut self);
}
