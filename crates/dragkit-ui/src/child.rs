//! Children of a drag container.

use dragkit_foundation::{DragHost, ViewId};
use dragkit_ui_graphics::{IntEdgeInsets, IntRect, IntSize};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    /// Not drawn and not hit-testable.
    Gone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildView {
    pub id: ViewId,
    pub frame: IntRect,
    pub visibility: Visibility,
}

impl ChildView {
    pub fn new(id: ViewId, frame: IntRect) -> Self {
        Self {
            id,
            frame,
            visibility: Visibility::Visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}

/// Container geometry plus its children in z-order (last child on top).
#[derive(Debug, Clone, Default)]
pub struct ChildTree {
    size: IntSize,
    padding: IntEdgeInsets,
    children: SmallVec<[ChildView; 2]>,
    redraw_requested: bool,
}

impl ChildTree {
    pub fn new(size: IntSize, padding: IntEdgeInsets) -> Self {
        Self {
            size,
            padding,
            children: SmallVec::new(),
            redraw_requested: false,
        }
    }

    pub fn set_size(&mut self, size: IntSize) {
        self.size = size;
    }

    pub fn set_padding(&mut self, padding: IntEdgeInsets) {
        self.padding = padding;
    }

    pub fn push(&mut self, child: ChildView) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, id: ViewId) -> Option<&ChildView> {
        self.children.iter().find(|child| child.id == id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut ChildView> {
        self.children.iter_mut().find(|child| child.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildView> {
        self.children.iter()
    }

    /// Returns `true` if the visibility actually changed.
    pub fn set_visibility(&mut self, id: ViewId, visibility: Visibility) -> bool {
        let Some(child) = self.get_mut(id) else {
            return false;
        };
        if child.visibility == visibility {
            return false;
        }
        child.visibility = visibility;
        self.redraw_requested = true;
        true
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Clears and returns the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

impl DragHost for ChildTree {
    fn size(&self) -> IntSize {
        self.size
    }

    fn padding(&self) -> IntEdgeInsets {
        self.padding
    }

    fn child_frame(&self, child: ViewId) -> Option<IntRect> {
        self.get(child).map(|view| view.frame)
    }

    fn find_top_child_under(&self, x: f32, y: f32) -> Option<ViewId> {
        self.children
            .iter()
            .rev()
            .find(|child| child.is_visible() && child.frame.contains(x, y))
            .map(|child| child.id)
    }

    fn offset_child(&mut self, child: ViewId, dx: i32, dy: i32) {
        if let Some(view) = self.get_mut(child) {
            view.frame = view.frame.translate(dx, dy);
        }
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }
}
