/// Which drag behaviours a [`DragLayout`](crate::DragLayout) allows.
///
/// The flags are independent; several may be on at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragModes {
    /// Handle may move along the x axis.
    pub horizontal: bool,
    /// Handle may move along the y axis.
    pub vertical: bool,
    /// A drag starting at the left edge captures the handle.
    pub edge: bool,
    /// Only the handle may be captured.
    pub capture_restricted: bool,
}

impl DragModes {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical || self.edge || self.capture_restricted
    }

    /// Horizontal clamping is on whenever any horizontally relevant mode is.
    pub fn clamps_horizontally(&self) -> bool {
        self.horizontal || self.capture_restricted || self.edge
    }
}
