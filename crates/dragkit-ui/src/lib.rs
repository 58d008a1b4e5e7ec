//! Drag container for dragkit
//!
//! [`DragLayout`] owns a draggable handle and a companion child and routes
//! touch events through a [`ViewDragEngine`](dragkit_foundation::ViewDragEngine).
//! The capture and clamping rules live in [`DragPolicyController`].

mod child;
mod drag_layout;
mod error;
mod modes;
mod policy;

pub use child::{ChildTree, ChildView, Visibility};
pub use drag_layout::DragLayout;
pub use error::ConfigError;
pub use modes::DragModes;
pub use policy::DragPolicyController;

// Re-exported so hosts only need this crate for the common types.
pub use dragkit_foundation::{
    DragEngineConfig, DragState, EdgeFlags, PointerEvent, PointerEventKind, PointerId, ViewId,
};
pub use dragkit_ui_graphics::{IntEdgeInsets, IntRect, IntSize, Point};

pub mod prelude {
    pub use crate::child::{ChildView, Visibility};
    pub use crate::drag_layout::DragLayout;
    pub use crate::error::ConfigError;
    pub use crate::modes::DragModes;
    pub use crate::policy::DragPolicyController;
    pub use dragkit_foundation::prelude::*;
    pub use dragkit_ui_graphics::prelude::*;
}
