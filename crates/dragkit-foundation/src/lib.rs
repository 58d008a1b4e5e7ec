//! Pointer input and drag-gesture plumbing for dragkit
//!
//! The [`gestures::ViewDragEngine`] tracks raw pointer events and asks a
//! [`gestures::DragCallback`] to resolve capture and clamping decisions.
//! Hosts expose their children to the engine through [`gestures::DragHost`].

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use gestures::{
    DragCallback, DragEngineConfig, DragHost, DragScope, DragState, EngineConfigError,
    ViewDragEngine, ViewId,
};
pub use input::{EdgeFlags, PointerDispatcher, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::gestures::{
        DragCallback, DragEngineConfig, DragHost, DragScope, DragState, ViewDragEngine, ViewId,
    };
    pub use crate::input::{EdgeFlags, PointerEvent, PointerEventKind, PointerId};
}
