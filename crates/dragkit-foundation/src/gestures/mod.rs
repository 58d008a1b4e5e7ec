pub mod callback;
pub mod config;
pub mod drag;
pub mod host;

pub use callback::{DragCallback, DragScope};
pub use config::{DragEngineConfig, EngineConfigError};
pub use drag::{DragState, ViewDragEngine};
pub use host::{DragHost, ViewId};
