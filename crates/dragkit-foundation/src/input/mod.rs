pub mod dispatcher;
pub mod edge;
pub mod types;

pub use dispatcher::PointerDispatcher;
pub use edge::EdgeFlags;
pub use types::{PointerEvent, PointerEventKind, PointerId};
