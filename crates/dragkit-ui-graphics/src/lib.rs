//! Pure geometry for dragkit
//!
//! Pointer positions are fractional (`Point`), while child frames and
//! container metrics live on the integer layout grid (`IntRect`, `IntSize`,
//! `IntEdgeInsets`).

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{IntEdgeInsets, IntRect, IntSize, Point};
}
