//! Testing utilities for dragkit

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
}
