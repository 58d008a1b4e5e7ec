use std::fmt;

use dragkit_foundation::ViewId;

/// Setup mistakes reported by [`DragLayout`](crate::DragLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A mode setter ran before the handle and companion were attached.
    NotInflated { setter: &'static str },
    /// `inflate` was called a second time.
    AlreadyInflated,
    /// Handle and companion share an id.
    DuplicateChild { id: ViewId },
    /// A layout update named a child the container doesn't own.
    UnknownChild { id: ViewId },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInflated { setter } => write!(
                f,
                "{setter} called before the drag handle and companion were inflated"
            ),
            Self::AlreadyInflated => write!(f, "drag layout children are already inflated"),
            Self::DuplicateChild { id } => {
                write!(f, "handle and companion must be distinct views (both are {id})")
            }
            Self::UnknownChild { id } => write!(f, "view {id} is not a child of this drag layout"),
        }
    }
}

impl std::error::Error for ConfigError {}
