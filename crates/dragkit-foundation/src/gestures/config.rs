use std::fmt;

use crate::gesture_constants::{DEFAULT_SENSITIVITY, EDGE_SIZE, TOUCH_SLOP};

/// Tuning for a [`ViewDragEngine`](super::ViewDragEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEngineConfig {
    /// Base touch slop in logical pixels.
    pub touch_slop: f32,
    /// Width of the edge band used by edge tracking.
    pub edge_size: f32,
    /// Multiplier on how readily a drag starts; the effective slop is
    /// `touch_slop / sensitivity`.
    pub sensitivity: f32,
}

impl Default for DragEngineConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            edge_size: EDGE_SIZE,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl DragEngineConfig {
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_edge_size(mut self, edge_size: f32) -> Self {
        self.edge_size = edge_size;
        self
    }

    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(EngineConfigError::InvalidSensitivity(self.sensitivity));
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(EngineConfigError::NegativeTouchSlop(self.touch_slop));
        }
        if !self.edge_size.is_finite() || self.edge_size < 0.0 {
            return Err(EngineConfigError::NegativeEdgeSize(self.edge_size));
        }
        Ok(())
    }

    pub fn effective_touch_slop(&self) -> f32 {
        self.touch_slop / self.sensitivity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineConfigError {
    InvalidSensitivity(f32),
    NegativeTouchSlop(f32),
    NegativeEdgeSize(f32),
}

impl fmt::Display for EngineConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSensitivity(value) => {
                write!(f, "drag sensitivity must be a positive number, got {value}")
            }
            Self::NegativeTouchSlop(value) => {
                write!(f, "touch slop must be a non-negative number, got {value}")
            }
            Self::NegativeEdgeSize(value) => {
                write!(f, "edge size must be a non-negative number, got {value}")
            }
        }
    }
}

impl std::error::Error for EngineConfigError {}
