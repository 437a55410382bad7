//! Data types for one array's stack and its stop state.

use std::fmt;

use crate::cfg::{DEFAULT_MAX_PER_ARRAY, DEFAULT_TARGET_FLOOR};

/// One cabinet placed by the stacker. Immutable once emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedSpeaker {
    /// 1-based position in the stack, top first.
    pub index: usize,
    /// Rigging height of the cabinet (m).
    pub height: f64,
    /// Acoustic-centre height after the tilt-induced drop (m).
    pub mouth_height: f64,
    /// Tilt in degrees; negative points upward.
    pub tilt_deg: f64,
    pub coverage_start: f64,
    pub coverage_end: f64,
    pub coverage_width: f64,
    pub array_id: usize,
    pub x_position: f64,
    /// Footprint hit the edge-angle clamp.
    pub saturated: bool,
}

impl PlacedSpeaker {
    /// Depth covered by this cabinet (`coverage_end − coverage_start`).
    #[inline]
    pub fn throw(&self) -> f64 {
        self.coverage_end - self.coverage_start
    }
}

/// Terminal state of a stack run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// Next cabinet would hang at or below the minimum height.
    Floor,
    /// Next cabinet's coverage would reach the stage line (or make no progress).
    Coverage,
    /// Device cap reached.
    DeviceLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Floor => write!(f, "minimum height reached"),
            StopReason::Coverage => write!(f, "coverage would extend beyond stage"),
            StopReason::DeviceLimit => write!(f, "maximum speakers per array reached"),
        }
    }
}

/// Per-array stacking parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackCfg {
    /// Rigging height of the topmost cabinet (m).
    pub base_height: f64,
    /// Cabinets at or below this height are not hung (m).
    pub target_floor: f64,
    /// Stop after this many cabinets.
    pub max_per_array: usize,
}

impl StackCfg {
    pub fn with_base_height(base_height: f64) -> Self {
        Self {
            base_height,
            target_floor: DEFAULT_TARGET_FLOOR,
            max_per_array: DEFAULT_MAX_PER_ARRAY,
        }
    }
}

/// Result of stacking one array.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLayout {
    pub array_id: usize,
    pub x_position: f64,
    pub speakers: Vec<PlacedSpeaker>,
    pub stop: StopReason,
}

impl ArrayLayout {
    #[inline]
    pub fn count(&self) -> usize {
        self.speakers.len()
    }
}
