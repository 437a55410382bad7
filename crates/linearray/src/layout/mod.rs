//! Layout planner: array count, spacing, and one stack per array.
//!
//! Purpose
//! - Size the horizontal tiling from the top cabinet's footprint and run the
//!   stacker once per array position.
//!
//! Model
//! - The top cabinet hangs at `base_height` and aims at the back wall. Its
//!   footprint width times `overlap_factor` is the array spacing `step`.
//! - `ceil(width / step)` arrays are centred across the venue width.
//! - Every array gets the same vertical solution (flat floor, no left/right
//!   depth variation); only `x_position` differs.
//!
//! References
//! - Code cross-refs: `stack::stack_array`, `geometry::{ellipse_footprint, tilt_for_target_distance}`

use std::fmt;

use nalgebra::Point2;

use crate::cfg::{
    DEFAULT_MAX_PER_ARRAY, DEFAULT_OVERLAP_FACTOR, DEFAULT_RIG_CLEARANCE, DEFAULT_TARGET_FLOOR,
    MAX_ARRAYS,
};
use crate::geometry::{ellipse_footprint, tilt_for_target_distance, Footprint};
use crate::stack::{stack_array, ArrayLayout, PlacedSpeaker, StackCfg};
use crate::venue::{InputError, SpeakerSpec, VenueDimensions};

/// Planner configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanCfg {
    /// Minimum rigging height for any cabinet (m).
    pub target_floor: f64,
    /// Fraction of the top footprint width used as spacing; 0.5 overlaps neighbours by half.
    pub overlap_factor: f64,
    /// Device cap per array.
    pub max_per_array: usize,
    /// Optional venue-wide device cap. `None` means unbounded.
    pub max_total: Option<usize>,
    /// Gap between the venue's clear height and the top rigging point (m).
    pub rig_clearance: f64,
    /// Explicit top rigging height; overrides `rig_clearance` when set.
    pub base_height: Option<f64>,
}

impl Default for PlanCfg {
    fn default() -> Self {
        Self {
            target_floor: DEFAULT_TARGET_FLOOR,
            overlap_factor: DEFAULT_OVERLAP_FACTOR,
            max_per_array: DEFAULT_MAX_PER_ARRAY,
            max_total: None,
            rig_clearance: DEFAULT_RIG_CLEARANCE,
            base_height: None,
        }
    }
}

impl PlanCfg {
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.target_floor.is_finite() || self.target_floor < 0.0 {
            return Err(PlanError::invalid("target_floor must be finite and >= 0"));
        }
        if !self.overlap_factor.is_finite() || self.overlap_factor <= 0.0 {
            return Err(PlanError::invalid("overlap_factor must be finite and > 0"));
        }
        if !self.rig_clearance.is_finite() || self.rig_clearance < 0.0 {
            return Err(PlanError::invalid("rig_clearance must be finite and >= 0"));
        }
        if let Some(h) = self.base_height {
            if !h.is_finite() {
                return Err(PlanError::invalid("base_height must be finite"));
            }
        }
        Ok(())
    }

    /// Top rigging height for `venue`.
    #[inline]
    pub fn base_height_for(&self, venue: &VenueDimensions) -> f64 {
        self.base_height.unwrap_or(venue.length - self.rig_clearance)
    }
}

/// Errors that reject a whole planning run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Venue or speaker failed validation.
    Input(InputError),
    /// Planner configuration is unusable.
    InvalidConfig { reason: String },
    /// Array spacing came out non-positive, non-finite, or so small that the
    /// venue would need more than `MAX_ARRAYS` arrays.
    DegenerateSpacing { step: f64 },
}

impl PlanError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl From<InputError> for PlanError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid plan config: {reason}"),
            Self::DegenerateSpacing { step } => {
                write!(
                    f,
                    "array spacing {step} m is not usable (check base height, dispersion and overlap)"
                )
            }
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            _ => None,
        }
    }
}

/// Horizontal tiling derived from the top cabinet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    pub step: f64,
    pub num_arrays: usize,
    pub start_x: f64,
    pub top_tilt_deg: f64,
    pub top_footprint: Footprint,
}

impl Spacing {
    /// Floor-plan position (x, stage line) of array `a` (0-based).
    #[inline]
    pub fn position(&self, a: usize) -> Point2<f64> {
        Point2::new(self.start_x + a as f64 * self.step, 0.0)
    }
}

/// Compute array spacing for `venue` with the top cabinet at `base_height`.
///
/// The top footprint uses the rigging height directly (no mouth correction).
pub fn array_spacing(
    venue: &VenueDimensions,
    speaker: &SpeakerSpec,
    base_height: f64,
    overlap_factor: f64,
) -> Result<Spacing, PlanError> {
    let vdisp = speaker.vert_dispersion_deg;
    let top_tilt_deg = tilt_for_target_distance(base_height, vdisp, venue.depth);
    let top_footprint = ellipse_footprint(
        base_height,
        top_tilt_deg,
        vdisp,
        speaker.horiz_dispersion_deg,
    );
    let step = top_footprint.minor * overlap_factor;
    if !step.is_finite() || step <= 0.0 {
        return Err(PlanError::DegenerateSpacing { step });
    }
    let tiles = (venue.width / step).ceil();
    if tiles > MAX_ARRAYS as f64 {
        return Err(PlanError::DegenerateSpacing { step });
    }
    let num_arrays = (tiles as usize).max(1);
    let start_x = (venue.width - (num_arrays - 1) as f64 * step) / 2.0;
    Ok(Spacing {
        step,
        num_arrays,
        start_x,
        top_tilt_deg,
        top_footprint,
    })
}

/// Full venue plan.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    pub base_height: f64,
    pub spacing: Spacing,
    pub arrays: Vec<ArrayLayout>,
}

impl LayoutPlan {
    #[inline]
    pub fn step(&self) -> f64 {
        self.spacing.step
    }

    #[inline]
    pub fn start_x(&self) -> f64 {
        self.spacing.start_x
    }

    pub fn total_speakers(&self) -> usize {
        self.arrays.iter().map(ArrayLayout::count).sum()
    }

    /// All placed cabinets in (array, index) order.
    pub fn speakers(&self) -> impl Iterator<Item = &PlacedSpeaker> + '_ {
        self.arrays.iter().flat_map(|a| a.speakers.iter())
    }
}

/// Plan every array for `venue` with `speaker`.
///
/// Pre: none; inputs and `cfg` are validated here and the run is rejected as
/// a whole on failure.
/// Post: `arrays.len() == spacing.num_arrays`, ids are `1..=num_arrays` in
/// x order, and the output depends only on the arguments.
pub fn plan_layout(
    venue: &VenueDimensions,
    speaker: &SpeakerSpec,
    cfg: &PlanCfg,
) -> Result<LayoutPlan, PlanError> {
    venue.validate()?;
    speaker.validate()?;
    cfg.validate()?;

    let base_height = cfg.base_height_for(venue);
    let spacing = array_spacing(venue, speaker, base_height, cfg.overlap_factor)?;

    let mut budget = cfg.max_total;
    let mut arrays = Vec::with_capacity(spacing.num_arrays);
    for a in 0..spacing.num_arrays {
        let array_id = a + 1;
        let x = spacing.position(a).x;
        let max_per_array = match budget {
            Some(left) => left.min(cfg.max_per_array),
            None => cfg.max_per_array,
        };
        let stack_cfg = StackCfg {
            base_height,
            target_floor: cfg.target_floor,
            max_per_array,
        };
        let layout = stack_array(venue.depth, speaker, array_id, x, stack_cfg);
        if let Some(left) = budget.as_mut() {
            *left -= layout.count();
        }
        arrays.push(layout);
    }

    Ok(LayoutPlan {
        base_height,
        spacing,
        arrays,
    })
}

#[cfg(test)]
mod tests;
