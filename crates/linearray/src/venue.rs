//! Planner inputs: venue box and speaker model.
//!
//! Both types are plain data with a `validate()` gate; `plan_layout` runs the
//! gate once before any geometry so the stacker can assume positive, finite
//! values.

use std::fmt;

use crate::cfg::MAX_DISPERSION_DEG;

/// Validation failure for a single input field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputError {
    pub field: &'static str,
    pub reason: String,
}

impl InputError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input `{}`: {}", self.field, self.reason)
    }
}

impl std::error::Error for InputError {}

fn positive(field: &'static str, v: f64) -> Result<(), InputError> {
    if !v.is_finite() {
        return Err(InputError::new(field, format!("must be finite, got {v}")));
    }
    if v <= 0.0 {
        return Err(InputError::new(field, format!("must be > 0, got {v}")));
    }
    Ok(())
}

fn dispersion(field: &'static str, v: f64) -> Result<(), InputError> {
    positive(field, v)?;
    if v >= MAX_DISPERSION_DEG {
        return Err(InputError::new(
            field,
            format!("must be < {MAX_DISPERSION_DEG}°, got {v}"),
        ));
    }
    Ok(())
}

/// Rectangular venue in meters.
///
/// - `width`: stage-parallel extent, tiled by arrays.
/// - `length`: clear height available for rigging.
/// - `depth`: distance from the stage line to the back wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VenueDimensions {
    pub width: f64,
    pub length: f64,
    pub depth: f64,
}

impl VenueDimensions {
    #[inline]
    pub fn new(width: f64, length: f64, depth: f64) -> Self {
        Self {
            width,
            length,
            depth,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        positive("venue.width", self.width)?;
        positive("venue.length", self.length)?;
        positive("venue.depth", self.depth)?;
        Ok(())
    }
}

/// Acoustic and mechanical data for one cabinet model.
///
/// Only `vert_dispersion_deg`, `horiz_dispersion_deg` and `box_height` drive
/// the geometry; the rest is carried through for reports.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakerSpec {
    pub model: String,
    pub yaw_deg: f64,
    pub spl_peak_db: f64,
    pub bandwidth_low_hz: f64,
    pub bandwidth_high_hz: f64,
    pub horiz_dispersion_deg: f64,
    pub vert_dispersion_deg: f64,
    pub max_throw_m: f64,
    pub weight_kg: f64,
    pub box_height: f64,
    pub num_lf: u32,
    pub num_mf: u32,
    pub num_hf: u32,
}

impl SpeakerSpec {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.model.trim().is_empty() {
            return Err(InputError::new("speaker.model", "must not be empty"));
        }
        positive("speaker.box_height", self.box_height)?;
        dispersion("speaker.vert_dispersion_deg", self.vert_dispersion_deg)?;
        dispersion("speaker.horiz_dispersion_deg", self.horiz_dispersion_deg)?;
        positive("speaker.max_throw_m", self.max_throw_m)?;
        positive("speaker.weight_kg", self.weight_kg)?;
        if !self.yaw_deg.is_finite() {
            return Err(InputError::new("speaker.yaw_deg", "must be finite"));
        }
        if self.bandwidth_low_hz.is_finite()
            && self.bandwidth_high_hz.is_finite()
            && self.bandwidth_low_hz > self.bandwidth_high_hz
        {
            return Err(InputError::new(
                "speaker.bandwidth_low_hz",
                "must not exceed bandwidth_high_hz",
            ));
        }
        Ok(())
    }
}

/// Reference inputs used by the CLI defaults, tests and benches.
pub mod presets {
    use super::{SpeakerSpec, VenueDimensions};

    /// 30 m wide, 15 m clear height, 50 m deep hall.
    pub fn hall() -> VenueDimensions {
        VenueDimensions::new(30.0, 15.0, 50.0)
    }

    /// Large-format line-array element (10° vertical, 90° horizontal, 0.5 m box).
    pub fn k2() -> SpeakerSpec {
        SpeakerSpec {
            model: "L-Acoustics K2".to_string(),
            yaw_deg: 0.0,
            spl_peak_db: 147.0,
            bandwidth_low_hz: 35.0,
            bandwidth_high_hz: 20_000.0,
            horiz_dispersion_deg: 90.0,
            vert_dispersion_deg: 10.0,
            max_throw_m: 25.0,
            weight_kg: 56.0,
            box_height: 0.5,
            num_lf: 2,
            num_mf: 4,
            num_hf: 2,
        }
    }
}
