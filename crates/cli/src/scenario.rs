//! Scenario files: venue, speaker and planner settings as JSON.
//!
//! Every section is optional; missing fields fall back to the reference hall,
//! the K2-class cabinet and `PlanCfg::default()`.

use anyhow::{Context, Result};
use linearray::api::{presets, PlanCfg, SpeakerSpec, VenueDimensions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub venue: VenueInput,
    pub speaker: SpeakerInput,
    pub plan: PlanInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueInput {
    pub width: f64,
    pub length: f64,
    pub depth: f64,
}

impl Default for VenueInput {
    fn default() -> Self {
        let v = presets::hall();
        Self {
            width: v.width,
            length: v.length,
            depth: v.depth,
        }
    }
}

impl From<VenueInput> for VenueDimensions {
    fn from(v: VenueInput) -> Self {
        VenueDimensions::new(v.width, v.length, v.depth)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerInput {
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

impl Default for SpeakerInput {
    fn default() -> Self {
        presets::k2().into()
    }
}

impl From<SpeakerSpec> for SpeakerInput {
    fn from(s: SpeakerSpec) -> Self {
        Self {
            model: s.model,
            yaw_deg: s.yaw_deg,
            spl_peak_db: s.spl_peak_db,
            bandwidth_low_hz: s.bandwidth_low_hz,
            bandwidth_high_hz: s.bandwidth_high_hz,
            horiz_dispersion_deg: s.horiz_dispersion_deg,
            vert_dispersion_deg: s.vert_dispersion_deg,
            max_throw_m: s.max_throw_m,
            weight_kg: s.weight_kg,
            box_height: s.box_height,
            num_lf: s.num_lf,
            num_mf: s.num_mf,
            num_hf: s.num_hf,
        }
    }
}

impl From<SpeakerInput> for SpeakerSpec {
    fn from(s: SpeakerInput) -> Self {
        SpeakerSpec {
            model: s.model,
            yaw_deg: s.yaw_deg,
            spl_peak_db: s.spl_peak_db,
            bandwidth_low_hz: s.bandwidth_low_hz,
            bandwidth_high_hz: s.bandwidth_high_hz,
            horiz_dispersion_deg: s.horiz_dispersion_deg,
            vert_dispersion_deg: s.vert_dispersion_deg,
            max_throw_m: s.max_throw_m,
            weight_kg: s.weight_kg,
            box_height: s.box_height,
            num_lf: s.num_lf,
            num_mf: s.num_mf,
            num_hf: s.num_hf,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanInput {
    pub target_floor: f64,
    pub overlap_factor: f64,
    pub max_per_array: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total: Option<usize>,
    pub rig_clearance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_height: Option<f64>,
}

impl Default for PlanInput {
    fn default() -> Self {
        PlanCfg::default().into()
    }
}

impl From<PlanCfg> for PlanInput {
    fn from(c: PlanCfg) -> Self {
        Self {
            target_floor: c.target_floor,
            overlap_factor: c.overlap_factor,
            max_per_array: c.max_per_array,
            max_total: c.max_total,
            rig_clearance: c.rig_clearance,
            base_height: c.base_height,
        }
    }
}

impl From<PlanInput> for PlanCfg {
    fn from(p: PlanInput) -> Self {
        PlanCfg {
            target_floor: p.target_floor,
            overlap_factor: p.overlap_factor,
            max_per_array: p.max_per_array,
            max_total: p.max_total,
            rig_clearance: p.rig_clearance,
            base_height: p.base_height,
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
