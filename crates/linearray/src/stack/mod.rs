//! Array stacker: hang cabinets top-down until a stop condition fires.
//!
//! Model
//! - The topmost cabinet aims its far edge at the back wall. Each cabinet
//!   below hangs one `box_height` lower and aims at the point where the one
//!   above stopped covering, so the stack tiles the depth back-to-front.
//! - The footprint is evaluated at the acoustic centre (`mouth_height`), which
//!   sits `box_height * sin(tilt)` below the rigging point.
//!
//! Stop conditions (checked in this order per step)
//! - `DeviceLimit`: `max_per_array` cabinets already placed.
//! - `Floor`: rigging height `<= target_floor`, or the acoustic centre would
//!   sit at or below the floor.
//! - `Coverage`: the new segment would start at or before the stage line, or
//!   the footprint makes no progress.
//!
//! The remaining depth strictly decreases with every placed cabinet and the
//! device cap bounds the loop, so a run always terminates.

mod types;

pub use types::{ArrayLayout, PlacedSpeaker, StackCfg, StopReason};

use crate::geometry::{cabinet_drop, ellipse_footprint, tilt_for_target_distance};
use crate::venue::SpeakerSpec;

/// Stack one array at `x_position` covering `depth` meters.
///
/// Pre: `speaker` and `depth` have passed validation.
/// Post: records are ordered top-down; the first ends at `depth`, each
/// following one ends where the previous one starts, every start is `> 0`.
pub fn stack_array(
    depth: f64,
    speaker: &SpeakerSpec,
    array_id: usize,
    x_position: f64,
    cfg: StackCfg,
) -> ArrayLayout {
    let vdisp = speaker.vert_dispersion_deg;
    let hdisp = speaker.horiz_dispersion_deg;
    let mut speakers: Vec<PlacedSpeaker> = Vec::with_capacity(cfg.max_per_array.min(64));
    let mut remaining = depth;

    let stop = loop {
        if speakers.len() >= cfg.max_per_array {
            break StopReason::DeviceLimit;
        }
        let index = speakers.len();
        let height = cfg.base_height - index as f64 * speaker.box_height;
        if height <= cfg.target_floor {
            break StopReason::Floor;
        }

        let tilt_deg = tilt_for_target_distance(height, vdisp, remaining);
        let mouth_height = height - cabinet_drop(speaker.box_height, tilt_deg);
        if mouth_height <= 0.0 {
            break StopReason::Floor;
        }

        let fp = ellipse_footprint(mouth_height, tilt_deg, vdisp, hdisp);
        let start = remaining - fp.major;
        if start <= 0.0 || start >= remaining {
            break StopReason::Coverage;
        }

        speakers.push(PlacedSpeaker {
            index: index + 1,
            height,
            mouth_height,
            tilt_deg,
            coverage_start: start,
            coverage_end: remaining,
            coverage_width: fp.minor,
            array_id,
            x_position,
            saturated: fp.saturated,
        });
        remaining = start;
    };

    ArrayLayout {
        array_id,
        x_position,
        speakers,
        stop,
    }
}

#[cfg(test)]
mod tests;
