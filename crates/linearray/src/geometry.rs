//! Coverage-cone geometry primitives.
//!
//! Purpose
//! - Turn a cabinet's height, tilt and dispersion into a ground footprint
//!   (`ellipse_footprint`) and solve the inverse problem of aiming the far cone
//!   edge at a given distance (`tilt_for_target_distance`).
//!
//! Conventions
//! - Angles are degrees at the API boundary and radians internally.
//! - Tilt is measured so that a cone edge at angle `e` lands at
//!   `height * tan(e)` on the floor; the far edge is `tilt + vdisp/2`, the near
//!   edge `tilt − vdisp/2`.
//! - All functions are total: invalid input gives a zero result, angles close
//!   to ±90° saturate at `MAX_EDGE_ANGLE_DEG` instead of producing ∞ or a
//!   sign-flipped `tan`.

use nalgebra::{Rotation2, Vector2};

use crate::cfg::MAX_EDGE_ANGLE_DEG;

/// Ground footprint of one cabinet's coverage cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    /// Extent along the depth axis (m).
    pub major: f64,
    /// Horizontal width at the covered distance (m).
    pub minor: f64,
    /// True when at least one edge angle hit the saturation clamp.
    pub saturated: bool,
}

impl Footprint {
    pub const ZERO: Footprint = Footprint {
        major: 0.0,
        minor: 0.0,
        saturated: false,
    };
}

#[inline]
fn clamp_edge(edge_deg: f64) -> (f64, bool) {
    let clamped = edge_deg.clamp(-MAX_EDGE_ANGLE_DEG, MAX_EDGE_ANGLE_DEG);
    (clamped, clamped != edge_deg)
}

#[inline]
fn saturating_tan(edge_deg: f64) -> (f64, bool) {
    let (e, hit) = clamp_edge(edge_deg);
    (e.to_radians().tan(), hit)
}

/// Ground distance at which a cone edge at `edge_deg` meets the floor.
///
/// Returns 0 for a non-positive or non-finite height. The edge angle is
/// clamped like in `ellipse_footprint`, so a near-horizontal edge yields a
/// large finite distance.
pub fn ground_reach(height: f64, edge_deg: f64) -> f64 {
    if !(height.is_finite() && edge_deg.is_finite()) || height <= 0.0 {
        return 0.0;
    }
    height * saturating_tan(edge_deg).0
}

/// Footprint `(major, minor)` of a cone mounted at `height` and tilted by `tilt_deg`.
///
/// - `major = height * (tan(tilt + vdisp/2) − tan(tilt − vdisp/2))`
/// - `minor = 2 * height * tan(hdisp/2)`
///
/// Both are clamped to `>= 0`. A non-positive height (or any non-finite input)
/// gives `Footprint::ZERO`, which callers treat as "no progress".
pub fn ellipse_footprint(
    height: f64,
    tilt_deg: f64,
    vertical_dispersion_deg: f64,
    horizontal_dispersion_deg: f64,
) -> Footprint {
    let inputs = [
        height,
        tilt_deg,
        vertical_dispersion_deg,
        horizontal_dispersion_deg,
    ];
    if inputs.iter().any(|v| !v.is_finite()) || height <= 0.0 {
        return Footprint::ZERO;
    }
    let half_v = vertical_dispersion_deg / 2.0;
    let (far, far_hit) = saturating_tan(tilt_deg + half_v);
    let (near, near_hit) = saturating_tan(tilt_deg - half_v);
    let (side, side_hit) = saturating_tan(horizontal_dispersion_deg / 2.0);

    let major = (height * (far - near)).max(0.0);
    let minor = (2.0 * height * side).max(0.0);
    Footprint {
        major,
        minor,
        saturated: far_hit || near_hit || side_hit,
    }
}

/// Tilt (degrees) that puts the far cone edge exactly at `target_distance`.
///
/// `tilt = atan(target / height) − vdisp/2`. Negative values mean the cabinet
/// has to point upward. Any non-positive or non-finite input returns `0.0`;
/// callers validate inputs themselves before relying on the result.
pub fn tilt_for_target_distance(
    height: f64,
    vertical_dispersion_deg: f64,
    target_distance: f64,
) -> f64 {
    let valid = [height, vertical_dispersion_deg, target_distance]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
    if !valid {
        return 0.0;
    }
    (target_distance / height).atan().to_degrees() - vertical_dispersion_deg / 2.0
}

/// Vertical drop of the acoustic centre when a cabinet of `box_height` is
/// rotated by `tilt_deg` about its top rigging point.
///
/// Equals `box_height * sin(tilt)`; negative for upward tilt (the centre rises).
pub fn cabinet_drop(box_height: f64, tilt_deg: f64) -> f64 {
    if !(box_height.is_finite() && tilt_deg.is_finite()) {
        return 0.0;
    }
    // Rotating the cabinet's front face (x = box_height) downward by `tilt`.
    let face = Rotation2::new(-tilt_deg.to_radians()) * Vector2::new(box_height, 0.0);
    -face.y
}
