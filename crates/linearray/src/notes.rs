//! Informational advisories derived from placed cabinets.
//!
//! Advisories never influence stacking; they are computed on demand for
//! reports. At most one advisory applies per cabinet, checked in the order
//! high angle, upward tilt, short throw.

use std::fmt;

use crate::stack::PlacedSpeaker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Advisory {
    HighAngle,
    UpwardTilt,
    ShortThrow,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Advisory::HighAngle => "High angle!",
            Advisory::UpwardTilt => "Upward tilt",
            Advisory::ShortThrow => "Short throw",
        };
        f.write_str(s)
    }
}

/// Thresholds for advisories.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdvisoryCfg {
    /// Tilt above this is flagged (degrees).
    pub high_angle_deg: f64,
    /// Tilt below this is flagged (degrees, negative = upward).
    pub upward_tilt_deg: f64,
    /// Throw below this is flagged (m).
    pub short_throw_m: f64,
}

impl Default for AdvisoryCfg {
    fn default() -> Self {
        Self {
            high_angle_deg: 45.0,
            upward_tilt_deg: -10.0,
            short_throw_m: 2.0,
        }
    }
}

pub fn advisory_with(speaker: &PlacedSpeaker, cfg: &AdvisoryCfg) -> Option<Advisory> {
    if speaker.tilt_deg > cfg.high_angle_deg {
        Some(Advisory::HighAngle)
    } else if speaker.tilt_deg < cfg.upward_tilt_deg {
        Some(Advisory::UpwardTilt)
    } else if speaker.throw() < cfg.short_throw_m {
        Some(Advisory::ShortThrow)
    } else {
        None
    }
}

/// Advisory with default thresholds.
#[inline]
pub fn advisory(speaker: &PlacedSpeaker) -> Option<Advisory> {
    advisory_with(speaker, &AdvisoryCfg::default())
}
