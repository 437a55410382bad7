//! Fill and delay placement around the main arrays.
//!
//! Fills sit half a step outside the outermost arrays and cover a fixed
//! near-field band; they are only suggested when at least two main arrays
//! exist and the position is strictly inside the venue. The delay zone is a
//! fixed far-field recommendation.
//!
//! With `ceil` tiling the outermost arrays already sit within half a step of
//! the walls, so planner output only yields fills when spacing is set by hand.

use std::fmt;

use crate::layout::LayoutPlan;
use crate::venue::VenueDimensions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Right => f.write_str("Right"),
        }
    }
}

/// Depth band `[from, to]` in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub from: f64,
    pub to: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillCfg {
    pub near_field: Band,
    pub delay_zone: Band,
}

impl Default for FillCfg {
    fn default() -> Self {
        Self {
            near_field: Band { from: 10.0, to: 25.0 },
            delay_zone: Band { from: 25.0, to: 35.0 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillSpeaker {
    pub side: Side,
    pub x_position: f64,
    pub covers: Band,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FillPlan {
    pub fills: Vec<FillSpeaker>,
    pub delay_zone: Band,
}

pub fn plan_fills(plan: &LayoutPlan, venue: &VenueDimensions, cfg: &FillCfg) -> FillPlan {
    let mut fills = Vec::new();
    let n = plan.arrays.len();
    if n >= 2 {
        let half = plan.step() / 2.0;
        let left = plan.start_x() - half;
        let right = plan.start_x() + (n - 1) as f64 * plan.step() + half;
        let candidates = [(Side::Left, left), (Side::Right, right)];
        for (side, x) in candidates {
            if x > 0.0 && x < venue.width {
                fills.push(FillSpeaker {
                    side,
                    x_position: x,
                    covers: cfg.near_field,
                });
            }
        }
    }
    FillPlan {
        fills,
        delay_zone: cfg.delay_zone,
    }
}
