//! Curated surface for the CLI and experiments.
//!
//! Important
//! - This crate is used inside this workspace only; the surface may change
//!   whenever a clearer shape comes along.
//! - Prefer these re-exports over reaching into submodules.

// Geometry primitives
pub use crate::geometry::{
    cabinet_drop, ellipse_footprint, ground_reach, tilt_for_target_distance, Footprint,
};
// Stacking and planning
pub use crate::layout::{array_spacing, plan_layout, LayoutPlan, PlanCfg, PlanError, Spacing};
pub use crate::stack::{stack_array, ArrayLayout, PlacedSpeaker, StackCfg, StopReason};
// Derived views
pub use crate::fill::{plan_fills, Band, FillCfg, FillPlan, FillSpeaker, Side};
pub use crate::notes::{advisory, advisory_with, Advisory, AdvisoryCfg};
pub use crate::summary::SystemSummary;
// Inputs
pub use crate::venue::{presets, InputError, SpeakerSpec, VenueDimensions};
