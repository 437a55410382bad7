//! Line-array deployment planning for rectangular venues.
//!
//! Given a venue box and one cabinet model, the planner decides how many
//! vertical arrays to hang, where to hang them across the width, and how each
//! array's cabinets are stacked and tilted so their floor footprints tile the
//! venue depth from the back wall forward.
//!
//! Layers (leaves first)
//! - `geometry`: footprint and tilt primitives over plain scalars.
//! - `stack`: the per-array stacking loop.
//! - `layout`: spacing and one stack per array.
//! - `notes`, `summary`, `fill`: read-only views over a finished plan.
//!
//! Everything is pure and deterministic: the same inputs give the same plan.

pub mod api;
pub mod cfg;
pub mod fill;
pub mod geometry;
pub mod layout;
pub mod notes;
pub mod stack;
pub mod summary;
pub mod venue;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use layout::{plan_layout, LayoutPlan, PlanCfg, PlanError};
pub use stack::{ArrayLayout, PlacedSpeaker, StopReason};
pub use venue::{InputError, SpeakerSpec, VenueDimensions};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fill::{plan_fills, FillCfg, FillPlan, FillSpeaker, Side};
    pub use crate::geometry::{ellipse_footprint, tilt_for_target_distance, Footprint};
    pub use crate::layout::{array_spacing, plan_layout, LayoutPlan, PlanCfg, PlanError, Spacing};
    pub use crate::notes::{advisory, Advisory};
    pub use crate::stack::{stack_array, ArrayLayout, PlacedSpeaker, StackCfg, StopReason};
    pub use crate::summary::SystemSummary;
    pub use crate::venue::{presets, InputError, SpeakerSpec, VenueDimensions};
}
