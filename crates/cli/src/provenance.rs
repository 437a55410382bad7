//! `<stem>.provenance.json` sidecars for exported plans.
//!
//! The sidecar records the effective scenario (after CLI overrides), a short
//! account of the resulting plan and the code revision that produced it, so
//! an exported table can be traced back to the run without re-reading logs.

use anyhow::{Context, Result};
use linearray::api::LayoutPlan;
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::scenario::Scenario;

/// Inputs and outcome of one planning run.
#[derive(Clone, Debug, Serialize)]
pub struct PlanRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_file: Option<String>,
    pub scenario: Scenario,
    pub base_height: f64,
    pub step: f64,
    pub arrays: usize,
    pub speakers: usize,
    /// Stop reason per array, in array order.
    pub stops: Vec<String>,
}

impl PlanRecord {
    pub fn new(scenario_file: Option<&Path>, scenario: Scenario, plan: &LayoutPlan) -> Self {
        Self {
            scenario_file: scenario_file.map(|p| p.to_string_lossy().into_owned()),
            scenario,
            base_height: plan.base_height,
            step: plan.step(),
            arrays: plan.arrays.len(),
            speakers: plan.total_speakers(),
            stops: plan.arrays.iter().map(|a| a.stop.to_string()).collect(),
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    linearray_version: &'static str,
    callsite: Callsite,
    run: &'a PlanRecord,
    rows: usize,
    outputs: [String; 1],
}

/// Write the sidecar for `artifact`, which holds `rows` exported cabinets.
#[track_caller]
pub fn write_sidecar(artifact: &Path, record: &PlanRecord, rows: usize) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        linearray_version: linearray::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        run: record,
        rows,
        outputs: [artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `hall.csv` → `hall.provenance.json`, next to the artifact.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (runtime, then build time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_owned))
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
}
