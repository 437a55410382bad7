//! Tabular export of placed cabinets (CSV / Parquet via polars, JSON via serde).

use anyhow::{bail, Context, Result};
use linearray::api::{advisory, LayoutPlan};
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// One exported row per placed cabinet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeakerRow {
    pub array_id: u64,
    pub index: u64,
    pub x_position: f64,
    pub height: f64,
    pub mouth_height: f64,
    pub tilt_deg: f64,
    pub coverage_start: f64,
    pub coverage_end: f64,
    pub coverage_width: f64,
    pub note: String,
    pub saturated: bool,
}

pub fn rows(plan: &LayoutPlan) -> Vec<SpeakerRow> {
    plan.speakers()
        .map(|s| SpeakerRow {
            array_id: s.array_id as u64,
            index: s.index as u64,
            x_position: s.x_position,
            height: s.height,
            mouth_height: s.mouth_height,
            tilt_deg: s.tilt_deg,
            coverage_start: s.coverage_start,
            coverage_end: s.coverage_end,
            coverage_width: s.coverage_width,
            note: advisory(s).map(|a| a.to_string()).unwrap_or_default(),
            saturated: s.saturated,
        })
        .collect()
}

pub fn to_dataframe(rows: &[SpeakerRow]) -> PolarsResult<DataFrame> {
    df!(
        "array_id" => rows.iter().map(|r| r.array_id).collect::<Vec<_>>(),
        "index" => rows.iter().map(|r| r.index).collect::<Vec<_>>(),
        "x_position" => rows.iter().map(|r| r.x_position).collect::<Vec<_>>(),
        "height" => rows.iter().map(|r| r.height).collect::<Vec<_>>(),
        "mouth_height" => rows.iter().map(|r| r.mouth_height).collect::<Vec<_>>(),
        "tilt_deg" => rows.iter().map(|r| r.tilt_deg).collect::<Vec<_>>(),
        "coverage_start" => rows.iter().map(|r| r.coverage_start).collect::<Vec<_>>(),
        "coverage_end" => rows.iter().map(|r| r.coverage_end).collect::<Vec<_>>(),
        "coverage_width" => rows.iter().map(|r| r.coverage_width).collect::<Vec<_>>(),
        "note" => rows.iter().map(|r| r.note.clone()).collect::<Vec<_>>(),
        "saturated" => rows.iter().map(|r| r.saturated).collect::<Vec<_>>()
    )
}

/// Write the plan to `out`; the format follows the file extension.
pub fn write_plan(out: &Path, plan: &LayoutPlan) -> Result<usize> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let rows = rows(plan);
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => {
            fs::write(out, serde_json::to_vec_pretty(&rows)?)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        "csv" => {
            let mut df = to_dataframe(&rows)?;
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        "parquet" => {
            let mut df = to_dataframe(&rows)?;
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
        other => bail!("unsupported output format `{other}` (use .csv, .parquet or .json)"),
    }
    Ok(rows.len())
}
