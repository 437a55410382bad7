//! Human-readable plan report (venue block, ASCII layout, per-array tables,
//! summary, fills).

use std::io::{self, Write};

use linearray::api::{advisory, ArrayLayout, FillPlan, LayoutPlan, SystemSummary, VenueDimensions};

const STAGE_ROWS: usize = 8;
const AUDIENCE_ROWS: usize = 5;

pub fn write_report<W: Write>(
    w: &mut W,
    venue: &VenueDimensions,
    model: &str,
    plan: &LayoutPlan,
    fills: &FillPlan,
) -> io::Result<()> {
    write_venue(w, venue, model, plan)?;
    for arr in &plan.arrays {
        write_array(w, arr)?;
    }
    write_summary(w, plan)?;
    write_fills(w, fills)
}

fn write_venue<W: Write>(
    w: &mut W,
    venue: &VenueDimensions,
    model: &str,
    plan: &LayoutPlan,
) -> io::Result<()> {
    let n = plan.arrays.len();
    writeln!(w, "\n== Venue Setup ==")?;
    writeln!(
        w,
        "Venue: {:.1} m (W) × {:.1} m (L) × {:.1} m (D)",
        venue.width, venue.length, venue.depth
    )?;
    writeln!(w, "Speaker model: {model}")?;
    writeln!(w, "Rigging height: {:.2} m", plan.base_height)?;
    writeln!(w, "Number of arrays: {n}")?;
    writeln!(w, "Array spacing: {:.2} m\n", plan.step())?;

    writeln!(w, "== Main Arrays Layout ==")?;
    for _ in 0..STAGE_ROWS {
        writeln!(w, "Stage  {}", "   |   ".repeat(n))?;
    }
    let labels: String = (1..=n).map(|a| format!("[A{a}]  ")).collect();
    writeln!(w, "       {labels}")?;
    for _ in 0..AUDIENCE_ROWS {
        writeln!(w, "  ~    {}  (Audience)", "  ~   ".repeat(n))?;
    }
    writeln!(w)
}

fn write_array<W: Write>(w: &mut W, arr: &ArrayLayout) -> io::Result<()> {
    writeln!(
        w,
        "=== Array {} Configuration (x = {:.2} m) ===",
        arr.array_id, arr.x_position
    )?;
    writeln!(w, "Speaker | Height | Pitch  | Coverage Range | Width | Notes")?;
    writeln!(w, "--------|--------|--------|----------------|-------|-------")?;
    for s in &arr.speakers {
        let note = advisory(s).map(|a| a.to_string()).unwrap_or_default();
        writeln!(
            w,
            "   {:2}   | {:6.2} | {:6.2} | {:5.1} → {:5.1} | {:5.2} | {}",
            s.index, s.height, s.tilt_deg, s.coverage_start, s.coverage_end, s.coverage_width, note
        )?;
    }
    writeln!(w, "Stopped: {}", arr.stop)?;
    writeln!(w, "Total speakers in array: {}\n", arr.count())
}

fn write_summary<W: Write>(w: &mut W, plan: &LayoutPlan) -> io::Result<()> {
    let Some(sum) = SystemSummary::from_plan(plan) else {
        return Ok(());
    };
    writeln!(w, "=== System Summary ===")?;
    writeln!(w, "Total speakers configured: {}", sum.speakers)?;
    writeln!(
        w,
        "Height range: {:.2} m to {:.2} m",
        sum.min_height, sum.max_height
    )?;
    writeln!(w, "Total coverage distance: {:.1} m\n", sum.total_coverage)
}

fn write_fills<W: Write>(w: &mut W, fills: &FillPlan) -> io::Result<()> {
    writeln!(w, "=== Fill/Delay Arrays ===")?;
    for f in &fills.fills {
        let label = format!("Fill {}", f.side);
        writeln!(
            w,
            "{label:<10} @ x = {:6.2} m → Covers {:.0}–{:.0} m (near-field)",
            f.x_position, f.covers.from, f.covers.to
        )?;
    }
    writeln!(
        w,
        "\nRecommendation: Add delay speakers at {:.0}-{:.0}m for far-field coverage",
        fills.delay_zone.from, fills.delay_zone.to
    )
}
