//! Plan the reference hall and print one line per cabinet.
//!
//! Quick sanity probe for the stacker without going through the CLI:
//!   cargo run -p linearray --example reference_hall

use linearray::api::{advisory, plan_layout, presets, PlanCfg, SystemSummary};

fn main() {
    let venue = presets::hall();
    let speaker = presets::k2();
    let plan = plan_layout(&venue, &speaker, &PlanCfg::default()).expect("reference inputs are valid");

    println!(
        "arrays={} step={:.3} start_x={:.3} base_height={:.2}",
        plan.arrays.len(),
        plan.step(),
        plan.start_x(),
        plan.base_height
    );
    for s in plan.speakers() {
        let note = advisory(s).map(|a| a.to_string()).unwrap_or_default();
        println!(
            "array={} idx={} h={:.2} tilt={:.2} cover={:.2}..{:.2} width={:.2} {note}",
            s.array_id, s.index, s.height, s.tilt_deg, s.coverage_start, s.coverage_end, s.coverage_width
        );
    }
    if let Some(sum) = SystemSummary::from_plan(&plan) {
        println!(
            "speakers={} heights={:.2}..{:.2} coverage={:.1}",
            sum.speakers, sum.min_height, sum.max_height, sum.total_coverage
        );
    }
}
