use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linearray::api::{
    plan_fills, plan_layout, FillCfg, LayoutPlan, PlanCfg, SpeakerSpec, VenueDimensions,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod export;
mod provenance;
mod report;
mod scenario;

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "linearray")]
#[command(about = "Line-array deployment planner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Plan arrays for a scenario and print the report
    Plan(PlanArgs),
    /// Print (or write) the default scenario as a JSON template
    Scenario {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug, Default)]
struct PlanArgs {
    /// Scenario JSON; defaults to the 30×15×50 m reference hall
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Minimum rigging height for the lowest cabinet (m)
    #[arg(long)]
    target_floor: Option<f64>,
    /// Array spacing as a fraction of the top footprint width
    #[arg(long)]
    overlap: Option<f64>,
    /// Top rigging height (m); default is venue length minus rig clearance
    #[arg(long)]
    base_height: Option<f64>,
    #[arg(long)]
    max_per_array: Option<usize>,
    #[arg(long)]
    max_total: Option<usize>,
    /// Export placed cabinets (.csv, .parquet or .json) with a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
    /// Skip the printed report
    #[arg(long)]
    quiet: bool,
}

impl PlanArgs {
    fn apply(&self, mut cfg: PlanCfg) -> PlanCfg {
        if let Some(v) = self.target_floor {
            cfg.target_floor = v;
        }
        if let Some(v) = self.overlap {
            cfg.overlap_factor = v;
        }
        if let Some(v) = self.base_height {
            cfg.base_height = Some(v);
        }
        if let Some(v) = self.max_per_array {
            cfg.max_per_array = v;
        }
        if let Some(v) = self.max_total {
            cfg.max_total = Some(v);
        }
        cfg
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Plan(args) => plan(args),
        Action::Scenario { out } => scenario(out),
        Action::Report => report(),
    }
}

fn plan(args: PlanArgs) -> Result<()> {
    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let venue: VenueDimensions = scenario.venue.into();
    let speaker: SpeakerSpec = scenario.speaker.clone().into();
    let cfg = args.apply(scenario.plan.into());
    tracing::info!(
        scenario = ?args.scenario,
        model = %speaker.model,
        width = venue.width,
        depth = venue.depth,
        "plan"
    );

    let plan = plan_layout(&venue, &speaker, &cfg)?;
    log_plan(&plan);
    let fills = plan_fills(&plan, &venue, &FillCfg::default());

    if !args.quiet {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        report::write_report(&mut lock, &venue, &speaker.model, &plan, &fills)?;
        lock.flush()?;
    }

    if let Some(out) = &args.out {
        let n = export::write_plan(out, &plan)?;
        let effective = Scenario {
            plan: cfg.into(),
            ..scenario
        };
        let record = provenance::PlanRecord::new(args.scenario.as_deref(), effective, &plan);
        let prov = provenance::write_sidecar(out, &record, n)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), rows = n, "export");
    }
    Ok(())
}

fn log_plan(plan: &LayoutPlan) {
    tracing::info!(
        arrays = plan.arrays.len(),
        step = plan.step(),
        base_height = plan.base_height,
        speakers = plan.total_speakers(),
        "layout"
    );
    for arr in &plan.arrays {
        tracing::debug!(
            array_id = arr.array_id,
            x = arr.x_position,
            count = arr.count(),
            stop = %arr.stop,
            "array stacked"
        );
        for s in arr.speakers.iter().filter(|s| s.saturated) {
            tracing::warn!(
                array_id = s.array_id,
                index = s.index,
                tilt_deg = s.tilt_deg,
                "coverage cone edge saturated near 90°"
            );
        }
    }
    if plan.spacing.top_footprint.saturated {
        tracing::warn!("top footprint saturated; array spacing may be unreliable");
    }
}

fn scenario(out: Option<PathBuf>) -> Result<()> {
    let text = Scenario::default().to_json_pretty()?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, text)?;
            tracing::info!(out = %path.display(), "scenario");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "linearray_version": linearray::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
