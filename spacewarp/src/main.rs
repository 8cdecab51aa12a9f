use spacewarp::{Scenario, ScenarioConfig};
use spacewarp::{bench_step, bench_warp};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless gravity and spacetime-warp simulation")]
struct Args {
    /// Scenario file, relative to the crate's `scenarios/` directory unless absolute
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    steps: u64,

    /// Wall-clock seconds per frame, only used for authoring growth
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Start running even if the scenario is paused
    #[arg(long)]
    run: bool,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let path = PathBuf::from(file_name);
    let config_path = if path.is_absolute() {
        path
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(path)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_warp();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    if args.run {
        scenario.resume();
    }

    info!(
        "running {} frames with {} bodies ({})",
        args.steps,
        scenario.bodies().len(),
        if scenario.is_paused() { "paused" } else { "running" }
    );

    let mut damped = 0;
    for _ in 0..args.steps {
        damped += scenario.step(args.frame_dt).damped;
    }

    let view = scenario.view();
    for (i, b) in view.bodies.iter().enumerate() {
        info!(
            "body {i}: x = [{:.2}, {:.2}, {:.2}], |v| = {:.4}, radius = {:.3}",
            b.x.x,
            b.x.y,
            b.x.z,
            b.v.norm(),
            b.radius()
        );
    }
    if let Some((lo, hi)) = view.lattice.depth_range() {
        info!("lattice depth: {lo:.3} .. {hi:.3} (plane {:.3})", view.lattice.initial_y());
    }
    info!("{} physics steps, {} damped pairs", view.steps, damped);

    Ok(())
}
