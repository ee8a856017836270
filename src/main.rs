use ballsim::{Scenario, ScenarioConfig, ClockConfig, RendererConfig};
use ballsim::{FrameClock, FrameDriver, FixedClock, SystemClock, LogRenderer};
use ballsim::bench_step;

use clap::Parser;
use anyhow::Result;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Stop after this many frames (overrides the scenario)
    #[arg(long)]
    frames: Option<u64>,

    /// Time World::step for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
}

fn run_headless<C: FrameClock>(clock: C, scenario: &mut Scenario, paced: bool) -> Result<()> {
    let renderer = LogRenderer::new(scenario.engine.report_every);
    let mut driver = FrameDriver::new(clock, renderer, scenario.parameters.max_dt);
    if paced {
        driver = driver.with_pacing(scenario.engine.frame_rate);
    }
    let summary = driver.run(&mut scenario.world, scenario.engine.frames)?;
    log::info!(
        "done after {} frames, t = {:.3}s, kinetic energy = {:.3}",
        summary.frames, scenario.world.t, scenario.world.kinetic_energy()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    if args.frames.is_some() {
        scenario.engine.frames = args.frames;
    }

    match scenario.engine.renderer {
        RendererConfig::Log => match scenario.engine.clock {
            ClockConfig::System => run_headless(SystemClock::new(), &mut scenario, true),
            ClockConfig::Fixed => {
                let clock = FixedClock::new(1.0 / scenario.engine.frame_rate);
                run_headless(clock, &mut scenario, false)
            }
        },
        RendererConfig::Viewer => run_viewer(scenario),
    }
}

#[cfg(feature = "viewer")]
fn run_viewer(scenario: Scenario) -> Result<()> {
    ballsim::run_2d(scenario);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_scenario: Scenario) -> Result<()> {
    anyhow::bail!("renderer \"viewer\" needs the `viewer` feature: cargo run --features viewer")
}
