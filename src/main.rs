//! Lunar Lander headless runner
//!
//! Drives the fixed-step simulation with a virtual clock and the seeded
//! autopilot until the lander wins, crashes or runs out of time.
//!
//! Usage: `lunar-lander [settings.json]`

use std::path::Path;
use std::process::ExitCode;

use lunar_lander::input::InputState;
use lunar_lander::pilot::Autopilot;
use lunar_lander::renderer::DrawList;
use lunar_lander::sim::{FixedTimestep, Outcome, World};
use lunar_lander::{LanderError, Level, Settings};

const DEFAULT_SETTINGS_PATH: &str = "lander.json";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    match run() {
        Ok(outcome) => {
            println!("Outcome: {}", outcome.as_str());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Outcome, LanderError> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(Path::new(&settings_path))?;

    let level = match &settings.runner.level {
        Some(path) => Level::load(path)?,
        None => Level::default(),
    };

    let mut world = World::from_level(&level, &settings.physics);
    log::info!(
        "World ready: {} platforms, {} hazards",
        world.platforms.len(),
        world.hazards.len()
    );

    let runner = &settings.runner;
    let mut clock = FixedTimestep::new(settings.physics.fixed_step);
    let mut pilot = Autopilot::new(runner.seed);
    let mut input = InputState::new();

    let mut now = 0.0f64;
    let mut frames = 0u64;
    let mut quads = 0usize;

    while !input.quit_requested() && now < f64::from(runner.time_limit) {
        input.apply_all(pilot.poll());
        now += f64::from(pilot.frame_time(runner.frame_interval, runner.frame_jitter));

        let report = clock.run_frame(&mut world, &input.tick_input(), now);
        quads += DrawList::build(&world).quad_count();
        frames += 1;

        if report.outcome.is_some() {
            break;
        }
    }

    if !world.outcome.is_terminal() {
        log::warn!("Time limit of {}s reached without landing", runner.time_limit);
    }
    log::info!(
        "Finished after {} frames, {} ticks, {} quads drawn",
        frames,
        world.time_ticks,
        quads
    );

    Ok(world.outcome)
}
