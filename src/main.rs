use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use intersection_sim::simulation::{CrossingLight, SimConfig, World};

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Four-way intersection simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Which demo to run in headless mode
    #[arg(long, value_enum, default_value_t = Scenario::Intersection)]
    scenario: Scenario,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "3600")]
    ticks: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds between progress reports
    #[arg(long, default_value = "5")]
    report_every: u32,

    /// Print a text map of the intersection with each report
    #[arg(long)]
    map: bool,

    /// Second at which to engage the crossing's emergency hold
    #[arg(long)]
    emergency_at: Option<u32>,

    /// How long the emergency hold stays engaged, in seconds
    #[arg(long, default_value = "10")]
    emergency_for: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Four-way intersection with traffic
    Intersection,
    /// Single pedestrian-crossing light
    Crossing,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SimConfig::default();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            let world = build_world(config, cli.seed)?;
            run_with_ui(world);
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli.scenario {
        Scenario::Intersection => {
            let world = build_world(config, cli.seed)?;
            run_headless(world, cli.ticks, cli.report_every, cli.map);
        }
        Scenario::Crossing => {
            run_crossing(&config, cli.ticks, cli.emergency_at, cli.emergency_for);
        }
    }
    Ok(())
}

fn build_world(config: SimConfig, seed: Option<u64>) -> Result<World> {
    match seed {
        Some(seed) => World::with_seed(config, seed),
        None => World::new(config),
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(mut world: World, ticks: u64, report_every: u32, map: bool) {
    let tick_rate = world.config().tick_rate;
    info!("Running intersection simulation in headless mode...");
    info!("Ticks: {}, tick rate: {} per simulated second", ticks, tick_rate);

    let report_interval = u64::from(report_every.max(1)) * u64::from(tick_rate);

    for _ in 0..ticks {
        world.update();

        if world.ticks() % report_interval == 0 {
            info!(
                "--- After tick {} ({:.1}s simulated time) ---",
                world.ticks(),
                world.elapsed_secs()
            );
            println!("{}", world.summary());
            if map {
                println!("{}", world.draw_map());
            }
        }
    }

    let stats = world.stats();
    info!("=== SIMULATION COMPLETE ===");
    info!("Elapsed time: {:.2}s", stats.elapsed_secs);
    info!("Total vehicles spawned: {}", stats.total_spawned);
    info!("Total vehicles passed: {}", stats.total_passed);
    info!("Active vehicles: {}", stats.active_vehicles);
    for arm in &stats.arms {
        info!(
            "{}: {} passed, {} waiting, {} queued",
            arm.direction, arm.vehicles_passed, arm.vehicles_waiting, arm.queue_len
        );
    }
    info!("Throughput: {:.1}%", stats.throughput_percent());
}

/// Run the single crossing light in headless mode
fn run_crossing(config: &SimConfig, ticks: u64, emergency_at: Option<u32>, emergency_for: u32) {
    let tick_rate = u64::from(config.tick_rate);
    let engage_tick = emergency_at.map(|secs| u64::from(secs) * tick_rate);
    let release_tick = engage_tick.map(|tick| tick + u64::from(emergency_for) * tick_rate);

    info!("Running crossing light in headless mode...");
    let mut light = CrossingLight::new(config.tick_rate);

    for tick in 1..=ticks {
        if Some(tick) == engage_tick || Some(tick) == release_tick {
            light.toggle_emergency();
        }
        if light.tick() {
            info!(
                "{:.1}s: light {} for {}s, pedestrians {}",
                tick as f32 / tick_rate as f32,
                light.colour(),
                light.remaining_secs(),
                if light.pedestrians_may_cross() { "go" } else { "stop" }
            );
        }
    }

    info!("=== SIMULATION COMPLETE ===");
    info!("Final light: {}", light.colour());
}

#[cfg(feature = "ui")]
fn run_with_ui(world: World) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Intersection Sim UI...");
    println!();
    println!("Controls:");
    println!("  N/S/E/W     - Spawn a vehicle heading in that direction");
    println!("  SPACE       - Spawn a vehicle in a random direction");
    println!("  ESC         - Exit");
    println!();

    let (width, height) = (world.config().width as u32, world.config().height as u32);
    let tick_rate = world.config().tick_rate;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Intersection Sim".into(),
                        resolution: (width, height).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(Time::<Fixed>::from_hz(f64::from(tick_rate)))
        .insert_resource(intersection_sim::ui::SimWorldResource(world))
        .add_plugins(intersection_sim::ui::IntersectionUiPlugin)
        .run();
}
