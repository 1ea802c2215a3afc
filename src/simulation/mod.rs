//! Standalone intersection simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod config;
mod controller;
mod crossing;
mod signal;
mod stats;
mod types;
mod vehicle;
mod world;

pub use config::{
    SimConfig, FOLLOWING_GAP_PER_SPEED, GREEN_DURATION_SECS, MIN_FOLLOWING_GAP, REMOVAL_MARGIN,
    ROAD_WIDTH, SPAWN_CLEARANCE, SPAWN_MARGIN, SPAWN_PROBABILITY, SPAWN_RATE_PER_SECOND,
    STOP_LINE_OFFSET, STOP_ZONE_FAR, STOP_ZONE_NEAR, TICK_RATE, WAITING_SPEED_THRESHOLD,
    WORLD_HEIGHT, WORLD_WIDTH, YELLOW_DURATION_SECS,
};
pub use controller::{Phase, SignalController};
pub use crossing::{CrossingLight, CROSSING_STEPS};
pub use signal::{Signal, SignalState};
pub use stats::{ArmStats, SimulationStats};
pub use types::{
    Direction, Position, Rgb, VehicleId, VehicleKind, VehicleSpec, CAR_PALETTE,
    DEFAULT_VEHICLE_SPECS, LANES_PER_ARM,
};
pub use vehicle::Vehicle;
pub use world::World;
