//! Construction-time tuning for the intersection
//!
//! Every constant the simulation reads lives here. `SimConfig::default()`
//! gathers them; a world validates its config once when it is built.

use anyhow::{ensure, Result};

use super::types::{Direction, Position, VehicleKind, VehicleSpec, DEFAULT_VEHICLE_SPECS};

/// World size in distance units (pixels in the reference renderer)
pub const WORLD_WIDTH: f32 = 1400.0;
pub const WORLD_HEIGHT: f32 = 900.0;

/// Full width of each road, both travel directions
pub const ROAD_WIDTH: f32 = 180.0;

/// Distance from the intersection centre to the stop line
pub const STOP_LINE_OFFSET: f32 = 110.0;

/// Band beyond the stop line in which vehicles brake for non-green
pub const STOP_ZONE_NEAR: f32 = 20.0;
pub const STOP_ZONE_FAR: f32 = 80.0;

/// Phase durations in seconds
pub const GREEN_DURATION_SECS: u32 = 15;
pub const YELLOW_DURATION_SECS: u32 = 3;

/// Simulation ticks per simulated second
pub const TICK_RATE: u32 = 60;

/// Average vehicles spawned per second, and the chance each spawn slot fires
pub const SPAWN_RATE_PER_SECOND: f32 = 0.5;
pub const SPAWN_PROBABILITY: f64 = 0.75;

/// Vehicles appear this far outside the world edge
pub const SPAWN_MARGIN: f32 = 100.0;

/// A lane accepts a new vehicle only once its last vehicle is at most this
/// far outside the world edge
pub const SPAWN_CLEARANCE: f32 = 50.0;

/// Vehicles are removed this far past the opposite world edge
pub const REMOVAL_MARGIN: f32 = 200.0;

/// Speed below which a vehicle counts as stopped
pub const WAITING_SPEED_THRESHOLD: f32 = 0.1;

/// Safe-following distance: `max(MIN_FOLLOWING_GAP, speed * FOLLOWING_GAP_PER_SPEED)`
pub const MIN_FOLLOWING_GAP: f32 = 10.0;
pub const FOLLOWING_GAP_PER_SPEED: f32 = 10.0;

/// Tuning for a single intersection
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub width: f32,
    pub height: f32,
    pub road_width: f32,
    pub lane_width: f32,
    pub stop_line_offset: f32,
    pub stop_zone_near: f32,
    pub stop_zone_far: f32,
    pub green_secs: u32,
    pub yellow_secs: u32,
    pub tick_rate: u32,
    pub spawn_rate_per_second: f32,
    pub spawn_probability: f64,
    pub spawn_margin: f32,
    pub spawn_clearance: f32,
    pub removal_margin: f32,
    /// Distance past the centre at which a vehicle counts as through
    pub passed_threshold: f32,
    pub waiting_speed_threshold: f32,
    /// Indexed by [`VehicleKind::index`]
    pub vehicle_specs: [VehicleSpec; 6],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            road_width: ROAD_WIDTH,
            lane_width: ROAD_WIDTH / 4.0,
            stop_line_offset: STOP_LINE_OFFSET,
            stop_zone_near: STOP_ZONE_NEAR,
            stop_zone_far: STOP_ZONE_FAR,
            green_secs: GREEN_DURATION_SECS,
            yellow_secs: YELLOW_DURATION_SECS,
            tick_rate: TICK_RATE,
            spawn_rate_per_second: SPAWN_RATE_PER_SECOND,
            spawn_probability: SPAWN_PROBABILITY,
            spawn_margin: SPAWN_MARGIN,
            spawn_clearance: SPAWN_CLEARANCE,
            removal_margin: REMOVAL_MARGIN,
            passed_threshold: ROAD_WIDTH,
            waiting_speed_threshold: WAITING_SPEED_THRESHOLD,
            vehicle_specs: DEFAULT_VEHICLE_SPECS,
        }
    }
}

impl SimConfig {
    /// Reject configurations the tick loop cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "world size must be positive, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.road_width > 0.0 && self.lane_width > 0.0,
            "road and lane widths must be positive"
        );
        ensure!(
            self.lane_width * 2.0 <= self.road_width / 2.0 + f32::EPSILON,
            "two lanes of width {} do not fit in half a road of width {}",
            self.lane_width,
            self.road_width
        );
        ensure!(
            self.stop_zone_near < self.stop_zone_far,
            "stop zone must be a non-empty band, got {}..{}",
            self.stop_zone_near,
            self.stop_zone_far
        );
        ensure!(self.tick_rate > 0, "tick rate must be positive");
        ensure!(
            self.green_secs > 0 && self.yellow_secs > 0,
            "phase durations must be positive"
        );
        ensure!(
            self.spawn_rate_per_second > 0.0,
            "spawn rate must be positive, got {}",
            self.spawn_rate_per_second
        );
        ensure!(
            (0.0..=1.0).contains(&self.spawn_probability),
            "spawn probability must lie in [0, 1], got {}",
            self.spawn_probability
        );
        ensure!(
            self.spawn_clearance < self.spawn_margin,
            "spawn clearance {} must be smaller than the spawn margin {}",
            self.spawn_clearance,
            self.spawn_margin
        );
        for kind in VehicleKind::ALL {
            let spec = self.spec(kind);
            ensure!(spec.spawn_weight > 0, "{kind} has a zero spawn weight");
            ensure!(
                spec.max_speed > 0.0 && spec.accel > 0.0 && spec.decel > 0.0,
                "{kind} needs positive max speed, acceleration and deceleration"
            );
            ensure!(
                spec.width > 0.0 && spec.length > 0.0,
                "{kind} needs a positive size"
            );
        }
        Ok(())
    }

    pub fn spec(&self, kind: VehicleKind) -> &VehicleSpec {
        &self.vehicle_specs[kind.index()]
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ticks between spawn attempts
    pub fn spawn_interval_ticks(&self) -> u32 {
        (self.tick_rate as f32 / self.spawn_rate_per_second).round().max(1.0) as u32
    }

    /// Offset of a lane's centre line from the road centre line
    pub fn lane_offset(&self, lane: usize) -> f32 {
        self.lane_width / 2.0 + self.lane_width * lane as f32
    }

    /// Cross-axis coordinate of a lane's centre line
    ///
    /// Traffic keeps right: northbound lanes sit right of the vertical road's
    /// centre line, eastbound lanes below the horizontal one.
    pub fn lane_coordinate(&self, direction: Direction, lane: usize) -> f32 {
        let center = self.center();
        let offset = self.lane_offset(lane);
        match direction {
            Direction::North => center.x + offset,
            Direction::South => center.x - offset,
            Direction::East => center.y + offset,
            Direction::West => center.y - offset,
        }
    }

    /// Along-axis coordinate of the world edge a direction enters from
    pub fn entry_edge(&self, direction: Direction) -> f32 {
        match direction {
            Direction::North => self.height,
            Direction::South => 0.0,
            Direction::East => 0.0,
            Direction::West => self.width,
        }
    }

    /// Along-axis coordinate of the world edge a direction leaves through
    pub fn exit_edge(&self, direction: Direction) -> f32 {
        match direction {
            Direction::North => 0.0,
            Direction::South => self.height,
            Direction::East => self.width,
            Direction::West => 0.0,
        }
    }

    /// Where a new vehicle appears for a direction and lane
    pub fn spawn_position(&self, direction: Direction, lane: usize) -> Position {
        let along = self.entry_edge(direction) - direction.travel_sign() * self.spawn_margin;
        let across = self.lane_coordinate(direction, lane);
        if direction.is_vertical() {
            Position::new(across, along)
        } else {
            Position::new(along, across)
        }
    }
}
