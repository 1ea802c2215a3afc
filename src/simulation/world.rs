//! Main simulation world that ties everything together
//!
//! This is the entry point for running the intersection simulation
//! without any Bevy dependencies.

use anyhow::{Context, Result};
use log::{debug, trace};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::controller::SignalController;
use super::signal::Signal;
use super::stats::{ArmStats, SimulationStats};
use super::types::{
    Direction, Position, Rgb, VehicleId, VehicleKind, CAR_PALETTE, LANES_PER_ARM,
};
use super::vehicle::Vehicle;

/// The simulated intersection: four arms, two lanes each
pub struct World {
    config: SimConfig,

    /// Lane queues indexed by [`Direction::index`] then lane, front vehicle first
    lanes: [[Vec<Vehicle>; LANES_PER_ARM]; 4],

    /// One signal per arm, indexed by [`Direction::index`]
    signals: [Signal; 4],

    controller: SignalController,

    /// Next ID to assign
    next_id: u64,

    total_spawned: u64,
    total_passed: u64,

    /// Ticks since the last spawn attempt
    spawn_timer: u32,

    /// Ticks since creation
    ticks: u64,

    kind_weights: WeightedIndex<u32>,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl World {
    fn new_internal(config: SimConfig, rng: Option<StdRng>) -> Result<Self> {
        config.validate().context("Invalid simulation config")?;

        let kind_weights = WeightedIndex::new(config.vehicle_specs.iter().map(|s| s.spawn_weight))
            .context("Invalid vehicle spawn weights")?;
        let controller = SignalController::new(&config);
        let mut signals = Direction::ALL.map(|direction| Signal::new(direction, &config));
        controller.apply(&mut signals);

        Ok(Self {
            config,
            lanes: Default::default(),
            signals,
            controller,
            next_id: 0,
            total_spawned: 0,
            total_passed: 0,
            spawn_timer: 0,
            ticks: 0,
            kind_weights,
            rng,
        })
    }

    pub fn new(config: SimConfig) -> Result<Self> {
        Self::new_internal(config, None)
    }

    /// Create a new World with a seeded RNG for reproducible simulations
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self> {
        Self::new_internal(config, Some(StdRng::seed_from_u64(seed)))
    }

    fn random_bool(&mut self, probability: f64) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(probability),
            None => rand::rng().random_bool(probability),
        }
    }

    fn random_lane(&mut self) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..LANES_PER_ARM),
            None => rand::rng().random_range(0..LANES_PER_ARM),
        }
    }

    fn random_direction(&mut self) -> Direction {
        let choice = match &mut self.rng {
            Some(rng) => Direction::ALL.choose(rng),
            None => Direction::ALL.choose(&mut rand::rng()),
        };
        choice.copied().unwrap_or(Direction::North)
    }

    fn random_kind(&mut self) -> VehicleKind {
        let index = match &mut self.rng {
            Some(rng) => self.kind_weights.sample(rng),
            None => self.kind_weights.sample(&mut rand::rng()),
        };
        VehicleKind::ALL[index]
    }

    fn random_car_color(&mut self) -> Rgb {
        let choice = match &mut self.rng {
            Some(rng) => CAR_PALETTE.choose(rng),
            None => CAR_PALETTE.choose(&mut rand::rng()),
        };
        choice.copied().unwrap_or(CAR_PALETTE[0])
    }

    fn next_vehicle_id(&mut self) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn a random vehicle, optionally forcing its direction
    ///
    /// Kind and lane are drawn at random. Returns `None` when the chosen lane
    /// is still blocked by its previous vehicle.
    pub fn spawn(&mut self, direction: Option<Direction>) -> Option<VehicleId> {
        let direction = match direction {
            Some(direction) => direction,
            None => self.random_direction(),
        };
        let kind = self.random_kind();
        let lane = self.random_lane();
        self.spawn_vehicle(direction, lane, kind)
    }

    /// Spawn a vehicle of a given kind at the entry of a specific lane
    ///
    /// # Panics
    ///
    /// Panics if `lane` is not a lane index of the arm.
    pub fn spawn_vehicle(
        &mut self,
        direction: Direction,
        lane: usize,
        kind: VehicleKind,
    ) -> Option<VehicleId> {
        assert!(
            lane < LANES_PER_ARM,
            "lane {lane} out of range, arms have {LANES_PER_ARM} lanes"
        );

        if let Some(last) = self.lanes[direction.index()][lane].last() {
            let outside = last.distance_outside_entry(&self.config);
            if outside > self.config.spawn_clearance {
                debug!(
                    "Spawn suppressed on {} lane {}: vehicle {} still {:.0} outside the edge",
                    direction, lane, last.id.0, outside
                );
                return None;
            }
        }

        let color = if kind == VehicleKind::Car {
            self.random_car_color()
        } else {
            self.config.spec(kind).color
        };

        let id = self.next_vehicle_id();
        let position = self.config.spawn_position(direction, lane);
        let vehicle = Vehicle::new(
            id,
            kind,
            direction,
            lane,
            position,
            self.config.spec(kind),
            color,
        );

        trace!("Spawned {} {} heading {} in lane {}", kind, id.0, direction, lane);
        self.lanes[direction.index()][lane].push(vehicle);
        self.total_spawned += 1;
        Some(id)
    }

    /// Advance the whole world by one fixed tick
    pub fn update(&mut self) {
        self.ticks += 1;

        if self.controller.tick() {
            self.controller.apply(&mut self.signals);
        }

        self.update_vehicles();
        self.update_spawning();
    }

    /// Move every vehicle, then book passes and drop vehicles that left the world
    fn update_vehicles(&mut self) {
        let config = &self.config;
        let mut passed_this_tick = 0;

        for direction in Direction::CYCLE {
            let signal = &mut self.signals[direction.index()];
            let state = signal.state;
            let mut waiting = 0;

            for lane in self.lanes[direction.index()].iter_mut() {
                // Front to back, so each vehicle sees its predecessor's new position
                for i in 0..lane.len() {
                    let (front, rest) = lane.split_at_mut(i);
                    let vehicle = &mut rest[0];
                    vehicle.update(state, front.last(), config);

                    if !vehicle.passed && vehicle.is_stopped(config) {
                        waiting += 1;
                    }
                }

                for vehicle in lane.iter_mut().filter(|v| !v.passed) {
                    if vehicle.has_crossed(config) {
                        vehicle.passed = true;
                        signal.vehicles_passed += 1;
                        passed_this_tick += 1;
                        trace!("Vehicle {} passed heading {}", vehicle.id.0, direction);
                    }
                }

                lane.retain(|vehicle| !vehicle.is_off_world(config));
            }

            signal.vehicles_waiting = waiting;
        }

        self.total_passed += passed_this_tick;
    }

    fn update_spawning(&mut self) {
        self.spawn_timer += 1;
        if self.spawn_timer < self.config.spawn_interval_ticks() {
            return;
        }
        self.spawn_timer = 0;
        if self.random_bool(self.config.spawn_probability) {
            self.spawn(None);
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn controller(&self) -> &SignalController {
        &self.controller
    }

    pub fn signal(&self, direction: Direction) -> &Signal {
        &self.signals[direction.index()]
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    /// Vehicles of one lane, front first
    pub fn lane(&self, direction: Direction, lane: usize) -> &[Vehicle] {
        &self.lanes[direction.index()][lane]
    }

    /// Mutable view of one lane; vehicles can be edited but not reordered
    pub fn lane_mut(&mut self, direction: Direction, lane: usize) -> &mut [Vehicle] {
        &mut self.lanes[direction.index()][lane]
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.lanes.iter().flatten().flatten()
    }

    pub fn vehicle_count(&self) -> usize {
        self.lanes.iter().flatten().map(Vec::len).sum()
    }

    /// Vehicles on both lanes of an arm
    pub fn queue_len(&self, direction: Direction) -> usize {
        self.lanes[direction.index()].iter().map(Vec::len).sum()
    }

    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }

    pub fn total_passed(&self) -> u64 {
        self.total_passed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds since creation
    pub fn elapsed_secs(&self) -> f32 {
        self.ticks as f32 / self.config.tick_rate as f32
    }

    /// Snapshot of the counters a renderer or report needs
    pub fn stats(&self) -> SimulationStats {
        let arms = Direction::CYCLE
            .iter()
            .map(|&direction| {
                let signal = self.signal(direction);
                ArmStats {
                    direction,
                    state: signal.state,
                    vehicles_passed: signal.vehicles_passed,
                    vehicles_waiting: signal.vehicles_waiting,
                    queue_len: self.queue_len(direction),
                }
            })
            .collect();

        SimulationStats {
            total_spawned: self.total_spawned,
            total_passed: self.total_passed,
            active_vehicles: self.vehicle_count(),
            elapsed_secs: self.elapsed_secs(),
            active_direction: self.controller.active_direction(),
            phase: self.controller.phase(),
            remaining_secs: self.controller.remaining_secs(),
            arms,
        }
    }

    /// Multi-line text summary of the world state
    pub fn summary(&self) -> String {
        let stats = self.stats();
        let mut lines = vec![
            "=== Intersection Summary ===".to_string(),
            format!("Time: {:.1}s (tick {})", stats.elapsed_secs, self.ticks),
            format!(
                "Active arm: {} {:?}, {}s left",
                stats.active_direction, stats.phase, stats.remaining_secs
            ),
        ];
        lines.extend(stats.arms.iter().map(|arm| {
            format!(
                "  {:<5} {:<6} queue={:<3} passed={:<4} waiting={}",
                arm.direction.to_string(),
                arm.state.to_string(),
                arm.queue_len,
                arm.vehicles_passed,
                arm.vehicles_waiting
            )
        }));
        lines.push(format!(
            "Spawned: {}, Passed: {}, Current: {}",
            stats.total_spawned, stats.total_passed, stats.active_vehicles
        ));
        lines.join("\n") + "\n"
    }

    /// Draw a visual map of the intersection as text
    pub fn draw_map(&self) -> String {
        const CELL: f32 = 25.0;

        let cols = (self.config.width / CELL).ceil() as usize;
        let rows = (self.config.height / CELL).ceil() as usize;
        let center = self.config.center();
        let half_road = self.config.road_width / 2.0;

        let to_grid = |pos: Position| -> Option<(usize, usize)> {
            if pos.x < 0.0 || pos.y < 0.0 {
                return None;
            }
            let col = (pos.x / CELL) as usize;
            let row = (pos.y / CELL) as usize;
            (col < cols && row < rows).then_some((row, col))
        };

        // Roads
        let mut grid: Vec<Vec<char>> = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let x = (col as f32 + 0.5) * CELL;
                        let y = (row as f32 + 0.5) * CELL;
                        if (x - center.x).abs() <= half_road || (y - center.y).abs() <= half_road {
                            '.'
                        } else {
                            ' '
                        }
                    })
                    .collect()
            })
            .collect();

        // Signals, drawn on the stop line of each arm
        for signal in &self.signals {
            let direction = signal.direction;
            let along = center.along(direction)
                - direction.travel_sign() * self.config.stop_line_offset;
            let across = self.config.lane_coordinate(direction, 0);
            let pos = if direction.is_vertical() {
                Position::new(across, along)
            } else {
                Position::new(along, across)
            };
            if let Some((row, col)) = to_grid(pos) {
                grid[row][col] = signal.state.letter();
            }
        }

        // Vehicles
        for vehicle in self.vehicles() {
            if let Some((row, col)) = to_grid(vehicle.position) {
                grid[row][col] = vehicle.kind.letter();
            }
        }

        let mut lines = vec![
            "=== Intersection Map ===".to_string(),
            "Legend: a=Auto c=Car b=Bike B=Bus T=Truck +=Ambulance, R/Y/G=Signal, .=Road"
                .to_string(),
        ];
        lines.extend(grid.iter().map(|row| {
            let line: String = row.iter().collect();
            line.trim_end().to_string()
        }));
        lines.join("\n") + "\n"
    }
}
