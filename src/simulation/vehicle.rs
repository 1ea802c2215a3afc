//! Vehicle movement logic for the intersection simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::config::{SimConfig, FOLLOWING_GAP_PER_SPEED, MIN_FOLLOWING_GAP};
use super::signal::SignalState;
use super::types::{Direction, Position, Rgb, VehicleId, VehicleKind, VehicleSpec};

/// A vehicle driving straight through the intersection
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub direction: Direction,
    /// 0 is the lane nearest the road centre line
    pub lane: usize,
    /// Centre of the vehicle
    pub position: Position,
    pub speed: f32,
    /// Set once the vehicle is through the intersection
    pub passed: bool,
    pub color: Rgb,
    /// Size across the lane
    pub width: f32,
    /// Size along the lane
    pub length: f32,
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    ignores_signals: bool,
}

impl Vehicle {
    /// Create a stationary vehicle with its kind's attributes and a body colour
    pub fn new(
        id: VehicleId,
        kind: VehicleKind,
        direction: Direction,
        lane: usize,
        position: Position,
        spec: &VehicleSpec,
        color: Rgb,
    ) -> Self {
        Self {
            id,
            kind,
            direction,
            lane,
            position,
            speed: 0.0,
            passed: false,
            color,
            width: spec.width,
            length: spec.length,
            max_speed: spec.max_speed,
            accel: spec.accel,
            decel: spec.decel,
            ignores_signals: spec.ignores_signals,
        }
    }

    /// Width and height of the vehicle as drawn on screen
    pub fn drawn_size(&self) -> (f32, f32) {
        if self.direction.is_vertical() {
            (self.width, self.length)
        } else {
            (self.length, self.width)
        }
    }

    /// Signed distance still to travel before reaching the intersection centre
    ///
    /// Positive while approaching, negative once past the centre.
    pub fn approach_distance(&self, config: &SimConfig) -> f32 {
        let center = config.center().along(self.direction);
        -self.direction.travel_sign() * (self.position.along(self.direction) - center)
    }

    /// Free space between this vehicle's front and the rear of `ahead`
    pub fn gap_to(&self, ahead: &Vehicle) -> f32 {
        let centre_distance = self.direction.travel_sign()
            * (ahead.position.along(self.direction) - self.position.along(self.direction));
        centre_distance - self.length / 2.0 - ahead.length / 2.0
    }

    /// Minimum gap kept behind the vehicle ahead at the current speed
    pub fn safe_following_distance(&self) -> f32 {
        MIN_FOLLOWING_GAP.max(self.speed * FOLLOWING_GAP_PER_SPEED)
    }

    pub fn stop_for_vehicle(&self, ahead: Option<&Vehicle>) -> bool {
        ahead.is_some_and(|ahead| self.gap_to(ahead) < self.safe_following_distance())
    }

    /// True when a non-green signal applies and the vehicle is in the stop zone
    pub fn stop_for_signal(&self, signal: SignalState, config: &SimConfig) -> bool {
        if self.ignores_signals || signal == SignalState::Green {
            return false;
        }
        let distance = self.approach_distance(config);
        let near = config.stop_line_offset + config.stop_zone_near;
        let far = config.stop_line_offset + config.stop_zone_far;
        near < distance && distance < far
    }

    /// Brake or accelerate, then move
    pub fn update(&mut self, signal: SignalState, ahead: Option<&Vehicle>, config: &SimConfig) {
        if self.stop_for_vehicle(ahead) || self.stop_for_signal(signal, config) {
            self.speed = (self.speed - self.decel).max(0.0);
        } else {
            self.speed = (self.speed + self.accel).min(self.max_speed);
        }
        self.position.advance(self.direction, self.speed);
    }

    /// Whether the vehicle is standing (brake lights on)
    pub fn is_stopped(&self, config: &SimConfig) -> bool {
        self.speed < config.waiting_speed_threshold
    }

    /// Through the intersection by the configured threshold
    pub fn has_crossed(&self, config: &SimConfig) -> bool {
        self.approach_distance(config) < -config.passed_threshold
    }

    /// Far enough past the exit edge to be dropped
    pub fn is_off_world(&self, config: &SimConfig) -> bool {
        let beyond_exit = self.direction.travel_sign()
            * (self.position.along(self.direction) - config.exit_edge(self.direction));
        beyond_exit > config.removal_margin
    }

    /// How far outside the entry edge the vehicle still is
    pub fn distance_outside_entry(&self, config: &SimConfig) -> f32 {
        -self.direction.travel_sign()
            * (self.position.along(self.direction) - config.entry_edge(self.direction))
    }
}
