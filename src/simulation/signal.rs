//! Traffic signal on one arm of the intersection

use std::fmt;

use super::config::SimConfig;
use super::types::{Direction, Position};

/// Light shown to one arm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Red,
    Yellow,
    Green,
}

impl SignalState {
    pub fn letter(self) -> char {
        match self {
            SignalState::Red => 'R',
            SignalState::Yellow => 'Y',
            SignalState::Green => 'G',
        }
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalState::Red => "RED",
            SignalState::Yellow => "YELLOW",
            SignalState::Green => "GREEN",
        };
        f.write_str(name)
    }
}

/// The signal for one arm, with its traffic counters
#[derive(Debug, Clone)]
pub struct Signal {
    pub direction: Direction,
    pub state: SignalState,
    /// Where the signal pole stands
    pub position: Position,
    /// Vehicles from this arm that made it through the intersection
    pub vehicles_passed: u32,
    /// Vehicles on this arm currently standing before the intersection
    pub vehicles_waiting: u32,
}

impl Signal {
    pub fn new(direction: Direction, config: &SimConfig) -> Self {
        Self {
            direction,
            state: SignalState::Red,
            position: Self::pole_position(direction, config),
            vehicles_passed: 0,
            vehicles_waiting: 0,
        }
    }

    /// Poles stand at the road corner on the approaching driver's left
    fn pole_position(direction: Direction, config: &SimConfig) -> Position {
        let center = config.center();
        let half_road = config.road_width / 2.0;
        const POLE_SETBACK: f32 = 20.0;
        match direction {
            Direction::North => Position::new(center.x - half_road - POLE_SETBACK, center.y - half_road),
            Direction::South => Position::new(center.x + half_road + POLE_SETBACK, center.y + half_road),
            Direction::East => Position::new(center.x + half_road, center.y - half_road - POLE_SETBACK),
            Direction::West => Position::new(center.x - half_road, center.y + half_road + POLE_SETBACK),
        }
    }
}
