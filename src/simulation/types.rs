//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;

/// A unique identifier for a vehicle
/// Ids are handed out sequentially and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(pub u64);

/// Number of lanes on each arm of the intersection
pub const LANES_PER_ARM: usize = 2;

/// Direction of travel of a vehicle (and the arm it approaches on)
///
/// `North` means the vehicle drives towards the top of the screen, so it
/// enters the world at the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Order in which arms receive the green phase
    pub const CYCLE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Stable index for per-direction arrays
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// The arm that follows this one in the signal cycle
    pub fn next_in_cycle(self) -> Direction {
        let pos = Self::CYCLE
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default();
        Self::CYCLE[(pos + 1) % Self::CYCLE.len()]
    }

    /// True when travel happens along the screen's y axis
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Sign of the coordinate change while moving forward
    pub fn travel_sign(self) -> f32 {
        match self {
            Direction::North | Direction::West => -1.0,
            Direction::South | Direction::East => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
        };
        f.write_str(name)
    }
}

/// An RGB colour used by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Type of vehicle in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// Three-wheeled auto rickshaw
    Auto,
    Car,
    Bike,
    Bus,
    Truck,
    /// Emergency vehicle, never stops for signals
    Ambulance,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Auto,
        VehicleKind::Car,
        VehicleKind::Bike,
        VehicleKind::Bus,
        VehicleKind::Truck,
        VehicleKind::Ambulance,
    ];

    /// Stable index into the attribute table
    pub fn index(self) -> usize {
        match self {
            VehicleKind::Auto => 0,
            VehicleKind::Car => 1,
            VehicleKind::Bike => 2,
            VehicleKind::Bus => 3,
            VehicleKind::Truck => 4,
            VehicleKind::Ambulance => 5,
        }
    }

    /// Single-letter label used by the terminal map
    pub fn letter(self) -> char {
        match self {
            VehicleKind::Auto => 'a',
            VehicleKind::Car => 'c',
            VehicleKind::Bike => 'b',
            VehicleKind::Bus => 'B',
            VehicleKind::Truck => 'T',
            VehicleKind::Ambulance => '+',
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleKind::Auto => "AUTO",
            VehicleKind::Car => "CAR",
            VehicleKind::Bike => "BIKE",
            VehicleKind::Bus => "BUS",
            VehicleKind::Truck => "TRUCK",
            VehicleKind::Ambulance => "AMBULANCE",
        };
        f.write_str(name)
    }
}

/// Fixed attributes of a vehicle kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSpec {
    /// Size across the lane
    pub width: f32,
    /// Size along the lane
    pub length: f32,
    pub color: Rgb,
    pub max_speed: f32,
    /// Speed gained per tick when the road is clear
    pub accel: f32,
    /// Speed lost per tick when braking
    pub decel: f32,
    /// Relative weight in the random kind draw
    pub spawn_weight: u32,
    /// Emergency vehicles drive through red and yellow
    pub ignores_signals: bool,
}

/// Colours a CAR picks from when it spawns
pub const CAR_PALETTE: [Rgb; 3] = [Rgb(200, 0, 0), Rgb(0, 100, 200), Rgb(100, 100, 100)];

/// Default attribute table, indexed by [`VehicleKind::index`]
pub const DEFAULT_VEHICLE_SPECS: [VehicleSpec; 6] = [
    VehicleSpec {
        width: 25.0,
        length: 40.0,
        color: Rgb(255, 200, 0),
        max_speed: 2.5,
        accel: 0.08,
        decel: 0.25,
        spawn_weight: 30,
        ignores_signals: false,
    },
    VehicleSpec {
        width: 30.0,
        length: 50.0,
        color: CAR_PALETTE[0],
        max_speed: 3.0,
        accel: 0.1,
        decel: 0.3,
        spawn_weight: 35,
        ignores_signals: false,
    },
    VehicleSpec {
        width: 20.0,
        length: 35.0,
        color: Rgb(50, 50, 50),
        max_speed: 3.5,
        accel: 0.12,
        decel: 0.35,
        spawn_weight: 25,
        ignores_signals: false,
    },
    VehicleSpec {
        width: 35.0,
        length: 70.0,
        color: Rgb(200, 50, 50),
        max_speed: 2.8,
        accel: 0.05,
        decel: 0.2,
        spawn_weight: 5,
        ignores_signals: false,
    },
    VehicleSpec {
        width: 35.0,
        length: 65.0,
        color: Rgb(80, 60, 40),
        max_speed: 2.0,
        accel: 0.04,
        decel: 0.15,
        spawn_weight: 3,
        ignores_signals: false,
    },
    VehicleSpec {
        width: 30.0,
        length: 50.0,
        color: Rgb(255, 255, 255),
        max_speed: 4.5,
        accel: 0.15,
        decel: 0.4,
        spawn_weight: 2,
        ignores_signals: true,
    },
];

/// A 2D position in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the travel axis of `direction`
    pub fn along(&self, direction: Direction) -> f32 {
        if direction.is_vertical() {
            self.y
        } else {
            self.x
        }
    }

    /// Coordinate across the travel axis of `direction`
    pub fn across(&self, direction: Direction) -> f32 {
        if direction.is_vertical() {
            self.x
        } else {
            self.y
        }
    }

    /// Move `distance` forward in `direction`
    pub fn advance(&mut self, direction: Direction, distance: f32) {
        let delta = direction.travel_sign() * distance;
        if direction.is_vertical() {
            self.y += delta;
        } else {
            self.x += delta;
        }
    }
}
