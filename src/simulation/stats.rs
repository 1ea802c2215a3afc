//! Read-only snapshots of the simulation counters

use super::controller::Phase;
use super::signal::SignalState;
use super::types::Direction;

/// Counters for one arm of the intersection
#[derive(Debug, Clone, PartialEq)]
pub struct ArmStats {
    pub direction: Direction,
    pub state: SignalState,
    pub vehicles_passed: u32,
    pub vehicles_waiting: u32,
    /// Vehicles on both lanes of the arm
    pub queue_len: usize,
}

/// Simulation statistics taken between ticks
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationStats {
    pub total_spawned: u64,
    pub total_passed: u64,
    pub active_vehicles: usize,
    pub elapsed_secs: f32,
    pub active_direction: Direction,
    pub phase: Phase,
    /// Seconds left in the current phase
    pub remaining_secs: u32,
    /// In signal cycle order
    pub arms: Vec<ArmStats>,
}

impl SimulationStats {
    pub fn arm(&self, direction: Direction) -> Option<&ArmStats> {
        self.arms.iter().find(|arm| arm.direction == direction)
    }

    /// Share of spawned vehicles that made it through, in percent
    pub fn throughput_percent(&self) -> f32 {
        if self.total_spawned == 0 {
            0.0
        } else {
            self.total_passed as f32 / self.total_spawned as f32 * 100.0
        }
    }
}
