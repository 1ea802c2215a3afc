//! Four-phase signal timing for the intersection
//!
//! One arm at a time is eligible for a non-red light. Its phase runs
//! GREEN -> YELLOW, then the next arm in [`Direction::CYCLE`] turns GREEN.
//! Time is counted in whole simulated seconds, which are accumulated from
//! fixed-rate ticks so the timing never depends on how often frames are drawn.

use log::debug;

use super::config::SimConfig;
use super::signal::{Signal, SignalState};
use super::types::Direction;

/// Sub-state of the active arm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Green,
    Yellow,
}

impl Phase {
    pub fn signal_state(self) -> SignalState {
        match self {
            Phase::Green => SignalState::Green,
            Phase::Yellow => SignalState::Yellow,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignalController {
    cycle_index: usize,
    phase: Phase,
    /// Whole seconds spent in the current phase
    elapsed_secs: u32,
    /// Ticks accumulated towards the next second
    tick_accumulator: u32,
    ticks_per_second: u32,
    green_secs: u32,
    yellow_secs: u32,
}

impl SignalController {
    /// Start with the first arm of the cycle on green
    pub fn new(config: &SimConfig) -> Self {
        Self {
            cycle_index: 0,
            phase: Phase::Green,
            elapsed_secs: 0,
            tick_accumulator: 0,
            ticks_per_second: config.tick_rate.max(1),
            green_secs: config.green_secs,
            yellow_secs: config.yellow_secs,
        }
    }

    pub fn active_direction(&self) -> Direction {
        Direction::CYCLE[self.cycle_index]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    fn phase_duration(&self) -> u32 {
        match self.phase {
            Phase::Green => self.green_secs,
            Phase::Yellow => self.yellow_secs,
        }
    }

    /// Seconds left before the current phase ends
    pub fn remaining_secs(&self) -> u32 {
        self.phase_duration().saturating_sub(self.elapsed_secs)
    }

    /// The light a given arm should show right now
    pub fn state_for(&self, direction: Direction) -> SignalState {
        if direction == self.active_direction() {
            self.phase.signal_state()
        } else {
            SignalState::Red
        }
    }

    /// Advance by one tick. Returns true when the phase changed.
    pub fn tick(&mut self) -> bool {
        self.tick_accumulator += 1;
        if self.tick_accumulator < self.ticks_per_second {
            return false;
        }
        self.tick_accumulator = 0;
        self.elapsed_secs += 1;

        match self.phase {
            Phase::Green if self.elapsed_secs >= self.green_secs => {
                self.phase = Phase::Yellow;
                self.elapsed_secs = 0;
            }
            Phase::Yellow if self.elapsed_secs >= self.yellow_secs => {
                self.phase = Phase::Green;
                self.elapsed_secs = 0;
                self.cycle_index = (self.cycle_index + 1) % Direction::CYCLE.len();
            }
            _ => return false,
        }

        debug!(
            "Signal phase changed: {} is now {}",
            self.active_direction(),
            self.phase.signal_state()
        );
        true
    }

    /// Recompute every arm's light from the current phase
    pub fn apply(&self, signals: &mut [Signal]) {
        for signal in signals.iter_mut() {
            signal.state = self.state_for(signal.direction);
        }
    }
}
