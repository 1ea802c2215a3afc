//! A single pedestrian-crossing light with an emergency hold
//!
//! The light runs a fixed RED -> YELLOW -> GREEN -> YELLOW loop. While the
//! emergency hold is engaged it stays on RED and pedestrians may cross.

use log::info;

use super::signal::SignalState;

/// Steps of the loop with their durations in milliseconds
pub const CROSSING_STEPS: [(SignalState, u32); 4] = [
    (SignalState::Red, 6000),
    (SignalState::Yellow, 3000),
    (SignalState::Green, 6000),
    (SignalState::Yellow, 3000),
];

#[derive(Debug, Clone)]
pub struct CrossingLight {
    step: usize,
    /// Ticks spent in the current step
    elapsed_ticks: u32,
    tick_rate: u32,
    emergency: bool,
}

impl CrossingLight {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: 0,
            elapsed_ticks: 0,
            tick_rate: tick_rate.max(1),
            emergency: false,
        }
    }

    pub fn colour(&self) -> SignalState {
        CROSSING_STEPS[self.step].0
    }

    pub fn emergency_engaged(&self) -> bool {
        self.emergency
    }

    /// Pedestrians get "Go" exactly while the light is red
    pub fn pedestrians_may_cross(&self) -> bool {
        self.step == 0
    }

    fn elapsed_ms(&self) -> u64 {
        u64::from(self.elapsed_ticks) * 1000 / u64::from(self.tick_rate)
    }

    /// Whole seconds left in the current step, never negative
    pub fn remaining_secs(&self) -> u32 {
        let duration = u64::from(CROSSING_STEPS[self.step].1);
        (duration.saturating_sub(self.elapsed_ms()) / 1000) as u32
    }

    /// Advance by one tick. Returns true when the light changed colour step.
    pub fn tick(&mut self) -> bool {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        if self.emergency {
            return false;
        }
        if self.elapsed_ms() < u64::from(CROSSING_STEPS[self.step].1) {
            return false;
        }
        self.step = (self.step + 1) % CROSSING_STEPS.len();
        self.elapsed_ticks = 0;
        true
    }

    /// Engage or release the emergency hold. Returns the new hold state.
    pub fn toggle_emergency(&mut self) -> bool {
        self.emergency = !self.emergency;
        if self.emergency {
            self.step = 0;
        }
        self.elapsed_ticks = 0;
        info!(
            "Crossing emergency hold {}",
            if self.emergency { "engaged" } else { "released" }
        );
        self.emergency
    }
}
