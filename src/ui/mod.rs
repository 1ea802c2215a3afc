//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `World` after each fixed tick and draws it with 2D gizmos.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use input::{handle_input, handle_spawn_keys};
use sync::{
    draw_roads, draw_signals, draw_vehicles, tick_simulation, update_stats_text, GRASS,
};
use world::setup_world;

/// Plugin to register all UI systems
///
/// Expects a [`SimWorldResource`] to be inserted by the caller. The
/// simulation advances in `FixedUpdate`, so set `Time<Fixed>` to the
/// world's tick rate.
pub struct IntersectionUiPlugin;

impl Plugin for IntersectionUiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(GRASS))
            .add_systems(Startup, setup_world)
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_spawn_keys,
                    (draw_roads, draw_signals, draw_vehicles).chain(),
                    update_stats_text,
                ),
            );
    }
}
