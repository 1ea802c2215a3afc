//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{Position, Rgb, World};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub World);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Text lines of the stats panel
#[derive(Component, Clone, Copy, PartialEq, Eq)]
pub enum StatsText {
    Phase,
    Arms,
    Totals,
}

/// Convert a simulation position (origin top-left, y down) to world space
pub fn to_screen(world: &World, position: Position) -> Vec2 {
    let config = world.config();
    Vec2::new(
        position.x - config.width / 2.0,
        config.height / 2.0 - position.y,
    )
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.0, rgb.1, rgb.2)
}
