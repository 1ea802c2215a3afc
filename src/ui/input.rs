//! Input handling systems

use bevy::prelude::*;

use super::components::SimWorldResource;
use crate::simulation::Direction;

/// Handle basic keyboard input
pub fn handle_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

/// Manual spawn triggers: one key per direction, SPACE for a random one
pub fn handle_spawn_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    let bindings = [
        (KeyCode::KeyN, Some(Direction::North)),
        (KeyCode::KeyS, Some(Direction::South)),
        (KeyCode::KeyE, Some(Direction::East)),
        (KeyCode::KeyW, Some(Direction::West)),
        (KeyCode::Space, None),
    ];

    for (key, direction) in bindings {
        if keyboard.just_pressed(key) && sim_world.0.spawn(direction).is_none() {
            bevy::log::debug!("Lane busy, manual spawn dropped");
        }
    }
}
