//! Systems that advance the simulation and draw its state

use bevy::math::Isometry2d;
use bevy::prelude::*;

use super::components::{to_color, to_screen, SimWorldResource, StatsText};
use crate::simulation::{ArmStats, Direction, Position, SignalState, VehicleKind};

pub(super) const GRASS: Color = Color::srgb(0.13, 0.55, 0.13);
const ROAD_EDGE: Color = Color::srgb(0.4, 0.4, 0.4);
const MARKING: Color = Color::WHITE;
const BRAKE_LIGHT: Color = Color::srgb(1.0, 0.0, 0.0);

/// System to run one simulation tick, scheduled in `FixedUpdate`
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.update();
}

/// Draw roads, lane markings and stop lines
pub fn draw_roads(sim_world: Res<SimWorldResource>, mut gizmos: Gizmos) {
    let world = &sim_world.0;
    let config = world.config();
    let center = config.center();
    let half_road = config.road_width / 2.0;

    // Road edges
    for offset in [-half_road, half_road] {
        let x = center.x + offset;
        gizmos.line_2d(
            to_screen(world, Position::new(x, 0.0)),
            to_screen(world, Position::new(x, config.height)),
            ROAD_EDGE,
        );
        let y = center.y + offset;
        gizmos.line_2d(
            to_screen(world, Position::new(0.0, y)),
            to_screen(world, Position::new(config.width, y)),
            ROAD_EDGE,
        );
    }

    // Dashed centre lines
    let mut y = 0.0;
    while y < config.height {
        gizmos.line_2d(
            to_screen(world, Position::new(center.x, y)),
            to_screen(world, Position::new(center.x, y + 20.0)),
            MARKING,
        );
        y += 40.0;
    }
    let mut x = 0.0;
    while x < config.width {
        gizmos.line_2d(
            to_screen(world, Position::new(x, center.y)),
            to_screen(world, Position::new(x + 20.0, center.y)),
            MARKING,
        );
        x += 40.0;
    }

    // Stop lines across the approaching half of each arm
    for direction in Direction::ALL {
        let along = center.along(direction) - direction.travel_sign() * config.stop_line_offset;
        let side = (config.lane_coordinate(direction, 0) - center.across(direction)).signum();
        let near = center.across(direction);
        let far = near + side * half_road;
        let (start, end) = if direction.is_vertical() {
            (Position::new(near, along), Position::new(far, along))
        } else {
            (Position::new(along, near), Position::new(along, far))
        };
        gizmos.line_2d(to_screen(world, start), to_screen(world, end), MARKING);
    }
}

/// Draw each arm's signal head
pub fn draw_signals(sim_world: Res<SimWorldResource>, mut gizmos: Gizmos) {
    let world = &sim_world.0;

    for signal in world.signals() {
        let pole = to_screen(world, signal.position);
        gizmos.rect_2d(
            Isometry2d::from_translation(pole + Vec2::new(0.0, 22.0)),
            Vec2::new(24.0, 65.0),
            Color::srgb(0.16, 0.16, 0.16),
        );
        let lamps = [
            (SignalState::Red, Color::srgb(1.0, 0.0, 0.0), Color::srgb(0.3, 0.0, 0.0)),
            (SignalState::Yellow, Color::srgb(1.0, 1.0, 0.0), Color::srgb(0.3, 0.3, 0.0)),
            (SignalState::Green, Color::srgb(0.0, 1.0, 0.0), Color::srgb(0.0, 0.3, 0.0)),
        ];
        for (i, (state, lit, dim)) in lamps.into_iter().enumerate() {
            let color = if signal.state == state { lit } else { dim };
            gizmos.circle_2d(
                Isometry2d::from_translation(pole + Vec2::new(0.0, 40.0 - i as f32 * 18.0)),
                7.0,
                color,
            );
        }
    }
}

/// Draw vehicles, brake lights and the ambulance beacon
pub fn draw_vehicles(sim_world: Res<SimWorldResource>, time: Res<Time>, mut gizmos: Gizmos) {
    let world = &sim_world.0;
    let config = world.config();
    let beacon_on = (time.elapsed_secs() / 0.3) as u32 % 2 == 0;

    for vehicle in world.vehicles() {
        let center = to_screen(world, vehicle.position);
        let (width, height) = vehicle.drawn_size();
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            Vec2::new(width, height),
            to_color(vehicle.color),
        );

        if vehicle.kind == VehicleKind::Ambulance {
            let beacon = if beacon_on { BRAKE_LIGHT } else { Color::WHITE };
            gizmos.circle_2d(Isometry2d::from_translation(center), 5.0, beacon);
        }

        if vehicle.is_stopped(config) {
            // Rear edge sits opposite the travel direction
            let mut rear = vehicle.position;
            rear.advance(vehicle.direction, -(vehicle.length / 2.0 - 2.0));
            let half_across = vehicle.width / 2.0 - 2.0;
            let (a, b) = if vehicle.direction.is_vertical() {
                (
                    Position::new(rear.x - half_across, rear.y),
                    Position::new(rear.x + half_across, rear.y),
                )
            } else {
                (
                    Position::new(rear.x, rear.y - half_across),
                    Position::new(rear.x, rear.y + half_across),
                )
            };
            gizmos.line_2d(to_screen(world, a), to_screen(world, b), BRAKE_LIGHT);
        }
    }
}

/// System to refresh the stats panel
pub fn update_stats_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&StatsText, &mut Text)>,
) {
    let stats = sim_world.0.stats();

    for (line, mut text) in text_query.iter_mut() {
        match line {
            StatsText::Phase => {
                **text = format!(
                    "Green: {} ({:?})\nTimer: {}s",
                    stats.active_direction, stats.phase, stats.remaining_secs
                );
            }
            StatsText::Arms => {
                **text = stats
                    .arms
                    .iter()
                    .map(arm_line)
                    .collect::<Vec<_>>()
                    .join("\n");
            }
            StatsText::Totals => {
                **text = format!(
                    "Spawned: {}\nPassed: {}\nCurrent: {}",
                    stats.total_spawned, stats.total_passed, stats.active_vehicles
                );
            }
        }
    }
}

/// Green arms show how many went through, the others how many wait
fn arm_line(arm: &ArmStats) -> String {
    let counter = if arm.state == SignalState::Green {
        format!("P:{}", arm.vehicles_passed)
    } else {
        format!("W:{}", arm.vehicles_waiting)
    };
    format!(
        "{:<6} {:<6} Q:{:<3} {}",
        arm.direction.to_string(),
        arm.state.to_string(),
        arm.queue_len,
        counter
    )
}
