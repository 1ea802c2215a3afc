//! World setup systems for camera and the stats panel

use bevy::prelude::*;

use super::components::{MainCamera, StatsText};

/// System to setup the camera and the text panel
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(12.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("TRAFFIC CONTROL"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            for (line, color) in [
                (StatsText::Phase, Color::srgb(0.0, 1.0, 0.0)),
                (StatsText::Arms, Color::srgb(0.9, 0.9, 0.9)),
                (StatsText::Totals, Color::srgb(0.8, 0.8, 0.8)),
            ] {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(color),
                    line,
                ));
            }
            parent.spawn((
                Text::new("SPACE - Random | N/S/E/W - Direction"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}
