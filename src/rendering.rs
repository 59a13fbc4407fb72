//! HUD: live stats and the key legend.

use bevy::prelude::*;

use crate::constants::STATS_FONT_SIZE;
use crate::simulation::Simulation;

/// Marker for the stats text node.
#[derive(Component)]
pub struct StatsTextDisplay;

const HELP_TEXT: &str = "Space start/pause · R reset · click add · right-click remove · \
                         wheel resize · N random · G randomize · S shake · C clear";

/// Spawn the stats line and key legend in the top-left corner.
pub fn setup_stats_text(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: STATS_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 1.0, 1.0)),
                StatsTextDisplay,
            ));
            parent.spawn((
                Text::new(HELP_TEXT),
                TextFont {
                    font_size: STATS_FONT_SIZE * 0.75,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            ));
        });
}

/// The stats line for the current simulation state.
pub fn stats_line(sim: &Simulation) -> String {
    format!(
        "{} | tick {} | bodies {} | KE {:.1}",
        sim.state(),
        sim.tick_count(),
        sim.bodies().len(),
        sim.kinetic_energy()
    )
}

/// Refresh the stats text content each frame.
pub fn stats_display_system(
    sim: Res<Simulation>,
    mut text_query: Query<&mut Text, With<StatsTextDisplay>>,
) {
    for mut text in text_query.iter_mut() {
        *text = Text::new(stats_line(&sim));
    }
}
