//! Bevy plugin that hosts a [`Simulation`] resource.

use bevy::prelude::*;

use crate::controls::{keyboard_control_system, mouse_control_system};
use crate::graphics::{init_body_mesh, setup_camera, sync_body_sprites_system, trail_gizmo_system};
use crate::rendering::{setup_stats_text, stats_display_system};
use crate::simulation::Simulation;

/// Wires input, tick pacing and drawing around a `Simulation` resource.
///
/// The resource must be inserted before the app runs.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, init_body_mesh, setup_stats_text))
            .add_systems(
                Update,
                (
                    keyboard_control_system,
                    mouse_control_system,
                    pacing_system, // after input so a pause lands before the next tick
                    sync_body_sprites_system,
                    trail_gizmo_system,
                    stats_display_system,
                )
                    .chain(),
            );
    }
}

/// Feed this frame's elapsed time to the simulation's tick pacer.
pub fn pacing_system(time: Res<Time>, mut sim: ResMut<Simulation>) {
    sim.advance(time.delta());
}
