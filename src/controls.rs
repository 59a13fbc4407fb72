//! Keyboard and mouse bindings.
//!
//! This is the whole "UI layer": each binding maps to exactly one call on
//! [`Simulation`]. All mutation happens here, in the same schedule as the tick
//! pacing, so input can never land in the middle of a tick.

use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

use crate::body::BodyParams;
use crate::clock::ClockState;
use crate::graphics::world_to_canvas;
use crate::simulation::Simulation;

/// Bodies created by the randomize key.
pub const RANDOMIZE_COUNT: usize = 12;

/// Radius change per scroll-wheel notch.
pub const RESIZE_STEP: f32 = 2.0;

/// Space starts an idle pit and otherwise toggles pause.
pub fn keyboard_control_system(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Simulation>) {
    if keys.just_pressed(KeyCode::Space) {
        match sim.state() {
            ClockState::Idle => sim.start(),
            ClockState::Running | ClockState::Paused => sim.toggle_pause(),
        }
    }
    if keys.just_pressed(KeyCode::KeyR) {
        sim.reset();
    }
    if keys.just_pressed(KeyCode::KeyN) {
        let id = sim.spawn_random();
        debug!("spawned random body {}", id);
    }
    if keys.just_pressed(KeyCode::KeyG) {
        sim.randomize(RANDOMIZE_COUNT);
    }
    if keys.just_pressed(KeyCode::KeyS) {
        sim.shake();
    }
    if keys.just_pressed(KeyCode::KeyC) {
        sim.clear();
    }
    if keys.just_pressed(KeyCode::Backspace) {
        if let Some(id) = sim.bodies().last().map(|b| b.id) {
            if let Err(e) = sim.remove_body(id) {
                warn!("could not remove last body: {e}");
            }
        }
    }
}

/// Left click adds a default body at rest, right click removes the body under
/// the cursor, the wheel grows or shrinks it.
pub fn mouse_control_system(
    buttons: Res<ButtonInput<MouseButton>>,
    scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut sim: ResMut<Simulation>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    let point = world_to_canvas(world, sim.config().bounds);

    if buttons.just_pressed(MouseButton::Left) {
        sim.add_body(BodyParams::at(point, Vec2::ZERO));
    }

    if buttons.just_pressed(MouseButton::Right) {
        if let Some(id) = sim.body_at(point) {
            if let Err(e) = sim.remove_body(id) {
                warn!("could not remove body {id}: {e}");
            }
        }
    }

    if scroll.delta.y != 0.0 {
        let Some(id) = sim.body_at(point) else {
            return;
        };
        let Some(body) = sim.body(id) else {
            return;
        };
        let params = body
            .params()
            .with_radius(body.radius + scroll.delta.y.signum() * RESIZE_STEP);
        if let Err(e) = params.validate() {
            debug!("ignored resize of {id}: {e}");
            return;
        }
        if let Err(e) = sim.update_body(id, params) {
            warn!("could not resize body {id}: {e}");
        }
    }
}
