//! Drawing the pit: camera, body meshes and trail gizmos.
//!
//! The core works in canvas pixels (origin top-left, `y` down). Bevy's 2-D
//! camera looks at a world with the origin in the middle and `y` up, so every
//! position crosses [`canvas_to_world`] on the way to the screen and
//! [`world_to_canvas`] on the way back from the mouse.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::body::BodyId;
use crate::constants::TRAIL_DOT_SCALE;
use crate::integrator::Bounds;
use crate::simulation::Simulation;

/// Shared unit-circle mesh; each body scales it to its radius.
#[derive(Resource)]
pub struct BodyMesh(pub Handle<Mesh>);

/// Links a rendered circle to the body it draws.
#[derive(Component)]
pub struct BodySprite {
    pub id: BodyId,
    /// This sprite's own material, so its color can follow collision blends.
    pub material: Handle<ColorMaterial>,
}

pub fn canvas_to_world(position: Vec2, bounds: Bounds) -> Vec2 {
    Vec2::new(
        position.x - bounds.width / 2.0,
        bounds.height / 2.0 - position.y,
    )
}

pub fn world_to_canvas(position: Vec2, bounds: Bounds) -> Vec2 {
    Vec2::new(
        position.x + bounds.width / 2.0,
        bounds.height / 2.0 - position.y,
    )
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    debug!("camera spawned");
}

/// Create the shared circle mesh.
pub fn init_body_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(Circle::new(1.0));
    commands.insert_resource(BodyMesh(handle));
}

/// Keep one sprite per live body: move, resize and recolor existing sprites,
/// despawn those whose body is gone, and spawn sprites for new bodies.
pub fn sync_body_sprites_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    body_mesh: Res<BodyMesh>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut sprites: Query<(Entity, &BodySprite, &mut Transform)>,
) {
    let bounds = sim.config().bounds;
    let mut drawn = HashSet::new();

    for (entity, sprite, mut transform) in sprites.iter_mut() {
        let Some(body) = sim.body(sprite.id) else {
            commands.entity(entity).despawn();
            continue;
        };
        transform.translation = canvas_to_world(body.position, bounds).extend(1.0);
        transform.scale = Vec3::splat(body.radius);

        let color = body.color.to_color(1.0);
        let stale = materials
            .get(&sprite.material)
            .is_some_and(|m| m.color != color);
        if stale {
            if let Some(material) = materials.get_mut(&sprite.material) {
                material.color = color;
            }
        }
        drawn.insert(sprite.id);
    }

    for body in sim.bodies().iter().filter(|b| !drawn.contains(&b.id)) {
        let material = materials.add(ColorMaterial::from_color(body.color.to_color(1.0)));
        commands.spawn((
            Mesh2d(body_mesh.0.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(canvas_to_world(body.position, bounds).extend(1.0))
                .with_scale(Vec3::splat(body.radius)),
            BodySprite {
                id: body.id,
                material,
            },
        ));
    }
}

/// Draw the canvas border and every trail as fading dots.
///
/// Gizmos are immediate-mode, so this redraws everything each frame.
pub fn trail_gizmo_system(sim: Res<Simulation>, mut gizmos: Gizmos) {
    let bounds = sim.config().bounds;
    gizmos.rect_2d(
        Vec2::ZERO,
        Vec2::new(bounds.width, bounds.height),
        Color::srgba(1.0, 1.0, 1.0, 0.25),
    );

    for body in sim.bodies() {
        let dot = (body.radius * TRAIL_DOT_SCALE).max(1.0);
        for sample in body.trail.iter() {
            gizmos.circle_2d(
                canvas_to_world(sample.position, bounds),
                dot,
                body.color.to_color(sample.alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_corners_map_to_world_corners() {
        let bounds = Bounds::new(400.0, 300.0);
        assert_eq!(canvas_to_world(Vec2::ZERO, bounds), Vec2::new(-200.0, 150.0));
        assert_eq!(
            canvas_to_world(Vec2::new(400.0, 300.0), bounds),
            Vec2::new(200.0, -150.0)
        );
    }

    #[test]
    fn world_to_canvas_inverts_canvas_to_world() {
        let bounds = Bounds::new(640.0, 480.0);
        let p = Vec2::new(123.0, 456.0);
        assert_eq!(world_to_canvas(canvas_to_world(p, bounds), bounds), p);
    }
}
