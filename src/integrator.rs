//! Per-body kinematics: gravity, explicit Euler step, wall reflection, trail.

use bevy::prelude::Vec2;
use serde::Deserialize;

use crate::body::Body;
use crate::constants::{BOUNDS_HEIGHT, BOUNDS_WIDTH};
use crate::trail::TrailSettings;

/// Canvas extent in pixels. Walls sit at `0`, `width` and `0`, `height`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: BOUNDS_WIDTH,
            height: BOUNDS_HEIGHT,
        }
    }
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a circle of `radius` at `position` lies fully inside.
    pub fn contains(&self, position: Vec2, radius: f32) -> bool {
        position.x >= radius
            && position.x <= self.width - radius
            && position.y >= radius
            && position.y <= self.height - radius
    }
}

/// Advance `body` by one tick.
///
/// Gravity is an acceleration, so it is added to `vy` without mass scaling.
/// The four wall checks are independent and always all run, floor, ceiling,
/// right, left in that order; a body in a corner can bounce off two walls in
/// the same tick.
pub fn advance(body: &mut Body, gravity: f32, bounds: Bounds, trail: &TrailSettings) {
    body.velocity.y += gravity;
    body.position += body.velocity;

    let r = body.radius;
    let e = body.elasticity;

    // Floor
    if body.position.y + r > bounds.height {
        body.position.y = bounds.height - r;
        body.velocity.y *= -e;
    }
    // Ceiling
    if body.position.y - r < 0.0 {
        body.position.y = r;
        body.velocity.y *= -e;
    }
    // Right wall
    if body.position.x + r > bounds.width {
        body.position.x = bounds.width - r;
        body.velocity.x *= -e;
    }
    // Left wall
    if body.position.x - r < 0.0 {
        body.position.x = r;
        body.velocity.x *= -e;
    }

    body.trail.record(body.position, trail);
}

/// Clamp `body` back inside `bounds` without touching its velocity.
///
/// Collision separation runs after the wall checks and can nudge a body past
/// a wall; this puts it back on the wall for the frame. A body wider than the
/// canvas ends up pinned to the right/bottom wall.
pub fn confine(body: &mut Body, bounds: Bounds) {
    let r = body.radius;
    body.position.x = body.position.x.max(r).min(bounds.width - r);
    body.position.y = body.position.y.max(r).min(bounds.height - r);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, BodyParams};

    fn body(position: Vec2, velocity: Vec2) -> Body {
        Body::from_params(BodyId(0), &BodyParams::at(position, velocity))
    }

    #[test]
    fn first_tick_matches_hand_computed_values() {
        let mut b = body(Vec2::new(100.0, 100.0), Vec2::new(2.0, 2.0));
        advance(&mut b, 0.25, Bounds::new(400.0, 400.0), &TrailSettings::default());
        assert_eq!(b.position, Vec2::new(102.0, 102.25));
        assert_eq!(b.velocity, Vec2::new(2.0, 2.25));
        assert_eq!(b.trail.len(), 1);
        assert_eq!(b.trail.newest().unwrap().position, b.position);
    }

    #[test]
    fn floor_bounce_clamps_to_edge_and_damps() {
        let mut b = body(Vec2::new(200.0, 375.0), Vec2::new(0.0, 10.0));
        advance(&mut b, 0.0, Bounds::new(400.0, 400.0), &TrailSettings::default());
        assert_eq!(b.position.y, 380.0);
        assert!((b.velocity.y - -8.0).abs() < 1e-5);
    }

    #[test]
    fn corner_hit_reflects_both_axes_in_one_tick() {
        let mut b = body(Vec2::new(25.0, 25.0), Vec2::new(-10.0, -10.0));
        b.elasticity = 0.5;
        advance(&mut b, 0.0, Bounds::new(400.0, 400.0), &TrailSettings::default());
        assert_eq!(b.position, Vec2::new(20.0, 20.0));
        assert_eq!(b.velocity, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn body_taller_than_canvas_hits_floor_then_ceiling() {
        // Both vertical checks fire: the ceiling clamp wins and vy flips twice.
        let mut b = body(Vec2::new(50.0, 15.0), Vec2::new(0.0, 1.0));
        b.radius = 20.0;
        b.elasticity = 1.0;
        advance(&mut b, 0.0, Bounds::new(100.0, 30.0), &TrailSettings::default());
        assert_eq!(b.position.y, 20.0);
        assert_eq!(b.velocity.y, 1.0);
    }

    #[test]
    fn confine_leaves_velocity_alone() {
        let mut b = body(Vec2::new(-3.0, 410.0), Vec2::new(-1.0, 4.0));
        confine(&mut b, Bounds::new(400.0, 400.0));
        assert_eq!(b.position, Vec2::new(20.0, 380.0));
        assert_eq!(b.velocity, Vec2::new(-1.0, 4.0));
    }
}
