//! Simulated bodies and the parameters callers build them from.

use std::fmt;

use bevy::log::warn;
use bevy::prelude::Vec2;
use rand::Rng;

use crate::color::Rgb;
use crate::constants::*;
use crate::error::{validate_elasticity, validate_mass, validate_radius, SimResult};
use crate::integrator::Bounds;
use crate::trail::Trail;

/// Stable handle for a body.
///
/// Ids are handed out by [`crate::simulation::Simulation::add_body`], survive
/// edits, snapshots and resets, and are never reused within one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One circular particle.
///
/// Positions are canvas pixels with the origin at the top-left corner and `y`
/// growing downward; velocities are pixels per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Restitution for wall bounces; averaged with the partner's in collisions.
    pub elasticity: f32,
    pub mass: f32,
    pub color: Rgb,
    pub trail: Trail,
}

impl Body {
    /// Build a body from caller parameters, clamping out-of-range physics.
    pub fn from_params(id: BodyId, params: &BodyParams) -> Self {
        let params = params.clamped();
        Self {
            id,
            position: params.position,
            velocity: params.velocity,
            radius: params.radius,
            elasticity: params.elasticity,
            mass: params.mass,
            color: params.color,
            trail: Trail::new(),
        }
    }

    /// Value copy of every physical field with an empty trail.
    ///
    /// This is what the snapshot store keeps, and what it hands back.
    pub fn detached(&self) -> Self {
        Self {
            trail: Trail::new(),
            ..self.clone()
        }
    }

    /// Overwrite the physical fields from `params`, keeping id and trail.
    pub fn apply(&mut self, params: &BodyParams) {
        let params = params.clamped();
        self.position = params.position;
        self.velocity = params.velocity;
        self.radius = params.radius;
        self.elasticity = params.elasticity;
        self.mass = params.mass;
        self.color = params.color;
    }

    /// The parameters that would rebuild this body.
    pub fn params(&self) -> BodyParams {
        BodyParams {
            position: self.position,
            velocity: self.velocity,
            radius: self.radius,
            elasticity: self.elasticity,
            mass: self.mass,
            color: self.color,
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

/// Caller-supplied description of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyParams {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub elasticity: f32,
    pub mass: f32,
    pub color: Rgb,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::new(2.0, 2.0),
            radius: DEFAULT_RADIUS,
            elasticity: DEFAULT_ELASTICITY,
            mass: DEFAULT_MASS,
            color: Rgb::default(),
        }
    }
}

impl BodyParams {
    /// Default parameters placed at `position` with `velocity`.
    pub fn at(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            ..Default::default()
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Random parameters inside the documented spawn ranges.
    ///
    /// The body is placed fully inside `bounds` when they are large enough to
    /// hold it.
    pub fn random(rng: &mut impl Rng, bounds: Bounds) -> Self {
        let radius = rng.gen_range(RANDOM_RADIUS_MIN..=RANDOM_RADIUS_MAX);
        let x = spawn_coord(rng, bounds.width, radius);
        let y = spawn_coord(rng, bounds.height, radius);
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(
                rng.gen_range(-RANDOM_SPEED_MAX..=RANDOM_SPEED_MAX),
                rng.gen_range(-RANDOM_SPEED_MAX..=RANDOM_SPEED_MAX),
            ),
            radius,
            elasticity: rng.gen_range(RANDOM_ELASTICITY_MIN..=RANDOM_ELASTICITY_MAX),
            mass: rng.gen_range(RANDOM_MASS_MIN..=RANDOM_MASS_MAX),
            color: Rgb::random(rng),
        }
    }

    /// Check every physical field, reporting the first out-of-range one.
    pub fn validate(&self) -> SimResult<()> {
        validate_radius(self.radius)?;
        validate_elasticity(self.elasticity)?;
        validate_mass(self.mass)?;
        Ok(())
    }

    /// Copy with radius, mass and elasticity forced into their usable ranges.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        if out.radius.is_nan() || out.radius < MIN_RADIUS {
            out.radius = MIN_RADIUS;
        }
        if out.mass.is_nan() || out.mass < MIN_MASS {
            out.mass = MIN_MASS;
        }
        out.elasticity = if out.elasticity.is_nan() {
            DEFAULT_ELASTICITY
        } else {
            out.elasticity.clamp(0.0, 1.0)
        };
        if out != *self {
            warn!(
                "clamped body params: radius {} -> {}, mass {} -> {}, elasticity {} -> {}",
                self.radius, out.radius, self.mass, out.mass, self.elasticity, out.elasticity
            );
        }
        out
    }
}

/// Center coordinate along one axis that keeps the whole circle inside `extent`.
fn spawn_coord(rng: &mut impl Rng, extent: f32, radius: f32) -> f32 {
    if extent > 2.0 * radius {
        rng.gen_range(radius..=extent - radius)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn defaults_match_canvas_controls() {
        let p = BodyParams::default();
        assert_eq!(p.radius, 20.0);
        assert_eq!(p.elasticity, 0.8);
        assert_eq!(p.mass, 1.0);
    }

    #[test]
    fn out_of_range_params_are_clamped_not_rejected() {
        let p = BodyParams::default()
            .with_radius(-5.0)
            .with_mass(0.0)
            .with_elasticity(1.7);
        assert!(p.validate().is_err());

        let body = Body::from_params(BodyId(1), &p);
        assert_eq!(body.radius, MIN_RADIUS);
        assert_eq!(body.mass, MIN_MASS);
        assert_eq!(body.elasticity, 1.0);
    }

    #[test]
    fn zero_elasticity_is_allowed() {
        let p = BodyParams::default().with_elasticity(0.0);
        assert!(p.validate().is_ok());
        assert_eq!(p.clamped().elasticity, 0.0);
    }

    #[test]
    fn detached_copy_drops_trail_only() {
        let mut body = Body::from_params(BodyId(3), &BodyParams::default());
        body.trail
            .record(body.position, &crate::trail::TrailSettings::default());
        let copy = body.detached();
        assert!(copy.trail.is_empty());
        assert_eq!(copy.params(), body.params());
        assert_eq!(copy.id, body.id);
    }

    #[test]
    fn random_params_fall_inside_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Bounds::new(400.0, 300.0);
        for _ in 0..500 {
            let p = BodyParams::random(&mut rng, bounds);
            assert!((RANDOM_RADIUS_MIN..=RANDOM_RADIUS_MAX).contains(&p.radius));
            assert!((RANDOM_ELASTICITY_MIN..=RANDOM_ELASTICITY_MAX).contains(&p.elasticity));
            assert!((RANDOM_MASS_MIN..=RANDOM_MASS_MAX).contains(&p.mass));
            assert!(p.position.x >= p.radius && p.position.x <= bounds.width - p.radius);
            assert!(p.position.y >= p.radius && p.position.y <= bounds.height - p.radius);
        }
    }
}
