//! Ballpit: a 2-D bouncing-body sandbox.
//!
//! Circular bodies fall under gravity, bounce off the canvas walls, collide
//! with each other through mass- and elasticity-aware impulses, and leave
//! fading trails. The physics core is plain data and arithmetic driven
//! through [`simulation::Simulation`]; `controls`, `graphics`, `plugin` and
//! `rendering` host it in a Bevy window.

pub mod body;
pub mod clock;
pub mod collision;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod snapshot;
pub mod trail;

pub mod controls;
pub mod graphics;
pub mod plugin;
pub mod rendering;

pub use body::{Body, BodyId, BodyParams};
pub use clock::ClockState;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use integrator::Bounds;
pub use simulation::{PerturbTarget, Simulation};
