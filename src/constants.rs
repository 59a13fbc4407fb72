//! Centralised physics and presentation constants.
//!
//! Every tuneable value lives here so it can be found and changed in one
//! place. [`crate::config::SimConfig::default`] is built from these values, so
//! they stay the authoritative defaults even when `assets/ballpit.toml`
//! overrides a subset at runtime.

// ── World Bounds ──────────────────────────────────────────────────────────────

/// Canvas width in pixels.
pub const BOUNDS_WIDTH: f32 = 400.0;

/// Canvas height in pixels.
pub const BOUNDS_HEIGHT: f32 = 400.0;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Downward acceleration added to `vy` every tick (pixels/tick²).
///
/// Not scaled by mass: every body falls at the same rate.
pub const GRAVITY: f32 = 0.25;

/// Logical ticks per second the host paces the simulation at.
pub const TICK_RATE: f32 = 30.0;

/// Accepted tick rates. The lower bound keeps the tick period well inside
/// what a `Duration` can hold.
pub const MIN_TICK_RATE: f32 = 1.0;
pub const MAX_TICK_RATE: f32 = 1000.0;

/// Upper bound on ticks run for a single host frame.
///
/// A long stall (window drag, debugger) would otherwise replay seconds of
/// backlog in one frame. Time beyond the cap is discarded.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

// ── Body Defaults ─────────────────────────────────────────────────────────────

/// Radius used when the caller does not specify one.
pub const DEFAULT_RADIUS: f32 = 20.0;

/// Restitution used when the caller does not specify one.
/// 0.0 = perfectly inelastic; 1.0 = perfectly elastic.
pub const DEFAULT_ELASTICITY: f32 = 0.8;

/// Mass used when the caller does not specify one.
pub const DEFAULT_MASS: f32 = 1.0;

/// Default body color, `#ff5252`.
pub const DEFAULT_COLOR: [u8; 3] = [0xff, 0x52, 0x52];

/// Smallest radius a body is clamped to on entry.
pub const MIN_RADIUS: f32 = 1.0;

/// Smallest mass a body is clamped to on entry.
///
/// Keeps `1 / mass` finite in the impulse denominator.
pub const MIN_MASS: f32 = 0.01;

// ── Randomized Spawn ──────────────────────────────────────────────────────────

pub const RANDOM_RADIUS_MIN: f32 = 10.0;
pub const RANDOM_RADIUS_MAX: f32 = 40.0;
pub const RANDOM_ELASTICITY_MIN: f32 = 0.4;
pub const RANDOM_ELASTICITY_MAX: f32 = 0.99;
pub const RANDOM_MASS_MIN: f32 = 0.3;
pub const RANDOM_MASS_MAX: f32 = 2.5;

/// Each velocity component of a random body is drawn from ±this value.
pub const RANDOM_SPEED_MAX: f32 = 4.0;

/// Default bound on the random velocity kick applied by a shake.
pub const SHAKE_STRENGTH: f32 = 6.0;

/// Largest velocity kick a shake or perturbation may draw, in px per tick.
pub const MAX_KICK_STRENGTH: f32 = 1000.0;

// ── Trails ────────────────────────────────────────────────────────────────────

/// Maximum number of samples kept per body.
pub const TRAIL_LENGTH: usize = 20;

/// Opacity a fresh trail sample starts with.
pub const TRAIL_ALPHA: f32 = 0.5;

/// Per-tick multiplier applied to every trail sample's opacity.
pub const TRAIL_DECAY: f32 = 0.95;

// ── Color Blending ────────────────────────────────────────────────────────────

/// RGB distance below which two colliding bodies blend to the exact midpoint.
pub const COLOR_BLEND_THRESHOLD: f32 = 40.0;

/// Per-channel jitter bound added to the midpoint of dissimilar colors.
pub const COLOR_JITTER: i16 = 30;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Radius of a rendered trail dot, as a fraction of the body radius.
pub const TRAIL_DOT_SCALE: f32 = 0.35;

/// HUD font size.
pub const STATS_FONT_SIZE: f32 = 16.0;
