//! Simulation error types.
//!
//! The physics core itself never fails: integration and collision resolution
//! are plain arithmetic over well-formed state. Errors only arise at the edges
//! (an unknown body id from the caller, an out-of-range parameter, a broken
//! config file), and those paths return [`SimError`] instead of panicking.
//!
//! ## Usage
//!
//! ```rust
//! use ballpit::error::{validate_elasticity, SimResult};
//!
//! fn check(e: f32) -> SimResult<()> {
//!     validate_elasticity(e)?;
//!     Ok(())
//! }
//! # assert!(check(0.8).is_ok());
//! # assert!(check(1.5).is_err());
//! ```

use std::fmt;

use crate::body::BodyId;
use crate::constants::{MAX_KICK_STRENGTH, MAX_TICK_RATE, MIN_TICK_RATE};

/// Top-level error enum for the ballpit simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// An operation referenced a body id that is not in the live list.
    UnknownBody {
        /// The id the caller passed in.
        id: BodyId,
    },

    /// A physical or configuration parameter is outside its accepted range.
    InvalidParameter {
        /// Name of the parameter (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        safe_range: &'static str,
    },

    /// A config file could not be parsed.
    ConfigParse {
        /// Where the text came from (file path or `"<string>"`).
        path: String,
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnknownBody { id } => write!(f, "no live body with id {}", id),
            SimError::InvalidParameter {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "parameter '{}' = {} is outside accepted range {}",
                name, value, safe_range
            ),
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse config '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

fn invalid(name: &'static str, value: f32, safe_range: &'static str) -> SimError {
    SimError::InvalidParameter {
        name,
        value,
        safe_range,
    }
}

/// Returns an error unless `value` is a restitution coefficient in `[0, 1]`.
pub fn validate_elasticity(value: f32) -> SimResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid("elasticity", value, "[0.0, 1.0]"))
    }
}

/// Returns an error unless `value` is a strictly positive, finite mass.
pub fn validate_mass(value: f32) -> SimResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid("mass", value, "(0.0, ∞)"))
    }
}

/// Returns an error unless `value` is a strictly positive, finite radius.
pub fn validate_radius(value: f32) -> SimResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid("radius", value, "(0.0, ∞)"))
    }
}

/// Returns an error unless the trail decay multiplier is in `(0, 1)`.
///
/// A decay of 1 or more would keep old samples at full opacity forever.
pub fn validate_trail_decay(value: f32) -> SimResult<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(invalid("trail_decay", value, "(0.0, 1.0)"))
    }
}

/// Returns an error unless the tick rate is in `[MIN_TICK_RATE, MAX_TICK_RATE]`.
pub fn validate_tick_rate(value: f32) -> SimResult<()> {
    if (MIN_TICK_RATE..=MAX_TICK_RATE).contains(&value) {
        Ok(())
    } else {
        Err(invalid("tick_rate", value, "[1.0, 1000.0]"))
    }
}

/// Returns an error unless `value` is a usable bound for a random velocity
/// kick, i.e. in `[0, MAX_KICK_STRENGTH]`. `name` labels the error.
pub fn validate_kick_strength(name: &'static str, value: f32) -> SimResult<()> {
    if (0.0..=MAX_KICK_STRENGTH).contains(&value) {
        Ok(())
    } else {
        Err(invalid(name, value, "[0.0, 1000.0]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elasticity_accepts_closed_unit_interval() {
        assert!(validate_elasticity(0.0).is_ok());
        assert!(validate_elasticity(1.0).is_ok());
        assert!(validate_elasticity(-0.1).is_err());
        assert!(validate_elasticity(1.01).is_err());
    }

    #[test]
    fn mass_and_radius_reject_zero_and_nan() {
        assert!(validate_mass(0.0).is_err());
        assert!(validate_mass(f32::NAN).is_err());
        assert!(validate_radius(-3.0).is_err());
        assert!(validate_radius(f32::INFINITY).is_err());
        assert!(validate_radius(12.0).is_ok());
    }

    #[test]
    fn tick_rate_is_bounded_on_both_sides() {
        assert!(validate_tick_rate(30.0).is_ok());
        assert!(validate_tick_rate(1000.0).is_ok());
        assert!(validate_tick_rate(1e-20).is_err());
        assert!(validate_tick_rate(0.5).is_err());
        assert!(validate_tick_rate(1001.0).is_err());
        assert!(validate_tick_rate(f32::INFINITY).is_err());
    }

    #[test]
    fn kick_strength_rejects_huge_and_non_finite() {
        assert!(validate_kick_strength("max_delta", 0.0).is_ok());
        assert!(validate_kick_strength("max_delta", 6.0).is_ok());
        assert!(validate_kick_strength("max_delta", 3e38).is_err());
        assert!(validate_kick_strength("max_delta", f32::INFINITY).is_err());
        assert!(validate_kick_strength("max_delta", f32::NAN).is_err());
        assert!(validate_kick_strength("max_delta", -1.0).is_err());
    }

    #[test]
    fn invalid_parameter_message_names_the_field() {
        let err = validate_trail_decay(1.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("trail_decay"), "message was: {msg}");
        assert!(msg.contains("(0.0, 1.0)"), "message was: {msg}");
    }
}
