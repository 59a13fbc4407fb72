//! Runtime simulation configuration loaded from `assets/ballpit.toml`.
//!
//! [`SimConfig`] mirrors the tuneable values in [`crate::constants`]. At
//! startup [`load_sim_config`] reads the TOML file and overwrites the defaults
//! with any values present. Missing keys fall back to the compile-time
//! defaults, so a minimal file can override just the values you care about:
//!
//! ```toml
//! gravity = 0.4
//! trail_length = 40
//! seed = 7
//!
//! [bounds]
//! width = 800.0
//! height = 600.0
//! ```
//!
//! Set `BALLPIT_CONFIG` to read a different file.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SimConfig::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{
    validate_kick_strength, validate_tick_rate, validate_trail_decay, SimError, SimResult,
};
use crate::integrator::Bounds;
use crate::trail::TrailSettings;

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/ballpit.toml";

/// Environment variable that overrides [`CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "BALLPIT_CONFIG";

/// Runtime-tunable simulation configuration.
///
/// All fields default to the corresponding constant from `src/constants.rs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── World ─────────────────────────────────────────────────────────────────
    pub bounds: Bounds,
    pub gravity: f32,

    // ── Clock ─────────────────────────────────────────────────────────────────
    pub tick_rate: f32,

    // ── Trails ────────────────────────────────────────────────────────────────
    pub trail_length: usize,
    pub trail_alpha: f32,
    pub trail_decay: f32,

    // ── Interaction ───────────────────────────────────────────────────────────
    pub color_blend: bool,
    pub shake_strength: f32,
    /// Seed for spawn, shake and color jitter. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Random bodies the host spawns before the first frame.
    pub initial_bodies: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            gravity: GRAVITY,
            tick_rate: TICK_RATE,
            trail_length: TRAIL_LENGTH,
            trail_alpha: TRAIL_ALPHA,
            trail_decay: TRAIL_DECAY,
            color_blend: true,
            shake_strength: SHAKE_STRENGTH,
            seed: None,
            initial_bodies: 0,
        }
    }
}

impl SimConfig {
    /// Parse a config from TOML text. `origin` only labels errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> SimResult<Self> {
        toml::from_str::<SimConfig>(contents).map_err(|e| SimError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Reject values that would make the simulation meaningless.
    pub fn validate(&self) -> SimResult<()> {
        validate_tick_rate(self.tick_rate)?;
        validate_trail_decay(self.trail_decay)?;
        validate_kick_strength("shake_strength", self.shake_strength)?;
        for (name, value) in [
            ("bounds.width", self.bounds.width),
            ("bounds.height", self.bounds.height),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SimError::InvalidParameter {
                    name,
                    value,
                    safe_range: "(0.0, ∞)",
                });
            }
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "gravity",
                value: self.gravity,
                safe_range: "finite",
            });
        }
        if !(0.0..=1.0).contains(&self.trail_alpha) {
            return Err(SimError::InvalidParameter {
                name: "trail_alpha",
                value: self.trail_alpha,
                safe_range: "[0.0, 1.0]",
            });
        }
        Ok(())
    }

    pub fn trail_settings(&self) -> TrailSettings {
        TrailSettings {
            length: self.trail_length,
            initial_alpha: self.trail_alpha,
            decay: self.trail_decay,
        }
    }
}

/// Read and validate the config at `path`.
///
/// A missing file yields the compiled defaults; an unreadable, unparsable or
/// invalid one yields an error.
pub fn read_sim_config(path: &Path) -> SimResult<SimConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SimConfig::default()),
        Err(e) => {
            return Err(SimError::ConfigParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    let config = SimConfig::from_toml_str(&contents, &path.display().to_string())?;
    config.validate()?;
    Ok(config)
}

/// Load the config for the app, never failing.
///
/// Reads `$BALLPIT_CONFIG` or [`CONFIG_PATH`]. Parse and validation errors
/// are printed to stderr and the compiled defaults are used instead.
pub fn load_sim_config() -> SimConfig {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
    let path = Path::new(&path);
    if !path.exists() {
        println!("ℹ No {} found; using compiled defaults", path.display());
        return SimConfig::default();
    }
    match read_sim_config(path) {
        Ok(config) => {
            println!("✓ Loaded simulation config from {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("⚠ {e}; using defaults");
            SimConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = SimConfig::from_toml_str("", "<test>").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = SimConfig::from_toml_str(
            "gravity = 0.5\nseed = 11\n[bounds]\nwidth = 640.0\nheight = 480.0\n",
            "<test>",
        )
        .unwrap();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.bounds, Bounds::new(640.0, 480.0));
        assert_eq!(config.trail_length, TRAIL_LENGTH);
        assert_eq!(config.trail_decay, TRAIL_DECAY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_toml_reports_origin() {
        let err = SimConfig::from_toml_str("gravity = \"heavy\"", "custom.toml").unwrap_err();
        match err {
            SimError::ConfigParse { path, .. } => assert_eq!(path, "custom.toml"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = SimConfig::default();
        config.trail_decay = 1.2;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.bounds.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.tick_rate = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_degenerate_rate_and_shake() {
        let config = SimConfig::from_toml_str("tick_rate = 1e-20", "tiny.toml").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidParameter { name: "tick_rate", .. })
        ));

        let config = SimConfig::from_toml_str("shake_strength = inf", "wild.toml").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidParameter { name: "shake_strength", .. })
        ));

        let config = SimConfig::from_toml_str("shake_strength = 3e38", "wild.toml").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_reads_as_defaults() {
        let config = read_sim_config(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, SimConfig::default());
    }
}
