//! Per-body motion trail.
//!
//! A trail is a bounded, most-recent-first list of past positions. Each
//! sample's opacity decays every tick, so older dots fade out before they are
//! evicted from the tail.

use std::collections::VecDeque;

use bevy::prelude::Vec2;

use crate::constants::{TRAIL_ALPHA, TRAIL_DECAY, TRAIL_LENGTH};

/// One recorded position and its current opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Vec2,
    pub alpha: f32,
}

/// Length and fade parameters shared by every trail in a simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSettings {
    /// Maximum number of samples kept.
    pub length: usize,
    /// Opacity a new sample starts at.
    pub initial_alpha: f32,
    /// Per-tick opacity multiplier.
    pub decay: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            length: TRAIL_LENGTH,
            initial_alpha: TRAIL_ALPHA,
            decay: TRAIL_DECAY,
        }
    }
}

/// Bounded position history, index 0 is the newest sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    samples: VecDeque<TrailSample>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `position` as the newest sample, evict past `settings.length`,
    /// then fade every remaining sample (the new one included).
    pub fn record(&mut self, position: Vec2, settings: &TrailSettings) {
        self.samples.push_front(TrailSample {
            position,
            alpha: settings.initial_alpha,
        });
        self.samples.truncate(settings.length);
        for sample in self.samples.iter_mut() {
            sample.alpha *= settings.decay;
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    pub fn newest(&self) -> Option<&TrailSample> {
        self.samples.front()
    }

    pub fn oldest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }
}
