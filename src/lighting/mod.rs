//! Ambient lighting derived from the sun position.
//!
//! Shares the tracker's direction formula and day/night boundary, and is
//! re-evaluated on the same slow cadence (not per frame). The render surface
//! applies the resulting [`LightingState`] declaratively.

pub mod config;
pub mod state;

pub use config::{LightingConfig, LightingPreset};
pub use state::{LightingState, LightingUniform};

use crate::solar::SunAngles;
use crate::tracker::sun_direction;

/// Lighting evaluator. Call [`evaluate`](Self::evaluate) on each sun
/// observation, then read [`state`](Self::state) or
/// [`uniform`](Self::uniform).
pub struct LightingSystem {
    config: LightingConfig,
    state: LightingState,
}

impl LightingSystem {
    pub fn new(config: LightingConfig) -> Self {
        let state = LightingState {
            background_tone: config.day.background_tone,
            sun_intensity: config.day.sun_intensity,
            ambient_intensity: config.day.ambient_intensity,
            ..LightingState::default()
        };
        Self { config, state }
    }

    /// Recompute the full lighting state for a sun observation.
    ///
    /// The day/night switch is hard: one of exactly two presets applies,
    /// chosen by whether the altitude clears the configured threshold.
    /// Non-finite observations leave the previous state in place.
    pub fn evaluate(&mut self, angles: SunAngles) -> &LightingState {
        if !angles.is_finite() {
            log::warn!("rejecting non-finite sun observation for lighting: {angles:?}");
            return &self.state;
        }

        let is_daytime = angles.altitude > self.config.daytime_threshold;
        let preset = if is_daytime { &self.config.day } else { &self.config.night };

        if is_daytime != self.state.is_daytime {
            log::debug!("lighting preset switch: daytime = {is_daytime}");
        }

        self.state = LightingState {
            sky_anchor: sun_direction(angles) * self.config.sky_radius,
            background_tone: preset.background_tone,
            is_daytime,
            sun_intensity: preset.sun_intensity,
            ambient_intensity: preset.ambient_intensity,
        };
        &self.state
    }

    /// Current lighting state (CPU-side).
    #[inline]
    pub fn state(&self) -> &LightingState {
        &self.state
    }

    /// Build a GPU-ready uniform from current state.
    pub fn uniform(&self) -> LightingUniform {
        LightingUniform::from(&self.state)
    }

    /// Immutable reference to the configuration.
    #[inline]
    pub fn config(&self) -> &LightingConfig {
        &self.config
    }
}
