//! Session configuration aggregating the per-subsystem configs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Error;
use crate::geo::GeoConfig;
use crate::lighting::LightingConfig;
use crate::tracker::TrackerConfig;

/// Top-level session configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds between sun observations. The sun moves on the scale of
    /// minutes, so recomputing per frame would be wasted work.
    pub update_interval_secs: f32,
    /// Frame task rate in Hz when the runner drives frames itself.
    pub frame_rate: f32,
    /// Name of the geometry node the orientation is written to. Falls back
    /// to the geometry root when absent from the registered nodes.
    pub rotation_target: String,
    /// Geolocation parameters.
    pub geo: GeoConfig,
    /// Orientation controller parameters.
    pub tracker: TrackerConfig,
    /// Ambient lighting parameters.
    pub lighting: LightingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            update_interval_secs: 30.0,
            frame_rate: 60.0,
            rotation_target: "panel_pivot".to_string(),
            geo: GeoConfig::default(),
            tracker: TrackerConfig::default(),
            lighting: LightingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&text).map_err(|e| Error::Config(e.to_string()))?;
        config.tracker.validate()?;
        Ok(config)
    }
}
