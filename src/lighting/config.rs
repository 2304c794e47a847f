//! Lighting configuration: the day/night presets and classification bounds.

use serde::{Deserialize, Serialize};

/// One illumination preset (background tone + light intensities).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LightingPreset {
    /// Scene background color, linear RGB.
    pub background_tone: [f32; 3],
    /// Directional sun light intensity.
    pub sun_intensity: f32,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
}

/// Ambient lighting configuration.
///
/// Exactly two presets are selected between with a hard switch; there is no
/// interpolation across the day/night boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Preset applied while the sun counts as up.
    pub day: LightingPreset,
    /// Preset applied otherwise.
    pub night: LightingPreset,
    /// Radius at which the sky anchor is placed along the sun direction.
    pub sky_radius: f32,
    /// Altitude above which the scene counts as daytime, radians. Slightly
    /// above zero so the classification does not flicker at the horizon.
    pub daytime_threshold: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            day: LightingPreset {
                background_tone: [0.53, 0.81, 0.92], // sky blue
                sun_intensity: 1.0,
                ambient_intensity: 0.45,
            },
            night: LightingPreset {
                background_tone: [0.04, 0.06, 0.15], // deep night blue
                sun_intensity: 0.08,
                ambient_intensity: 0.18,
            },
            sky_radius: 100.0,
            daytime_threshold: 0.05,
        }
    }
}
