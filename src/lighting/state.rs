//! Lighting runtime state and its render-facing uniform.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Derived scene illumination, recomputed wholesale on each evaluation.
///
/// Read-only to the render surface; no field is ever partially mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingState {
    /// World-space anchor for the sky/sun visual, on the sky radius along
    /// the sun direction.
    pub sky_anchor: Vec3,
    /// Scene background color, linear RGB.
    pub background_tone: [f32; 3],
    /// Day/night classification at the last evaluation.
    pub is_daytime: bool,
    /// Directional sun light intensity.
    pub sun_intensity: f32,
    /// Ambient light intensity.
    pub ambient_intensity: f32,
}

impl Default for LightingState {
    fn default() -> Self {
        Self {
            sky_anchor: Vec3::new(0.0, 100.0, 0.0),
            background_tone: [0.53, 0.81, 0.92],
            is_daytime: true,
            sun_intensity: 1.0,
            ambient_intensity: 0.45,
        }
    }
}

/// GPU-friendly mirror of [`LightingState`].
///
/// All `vec3` fields are padded to 16-byte alignment so the struct can be
/// uploaded to a uniform buffer as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightingUniform {
    pub sky_anchor: [f32; 3],
    pub sun_intensity: f32,
    pub background_tone: [f32; 3],
    pub ambient_intensity: f32,
    /// 1.0 when daytime, 0.0 otherwise.
    pub is_daytime: f32,
    pub _pad: [f32; 3],
}

impl From<&LightingState> for LightingUniform {
    fn from(s: &LightingState) -> Self {
        Self {
            sky_anchor: s.sky_anchor.to_array(),
            sun_intensity: s.sun_intensity,
            background_tone: s.background_tone,
            ambient_intensity: s.ambient_intensity,
            is_daytime: if s.is_daytime { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }
}
