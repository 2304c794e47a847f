//! Tracker configuration: actuator limits, stow behavior, slew rate.

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// Actuator travel envelope, radians.
///
/// Yaw is rotation about the vertical axis, pitch about the horizontal
/// lateral axis, both relative to the panel's rest pose.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MechanicalLimits {
    pub yaw_min: f32,
    pub yaw_max: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
}

impl Default for MechanicalLimits {
    fn default() -> Self {
        Self {
            yaw_min: (-120.0_f32).to_radians(),
            yaw_max: 120.0_f32.to_radians(),
            pitch_min: (-5.0_f32).to_radians(),
            pitch_max: 65.0_f32.to_radians(),
        }
    }
}

impl MechanicalLimits {
    /// Clamp a yaw angle into the envelope.
    #[inline]
    pub fn clamp_yaw(&self, yaw: f32) -> f32 {
        yaw.clamp(self.yaw_min, self.yaw_max)
    }

    /// Clamp a pitch angle into the envelope.
    #[inline]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(self.pitch_min, self.pitch_max)
    }
}

/// Orientation controller configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Actuator travel envelope.
    pub limits: MechanicalLimits,
    /// Safe pitch used when the sun is below the horizon, so the panel never
    /// points face-down at night. A fixed constant regardless of
    /// location/season; must lie inside the pitch envelope.
    pub stow_pitch: f32,
    /// Maximum angular change per frame step, radians. Fixed per invocation,
    /// not time-scaled: this bounds visible rotation speed at the frame rate.
    pub slew_step: f32,
    /// Demo oscillation period, seconds.
    pub demo_period_secs: f32,
    /// Demo pitch sweep bounds, radians.
    pub demo_pitch_min: f32,
    pub demo_pitch_max: f32,
    /// Demo yaw amplitude, radians.
    pub demo_yaw_amplitude: f32,
    /// Demo yaw frequency as a fraction of the pitch frequency.
    pub demo_yaw_ratio: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            limits: MechanicalLimits::default(),
            stow_pitch: 5.0_f32.to_radians(),
            slew_step: 0.02,
            demo_period_secs: 8.0,
            demo_pitch_min: 8.0_f32.to_radians(),
            demo_pitch_max: 55.0_f32.to_radians(),
            demo_yaw_amplitude: 30.0_f32.to_radians(),
            demo_yaw_ratio: 0.35,
        }
    }
}

impl TrackerConfig {
    /// Check envelope invariants. The stow pitch must be reachable, or the
    /// night path would clamp to something other than the stow attitude.
    pub fn validate(&self) -> Result<(), Error> {
        let l = &self.limits;
        if l.yaw_min >= l.yaw_max {
            return Err(Error::Config(format!(
                "yaw limits inverted: [{}, {}]",
                l.yaw_min, l.yaw_max
            )));
        }
        if l.pitch_min >= l.pitch_max {
            return Err(Error::Config(format!(
                "pitch limits inverted: [{}, {}]",
                l.pitch_min, l.pitch_max
            )));
        }
        if self.stow_pitch < l.pitch_min || self.stow_pitch > l.pitch_max {
            return Err(Error::Config(format!(
                "stow pitch {} outside pitch envelope [{}, {}]",
                self.stow_pitch, l.pitch_min, l.pitch_max
            )));
        }
        if self.slew_step <= 0.0 {
            return Err(Error::Config(format!(
                "slew step must be positive, got {}",
                self.slew_step
            )));
        }
        if self.demo_period_secs <= 0.0 {
            return Err(Error::Config(format!(
                "demo period must be positive, got {}",
                self.demo_period_secs
            )));
        }
        Ok(())
    }
}
