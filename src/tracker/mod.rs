//! Orientation controller for the tracked panel.
//!
//! Converts sun observations into a mechanically valid target attitude and
//! slews the live orientation toward it each frame. The main entry point is
//! [`TrackerSystem`]: feed it observations on the slow cadence with
//! [`observe`](TrackerSystem::observe), advance it every rendering frame
//! with [`frame_step`](TrackerSystem::frame_step), and read
//! [`orientation`](TrackerSystem::orientation).

pub mod config;
pub mod demo;
pub mod direction;
pub mod slew;

pub use config::{MechanicalLimits, TrackerConfig};
pub use demo::demo_target;
pub use direction::sun_direction;
pub use slew::advance_toward;

use glam::{Quat, Vec3};

use crate::core::Error;
use crate::solar::SunAngles;

/// Panel motion mode. Exactly one is active at a time; switching takes
/// effect on the next frame step without resetting the live orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Follow the sun, slew-limited.
    #[default]
    Tracking,
    /// Fixed-period oscillation, independent of sun data.
    Demo,
}

/// Compute the clamped tracking target for a sun direction.
///
/// Yaw is always geometric (`atan2(x, z)`). Below the horizon the pitch is
/// pinned to the stow angle instead of the geometric target, so the panel
/// never points face-down at night. Both channels clamp to the envelope;
/// the hypot-based pitch form stays well-defined for an overhead sun.
pub fn tracking_target(dir: Vec3, config: &TrackerConfig) -> (f32, f32) {
    let yaw = config.limits.clamp_yaw(dir.x.atan2(dir.z));

    let is_night = dir.y < 0.0;
    let raw_pitch = if is_night {
        config.stow_pitch
    } else {
        dir.y.atan2(dir.x.hypot(dir.z))
    };
    let pitch = config.limits.clamp_pitch(raw_pitch);

    (yaw, pitch)
}

/// Build the yaw-then-pitch rotation relative to the rest pose.
#[inline]
fn delta_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(glam::EulerRot::YXZ, yaw, pitch, 0.0)
}

/// Orientation controller state.
///
/// Owns the cached sun direction and the live orientation; nothing else
/// writes either. The render surface reads [`orientation`](Self::orientation)
/// every frame and applies it to its own objects.
pub struct TrackerSystem {
    config: TrackerConfig,
    mode: Mode,
    /// Rest-pose rotation of the panel geometry; fixed for the session.
    base: Quat,
    /// Most recent valid sun direction, overwritten per observation.
    sun_dir: Vec3,
    /// Live orientation, composed `base * delta`.
    orientation: Quat,
}

impl TrackerSystem {
    /// Create a tracker with the identity rest pose.
    pub fn new(config: TrackerConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            mode: Mode::Tracking,
            base: Quat::IDENTITY,
            sun_dir: Vec3::Y,
            orientation: Quat::IDENTITY,
        })
    }

    /// Set the rest-pose rotation the deltas compose onto.
    pub fn with_rest_pose(mut self, base: Quat) -> Self {
        self.base = base;
        self.orientation = base;
        self
    }

    /// Record a sun observation (slow cadence, not per frame).
    ///
    /// Non-finite angles are rejected and the last valid direction is held:
    /// a corrupted orientation would desynchronize the render surface for
    /// the rest of the session. Returns whether the observation was applied.
    pub fn observe(&mut self, angles: SunAngles) -> bool {
        if !angles.is_finite() {
            log::warn!("rejecting non-finite sun observation: {angles:?}");
            return false;
        }
        self.sun_dir = sun_direction(angles);
        true
    }

    /// Advance the live orientation by one frame.
    ///
    /// Tracking mode recomputes the clamped target from the cached direction
    /// (which may be up to one observation interval stale) and slews toward
    /// it by at most the configured step. Demo mode applies the trajectory
    /// directly; it is already smooth and may jump on mode entry.
    pub fn frame_step(&mut self, elapsed_secs: f32) {
        match self.mode {
            Mode::Tracking => {
                let (yaw, pitch) = tracking_target(self.sun_dir, &self.config);
                let target = self.base * delta_rotation(yaw, pitch);
                self.orientation =
                    advance_toward(self.orientation, target, self.config.slew_step);
            }
            Mode::Demo => {
                let (yaw, pitch) = demo_target(&self.config, elapsed_secs);
                self.orientation = self.base * delta_rotation(yaw, pitch);
            }
        }
    }

    /// Switch motion mode. Never snaps the live orientation; tracking
    /// resumes slewing from wherever the previous mode left it.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::info!("panel mode: {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Current motion mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Live panel orientation, readable every frame.
    #[inline]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Most recent cached sun direction (unit vector).
    #[inline]
    pub fn sun_direction(&self) -> Vec3 {
        self.sun_dir
    }

    /// Whether the cached sun direction is below the horizon.
    #[inline]
    pub fn is_night(&self) -> bool {
        self.sun_dir.y < 0.0
    }

    /// Clamped tracking target for the cached direction.
    pub fn target(&self) -> (f32, f32) {
        tracking_target(self.sun_dir, &self.config)
    }

    /// Immutable reference to the configuration.
    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}
