//! Session context and cooperative scheduling.
//!
//! One session owns the tracker, lighting, scene registry, and location.
//! Two tasks drive it at different cadences: a slow periodic task re-derives
//! the sun observation, and a per-frame task advances the orientation. The
//! frame task always reads the most recently cached direction, which may be
//! up to one observation interval stale by design.

pub mod config;

pub use config::SessionConfig;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use glam::Quat;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::{Error, SessionClock};
use crate::geo::{Geolocator, Location, LocationProvider};
use crate::lighting::{LightingState, LightingSystem, LightingUniform};
use crate::scene::{SceneNodeId, SceneNodes};
use crate::solar::SunPositionSource;
use crate::tracker::{Mode, TrackerSystem};

/// Everything the two tasks write. Single writer per field: the observer
/// task feeds tracker/lighting observations, the frame task advances the
/// orientation and publishes it to the scene.
struct SessionState {
    tracker: TrackerSystem,
    lighting: LightingSystem,
    scene: SceneNodes,
    target: SceneNodeId,
    rotation_target_name: String,
    location: Location,
    clock: SessionClock,
}

/// Shared handle to one session.
///
/// Cheap to clone; the runner tasks and the embedding render surface all
/// hold clones. The inner mutex is held only for short synchronous updates,
/// never across an await.
#[derive(Clone)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
    geolocator: Arc<tokio::sync::Mutex<Geolocator>>,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Result<Self, Error> {
        let scene = SceneNodes::new();
        let target = scene.root();
        let state = SessionState {
            tracker: TrackerSystem::new(config.tracker.clone())?,
            lighting: LightingSystem::new(config.lighting.clone()),
            scene,
            target,
            rotation_target_name: config.rotation_target.clone(),
            location: config.geo.default_location,
            clock: SessionClock::new(),
        };
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            geolocator: Arc::new(tokio::sync::Mutex::new(Geolocator::new(config.geo.clone()))),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // All writes are recompute-wholesale, so a poisoned lock is safe to enter
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a node from the loaded geometry and re-resolve the rotation
    /// target against it.
    pub fn register_node(&self, name: impl Into<String>) -> SceneNodeId {
        let mut state = self.lock();
        let id = state.scene.add(name);
        let target_name = state.rotation_target_name.clone();
        state.target = state.scene.rotation_target(&target_name);
        id
    }

    /// Resolve the session location once, with the configured bounded wait
    /// and default fallback. Failure is not fatal; the previous (or default)
    /// location stays in effect and no retry is scheduled.
    pub async fn resolve_location<P: LocationProvider>(&self, provider: &P) {
        let location = {
            let mut geolocator = self.geolocator.lock().await;
            geolocator.resolve(provider).await
        };
        self.lock().location = location;
    }

    /// Observation step at a given instant: derive the sun angles for the
    /// current location and feed tracker and lighting. Runs on the slow
    /// cadence, never per frame.
    pub fn observe_at<S: SunPositionSource>(&self, source: &S, at: DateTime<Utc>) {
        let mut state = self.lock();
        let angles = source.sun_angles(state.location, at);
        state.tracker.observe(angles);
        state.lighting.evaluate(angles);
    }

    /// Observation step for the current wall-clock instant.
    pub fn observe_now<S: SunPositionSource>(&self, source: &S) {
        self.observe_at(source, Utc::now());
    }

    /// Per-frame step: advance the orientation per the active mode and
    /// publish it to the scene rotation target.
    pub fn frame_step(&self) {
        let mut state = self.lock();
        state.clock.tick();
        let elapsed = state.clock.elapsed_secs();
        state.tracker.frame_step(elapsed);
        let orientation = state.tracker.orientation();
        let target = state.target;
        state.scene.set_rotation(target, orientation);
    }

    /// Switch the panel motion mode; takes effect on the next frame step.
    pub fn set_mode(&self, mode: Mode) {
        self.lock().tracker.set_mode(mode);
    }

    /// Current panel motion mode.
    pub fn mode(&self) -> Mode {
        self.lock().tracker.mode()
    }

    /// Live panel orientation.
    pub fn orientation(&self) -> Quat {
        self.lock().tracker.orientation()
    }

    /// Rotation currently published on the scene rotation target.
    pub fn target_rotation(&self) -> Quat {
        let state = self.lock();
        state.scene.rotation(state.target).unwrap_or(Quat::IDENTITY)
    }

    /// Lighting state from the latest observation.
    pub fn lighting_state(&self) -> LightingState {
        *self.lock().lighting.state()
    }

    /// GPU-ready lighting uniform from the latest observation.
    pub fn lighting_uniform(&self) -> LightingUniform {
        self.lock().lighting.uniform()
    }

    /// Location currently in effect.
    pub fn location(&self) -> Location {
        self.lock().location
    }

    /// Frames stepped so far.
    pub fn frame_count(&self) -> u64 {
        self.lock().clock.frame_count()
    }
}

/// Handle to the two scheduled tasks. Dropping it without calling
/// [`shutdown`](Self::shutdown) leaves the tasks running; shutdown signals
/// both and awaits them, so no timer fires after teardown.
pub struct SessionRunner {
    shutdown: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl SessionRunner {
    /// Spawn the periodic observation task and the frame task.
    ///
    /// The observation interval fires immediately once, so the session does
    /// not sit unlit for the first interval.
    pub fn spawn<S>(session: Session, source: S, config: &SessionConfig) -> Self
    where
        S: SunPositionSource + Send + Sync + 'static,
    {
        let mut runner = Self::spawn_observer_only(session.clone(), source, config);

        let (frame_session, mut stop) = (session, runner.shutdown.subscribe());
        let frame_period = Duration::from_secs_f32(1.0 / config.frame_rate.max(1.0));
        runner.handles.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(frame_period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = interval.tick() => frame_session.frame_step(),
                    _ = stop.changed() => break,
                }
            }
            log::debug!("frame task stopped");
        }));

        runner
    }

    /// Spawn only the periodic observation task. For embeddings whose render
    /// surface drives [`Session::frame_step`] from its own tick.
    pub fn spawn_observer_only<S>(session: Session, source: S, config: &SessionConfig) -> Self
    where
        S: SunPositionSource + Send + Sync + 'static,
    {
        let (shutdown, _) = watch::channel(false);
        let mut stop = shutdown.subscribe();
        let period = Duration::from_secs_f32(config.update_interval_secs.max(0.001));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = interval.tick() => session.observe_now(&source),
                    _ = stop.changed() => break,
                }
            }
            log::debug!("observation task stopped");
        });

        log::info!("session tasks started");
        Self {
            shutdown,
            handles: vec![handle],
        }
    }

    /// Signal both tasks and wait for them to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        for handle in self.handles {
            let _ = handle.await;
        }
        log::info!("session tasks stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::FixedLocation;
    use crate::solar::{FixedSun, SunAngles};
    use chrono::TimeZone;

    fn day_sun() -> FixedSun {
        FixedSun(SunAngles { azimuth: 0.6, altitude: 0.9 })
    }

    fn night_sun() -> FixedSun {
        FixedSun(SunAngles { azimuth: 0.6, altitude: -0.3 })
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 21, 7, 0, 0).unwrap()
    }

    #[test]
    fn test_observation_feeds_tracker_and_lighting() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        session.observe_at(&day_sun(), instant());
        assert!(session.lighting_state().is_daytime);

        session.observe_at(&night_sun(), instant());
        let lighting = session.lighting_state();
        assert!(!lighting.is_daytime);
        // Night stow: frame steps slew toward the stow attitude
        for _ in 0..400 {
            session.frame_step();
        }
        assert!(session.orientation().is_finite());
    }

    #[test]
    fn test_frame_publishes_to_registered_target() {
        let config = SessionConfig::default();
        let session = Session::new(&config).unwrap();
        let panel = session.register_node("panel_pivot");

        session.observe_at(&day_sun(), instant());
        for _ in 0..10 {
            session.frame_step();
        }

        let published = session.target_rotation();
        assert_eq!(published, session.orientation());
        assert_eq!(
            { session.lock().scene.rotation(panel).unwrap() },
            published
        );
    }

    #[test]
    fn test_unregistered_target_falls_back_to_root() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        // Register an unrelated node so resolution runs with a miss
        session.register_node("chassis");
        session.observe_at(&day_sun(), instant());
        session.frame_step();

        // The root carries the orientation
        let state = session.lock();
        let root = state.scene.root();
        assert_eq!(state.scene.rotation(root).unwrap(), state.tracker.orientation());
    }

    #[test]
    fn test_mode_switch_roundtrip_keeps_orientation() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        session.observe_at(&day_sun(), instant());
        for _ in 0..40 {
            session.frame_step();
        }
        let tracked = session.orientation();

        session.set_mode(Mode::Demo);
        session.frame_step();
        session.set_mode(Mode::Tracking);
        let resumed_from = session.orientation();

        // Demo moved the orientation; tracking resumes from there, within
        // one slew step per frame
        session.frame_step();
        let step = session.orientation().angle_between(resumed_from);
        assert!(step <= SessionConfig::default().tracker.slew_step + 1e-5);
        assert!(tracked.is_finite());
    }

    #[test]
    fn test_mode_commutes_with_observation() {
        // Same visible result whether the mode switch lands before or after
        // the timer tick, within one frame's slew error
        let config = SessionConfig::default();

        let a = Session::new(&config).unwrap();
        a.observe_at(&day_sun(), instant());
        a.set_mode(Mode::Demo);

        let b = Session::new(&config).unwrap();
        b.set_mode(Mode::Demo);
        b.observe_at(&day_sun(), instant());

        assert_eq!(a.mode(), b.mode());
        assert_eq!(a.lighting_state(), b.lighting_state());
    }

    #[tokio::test]
    async fn test_resolve_location_applies_fix() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        let mumbai = Location { latitude: 19.0760, longitude: 72.8777 };
        session.resolve_location(&FixedLocation(mumbai)).await;
        assert_eq!(session.location(), mumbai);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_observes_and_tears_down() {
        let config = SessionConfig::default();
        let session = Session::new(&config).unwrap();
        let runner = SessionRunner::spawn(session.clone(), day_sun(), &config);

        // First interval tick fires immediately; give the scheduler a turn
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(session.lighting_state().is_daytime);
        assert!(session.frame_count() > 0);

        runner.shutdown().await;
        let frames_after_shutdown = session.frame_count();

        // No timer fires after teardown
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(session.frame_count(), frames_after_shutdown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_only_runner_does_not_drive_frames() {
        let config = SessionConfig::default();
        let session = Session::new(&config).unwrap();
        let runner = SessionRunner::spawn_observer_only(session.clone(), day_sun(), &config);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(session.lighting_state().is_daytime);
        assert_eq!(session.frame_count(), 0);

        runner.shutdown().await;
    }
}
