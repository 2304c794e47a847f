//! Geolocation with bounded wait and default fallback.
//!
//! A [`LocationProvider`] yields a best-effort fix asynchronously. The
//! [`Geolocator`] wraps one provider with a timeout, a cached-fix staleness
//! tolerance, and a configured default location. Resolution never fails the
//! session: on timeout or no fix, the default stays in effect and no retry
//! is scheduled.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Geographic location in degrees. Replaced wholesale when a fix arrives.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    /// New Delhi, the fallback used until a fix resolves.
    fn default() -> Self {
        Self { latitude: 28.6139, longitude: 77.2090 }
    }
}

/// Geolocation configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Location used until (and unless) a fix resolves.
    pub default_location: Location,
    /// Maximum seconds to wait for one fix attempt.
    pub timeout_secs: f32,
    /// A cached fix younger than this many seconds is reused without asking
    /// the provider again.
    pub staleness_secs: f32,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            default_location: Location::default(),
            timeout_secs: 6.0,
            staleness_secs: 600.0,
        }
    }
}

/// Best-effort asynchronous source of a location fix.
///
/// Returning `None` means "no update": the caller keeps whatever location it
/// already has.
pub trait LocationProvider {
    fn locate(&self) -> impl Future<Output = Option<Location>> + Send;
}

/// Provider that always yields the same fix. Useful when the host already
/// knows its location, and in tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedLocation(pub Location);

impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Option<Location> {
        Some(self.0)
    }
}

/// One-shot geolocation resolver with fallback semantics.
pub struct Geolocator {
    config: GeoConfig,
    cached: Option<(Location, Instant)>,
}

impl Geolocator {
    pub fn new(config: GeoConfig) -> Self {
        Self { config, cached: None }
    }

    /// The location to use right now: the latest fix if any, otherwise the
    /// configured default.
    pub fn current(&self) -> Location {
        self.cached
            .map(|(loc, _)| loc)
            .unwrap_or(self.config.default_location)
    }

    /// Resolve a location, waiting at most the configured timeout.
    ///
    /// A sufficiently fresh cached fix short-circuits the provider. On
    /// timeout or a provider that yields nothing, the previous location (or
    /// the default) remains in effect.
    pub async fn resolve<P: LocationProvider>(&mut self, provider: &P) -> Location {
        if let Some((loc, at)) = self.cached {
            if at.elapsed() < Duration::from_secs_f32(self.config.staleness_secs) {
                log::debug!("reusing cached location fix");
                return loc;
            }
        }

        let timeout = Duration::from_secs_f32(self.config.timeout_secs);
        match tokio::time::timeout(timeout, provider.locate()).await {
            Ok(Some(loc)) => {
                log::info!(
                    "geolocation fix: ({:.4}, {:.4})",
                    loc.latitude,
                    loc.longitude
                );
                self.cached = Some((loc, Instant::now()));
                loc
            }
            Ok(None) => {
                log::warn!("geolocation provider returned no fix, keeping current location");
                self.current()
            }
            Err(_) => {
                log::warn!(
                    "geolocation timed out after {:.1}s, keeping current location",
                    self.config.timeout_secs
                );
                self.current()
            }
        }
    }
}
