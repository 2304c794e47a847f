//! Solar position sources.
//!
//! A [`SunPositionSource`] maps a geographic location and a UTC instant to
//! the apparent sun angles. The tracker and lighting systems consume the
//! angles; they never perform astronomy themselves. [`MeeusSun`] is the
//! built-in ephemeris, [`FixedSun`] pins the sun for demos and tests.

pub mod meeus;

pub use meeus::MeeusSun;

use chrono::{DateTime, Utc};

use crate::geo::Location;

/// Instantaneous sun observation, in radians.
///
/// Azimuth is measured from North, clockwise. Altitude is the angle above
/// the horizon; negative means the sun is below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunAngles {
    pub azimuth: f32,
    pub altitude: f32,
}

impl SunAngles {
    /// Whether both angles are finite. Observations failing this are
    /// rejected by the tracker rather than propagated into the orientation.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.azimuth.is_finite() && self.altitude.is_finite()
    }
}

/// Source of apparent sun angles for a location and instant.
///
/// Implementations must be pure functions of their inputs: no caching or
/// other side effects visible to callers.
pub trait SunPositionSource {
    fn sun_angles(&self, location: Location, at: DateTime<Utc>) -> SunAngles;
}

/// Source that always returns the same angles. Useful for demos, tests, and
/// frozen-sun scenarios.
#[derive(Clone, Copy, Debug)]
pub struct FixedSun(pub SunAngles);

impl SunPositionSource for FixedSun {
    fn sun_angles(&self, _location: Location, _at: DateTime<Utc>) -> SunAngles {
        self.0
    }
}
