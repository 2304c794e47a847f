//! Simplified Meeus solar position approximation.
//!
//! Good to a fraction of a degree over present-day dates, which is far more
//! accurate than a panel visualization needs. The computation runs in f64
//! degrees and narrows to radian f32 [`SunAngles`] at the boundary.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::geo::Location;

use super::{SunAngles, SunPositionSource};

/// Built-in sun position source based on the Meeus approximation.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeeusSun;

/// Julian day number for a UTC instant (Meeus chapter 7 approximation).
fn julian_day(at: DateTime<Utc>) -> f64 {
    let mut y = at.year() as f64;
    let mut m = at.month() as f64;
    let d = at.day() as f64;
    let h = at.hour() as f64 + at.minute() as f64 / 60.0 + at.second() as f64 / 3600.0;

    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5 + h / 24.0
}

/// Solar elevation and azimuth in degrees (azimuth from North, clockwise).
fn solar_position_degrees(latitude: f64, longitude: f64, at: DateTime<Utc>) -> (f64, f64) {
    let jd = julian_day(at);
    let n = jd - 2451545.0; // days since J2000.0

    // Mean longitude and mean anomaly (deg)
    let l = (280.460 + 0.9856474 * n).rem_euclid(360.0);
    let g = (357.528 + 0.9856003 * n).rem_euclid(360.0).to_radians();

    // Ecliptic longitude (deg) and obliquity (deg)
    let lambda = (l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).to_radians();
    let eps = (23.439 - 0.0000004 * n).to_radians();

    // Right ascension and declination
    let alpha = (eps.cos() * lambda.sin()).atan2(lambda.cos()).to_degrees();
    let delta = (eps.sin() * lambda.sin()).asin();

    // Local sidereal time (deg) and hour angle wrapped to [-180, 180]
    let gmst = (280.46061837 + 360.98564736629 * n).rem_euclid(360.0);
    let lst = (gmst + longitude).rem_euclid(360.0);
    let hour_angle = ((lst - alpha + 540.0).rem_euclid(360.0) - 180.0).to_radians();

    let lat = latitude.to_radians();

    // Elevation
    let sin_el = lat.sin() * delta.sin() + lat.cos() * delta.cos() * hour_angle.cos();
    let elevation = sin_el.asin().to_degrees();

    // Azimuth from North, clockwise
    let y = -hour_angle.sin() * delta.cos();
    let x = lat.cos() * delta.sin() - lat.sin() * delta.cos() * hour_angle.cos();
    let azimuth = (y.atan2(x).to_degrees() + 360.0).rem_euclid(360.0);

    (elevation, azimuth)
}

impl SunPositionSource for MeeusSun {
    fn sun_angles(&self, location: Location, at: DateTime<Utc>) -> SunAngles {
        let (elevation, azimuth) = solar_position_degrees(location.latitude, location.longitude, at);
        SunAngles {
            azimuth: azimuth.to_radians() as f32,
            altitude: elevation.to_radians() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn delhi() -> Location {
        Location { latitude: 28.6139, longitude: 77.2090 }
    }

    #[test]
    fn test_julian_day_j2000_epoch() {
        // J2000.0 is 2000-01-01 12:00 UTC, JD 2451545.0
        let at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = julian_day(at);
        assert!((jd - 2451545.0).abs() < 1e-6, "JD = {jd}");
    }

    #[test]
    fn test_julian_day_handles_january() {
        // Month <= 2 takes the shifted-year branch
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let jd = julian_day(at);
        assert!((jd - 2460324.5).abs() < 1e-6, "JD = {jd}");
    }

    #[test]
    fn test_noon_sun_high_at_delhi_in_summer() {
        // Local solar noon in Delhi is ~06:51 UTC
        let at = Utc.with_ymd_and_hms(2024, 6, 21, 6, 51, 0).unwrap();
        let (elevation, azimuth) = solar_position_degrees(28.6139, 77.2090, at);
        // Summer solstice noon at 28.6N: elevation near 90 - (28.6 - 23.4)
        assert!(elevation > 80.0, "elevation = {elevation}");
        assert!((0.0..360.0).contains(&azimuth));
    }

    #[test]
    fn test_midnight_sun_below_horizon() {
        // Local midnight in Delhi is ~18:51 UTC
        let at = Utc.with_ymd_and_hms(2024, 6, 21, 18, 51, 0).unwrap();
        let (elevation, _) = solar_position_degrees(28.6139, 77.2090, at);
        assert!(elevation < 0.0, "elevation = {elevation}");
    }

    #[test]
    fn test_morning_sun_in_the_east() {
        let at = Utc.with_ymd_and_hms(2024, 3, 20, 2, 0, 0).unwrap(); // ~07:08 local
        let (elevation, azimuth) = solar_position_degrees(28.6139, 77.2090, at);
        assert!(elevation > 0.0, "elevation = {elevation}");
        assert!(
            (45.0..135.0).contains(&azimuth),
            "morning azimuth should be eastward, got {azimuth}"
        );
    }

    #[test]
    fn test_angles_are_radians_and_finite() {
        let at = Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap();
        let angles = MeeusSun.sun_angles(delhi(), at);
        assert!(angles.is_finite());
        assert!((0.0..std::f32::consts::TAU).contains(&angles.azimuth));
        assert!(angles.altitude.abs() <= std::f32::consts::FRAC_PI_2 + 1e-3);
    }

    #[test]
    fn test_pure_function_of_inputs() {
        let at = Utc.with_ymd_and_hms(2024, 4, 10, 9, 30, 0).unwrap();
        let a = MeeusSun.sun_angles(delhi(), at);
        let b = MeeusSun.sun_angles(delhi(), at);
        assert_eq!(a, b);
    }
}
