//! Sun direction vector derivation.
//!
//! Maps azimuth/altitude observations onto the scene's axis convention:
//! +Y up, azimuth swept from +Z toward +X.

use crate::solar::SunAngles;

/// Compute the unit direction vector toward the sun.
///
/// `(sin(az)·cos(alt), sin(alt), cos(az)·cos(alt))` — already unit length by
/// construction; the normalize guards against rounding drift only.
pub fn sun_direction(angles: SunAngles) -> glam::Vec3 {
    let (az, alt) = (angles.azimuth, angles.altitude);
    glam::Vec3::new(
        az.sin() * alt.cos(),
        alt.sin(),
        az.cos() * alt.cos(),
    )
    .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_norm_over_angle_grid() {
        for az_step in 0..16 {
            for alt_step in -8..=8 {
                let angles = SunAngles {
                    azimuth: az_step as f32 * std::f32::consts::TAU / 16.0,
                    altitude: alt_step as f32 * std::f32::consts::FRAC_PI_2 / 8.0,
                };
                let dir = sun_direction(angles);
                assert!(
                    (dir.length() - 1.0).abs() < 1e-6,
                    "non-unit direction {dir:?} for {angles:?}"
                );
            }
        }
    }

    #[test]
    fn test_zenith_points_up() {
        let dir = sun_direction(SunAngles {
            azimuth: 0.7,
            altitude: std::f32::consts::FRAC_PI_2,
        });
        assert!(dir.y > 0.999, "zenith sun Y = {}", dir.y);
    }

    #[test]
    fn test_below_horizon_points_down() {
        let dir = sun_direction(SunAngles { azimuth: 0.0, altitude: -0.3 });
        assert!(dir.y < 0.0);
    }

    #[test]
    fn test_zero_azimuth_lies_in_z_plane() {
        let dir = sun_direction(SunAngles { azimuth: 0.0, altitude: 0.5 });
        assert!(dir.x.abs() < 1e-6);
        assert!(dir.z > 0.0);
    }

    #[test]
    fn test_quarter_turn_azimuth_points_x() {
        let dir = sun_direction(SunAngles {
            azimuth: std::f32::consts::FRAC_PI_2,
            altitude: 0.0,
        });
        assert!((dir.x - 1.0).abs() < 1e-6, "dir = {dir:?}");
        assert!(dir.z.abs() < 1e-6);
    }
}
