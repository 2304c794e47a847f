//! Demo-mode trajectory: a deterministic oscillation independent of sun data.

use super::config::TrackerConfig;

/// Demo yaw/pitch targets for an elapsed session time.
///
/// Pitch sweeps the configured range on a raised-cosine envelope with the
/// configured period (8 s by default); yaw oscillates at `demo_yaw_ratio`
/// times the pitch frequency. Pure function of elapsed time, so demo motion
/// is reproducible and ignores the live orientation entirely.
pub fn demo_target(config: &TrackerConfig, elapsed_secs: f32) -> (f32, f32) {
    let omega = std::f32::consts::TAU / config.demo_period_secs;

    // Raised cosine: (sin + 1)/2 maps the oscillation onto [0, 1]
    let envelope = ((omega * elapsed_secs).sin() + 1.0) * 0.5;
    let pitch =
        config.demo_pitch_min + (config.demo_pitch_max - config.demo_pitch_min) * envelope;

    let yaw = config.demo_yaw_amplitude * (config.demo_yaw_ratio * omega * elapsed_secs).sin();

    (yaw, pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_periodic_at_configured_period() {
        let config = TrackerConfig::default();
        for t in [0.0_f32, 1.3, 2.0, 5.7] {
            let (_, p0) = demo_target(&config, t);
            let (_, p1) = demo_target(&config, t + config.demo_period_secs);
            assert!(
                (p0 - p1).abs() < 1e-4,
                "pitch not periodic at t={t}: {p0} vs {p1}"
            );
        }
    }

    #[test]
    fn test_pitch_stays_in_sweep_range() {
        let config = TrackerConfig::default();
        for step in 0..800 {
            let t = step as f32 * 0.05;
            let (_, pitch) = demo_target(&config, t);
            assert!(
                pitch >= config.demo_pitch_min - 1e-5
                    && pitch <= config.demo_pitch_max + 1e-5,
                "pitch {pitch} out of range at t={t}"
            );
        }
    }

    #[test]
    fn test_yaw_stays_within_amplitude() {
        let config = TrackerConfig::default();
        for step in 0..800 {
            let t = step as f32 * 0.05;
            let (yaw, _) = demo_target(&config, t);
            assert!(
                yaw.abs() <= config.demo_yaw_amplitude + 1e-5,
                "yaw {yaw} beyond amplitude at t={t}"
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let config = TrackerConfig::default();
        assert_eq!(demo_target(&config, 3.21), demo_target(&config, 3.21));
    }

    #[test]
    fn test_starts_mid_sweep() {
        // At t=0 the envelope sits at 0.5: pitch midway through its range
        let config = TrackerConfig::default();
        let (yaw, pitch) = demo_target(&config, 0.0);
        let mid = (config.demo_pitch_min + config.demo_pitch_max) * 0.5;
        assert!((pitch - mid).abs() < 1e-5);
        assert!(yaw.abs() < 1e-6);
    }
}
