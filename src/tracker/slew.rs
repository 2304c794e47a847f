//! Slew-limited orientation advancement.

use glam::Quat;

/// Rotate `current` toward `target` by at most `max_step` radians along the
/// shortest arc.
///
/// Returns `target` exactly once the remaining angle is within `max_step`;
/// otherwise slerps by the fraction that covers exactly `max_step`, so the
/// remaining angle shrinks by `max_step` per call and never overshoots.
pub fn advance_toward(current: Quat, target: Quat, max_step: f32) -> Quat {
    let angle = current.angle_between(target);
    if angle <= max_step {
        return target;
    }
    current.slerp(target, max_step / angle).normalize()
}
