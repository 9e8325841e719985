//! Small vector helpers over plain `[f32; 3]` arrays.

use std::f32::consts::PI;

/// A point or displacement in world space.
pub type Vec3 = [f32; 3];

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn length(a: Vec3) -> f32 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    length(sub(a, b))
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
///
/// Lands exactly on `target` once the remaining distance fits in one step.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = sub(target, current);
    let dist = length(delta);
    if dist <= max_delta || dist == 0.0 {
        return target;
    }
    add(current, scale(delta, max_delta / dist))
}

/// Scalar form of [`move_towards`].
pub fn move_towards_f32(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        return target;
    }
    current + max_delta.copysign(delta)
}

/// Near-equality within an absolute tolerance.
#[inline]
pub fn approximately(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Degrees a wheel of `diameter` turns while rolling `distance` without slipping.
#[inline]
pub fn wheel_rotation_degrees(distance: f32, diameter: f32) -> f32 {
    distance / (PI * diameter) * 360.0
}
