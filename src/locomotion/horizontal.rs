//! Locomotion domain: planar speed, heading and displacement.

use bevy::prelude::*;

use crate::locomotion::collaborators::{ActionId, InputCapabilities, Orientation};
use crate::locomotion::components::LocomotionState;
use crate::locomotion::resources::LocomotionTuning;

/// Gap between body speed and target inside which speed snaps to target.
pub const SPEED_DEAD_BAND: f32 = 0.1;
/// Animation blend below this is written as zero.
pub const BLEND_EPSILON: f32 = 0.01;
/// Componentwise tolerance for treating the stick as neutral.
pub const MOVE_INPUT_EPSILON: f32 = 1e-5;
/// Stand-in for analog stick magnitude.
pub const MOTION_SPEED: f32 = 1.0;

pub fn is_neutral(move_input: Vec2) -> bool {
    move_input.abs_diff_eq(Vec2::ZERO, MOVE_INPUT_EPSILON)
}

/// Sprint beats walk beats the default move speed; a neutral stick is 0.
pub fn target_speed<I: InputCapabilities + ?Sized>(tuning: &LocomotionTuning, input: &I) -> f32 {
    if is_neutral(input.read_vector(ActionId::Move)) {
        return 0.0;
    }
    if input.is_held(ActionId::Sprint) {
        return tuning.sprint_speed;
    }
    match tuning.walk_speed {
        Some(walk) if input.is_held(ActionId::Walk) => walk,
        _ => tuning.move_speed,
    }
}

/// Linear interpolation with `t` clamped to [0, 1].
pub fn lerp_clamped(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

pub fn round_to_millis(value: f32) -> f32 {
    (value * 1000.0).round_ties_even() / 1000.0
}

/// Move `horizontal_speed` toward `target`, starting from the body's measured
/// planar speed. Inside the dead band the speed snaps to target.
pub(crate) fn smooth_speed(
    state: &mut LocomotionState,
    body_planar_speed: f32,
    target: f32,
    t: f32,
) {
    if (body_planar_speed - target).abs() > SPEED_DEAD_BAND {
        state.horizontal_speed = round_to_millis(lerp_clamped(body_planar_speed, target, t));
    } else {
        state.horizontal_speed = target;
    }
}

/// Always interpolates, never snaps early.
pub(crate) fn smooth_blend(state: &mut LocomotionState, target: f32, t: f32) {
    state.animation_blend = lerp_clamped(state.animation_blend, target, t);
    if state.animation_blend < BLEND_EPSILON {
        state.animation_blend = 0.0;
    }
}

/// Shortest signed difference from `current` to `target`, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Critically damped spring toward `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Never overshoot the target.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// `smooth_damp` along the shortest arc between two yaw angles.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, dt)
}

/// Clockwise angle of the stick from straight ahead, in degrees.
pub fn input_heading(move_input: Vec2) -> f32 {
    let direction = Vec3::new(move_input.x, 0.0, move_input.y).normalize_or_zero();
    direction.x.atan2(direction.z).to_degrees()
}

/// Unit direction for a yaw, tilted by `pitch_degrees` about its right axis.
pub fn movement_direction(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let rotation = Quat::from_rotation_y(-yaw_degrees.to_radians())
        * Quat::from_rotation_x(pitch_degrees.to_radians());
    (rotation * Vec3::NEG_Z).normalize()
}

/// Turn toward the stick direction relative to the heading reference.
///
/// Returns `None` when the heading is left alone: a neutral stick, or an
/// airborne character on a profile that only steers on the ground.
pub(crate) fn steer(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    move_input: Vec2,
    heading_yaw: f32,
    body_yaw: f32,
    dt: f32,
) -> Option<Orientation> {
    if is_neutral(move_input) || (tuning.rotate_only_when_grounded && !state.grounded) {
        return None;
    }

    state.target_rotation_deg = input_heading(move_input) + heading_yaw;
    let yaw = smooth_damp_angle(
        body_yaw,
        state.target_rotation_deg,
        &mut state.rotation_velocity,
        tuning.rotation_smooth_time,
        dt,
    );
    let roll = if tuning.lean_into_turns {
        yaw - state.target_rotation_deg
    } else {
        0.0
    };

    Some(Orientation {
        yaw_degrees: yaw,
        roll_degrees: roll,
    })
}

/// World-space offset for one tick.
pub fn displacement(state: &LocomotionState, dt: f32) -> Vec3 {
    let direction = movement_direction(state.target_rotation_deg, state.forward_angle);
    (direction * state.horizontal_speed + Vec3::Y * state.vertical_velocity) * dt
}
