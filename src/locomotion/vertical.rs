//! Locomotion domain: jump, fall grace and gravity integration.

use bevy::prelude::*;

use crate::locomotion::components::LocomotionState;
use crate::locomotion::resources::LocomotionTuning;

/// Velocity held while standing so the body stays pressed to the ground.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// Grounded/airborne branch of the vertical phase, before gravity.
pub(crate) fn resolve_jump_and_fall(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    jump_held: bool,
    dt: f32,
) {
    if state.grounded {
        state.fall_timeout = tuning.fall_timeout;
        state.jump_triggered = false;
        state.free_fall = false;

        if state.vertical_velocity < 0.0 {
            state.vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        }

        if jump_held && state.jump_retrigger_timeout <= 0.0 {
            state.vertical_velocity = tuning.jump_velocity();
            state.jump_triggered = true;
            debug!("Jump: vertical_velocity={}", state.vertical_velocity);
        }

        // Only counts down while grounded; airborne ticks re-arm it instead.
        if state.jump_retrigger_timeout >= 0.0 {
            state.jump_retrigger_timeout -= dt;
        }
    } else {
        state.jump_retrigger_timeout = tuning.jump_retrigger_timeout;

        if state.fall_timeout >= 0.0 {
            state.fall_timeout -= dt;
        }
        if state.fall_timeout < 0.0 && !state.free_fall {
            state.free_fall = true;
            debug!("Free fall engaged");
        }
    }
}

/// Integrate gravity while the fall is slower than terminal velocity.
///
/// One-sided: upward speed is never limited, and a fall may pass terminal
/// velocity by at most one step.
pub(crate) fn apply_gravity(state: &mut LocomotionState, tuning: &LocomotionTuning, dt: f32) {
    if state.vertical_velocity > -tuning.terminal_velocity {
        state.vertical_velocity += tuning.gravity * dt;
    }
}

pub(crate) fn integrate_vertical(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    jump_held: bool,
    dt: f32,
) {
    resolve_jump_and_fall(state, tuning, jump_held, dt);
    apply_gravity(state, tuning, dt);
}
