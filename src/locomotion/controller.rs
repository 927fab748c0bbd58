//! Locomotion domain: the per-tick orchestration.
//!
//! A tick runs three ordered phases against a `LocomotionState`:
//! ground/slope resolution, vertical integration (with the attack gate right
//! after it), then horizontal movement and rotation. Later phases read what
//! earlier ones wrote in the same tick.

use bevy::prelude::*;

use crate::locomotion::attack::attack_in_flight;
use crate::locomotion::collaborators::{
    ActionId, ActionProgress, AnimationParams, AnimationSink, BodyCommand, BodySnapshot,
    GroundProbe, HeadingReference, InputCapabilities, Orientation, PhysicsBody,
};
use crate::locomotion::components::LocomotionState;
use crate::locomotion::error::ConfigError;
use crate::locomotion::ground::{GroundSample, forward_angle, sample_ground};
use crate::locomotion::horizontal::{
    MOTION_SPEED, displacement, smooth_blend, smooth_speed, steer, target_speed,
};
use crate::locomotion::resources::{LocomotionTuning, MovementApplication};
use crate::locomotion::vertical::integrate_vertical;

/// Everything a tick reads from outside the state.
pub struct TickFrame<'a> {
    pub ground: GroundSample,
    pub input: &'a dyn InputCapabilities,
    pub heading_yaw: f32,
    pub body: BodySnapshot,
    pub current_action: Option<ActionProgress>,
}

/// Everything a tick asks its collaborators to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickCommands {
    pub body: BodyCommand,
    pub orientation: Option<Orientation>,
    pub params: AnimationParams,
}

/// Advance `state` by `dt` seconds. No collaborator is touched; the returned
/// commands describe the writes.
pub fn tick(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    frame: &TickFrame<'_>,
    dt: f32,
) -> TickCommands {
    resolve_ground(state, tuning, frame);

    integrate_vertical(state, tuning, frame.input.is_held(ActionId::Jump), dt);

    let in_flight = attack_in_flight(
        frame.current_action.as_ref(),
        &tuning.attack_states,
        tuning.uniform_attack_progress_check,
    );
    state.attack.update(
        in_flight,
        frame.input.is_held(ActionId::Attack),
        tuning.attack_retrigger_timeout,
        dt,
    );

    let (body, orientation) = move_and_rotate(state, tuning, frame, dt);

    TickCommands {
        body,
        orientation,
        params: AnimationParams {
            speed: state.animation_blend,
            motion_speed: MOTION_SPEED,
            grounded: state.grounded,
            jump_triggered: state.jump_triggered,
            free_fall: state.free_fall,
            attacking: state.attack.engaged(),
            attack_triggered: state.attack.triggered(),
        },
    }
}

fn resolve_ground(state: &mut LocomotionState, tuning: &LocomotionTuning, frame: &TickFrame<'_>) {
    if state.grounded != frame.ground.grounded {
        if frame.ground.grounded {
            debug!("Landed: vertical_velocity={}", state.vertical_velocity);
        } else {
            debug!("Left ground: vertical_velocity={}", state.vertical_velocity);
        }
    }
    state.grounded = frame.ground.grounded;

    state.forward_angle = if tuning.use_slope_correction {
        forward_angle(frame.body.yaw_degrees, frame.ground.normal)
    } else {
        0.0
    };
}

fn move_and_rotate(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    frame: &TickFrame<'_>,
    dt: f32,
) -> (BodyCommand, Option<Orientation>) {
    let target = target_speed(tuning, frame.input);
    let t = tuning.speed_change_rate * dt;
    smooth_speed(state, frame.body.planar_speed(), target, t);
    smooth_blend(state, target, t);

    let orientation = steer(
        state,
        tuning,
        frame.input.read_vector(ActionId::Move),
        frame.heading_yaw,
        frame.body.yaw_degrees,
        dt,
    );

    let delta = displacement(state, dt);
    let command = match tuning.application {
        MovementApplication::PositionDelta => BodyCommand::Translate(delta),
        MovementApplication::Velocity if state.grounded => {
            if dt > 0.0 {
                BodyCommand::SetVelocity(delta / dt)
            } else {
                BodyCommand::Translate(Vec3::ZERO)
            }
        }
        MovementApplication::Velocity => BodyCommand::Coast {
            planar_damping: tuning.airborne_drag,
            vertical_velocity: state.vertical_velocity,
        },
    };

    (command, orientation)
}

/// Run one full tick against live collaborators: probe the ground, advance
/// the state, then write the body and the animation parameters.
#[allow(clippy::too_many_arguments)]
pub fn step(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    dt: f32,
    probe: &dyn GroundProbe,
    input: &dyn InputCapabilities,
    heading: &dyn HeadingReference,
    body: &mut dyn PhysicsBody,
    sink: &mut dyn AnimationSink,
) -> TickCommands {
    let snapshot = body.snapshot();
    let frame = TickFrame {
        ground: sample_ground(probe, snapshot.position, &tuning.probe, tuning.use_slope_correction),
        input,
        heading_yaw: heading.yaw_degrees(),
        body: snapshot,
        current_action: sink.current_action(),
    };

    let commands = tick(state, tuning, &frame, dt);

    body.apply(commands.body);
    if let Some(orientation) = commands.orientation {
        body.set_orientation(orientation);
    }
    commands.params.write_to(sink);

    commands
}

/// A validated tuning profile paired with the state it drives.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    state: LocomotionState,
}

impl LocomotionController {
    /// Fails fast on a tuning that could not produce a sane tick.
    pub fn new(tuning: LocomotionTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: LocomotionState::default(),
        })
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LocomotionState {
        &mut self.state
    }

    pub fn step(
        &mut self,
        dt: f32,
        probe: &dyn GroundProbe,
        input: &dyn InputCapabilities,
        heading: &dyn HeadingReference,
        body: &mut dyn PhysicsBody,
        sink: &mut dyn AnimationSink,
    ) -> TickCommands {
        step(&mut self.state, &self.tuning, dt, probe, input, heading, body, sink)
    }
}
