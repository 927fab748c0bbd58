//! Locomotion domain: per-character state and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::attack::AttackGate;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, ramps, steps)
    Ground,
    /// Controlled characters
    Character,
    /// Trigger volumes - never count as support
    Sensor,
}

/// Marker for entities driven by a locomotion controller.
#[derive(Component, Debug, Default)]
#[require(LocomotionState)]
pub struct Character;

/// Everything a controller carries from one tick to the next.
///
/// Timers count down in seconds. They may go negative and are only ever reset
/// to their full value; nothing clamps them at zero.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LocomotionState {
    /// Smoothed planar speed actually applied to the body. Never negative.
    pub horizontal_speed: f32,
    /// Smoothed speed fed to the animator, snapped to 0 below 0.01.
    pub animation_blend: f32,
    pub target_rotation_deg: f32,
    /// Damper state for the yaw spring, not a physical quantity.
    pub rotation_velocity: f32,
    pub vertical_velocity: f32,
    /// Pitch that tilts the movement direction onto the ground plane.
    pub forward_angle: f32,
    pub grounded: bool,
    pub jump_retrigger_timeout: f32,
    pub fall_timeout: f32,
    pub jump_triggered: bool,
    pub free_fall: bool,
    pub attack: AttackGate,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            horizontal_speed: 0.0,
            animation_blend: 0.0,
            target_rotation_deg: 0.0,
            rotation_velocity: 0.0,
            vertical_velocity: 0.0,
            forward_angle: 0.0,
            grounded: true,
            jump_retrigger_timeout: 0.0,
            fall_timeout: 0.0,
            jump_triggered: false,
            free_fall: false,
            attack: AttackGate::default(),
        }
    }
}

/// Velocity a position-driven body moved at during its last tick.
///
/// Bodies moved by `Translate` commands never gain solver velocity, so the
/// controller reads its planar speed from here instead.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ImpliedVelocity(pub Vec3);
