//! Locomotion domain: tuning profiles and the sampled action input.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::collaborators::{ActionId, InputCapabilities};
use crate::locomotion::components::GameLayer;
use crate::locomotion::error::ConfigError;
use crate::locomotion::horizontal::is_neutral;

use avian3d::prelude::PhysicsLayer;

/// How a tick's displacement reaches the physical body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum MovementApplication {
    /// Add the displacement straight onto the body position.
    #[default]
    PositionDelta,
    /// Drive the body velocity while grounded; coast with drag while airborne.
    Velocity,
}

/// Ground probe placement relative to the character origin.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Vertical offset of the overlap sphere centre.
    pub grounded_offset: f32,
    pub grounded_radius: f32,
    /// Height above the origin the slope ray starts from.
    pub ray_origin_height: f32,
    pub ray_length: f32,
    /// Collision layer bits counted as ground.
    pub ground_mask: u32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            grounded_offset: -0.1,
            grounded_radius: 0.3,
            ray_origin_height: 1.0,
            ray_length: 5.0,
            ground_mask: GameLayer::Ground.to_bits(),
        }
    }
}

/// Per-character configuration record. One controller covers the running,
/// arena and skateboard variants through these switches.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub move_speed: f32,
    /// `None` disables the walk action.
    pub walk_speed: Option<f32>,
    pub sprint_speed: f32,
    pub rotation_smooth_time: f32,
    pub speed_change_rate: f32,
    pub jump_height: f32,
    /// Negative: units per second squared.
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub jump_retrigger_timeout: f32,
    pub fall_timeout: f32,
    pub attack_retrigger_timeout: f32,
    pub probe: ProbeSettings,
    pub use_slope_correction: bool,
    pub rotate_only_when_grounded: bool,
    pub lean_into_turns: bool,
    pub application: MovementApplication,
    /// Planar velocity multiplier per airborne tick in `Velocity` mode.
    pub airborne_drag: f32,
    pub attack_states: [String; 3],
    /// Apply the progress check to every attack state instead of only the third.
    pub uniform_attack_progress_check: bool,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self::arena()
    }
}

impl LocomotionTuning {
    /// Slope-hugging runner driven through body velocity.
    pub fn running() -> Self {
        Self {
            move_speed: 24.0,
            walk_speed: Some(6.0),
            sprint_speed: 100.0,
            jump_height: 1.4,
            probe: ProbeSettings::default(),
            use_slope_correction: true,
            rotate_only_when_grounded: true,
            application: MovementApplication::Velocity,
            ..Self::arena()
        }
    }

    /// Flat-ground arena fighter moved by position deltas.
    pub fn arena() -> Self {
        Self {
            move_speed: 6.0,
            walk_speed: None,
            sprint_speed: 20.0,
            rotation_smooth_time: 0.12,
            speed_change_rate: 10.0,
            jump_height: 1.2,
            gravity: -15.0,
            terminal_velocity: 53.0,
            jump_retrigger_timeout: 0.5,
            fall_timeout: 0.15,
            attack_retrigger_timeout: 0.5,
            probe: ProbeSettings {
                grounded_offset: 0.0,
                ..ProbeSettings::default()
            },
            use_slope_correction: false,
            rotate_only_when_grounded: false,
            lean_into_turns: false,
            application: MovementApplication::PositionDelta,
            airborne_drag: 0.95,
            attack_states: [
                "normal_attack_1".to_string(),
                "normal_attack_2".to_string(),
                "normal_attack_3".to_string(),
            ],
            uniform_attack_progress_check: false,
        }
    }

    /// Board rider that leans into turns.
    pub fn skateboard() -> Self {
        Self {
            move_speed: 40.0,
            sprint_speed: 80.0,
            speed_change_rate: 8.0,
            probe: ProbeSettings {
                grounded_offset: -0.14,
                grounded_radius: 0.1,
                ..ProbeSettings::default()
            },
            lean_into_turns: true,
            ..Self::arena()
        }
    }

    /// Launch speed that reaches `jump_height` under `gravity`.
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(
            field: &'static str,
            value: f32,
            requirement: &'static str,
            ok: bool,
        ) -> Result<(), ConfigError> {
            if ok && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::InvalidTuning {
                    field,
                    requirement,
                    value,
                })
            }
        }

        let non_negative = "finite and >= 0";
        check("move_speed", self.move_speed, non_negative, self.move_speed >= 0.0)?;
        if let Some(walk) = self.walk_speed {
            check("walk_speed", walk, non_negative, walk >= 0.0)?;
        }
        check("sprint_speed", self.sprint_speed, non_negative, self.sprint_speed >= 0.0)?;
        check(
            "rotation_smooth_time",
            self.rotation_smooth_time,
            non_negative,
            self.rotation_smooth_time >= 0.0,
        )?;
        check(
            "speed_change_rate",
            self.speed_change_rate,
            non_negative,
            self.speed_change_rate >= 0.0,
        )?;
        check("jump_height", self.jump_height, non_negative, self.jump_height >= 0.0)?;
        check("gravity", self.gravity, "finite and < 0", self.gravity < 0.0)?;
        check(
            "terminal_velocity",
            self.terminal_velocity,
            "finite and > 0",
            self.terminal_velocity > 0.0,
        )?;
        check(
            "jump_retrigger_timeout",
            self.jump_retrigger_timeout,
            non_negative,
            self.jump_retrigger_timeout >= 0.0,
        )?;
        check("fall_timeout", self.fall_timeout, non_negative, self.fall_timeout >= 0.0)?;
        check(
            "attack_retrigger_timeout",
            self.attack_retrigger_timeout,
            non_negative,
            self.attack_retrigger_timeout >= 0.0,
        )?;
        check(
            "probe.grounded_radius",
            self.probe.grounded_radius,
            "finite and > 0",
            self.probe.grounded_radius > 0.0,
        )?;
        check(
            "probe.ray_length",
            self.probe.ray_length,
            non_negative,
            self.probe.ray_length >= 0.0,
        )?;
        check(
            "airborne_drag",
            self.airborne_drag,
            "within [0, 1]",
            (0.0..=1.0).contains(&self.airborne_drag),
        )?;

        for (slot, name) in self.attack_states.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::EmptyAttackState { slot });
            }
        }

        Ok(())
    }
}

/// Device-independent snapshot of the held actions for this frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionInput {
    pub move_axis: Vec2,
    pub sprint: bool,
    pub walk: bool,
    pub jump: bool,
    pub attack: bool,
}

impl InputCapabilities for ActionInput {
    fn is_held(&self, action: ActionId) -> bool {
        match action {
            ActionId::Move => !is_neutral(self.move_axis),
            ActionId::Sprint => self.sprint,
            ActionId::Walk => self.walk,
            ActionId::Jump => self.jump,
            ActionId::Attack => self.attack,
        }
    }

    fn read_vector(&self, action: ActionId) -> Vec2 {
        match action {
            ActionId::Move => self.move_axis,
            _ => Vec2::ZERO,
        }
    }
}
