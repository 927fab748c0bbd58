//! Locomotion domain: per-character movement, jump and attack gating.

pub mod attack;
pub mod collaborators;
mod components;
pub mod controller;
mod error;
pub mod ground;
pub mod horizontal;
mod resources;
mod systems;
pub mod vertical;


pub use attack::{AttackGate, AttackPhase};
pub use collaborators::{
    ActionId, ActionProgress, AnimationParams, AnimationSink, BodyCommand, BodySnapshot,
    GroundProbe, HeadingReference, InputCapabilities, Orientation, PhysicsBody,
};
pub use components::{Character, GameLayer, ImpliedVelocity, LocomotionState};
pub use controller::{LocomotionController, TickCommands, TickFrame, step, tick};
pub use error::ConfigError;
pub use ground::GroundSample;
pub use resources::{ActionInput, LocomotionTuning, MovementApplication, ProbeSettings};

use bevy::prelude::*;

use crate::locomotion::systems::{
    drive_locomotion, ensure_character_collaborators, read_action_input,
};

/// Marks the entity whose yaw the move stick is read relative to.
#[derive(Component, Debug, Default)]
pub struct HeadingSource;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Validate,
    Drive,
}

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionInput>()
            .configure_sets(
                FixedUpdate,
                (LocomotionSet::Validate, LocomotionSet::Drive).chain(),
            )
            .add_systems(Update, read_action_input)
            .add_systems(
                FixedUpdate,
                ensure_character_collaborators.in_set(LocomotionSet::Validate),
            )
            .add_systems(FixedUpdate, drive_locomotion.in_set(LocomotionSet::Drive));
    }
}
