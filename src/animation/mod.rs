//! Animation domain: parameter sink and the attack clips the gate watches.

mod components;
mod resources;
mod systems;


pub use components::{AnimParam, Animator, ClipPlayer};
pub use resources::{AttackClips, ClipDef};

use bevy::prelude::*;

use crate::animation::systems::advance_action_clips;
use crate::locomotion::LocomotionSet;

pub struct AnimatorPlugin;

impl Plugin for AnimatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackClips>().add_systems(
            FixedUpdate,
            advance_action_clips.after(LocomotionSet::Drive),
        );
    }
}
