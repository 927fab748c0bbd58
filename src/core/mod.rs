//! Core domain: camera and scene plumbing shared by every character.

mod components;
mod systems;

pub use components::{CameraTarget, FollowCamera};

use bevy::prelude::*;

use crate::core::systems::{follow_target, orbit_camera, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (orbit_camera, follow_target).chain());
    }
}
