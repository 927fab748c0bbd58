//! Core domain: the follow camera.

use bevy::prelude::*;

/// Orbiting camera that trails the tracked character.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    /// Clockwise yaw around the target, degrees.
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub distance: f32,
    /// Degrees per second while an orbit key is held.
    pub orbit_speed: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            yaw_degrees: 0.0,
            pitch_degrees: 25.0,
            distance: 9.0,
            orbit_speed: 90.0,
        }
    }
}

/// The character the camera follows.
#[derive(Component, Debug)]
pub struct CameraTarget;
