//! Core domain: camera setup and follow systems.

use bevy::prelude::*;

use crate::core::components::{CameraTarget, FollowCamera};
use crate::locomotion::HeadingSource;

pub(crate) fn setup_camera(mut commands: Commands) {
    let camera = FollowCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera_offset(&camera)).looking_at(Vec3::ZERO, Vec3::Y),
        camera,
        HeadingSource,
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn orbit_camera(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cameras: Query<&mut FollowCamera>,
) {
    let mut direction = 0.0;
    if keyboard.pressed(KeyCode::KeyQ) {
        direction -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        direction += 1.0;
    }
    if direction == 0.0 {
        return;
    }

    for mut camera in &mut cameras {
        let step = direction * camera.orbit_speed * time.delta_secs();
        camera.yaw_degrees = (camera.yaw_degrees + step).rem_euclid(360.0);
    }
}

pub(crate) fn follow_target(
    targets: Query<&Transform, (With<CameraTarget>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(target) = targets.single() else {
        return;
    };
    let focus = target.translation + Vec3::Y;

    for (camera, mut transform) in &mut cameras {
        *transform =
            Transform::from_translation(focus + camera_offset(camera)).looking_at(focus, Vec3::Y);
    }
}

/// Offset from the focus point to the camera, behind the camera's heading.
pub(crate) fn camera_offset(camera: &FollowCamera) -> Vec3 {
    let heading = Quat::from_rotation_y(-camera.yaw_degrees.to_radians());
    let pitch = camera.pitch_degrees.to_radians();
    let back = heading * Vec3::Z;
    (back * pitch.cos() + Vec3::Y * pitch.sin()) * camera.distance
}
