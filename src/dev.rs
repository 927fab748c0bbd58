//! Dev tools: a test scene and a controllable character.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{Animator, ClipPlayer};
use crate::content::LocomotionProfiles;
use crate::core::CameraTarget;
use crate::locomotion::{Character, GameLayer, ImpliedVelocity, MovementApplication};

pub struct DevPlugin;

impl Plugin for DevPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_test_room, spawn_character));
    }
}

/// Spawn the character with the default profile.
pub(crate) fn spawn_character(
    mut commands: Commands,
    profiles: Res<LocomotionProfiles>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) -> Result {
    let tuning = profiles.default_tuning()?.clone();
    info!(
        "Spawning character: profile={}, move={}, sprint={}, application={:?}",
        profiles.default_profile, tuning.move_speed, tuning.sprint_speed, tuning.application
    );

    let position_driven = tuning.application == MovementApplication::PositionDelta;
    let mut character = commands.spawn((
        // Identity & Locomotion
        (Character, tuning, CameraTarget),
        // Animation
        (Animator::default(), ClipPlayer::default()),
        Transform::from_xyz(0.0, 0.5, 0.0),
        Visibility::default(),
        // Physics
        (
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller integrates gravity itself
            Friction::new(0.0),
        ),
        children![(
            Collider::capsule(0.3, 1.0),
            CollisionLayers::new(GameLayer::Character, [GameLayer::Ground]),
            Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
            // Origin sits at the feet
            Transform::from_xyz(0.0, 0.8, 0.0),
        )],
    ));
    if position_driven {
        character.insert(ImpliedVelocity::default());
    }

    Ok(())
}

pub(crate) fn spawn_test_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let ramp_color = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let plate_color = materials.add(Color::srgba(0.3, 0.3, 0.8, 0.4));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Character]);

    // Ground
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(60.0, 1.0, 60.0))),
        MeshMaterial3d(ground_color.clone()),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(60.0, 1.0, 60.0),
        ground_layers,
    ));

    // Ramp - 20 degree incline ahead of spawn
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(6.0, 0.5, 12.0))),
        MeshMaterial3d(ramp_color.clone()),
        Transform::from_xyz(0.0, 1.6, -12.0)
            .with_rotation(Quat::from_rotation_x(20f32.to_radians())),
        RigidBody::Static,
        Collider::cuboid(6.0, 0.5, 12.0),
        ground_layers,
    ));

    // Step - small ledge for the fall grace period
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(4.0, 0.25, 4.0))),
        MeshMaterial3d(ramp_color),
        Transform::from_xyz(8.0, 0.125, 0.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 0.25, 4.0),
        ground_layers,
    ));

    // Trigger plate on the ground layer - the probe must ignore it
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(3.0, 3.0, 3.0))),
        MeshMaterial3d(plate_color),
        Transform::from_xyz(-8.0, 1.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(3.0, 3.0, 3.0),
        Sensor,
        ground_layers,
    ));
}
