//! Locomotion domain: collaborator validation and the fixed-step drive.

use std::collections::HashSet;

use avian3d::prelude::*;
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

use crate::animation::Animator;
use crate::locomotion::HeadingSource;
use crate::locomotion::collaborators::HeadingReference;
use crate::locomotion::components::{Character, ImpliedVelocity, LocomotionState};
use crate::locomotion::controller::step;
use crate::locomotion::error::ConfigError;
use crate::locomotion::resources::{ActionInput, LocomotionTuning};
use crate::locomotion::systems::body::BodyHandle;
use crate::locomotion::systems::probe::AvianGroundProbe;

/// Reject freshly spawned characters that lack a collaborator or carry a bad
/// tuning, before their first tick runs.
pub(crate) fn ensure_character_collaborators(
    query: Query<
        (
            Entity,
            Option<&LocomotionTuning>,
            Has<Animator>,
            Has<RigidBody>,
            Has<LinearVelocity>,
        ),
        Added<Character>,
    >,
) -> Result {
    for (entity, tuning, has_animator, has_body, has_velocity) in &query {
        let missing = if tuning.is_none() {
            Some("LocomotionTuning")
        } else if !has_body {
            Some("RigidBody")
        } else if !has_velocity {
            Some("LinearVelocity")
        } else if !has_animator {
            Some("Animator")
        } else {
            None
        };

        if let Some(collaborator) = missing {
            error!("Character {} cannot tick without {}", entity, collaborator);
            return Err(ConfigError::MissingCollaborator {
                entity: entity.to_string(),
                collaborator,
            }
            .into());
        }

        if let Some(tuning) = tuning {
            tuning.validate()?;
        }
        debug!("Character {} validated", entity);
    }
    Ok(())
}

pub(crate) fn drive_locomotion(
    time: Res<Time>,
    input: Res<ActionInput>,
    spatial: SpatialQuery,
    sensors: Query<Entity, With<Sensor>>,
    headings: Query<&Transform, (With<HeadingSource>, Without<Character>)>,
    mut characters: Query<
        (
            Entity,
            &LocomotionTuning,
            &mut LocomotionState,
            &mut Transform,
            &mut LinearVelocity,
            Option<&mut ImpliedVelocity>,
            &mut Animator,
        ),
        With<Character>,
    >,
) {
    let dt = time.delta_secs();
    let sensors: HashSet<Entity> = sensors.iter().collect();
    // Without a single heading source the stick is read in world space.
    let heading = match headings.single() {
        Ok(transform) => transform.yaw_degrees(),
        Err(QuerySingleError::MultipleEntities(_)) => {
            warn_once!("Several HeadingSource entities found, reading the stick in world space");
            0.0
        }
        Err(_) => 0.0,
    };

    for (entity, tuning, mut state, mut transform, mut velocity, implied, mut animator) in
        &mut characters
    {
        let probe = AvianGroundProbe {
            spatial: &spatial,
            sensors: &sensors,
            character: entity,
        };
        let mut body = BodyHandle {
            transform: &mut *transform,
            velocity: &mut *velocity,
            implied: implied.map(|implied| implied.into_inner()),
            dt,
        };

        step(
            &mut state,
            tuning,
            dt,
            &probe,
            &*input,
            &heading,
            &mut body,
            &mut *animator,
        );
    }
}
