//! Locomotion domain: configuration faults raised before the first tick.

use thiserror::Error;

/// Fatal configuration problems. Ticks never produce these; they surface when
/// a controller is built or a character entity is validated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tuning field `{field}` must be {requirement}, got {value}")]
    InvalidTuning {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
    #[error("attack state names must be non-empty (slot {slot})")]
    EmptyAttackState { slot: usize },
    #[error("character {entity} is missing required collaborator `{collaborator}`")]
    MissingCollaborator {
        entity: String,
        collaborator: &'static str,
    },
    #[error("unknown locomotion profile `{0}`")]
    UnknownProfile(String),
}
