//! Locomotion domain: ECS systems binding the controller to Bevy and avian3d.

pub(crate) mod body;
pub(crate) mod drive;
pub(crate) mod input;
pub(crate) mod probe;

pub(crate) use drive::{drive_locomotion, ensure_character_collaborators};
pub(crate) use input::read_action_input;
