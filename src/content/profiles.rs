//! Content domain: locomotion profiles keyed by id.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::{ConfigError, LocomotionTuning};

pub const RUNNING: &str = "running";
pub const ARENA: &str = "arena";
pub const SKATEBOARD: &str = "skateboard";

/// On-disk layout of `locomotion.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileFile {
    pub schema_version: u32,
    pub default_profile: String,
    pub profiles: Vec<ProfileDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileDef {
    pub id: String,
    pub tuning: LocomotionTuning,
}

/// Validated tuning profiles available to spawned characters.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionProfiles {
    pub default_profile: String,
    profiles: HashMap<String, LocomotionTuning>,
}

impl Default for LocomotionProfiles {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocomotionProfiles {
    /// The three controller variants with their stock constants.
    pub fn builtin() -> Self {
        let profiles = HashMap::from([
            (RUNNING.to_string(), LocomotionTuning::running()),
            (ARENA.to_string(), LocomotionTuning::arena()),
            (SKATEBOARD.to_string(), LocomotionTuning::skateboard()),
        ]);
        Self {
            default_profile: RUNNING.to_string(),
            profiles,
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, tuning: LocomotionTuning) {
        self.profiles.insert(id.into(), tuning);
    }

    pub fn get(&self, id: &str) -> Result<&LocomotionTuning, ConfigError> {
        self.profiles
            .get(id)
            .ok_or_else(|| ConfigError::UnknownProfile(id.to_string()))
    }

    pub fn default_tuning(&self) -> Result<&LocomotionTuning, ConfigError> {
        self.get(&self.default_profile)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
