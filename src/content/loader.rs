//! Loader for the locomotion profile file at startup.

use std::fs;
use std::path::Path;

use ron::Options;
use thiserror::Error;

use super::profiles::{LocomotionProfiles, ProfileFile};
use crate::locomotion::ConfigError;

/// Current `schema_version` of `locomotion.ron`.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },
    #[error("Failed to load {file}: unsupported schema_version {found} (expected {expected})")]
    Schema {
        file: String,
        found: u32,
        expected: u32,
    },
    #[error("Failed to load {file}: profile `{profile}`: {source}")]
    Invalid {
        file: String,
        profile: String,
        #[source]
        source: ConfigError,
    },
    #[error("Failed to load {file}: duplicate profile `{profile}`")]
    Duplicate { file: String, profile: String },
    #[error("Failed to load {file}: default profile `{profile}` is not defined")]
    MissingDefault { file: String, profile: String },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Read and validate a profile file from disk.
pub fn load_profiles(path: &Path) -> Result<LocomotionProfiles, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;
    parse_profiles(&contents, &file)
}

/// Parse profile file contents. `file` only labels errors.
///
/// Profiles from the file are layered over the built-in ones, so a file may
/// override `running` without restating `arena`.
pub fn parse_profiles(contents: &str, file: &str) -> Result<LocomotionProfiles, ContentLoadError> {
    let data: ProfileFile = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    if data.schema_version != SCHEMA_VERSION {
        return Err(ContentLoadError::Schema {
            file: file.to_string(),
            found: data.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let mut profiles = LocomotionProfiles::builtin();
    let mut seen = Vec::with_capacity(data.profiles.len());
    for def in data.profiles {
        if seen.contains(&def.id) {
            return Err(ContentLoadError::Duplicate {
                file: file.to_string(),
                profile: def.id,
            });
        }
        def.tuning
            .validate()
            .map_err(|source| ContentLoadError::Invalid {
                file: file.to_string(),
                profile: def.id.clone(),
                source,
            })?;
        seen.push(def.id.clone());
        profiles.insert(def.id, def.tuning);
    }

    if profiles.get(&data.default_profile).is_err() {
        return Err(ContentLoadError::MissingDefault {
            file: file.to_string(),
            profile: data.default_profile,
        });
    }
    profiles.default_profile = data.default_profile;

    Ok(profiles)
}
