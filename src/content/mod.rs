//! Content domain: data-driven locomotion profiles.

mod loader;
mod profiles;


pub use loader::{ContentLoadError, SCHEMA_VERSION, load_profiles, parse_profiles};
pub use profiles::{ARENA, LocomotionProfiles, ProfileDef, ProfileFile, RUNNING, SKATEBOARD};

use std::path::{Path, PathBuf};

use bevy::prelude::*;

pub const DEFAULT_PROFILE_PATH: &str = "assets/data/locomotion.ron";

/// Where the profile file is read from.
#[derive(Resource, Debug, Clone)]
pub struct ProfilePath(pub PathBuf);

impl Default for ProfilePath {
    fn default() -> Self {
        Self(PathBuf::from(DEFAULT_PROFILE_PATH))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProfilePath>()
            .init_resource::<LocomotionProfiles>()
            .add_systems(PreStartup, load_locomotion_profiles);
    }
}

/// A missing file keeps the built-in profiles; a broken one stops startup.
fn load_locomotion_profiles(
    path: Res<ProfilePath>,
    mut profiles: ResMut<LocomotionProfiles>,
) -> Result {
    if !Path::new(&path.0).exists() {
        warn!(
            "Locomotion profiles not found at {:?}, using built-in profiles",
            path.0
        );
        return Ok(());
    }

    *profiles = load_profiles(&path.0)?;
    info!(
        "Loaded {} locomotion profiles (default: {})",
        profiles.len(),
        profiles.default_profile
    );
    Ok(())
}
