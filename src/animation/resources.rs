//! Animation domain: clip timing data.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ClipDef {
    pub name: String,
    /// Seconds for normalized time to run from 0 to 1.
    pub duration: f32,
}

/// Attack clips played in order, one per trigger.
#[derive(Resource, Debug, Clone)]
pub struct AttackClips {
    pub combo: Vec<ClipDef>,
}

impl Default for AttackClips {
    fn default() -> Self {
        Self {
            combo: vec![
                ClipDef {
                    name: "normal_attack_1".to_string(),
                    duration: 0.45,
                },
                ClipDef {
                    name: "normal_attack_2".to_string(),
                    duration: 0.5,
                },
                ClipDef {
                    name: "normal_attack_3".to_string(),
                    duration: 0.7,
                },
            ],
        }
    }
}

impl AttackClips {
    pub fn duration_of(&self, name: &str) -> Option<f32> {
        self.combo
            .iter()
            .find(|clip| clip.name == name)
            .map(|clip| clip.duration)
    }
}
