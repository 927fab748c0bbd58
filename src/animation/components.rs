//! Animation domain: the per-character parameter table and clip player.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::locomotion::{ActionProgress, AnimationSink};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimParam {
    Bool(bool),
    Float(f32),
}

/// Named animation parameters plus the action currently playing.
#[derive(Component, Debug, Default)]
pub struct Animator {
    params: HashMap<String, AnimParam>,
    current: Option<ActionProgress>,
}

impl Animator {
    /// Unset or non-bool parameters read as false.
    pub fn bool(&self, name: &str) -> bool {
        matches!(self.params.get(name), Some(AnimParam::Bool(true)))
    }

    /// Unset or non-float parameters read as 0.
    pub fn float(&self, name: &str) -> f32 {
        match self.params.get(name) {
            Some(AnimParam::Float(value)) => *value,
            _ => 0.0,
        }
    }

    pub fn current(&self) -> Option<&ActionProgress> {
        self.current.as_ref()
    }

    pub fn play(&mut self, name: impl Into<String>) {
        self.current = Some(ActionProgress {
            name: name.into(),
            normalized_time: 0.0,
        });
    }

    pub fn stop(&mut self) {
        self.current = None;
    }

    /// Overwrite in place; only a first write allocates the key.
    fn write(&mut self, name: &str, value: AnimParam) {
        match self.params.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.params.insert(name.to_string(), value);
            }
        }
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut ActionProgress> {
        self.current.as_mut()
    }
}

impl AnimationSink for Animator {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.write(name, AnimParam::Bool(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, AnimParam::Float(value));
    }

    fn current_action(&self) -> Option<ActionProgress> {
        self.current.clone()
    }
}

/// Position in the attack combo for one character.
#[derive(Component, Debug, Default)]
pub struct ClipPlayer {
    pub combo_index: usize,
}
