//! Locomotion domain: attack gating against the playing animation.

use bevy::prelude::*;

use crate::locomotion::collaborators::ActionProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackPhase {
    /// Nothing in flight; the re-trigger timeout counts down.
    #[default]
    Idle,
    /// Trigger raised, waiting for the animation to start.
    Triggered,
    /// An attack animation is playing.
    Attacking,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttackGate {
    pub phase: AttackPhase,
    pub retrigger_timeout: f32,
}

impl AttackGate {
    /// An attack animation is in flight. The trigger is never raised here.
    pub fn attacking(&self) -> bool {
        self.phase == AttackPhase::Attacking
    }

    /// Raised trigger or playing animation; what the `Attacking` parameter shows.
    pub fn engaged(&self) -> bool {
        self.phase != AttackPhase::Idle
    }

    pub fn triggered(&self) -> bool {
        self.phase == AttackPhase::Triggered
    }

    /// Advance one tick. `in_flight` says whether an attack clip is playing.
    pub fn update(&mut self, in_flight: bool, attack_held: bool, full_timeout: f32, dt: f32) {
        if in_flight {
            if self.phase != AttackPhase::Attacking {
                debug!("Attack animation playing, trigger cleared");
            }
            self.phase = AttackPhase::Attacking;
            self.retrigger_timeout = full_timeout;
            return;
        }

        if self.phase == AttackPhase::Attacking {
            self.phase = AttackPhase::Idle;
        }

        if attack_held && self.retrigger_timeout <= 0.0 && self.phase == AttackPhase::Idle {
            self.phase = AttackPhase::Triggered;
            debug!("Attack triggered");
        }

        if self.retrigger_timeout >= 0.0 {
            self.retrigger_timeout -= dt;
        }
    }
}

/// Whether `action` is one of the three attack states still in flight.
///
/// Only the third state is checked against its progress unless `uniform` is
/// set; the first two count as in flight for as long as they are current.
pub fn attack_in_flight(
    action: Option<&ActionProgress>,
    states: &[String; 3],
    uniform: bool,
) -> bool {
    let Some(action) = action else {
        return false;
    };
    let unfinished = action.normalized_time < 1.0;

    if uniform {
        states.iter().any(|name| action.name == *name) && unfinished
    } else {
        action.name == states[0]
            || action.name == states[1]
            || (action.name == states[2] && unfinished)
    }
}
