//! Animation domain: advancing attack clips from the trigger parameter.

use bevy::prelude::*;

use crate::animation::components::{Animator, ClipPlayer};
use crate::animation::resources::AttackClips;
use crate::locomotion::collaborators::PARAM_ATTACK_TRIGGERED;

pub(crate) fn advance_action_clips(
    time: Res<Time>,
    clips: Res<AttackClips>,
    mut query: Query<(Entity, &mut Animator, &mut ClipPlayer)>,
) {
    let dt = time.delta_secs();
    for (entity, mut animator, mut player) in &mut query {
        advance_clip(&mut animator, &mut player, &clips, dt);
        if let Some(action) = animator.current() {
            trace!("{}: {} at {:.2}", entity, action.name, action.normalized_time);
        }
    }
}

/// Progress the playing clip, ending it at normalized time 1, or start the
/// next combo clip when the trigger is raised and nothing plays.
pub(crate) fn advance_clip(
    animator: &mut Animator,
    player: &mut ClipPlayer,
    clips: &AttackClips,
    dt: f32,
) {
    if let Some(action) = animator.current_mut() {
        let duration = clips.duration_of(&action.name).unwrap_or(1.0).max(f32::EPSILON);
        action.normalized_time += dt / duration;
        if action.normalized_time >= 1.0 {
            animator.stop();
        }
        return;
    }

    if animator.bool(PARAM_ATTACK_TRIGGERED) && !clips.combo.is_empty() {
        let clip = &clips.combo[player.combo_index % clips.combo.len()];
        debug!("Playing {}", clip.name);
        animator.play(clip.name.clone());
        player.combo_index = (player.combo_index + 1) % clips.combo.len();
    }
}
