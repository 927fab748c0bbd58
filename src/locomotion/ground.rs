//! Locomotion domain: ground contact and slope resolution.

use bevy::prelude::*;

use crate::locomotion::collaborators::GroundProbe;
use crate::locomotion::resources::ProbeSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSample {
    pub grounded: bool,
    /// Surface normal below the character; world up when the ray missed.
    pub normal: Vec3,
}

impl Default for GroundSample {
    fn default() -> Self {
        Self {
            grounded: true,
            normal: Vec3::Y,
        }
    }
}

/// Query the probe for support and surface orientation.
///
/// The slope ray is skipped when `cast_ray` is false; the normal then stays
/// world up. A missed ray is not an error.
pub fn sample_ground<P: GroundProbe + ?Sized>(
    probe: &P,
    position: Vec3,
    settings: &ProbeSettings,
    cast_ray: bool,
) -> GroundSample {
    let sphere_center = position + Vec3::Y * settings.grounded_offset;
    let grounded =
        probe.overlap_sphere(sphere_center, settings.grounded_radius, settings.ground_mask);

    let normal = if cast_ray {
        probe
            .raycast_down(
                position + Vec3::Y * settings.ray_origin_height,
                settings.ray_length,
                settings.ground_mask,
            )
            .and_then(|n| n.try_normalize())
            .unwrap_or(Vec3::Y)
    } else {
        Vec3::Y
    };

    GroundSample { grounded, normal }
}

/// Pitch, in degrees, between the forward vector of a character facing
/// `yaw_degrees` and that vector projected onto the plane of `normal`.
/// Positive when the ground rises ahead.
pub fn forward_angle(yaw_degrees: f32, normal: Vec3) -> f32 {
    let facing = Quat::from_rotation_y(-yaw_degrees.to_radians());
    let forward = facing * Vec3::NEG_Z;
    let right = facing * Vec3::X;
    let normal = normal.normalize_or(Vec3::Y);
    let projection = forward.reject_from_normalized(normal).normalize_or_zero();
    signed_angle(forward, projection, right)
}

/// Signed angle in degrees from `from` to `to` around `axis`.
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    if from.length_squared() <= f32::EPSILON || to.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    let cross = from.cross(to);
    let unsigned = cross.length().atan2(from.dot(to)).to_degrees();
    if cross.dot(axis) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}
