//! Locomotion domain: contracts for the collaborators a controller talks to.
//!
//! The controller core only sees these traits and plain value types, so it can
//! be driven by the ECS adapters in `systems` or by hand-written fakes in tests.

use bevy::prelude::*;

/// Named actions the controller queries; device bindings live elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Move,
    Sprint,
    Walk,
    Jump,
    Attack,
}

pub trait InputCapabilities {
    /// Whether the action is currently held.
    fn is_held(&self, action: ActionId) -> bool;
    /// Current analog value of a vector action; zero for buttons.
    fn read_vector(&self, action: ActionId) -> Vec2;
}

/// Environment queries against the shared physical world.
pub trait GroundProbe {
    /// Solid (non-trigger) overlap test against colliders in `mask`.
    fn overlap_sphere(&self, center: Vec3, radius: f32, mask: u32) -> bool;
    /// Surface normal of the first solid hit straight below `origin`.
    fn raycast_down(&self, origin: Vec3, max_distance: f32, mask: u32) -> Option<Vec3>;
}

/// Source of the camera-relative heading.
pub trait HeadingReference {
    /// Yaw in degrees, clockwise seen from above, 0 looking down -Z.
    fn yaw_degrees(&self) -> f32;
}

impl HeadingReference for f32 {
    fn yaw_degrees(&self) -> f32 {
        *self
    }
}

impl HeadingReference for Transform {
    fn yaw_degrees(&self) -> f32 {
        yaw_of(self.rotation)
    }
}

/// Yaw of a rotation in the controller's convention, wrapped to [0, 360).
pub fn yaw_of(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::NEG_Z;
    forward.x.atan2(-forward.z).to_degrees().rem_euclid(360.0)
}

/// Read-only view of the physical body at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodySnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw_degrees: f32,
}

impl BodySnapshot {
    pub fn planar_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}

/// What the body should do with this tick's motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyCommand {
    /// Move the body by this world-space offset.
    Translate(Vec3),
    /// Replace the body velocity.
    SetVelocity(Vec3),
    /// Keep planar momentum scaled by `planar_damping` and take the vertical velocity.
    Coast {
        planar_damping: f32,
        vertical_velocity: f32,
    },
}

/// Rendered rotation: yaw plus an optional lean around the forward axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub yaw_degrees: f32,
    pub roll_degrees: f32,
}

impl Orientation {
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_y(-self.yaw_degrees.to_radians())
            * Quat::from_rotation_z(self.roll_degrees.to_radians())
    }
}

pub trait PhysicsBody {
    fn snapshot(&self) -> BodySnapshot;
    fn apply(&mut self, command: BodyCommand);
    fn set_orientation(&mut self, orientation: Orientation);
}

/// The animation state currently playing and how far through it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionProgress {
    pub name: String,
    /// 0 at the start of the clip, 1 at its end; may exceed 1 while looping out.
    pub normalized_time: f32,
}

pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_float(&mut self, name: &str, value: f32);
    fn current_action(&self) -> Option<ActionProgress>;
}

pub const PARAM_SPEED: &str = "Speed";
pub const PARAM_MOTION_SPEED: &str = "MotionSpeed";
pub const PARAM_GROUNDED: &str = "Grounded";
pub const PARAM_JUMP_TRIGGERED: &str = "JumpTriggered";
pub const PARAM_FREE_FALL: &str = "FreeFall";
pub const PARAM_ATTACKING: &str = "Attacking";
pub const PARAM_ATTACK_TRIGGERED: &str = "AttackTriggered";

/// Every animation parameter the controller owns, written once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationParams {
    pub speed: f32,
    /// Reserved for analog stick magnitude; always 1.
    pub motion_speed: f32,
    pub grounded: bool,
    pub jump_triggered: bool,
    pub free_fall: bool,
    pub attacking: bool,
    pub attack_triggered: bool,
}

impl AnimationParams {
    pub fn write_to<S: AnimationSink + ?Sized>(&self, sink: &mut S) {
        sink.set_float(PARAM_SPEED, self.speed);
        sink.set_float(PARAM_MOTION_SPEED, self.motion_speed);
        sink.set_bool(PARAM_GROUNDED, self.grounded);
        sink.set_bool(PARAM_JUMP_TRIGGERED, self.jump_triggered);
        sink.set_bool(PARAM_FREE_FALL, self.free_fall);
        sink.set_bool(PARAM_ATTACKING, self.attacking);
        sink.set_bool(PARAM_ATTACK_TRIGGERED, self.attack_triggered);
    }
}
