//! Locomotion domain: the physics body seen through `PhysicsBody`.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::collaborators::{BodyCommand, BodySnapshot, Orientation, PhysicsBody, yaw_of};
use crate::locomotion::components::ImpliedVelocity;

pub(crate) struct BodyHandle<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut LinearVelocity,
    /// Present on position-driven bodies.
    pub implied: Option<&'a mut ImpliedVelocity>,
    pub dt: f32,
}

impl PhysicsBody for BodyHandle<'_> {
    fn snapshot(&self) -> BodySnapshot {
        let velocity = match &self.implied {
            Some(implied) => implied.0,
            None => self.velocity.0,
        };
        BodySnapshot {
            position: self.transform.translation,
            velocity,
            yaw_degrees: yaw_of(self.transform.rotation),
        }
    }

    fn apply(&mut self, command: BodyCommand) {
        match command {
            BodyCommand::Translate(delta) => {
                self.transform.translation += delta;
                if let Some(implied) = self.implied.as_deref_mut() {
                    implied.0 = if self.dt > 0.0 { delta / self.dt } else { Vec3::ZERO };
                }
            }
            BodyCommand::SetVelocity(velocity) => {
                self.velocity.0 = velocity;
            }
            BodyCommand::Coast {
                planar_damping,
                vertical_velocity,
            } => {
                self.velocity.x *= planar_damping;
                self.velocity.z *= planar_damping;
                self.velocity.y = vertical_velocity;
            }
        }
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.transform.rotation = orientation.to_quat();
    }
}
