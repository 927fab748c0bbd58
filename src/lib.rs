//! Per-character locomotion and action controller.
//!
//! Each tick a character samples the ground, integrates jump and gravity,
//! gates attacks against the playing animation, then smooths speed and yaw
//! toward the camera-relative stick and writes the result to its body and
//! animator.

pub mod animation;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod dev;
pub mod locomotion;
