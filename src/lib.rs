//! Named control bindings, deadzones and per-frame input polling for games.
//!
//! Describe each player's controls as lists of physical inputs, hand the
//! player a [`DeviceSource`](input::DeviceSource) once per frame, then ask it
//! what happened: raw and deadzone-shaped values, held/pressed/released state,
//! and which kind of device the player is using.

pub mod input;
pub mod math;
