// Input binding and polling system
//
// This module maps named controls ("jump", "move") to physical inputs and
// exposes a per-frame polling surface for each player.
//
// ## Architecture
//
// - `source`: Physical input sources and their `type:value` string syntax
// - `device`: The `DeviceSource` trait hosts implement, plus device categories
// - `config`: Player configuration (bindings, pairs, joystick, deadzone)
// - `deadzone`: Deadzone shaping for 1D and 2D values
// - `player`: Per-player control state, updated once per frame
// - `manager`: Several players sharing one device source
// - `backends`: Ready-made device sources (winit, gilrs, virtual)
//
// ## Usage Example
//
// ```rust
// use baton::input::{Player, PlayerConfig};
//
// let config = PlayerConfig::new()
//     .control("left", ["key:left", "key:a", "axis:leftx-", "button:dpleft"])
//     .control("right", ["key:right", "key:d", "axis:leftx+", "button:dpright"])
//     .control("up", ["key:up", "key:w", "axis:lefty-", "button:dpup"])
//     .control("down", ["key:down", "key:s", "axis:lefty+", "button:dpdown"])
//     .control("action", ["key:x", "button:a"])
//     .pair("move", ["left", "right", "up", "down"]);
// let mut player = Player::new(config)?;
//
// // Once per frame, before any queries
// player.update(&devices);
//
// let (x, y) = player.get("move")?;
// if player.pressed("action")? {
//     // Player just pressed action!
// }
// ```

pub mod backends;
pub mod config;
pub mod deadzone;
pub mod device;
pub mod manager;
pub mod player;
pub mod source;

// Re-export commonly used types
pub use config::PlayerConfig;
pub use device::{ActiveDevice, DeviceKind, DeviceSource, JoystickId, Routed};
pub use manager::InputManager;
pub use player::{ControlState, Player};
pub use source::{AxisHalf, Binding, HatDirection, InputSource, JoystickAxis, JoystickButton};

/// Malformed source string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceParseError {
    #[error("Source \"{0}\" has no type prefix (expected e.g. \"key:space\")")]
    MissingType(String),

    #[error("Source \"{0}\" has no value after the type prefix")]
    MissingValue(String),

    #[error("Unknown source type: {0}")]
    UnknownType(String),

    #[error("Invalid value in source \"{0}\"")]
    InvalidValue(String),
}

/// Invalid player configuration, reported when the player is created
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Deadzone must be in [0, 1), got {0}")]
    DeadzoneOutOfRange(f32),

    #[error("Invalid source for control \"{control}\": {source}")]
    InvalidSource {
        control: String,
        #[source]
        source: SourceParseError,
    },

    #[error("Pair \"{pair}\" must list 2 or 4 controls, got {len}")]
    PairArity { pair: String, len: usize },

    #[error("Pair \"{pair}\" references unknown control \"{control}\"")]
    UnknownPairControl { pair: String, control: String },

    #[error("\"{0}\" is defined as both a control and a pair")]
    NameCollision(String),
}

/// Query for a control or pair the player was not configured with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No control with name \"{0}\" defined")]
pub struct UnknownActionError(pub String);

/// A device could not be read this frame
///
/// Never surfaces from `Player::update`; the affected source reads as neutral.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("No joystick configured")]
    NoJoystick,

    #[error("Unknown {0}")]
    UnknownJoystick(JoystickId),

    #[error("{0} is disconnected")]
    Disconnected(JoystickId),

    #[error("Input {0} is not supported by this device source")]
    Unsupported(InputSource),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_display() {
        let err = UnknownActionError("jump".to_string());
        assert_eq!(err.to_string(), "No control with name \"jump\" defined");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownPairControl {
            pair: "move".to_string(),
            control: "left".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Pair \"move\" references unknown control \"left\""
        );
        assert_eq!(
            ConfigError::DeadzoneOutOfRange(1.5).to_string(),
            "Deadzone must be in [0, 1), got 1.5"
        );
    }

    #[test]
    fn test_device_error_display() {
        assert_eq!(
            DeviceError::Disconnected(JoystickId(2)).to_string(),
            "joystick #2 is disconnected"
        );
        assert_eq!(
            DeviceError::Unsupported(InputSource::mouse(1)).to_string(),
            "Input mouse:1 is not supported by this device source"
        );
    }
}
