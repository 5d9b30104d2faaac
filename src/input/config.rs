// Player configuration: control bindings, pairs, joystick and deadzone

use super::deadzone::DeadzoneShape;
use super::device::JoystickId;
use std::collections::BTreeMap;

/// Deadzone used when the config doesn't set one
pub const DEFAULT_DEADZONE: f32 = 0.5;

/// Configuration for a single player
///
/// Built in-process by the game, then validated once by `Player::new`.
/// `controls` maps each control name to the source strings that drive it
/// (`"key:space"`, `"axis:leftx+"`, `"-key:left"`, ...). `pairs` combines
/// controls into 2D values, either `[x, y]` or `[left, right, up, down]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub controls: BTreeMap<String, Vec<String>>,
    pub pairs: BTreeMap<String, Vec<String>>,
    pub joystick: Option<JoystickId>,
    pub deadzone: f32,
    pub square_deadzone: bool,
}

impl PlayerConfig {
    /// Create an empty configuration with the default deadzone
    pub fn new() -> Self {
        Self {
            controls: BTreeMap::new(),
            pairs: BTreeMap::new(),
            joystick: None,
            deadzone: DEFAULT_DEADZONE,
            square_deadzone: false,
        }
    }

    /// Bind a control to a list of sources, replacing any previous binding
    pub fn control<I, S>(mut self, name: impl Into<String>, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.controls
            .insert(name.into(), sources.into_iter().map(Into::into).collect());
        self
    }

    /// Combine existing controls into a 2D pair
    pub fn pair<I, S>(mut self, name: impl Into<String>, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pairs
            .insert(name.into(), controls.into_iter().map(Into::into).collect());
        self
    }

    /// Read joystick sources from this joystick
    pub fn joystick(mut self, joystick: JoystickId) -> Self {
        self.joystick = Some(joystick);
        self
    }

    pub fn deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    /// Apply the deadzone per axis instead of to the vector length
    pub fn square_deadzone(mut self, square: bool) -> Self {
        self.square_deadzone = square;
        self
    }

    /// The deadzone shape selected by `square_deadzone`
    pub fn deadzone_shape(&self) -> DeadzoneShape {
        if self.square_deadzone {
            DeadzoneShape::Square
        } else {
            DeadzoneShape::Circular
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
