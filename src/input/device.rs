// Device categories and the trait hosts implement to supply raw input

use super::source::InputSource;
use super::DeviceError;
use std::fmt;

/// Handle to a joystick in the host's device registry
///
/// Players only borrow the joystick through this id; the registry owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JoystickId(pub usize);

impl fmt::Display for JoystickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "joystick #{}", self.0)
    }
}

/// Category of physical device an input source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    KeyboardMouse,
    Joystick,
}

/// Device category that most recently produced input for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveDevice {
    KeyboardMouse,
    Joystick,
    #[default]
    None,
}

impl ActiveDevice {
    /// Short name (`kbm`, `joy`, `none`) for UI prompt lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeyboardMouse => "kbm",
            Self::Joystick => "joy",
            Self::None => "none",
        }
    }
}

impl From<DeviceKind> for ActiveDevice {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::KeyboardMouse => Self::KeyboardMouse,
            DeviceKind::Joystick => Self::Joystick,
        }
    }
}

impl fmt::Display for ActiveDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw device state for one frame
///
/// Players only read from a source, and only inside `Player::update`, so one
/// source can serve several players in the same frame. `joystick` is the
/// player's configured joystick; keyboard and mouse sources ignore it.
pub trait DeviceSource {
    /// Whether a digital input (key, mouse button, joystick button, hat
    /// direction) is held
    fn is_down(&self, input: &InputSource, joystick: Option<JoystickId>)
        -> Result<bool, DeviceError>;

    /// Current value of an analog input in [-1, 1], ignoring any axis half
    fn axis(&self, input: &InputSource, joystick: Option<JoystickId>) -> Result<f32, DeviceError>;

    /// Whether the joystick is still attached
    fn is_connected(&self, joystick: JoystickId) -> bool;
}

impl<T: DeviceSource + ?Sized> DeviceSource for &T {
    fn is_down(
        &self,
        input: &InputSource,
        joystick: Option<JoystickId>,
    ) -> Result<bool, DeviceError> {
        (**self).is_down(input, joystick)
    }

    fn axis(&self, input: &InputSource, joystick: Option<JoystickId>) -> Result<f32, DeviceError> {
        (**self).axis(input, joystick)
    }

    fn is_connected(&self, joystick: JoystickId) -> bool {
        (**self).is_connected(joystick)
    }
}

/// Sends keyboard/mouse queries to one source and joystick queries to another
///
/// Hosts usually read keys from their window events and gamepads from a
/// separate library; this stitches the two together for `Player::update`.
#[derive(Debug, Clone, Copy)]
pub struct Routed<K, J> {
    pub keyboard_mouse: K,
    pub joysticks: J,
}

impl<K, J> Routed<K, J> {
    pub fn new(keyboard_mouse: K, joysticks: J) -> Self {
        Self {
            keyboard_mouse,
            joysticks,
        }
    }
}

impl<K: DeviceSource, J: DeviceSource> DeviceSource for Routed<K, J> {
    fn is_down(
        &self,
        input: &InputSource,
        joystick: Option<JoystickId>,
    ) -> Result<bool, DeviceError> {
        match input.device_kind() {
            DeviceKind::KeyboardMouse => self.keyboard_mouse.is_down(input, joystick),
            DeviceKind::Joystick => self.joysticks.is_down(input, joystick),
        }
    }

    fn axis(&self, input: &InputSource, joystick: Option<JoystickId>) -> Result<f32, DeviceError> {
        match input.device_kind() {
            DeviceKind::KeyboardMouse => self.keyboard_mouse.axis(input, joystick),
            DeviceKind::Joystick => self.joysticks.axis(input, joystick),
        }
    }

    fn is_connected(&self, joystick: JoystickId) -> bool {
        self.joysticks.is_connected(joystick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::backends::VirtualDevices;
    use crate::input::source::JoystickButton;

    #[test]
    fn test_active_device_names() {
        assert_eq!(ActiveDevice::KeyboardMouse.as_str(), "kbm");
        assert_eq!(ActiveDevice::Joystick.as_str(), "joy");
        assert_eq!(ActiveDevice::None.to_string(), "none");
        assert_eq!(ActiveDevice::default(), ActiveDevice::None);
    }

    #[test]
    fn test_active_device_from_kind() {
        assert_eq!(
            ActiveDevice::from(DeviceKind::Joystick),
            ActiveDevice::Joystick
        );
        assert_eq!(
            ActiveDevice::from(DeviceKind::KeyboardMouse),
            ActiveDevice::KeyboardMouse
        );
    }

    #[test]
    fn test_routed_splits_queries_by_device_kind() {
        let pad = JoystickId(0);

        let mut keyboard = VirtualDevices::new();
        keyboard.press_key("space");
        // A stray joystick on the keyboard side must never be consulted
        keyboard.connect_joystick(pad);
        keyboard.press_button(pad, JoystickButton::A);

        let mut joysticks = VirtualDevices::new();
        joysticks.connect_joystick(pad);
        joysticks.press_button(pad, JoystickButton::B);

        let routed = Routed::new(&keyboard, &joysticks);
        let space = InputSource::key("space");
        let a = InputSource::button(JoystickButton::A);
        let b = InputSource::button(JoystickButton::B);

        assert_eq!(routed.is_down(&space, Some(pad)), Ok(true));
        assert_eq!(routed.is_down(&a, Some(pad)), Ok(false));
        assert_eq!(routed.is_down(&b, Some(pad)), Ok(true));
        assert!(routed.is_connected(pad));
    }
}
