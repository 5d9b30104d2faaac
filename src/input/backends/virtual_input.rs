// Scripted device source for tests and headless tools

use crate::input::device::{DeviceSource, JoystickId};
use crate::input::source::{AxisHalf, HatDirection, InputSource, JoystickAxis, JoystickButton};
use crate::input::DeviceError;
use std::collections::{HashMap, HashSet};

/// State of one scripted joystick
#[derive(Debug, Default, Clone)]
struct VirtualJoystick {
    connected: bool,
    buttons: HashSet<JoystickButton>,
    axes: HashMap<JoystickAxis, f32>,
    hats: HashMap<u8, HatDirection>,
}

/// Keyboard, mouse and joysticks whose state is set directly by the caller
///
/// State persists until changed, like holding a key down.
#[derive(Debug, Default, Clone)]
pub struct VirtualDevices {
    keys: HashSet<String>,
    scancodes: HashSet<String>,
    mouse_buttons: HashSet<u16>,
    joysticks: HashMap<JoystickId, VirtualJoystick>,
}

impl VirtualDevices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn release_key(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn press_scancode(&mut self, scancode: &str) {
        self.scancodes.insert(scancode.to_string());
    }

    pub fn release_scancode(&mut self, scancode: &str) {
        self.scancodes.remove(scancode);
    }

    pub fn press_mouse(&mut self, button: u16) {
        self.mouse_buttons.insert(button);
    }

    pub fn release_mouse(&mut self, button: u16) {
        self.mouse_buttons.remove(&button);
    }

    /// Attach a joystick, creating it if needed. State set before a
    /// disconnect is kept.
    pub fn connect_joystick(&mut self, id: JoystickId) {
        self.joysticks.entry(id).or_default().connected = true;
    }

    pub fn disconnect_joystick(&mut self, id: JoystickId) {
        if let Some(joystick) = self.joysticks.get_mut(&id) {
            joystick.connected = false;
        }
    }

    pub fn press_button(&mut self, id: JoystickId, button: JoystickButton) {
        self.joysticks.entry(id).or_default().buttons.insert(button);
    }

    pub fn release_button(&mut self, id: JoystickId, button: JoystickButton) {
        if let Some(joystick) = self.joysticks.get_mut(&id) {
            joystick.buttons.remove(&button);
        }
    }

    pub fn set_axis(&mut self, id: JoystickId, axis: JoystickAxis, value: f32) {
        self.joysticks.entry(id).or_default().axes.insert(axis, value);
    }

    pub fn set_hat(&mut self, id: JoystickId, hat: u8, direction: HatDirection) {
        self.joysticks.entry(id).or_default().hats.insert(hat, direction);
    }

    /// Release everything and center every axis and hat; connections are kept
    pub fn clear(&mut self) {
        self.keys.clear();
        self.scancodes.clear();
        self.mouse_buttons.clear();
        for joystick in self.joysticks.values_mut() {
            joystick.buttons.clear();
            joystick.axes.clear();
            joystick.hats.clear();
        }
    }

    fn connected(&self, id: Option<JoystickId>) -> Result<&VirtualJoystick, DeviceError> {
        let id = id.ok_or(DeviceError::NoJoystick)?;
        let joystick = self
            .joysticks
            .get(&id)
            .ok_or(DeviceError::UnknownJoystick(id))?;
        if joystick.connected {
            Ok(joystick)
        } else {
            Err(DeviceError::Disconnected(id))
        }
    }
}

impl DeviceSource for VirtualDevices {
    fn is_down(
        &self,
        input: &InputSource,
        joystick: Option<JoystickId>,
    ) -> Result<bool, DeviceError> {
        match input {
            InputSource::Key(key) => Ok(self.keys.contains(key)),
            InputSource::Scancode(scancode) => Ok(self.scancodes.contains(scancode)),
            InputSource::Mouse(button) => Ok(self.mouse_buttons.contains(button)),
            InputSource::Button(button) => Ok(self.connected(joystick)?.buttons.contains(button)),
            InputSource::Hat { hat, direction } => {
                let current = self
                    .connected(joystick)?
                    .hats
                    .get(hat)
                    .copied()
                    .unwrap_or_default();
                Ok(current == *direction)
            }
            InputSource::Axis { axis, half } => {
                let value = self.connected(joystick)?.axes.get(axis).copied().unwrap_or(0.0);
                Ok(match half {
                    Some(AxisHalf::Negative) => value < 0.0,
                    _ => value > 0.0,
                })
            }
        }
    }

    fn axis(&self, input: &InputSource, joystick: Option<JoystickId>) -> Result<f32, DeviceError> {
        match input {
            InputSource::Axis { axis, .. } => {
                Ok(self.connected(joystick)?.axes.get(axis).copied().unwrap_or(0.0))
            }
            _ => Err(DeviceError::Unsupported(input.clone())),
        }
    }

    fn is_connected(&self, joystick: JoystickId) -> bool {
        self.joysticks
            .get(&joystick)
            .map(|j| j.connected)
            .unwrap_or(false)
    }
}
