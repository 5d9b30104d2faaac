// Keyboard and mouse state tracked from winit window events

use crate::input::device::{DeviceSource, JoystickId};
use crate::input::source::InputSource;
use crate::input::DeviceError;
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key, KeyCode, KeyLocation, NamedKey, PhysicalKey};

/// Keys and mouse buttons currently held, built from winit events
///
/// Feed it every keyboard and mouse event the window receives; it answers
/// `key:`, `sc:` and `mouse:` sources. Joystick sources are not handled here.
#[derive(Debug, Default)]
pub struct KeyboardMouseState {
    /// Logical key name for each held physical key, so a release still
    /// matches when modifiers changed the logical key in between
    keys: HashMap<KeyCode, String>,

    /// Held physical keys
    scancodes: HashSet<KeyCode>,

    /// Held mouse buttons, numbered 1 = left, 2 = right, 3 = middle
    mouse_buttons: HashSet<u16>,
}

impl KeyboardMouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        // Key repeats don't change what is held
        if event.repeat {
            return;
        }
        self.process_key(
            &event.logical_key,
            event.physical_key,
            event.location,
            event.state,
        );
    }

    /// Process a key press or release
    pub fn process_key(
        &mut self,
        logical: &Key,
        physical: PhysicalKey,
        location: KeyLocation,
        state: ElementState,
    ) {
        let PhysicalKey::Code(code) = physical else {
            return;
        };

        match state {
            ElementState::Pressed => {
                self.scancodes.insert(code);
                if let Some(name) = key_name(logical, location) {
                    self.keys.insert(code, name);
                }
            }
            ElementState::Released => {
                self.scancodes.remove(&code);
                self.keys.remove(&code);
            }
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let number = mouse_button_number(button);
        match state {
            ElementState::Pressed => {
                self.mouse_buttons.insert(number);
            }
            ElementState::Released => {
                self.mouse_buttons.remove(&number);
            }
        }
    }

    /// Release everything, e.g. when the window loses focus and release
    /// events would never arrive
    pub fn clear(&mut self) {
        self.keys.clear();
        self.scancodes.clear();
        self.mouse_buttons.clear();
    }

    /// Check if a logical key is held
    pub fn is_key_down(&self, name: &str) -> bool {
        self.keys.values().any(|key| key == name)
    }

    /// Check if a physical key is held
    pub fn is_scancode_down(&self, name: &str) -> bool {
        self.scancodes
            .iter()
            .any(|code| scancode_name(*code) == Some(name))
    }

    /// Check if a mouse button is held
    pub fn is_mouse_down(&self, button: u16) -> bool {
        self.mouse_buttons.contains(&button)
    }
}

impl DeviceSource for KeyboardMouseState {
    fn is_down(
        &self,
        input: &InputSource,
        _joystick: Option<JoystickId>,
    ) -> Result<bool, DeviceError> {
        match input {
            InputSource::Key(name) => Ok(self.is_key_down(name)),
            InputSource::Scancode(name) => Ok(self.is_scancode_down(name)),
            InputSource::Mouse(button) => Ok(self.is_mouse_down(*button)),
            _ => Err(DeviceError::Unsupported(input.clone())),
        }
    }

    fn axis(&self, input: &InputSource, _joystick: Option<JoystickId>) -> Result<f32, DeviceError> {
        Err(DeviceError::Unsupported(input.clone()))
    }

    fn is_connected(&self, _joystick: JoystickId) -> bool {
        false
    }
}

/// Number used in `mouse:` sources for a winit mouse button
fn mouse_button_number(button: MouseButton) -> u16 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Right => 2,
        MouseButton::Middle => 3,
        MouseButton::Back => 4,
        MouseButton::Forward => 5,
        MouseButton::Other(n) => n,
    }
}

/// Name used in `key:` sources for a logical key
fn key_name(key: &Key, location: KeyLocation) -> Option<String> {
    let sided = |left: &'static str, right: &'static str| {
        if location == KeyLocation::Right {
            right
        } else {
            left
        }
    };

    let name = match key {
        Key::Character(c) if c.as_str() == " " => "space",
        Key::Character(c) => return Some(c.to_lowercase()),
        Key::Named(named) => match named {
            NamedKey::Space => "space",
            NamedKey::Enter if location == KeyLocation::Numpad => "kpenter",
            NamedKey::Enter => "return",
            NamedKey::Escape => "escape",
            NamedKey::Tab => "tab",
            NamedKey::Backspace => "backspace",
            NamedKey::Delete => "delete",
            NamedKey::Insert => "insert",
            NamedKey::Home => "home",
            NamedKey::End => "end",
            NamedKey::PageUp => "pageup",
            NamedKey::PageDown => "pagedown",
            NamedKey::ArrowLeft => "left",
            NamedKey::ArrowRight => "right",
            NamedKey::ArrowUp => "up",
            NamedKey::ArrowDown => "down",
            NamedKey::Shift => sided("lshift", "rshift"),
            NamedKey::Control => sided("lctrl", "rctrl"),
            NamedKey::Alt => sided("lalt", "ralt"),
            NamedKey::Super => sided("lgui", "rgui"),
            NamedKey::CapsLock => "capslock",
            NamedKey::F1 => "f1",
            NamedKey::F2 => "f2",
            NamedKey::F3 => "f3",
            NamedKey::F4 => "f4",
            NamedKey::F5 => "f5",
            NamedKey::F6 => "f6",
            NamedKey::F7 => "f7",
            NamedKey::F8 => "f8",
            NamedKey::F9 => "f9",
            NamedKey::F10 => "f10",
            NamedKey::F11 => "f11",
            NamedKey::F12 => "f12",
            _ => return None,
        },
        _ => return None,
    };
    Some(name.to_string())
}

/// Name used in `sc:` sources for a physical key
fn scancode_name(code: KeyCode) -> Option<&'static str> {
    Some(match code {
        KeyCode::KeyA => "a",
        KeyCode::KeyB => "b",
        KeyCode::KeyC => "c",
        KeyCode::KeyD => "d",
        KeyCode::KeyE => "e",
        KeyCode::KeyF => "f",
        KeyCode::KeyG => "g",
        KeyCode::KeyH => "h",
        KeyCode::KeyI => "i",
        KeyCode::KeyJ => "j",
        KeyCode::KeyK => "k",
        KeyCode::KeyL => "l",
        KeyCode::KeyM => "m",
        KeyCode::KeyN => "n",
        KeyCode::KeyO => "o",
        KeyCode::KeyP => "p",
        KeyCode::KeyQ => "q",
        KeyCode::KeyR => "r",
        KeyCode::KeyS => "s",
        KeyCode::KeyT => "t",
        KeyCode::KeyU => "u",
        KeyCode::KeyV => "v",
        KeyCode::KeyW => "w",
        KeyCode::KeyX => "x",
        KeyCode::KeyY => "y",
        KeyCode::KeyZ => "z",
        KeyCode::Digit0 => "0",
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::Digit5 => "5",
        KeyCode::Digit6 => "6",
        KeyCode::Digit7 => "7",
        KeyCode::Digit8 => "8",
        KeyCode::Digit9 => "9",
        KeyCode::Space => "space",
        KeyCode::Enter => "return",
        KeyCode::Escape => "escape",
        KeyCode::Tab => "tab",
        KeyCode::Backspace => "backspace",
        KeyCode::ArrowLeft => "left",
        KeyCode::ArrowRight => "right",
        KeyCode::ArrowUp => "up",
        KeyCode::ArrowDown => "down",
        KeyCode::ShiftLeft => "lshift",
        KeyCode::ShiftRight => "rshift",
        KeyCode::ControlLeft => "lctrl",
        KeyCode::ControlRight => "rctrl",
        KeyCode::AltLeft => "lalt",
        KeyCode::AltRight => "ralt",
        _ => return None,
    })
}
