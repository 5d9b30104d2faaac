// Gamepad state read through gilrs

use crate::input::device::{DeviceSource, JoystickId};
use crate::input::source::{AxisHalf, HatDirection, InputSource, JoystickAxis, JoystickButton};
use crate::input::DeviceError;
use gilrs::{Axis, Button, Event, EventType, Gamepad, Gilrs};
use log::{info, warn};
use std::collections::HashSet;

/// Connected gamepads, keyed by gilrs gamepad id
///
/// Call `poll` once per frame before updating players so gilrs can refresh
/// its cached state. Only named gamepad axes and buttons are supported; hat 1
/// reads the d-pad.
pub struct GamepadRegistry {
    gilrs: Gilrs,
    /// Every gamepad seen so far, connected or not
    known: HashSet<usize>,
}

impl GamepadRegistry {
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = Gilrs::new()?;
        let mut known = HashSet::new();
        for (id, gamepad) in gilrs.gamepads() {
            info!("Found gamepad {} ({})", usize::from(id), gamepad.name());
            known.insert(usize::from(id));
        }
        Ok(Self { gilrs, known })
    }

    /// Drain pending gilrs events
    pub fn poll(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => {
                    info!("Gamepad {} connected", usize::from(id));
                    self.known.insert(usize::from(id));
                }
                EventType::Disconnected => {
                    warn!("Gamepad {} disconnected", usize::from(id));
                }
                _ => {}
            }
        }
    }

    /// First connected gamepad, if any
    pub fn first_connected(&self) -> Option<JoystickId> {
        self.gilrs
            .gamepads()
            .next()
            .map(|(id, _)| JoystickId(usize::from(id)))
    }

    fn gamepad(&self, joystick: Option<JoystickId>) -> Result<Gamepad<'_>, DeviceError> {
        let joystick = joystick.ok_or(DeviceError::NoJoystick)?;
        if !self.known.contains(&joystick.0) {
            return Err(DeviceError::UnknownJoystick(joystick));
        }
        self.gilrs
            .gamepads()
            .find(|(id, _)| usize::from(*id) == joystick.0)
            .map(|(_, gamepad)| gamepad)
            .ok_or(DeviceError::Disconnected(joystick))
    }
}

fn gilrs_button(button: JoystickButton) -> Option<Button> {
    Some(match button {
        JoystickButton::A => Button::South,
        JoystickButton::B => Button::East,
        JoystickButton::X => Button::West,
        JoystickButton::Y => Button::North,
        JoystickButton::Back => Button::Select,
        JoystickButton::Guide => Button::Mode,
        JoystickButton::Start => Button::Start,
        JoystickButton::LeftStick => Button::LeftThumb,
        JoystickButton::RightStick => Button::RightThumb,
        JoystickButton::LeftShoulder => Button::LeftTrigger,
        JoystickButton::RightShoulder => Button::RightTrigger,
        JoystickButton::DpUp => Button::DPadUp,
        JoystickButton::DpDown => Button::DPadDown,
        JoystickButton::DpLeft => Button::DPadLeft,
        JoystickButton::DpRight => Button::DPadRight,
        JoystickButton::Index(_) => return None,
    })
}

/// Axis value with down and right positive
fn axis_value(gamepad: &Gamepad<'_>, axis: JoystickAxis) -> Option<f32> {
    let trigger = |button: Button| {
        gamepad
            .button_data(button)
            .map(|data| data.value())
            .unwrap_or(0.0)
    };
    Some(match axis {
        JoystickAxis::LeftX => gamepad.value(Axis::LeftStickX),
        // gilrs reports up as positive
        JoystickAxis::LeftY => -gamepad.value(Axis::LeftStickY),
        JoystickAxis::RightX => gamepad.value(Axis::RightStickX),
        JoystickAxis::RightY => -gamepad.value(Axis::RightStickY),
        JoystickAxis::TriggerLeft => trigger(Button::LeftTrigger2),
        JoystickAxis::TriggerRight => trigger(Button::RightTrigger2),
        JoystickAxis::Index(_) => return None,
    })
}

fn dpad_direction(gamepad: &Gamepad<'_>) -> HatDirection {
    let up = gamepad.is_pressed(Button::DPadUp);
    let down = gamepad.is_pressed(Button::DPadDown);
    let left = gamepad.is_pressed(Button::DPadLeft);
    let right = gamepad.is_pressed(Button::DPadRight);
    match (left, right, up, down) {
        (true, false, true, false) => HatDirection::LeftUp,
        (true, false, false, true) => HatDirection::LeftDown,
        (false, true, true, false) => HatDirection::RightUp,
        (false, true, false, true) => HatDirection::RightDown,
        (true, false, _, _) => HatDirection::Left,
        (false, true, _, _) => HatDirection::Right,
        (_, _, true, false) => HatDirection::Up,
        (_, _, false, true) => HatDirection::Down,
        _ => HatDirection::Centered,
    }
}

impl DeviceSource for GamepadRegistry {
    fn is_down(
        &self,
        input: &InputSource,
        joystick: Option<JoystickId>,
    ) -> Result<bool, DeviceError> {
        let unsupported = || DeviceError::Unsupported(input.clone());
        match input {
            InputSource::Button(button) => {
                let button = gilrs_button(*button).ok_or_else(unsupported)?;
                Ok(self.gamepad(joystick)?.is_pressed(button))
            }
            InputSource::Hat { hat: 1, direction } => {
                Ok(dpad_direction(&self.gamepad(joystick)?) == *direction)
            }
            InputSource::Axis { axis, half } => {
                let value = axis_value(&self.gamepad(joystick)?, *axis).ok_or_else(unsupported)?;
                Ok(match half {
                    Some(AxisHalf::Negative) => value < 0.0,
                    _ => value > 0.0,
                })
            }
            _ => Err(unsupported()),
        }
    }

    fn axis(&self, input: &InputSource, joystick: Option<JoystickId>) -> Result<f32, DeviceError> {
        match input {
            InputSource::Axis { axis, .. } => axis_value(&self.gamepad(joystick)?, *axis)
                .ok_or_else(|| DeviceError::Unsupported(input.clone())),
            _ => Err(DeviceError::Unsupported(input.clone())),
        }
    }

    fn is_connected(&self, joystick: JoystickId) -> bool {
        self.gamepad(Some(joystick)).is_ok()
    }
}
