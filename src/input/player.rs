// Per-player control state management

use super::config::PlayerConfig;
use super::deadzone;
use super::device::{ActiveDevice, DeviceKind, DeviceSource, JoystickId};
use super::source::{AxisHalf, Binding, InputSource};
use super::{ConfigError, UnknownActionError};
use crate::math::{clamp_unit, limit_length};
use glam::Vec2;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Result of the last update for one control or pair
///
/// 1D controls keep their value in `x`; `y` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    /// Combined value before the deadzone
    pub raw: Vec2,
    /// Value after the deadzone
    pub value: Vec2,
    /// Held this frame
    pub down: bool,
    /// Held in the previous frame
    pub down_previous: bool,
}

impl ControlState {
    /// Went down this frame
    pub fn pressed(&self) -> bool {
        self.down && !self.down_previous
    }

    /// Went up this frame
    pub fn released(&self) -> bool {
        !self.down && self.down_previous
    }

    fn advance(&mut self, raw: Vec2, value: Vec2) {
        self.down_previous = self.down;
        self.raw = raw;
        self.value = value;
        self.down = value != Vec2::ZERO;
    }
}

#[derive(Debug)]
struct Control {
    bindings: Vec<Binding>,
    /// Per binding: read non-zero in the previous update
    held: Vec<bool>,
    state: ControlState,
}

/// Which controls a pair reads its axes from
#[derive(Debug)]
enum PairAxes {
    Xy {
        x: String,
        y: String,
    },
    Directions {
        left: String,
        right: String,
        up: String,
        down: String,
    },
}

impl PairAxes {
    fn from_config(
        pair: &str,
        members: &[String],
        controls: &BTreeMap<String, Control>,
    ) -> Result<Self, ConfigError> {
        let axes = match members {
            [x, y] => Self::Xy {
                x: x.clone(),
                y: y.clone(),
            },
            [left, right, up, down] => Self::Directions {
                left: left.clone(),
                right: right.clone(),
                up: up.clone(),
                down: down.clone(),
            },
            _ => {
                return Err(ConfigError::PairArity {
                    pair: pair.to_string(),
                    len: members.len(),
                })
            }
        };

        if let Some(missing) = members.iter().find(|m| !controls.contains_key(*m)) {
            return Err(ConfigError::UnknownPairControl {
                pair: pair.to_string(),
                control: missing.clone(),
            });
        }
        Ok(axes)
    }

    /// Raw 2D value from the member controls' raw values
    fn compose(&self, controls: &BTreeMap<String, Control>) -> Vec2 {
        let raw = |name: &str| controls.get(name).map_or(0.0, |c| c.state.raw.x);
        match self {
            Self::Xy { x, y } => Vec2::new(raw(x), raw(y)),
            Self::Directions {
                left,
                right,
                up,
                down,
            } => Vec2::new(raw(right) - raw(left), raw(down) - raw(up)),
        }
    }
}

#[derive(Debug)]
struct Pair {
    axes: PairAxes,
    state: ControlState,
}

/// Device categories that produced input during one update, in the order
/// they were first seen
#[derive(Debug, Default)]
struct FrameActivity {
    /// Digital sources that went down this frame
    fresh: Vec<DeviceKind>,
    /// Digital sources held since an earlier frame
    held: Vec<DeviceKind>,
    analog: Vec<DeviceKind>,
}

impl FrameActivity {
    fn record(&mut self, source: &InputSource, value: f32, deadzone: f32, was_held: bool) {
        let (seen, active) = if !source.is_digital() {
            (&mut self.analog, value.abs() > deadzone)
        } else if was_held {
            (&mut self.held, value != 0.0)
        } else {
            (&mut self.fresh, value != 0.0)
        };
        let kind = source.device_kind();
        if active && !seen.contains(&kind) {
            seen.push(kind);
        }
    }

    /// A fresh press decides the device, keyboard and mouse first when both
    /// devices pressed something this frame. Without one, held digital input
    /// beats analog input and the current device wins a tie.
    fn resolve(&self, current: ActiveDevice) -> ActiveDevice {
        if !self.fresh.is_empty() {
            let kind = if self.fresh.contains(&DeviceKind::KeyboardMouse) {
                DeviceKind::KeyboardMouse
            } else {
                DeviceKind::Joystick
            };
            return ActiveDevice::from(kind);
        }

        let candidates = if self.held.is_empty() {
            &self.analog
        } else {
            &self.held
        };
        if candidates.iter().any(|kind| ActiveDevice::from(*kind) == current) {
            return current;
        }
        candidates
            .first()
            .map_or(current, |kind| ActiveDevice::from(*kind))
    }
}

/// Read one binding as a contribution in [-1, 1]
///
/// Unavailable devices read as neutral; a frame never fails because of input.
fn read_binding<D: DeviceSource + ?Sized>(
    devices: &D,
    binding: &Binding,
    joystick: Option<JoystickId>,
) -> f32 {
    let source = &binding.source;
    if source.device_kind() == DeviceKind::Joystick && joystick.is_none() {
        return 0.0;
    }

    let value = match source {
        InputSource::Axis { half, .. } => devices.axis(source, joystick).map(|v| {
            let v = if v.is_nan() { 0.0 } else { clamp_unit(v) };
            match half {
                Some(AxisHalf::Positive) => v.max(0.0),
                Some(AxisHalf::Negative) => (-v).max(0.0),
                None => v,
            }
        }),
        _ => devices
            .is_down(source, joystick)
            .map(|down| if down { 1.0 } else { 0.0 }),
    };

    match value {
        Ok(v) if binding.inverted => -v,
        Ok(v) => v,
        Err(err) => {
            trace!("Reading {source} as neutral: {err}");
            0.0
        }
    }
}

/// Control state for a single player
///
/// Call `update` once per frame, before any queries for that frame. Queries
/// only read the state computed by the last update, so they give the same
/// answer however often they are called within a frame.
#[derive(Debug)]
pub struct Player {
    config: PlayerConfig,
    controls: BTreeMap<String, Control>,
    pairs: BTreeMap<String, Pair>,
    active_device: ActiveDevice,
}

impl Player {
    /// Validate a configuration and create a player with neutral state
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&config.deadzone) {
            return Err(ConfigError::DeadzoneOutOfRange(config.deadzone));
        }

        let mut controls = BTreeMap::new();
        for (name, sources) in &config.controls {
            let bindings = sources
                .iter()
                .map(|s| s.parse::<Binding>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| ConfigError::InvalidSource {
                    control: name.clone(),
                    source,
                })?;
            controls.insert(
                name.clone(),
                Control {
                    held: vec![false; bindings.len()],
                    bindings,
                    state: ControlState::default(),
                },
            );
        }

        let mut pairs = BTreeMap::new();
        for (name, members) in &config.pairs {
            if controls.contains_key(name) {
                return Err(ConfigError::NameCollision(name.clone()));
            }
            let axes = PairAxes::from_config(name, members, &controls)?;
            pairs.insert(
                name.clone(),
                Pair {
                    axes,
                    state: ControlState::default(),
                },
            );
        }

        debug!(
            "Created player with {} controls, {} pairs, joystick {:?}",
            controls.len(),
            pairs.len(),
            config.joystick
        );

        Ok(Self {
            config,
            controls,
            pairs,
            active_device: ActiveDevice::None,
        })
    }

    /// The configuration this player was created with
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Read every bound input and recompute all control state
    /// Call this once per frame
    pub fn update<D: DeviceSource + ?Sized>(&mut self, devices: &D) {
        let threshold = self.config.deadzone;
        let joystick = self.config.joystick.filter(|id| devices.is_connected(*id));
        if joystick.is_none() && self.active_device == ActiveDevice::Joystick {
            debug!("Joystick unavailable, active device reset to none");
            self.active_device = ActiveDevice::None;
        }

        let mut activity = FrameActivity::default();
        for control in self.controls.values_mut() {
            let mut sum = 0.0;
            for (binding, held) in control.bindings.iter().zip(control.held.iter_mut()) {
                let value = read_binding(devices, binding, joystick);
                activity.record(&binding.source, value, threshold, *held);
                *held = value != 0.0;
                sum += value;
            }
            let raw = clamp_unit(sum);
            let value = deadzone::shape_axis(raw, threshold);
            control
                .state
                .advance(Vec2::new(raw, 0.0), Vec2::new(value, 0.0));
        }

        let mode = self.config.deadzone_shape();
        for pair in self.pairs.values_mut() {
            let raw = limit_length(pair.axes.compose(&self.controls));
            pair.state.advance(raw, deadzone::shape(raw, threshold, mode));
        }

        let active = activity.resolve(self.active_device);
        if active != self.active_device {
            debug!("Active device changed: {} -> {}", self.active_device, active);
            self.active_device = active;
        }
    }

    /// Full state of a control or pair
    pub fn state(&self, name: &str) -> Result<&ControlState, UnknownActionError> {
        self.pairs
            .get(name)
            .map(|pair| &pair.state)
            .or_else(|| self.controls.get(name).map(|control| &control.state))
            .ok_or_else(|| UnknownActionError(name.to_string()))
    }

    /// Value before the deadzone
    pub fn get_raw(&self, name: &str) -> Result<(f32, f32), UnknownActionError> {
        let raw = self.state(name)?.raw;
        Ok((raw.x, raw.y))
    }

    /// Value after the deadzone
    pub fn get(&self, name: &str) -> Result<(f32, f32), UnknownActionError> {
        let value = self.state(name)?.value;
        Ok((value.x, value.y))
    }

    /// Check if a control or pair is held
    pub fn down(&self, name: &str) -> Result<bool, UnknownActionError> {
        Ok(self.state(name)?.down)
    }

    /// Check if a control or pair went down this frame
    pub fn pressed(&self, name: &str) -> Result<bool, UnknownActionError> {
        Ok(self.state(name)?.pressed())
    }

    /// Check if a control or pair went up this frame
    pub fn released(&self, name: &str) -> Result<bool, UnknownActionError> {
        Ok(self.state(name)?.released())
    }

    /// Device category that last produced input
    pub fn active_device(&self) -> ActiveDevice {
        self.active_device
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.controls.contains_key(name) || self.pairs.contains_key(name)
    }

    /// Names of all controls, then all pairs
    pub fn action_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.controls
            .keys()
            .chain(self.pairs.keys())
            .map(String::as_str)
    }

    /// Reset all control state to neutral, e.g. after the window loses focus
    pub fn reset(&mut self) {
        for control in self.controls.values_mut() {
            control.held.fill(false);
            control.state = ControlState::default();
        }
        for pair in self.pairs.values_mut() {
            pair.state = ControlState::default();
        }
        self.active_device = ActiveDevice::None;
    }
}
