// Physical input sources and the `type:value` strings that name them

use super::device::DeviceKind;
use super::SourceParseError;
use std::fmt;
use std::str::FromStr;

/// A named gamepad axis, or a raw joystick axis index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickAxis {
    Index(u8),
    LeftX,
    LeftY,
    RightX,
    RightY,
    TriggerLeft,
    TriggerRight,
}

impl JoystickAxis {
    fn from_name(name: &str) -> Option<Self> {
        if let Ok(index) = name.parse::<u8>() {
            return Some(Self::Index(index));
        }
        Some(match name {
            "leftx" => Self::LeftX,
            "lefty" => Self::LeftY,
            "rightx" => Self::RightX,
            "righty" => Self::RightY,
            "triggerleft" => Self::TriggerLeft,
            "triggerright" => Self::TriggerRight,
            _ => return None,
        })
    }
}

impl fmt::Display for JoystickAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index(index) => return write!(f, "{index}"),
            Self::LeftX => "leftx",
            Self::LeftY => "lefty",
            Self::RightX => "rightx",
            Self::RightY => "righty",
            Self::TriggerLeft => "triggerleft",
            Self::TriggerRight => "triggerright",
        };
        f.write_str(name)
    }
}

/// A named gamepad button, or a raw joystick button index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickButton {
    Index(u8),
    A,
    B,
    X,
    Y,
    Back,
    Guide,
    Start,
    LeftStick,
    RightStick,
    LeftShoulder,
    RightShoulder,
    DpUp,
    DpDown,
    DpLeft,
    DpRight,
}

impl JoystickButton {
    fn from_name(name: &str) -> Option<Self> {
        if let Ok(index) = name.parse::<u8>() {
            return Some(Self::Index(index));
        }
        Some(match name {
            "a" => Self::A,
            "b" => Self::B,
            "x" => Self::X,
            "y" => Self::Y,
            "back" => Self::Back,
            "guide" => Self::Guide,
            "start" => Self::Start,
            "leftstick" => Self::LeftStick,
            "rightstick" => Self::RightStick,
            "leftshoulder" => Self::LeftShoulder,
            "rightshoulder" => Self::RightShoulder,
            "dpup" => Self::DpUp,
            "dpdown" => Self::DpDown,
            "dpleft" => Self::DpLeft,
            "dpright" => Self::DpRight,
            _ => return None,
        })
    }
}

impl fmt::Display for JoystickButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index(index) => return write!(f, "{index}"),
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::Back => "back",
            Self::Guide => "guide",
            Self::Start => "start",
            Self::LeftStick => "leftstick",
            Self::RightStick => "rightstick",
            Self::LeftShoulder => "leftshoulder",
            Self::RightShoulder => "rightshoulder",
            Self::DpUp => "dpup",
            Self::DpDown => "dpdown",
            Self::DpLeft => "dpleft",
            Self::DpRight => "dpright",
        };
        f.write_str(name)
    }
}

/// Which half of an axis a source reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisHalf {
    Positive,
    Negative,
}

/// Position of a joystick hat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HatDirection {
    #[default]
    Centered,
    Up,
    Down,
    Left,
    Right,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl HatDirection {
    fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "c" => Self::Centered,
            "u" => Self::Up,
            "d" => Self::Down,
            "l" => Self::Left,
            "r" => Self::Right,
            "lu" => Self::LeftUp,
            "ld" => Self::LeftDown,
            "ru" => Self::RightUp,
            "rd" => Self::RightDown,
            _ => return None,
        })
    }

    /// Short code used in source strings (`u`, `ld`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Centered => "c",
            Self::Up => "u",
            Self::Down => "d",
            Self::Left => "l",
            Self::Right => "r",
            Self::LeftUp => "lu",
            Self::LeftDown => "ld",
            Self::RightUp => "ru",
            Self::RightDown => "rd",
        }
    }
}

/// A single physical input a control can be bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Logical keyboard key (`key:space`)
    Key(String),
    /// Physical key position (`sc:a`)
    Scancode(String),
    /// Mouse button number, 1 = left (`mouse:1`)
    Mouse(u16),
    /// Joystick axis, whole or one half (`axis:leftx-`)
    Axis {
        axis: JoystickAxis,
        half: Option<AxisHalf>,
    },
    /// Joystick button (`button:a`)
    Button(JoystickButton),
    /// Joystick hat held in one exact direction (`hat:1lu`)
    Hat { hat: u8, direction: HatDirection },
}

impl InputSource {
    /// Create a logical key source
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Create a mouse button source
    pub fn mouse(button: u16) -> Self {
        Self::Mouse(button)
    }

    /// Create a joystick button source
    pub fn button(button: JoystickButton) -> Self {
        Self::Button(button)
    }

    /// Which device category this source is read from
    pub fn device_kind(&self) -> DeviceKind {
        match self {
            Self::Key(_) | Self::Scancode(_) | Self::Mouse(_) => DeviceKind::KeyboardMouse,
            Self::Axis { .. } | Self::Button(_) | Self::Hat { .. } => DeviceKind::Joystick,
        }
    }

    /// Digital sources read as 0 or 1; only axes are analog
    pub fn is_digital(&self) -> bool {
        !matches!(self, Self::Axis { .. })
    }
}

impl FromStr for InputSource {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| SourceParseError::MissingType(s.to_string()))?;
        if value.is_empty() {
            return Err(SourceParseError::MissingValue(s.to_string()));
        }

        match kind {
            "key" => Ok(Self::Key(value.to_string())),
            "sc" => Ok(Self::Scancode(value.to_string())),
            "mouse" => value
                .parse::<u16>()
                .ok()
                .filter(|button| *button > 0)
                .map(Self::Mouse)
                .ok_or_else(|| SourceParseError::InvalidValue(s.to_string())),
            "axis" => {
                let (name, half) = if let Some(name) = value.strip_suffix('+') {
                    (name, Some(AxisHalf::Positive))
                } else if let Some(name) = value.strip_suffix('-') {
                    (name, Some(AxisHalf::Negative))
                } else {
                    (value, None)
                };
                JoystickAxis::from_name(name)
                    .map(|axis| Self::Axis { axis, half })
                    .ok_or_else(|| SourceParseError::InvalidValue(s.to_string()))
            }
            "button" => JoystickButton::from_name(value)
                .map(Self::Button)
                .ok_or_else(|| SourceParseError::InvalidValue(s.to_string())),
            "hat" => {
                let split = value
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(value.len());
                let (index, code) = value.split_at(split);
                match (index.parse::<u8>(), HatDirection::from_code(code)) {
                    (Ok(hat), Some(direction)) => Ok(Self::Hat { hat, direction }),
                    _ => Err(SourceParseError::InvalidValue(s.to_string())),
                }
            }
            _ => Err(SourceParseError::UnknownType(kind.to_string())),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(name) => write!(f, "key:{name}"),
            Self::Scancode(name) => write!(f, "sc:{name}"),
            Self::Mouse(button) => write!(f, "mouse:{button}"),
            Self::Axis { axis, half } => {
                let suffix = match half {
                    Some(AxisHalf::Positive) => "+",
                    Some(AxisHalf::Negative) => "-",
                    None => "",
                };
                write!(f, "axis:{axis}{suffix}")
            }
            Self::Button(button) => write!(f, "button:{button}"),
            Self::Hat { hat, direction } => write!(f, "hat:{hat}{}", direction.code()),
        }
    }
}

/// A source bound to a control, optionally negated with a leading `-`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub source: InputSource,
    pub inverted: bool,
}

impl Binding {
    /// Bind a source without inversion
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            inverted: false,
        }
    }
}

impl FromStr for Binding {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(rest) => Ok(Self {
                source: rest.parse()?,
                inverted: true,
            }),
            None => Ok(Self::new(s.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyboard_sources() {
        assert_eq!("key:space".parse::<InputSource>(), Ok(InputSource::key("space")));
        assert_eq!(
            "sc:a".parse::<InputSource>(),
            Ok(InputSource::Scancode("a".to_string()))
        );
        assert_eq!("mouse:2".parse::<InputSource>(), Ok(InputSource::mouse(2)));
    }

    #[test]
    fn test_parse_axis_with_and_without_half() {
        assert_eq!(
            "axis:leftx-".parse::<InputSource>(),
            Ok(InputSource::Axis {
                axis: JoystickAxis::LeftX,
                half: Some(AxisHalf::Negative),
            })
        );
        assert_eq!(
            "axis:triggerright+".parse::<InputSource>(),
            Ok(InputSource::Axis {
                axis: JoystickAxis::TriggerRight,
                half: Some(AxisHalf::Positive),
            })
        );
        assert_eq!(
            "axis:3".parse::<InputSource>(),
            Ok(InputSource::Axis {
                axis: JoystickAxis::Index(3),
                half: None,
            })
        );
    }

    #[test]
    fn test_parse_buttons_and_hats() {
        assert_eq!(
            "button:a".parse::<InputSource>(),
            Ok(InputSource::button(JoystickButton::A))
        );
        assert_eq!(
            "button:7".parse::<InputSource>(),
            Ok(InputSource::button(JoystickButton::Index(7)))
        );
        assert_eq!(
            "hat:1lu".parse::<InputSource>(),
            Ok(InputSource::Hat {
                hat: 1,
                direction: HatDirection::LeftUp,
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "space".parse::<InputSource>(),
            Err(SourceParseError::MissingType("space".to_string()))
        );
        assert_eq!(
            "key:".parse::<InputSource>(),
            Err(SourceParseError::MissingValue("key:".to_string()))
        );
        assert_eq!(
            "pedal:1".parse::<InputSource>(),
            Err(SourceParseError::UnknownType("pedal".to_string()))
        );
        assert!(matches!(
            "axis:sideways+".parse::<InputSource>(),
            Err(SourceParseError::InvalidValue(_))
        ));
        assert!(matches!(
            "mouse:0".parse::<InputSource>(),
            Err(SourceParseError::InvalidValue(_))
        ));
        assert!(matches!(
            "hat:1x".parse::<InputSource>(),
            Err(SourceParseError::InvalidValue(_))
        ));
        assert!(matches!(
            "hat:u".parse::<InputSource>(),
            Err(SourceParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_device_kind() {
        assert_eq!(
            InputSource::key("a").device_kind(),
            DeviceKind::KeyboardMouse
        );
        assert_eq!(InputSource::mouse(1).device_kind(), DeviceKind::KeyboardMouse);
        assert_eq!(
            InputSource::button(JoystickButton::Start).device_kind(),
            DeviceKind::Joystick
        );
    }

    #[test]
    fn test_only_axes_are_analog() {
        assert!(InputSource::key("a").is_digital());
        assert!(InputSource::button(JoystickButton::B).is_digital());
        assert!(!"axis:lefty".parse::<InputSource>().unwrap().is_digital());
    }

    #[test]
    fn test_inverted_binding() {
        let binding: Binding = "-key:left".parse().unwrap();
        assert!(binding.inverted);
        assert_eq!(binding.source, InputSource::key("left"));

        let binding: Binding = "key:right".parse().unwrap();
        assert!(!binding.inverted);
    }

    #[test]
    fn test_display_matches_source_syntax() {
        for text in ["key:space", "sc:w", "mouse:3", "axis:leftx+", "axis:2", "button:dpup", "hat:1rd"] {
            let source: InputSource = text.parse().unwrap();
            assert_eq!(source.to_string(), text);
        }
    }
}
