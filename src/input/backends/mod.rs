// Device sources for common hosts

#[cfg(feature = "gamepad")]
mod gamepad;
mod keyboard;
mod virtual_input;

#[cfg(feature = "gamepad")]
pub use gamepad::GamepadRegistry;
pub use keyboard::KeyboardMouseState;
pub use virtual_input::VirtualDevices;
