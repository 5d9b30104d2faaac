// Input manager - coordinates several players sharing one device source

use super::config::PlayerConfig;
use super::device::DeviceSource;
use super::player::Player;
use super::ConfigError;
use log::info;

/// Owns the players of a local game and updates them together
///
/// Every player reads the same device source; each one picks the inputs it
/// cares about through its own bindings and joystick.
#[derive(Debug, Default)]
pub struct InputManager {
    players: Vec<Player>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player, returning its id
    pub fn add_player(&mut self, config: PlayerConfig) -> Result<usize, ConfigError> {
        let player = Player::new(config)?;
        let id = self.players.len();
        info!("Added player {}", id);
        self.players.push(player);
        Ok(id)
    }

    /// Update all players for a new frame
    /// Call this once per frame, before any queries
    pub fn update<D: DeviceSource + ?Sized>(&mut self, devices: &D) {
        for player in &mut self.players {
            player.update(devices);
        }
    }

    /// Get a specific player
    pub fn player(&self, player_id: usize) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Check if any player is holding a control
    /// Players without that control don't count
    pub fn any_player_down(&self, name: &str) -> bool {
        self.players
            .iter()
            .any(|p| p.down(name).unwrap_or(false))
    }

    /// Check if any player pressed a control this frame
    pub fn any_player_pressed(&self, name: &str) -> bool {
        self.players
            .iter()
            .any(|p| p.pressed(name).unwrap_or(false))
    }

    /// Get a list of all players who pressed a control this frame
    pub fn players_who_pressed(&self, name: &str) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.pressed(name).unwrap_or(false))
            .map(|(id, _)| id)
            .collect()
    }

    /// Reset all players to neutral state
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::backends::VirtualDevices;
    use crate::input::device::{ActiveDevice, JoystickId};
    use crate::input::source::JoystickButton;

    fn keyboard_player(jump_key: &str) -> PlayerConfig {
        PlayerConfig::new()
            .control("jump", [format!("key:{jump_key}")])
            .control("fire", ["mouse:1"])
    }

    fn pad_player(pad: JoystickId) -> PlayerConfig {
        PlayerConfig::new()
            .control("jump", ["button:a"])
            .joystick(pad)
    }

    #[test]
    fn test_manager_creation() {
        let mut manager = InputManager::new();
        assert_eq!(manager.num_players(), 0);

        assert_eq!(manager.add_player(keyboard_player("w")), Ok(0));
        assert_eq!(manager.add_player(keyboard_player("up")), Ok(1));
        assert_eq!(manager.num_players(), 2);
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
    }

    #[test]
    fn test_invalid_player_is_rejected() {
        let mut manager = InputManager::new();
        let result = manager.add_player(PlayerConfig::new().deadzone(2.0));

        assert_eq!(result, Err(ConfigError::DeadzoneOutOfRange(2.0)));
        assert_eq!(manager.num_players(), 0);
    }

    #[test]
    fn test_players_share_one_device_source() {
        let p1 = JoystickId(0);
        let p2 = JoystickId(1);
        let mut manager = InputManager::new();
        manager.add_player(pad_player(p1)).unwrap();
        manager.add_player(pad_player(p2)).unwrap();

        let mut devices = VirtualDevices::new();
        devices.connect_joystick(p1);
        devices.connect_joystick(p2);
        devices.press_button(p2, JoystickButton::A);
        manager.update(&devices);

        assert_eq!(manager.player(0).unwrap().down("jump"), Ok(false));
        assert_eq!(manager.player(1).unwrap().down("jump"), Ok(true));
        assert_eq!(
            manager.player(1).unwrap().active_device(),
            ActiveDevice::Joystick
        );
        assert_eq!(manager.players_who_pressed("jump"), vec![1]);
    }

    #[test]
    fn test_any_player_queries() {
        let mut manager = InputManager::new();
        manager.add_player(keyboard_player("w")).unwrap();
        manager.add_player(keyboard_player("up")).unwrap();

        let mut devices = VirtualDevices::new();
        devices.press_key("up");
        manager.update(&devices);

        assert!(manager.any_player_down("jump"));
        assert!(manager.any_player_pressed("jump"));
        assert!(!manager.any_player_down("fire"));

        manager.update(&devices);
        assert!(manager.any_player_down("jump"));
        assert!(!manager.any_player_pressed("jump"));
    }

    #[test]
    fn test_unknown_control_counts_as_not_pressed() {
        let mut manager = InputManager::new();
        manager.add_player(keyboard_player("w")).unwrap();
        manager.add_player(pad_player(JoystickId(0))).unwrap();

        let mut devices = VirtualDevices::new();
        devices.press_mouse(1);
        manager.update(&devices);

        // Only the keyboard player has a "fire" control
        assert!(manager.any_player_pressed("fire"));
        assert_eq!(manager.players_who_pressed("fire"), vec![0]);
        assert!(!manager.any_player_pressed("dash"));
    }

    #[test]
    fn test_get_players_who_pressed() {
        let mut manager = InputManager::new();
        manager.add_player(keyboard_player("space")).unwrap();
        manager.add_player(keyboard_player("space")).unwrap();
        manager.add_player(keyboard_player("w")).unwrap();

        let mut devices = VirtualDevices::new();
        devices.press_key("space");
        manager.update(&devices);

        assert_eq!(manager.players_who_pressed("jump"), vec![0, 1]);
    }

    #[test]
    fn test_reset_all() {
        let mut manager = InputManager::new();
        manager.add_player(keyboard_player("space")).unwrap();

        let mut devices = VirtualDevices::new();
        devices.press_key("space");
        manager.update(&devices);
        assert!(manager.any_player_down("jump"));

        manager.reset_all();
        assert!(!manager.any_player_down("jump"));
    }
}
