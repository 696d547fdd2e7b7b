// Input manager - routes window key events to player queues and global actions

use super::action::{Action, InputSource};
use super::buffer::{InputEvent, InputQueue};
use super::config::InputConfigManager;
use log::debug;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Main input manager that coordinates all input for all players
///
/// Each player has an event queue that is only fed while the player is
/// attached. Global actions (restart, debug overlay) are collected separately
/// and are never blocked by detaching.
pub struct InputManager {
    /// Configuration manager for all players
    config: InputConfigManager,

    /// Pending events for each player
    queues: Vec<InputQueue>,

    /// Whether each player currently receives events
    attached: Vec<bool>,

    /// Global actions pressed since the last `take_global`
    global: Vec<Action>,
}

impl InputManager {
    /// Create a new input manager with every player attached
    pub fn new(num_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(num_players),
            queues: (0..num_players).map(|_| InputQueue::new()).collect(),
            attached: vec![true; num_players],
            global: Vec::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    /// Route one press/release of `source`
    ///
    /// OS key repeats are dropped so holding jump or attack fires once.
    pub fn handle_key(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;
        if pressed && repeat {
            return;
        }

        if let Some(action) = self.config.global_action(source) {
            if pressed {
                self.global.push(action);
            }
            return;
        }

        for player_id in 0..self.queues.len() {
            if !self.attached[player_id] {
                continue;
            }
            if let Some(action) = self.config.action_for(player_id, source) {
                self.queues[player_id].push(InputEvent { action, pressed });
            }
        }
    }

    /// Queue an event for a player directly
    pub fn push(&mut self, player_id: usize, event: InputEvent) {
        if self.is_attached(player_id) {
            self.queues[player_id].push(event);
        }
    }

    /// Take the events queued for a player since the last call
    pub fn drain(&mut self, player_id: usize) -> Vec<InputEvent> {
        self.queues
            .get_mut(player_id)
            .map(InputQueue::drain)
            .unwrap_or_default()
    }

    /// Take the global actions pressed since the last call
    pub fn take_global(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.global)
    }

    /// Start delivering events to a player
    pub fn attach(&mut self, player_id: usize) {
        if let Some(attached) = self.attached.get_mut(player_id) {
            if !*attached {
                debug!("Input attached for player {}", player_id + 1);
            }
            *attached = true;
        }
    }

    /// Stop delivering events to a player and drop anything still queued
    pub fn detach(&mut self, player_id: usize) {
        if let Some(attached) = self.attached.get_mut(player_id) {
            if *attached {
                debug!("Input detached for player {}", player_id + 1);
            }
            *attached = false;
            self.queues[player_id].clear();
        }
    }

    pub fn attach_all(&mut self) {
        for player_id in 0..self.queues.len() {
            self.attach(player_id);
        }
    }

    pub fn detach_all(&mut self) {
        for player_id in 0..self.queues.len() {
            self.detach(player_id);
        }
    }

    pub fn is_attached(&self, player_id: usize) -> bool {
        self.attached.get(player_id).copied().unwrap_or(false)
    }

    /// Get the configuration manager
    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    /// Get mutable configuration manager
    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.queues.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn press(manager: &mut InputManager, code: KeyCode) {
        manager.handle_key(InputSource::key(code), ElementState::Pressed, false);
    }

    fn release(manager: &mut InputManager, code: KeyCode) {
        manager.handle_key(InputSource::key(code), ElementState::Released, false);
    }

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new(2);
        assert_eq!(manager.num_players(), 2);
        assert!(manager.is_attached(0));
        assert!(manager.is_attached(1));
        assert!(!manager.is_attached(2));
    }

    #[test]
    fn test_keys_route_to_owning_player() {
        let mut manager = InputManager::new(2);
        press(&mut manager, KeyCode::KeyA);
        press(&mut manager, KeyCode::ArrowDown);
        release(&mut manager, KeyCode::KeyA);

        assert_eq!(
            manager.drain(0),
            vec![
                InputEvent::press(Action::MoveLeft),
                InputEvent::release(Action::MoveLeft),
            ]
        );
        assert_eq!(manager.drain(1), vec![InputEvent::press(Action::Attack)]);
        assert!(manager.drain(0).is_empty());
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut manager = InputManager::new(2);
        manager.handle_key(
            InputSource::key(KeyCode::KeyW),
            ElementState::Pressed,
            false,
        );
        manager.handle_key(InputSource::key(KeyCode::KeyW), ElementState::Pressed, true);

        assert_eq!(manager.drain(0).len(), 1);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::new(2);
        press(&mut manager, KeyCode::KeyZ);
        assert!(manager.drain(0).is_empty());
        assert!(manager.drain(1).is_empty());
        assert!(manager.take_global().is_empty());
    }

    #[test]
    fn test_detach_drops_queue_and_new_events() {
        let mut manager = InputManager::new(2);
        press(&mut manager, KeyCode::KeyD);
        manager.detach(0);
        press(&mut manager, KeyCode::KeyW);
        manager.push(0, InputEvent::press(Action::Attack));

        assert!(!manager.is_attached(0));
        assert!(manager.drain(0).is_empty());

        manager.attach(0);
        press(&mut manager, KeyCode::KeyW);
        assert_eq!(manager.drain(0), vec![InputEvent::press(Action::Jump)]);
    }

    #[test]
    fn test_global_actions_survive_detach() {
        let mut manager = InputManager::new(2);
        manager.detach_all();
        press(&mut manager, KeyCode::KeyR);
        release(&mut manager, KeyCode::KeyR);
        press(&mut manager, KeyCode::F1);

        assert_eq!(
            manager.take_global(),
            vec![Action::Restart, Action::ToggleDebug]
        );
        assert!(manager.take_global().is_empty());

        manager.attach_all();
        assert!(manager.is_attached(0) && manager.is_attached(1));
    }

    #[test]
    fn test_remapped_key() {
        let mut manager = InputManager::new(2);
        manager
            .config_mut()
            .bind(0, InputSource::key(KeyCode::KeyF), Action::Attack)
            .unwrap();
        press(&mut manager, KeyCode::KeyF);
        assert_eq!(manager.drain(0), vec![InputEvent::press(Action::Attack)]);
    }

    #[test]
    fn test_drain_unknown_player_is_empty() {
        let mut manager = InputManager::new(2);
        assert!(manager.drain(7).is_empty());
    }
}
