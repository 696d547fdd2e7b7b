// Key binding tables and runtime remapping

use super::action::{default_p1_bindings, default_p2_bindings, global_bindings, Action, InputSource};
use log::debug;
use std::collections::HashMap;

/// Who a binding table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingScope {
    Player(usize),
    /// Keys handled outside any fighter (restart, debug overlay)
    Global,
}

/// Remapping errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("No player {0}")]
    UnknownPlayer(usize),

    #[error("{0:?} is reserved for {1:?}")]
    Reserved(InputSource, Action),
}

/// One scope's key table: each source maps to at most one action
#[derive(Debug, Clone)]
pub struct InputConfig {
    scope: BindingScope,
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Empty table
    pub fn new(scope: BindingScope) -> Self {
        Self {
            scope,
            bindings: HashMap::new(),
        }
    }

    /// Table holding the scope's default keys
    pub fn with_defaults(scope: BindingScope) -> Self {
        let mut config = Self::new(scope);
        config.reset_to_defaults();
        config
    }

    pub fn scope(&self) -> BindingScope {
        self.scope
    }

    /// Bind `source` to `action`, returning what it was bound to before
    pub fn bind(&mut self, source: InputSource, action: Action) -> Option<Action> {
        self.bindings.insert(source, action)
    }

    pub fn unbind_source(&mut self, source: InputSource) -> Option<Action> {
        self.bindings.remove(&source)
    }

    /// Drop every key bound to `action`; returns how many were removed
    pub fn unbind_action(&mut self, action: Action) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|_, bound| *bound != action);
        before - self.bindings.len()
    }

    pub fn action_for(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    pub fn sources_for(&self, action: Action) -> Vec<InputSource> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(source, _)| *source)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Replace the table with the scope's defaults
    ///
    /// Players beyond the second have no default keys.
    pub fn reset_to_defaults(&mut self) {
        let defaults = match self.scope {
            BindingScope::Player(0) => default_p1_bindings(),
            BindingScope::Player(1) => default_p2_bindings(),
            BindingScope::Player(_) => Vec::new(),
            BindingScope::Global => global_bindings(),
        };
        self.bindings = defaults.into_iter().collect();
    }
}

/// Binding tables for every player plus the global keys
///
/// A key drives at most one player, and keys in the global table cannot be
/// taken by a player, so restart and the debug toggle always get through.
#[derive(Debug)]
pub struct InputConfigManager {
    players: Vec<InputConfig>,
    global: InputConfig,
}

impl InputConfigManager {
    pub fn new(num_players: usize) -> Self {
        Self {
            players: (0..num_players)
                .map(|id| InputConfig::with_defaults(BindingScope::Player(id)))
                .collect(),
            global: InputConfig::with_defaults(BindingScope::Global),
        }
    }

    pub fn player(&self, player_id: usize) -> Option<&InputConfig> {
        self.players.get(player_id)
    }

    pub fn global(&self) -> &InputConfig {
        &self.global
    }

    /// Bind a key for one player, taking it away from any other player
    pub fn bind(
        &mut self,
        player_id: usize,
        source: InputSource,
        action: Action,
    ) -> Result<Option<Action>, BindError> {
        if let Some(reserved) = self.global.action_for(source) {
            return Err(BindError::Reserved(source, reserved));
        }
        if player_id >= self.players.len() {
            return Err(BindError::UnknownPlayer(player_id));
        }

        for (other, config) in self.players.iter_mut().enumerate() {
            if other != player_id && config.unbind_source(source).is_some() {
                debug!("{:?} moved from player {} to player {}", source, other, player_id);
            }
        }

        Ok(self.players[player_id].bind(source, action))
    }

    pub fn unbind_source(
        &mut self,
        player_id: usize,
        source: InputSource,
    ) -> Result<Option<Action>, BindError> {
        self.players
            .get_mut(player_id)
            .map(|config| config.unbind_source(source))
            .ok_or(BindError::UnknownPlayer(player_id))
    }

    pub fn unbind_action(&mut self, player_id: usize, action: Action) -> Result<usize, BindError> {
        self.players
            .get_mut(player_id)
            .map(|config| config.unbind_action(action))
            .ok_or(BindError::UnknownPlayer(player_id))
    }

    /// Action a player has bound to `source`
    pub fn action_for(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.player(player_id)?.action_for(source)
    }

    pub fn global_action(&self, source: InputSource) -> Option<Action> {
        self.global.action_for(source)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn reset_all_to_defaults(&mut self) {
        for config in &mut self.players {
            config.reset_to_defaults();
        }
        self.global.reset_to_defaults();
    }
}

impl Default for InputConfigManager {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn key(code: KeyCode) -> InputSource {
        InputSource::key(code)
    }

    #[test]
    fn test_rebind_replaces_previous_action() {
        let mut config = InputConfig::new(BindingScope::Player(0));
        assert_eq!(config.bind(key(KeyCode::KeyA), Action::MoveLeft), None);
        assert_eq!(
            config.bind(key(KeyCode::KeyA), Action::MoveRight),
            Some(Action::MoveLeft)
        );
        assert_eq!(config.action_for(key(KeyCode::KeyA)), Some(Action::MoveRight));
        assert!(config.sources_for(Action::MoveLeft).is_empty());
    }

    #[test]
    fn test_unbind_action_removes_every_key() {
        let mut config = InputConfig::new(BindingScope::Player(0));
        config.bind(key(KeyCode::KeyA), Action::MoveLeft);
        config.bind(key(KeyCode::ArrowLeft), Action::MoveLeft);
        config.bind(key(KeyCode::Space), Action::Attack);

        assert_eq!(config.unbind_action(Action::MoveLeft), 2);
        assert_eq!(config.len(), 1);
        assert_eq!(config.action_for(key(KeyCode::ArrowLeft)), None);
    }

    #[test]
    fn test_player_defaults() {
        let one = InputConfig::with_defaults(BindingScope::Player(0));
        let two = InputConfig::with_defaults(BindingScope::Player(1));
        let three = InputConfig::with_defaults(BindingScope::Player(2));

        assert_eq!(one.action_for(key(KeyCode::KeyW)), Some(Action::Jump));
        assert_eq!(one.action_for(key(KeyCode::Space)), Some(Action::Attack));
        assert_eq!(two.action_for(key(KeyCode::ArrowDown)), Some(Action::Attack));
        assert_eq!(two.action_for(key(KeyCode::KeyA)), None);
        assert!(three.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut config = InputConfig::with_defaults(BindingScope::Player(0));
        config.unbind_source(key(KeyCode::KeyA));
        config.bind(key(KeyCode::KeyZ), Action::MoveLeft);
        config.reset_to_defaults();

        assert_eq!(config.action_for(key(KeyCode::KeyA)), Some(Action::MoveLeft));
        assert_eq!(config.action_for(key(KeyCode::KeyZ)), None);
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_global_keys_stay_out_of_player_tables() {
        let manager = InputConfigManager::new(2);
        let restart = key(KeyCode::KeyR);

        assert_eq!(manager.global_action(restart), Some(Action::Restart));
        assert_eq!(manager.action_for(0, restart), None);
        assert_eq!(manager.action_for(1, restart), None);
        assert_eq!(manager.global().scope(), BindingScope::Global);
    }

    #[test]
    fn test_reserved_key_cannot_be_bound() {
        let mut manager = InputConfigManager::new(2);
        assert_eq!(
            manager.bind(0, key(KeyCode::F1), Action::Attack),
            Err(BindError::Reserved(key(KeyCode::F1), Action::ToggleDebug))
        );
        assert_eq!(manager.action_for(0, key(KeyCode::F1)), None);
    }

    #[test]
    fn test_key_moves_between_players() {
        let mut manager = InputConfigManager::new(2);
        let space = key(KeyCode::Space);

        assert_eq!(manager.bind(1, space, Action::Jump), Ok(None));
        assert_eq!(manager.action_for(1, space), Some(Action::Jump));
        assert_eq!(manager.action_for(0, space), None);
    }

    #[test]
    fn test_unknown_player() {
        let mut manager = InputConfigManager::new(2);
        assert_eq!(
            manager.bind(5, key(KeyCode::KeyQ), Action::Attack),
            Err(BindError::UnknownPlayer(5))
        );
        assert_eq!(
            manager.unbind_source(5, key(KeyCode::KeyQ)),
            Err(BindError::UnknownPlayer(5))
        );
        assert_eq!(manager.action_for(5, key(KeyCode::KeyA)), None);
    }

    #[test]
    fn test_reset_all() {
        let mut manager = InputConfigManager::default();
        assert_eq!(manager.unbind_action(0, Action::MoveLeft), Ok(1));
        assert_eq!(
            manager.unbind_source(1, key(KeyCode::ArrowUp)),
            Ok(Some(Action::Jump))
        );

        manager.reset_all_to_defaults();
        assert_eq!(manager.action_for(0, key(KeyCode::KeyA)), Some(Action::MoveLeft));
        assert_eq!(manager.action_for(1, key(KeyCode::ArrowUp)), Some(Action::Jump));
        assert_eq!(manager.num_players(), 2);
    }
}
