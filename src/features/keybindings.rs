//! Keyboard shortcuts
//!
//! A small fixed table mapping key presses to actions.

use iced::keyboard::{Key, Modifiers, key::Named};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Close the song picker, or the topmost lightbox
    CloseOverlay,
    PlayPause,
    OpenSongPicker,
    /// Stop playback and deselect the track
    ClearTrack,
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Space,
    P,
    S,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Named(Named::Escape) => *self == KeyCode::Escape,
            Key::Named(Named::Space) => *self == KeyCode::Space,
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!((self, c.as_str()), (KeyCode::P, "p") | (KeyCode::S, "s"))
            }
            _ => false,
        }
    }
}

/// A keyboard shortcut consisting of an optional Ctrl modifier and a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub ctrl: bool,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self { ctrl: false, key }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key)
            && self.ctrl == modifiers.command()
            && !modifiers.alt()
            && !modifiers.shift()
    }
}

/// Fixed shortcut table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyBinding, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyBinding::new(KeyCode::Escape), Action::CloseOverlay),
                (KeyBinding::new(KeyCode::Space), Action::PlayPause),
                (KeyBinding::new(KeyCode::P).ctrl(), Action::OpenSongPicker),
                (KeyBinding::new(KeyCode::S).ctrl(), Action::ClearTrack),
            ],
        }
    }
}

impl KeyBindings {
    /// Find the action bound to a key press
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(key, modifiers))
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Escape), &Modifiers::empty()),
            Some(Action::CloseOverlay)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Space), &Modifiers::empty()),
            Some(Action::PlayPause)
        );
    }

    #[test]
    fn test_ctrl_is_required() {
        let bindings = KeyBindings::default();
        let s = Key::Character("s".into());
        assert_eq!(bindings.find_action(&s, &Modifiers::empty()), None);
        assert_eq!(
            bindings.find_action(&s, &Modifiers::COMMAND),
            Some(Action::ClearTrack)
        );
        assert_eq!(
            bindings.find_action(&Key::Character("P".into()), &Modifiers::COMMAND),
            Some(Action::OpenSongPicker)
        );
    }

    #[test]
    fn test_extra_modifiers_do_not_match() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Space), &Modifiers::SHIFT),
            None
        );
    }
}
