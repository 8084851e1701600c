//! Keybindings for the passaudit TUI.
//!
//! Printable keys belong to the password field, so every binding uses a
//! non-printable key or a Ctrl chord. Keys without a binding fall through
//! to the field.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::Command;
use crate::state::Tab;

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Controller gestures
    Submit,
    ToggleVisibility,
    SelectTab(Tab),
    /// Switch to whichever tab is not active.
    SwitchTab,

    // Field editing
    DeleteBackward,
    ClearInput,
}

impl Action {
    /// Controller command for this action, given the active tab.
    /// Returns `None` for actions the controller does not handle.
    pub fn command(self, active_tab: Tab) -> Option<Command> {
        match self {
            Action::Submit => Some(Command::Submit),
            Action::ToggleVisibility => Some(Command::ToggleVisibility),
            Action::SelectTab(tab) => Some(Command::SelectTab(tab)),
            Action::SwitchTab => Some(Command::SelectTab(active_tab.other())),
            Action::Quit | Action::DeleteBackward | Action::ClearInput => None,
        }
    }
}

/// Key-to-action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    /// Resolve a key press to an action. Event kind and state flags are
    /// ignored; only code and modifiers matter.
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&normalized).copied()
    }

    /// Add or replace a binding. Like [`KeyBindings::resolve`], only code
    /// and modifiers are kept.
    pub fn bind(&mut self, key: KeyEvent, action: Action) {
        self.bindings
            .insert(KeyEvent::new(key.code, key.modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };

        kb.bind(key_code(KeyCode::Enter), Action::Submit);

        kb.bind(ctrl('r'), Action::ToggleVisibility);
        kb.bind(key_code(KeyCode::F(2)), Action::ToggleVisibility);

        kb.bind(key_code(KeyCode::Tab), Action::SwitchTab);
        kb.bind(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::SwitchTab,
        );
        kb.bind(key_code(KeyCode::Left), Action::SelectTab(Tab::Issues));
        kb.bind(
            key_code(KeyCode::Right),
            Action::SelectTab(Tab::Recommendations),
        );

        kb.bind(key_code(KeyCode::Backspace), Action::DeleteBackward);
        kb.bind(ctrl('u'), Action::ClearInput);

        kb.bind(key_code(KeyCode::Esc), Action::Quit);

        kb
    }
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn enter_submits() {
        let kb = KeyBindings::default();
        assert_eq!(kb.resolve(key_code(KeyCode::Enter)), Some(Action::Submit));
    }

    #[test]
    fn visibility_has_two_bindings() {
        let kb = KeyBindings::default();
        assert_eq!(kb.resolve(ctrl('r')), Some(Action::ToggleVisibility));
        assert_eq!(
            kb.resolve(key_code(KeyCode::F(2))),
            Some(Action::ToggleVisibility)
        );
    }

    #[test]
    fn arrows_select_tabs() {
        let kb = KeyBindings::default();
        assert_eq!(
            kb.resolve(key_code(KeyCode::Left)),
            Some(Action::SelectTab(Tab::Issues))
        );
        assert_eq!(
            kb.resolve(key_code(KeyCode::Right)),
            Some(Action::SelectTab(Tab::Recommendations))
        );
    }

    #[test]
    fn printable_keys_are_unbound() {
        let kb = KeyBindings::default();
        for c in ['a', 'q', 'r', 'Z', '&', ' '] {
            assert_eq!(kb.resolve(key_code(KeyCode::Char(c))), None, "{:?}", c);
        }
    }

    #[test]
    fn resolve_ignores_kind_and_state() {
        let kb = KeyBindings::default();
        let mut key = key_code(KeyCode::Enter);
        key.kind = KeyEventKind::Repeat;
        key.state = KeyEventState::KEYPAD;
        assert_eq!(kb.resolve(key), Some(Action::Submit));
    }

    #[test]
    fn bind_overrides_default() {
        let mut kb = KeyBindings::default();
        kb.bind(key_code(KeyCode::Enter), Action::Quit);
        assert_eq!(kb.resolve(key_code(KeyCode::Enter)), Some(Action::Quit));
    }

    #[test]
    fn bind_ignores_event_kind() {
        let mut kb = KeyBindings::default();
        kb.bind(
            KeyEvent::new_with_kind_and_state(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
                KeyEventKind::Release,
                KeyEventState::NONE,
            ),
            Action::Quit,
        );
        assert_eq!(kb.resolve(ctrl('q')), Some(Action::Quit));
    }

    #[test]
    fn switch_tab_maps_to_other_tab() {
        assert_eq!(
            Action::SwitchTab.command(Tab::Issues),
            Some(Command::SelectTab(Tab::Recommendations))
        );
        assert_eq!(
            Action::SwitchTab.command(Tab::Recommendations),
            Some(Command::SelectTab(Tab::Issues))
        );
    }

    #[test]
    fn editing_actions_have_no_command() {
        assert_eq!(Action::DeleteBackward.command(Tab::Issues), None);
        assert_eq!(Action::ClearInput.command(Tab::Issues), None);
        assert_eq!(Action::Quit.command(Tab::Issues), None);
    }
}
