//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key map
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));

    // Record operations
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));

    // Domain toggles
    pub const TOGGLE_LOCK: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const TOGGLE_AUTO_RENEWAL: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));

    // Login page
    pub const SWITCH_MODE: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn bindings_match_exact_modifiers() {
        assert!(DefaultKeymap::FORCE_QUIT.matches(&press(
            KeyModifiers::CONTROL,
            KeyCode::Char('c')
        )));
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&press(KeyModifiers::NONE, KeyCode::Char('c'))));
        assert!(DefaultKeymap::SEARCH.matches(&press(KeyModifiers::NONE, KeyCode::Char('/'))));
    }
}
