//! Unified input model: events, semantic actions, keymap.
//!
//! Terminal events are mapped to [`InputEvent`]s by the binary; the shell
//! resolves key events through a configurable [`Keymap`] into semantic
//! [`KeyAction`]s. Shell-level actions (quit, tab switch, help, theme) are
//! handled by the shell; everything else is forwarded to the active screen,
//! which matches on the raw key codes.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
use serde::{Deserialize, Serialize};

// ─── Input Event Abstraction ────────────────────────────────────────────────

/// High-level input event consumed by screens and the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press with modifiers.
    Key(KeyCode, KeyModifiers),
    /// A mouse event at a position.
    Mouse(MouseEventKind, u16, u16),
    /// Terminal resize.
    Resize(u16, u16),
}

// ─── Semantic Key Actions ───────────────────────────────────────────────────

/// Semantic action resolved from key bindings.
///
/// Shell-level actions are handled by the app shell; navigation and
/// interaction actions are forwarded to the active screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    // ── Shell-level ─────────────────────────────────────────────────
    /// Quit the application.
    Quit,
    /// Navigate to the next screen (tab).
    NextScreen,
    /// Navigate to the previous screen (shift-tab).
    PrevScreen,
    /// Toggle help overlay.
    ToggleHelp,
    /// Cycle to the next theme preset.
    CycleTheme,
    /// Dismiss current overlay / cancel.
    Dismiss,

    // ── Navigation ──────────────────────────────────────────────────
    /// Move focus up.
    Up,
    /// Move focus down.
    Down,
    /// Move focus left.
    Left,
    /// Move focus right.
    Right,
    /// Go to first item.
    Home,
    /// Go to last item.
    End,

    // ── Interaction ─────────────────────────────────────────────────
    /// Confirm / select / enter.
    Confirm,
    /// Delete / backspace.
    Delete,

    // ── Product-specific ────────────────────────────────────────────
    /// Custom action defined by the product crate.
    Custom(String),
}

// ─── Keymap ─────────────────────────────────────────────────────────────────

/// Configurable keymap that resolves key events to semantic actions.
pub struct Keymap {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl Keymap {
    /// Create a keymap with the default bindings.
    #[must_use]
    pub fn default_bindings() -> Self {
        let mut bindings = HashMap::new();

        // Quit
        bindings.insert((KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
        bindings.insert((KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);

        // Screen cycling
        bindings.insert((KeyCode::Tab, KeyModifiers::NONE), KeyAction::NextScreen);
        bindings.insert((KeyCode::BackTab, KeyModifiers::SHIFT), KeyAction::PrevScreen);

        // Help
        bindings.insert((KeyCode::Char('?'), KeyModifiers::NONE), KeyAction::ToggleHelp);
        bindings.insert((KeyCode::F(1), KeyModifiers::NONE), KeyAction::ToggleHelp);

        // Dismiss
        bindings.insert((KeyCode::Esc, KeyModifiers::NONE), KeyAction::Dismiss);

        // Movement
        bindings.insert((KeyCode::Up, KeyModifiers::NONE), KeyAction::Up);
        bindings.insert((KeyCode::Down, KeyModifiers::NONE), KeyAction::Down);
        bindings.insert((KeyCode::Left, KeyModifiers::NONE), KeyAction::Left);
        bindings.insert((KeyCode::Right, KeyModifiers::NONE), KeyAction::Right);
        bindings.insert((KeyCode::Char('k'), KeyModifiers::NONE), KeyAction::Up);
        bindings.insert((KeyCode::Char('j'), KeyModifiers::NONE), KeyAction::Down);
        bindings.insert((KeyCode::Char('h'), KeyModifiers::NONE), KeyAction::Left);
        bindings.insert((KeyCode::Char('l'), KeyModifiers::NONE), KeyAction::Right);
        bindings.insert((KeyCode::Home, KeyModifiers::NONE), KeyAction::Home);
        bindings.insert((KeyCode::End, KeyModifiers::NONE), KeyAction::End);

        // Theme cycling
        bindings.insert((KeyCode::Char('t'), KeyModifiers::CONTROL), KeyAction::CycleTheme);

        // Interaction
        bindings.insert((KeyCode::Enter, KeyModifiers::NONE), KeyAction::Confirm);
        bindings.insert((KeyCode::Backspace, KeyModifiers::NONE), KeyAction::Delete);

        Self { bindings }
    }

    /// Resolve a key event to a semantic action.
    #[must_use]
    pub fn resolve(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<&KeyAction> {
        self.bindings.get(&(key, modifiers))
    }

    /// Add or override a binding.
    pub fn bind(&mut self, key: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a binding.
    pub fn unbind(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        self.bindings.remove(&(key, modifiers));
    }

    /// Number of active bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the keymap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::default_bindings()
    }
}
