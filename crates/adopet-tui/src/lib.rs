//! Shared TUI framework for the adopet console.
//!
//! Product crates implement [`Screen`] for each view (pet list, pet detail,
//! adoption form, ...), register them in a [`screen::ScreenRegistry`], and
//! drive everything through an [`shell::AppShell`] that owns navigation,
//! chrome (tab bar + status bar), the overlay stack, and input dispatch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  product crate (adopet-console)                 │
//! │  screens, app state, form engine                │
//! ├─────────────────────────────────────────────────┤
//! │  adopet-tui (this crate)                        │
//! │  Screen, ScreenRegistry, AppShell, Keymap,      │
//! │  OverlayManager, Theme                          │
//! ├─────────────────────────────────────────────────┤
//! │  ratatui + crossterm                            │
//! └─────────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]

pub mod input;
pub mod overlay;
pub mod screen;
pub mod shell;
pub mod theme;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use input::{InputEvent, KeyAction, Keymap};
pub use overlay::{OverlayKind, OverlayManager, OverlayRequest};
pub use screen::{Screen, ScreenAction, ScreenContext, ScreenId, ScreenRegistry};
pub use shell::{AppShell, ShellConfig, StatusLine};
pub use theme::{Theme, ThemePreset};
