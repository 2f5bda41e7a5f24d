//! App shell: tab bar, status bar, screen lifecycle, input dispatch.
//!
//! The [`AppShell`] owns the [`ScreenRegistry`], manages navigation between
//! screens, renders the chrome (tab bar, status bar), and dispatches input
//! events to the active screen. When the active screen claims text input
//! (see [`Screen::wants_text_input`]), printable keys bypass the keymap so
//! typing into a form does not trigger single-letter shortcuts.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use serde::{Deserialize, Serialize};

use crate::input::{InputEvent, KeyAction, Keymap};
use crate::overlay::{OverlayKind, OverlayManager, OverlayRequest};
use crate::screen::{ScreenAction, ScreenContext, ScreenId, ScreenRegistry};
use crate::theme::Theme;

// ─── Shell Config ────────────────────────────────────────────────────────────

/// Configuration for the app shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Application title shown in the status bar.
    pub title: String,
    /// Theme preset to use.
    pub theme: Theme,
    /// Whether to show the status bar.
    pub show_status_bar: bool,
    /// Whether to show the tab bar.
    pub show_tab_bar: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "adopet".to_string(),
            theme: Theme::dark(),
            show_status_bar: true,
            show_tab_bar: true,
        }
    }
}

// ─── Status Line ─────────────────────────────────────────────────────────────

/// Status line content rendered at the bottom of the shell.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    /// Left-aligned status text.
    pub left: String,
    /// Center status text.
    pub center: String,
    /// Right-aligned status text.
    pub right: String,
}

impl StatusLine {
    /// Create a new status line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left-aligned text.
    #[must_use]
    pub fn with_left(mut self, text: impl Into<String>) -> Self {
        self.left = text.into();
        self
    }

    /// Set the center text.
    #[must_use]
    pub fn with_center(mut self, text: impl Into<String>) -> Self {
        self.center = text.into();
        self
    }

    /// Set the right-aligned text.
    #[must_use]
    pub fn with_right(mut self, text: impl Into<String>) -> Self {
        self.right = text.into();
        self
    }
}

// ─── App Shell ───────────────────────────────────────────────────────────────

/// The main app shell that manages screens, chrome, and input dispatch.
pub struct AppShell {
    /// Shell configuration.
    pub config: ShellConfig,
    /// Screen registry.
    pub registry: ScreenRegistry,
    /// Currently active screen ID.
    pub active_screen: Option<ScreenId>,
    /// Keymap for input resolution.
    pub keymap: Keymap,
    /// Overlay manager.
    pub overlays: OverlayManager,
    /// Status line content.
    pub status_line: StatusLine,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal area captured from the most recent render pass.
    last_render_area: Cell<Rect>,
}

impl AppShell {
    /// Create a new app shell with the given config.
    #[must_use]
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            registry: ScreenRegistry::new(),
            active_screen: None,
            keymap: Keymap::default_bindings(),
            overlays: OverlayManager::new(),
            status_line: StatusLine::new(),
            should_quit: false,
            last_render_area: Cell::new(Rect::new(0, 0, 0, 0)),
        }
    }

    /// Navigate to a screen by ID.
    pub fn navigate_to(&mut self, id: &ScreenId) {
        if self.registry.get(id).is_some() {
            if let Some(old_id) = self.active_screen.clone() {
                if let Some(screen) = self.registry.get_mut(&old_id) {
                    screen.on_blur();
                }
            }
            self.active_screen = Some(id.clone());
            if let Some(screen) = self.registry.get_mut(id) {
                screen.on_focus();
            }
        }
    }

    /// Navigate to the next screen in tab order.
    pub fn next_screen(&mut self) {
        if let Some(current) = &self.active_screen {
            if let Some(next) = self.registry.next_screen(current).cloned() {
                self.navigate_to(&next);
            }
        }
    }

    /// Navigate to the previous screen in tab order.
    pub fn prev_screen(&mut self) {
        if let Some(current) = &self.active_screen {
            if let Some(prev) = self.registry.prev_screen(current).cloned() {
                self.navigate_to(&prev);
            }
        }
    }

    /// Build the screen context for the current state.
    #[must_use]
    pub fn screen_context(&self, area: Rect) -> ScreenContext {
        ScreenContext {
            active_screen: self
                .active_screen
                .clone()
                .unwrap_or_else(|| ScreenId::new("")),
            terminal_width: area.width,
            terminal_height: area.height,
            focused: true,
        }
    }

    /// Override the terminal area used for screen contexts.
    ///
    /// Normally captured from the render pass; tests drive input without
    /// rendering and set it explicitly.
    pub fn set_render_area(&self, area: Rect) {
        self.last_render_area.set(area);
    }

    fn ensure_render_area(&self) {
        if self.last_render_area.get().width == 0 || self.last_render_area.get().height == 0 {
            if let Ok((width, height)) = crossterm::terminal::size() {
                self.last_render_area.set(Rect::new(0, 0, width, height));
            } else {
                // Fallback keeps context sane in non-interactive test harnesses.
                self.last_render_area.set(Rect::new(0, 0, 80, 24));
            }
        }
    }

    /// Whether the active screen is currently capturing free text entry.
    #[must_use]
    pub fn text_input_active(&self) -> bool {
        self.active_screen
            .as_ref()
            .and_then(|id| self.registry.get(id))
            .is_some_and(|screen| screen.wants_text_input())
    }

    /// Handle an input event. Returns `true` if the app should quit.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Resize(width, height) = event {
            self.last_render_area.set(Rect::new(0, 0, *width, *height));
        }
        self.ensure_render_area();

        // An active overlay swallows input; only Esc dismisses it.
        if self.overlays.has_active() {
            if let InputEvent::Key(key, mods) = event {
                if self.keymap.resolve(*key, *mods) == Some(&KeyAction::Dismiss) {
                    self.overlays.dismiss();
                }
            }
            return false;
        }

        // Text-entry mode: the form owns printable keys. Only Ctrl+C and
        // tab cycling stay shell-level so the user can always leave.
        if self.text_input_active() {
            if let InputEvent::Key(key, mods) = event {
                if *key == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
                    self.should_quit = true;
                    return true;
                }
                if *key == KeyCode::Tab {
                    self.next_screen();
                    return false;
                }
                if *key == KeyCode::BackTab {
                    self.prev_screen();
                    return false;
                }
            }
            return self.forward_to_active_screen(event);
        }

        // Resolve shell-level key actions.
        if let InputEvent::Key(key, mods) = event {
            if let Some(action) = self.keymap.resolve(*key, *mods).cloned() {
                match action {
                    KeyAction::Quit => {
                        self.should_quit = true;
                        return true;
                    }
                    KeyAction::NextScreen => {
                        self.next_screen();
                        return false;
                    }
                    KeyAction::PrevScreen => {
                        self.prev_screen();
                        return false;
                    }
                    KeyAction::ToggleHelp => {
                        if self
                            .overlays
                            .top()
                            .is_some_and(|o| o.kind == OverlayKind::Help)
                        {
                            self.overlays.dismiss();
                        } else {
                            self.overlays.push(OverlayRequest::new(
                                OverlayKind::Help,
                                "Atalhos de Teclado",
                            ));
                        }
                        return false;
                    }
                    KeyAction::CycleTheme => {
                        self.config.theme = Theme::from_preset(self.config.theme.preset.next());
                        return false;
                    }
                    _ => {}
                }
            }
        }

        self.forward_to_active_screen(event)
    }

    fn forward_to_active_screen(&mut self, event: &InputEvent) -> bool {
        if let Some(screen_id) = self.active_screen.clone() {
            let ctx = self.screen_context(self.last_render_area.get());
            if let Some(screen) = self.registry.get_mut(&screen_id) {
                match screen.handle_input(event, &ctx) {
                    ScreenAction::Quit => {
                        self.should_quit = true;
                        return true;
                    }
                    ScreenAction::Navigate(target) => {
                        self.navigate_to(&target);
                    }
                    ScreenAction::OpenOverlay(name) => {
                        self.overlays.push(OverlayRequest::new(
                            OverlayKind::Custom(name.clone()),
                            name,
                        ));
                    }
                    ScreenAction::Consumed | ScreenAction::Ignored => {}
                }
            }
        }
        false
    }

    /// Render the shell chrome and active screen.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        self.last_render_area.set(area);
        let ctx = self.screen_context(area);

        let show_tabs = self.config.show_tab_bar && self.registry.len() > 1;
        let mut constraints = Vec::new();
        if show_tabs {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(1));
        if self.config.show_status_bar {
            constraints.push(Constraint::Length(1));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut idx = 0;
        if show_tabs {
            idx += 1;
        }
        let content_area = chunks[idx];
        idx += 1;

        // Screens paint the full frame; chrome goes on top afterwards.
        if let Some(screen_id) = &self.active_screen {
            if let Some(screen) = self.registry.get(screen_id) {
                screen.render(frame, &ctx);
            }
        } else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.config.theme.border.to_ratatui()))
                .style(
                    Style::default()
                        .bg(self.config.theme.bg.to_ratatui())
                        .fg(self.config.theme.fg.to_ratatui()),
                );
            let placeholder = Paragraph::new("Nenhuma tela registrada").block(block);
            frame.render_widget(placeholder, content_area);
        }

        if show_tabs {
            self.render_tab_bar(frame, chunks[0]);
        }
        if self.config.show_status_bar {
            self.render_status_bar(frame, chunks[idx]);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let titles: Vec<Line<'_>> = self
            .registry
            .screen_ids()
            .iter()
            .map(|id| {
                Line::from(
                    self.registry
                        .get(id)
                        .map_or_else(|| id.0.clone(), |s| s.title().to_string()),
                )
            })
            .collect();
        let selected = self
            .active_screen
            .as_ref()
            .and_then(|active| {
                self.registry
                    .screen_ids()
                    .iter()
                    .position(|id| id == active)
            })
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(self.config.theme.highlight_fg.to_ratatui())
                    .bg(self.config.theme.highlight_bg.to_ratatui())
                    .add_modifier(Modifier::BOLD),
            )
            .style(
                Style::default()
                    .fg(self.config.theme.muted.to_ratatui())
                    .bg(self.config.theme.bg.to_ratatui()),
            );
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let status_text = if self.status_line.center.is_empty() {
            format!(" {} ", self.config.title)
        } else {
            format!(" {} │ {} ", self.config.title, self.status_line.center)
        };

        let status_spans = vec![
            Span::styled(
                self.status_line.left.as_str(),
                Style::default().fg(self.config.theme.status_bar_fg.to_ratatui()),
            ),
            Span::styled(
                status_text,
                Style::default()
                    .fg(self.config.theme.status_bar_fg.to_ratatui())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                self.status_line.right.as_str(),
                Style::default().fg(self.config.theme.status_bar_fg.to_ratatui()),
            ),
        ];

        let status = Paragraph::new(Line::from(status_spans))
            .style(Style::default().bg(self.config.theme.status_bar_bg.to_ratatui()));
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::{Arc, Mutex};

    use ratatui::Frame;

    use crate::screen::{Screen, ScreenAction};
    use crate::theme::ThemePreset;

    use super::*;

    /// Minimal stub screen for navigation/lifecycle tests.
    struct StubScreen {
        id: ScreenId,
        title: &'static str,
        focused: Arc<Mutex<bool>>,
        text_input: bool,
        seen_keys: Arc<Mutex<Vec<KeyCode>>>,
    }

    impl StubScreen {
        fn new(id: &str, title: &'static str) -> Self {
            Self {
                id: ScreenId::new(id),
                title,
                focused: Arc::new(Mutex::new(false)),
                text_input: false,
                seen_keys: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn text_entry(id: &str) -> Self {
            Self {
                text_input: true,
                ..Self::new(id, "entry")
            }
        }
    }

    impl Screen for StubScreen {
        fn id(&self) -> &ScreenId {
            &self.id
        }

        fn title(&self) -> &str {
            self.title
        }

        fn render(&self, _frame: &mut Frame<'_>, _ctx: &ScreenContext) {}

        fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> ScreenAction {
            if let InputEvent::Key(key, _) = event {
                self.seen_keys.lock().unwrap().push(*key);
            }
            ScreenAction::Ignored
        }

        fn on_focus(&mut self) {
            *self.focused.lock().unwrap() = true;
        }

        fn on_blur(&mut self) {
            *self.focused.lock().unwrap() = false;
        }

        fn wants_text_input(&self) -> bool {
            self.text_input
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(code, KeyModifiers::NONE)
    }

    #[test]
    fn shell_config_default() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "adopet");
        assert!(config.show_status_bar);
        assert!(config.show_tab_bar);
    }

    #[test]
    fn shell_config_serde_roundtrip() {
        let config = ShellConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let decoded: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.title, config.title);
    }

    #[test]
    fn status_line_builder() {
        let status = StatusLine::new()
            .with_left("left")
            .with_center("center")
            .with_right("right");
        assert_eq!(status.left, "left");
        assert_eq!(status.center, "center");
        assert_eq!(status.right, "right");
    }

    #[test]
    fn shell_creation() {
        let shell = AppShell::new(ShellConfig::default());
        assert!(!shell.should_quit);
        assert!(shell.active_screen.is_none());
        assert!(shell.registry.is_empty());
    }

    #[test]
    fn shell_quit_on_q() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        let quit = shell.handle_input(&key(KeyCode::Char('q')));
        assert!(quit);
        assert!(shell.should_quit);
    }

    #[test]
    fn navigate_to_nonexistent_screen_is_noop() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.navigate_to(&ScreenId::new("nonexistent"));
        assert!(shell.active_screen.is_none());
    }

    #[test]
    fn navigate_blurs_old_focuses_new() {
        let mut shell = AppShell::new(ShellConfig::default());
        let screen_a = StubScreen::new("a", "A");
        let screen_b = StubScreen::new("b", "B");
        let focused_a = Arc::clone(&screen_a.focused);
        let focused_b = Arc::clone(&screen_b.focused);
        shell.registry.register(Box::new(screen_a));
        shell.registry.register(Box::new(screen_b));

        shell.navigate_to(&ScreenId::new("a"));
        assert!(*focused_a.lock().unwrap());

        shell.navigate_to(&ScreenId::new("b"));
        assert!(!*focused_a.lock().unwrap(), "old screen should be blurred");
        assert!(*focused_b.lock().unwrap(), "new screen should be focused");
    }

    #[test]
    fn tab_key_cycles_screens() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        shell.registry.register(Box::new(StubScreen::new("a", "A")));
        shell.registry.register(Box::new(StubScreen::new("b", "B")));
        shell.navigate_to(&ScreenId::new("a"));

        let _ = shell.handle_input(&key(KeyCode::Tab));
        assert_eq!(shell.active_screen.as_ref(), Some(&ScreenId::new("b")));

        let shift_tab = InputEvent::Key(KeyCode::BackTab, KeyModifiers::SHIFT);
        let _ = shell.handle_input(&shift_tab);
        assert_eq!(shell.active_screen.as_ref(), Some(&ScreenId::new("a")));
    }

    #[test]
    fn help_opens_and_esc_dismisses() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));

        let _ = shell.handle_input(&key(KeyCode::Char('?')));
        assert!(shell.overlays.has_active());

        let _ = shell.handle_input(&key(KeyCode::Esc));
        assert!(!shell.overlays.has_active());
    }

    #[test]
    fn overlay_active_blocks_screen_input() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        let screen = StubScreen::new("a", "A");
        let seen = Arc::clone(&screen.seen_keys);
        shell.registry.register(Box::new(screen));
        shell.navigate_to(&ScreenId::new("a"));

        let _ = shell.handle_input(&key(KeyCode::Char('?')));
        assert!(shell.overlays.has_active());

        let _ = shell.handle_input(&key(KeyCode::Char('x')));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn text_entry_screen_receives_bound_letters() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        let screen = StubScreen::text_entry("form");
        let seen = Arc::clone(&screen.seen_keys);
        shell.registry.register(Box::new(screen));
        shell.navigate_to(&ScreenId::new("form"));

        // 'q' normally quits; in text-entry mode it reaches the screen.
        let quit = shell.handle_input(&key(KeyCode::Char('q')));
        assert!(!quit);
        assert_eq!(seen.lock().unwrap().as_slice(), &[KeyCode::Char('q')]);
    }

    #[test]
    fn text_entry_still_quits_on_ctrl_c() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        shell
            .registry
            .register(Box::new(StubScreen::text_entry("form")));
        shell.navigate_to(&ScreenId::new("form"));

        let ctrl_c = InputEvent::Key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let quit = shell.handle_input(&ctrl_c);
        assert!(quit);
    }

    #[test]
    fn text_entry_still_cycles_with_tab() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        shell
            .registry
            .register(Box::new(StubScreen::text_entry("form")));
        shell.registry.register(Box::new(StubScreen::new("b", "B")));
        shell.navigate_to(&ScreenId::new("form"));

        let _ = shell.handle_input(&key(KeyCode::Tab));
        assert_eq!(shell.active_screen.as_ref(), Some(&ScreenId::new("b")));
    }

    #[test]
    fn ctrl_t_cycles_theme() {
        let mut shell = AppShell::new(ShellConfig::default());
        shell.set_render_area(Rect::new(0, 0, 80, 24));
        assert_eq!(shell.config.theme.preset, ThemePreset::Dark);

        let ctrl_t = InputEvent::Key(KeyCode::Char('t'), KeyModifiers::CONTROL);
        let _ = shell.handle_input(&ctrl_t);
        assert_eq!(shell.config.theme.preset, ThemePreset::Light);
    }

    #[test]
    fn resize_event_refreshes_context_dimensions() {
        let mut shell = AppShell::new(ShellConfig::default());
        let _ = shell.handle_input(&InputEvent::Resize(111, 37));
        let ctx = shell.screen_context(shell.last_render_area.get());
        assert_eq!(ctx.terminal_width, 111);
        assert_eq!(ctx.terminal_height, 37);
    }
}
