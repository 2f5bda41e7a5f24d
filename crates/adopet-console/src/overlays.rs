//! Overlay rendering for the console: help and alerts.
//!
//! These functions render overlay content on top of the active screen.
//! The shell manages the overlay stack; this module provides the visual
//! presentation for each overlay kind.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use adopet_tui::overlay::{OverlayKind, OverlayRequest};

// ─── Centered Popup Area ────────────────────────────────────────────────────

/// Compute a centered popup rectangle within the given area.
#[must_use]
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// ─── Help Overlay ───────────────────────────────────────────────────────────

/// Keyboard shortcut entry for the help overlay.
pub struct HelpEntry {
    /// Key combination (e.g., "Ctrl+T").
    pub key: &'static str,
    /// Description of what the shortcut does.
    pub description: &'static str,
}

/// Default keyboard shortcuts shown in the help overlay.
#[must_use]
pub fn default_help_entries() -> Vec<HelpEntry> {
    vec![
        HelpEntry { key: "?  / F1", description: "Mostrar/ocultar ajuda" },
        HelpEntry { key: "q  / Ctrl+C", description: "Sair" },
        HelpEntry { key: "Tab", description: "Próxima aba" },
        HelpEntry { key: "Shift+Tab", description: "Aba anterior" },
        HelpEntry { key: "j / Down", description: "Mover para baixo" },
        HelpEntry { key: "k / Up", description: "Mover para cima" },
        HelpEntry { key: "h / l / Espaço", description: "Alternar opção" },
        HelpEntry { key: "Enter", description: "Confirmar / abrir detalhes" },
        HelpEntry { key: "Esc / b", description: "Voltar / fechar" },
        HelpEntry { key: "Ctrl+T", description: "Alternar tema" },
    ]
}

/// Render the help overlay showing keyboard shortcuts.
pub fn render_help_overlay(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup);

    let entries = default_help_entries();
    let items: Vec<ListItem<'_>> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18}", e.key),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(e.description),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Atalhos de Teclado ")
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(list, popup);
}

// ─── Alert Overlay ──────────────────────────────────────────────────────────

/// Render an alert overlay with title and optional body.
pub fn render_alert_overlay(frame: &mut Frame<'_>, area: Rect, request: &OverlayRequest) {
    let popup = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup);

    let body_text = request.body.as_deref().unwrap_or("");

    let content = Paragraph::new(body_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", request.title))
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );

    frame.render_widget(content, popup);
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

/// Render the given overlay request on top of the current frame.
pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, request: &OverlayRequest) {
    match &request.kind {
        OverlayKind::Help => render_help_overlay(frame, area),
        OverlayKind::Alert | OverlayKind::Custom(_) => {
            render_alert_overlay(frame, area, request);
        }
    }
}
