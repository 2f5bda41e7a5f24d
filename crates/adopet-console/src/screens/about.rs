//! About screen — static description of the shelter.

use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use adopet_tui::input::InputEvent;
use adopet_tui::screen::{ScreenAction, ScreenContext, ScreenId};
use adopet_tui::Screen;

/// Static "about" screen.
pub struct AboutScreen {
    id: ScreenId,
}

impl AboutScreen {
    /// Create a new about screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ScreenId::new(crate::screens::ABOUT_SCREEN),
        }
    }
}

impl Default for AboutScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for AboutScreen {
    fn id(&self) -> &ScreenId {
        &self.id
    }

    fn title(&self) -> &'static str {
        "Sobre"
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ScreenContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let lines = vec![
            Line::from(Span::styled(
                "Sobre o Abrigo",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Esse é um app fictício para adoção de pets."),
        ];
        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Sobre "));
        frame.render_widget(body, chunks[1]);
    }

    fn handle_input(&mut self, _event: &InputEvent, _ctx: &ScreenContext) -> ScreenAction {
        ScreenAction::Ignored
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
