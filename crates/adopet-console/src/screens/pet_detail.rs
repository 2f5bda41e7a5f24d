//! Pet detail screen — the full record for the selected pet.

use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use adopet_tui::input::InputEvent;
use adopet_tui::screen::{ScreenAction, ScreenContext, ScreenId};
use adopet_tui::Screen;

use crate::screens::PET_LIST_SCREEN;
use crate::state::AppState;

/// Detail view for the pet selected on the list screen.
pub struct PetDetailScreen {
    id: ScreenId,
    state: AppState,
}

impl PetDetailScreen {
    /// Create a new pet detail screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ScreenId::new(crate::screens::PET_DETAIL_SCREEN),
            state: AppState::new(),
        }
    }

    /// Update the screen's data from shared state.
    pub fn update_state(&mut self, state: &AppState) {
        self.state = state.clone();
    }
}

impl Default for PetDetailScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PetDetailScreen {
    fn id(&self) -> &ScreenId {
        &self.id
    }

    fn title(&self) -> &'static str {
        "Detalhes do Pet"
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ScreenContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines: Vec<Line<'_>> = match self.state.selected() {
            Some(pet) => vec![
                Line::from(Span::styled(pet.name.clone(), bold)),
                Line::from(""),
                Line::from(vec![Span::styled("Idade: ", bold), Span::raw(pet.age.as_str())]),
                Line::from(vec![Span::styled("Sexo: ", bold), Span::raw(pet.sex.as_str())]),
                Line::from(vec![
                    Span::styled("História: ", bold),
                    Span::raw(pet.story.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("Foto: ", bold),
                    Span::raw(pet.photo_url.as_str()),
                ]),
                Line::from(""),
                Line::from(Span::raw("Esc/b volta para a lista")),
            ],
            None => vec![
                Line::from("Nenhum pet selecionado."),
                Line::from(""),
                Line::from("Escolha um pet na lista e pressione Enter."),
            ],
        };

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Detalhes do Pet "),
            );
        frame.render_widget(body, chunks[1]);
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> ScreenAction {
        if let InputEvent::Key(key, _mods) = event {
            match key {
                crossterm::event::KeyCode::Esc
                | crossterm::event::KeyCode::Backspace
                | crossterm::event::KeyCode::Char('b') => {
                    return ScreenAction::Navigate(ScreenId::new(PET_LIST_SCREEN));
                }
                _ => {}
            }
        }
        ScreenAction::Ignored
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::data_source::{DataSource, SeedDataSource};

    use super::*;

    fn ctx() -> ScreenContext {
        ScreenContext {
            active_screen: ScreenId::new(crate::screens::PET_DETAIL_SCREEN),
            terminal_width: 80,
            terminal_height: 24,
            focused: true,
        }
    }

    #[test]
    fn esc_returns_to_list() {
        let mut screen = PetDetailScreen::new();
        let action =
            screen.handle_input(&InputEvent::Key(KeyCode::Esc, KeyModifiers::NONE), &ctx());
        assert_eq!(
            action,
            ScreenAction::Navigate(ScreenId::new(PET_LIST_SCREEN))
        );
    }

    #[test]
    fn shows_selected_pet_from_state() {
        let mut state = AppState::new();
        for pet in SeedDataSource::new().initial_pets() {
            state.register(pet);
        }
        state.selected_pet = Some(1);

        let mut screen = PetDetailScreen::new();
        screen.update_state(&state);
        assert_eq!(
            screen.state.selected().map(|p| p.name.as_str()),
            Some("Laika")
        );
    }
}
