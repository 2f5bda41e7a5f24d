//! Pet list screen — the adoption roster.
//!
//! Shows every pet currently up for adoption with a summary header.
//! `Enter` opens the detail screen for the highlighted pet.

use std::any::Any;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use adopet_tui::input::InputEvent;
use adopet_tui::screen::{ScreenAction, ScreenContext, ScreenId};
use adopet_tui::Screen;

use crate::screens::PET_DETAIL_SCREEN;
use crate::state::AppState;

/// The adoption roster screen.
pub struct PetListScreen {
    id: ScreenId,
    state: AppState,
    selected_row: usize,
}

impl PetListScreen {
    /// Create a new pet list screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ScreenId::new(crate::screens::PET_LIST_SCREEN),
            state: AppState::new(),
            selected_row: 0,
        }
    }

    /// Update the screen's data from shared state.
    pub fn update_state(&mut self, state: &AppState) {
        self.state = state.clone();
        let count = self.state.pets.len();
        if count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= count {
            self.selected_row = count - 1;
        }
    }

    /// Index of the highlighted pet, if the roster is non-empty.
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        if self.state.pets.is_empty() {
            None
        } else {
            Some(self.selected_row)
        }
    }

    fn build_rows(&self) -> Vec<Row<'_>> {
        self.state
            .pets
            .iter()
            .enumerate()
            .map(|(i, pet)| {
                let style = if i == self.selected_row {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Row::new(vec![pet.name.clone(), pet.age.clone(), pet.sex.clone()]).style(style)
            })
            .collect()
    }
}

impl Default for PetListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PetListScreen {
    fn id(&self) -> &ScreenId {
        &self.id
    }

    fn title(&self) -> &'static str {
        "Pets para Adoção"
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ScreenContext) {
        let area = frame.area();

        // Top and bottom rows are covered by the shell chrome.
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let count = self.state.pets.len();
        let summary = if count == 0 {
            " Nenhum pet disponível no momento".to_string()
        } else if count == 1 {
            " 1 pet esperando um lar".to_string()
        } else {
            format!(" {count} pets esperando um lar")
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Abrigo:", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(summary),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pets para Adoção "),
        );
        frame.render_widget(header, chunks[1]);

        let header_row = Row::new(vec!["Nome", "Idade", "Sexo"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table = Table::new(
            self.build_rows(),
            [
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Length(10),
            ],
        )
        .header(header_row)
        .block(Block::default().borders(Borders::ALL).title(" Pets "));
        frame.render_widget(table, chunks[2]);
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> ScreenAction {
        if let InputEvent::Key(key, _mods) = event {
            match key {
                crossterm::event::KeyCode::Up | crossterm::event::KeyCode::Char('k') => {
                    if self.selected_row > 0 {
                        self.selected_row -= 1;
                    }
                    return ScreenAction::Consumed;
                }
                crossterm::event::KeyCode::Down | crossterm::event::KeyCode::Char('j') => {
                    let count = self.state.pets.len();
                    if count > 0 && self.selected_row < count - 1 {
                        self.selected_row += 1;
                    }
                    return ScreenAction::Consumed;
                }
                crossterm::event::KeyCode::Home => {
                    self.selected_row = 0;
                    return ScreenAction::Consumed;
                }
                crossterm::event::KeyCode::End => {
                    self.selected_row = self.state.pets.len().saturating_sub(1);
                    return ScreenAction::Consumed;
                }
                crossterm::event::KeyCode::Enter => {
                    if !self.state.pets.is_empty() {
                        return ScreenAction::Navigate(ScreenId::new(PET_DETAIL_SCREEN));
                    }
                    return ScreenAction::Consumed;
                }
                _ => {}
            }
        }
        ScreenAction::Ignored
    }

    fn semantic_role(&self) -> &'static str {
        "grid"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
