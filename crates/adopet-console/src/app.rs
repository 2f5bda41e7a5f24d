//! Console application: owns the shell, the shared state, and the wiring
//! between them.
//!
//! `ConsoleApp` holds the single authoritative [`AppState`]. After every
//! dispatched event it polls the form screen for a finished submission,
//! syncs the list selection into shared state, and pushes a fresh state
//! clone into every screen that displays it.

use adopet_tui::overlay::{OverlayKind, OverlayRequest};
use adopet_tui::screen::ScreenId;
use adopet_tui::{AppShell, InputEvent, ShellConfig};
use ratatui::Frame;

use crate::data_source::DataSource;
use crate::form::FormStatus;
use crate::overlays;
use crate::screens::{
    AboutScreen, AdoptionFormScreen, PetDetailScreen, PetListScreen, ADOPTION_FORM_SCREEN,
    PET_DETAIL_SCREEN, PET_LIST_SCREEN,
};
use crate::state::AppState;

/// The Adopet console application.
pub struct ConsoleApp {
    shell: AppShell,
    state: AppState,
}

impl ConsoleApp {
    /// Create the app: seed the store from the data source, register all
    /// screens, and land on the pet list.
    #[must_use]
    pub fn new(source: &dyn DataSource) -> Self {
        let mut state = AppState::new();
        for pet in source.initial_pets() {
            state.register(pet);
        }
        tracing::info!(
            target: "adopet::app",
            source = source.name(),
            pets = state.pets.len(),
            "store seeded"
        );

        let mut shell = AppShell::new(ShellConfig::default());
        shell.registry.register(Box::new(PetListScreen::new()));
        shell.registry.register(Box::new(PetDetailScreen::new()));
        shell.registry.register(Box::new(AdoptionFormScreen::new()));
        shell.registry.register(Box::new(AboutScreen::new()));
        shell.navigate_to(&ScreenId::new(PET_LIST_SCREEN));

        let mut app = Self { shell, state };
        app.sync_screen_states();
        app.update_status_line();
        app
    }

    /// Dispatch one input event. Returns `true` when the app should quit.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        let quit = self.shell.handle_input(event);
        self.poll_form_submission();
        self.sync_selection();
        self.sync_screen_states();
        self.update_status_line();
        quit
    }

    /// Render the shell plus any active overlay.
    pub fn render(&mut self, frame: &mut Frame<'_>) {
        self.shell.render(frame);
        if let Some(request) = self.shell.overlays.top() {
            overlays::render_overlay(frame, frame.area(), request);
        }
    }

    /// The shared application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The underlying shell. Exposed for the run loop and tests.
    #[must_use]
    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    /// Mutable access to the shell, for the run loop and tests.
    pub fn shell_mut(&mut self) -> &mut AppShell {
        &mut self.shell
    }

    /// If the form finished a submission, register the pet, announce it,
    /// and log the registration.
    fn poll_form_submission(&mut self) {
        let form_id = ScreenId::new(ADOPTION_FORM_SCREEN);
        let submission = self
            .shell
            .registry
            .get_mut(&form_id)
            .and_then(|screen| screen.as_any_mut().downcast_mut::<AdoptionFormScreen>())
            .and_then(AdoptionFormScreen::take_submission);

        if let Some((new_pet, submitter)) = submission {
            let pet = self.state.register(new_pet);
            tracing::info!(
                target: "adopet::app",
                id = %pet.id,
                name = %pet.name,
                "pet registered"
            );
            self.shell.overlays.push(
                OverlayRequest::new(OverlayKind::Alert, "Cadastro realizado!")
                    .with_body(format!("{submitter}, seu pedido foi salvo.")),
            );
        }
    }

    /// Mirror the list screen's highlighted row into shared state so the
    /// detail screen shows the right pet.
    fn sync_selection(&mut self) {
        let list_id = ScreenId::new(PET_LIST_SCREEN);
        if let Some(selected) = self
            .shell
            .registry
            .get(&list_id)
            .and_then(|screen| screen.as_any().downcast_ref::<PetListScreen>())
            .map(PetListScreen::selected_row)
        {
            self.state.selected_pet = selected;
        }
    }

    /// Push a fresh state clone into every screen that displays it.
    fn sync_screen_states(&mut self) {
        let list_id = ScreenId::new(PET_LIST_SCREEN);
        if let Some(list) = self
            .shell
            .registry
            .get_mut(&list_id)
            .and_then(|screen| screen.as_any_mut().downcast_mut::<PetListScreen>())
        {
            list.update_state(&self.state);
        }

        let detail_id = ScreenId::new(PET_DETAIL_SCREEN);
        if let Some(detail) = self
            .shell
            .registry
            .get_mut(&detail_id)
            .and_then(|screen| screen.as_any_mut().downcast_mut::<PetDetailScreen>())
        {
            detail.update_state(&self.state);
        }
    }

    fn update_status_line(&mut self) {
        let count = self.state.pets.len();
        let pets_part = if count == 1 {
            "1 pet".to_string()
        } else {
            format!("{count} pets")
        };

        let form_id = ScreenId::new(ADOPTION_FORM_SCREEN);
        let form_part = self
            .shell
            .registry
            .get(&form_id)
            .and_then(|screen| screen.as_any().downcast_ref::<AdoptionFormScreen>())
            .map(|form| match form.derived().status {
                FormStatus::Ready => "formulário pronto",
                FormStatus::Incomplete => "formulário incompleto",
            });

        self.shell.status_line.center = match form_part {
            Some(form) => format!("{pets_part} · {form}"),
            None => pets_part,
        };
        self.shell.status_line.right = "? ajuda  q sair".to_string();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    use crate::data_source::SeedDataSource;

    use super::*;

    fn app() -> ConsoleApp {
        let mut app = ConsoleApp::new(&SeedDataSource::new());
        app.shell().set_render_area(Rect::new(0, 0, 80, 24));
        app
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(code, KeyModifiers::NONE)
    }

    #[test]
    fn new_app_seeds_store_and_lands_on_list() {
        let app = app();
        assert_eq!(app.state().pets.len(), 2);
        assert_eq!(
            app.shell().active_screen.as_ref().map(|id| id.0.as_str()),
            Some(PET_LIST_SCREEN)
        );
    }

    #[test]
    fn empty_source_starts_with_no_pets() {
        let app = ConsoleApp::new(&SeedDataSource::empty());
        assert!(app.state().pets.is_empty());
    }

    #[test]
    fn enter_on_list_opens_detail_with_selection_synced() {
        let mut app = app();
        let _ = app.handle_event(&key(KeyCode::Down));
        let _ = app.handle_event(&key(KeyCode::Enter));

        assert_eq!(
            app.shell().active_screen.as_ref().map(|id| id.0.as_str()),
            Some(PET_DETAIL_SCREEN)
        );
        assert_eq!(
            app.state().selected().map(|p| p.name.as_str()),
            Some("Laika")
        );
    }

    #[test]
    fn status_line_reports_roster_and_form() {
        let app = app();
        assert_eq!(
            app.shell().status_line.center,
            "2 pets · formulário incompleto"
        );
    }

    #[test]
    fn quit_key_on_list_quits() {
        let mut app = app();
        assert!(app.handle_event(&key(KeyCode::Char('q'))));
    }
}
