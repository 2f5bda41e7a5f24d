//! Adoption form screen — register a new pet for adoption.
//!
//! Ten fields plus a submit control. Field focus moves with `Up`/`Down`;
//! printable characters and `Backspace` edit the focused text field, with
//! the phone and date masks reapplied after every keystroke. Choice fields
//! cycle with `Left`/`Right`/`Space`. While a text field is focused the
//! screen claims text input so shell shortcuts stay out of the way.

use std::any::Any;

use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use adopet_tui::input::InputEvent;
use adopet_tui::screen::{ScreenAction, ScreenContext, ScreenId};
use adopet_tui::Screen;

use crate::form::{
    Choice, FormDerived, FormDraft, AGE_CHOICES, SEX_CHOICES, SIZE_CHOICES, SPECIES_CHOICES,
};
use crate::state::NewPet;

// ─── Field Focus ─────────────────────────────────────────────────────────────

/// The focusable positions on the form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Date,
    Password,
    ConfirmPassword,
    Species,
    Sex,
    Age,
    Size,
    Submit,
}

impl FormField {
    const ALL: [Self; 11] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Date,
        Self::Password,
        Self::ConfirmPassword,
        Self::Species,
        Self::Sex,
        Self::Age,
        Self::Size,
        Self::Submit,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Whether the field accepts free text.
    fn is_text(self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Email
                | Self::Phone
                | Self::Date
                | Self::Password
                | Self::ConfirmPassword
        )
    }

    fn choices(self) -> Option<&'static [Choice]> {
        match self {
            Self::Species => Some(SPECIES_CHOICES),
            Self::Sex => Some(SEX_CHOICES),
            Self::Age => Some(AGE_CHOICES),
            Self::Size => Some(SIZE_CHOICES),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome Completo",
            Self::Email => "E-mail",
            Self::Phone => "Celular",
            Self::Date => "Data de Nascimento",
            Self::Password => "Senha",
            Self::ConfirmPassword => "Confirmar Senha",
            Self::Species => "Espécie",
            Self::Sex => "Sexo",
            Self::Age => "Idade",
            Self::Size => "Porte",
            Self::Submit => "Quero Adotar!",
        }
    }
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// The registration form screen.
pub struct AdoptionFormScreen {
    id: ScreenId,
    draft: FormDraft,
    derived: FormDerived,
    focus: FormField,
    pending: Option<(NewPet, String)>,
}

impl AdoptionFormScreen {
    /// Create a new adoption form screen with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        let draft = FormDraft::default();
        let derived = FormDerived::from_draft(&draft);
        Self {
            id: ScreenId::new(crate::screens::ADOPTION_FORM_SCREEN),
            draft,
            derived,
            focus: FormField::Name,
            pending: None,
        }
    }

    /// The current derived view (masks + submittability).
    #[must_use]
    pub fn derived(&self) -> &FormDerived {
        &self.derived
    }

    /// The current draft. Exposed for status display and tests.
    #[must_use]
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Take the submission produced by the last `Enter` on the submit
    /// control, if any. The app polls this after dispatching input.
    pub fn take_submission(&mut self) -> Option<(NewPet, String)> {
        self.pending.take()
    }

    /// Recompute the derived view and write the masks back into the draft
    /// so the displayed text always matches what validation sees.
    fn recompute(&mut self) {
        self.derived = FormDerived::from_draft(&self.draft);
        self.draft.phone = self.derived.masked_phone.clone();
        self.draft.date = self.derived.masked_date.clone();
    }

    fn text_value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Email => Some(&mut self.draft.email),
            FormField::Phone => Some(&mut self.draft.phone),
            FormField::Date => Some(&mut self.draft.date),
            FormField::Password => Some(&mut self.draft.password),
            FormField::ConfirmPassword => Some(&mut self.draft.confirm_password),
            _ => None,
        }
    }

    fn choice_value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Species => Some(&mut self.draft.species),
            FormField::Sex => Some(&mut self.draft.sex),
            FormField::Age => Some(&mut self.draft.age),
            FormField::Size => Some(&mut self.draft.size),
            _ => None,
        }
    }

    fn cycle_choice(&mut self, field: FormField, forward: bool) {
        let Some(choices) = field.choices() else {
            return;
        };
        let Some(value) = self.choice_value_mut(field) else {
            return;
        };
        let current = choices.iter().position(|c| c.value == *value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => choices.len() - 1,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
        };
        *value = choices[next].value.to_string();
        self.recompute();
    }

    fn edit_text(&mut self, key: KeyCode) -> bool {
        let field = self.focus;
        let Some(value) = self.text_value_mut(field) else {
            return false;
        };
        match key {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => return false,
        }
        self.recompute();
        true
    }

    fn submit(&mut self) {
        if !self.derived.submittable() {
            return;
        }
        let pet = self.draft.build_pet();
        let submitter = self.draft.name.clone();
        self.pending = Some((pet, submitter));
        self.draft.reset();
        self.focus = FormField::Name;
        self.recompute();
    }

    fn text_field_line(&self, field: FormField) -> Line<'_> {
        let focused = self.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let shown = match field {
            FormField::Name => self.draft.name.clone(),
            FormField::Email => self.draft.email.clone(),
            FormField::Phone => self.draft.phone.clone(),
            FormField::Date => self.draft.date.clone(),
            FormField::Password => "•".repeat(self.draft.password.chars().count()),
            FormField::ConfirmPassword => {
                "•".repeat(self.draft.confirm_password.chars().count())
            }
            _ => String::new(),
        };
        let value_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<20}", field.label()), Style::default()),
            Span::styled(if shown.is_empty() { " ".to_string() } else { shown }, value_style),
        ])
    }

    fn choice_field_line(&self, field: FormField) -> Line<'_> {
        let focused = self.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let selected = match field {
            FormField::Species => &self.draft.species,
            FormField::Sex => &self.draft.sex,
            FormField::Age => &self.draft.age,
            FormField::Size => &self.draft.size,
            _ => return Line::from(""),
        };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{:<20}", field.label()), Style::default()),
        ];
        for choice in field.choices().unwrap_or_default() {
            let picked = *selected == choice.value;
            let style = match (picked, focused) {
                (true, true) => Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                (true, false) => Style::default().add_modifier(Modifier::BOLD),
                (false, true) => Style::default(),
                (false, false) => Style::default().fg(Color::DarkGray),
            };
            let text = if picked {
                format!("[{}] ", choice.label)
            } else {
                format!(" {}  ", choice.label)
            };
            spans.push(Span::styled(text, style));
        }
        Line::from(spans)
    }
}

impl Default for AdoptionFormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for AdoptionFormScreen {
    fn id(&self) -> &ScreenId {
        &self.id
    }

    fn title(&self) -> &'static str {
        "Cadastrar"
    }

    fn render(&self, frame: &mut Frame<'_>, _ctx: &ScreenContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(Span::styled("Seus Dados", bold))];
        for field in [
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::Date,
            FormField::Password,
            FormField::ConfirmPassword,
        ] {
            lines.push(self.text_field_line(field));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Preferências para Adoção", bold)));
        for field in [
            FormField::Species,
            FormField::Sex,
            FormField::Age,
            FormField::Size,
        ] {
            lines.push(self.choice_field_line(field));
        }
        lines.push(Line::from(""));

        let submit_focused = self.focus == FormField::Submit;
        let ready = self.derived.submittable();
        let submit_style = match (ready, submit_focused) {
            (true, true) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, false) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::REVERSED),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        lines.push(Line::from(vec![
            Span::raw(if submit_focused { "▸ " } else { "  " }),
            Span::styled("[ Quero Adotar! ]", submit_style),
        ]));
        if !ready {
            lines.push(Line::from(Span::styled(
                "  Preencha todos os campos para enviar.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let body = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Cadastrar Pet "),
        );
        frame.render_widget(body, chunks[1]);
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> ScreenAction {
        let InputEvent::Key(key, _mods) = event else {
            return ScreenAction::Ignored;
        };

        match key {
            KeyCode::Up => {
                self.focus = self.focus.prev();
                return ScreenAction::Consumed;
            }
            KeyCode::Down => {
                self.focus = self.focus.next();
                return ScreenAction::Consumed;
            }
            KeyCode::Enter => {
                if self.focus == FormField::Submit {
                    self.submit();
                } else {
                    self.focus = self.focus.next();
                }
                return ScreenAction::Consumed;
            }
            _ => {}
        }

        if self.focus.is_text() {
            if self.edit_text(*key) {
                return ScreenAction::Consumed;
            }
            return ScreenAction::Ignored;
        }

        if self.focus.choices().is_some() {
            match key {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.cycle_choice(self.focus, false);
                    return ScreenAction::Consumed;
                }
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                    self.cycle_choice(self.focus, true);
                    return ScreenAction::Consumed;
                }
                _ => {}
            }
        }

        ScreenAction::Ignored
    }

    fn wants_text_input(&self) -> bool {
        self.focus.is_text()
    }

    fn semantic_role(&self) -> &'static str {
        "form"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
