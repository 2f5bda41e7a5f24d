//! Adopet console: a terminal front-end for a small pet-adoption shelter.
//!
//! Built on the [`adopet-tui`] framework, the console presents four screens:
//!
//! - **Adotar**: browse the pets currently available for adoption.
//! - **Detalhes**: full record for the selected pet.
//! - **Cadastrar**: registration form for putting a new pet up for adoption,
//!   with phone/date input masks and live submittability feedback.
//! - **Sobre**: about the app.
//!
//! The [`app::ConsoleApp`] owns a single [`state::AppState`]; screens hold
//! read-only clones that the app refreshes after every state change.
//!
//! [`adopet-tui`]: adopet_tui

#![forbid(unsafe_code)]

pub mod app;
pub mod data_source;
pub mod form;
pub mod overlays;
pub mod screens;
pub mod state;
pub mod trace;

pub use app::ConsoleApp;
pub use data_source::{DataSource, SeedDataSource};
pub use form::{FormDraft, FormDerived, FormStatus};
pub use state::{AppState, Pet};
