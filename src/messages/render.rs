//! Render state - data structure sent from App layer to UI for rendering

use crate::app::forms::Dialog;
use crate::app::state::ToastSeverity;
use crate::cache::Query;
use crate::messages::ui_events::{Screen, UiMode};
use crate::models::{Allergy, Appointment, AppointmentFilter, User, Vaccine};

/// One listing plus the table cursor, snapshotted for drawing
#[derive(Debug, Clone)]
pub struct TableView<T> {
    pub items: Vec<T>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Clone> TableView<T> {
    pub fn from_query(query: &Query<T>, selected: usize) -> Self {
        TableView {
            items: query.items().to_vec(),
            selected,
            loading: query.is_loading(),
            error: query.error.clone(),
        }
    }
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        TableView {
            items: Vec::new(),
            selected: 0,
            loading: false,
            error: None,
        }
    }
}

/// Confirmation dialog snapshot (the pending action stays in the app layer)
#[derive(Debug, Clone)]
pub struct ConfirmView {
    pub title: String,
    pub message: String,
    pub busy: bool,
}

/// Toast snapshot
#[derive(Debug, Clone)]
pub struct ToastView {
    pub message: String,
    pub severity: ToastSeverity,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub screen: Screen,
    pub mode: UiMode,
    pub home_selected: usize,

    pub vaccines: TableView<Vaccine>,
    pub allergies: TableView<Allergy>,
    pub users: TableView<User>,
    pub appointments: TableView<Appointment>,

    pub filter: AppointmentFilter,

    pub dialog: Dialog,
    pub confirm: Option<ConfirmView>,
    pub toast: Option<ToastView>,
    pub show_help: bool,
}
