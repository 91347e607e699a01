//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Duration, Utc};

use crate::app::forms::Dialog;
use crate::cache::QueryCache;
use crate::constants::TOAST_SECONDS;
use crate::messages::render::{ConfirmView, RenderState, TableView, ToastView};
use crate::messages::ui_events::{Screen, UiMode};
use crate::models::AppointmentFilter;

/// Severity of a toast notification
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// Transient notification shown in the status line until it expires
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
    pub expires_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: ToastSeverity) -> Self {
        Toast {
            message: message.into(),
            severity,
            expires_at: Utc::now() + Duration::seconds(TOAST_SECONDS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// The destructive action a confirmation dialog is guarding
#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmAction {
    DeleteVaccine(String),
    DeleteAllergy(String),
    DeleteUser(String),
    DeleteAppointment(String),
}

/// Confirmation dialog descriptor; `busy` is set while the confirmed
/// action's request is in flight
#[derive(Clone, Debug)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
    pub busy: bool,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Routing
    pub screen: Screen,
    pub home_selected: usize,

    // Cached listings
    pub cache: QueryCache,

    // Table cursors, one per resource screen
    pub vaccines_selected: usize,
    pub allergies_selected: usize,
    pub users_selected: usize,
    pub appointments_selected: usize,

    // Applied appointments filter
    pub filter: AppointmentFilter,

    // Ephemeral UI state
    pub dialog: Dialog,
    pub confirm: Option<ConfirmDialog>,
    pub toast: Option<Toast>,
    pub show_help: bool,

    // Filtered fetches carry an id so outdated responses are discarded
    pub next_request_id: u64,
    pub pending_appointments_req: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            screen: Screen::Home,
            home_selected: 0,
            cache: QueryCache::default(),
            vaccines_selected: 0,
            allergies_selected: 0,
            users_selected: 0,
            appointments_selected: 0,
            filter: AppointmentFilter::default(),
            dialog: Dialog::None,
            confirm: None,
            toast: None,
            show_help: false,
            next_request_id: 1,
            pending_appointments_req: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The modal context keys are routed by
    pub fn mode(&self) -> UiMode {
        if self.show_help {
            UiMode::Help
        } else if self.confirm.is_some() {
            UiMode::Confirm
        } else if self.dialog.is_open() {
            UiMode::Dialog
        } else {
            UiMode::Normal
        }
    }

    pub fn open_toast(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        self.toast = Some(Toast::new(message, severity));
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.screen,
            mode: self.mode(),
            home_selected: self.home_selected,
            vaccines: TableView::from_query(&self.cache.vaccines, self.vaccines_selected),
            allergies: TableView::from_query(&self.cache.allergies, self.allergies_selected),
            users: TableView::from_query(&self.cache.users, self.users_selected),
            appointments: TableView::from_query(
                &self.cache.appointments,
                self.appointments_selected,
            ),
            filter: self.filter.clone(),
            dialog: self.dialog.clone(),
            confirm: self.confirm.as_ref().map(|c| ConfirmView {
                title: c.title.clone(),
                message: c.message.clone(),
                busy: c.busy,
            }),
            toast: self.toast.as_ref().map(|t| ToastView {
                message: t.message.clone(),
                severity: t.severity,
            }),
            show_help: self.show_help,
        }
    }
}
