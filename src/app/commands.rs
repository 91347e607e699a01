//! Command handlers - business logic for processing UI events

use crate::app::forms::{
    AllergyForm, AppointmentForm, Dialog, FilterForm, LinkAllergyDialog, RescheduleDialog,
    SettleDialog, UserForm, VaccineForm,
};
use crate::app::state::{AppState, ConfirmAction, ConfirmDialog, ToastSeverity};
use crate::cache::QueryKey;
use crate::messages::api::{ApiCommand, ApiResult, Mutation};
use crate::messages::ui_events::Screen;
use crate::models::{sort_appointments, AppointmentStatus};

impl AppState {
    // ========================
    // Routing
    // ========================

    /// Switch screens and fetch whatever the target screen is missing
    pub fn navigate(&mut self, screen: Screen) -> Vec<ApiCommand> {
        self.screen = screen;
        self.ensure_screen_data()
    }

    pub fn back(&mut self) {
        self.screen = Screen::Home;
    }

    /// Open the home menu entry under the cursor
    pub fn enter_selected(&mut self) -> Vec<ApiCommand> {
        if self.screen == Screen::Home {
            let target = Screen::MENU[self.home_selected.min(Screen::MENU.len() - 1)];
            self.navigate(target)
        } else {
            Vec::new()
        }
    }

    // ========================
    // Data fetching
    // ========================

    /// Emits fetch commands for every stale or never-loaded listing the
    /// active screen displays.
    pub fn ensure_screen_data(&mut self) -> Vec<ApiCommand> {
        let mut commands = Vec::new();
        match self.screen {
            Screen::Home => {}
            Screen::Vaccines => self.ensure_vaccines(&mut commands),
            Screen::Allergies => self.ensure_allergies(&mut commands),
            Screen::Users => {
                self.ensure_users(&mut commands);
                // The link-allergy dialog selects from the allergy list
                self.ensure_allergies(&mut commands);
            }
            Screen::Appointments => {
                self.ensure_appointments(&mut commands);
                // Vaccine and user selects in the add form and filter
                self.ensure_vaccines(&mut commands);
                self.ensure_users(&mut commands);
            }
        }
        commands
    }

    /// Invalidate what the active screen shows, then refetch
    pub fn refresh(&mut self) -> Vec<ApiCommand> {
        match self.screen {
            Screen::Home => {}
            Screen::Vaccines => self.cache.invalidate(QueryKey::Vaccines),
            Screen::Allergies => self.cache.invalidate(QueryKey::Allergies),
            Screen::Users => {
                self.cache.invalidate(QueryKey::Users);
                self.cache.invalidate(QueryKey::Allergies);
            }
            Screen::Appointments => self.cache.invalidate(QueryKey::Appointments),
        }
        self.ensure_screen_data()
    }

    fn ensure_vaccines(&mut self, commands: &mut Vec<ApiCommand>) {
        if self.cache.vaccines.needs_fetch() {
            self.cache.vaccines.mark_loading();
            commands.push(ApiCommand::FetchVaccines);
        }
    }

    fn ensure_allergies(&mut self, commands: &mut Vec<ApiCommand>) {
        if self.cache.allergies.needs_fetch() {
            self.cache.allergies.mark_loading();
            commands.push(ApiCommand::FetchAllergies);
        }
    }

    fn ensure_users(&mut self, commands: &mut Vec<ApiCommand>) {
        if self.cache.users.needs_fetch() {
            self.cache.users.mark_loading();
            commands.push(ApiCommand::FetchUsers);
        }
    }

    fn ensure_appointments(&mut self, commands: &mut Vec<ApiCommand>) {
        if self.cache.appointments.needs_fetch() {
            self.cache.appointments.mark_loading();
            let req = self.next_id();
            self.pending_appointments_req = Some(req);
            commands.push(ApiCommand::FetchAppointments {
                req,
                filter: self.filter.clone(),
            });
        }
    }

    // ========================
    // Table navigation
    // ========================

    pub fn row_up(&mut self) {
        match self.screen {
            Screen::Home => {
                self.home_selected = self
                    .home_selected
                    .checked_sub(1)
                    .unwrap_or(Screen::MENU.len() - 1);
            }
            Screen::Vaccines => {
                Self::cursor_up(&mut self.vaccines_selected, self.cache.vaccines.len());
            }
            Screen::Allergies => {
                Self::cursor_up(&mut self.allergies_selected, self.cache.allergies.len());
            }
            Screen::Users => Self::cursor_up(&mut self.users_selected, self.cache.users.len()),
            Screen::Appointments => {
                Self::cursor_up(
                    &mut self.appointments_selected,
                    self.cache.appointments.len(),
                );
            }
        }
    }

    pub fn row_down(&mut self) {
        match self.screen {
            Screen::Home => {
                self.home_selected = (self.home_selected + 1) % Screen::MENU.len();
            }
            Screen::Vaccines => {
                Self::cursor_down(&mut self.vaccines_selected, self.cache.vaccines.len());
            }
            Screen::Allergies => {
                Self::cursor_down(&mut self.allergies_selected, self.cache.allergies.len());
            }
            Screen::Users => Self::cursor_down(&mut self.users_selected, self.cache.users.len()),
            Screen::Appointments => {
                Self::cursor_down(
                    &mut self.appointments_selected,
                    self.cache.appointments.len(),
                );
            }
        }
    }

    fn cursor_up(selected: &mut usize, len: usize) {
        if len != 0 {
            *selected = selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    fn cursor_down(selected: &mut usize, len: usize) {
        if len != 0 {
            *selected = (*selected + 1) % len;
        }
    }

    /// Re-clamps all table cursors after a listing changed size
    fn clamp_cursors(&mut self) {
        self.vaccines_selected = self
            .vaccines_selected
            .min(self.cache.vaccines.len().saturating_sub(1));
        self.allergies_selected = self
            .allergies_selected
            .min(self.cache.allergies.len().saturating_sub(1));
        self.users_selected = self
            .users_selected
            .min(self.cache.users.len().saturating_sub(1));
        self.appointments_selected = self
            .appointments_selected
            .min(self.cache.appointments.len().saturating_sub(1));
    }

    // ========================
    // Dialog openers
    // ========================

    pub fn open_add_form(&mut self) {
        self.dialog = match self.screen {
            Screen::Vaccines => Dialog::VaccineForm(VaccineForm::default()),
            Screen::Allergies => Dialog::AllergyForm(AllergyForm::default()),
            Screen::Users => Dialog::UserForm(UserForm::default()),
            Screen::Appointments => Dialog::AppointmentForm(AppointmentForm::default()),
            Screen::Home => return,
        };
    }

    /// Opens the confirmation dialog for deleting the selected row
    pub fn request_delete(&mut self) {
        let confirm = match self.screen {
            Screen::Vaccines => {
                self.cache
                    .vaccines
                    .items()
                    .get(self.vaccines_selected)
                    .map(|v| ConfirmDialog {
                        title: String::from("Delete vaccine"),
                        message: String::from("Really delete this vaccine?"),
                        action: ConfirmAction::DeleteVaccine(v.id.clone()),
                        busy: false,
                    })
            }
            Screen::Allergies => {
                self.cache
                    .allergies
                    .items()
                    .get(self.allergies_selected)
                    .map(|a| ConfirmDialog {
                        title: String::from("Delete allergy"),
                        message: String::from("Really delete this allergy?"),
                        action: ConfirmAction::DeleteAllergy(a.id.clone()),
                        busy: false,
                    })
            }
            Screen::Users => self
                .cache
                .users
                .items()
                .get(self.users_selected)
                .map(|u| ConfirmDialog {
                    title: String::from("Delete user"),
                    message: String::from("Really delete this user?"),
                    action: ConfirmAction::DeleteUser(u.id.clone()),
                    busy: false,
                }),
            Screen::Appointments => self
                .cache
                .appointments
                .items()
                .get(self.appointments_selected)
                .map(|a| ConfirmDialog {
                    title: String::from("Delete agenda"),
                    message: String::from("Really delete this agenda?"),
                    action: ConfirmAction::DeleteAppointment(a.id.clone()),
                    busy: false,
                }),
            Screen::Home => None,
        };

        if confirm.is_some() {
            self.confirm = confirm;
        }
    }

    /// Settling is only offered while the appointment is still open
    pub fn open_settle_dialog(&mut self) {
        if let Some(appointment) = self
            .cache
            .appointments
            .items()
            .get(self.appointments_selected)
        {
            if appointment.status == AppointmentStatus::Scheduled {
                self.dialog = Dialog::Settle(SettleDialog::new(appointment.id.clone()));
            }
        }
    }

    pub fn open_reschedule_dialog(&mut self) {
        if let Some(appointment) = self
            .cache
            .appointments
            .items()
            .get(self.appointments_selected)
        {
            if appointment.status == AppointmentStatus::Scheduled {
                self.dialog = Dialog::Reschedule(RescheduleDialog::new(appointment.id.clone()));
            }
        }
    }

    pub fn open_filter_form(&mut self) {
        self.dialog = Dialog::FilterForm(FilterForm::from_filter(
            &self.filter,
            self.cache.users.items(),
        ));
    }

    pub fn open_link_allergy_dialog(&mut self) {
        if self.cache.allergies.is_empty() {
            self.open_toast("No allergies registered yet", ToastSeverity::Error);
            return;
        }
        if let Some(user) = self.cache.users.items().get(self.users_selected) {
            self.dialog = Dialog::LinkAllergy(LinkAllergyDialog::new(user));
        }
    }

    // ========================
    // Form interaction
    // ========================

    pub fn form_char(&mut self, c: char) {
        match &mut self.dialog {
            Dialog::VaccineForm(f) => f.push_char(c),
            Dialog::AllergyForm(f) => f.push_char(c),
            Dialog::UserForm(f) => f.push_char(c),
            Dialog::AppointmentForm(f) => f.push_char(c),
            Dialog::FilterForm(f) => f.push_char(c),
            Dialog::Reschedule(d) => d.push_char(c),
            Dialog::Settle(_) | Dialog::LinkAllergy(_) | Dialog::None => {}
        }
    }

    pub fn form_backspace(&mut self) {
        match &mut self.dialog {
            Dialog::VaccineForm(f) => f.backspace(),
            Dialog::AllergyForm(f) => f.backspace(),
            Dialog::UserForm(f) => f.backspace(),
            Dialog::AppointmentForm(f) => f.backspace(),
            Dialog::FilterForm(f) => f.backspace(),
            Dialog::Reschedule(d) => d.backspace(),
            Dialog::Settle(_) | Dialog::LinkAllergy(_) | Dialog::None => {}
        }
    }

    pub fn form_next_field(&mut self) {
        match &mut self.dialog {
            Dialog::VaccineForm(f) => f.next_field(),
            Dialog::UserForm(f) => f.next_field(),
            Dialog::AppointmentForm(f) => f.next_field(),
            Dialog::FilterForm(f) => f.next_field(),
            _ => {}
        }
    }

    pub fn form_prev_field(&mut self) {
        match &mut self.dialog {
            Dialog::VaccineForm(f) => f.prev_field(),
            Dialog::UserForm(f) => f.prev_field(),
            Dialog::AppointmentForm(f) => f.prev_field(),
            Dialog::FilterForm(f) => f.prev_field(),
            _ => {}
        }
    }

    pub fn form_cycle(&mut self, forward: bool) {
        let vaccine_count = self.cache.vaccines.len();
        let user_count = self.cache.users.len();
        let allergy_count = self.cache.allergies.len();

        match &mut self.dialog {
            Dialog::VaccineForm(f) => f.cycle(forward),
            Dialog::UserForm(f) => f.cycle(forward),
            Dialog::AppointmentForm(f) => f.cycle(forward, vaccine_count, user_count),
            Dialog::FilterForm(f) => f.cycle(forward, user_count),
            Dialog::Settle(d) => d.cycle(),
            Dialog::LinkAllergy(d) => d.cycle(forward, allergy_count),
            Dialog::AllergyForm(_) | Dialog::Reschedule(_) | Dialog::None => {}
        }
    }

    pub fn form_cancel(&mut self) {
        if !self.dialog.is_busy() {
            self.dialog = Dialog::None;
        }
    }

    /// Submit the open dialog. Client-side parse failures land in the
    /// dialog's error list; otherwise the mutation goes out and the dialog
    /// stays open, busy, until the result comes back.
    pub fn form_submit(&mut self) -> Vec<ApiCommand> {
        if self.dialog.is_busy() {
            return Vec::new();
        }

        let dialog = std::mem::take(&mut self.dialog);
        match dialog {
            Dialog::None => Vec::new(),
            // Applying the filter is local: swap it in, invalidate, refetch
            Dialog::FilterForm(mut form) => match form.build(self.cache.users.items()) {
                Ok(filter) => {
                    self.filter = filter;
                    self.cache.invalidate(QueryKey::Appointments);
                    self.ensure_screen_data()
                }
                Err(errors) => {
                    form.errors = errors;
                    self.dialog = Dialog::FilterForm(form);
                    Vec::new()
                }
            },
            mut other => {
                let command = match &mut other {
                    Dialog::VaccineForm(f) => match f.build() {
                        Ok(draft) => {
                            f.errors.clear();
                            f.busy = true;
                            Some(ApiCommand::CreateVaccine(draft))
                        }
                        Err(errors) => {
                            f.errors = errors;
                            None
                        }
                    },
                    Dialog::AllergyForm(f) => {
                        f.errors.clear();
                        f.busy = true;
                        Some(ApiCommand::CreateAllergy(f.build()))
                    }
                    Dialog::UserForm(f) => match f.build() {
                        Ok(draft) => {
                            f.errors.clear();
                            f.busy = true;
                            Some(ApiCommand::CreateUser(draft))
                        }
                        Err(errors) => {
                            f.errors = errors;
                            None
                        }
                    },
                    Dialog::AppointmentForm(f) => {
                        match f.build(self.cache.vaccines.items(), self.cache.users.items()) {
                            Ok(draft) => {
                                f.errors.clear();
                                f.busy = true;
                                Some(ApiCommand::CreateAppointment(draft))
                            }
                            Err(errors) => {
                                f.errors = errors;
                                None
                            }
                        }
                    }
                    Dialog::Settle(d) => {
                        d.busy = true;
                        Some(ApiCommand::SettleAppointment {
                            id: d.id.clone(),
                            outcome: d.outcome,
                        })
                    }
                    Dialog::Reschedule(d) => match d.build() {
                        Ok(date) => {
                            d.errors.clear();
                            d.busy = true;
                            Some(ApiCommand::RescheduleAppointment {
                                id: d.id.clone(),
                                date,
                            })
                        }
                        Err(errors) => {
                            d.errors = errors;
                            None
                        }
                    },
                    Dialog::LinkAllergy(d) => {
                        match d.selected(self.cache.allergies.items()) {
                            Some(allergy) => {
                                let command = ApiCommand::LinkAllergy {
                                    user_id: d.user_id.clone(),
                                    allergy_id: allergy.id.clone(),
                                };
                                d.busy = true;
                                Some(command)
                            }
                            None => None,
                        }
                    }
                    Dialog::FilterForm(_) | Dialog::None => None,
                };
                self.dialog = other;
                command.into_iter().collect()
            }
        }
    }

    // ========================
    // Confirmation dialog flow
    // ========================

    pub fn confirm_accept(&mut self) -> Option<ApiCommand> {
        let confirm = self.confirm.as_mut()?;
        if confirm.busy {
            return None;
        }
        confirm.busy = true;

        Some(match confirm.action.clone() {
            ConfirmAction::DeleteVaccine(id) => ApiCommand::DeleteVaccine { id },
            ConfirmAction::DeleteAllergy(id) => ApiCommand::DeleteAllergy { id },
            ConfirmAction::DeleteUser(id) => ApiCommand::DeleteUser { id },
            ConfirmAction::DeleteAppointment(id) => ApiCommand::DeleteAppointment { id },
        })
    }

    pub fn confirm_cancel(&mut self) {
        if self.confirm.as_ref().is_some_and(|c| c.busy) {
            return;
        }
        self.confirm = None;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Toast expiry
    // ========================

    /// Returns true when the toast was dismissed and a redraw is due
    pub fn tick(&mut self) -> bool {
        let now = chrono::Utc::now();
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            true
        } else {
            false
        }
    }

    // ========================
    // API result handling
    // ========================

    pub fn handle_api_result(&mut self, result: ApiResult) -> Vec<ApiCommand> {
        match result {
            ApiResult::Vaccines(result) => {
                self.cache
                    .vaccines
                    .resolve(result.map_err(|e| e.to_string()));
                self.clamp_cursors();
                Vec::new()
            }
            ApiResult::Allergies(result) => {
                self.cache
                    .allergies
                    .resolve(result.map_err(|e| e.to_string()));
                self.clamp_cursors();
                Vec::new()
            }
            ApiResult::Users(result) => {
                self.cache.users.resolve(result.map_err(|e| e.to_string()));
                self.clamp_cursors();
                Vec::new()
            }
            ApiResult::Appointments { req, result } => {
                // A response for an outdated filter is discarded
                if self.pending_appointments_req == Some(req) {
                    self.pending_appointments_req = None;
                    let result = result
                        .map(|mut list| {
                            sort_appointments(&mut list);
                            list
                        })
                        .map_err(|e| e.to_string());
                    self.cache.appointments.resolve(result);
                    self.clamp_cursors();
                }
                Vec::new()
            }
            ApiResult::MutationDone { mutation, result } => {
                self.handle_mutation_done(mutation, result)
            }
        }
    }

    /// Invalidation happens strictly after a success result; the returned
    /// refetch commands are emitted after the invalidation.
    fn handle_mutation_done(
        &mut self,
        mutation: Mutation,
        result: Result<(), crate::messages::api::ApiError>,
    ) -> Vec<ApiCommand> {
        let is_delete = matches!(
            mutation,
            Mutation::DeleteVaccine
                | Mutation::DeleteAllergy
                | Mutation::DeleteUser
                | Mutation::DeleteAppointment
        );

        match result {
            Ok(()) => {
                self.cache.invalidate(mutation.invalidates());
                if is_delete {
                    self.confirm = None;
                } else {
                    self.dialog = Dialog::None;
                }
                if mutation == Mutation::LinkAllergy {
                    self.open_toast("Allergy linked", ToastSeverity::Success);
                }
                self.ensure_screen_data()
            }
            Err(error) => {
                if mutation.reports_errors_in_dialog() && self.dialog.is_open() {
                    self.dialog.set_errors(error.messages());
                    self.dialog.set_busy(false);
                } else {
                    if is_delete {
                        self.confirm = None;
                    } else {
                        // Settle/reschedule/link dialogs stay open for retry
                        self.dialog.set_busy(false);
                    }
                    self.open_toast(error.to_string(), ToastSeverity::Error);
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::api::ApiError;
    use crate::models::{
        Allergy, Appointment, AppointmentStatus, Sex, User, Vaccine,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn vaccine(id: &str) -> Vaccine {
        Vaccine {
            id: id.to_string(),
            title: format!("vaccine-{id}"),
            description: String::new(),
            doses: 1,
            periodicity: None,
            interval: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user-{id}"),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            sex: Sex::Female,
            street: String::new(),
            number: String::new(),
            district: String::new(),
            city: String::new(),
            state: String::from("GO"),
            allergies: Vec::new(),
        }
    }

    fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            notes: None,
            vaccine: vaccine("v1"),
            dose_idx: 0,
            user: user("u1"),
            status_date: None,
            status,
        }
    }

    fn backend_error(messages: &[&str]) -> ApiError {
        ApiError::Backend {
            status: 400,
            messages: messages.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_navigate_fetches_missing_listings() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Vaccines);
        assert!(matches!(commands.as_slice(), [ApiCommand::FetchVaccines]));
        assert!(state.cache.vaccines.is_loading());

        // Already loading: a second navigate fetches nothing
        let commands = state.navigate(Screen::Vaccines);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_appointments_screen_fetches_three_listings() {
        let mut state = AppState::new();
        let commands = state.navigate(Screen::Appointments);
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            ApiCommand::FetchAppointments { req: 1, .. }
        ));
        assert!(matches!(commands[1], ApiCommand::FetchVaccines));
        assert!(matches!(commands[2], ApiCommand::FetchUsers));
    }

    #[test]
    fn test_fetch_result_fills_cache() {
        let mut state = AppState::new();
        state.navigate(Screen::Vaccines);
        state.handle_api_result(ApiResult::Vaccines(Ok(vec![vaccine("1"), vaccine("2")])));
        assert_eq!(state.cache.vaccines.len(), 2);
        assert!(!state.cache.vaccines.is_loading());
    }

    #[test]
    fn test_fetch_error_is_stored_inline() {
        let mut state = AppState::new();
        state.navigate(Screen::Vaccines);
        state.handle_api_result(ApiResult::Vaccines(Err(ApiError::Http {
            message: String::from("Connection failed"),
        })));
        assert_eq!(
            state.cache.vaccines.error.as_deref(),
            Some("Connection failed")
        );
        // Load failures render inline, not as a toast
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_create_flow_closes_dialog_and_refetches() {
        let mut state = AppState::new();
        state.navigate(Screen::Allergies);
        state.handle_api_result(ApiResult::Allergies(Ok(vec![])));

        state.open_add_form();
        state.form_char('P');
        state.form_char('o');
        let commands = state.form_submit();
        assert!(matches!(
            commands.as_slice(),
            [ApiCommand::CreateAllergy(_)]
        ));
        assert!(state.dialog.is_busy());

        // Success: dialog closes, key invalidates, list refetches
        let commands = state.handle_api_result(ApiResult::MutationDone {
            mutation: Mutation::CreateAllergy,
            result: Ok(()),
        });
        assert!(!state.dialog.is_open());
        assert!(matches!(commands.as_slice(), [ApiCommand::FetchAllergies]));
    }

    #[test]
    fn test_create_failure_shows_errors_in_dialog() {
        let mut state = AppState::new();
        state.navigate(Screen::Allergies);
        state.open_add_form();
        state.form_submit();

        state.handle_api_result(ApiResult::MutationDone {
            mutation: Mutation::CreateAllergy,
            result: Err(backend_error(&["nome is required"])),
        });

        match &state.dialog {
            Dialog::AllergyForm(form) => {
                assert_eq!(form.errors, vec![String::from("nome is required")]);
                assert!(!form.busy);
            }
            other => panic!("dialog should stay open, got {other:?}"),
        }
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_delete_flow_confirm_then_error_toast() {
        let mut state = AppState::new();
        state.navigate(Screen::Vaccines);
        state.handle_api_result(ApiResult::Vaccines(Ok(vec![vaccine("7")])));

        state.request_delete();
        let confirm = state.confirm.as_ref().expect("confirm dialog open");
        assert_eq!(confirm.title, "Delete vaccine");

        let command = state.confirm_accept().expect("delete command");
        assert!(matches!(command, ApiCommand::DeleteVaccine { ref id } if id == "7"));
        assert!(state.confirm.as_ref().unwrap().busy);

        // Busy dialog ignores a second accept and cancel
        assert!(state.confirm_accept().is_none());
        state.confirm_cancel();
        assert!(state.confirm.is_some());

        state.handle_api_result(ApiResult::MutationDone {
            mutation: Mutation::DeleteVaccine,
            result: Err(backend_error(&["vaccine has open agendas"])),
        });
        assert!(state.confirm.is_none());
        let toast = state.toast.as_ref().expect("error toast");
        assert_eq!(toast.severity, ToastSeverity::Error);
        assert_eq!(toast.message, "vaccine has open agendas");
    }

    #[test]
    fn test_delete_success_invalidates_and_refetches() {
        let mut state = AppState::new();
        state.navigate(Screen::Vaccines);
        state.handle_api_result(ApiResult::Vaccines(Ok(vec![vaccine("7")])));

        state.request_delete();
        state.confirm_accept();
        let commands = state.handle_api_result(ApiResult::MutationDone {
            mutation: Mutation::DeleteVaccine,
            result: Ok(()),
        });
        assert!(state.confirm.is_none());
        assert!(matches!(commands.as_slice(), [ApiCommand::FetchVaccines]));
    }

    #[test]
    fn test_settle_only_for_scheduled() {
        let mut state = AppState::new();
        state.screen = Screen::Appointments;
        state.pending_appointments_req = Some(1);
        state.handle_api_result(ApiResult::Appointments {
            req: 1,
            result: Ok(vec![appointment("a1", AppointmentStatus::Done)]),
        });

        state.open_settle_dialog();
        assert!(!state.dialog.is_open());
        state.open_reschedule_dialog();
        assert!(!state.dialog.is_open());
    }

    #[test]
    fn test_settle_flow() {
        let mut state = AppState::new();
        state.screen = Screen::Appointments;
        state.pending_appointments_req = Some(1);
        state.handle_api_result(ApiResult::Appointments {
            req: 1,
            result: Ok(vec![appointment("a1", AppointmentStatus::Scheduled)]),
        });

        state.open_settle_dialog();
        state.form_cycle(true); // DONE -> CANCELED
        let commands = state.form_submit();
        match commands.as_slice() {
            [ApiCommand::SettleAppointment { id, outcome }] => {
                assert_eq!(id, "a1");
                assert_eq!(*outcome, crate::models::SettleOutcome::Canceled);
            }
            other => panic!("expected settle command, got {other:?}"),
        }

        let commands = state.handle_api_result(ApiResult::MutationDone {
            mutation: Mutation::SettleAppointment,
            result: Ok(()),
        });
        assert!(!state.dialog.is_open());
        // The appointments key went stale and is refetched
        assert!(matches!(
            commands.first(),
            Some(ApiCommand::FetchAppointments { .. })
        ));
    }

    #[test]
    fn test_stale_appointments_response_is_discarded() {
        let mut state = AppState::new();
        state.navigate(Screen::Appointments); // issues req 1

        // Filter applied before the first response lands: issues req 2
        state.open_filter_form();
        let commands = state.form_submit();
        assert!(matches!(
            commands.as_slice(),
            [ApiCommand::FetchAppointments { req: 2, .. }]
        ));

        // Response for req 1 arrives late and is ignored
        state.handle_api_result(ApiResult::Appointments {
            req: 1,
            result: Ok(vec![appointment("old", AppointmentStatus::Scheduled)]),
        });
        assert!(state.cache.appointments.is_empty());

        state.handle_api_result(ApiResult::Appointments {
            req: 2,
            result: Ok(vec![appointment("new", AppointmentStatus::Scheduled)]),
        });
        assert_eq!(state.cache.appointments.items()[0].id, "new");
    }

    #[test]
    fn test_appointments_are_sorted_on_arrival() {
        let mut state = AppState::new();
        state.screen = Screen::Appointments;
        state.pending_appointments_req = Some(1);
        state.handle_api_result(ApiResult::Appointments {
            req: 1,
            result: Ok(vec![
                appointment("done", AppointmentStatus::Done),
                appointment("open", AppointmentStatus::Scheduled),
            ]),
        });
        assert_eq!(state.cache.appointments.items()[0].id, "open");
    }

    #[test]
    fn test_link_allergy_success_toast() {
        let mut state = AppState::new();
        state.navigate(Screen::Users);
        state.handle_api_result(ApiResult::Users(Ok(vec![user("u1")])));
        state.handle_api_result(ApiResult::Allergies(Ok(vec![Allergy {
            id: String::from("al1"),
            name: String::from("Dipirona"),
        }])));

        state.open_link_allergy_dialog();
        let commands = state.form_submit();
        match commands.as_slice() {
            [ApiCommand::LinkAllergy { user_id, allergy_id }] => {
                assert_eq!(user_id, "u1");
                assert_eq!(allergy_id, "al1");
            }
            other => panic!("expected link command, got {other:?}"),
        }

        let commands = state.handle_api_result(ApiResult::MutationDone {
            mutation: Mutation::LinkAllergy,
            result: Ok(()),
        });
        let toast = state.toast.as_ref().expect("success toast");
        assert_eq!(toast.severity, ToastSeverity::Success);
        // Users key was invalidated and refetched
        assert!(matches!(commands.as_slice(), [ApiCommand::FetchUsers]));
    }

    #[test]
    fn test_expired_toast_is_dismissed_on_tick() {
        let mut state = AppState::new();
        state.open_toast("done", ToastSeverity::Success);
        state.toast.as_mut().unwrap().expires_at = Utc::now() - chrono::Duration::seconds(1);
        assert!(state.tick());
        assert!(state.toast.is_none());
        assert!(!state.tick());
    }

    #[test]
    fn test_cursor_clamps_when_list_shrinks() {
        let mut state = AppState::new();
        state.navigate(Screen::Vaccines);
        state.handle_api_result(ApiResult::Vaccines(Ok(vec![
            vaccine("1"),
            vaccine("2"),
            vaccine("3"),
        ])));
        state.row_up(); // wraps to last row
        assert_eq!(state.vaccines_selected, 2);

        state.cache.invalidate(QueryKey::Vaccines);
        state.handle_api_result(ApiResult::Vaccines(Ok(vec![vaccine("1")])));
        assert_eq!(state.vaccines_selected, 0);
    }
}
