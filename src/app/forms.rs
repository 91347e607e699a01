//! Form and dialog state for the resource screens
//!
//! Each add-form owns its field buffers as plain strings; parsing happens
//! at submit time and client-side parse failures land in the form's error
//! list the same way backend validation messages do.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    local_to_utc, Allergy, AllergyDraft, AppointmentDraft, AppointmentFilter, AppointmentStatus,
    Periodicity, SettleOutcome, Sex, User, UserDraft, Vaccine, VaccineDraft, BR_STATES,
};

/// The dialog currently covering the active screen, if any
#[derive(Clone, Debug, Default)]
pub enum Dialog {
    #[default]
    None,
    VaccineForm(VaccineForm),
    AllergyForm(AllergyForm),
    UserForm(UserForm),
    AppointmentForm(AppointmentForm),
    FilterForm(FilterForm),
    Settle(SettleDialog),
    Reschedule(RescheduleDialog),
    LinkAllergy(LinkAllergyDialog),
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::None)
    }

    pub fn set_busy(&mut self, busy: bool) {
        match self {
            Dialog::VaccineForm(f) => f.busy = busy,
            Dialog::AllergyForm(f) => f.busy = busy,
            Dialog::UserForm(f) => f.busy = busy,
            Dialog::AppointmentForm(f) => f.busy = busy,
            Dialog::Settle(d) => d.busy = busy,
            Dialog::Reschedule(d) => d.busy = busy,
            Dialog::LinkAllergy(d) => d.busy = busy,
            Dialog::FilterForm(_) | Dialog::None => {}
        }
    }

    pub fn is_busy(&self) -> bool {
        match self {
            Dialog::VaccineForm(f) => f.busy,
            Dialog::AllergyForm(f) => f.busy,
            Dialog::UserForm(f) => f.busy,
            Dialog::AppointmentForm(f) => f.busy,
            Dialog::Settle(d) => d.busy,
            Dialog::Reschedule(d) => d.busy,
            Dialog::LinkAllergy(d) => d.busy,
            Dialog::FilterForm(_) | Dialog::None => false,
        }
    }

    /// Routes validation messages into the dialog's alert list
    pub fn set_errors(&mut self, errors: Vec<String>) {
        match self {
            Dialog::VaccineForm(f) => f.errors = errors,
            Dialog::AllergyForm(f) => f.errors = errors,
            Dialog::UserForm(f) => f.errors = errors,
            Dialog::AppointmentForm(f) => f.errors = errors,
            Dialog::FilterForm(f) => f.errors = errors,
            Dialog::Reschedule(d) => d.errors = errors,
            Dialog::Settle(_) | Dialog::LinkAllergy(_) | Dialog::None => {}
        }
    }
}

fn cycle_next(idx: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (idx + 1) % len
    }
}

fn cycle_prev(idx: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        idx.checked_sub(1).unwrap_or(len - 1)
    }
}

// ========================
// Vaccine form
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VaccineField {
    Title,
    Description,
    Doses,
    Periodicity,
    Interval,
}

#[derive(Clone, Debug)]
pub struct VaccineForm {
    pub title: String,
    pub description: String,
    pub doses: String,
    pub periodicity: Periodicity,
    pub interval: String,
    pub field: VaccineField,
    pub errors: Vec<String>,
    pub busy: bool,
}

impl Default for VaccineForm {
    fn default() -> Self {
        VaccineForm {
            title: String::new(),
            description: String::new(),
            doses: String::from("1"),
            periodicity: Periodicity::Days,
            interval: String::from("1"),
            field: VaccineField::Title,
            errors: Vec::new(),
            busy: false,
        }
    }
}

impl VaccineForm {
    /// Cadence fields only exist for multi-dose vaccines
    pub fn multi_dose(&self) -> bool {
        self.doses.trim().parse::<u32>().map_or(false, |d| d > 1)
    }

    fn fields(&self) -> &'static [VaccineField] {
        const BASE: [VaccineField; 3] = [
            VaccineField::Title,
            VaccineField::Description,
            VaccineField::Doses,
        ];
        const ALL: [VaccineField; 5] = [
            VaccineField::Title,
            VaccineField::Description,
            VaccineField::Doses,
            VaccineField::Periodicity,
            VaccineField::Interval,
        ];
        if self.multi_dose() {
            &ALL
        } else {
            &BASE
        }
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[cycle_next(pos, fields.len())];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[cycle_prev(pos, fields.len())];
    }

    pub fn push_char(&mut self, c: char) {
        match self.field {
            VaccineField::Title => self.title.push(c),
            VaccineField::Description => self.description.push(c),
            VaccineField::Doses => self.doses.push(c),
            VaccineField::Interval => self.interval.push(c),
            VaccineField::Periodicity => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            VaccineField::Title => {
                self.title.pop();
            }
            VaccineField::Description => {
                self.description.pop();
            }
            VaccineField::Doses => {
                self.doses.pop();
            }
            VaccineField::Interval => {
                self.interval.pop();
            }
            VaccineField::Periodicity => {}
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        if self.field == VaccineField::Periodicity {
            self.periodicity = if forward {
                self.periodicity.next()
            } else {
                self.periodicity.prev()
            };
        }
    }

    pub fn build(&self) -> Result<VaccineDraft, Vec<String>> {
        let mut errors = Vec::new();

        let doses = match self.doses.trim().parse::<u32>() {
            Ok(d) => d,
            Err(_) => {
                errors.push(String::from("Doses must be a whole number"));
                0
            }
        };

        let interval = if doses > 1 {
            match self.interval.trim().parse::<u32>() {
                Ok(i) => Some(i),
                Err(_) => {
                    errors.push(String::from("Interval must be a whole number"));
                    None
                }
            }
        } else {
            None
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(VaccineDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            doses,
            periodicity: Some(self.periodicity),
            interval,
        }
        .normalized())
    }
}

// ========================
// Allergy form
// ========================

#[derive(Clone, Debug, Default)]
pub struct AllergyForm {
    pub name: String,
    pub errors: Vec<String>,
    pub busy: bool,
}

impl AllergyForm {
    pub fn push_char(&mut self, c: char) {
        self.name.push(c);
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    pub fn build(&self) -> AllergyDraft {
        AllergyDraft {
            name: self.name.trim().to_string(),
        }
    }
}

// ========================
// User form
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UserField {
    Name,
    BirthDate,
    Sex,
    Street,
    Number,
    District,
    City,
    State,
}

const USER_FIELDS: [UserField; 8] = [
    UserField::Name,
    UserField::BirthDate,
    UserField::Sex,
    UserField::Street,
    UserField::Number,
    UserField::District,
    UserField::City,
    UserField::State,
];

#[derive(Clone, Debug)]
pub struct UserForm {
    pub name: String,
    pub birth_date: String,
    pub sex: Sex,
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state_idx: usize,
    pub field: UserField,
    pub errors: Vec<String>,
    pub busy: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        UserForm {
            name: String::new(),
            birth_date: String::new(),
            sex: Sex::Male,
            street: String::new(),
            number: String::new(),
            district: String::new(),
            city: String::new(),
            state_idx: 0,
            field: UserField::Name,
            errors: Vec::new(),
            busy: false,
        }
    }
}

impl UserForm {
    pub fn state_code(&self) -> &'static str {
        BR_STATES[self.state_idx.min(BR_STATES.len() - 1)]
    }

    pub fn next_field(&mut self) {
        let pos = USER_FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = USER_FIELDS[cycle_next(pos, USER_FIELDS.len())];
    }

    pub fn prev_field(&mut self) {
        let pos = USER_FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = USER_FIELDS[cycle_prev(pos, USER_FIELDS.len())];
    }

    pub fn push_char(&mut self, c: char) {
        match self.field {
            UserField::Name => self.name.push(c),
            UserField::BirthDate => self.birth_date.push(c),
            UserField::Street => self.street.push(c),
            UserField::Number => self.number.push(c),
            UserField::District => self.district.push(c),
            UserField::City => self.city.push(c),
            UserField::Sex | UserField::State => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            UserField::Name => {
                self.name.pop();
            }
            UserField::BirthDate => {
                self.birth_date.pop();
            }
            UserField::Street => {
                self.street.pop();
            }
            UserField::Number => {
                self.number.pop();
            }
            UserField::District => {
                self.district.pop();
            }
            UserField::City => {
                self.city.pop();
            }
            UserField::Sex | UserField::State => {}
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        match self.field {
            UserField::Sex => self.sex = self.sex.toggle(),
            UserField::State => {
                self.state_idx = if forward {
                    cycle_next(self.state_idx, BR_STATES.len())
                } else {
                    cycle_prev(self.state_idx, BR_STATES.len())
                };
            }
            _ => {}
        }
    }

    pub fn build(&self) -> Result<UserDraft, Vec<String>> {
        let birth_date = match NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                return Err(vec![String::from("Birth date must be YYYY-MM-DD")]);
            }
        };

        Ok(UserDraft {
            name: self.name.trim().to_string(),
            birth_date,
            sex: self.sex,
            street: self.street.trim().to_string(),
            number: self.number.trim().to_string(),
            district: self.district.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state_code().to_string(),
        })
    }
}

// ========================
// Appointment form
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppointmentField {
    Date,
    Notes,
    Vaccine,
    User,
}

const APPOINTMENT_FIELDS: [AppointmentField; 4] = [
    AppointmentField::Date,
    AppointmentField::Notes,
    AppointmentField::Vaccine,
    AppointmentField::User,
];

#[derive(Clone, Debug)]
pub struct AppointmentForm {
    /// Local wall-clock date-time, `YYYY-MM-DD HH:MM`
    pub date: String,
    pub notes: String,
    pub vaccine_idx: usize,
    pub user_idx: usize,
    pub field: AppointmentField,
    pub errors: Vec<String>,
    pub busy: bool,
}

impl Default for AppointmentForm {
    fn default() -> Self {
        AppointmentForm {
            date: String::new(),
            notes: String::new(),
            vaccine_idx: 0,
            user_idx: 0,
            field: AppointmentField::Date,
            errors: Vec::new(),
            busy: false,
        }
    }
}

impl AppointmentForm {
    pub fn next_field(&mut self) {
        let pos = APPOINTMENT_FIELDS
            .iter()
            .position(|f| *f == self.field)
            .unwrap_or(0);
        self.field = APPOINTMENT_FIELDS[cycle_next(pos, APPOINTMENT_FIELDS.len())];
    }

    pub fn prev_field(&mut self) {
        let pos = APPOINTMENT_FIELDS
            .iter()
            .position(|f| *f == self.field)
            .unwrap_or(0);
        self.field = APPOINTMENT_FIELDS[cycle_prev(pos, APPOINTMENT_FIELDS.len())];
    }

    pub fn push_char(&mut self, c: char) {
        match self.field {
            AppointmentField::Date => self.date.push(c),
            AppointmentField::Notes => self.notes.push(c),
            AppointmentField::Vaccine | AppointmentField::User => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            AppointmentField::Date => {
                self.date.pop();
            }
            AppointmentField::Notes => {
                self.notes.pop();
            }
            AppointmentField::Vaccine | AppointmentField::User => {}
        }
    }

    pub fn cycle(&mut self, forward: bool, vaccine_count: usize, user_count: usize) {
        match self.field {
            AppointmentField::Vaccine => {
                self.vaccine_idx = if forward {
                    cycle_next(self.vaccine_idx, vaccine_count)
                } else {
                    cycle_prev(self.vaccine_idx, vaccine_count)
                };
            }
            AppointmentField::User => {
                self.user_idx = if forward {
                    cycle_next(self.user_idx, user_count)
                } else {
                    cycle_prev(self.user_idx, user_count)
                };
            }
            _ => {}
        }
    }

    pub fn build(
        &self,
        vaccines: &[Vaccine],
        users: &[User],
    ) -> Result<AppointmentDraft, Vec<String>> {
        let mut errors = Vec::new();

        let date = match NaiveDateTime::parse_from_str(self.date.trim(), "%Y-%m-%d %H:%M") {
            Ok(naive) => Some(local_to_utc(naive)),
            Err(_) => {
                errors.push(String::from("Date must be YYYY-MM-DD HH:MM"));
                None
            }
        };

        let vaccine = vaccines.get(self.vaccine_idx);
        if vaccine.is_none() {
            errors.push(String::from("No vaccine selected"));
        }
        let user = users.get(self.user_idx);
        if user.is_none() {
            errors.push(String::from("No user selected"));
        }

        match (date, vaccine, user) {
            (Some(date), Some(vaccine), Some(user)) => {
                let notes = self.notes.trim();
                Ok(AppointmentDraft {
                    date,
                    notes: if notes.is_empty() {
                        None
                    } else {
                        Some(notes.to_string())
                    },
                    vaccine_id: vaccine.id.clone(),
                    user_id: user.id.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

// ========================
// Appointment filter form
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterField {
    Status,
    User,
    DateStart,
    DateEnd,
}

const FILTER_FIELDS: [FilterField; 4] = [
    FilterField::Status,
    FilterField::User,
    FilterField::DateStart,
    FilterField::DateEnd,
];

/// Status options offered by the filter; index 0 means "all"
const FILTER_STATUSES: [Option<AppointmentStatus>; 4] = [
    None,
    Some(AppointmentStatus::Scheduled),
    Some(AppointmentStatus::Done),
    Some(AppointmentStatus::Canceled),
];

#[derive(Clone, Debug)]
pub struct FilterForm {
    pub status_idx: usize,
    /// 0 means "all users"; 1-based index into the cached user list
    pub user_idx: usize,
    pub date_start: String,
    pub date_end: String,
    pub field: FilterField,
    pub errors: Vec<String>,
}

impl FilterForm {
    /// Seeds the form from the filter currently applied
    pub fn from_filter(filter: &AppointmentFilter, users: &[User]) -> Self {
        let status_idx = FILTER_STATUSES
            .iter()
            .position(|s| *s == filter.status)
            .unwrap_or(0);
        let user_idx = filter
            .user_id
            .as_ref()
            .and_then(|id| users.iter().position(|u| u.id == *id))
            .map_or(0, |pos| pos + 1);

        FilterForm {
            status_idx,
            user_idx,
            date_start: filter
                .date_start
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            date_end: filter
                .date_end
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            field: FilterField::Status,
            errors: Vec::new(),
        }
    }

    pub fn status(&self) -> Option<AppointmentStatus> {
        FILTER_STATUSES[self.status_idx.min(FILTER_STATUSES.len() - 1)]
    }

    pub fn next_field(&mut self) {
        let pos = FILTER_FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = FILTER_FIELDS[cycle_next(pos, FILTER_FIELDS.len())];
    }

    pub fn prev_field(&mut self) {
        let pos = FILTER_FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = FILTER_FIELDS[cycle_prev(pos, FILTER_FIELDS.len())];
    }

    pub fn push_char(&mut self, c: char) {
        match self.field {
            FilterField::DateStart => self.date_start.push(c),
            FilterField::DateEnd => self.date_end.push(c),
            FilterField::Status | FilterField::User => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FilterField::DateStart => {
                self.date_start.pop();
            }
            FilterField::DateEnd => {
                self.date_end.pop();
            }
            FilterField::Status | FilterField::User => {}
        }
    }

    pub fn cycle(&mut self, forward: bool, user_count: usize) {
        match self.field {
            FilterField::Status => {
                self.status_idx = if forward {
                    cycle_next(self.status_idx, FILTER_STATUSES.len())
                } else {
                    cycle_prev(self.status_idx, FILTER_STATUSES.len())
                };
            }
            FilterField::User => {
                self.user_idx = if forward {
                    cycle_next(self.user_idx, user_count + 1)
                } else {
                    cycle_prev(self.user_idx, user_count + 1)
                };
            }
            _ => {}
        }
    }

    pub fn build(&self, users: &[User]) -> Result<AppointmentFilter, Vec<String>> {
        let mut errors = Vec::new();

        let parse_day = |input: &str, label: &str, errors: &mut Vec<String>| {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                return None;
            }
            match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(format!("{label} must be YYYY-MM-DD"));
                    None
                }
            }
        };

        let date_start = parse_day(&self.date_start, "Start date", &mut errors);
        let date_end = parse_day(&self.date_end, "End date", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let user_id = if self.user_idx == 0 {
            None
        } else {
            users.get(self.user_idx - 1).map(|u| u.id.clone())
        };

        Ok(AppointmentFilter {
            status: self.status(),
            user_id,
            date_start,
            date_end,
        })
    }
}

// ========================
// Appointment action dialogs
// ========================

/// "Dar baixa": record an appointment's outcome
#[derive(Clone, Debug)]
pub struct SettleDialog {
    pub id: String,
    pub outcome: SettleOutcome,
    pub busy: bool,
}

impl SettleDialog {
    pub fn new(id: String) -> Self {
        SettleDialog {
            id,
            outcome: SettleOutcome::Done,
            busy: false,
        }
    }

    pub fn cycle(&mut self) {
        self.outcome = self.outcome.toggle();
    }
}

/// "Reagendar": move an appointment to a new date
#[derive(Clone, Debug)]
pub struct RescheduleDialog {
    pub id: String,
    /// Local wall-clock date-time, `YYYY-MM-DD HH:MM`
    pub date: String,
    pub errors: Vec<String>,
    pub busy: bool,
}

impl RescheduleDialog {
    pub fn new(id: String) -> Self {
        RescheduleDialog {
            id,
            date: String::new(),
            errors: Vec::new(),
            busy: false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.date.push(c);
    }

    pub fn backspace(&mut self) {
        self.date.pop();
    }

    pub fn build(&self) -> Result<chrono::DateTime<chrono::Utc>, Vec<String>> {
        NaiveDateTime::parse_from_str(self.date.trim(), "%Y-%m-%d %H:%M")
            .map(local_to_utc)
            .map_err(|_| vec![String::from("Date must be YYYY-MM-DD HH:MM")])
    }
}

/// Associate an existing allergy with the selected user
#[derive(Clone, Debug)]
pub struct LinkAllergyDialog {
    pub user_id: String,
    pub user_name: String,
    pub allergy_idx: usize,
    pub busy: bool,
}

impl LinkAllergyDialog {
    pub fn new(user: &User) -> Self {
        LinkAllergyDialog {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            allergy_idx: 0,
            busy: false,
        }
    }

    pub fn cycle(&mut self, forward: bool, allergy_count: usize) {
        self.allergy_idx = if forward {
            cycle_next(self.allergy_idx, allergy_count)
        } else {
            cycle_prev(self.allergy_idx, allergy_count)
        };
    }

    pub fn selected<'a>(&self, allergies: &'a [Allergy]) -> Option<&'a Allergy> {
        allergies.get(self.allergy_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Periodicity;

    #[test]
    fn test_vaccine_form_hides_cadence_for_single_dose() {
        let form = VaccineForm::default();
        assert!(!form.multi_dose());
        assert_eq!(form.fields().len(), 3);
    }

    #[test]
    fn test_vaccine_form_field_cycle_with_multi_dose() {
        let mut form = VaccineForm {
            doses: String::from("3"),
            ..VaccineForm::default()
        };
        assert!(form.multi_dose());

        form.field = VaccineField::Doses;
        form.next_field();
        assert_eq!(form.field, VaccineField::Periodicity);
        form.next_field();
        assert_eq!(form.field, VaccineField::Interval);
        form.next_field();
        assert_eq!(form.field, VaccineField::Title);
    }

    #[test]
    fn test_vaccine_form_build_single_dose_nulls_cadence() {
        let form = VaccineForm {
            title: String::from("BCG"),
            doses: String::from("1"),
            periodicity: Periodicity::Months,
            interval: String::from("6"),
            ..VaccineForm::default()
        };
        let draft = form.build().unwrap();
        assert_eq!(draft.doses, 1);
        assert!(draft.periodicity.is_none());
        assert!(draft.interval.is_none());
    }

    #[test]
    fn test_vaccine_form_rejects_non_numeric_doses() {
        let form = VaccineForm {
            doses: String::from("two"),
            ..VaccineForm::default()
        };
        let errors = form.build().unwrap_err();
        assert_eq!(errors, vec![String::from("Doses must be a whole number")]);
    }

    #[test]
    fn test_user_form_build_parses_birth_date() {
        let mut form = UserForm::default();
        form.name = String::from("Maria");
        form.birth_date = String::from("1990-05-20");
        form.state_idx = 8; // GO

        let draft = form.build().unwrap();
        assert_eq!(draft.state, "GO");
        assert_eq!(draft.birth_date.to_string(), "1990-05-20");
    }

    #[test]
    fn test_user_form_rejects_bad_birth_date() {
        let mut form = UserForm::default();
        form.birth_date = String::from("20/05/1990");
        assert!(form.build().is_err());
    }

    #[test]
    fn test_appointment_form_requires_options() {
        let mut form = AppointmentForm::default();
        form.date = String::from("2024-06-01 09:30");
        let errors = form.build(&[], &[]).unwrap_err();
        assert!(errors.contains(&String::from("No vaccine selected")));
        assert!(errors.contains(&String::from("No user selected")));
    }

    #[test]
    fn test_filter_form_all_by_default() {
        let form = FilterForm::from_filter(&AppointmentFilter::default(), &[]);
        let filter = form.build(&[]).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_form_rejects_bad_dates() {
        let mut form = FilterForm::from_filter(&AppointmentFilter::default(), &[]);
        form.date_start = String::from("junk");
        let errors = form.build(&[]).unwrap_err();
        assert_eq!(errors, vec![String::from("Start date must be YYYY-MM-DD")]);
    }

    #[test]
    fn test_settle_dialog_toggles_outcome() {
        let mut dialog = SettleDialog::new(String::from("a1"));
        assert_eq!(dialog.outcome, SettleOutcome::Done);
        dialog.cycle();
        assert_eq!(dialog.outcome, SettleOutcome::Canceled);
    }

    #[test]
    fn test_reschedule_dialog_parses_date() {
        let mut dialog = RescheduleDialog::new(String::from("a1"));
        dialog.date = String::from("2024-07-01 14:00");
        assert!(dialog.build().is_ok());

        dialog.date = String::from("tomorrow");
        assert!(dialog.build().is_err());
    }
}
