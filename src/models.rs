use chrono::{DateTime, Local, NaiveDateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Interprets a naive date-time as local wall-clock time and converts it
/// to a UTC instant. Ambiguous or skipped local times (DST transitions)
/// resolve to the earliest valid interpretation.
pub fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&naive),
    }
}

/// Dosing cadence unit for multi-dose vaccines
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Periodicity {
    #[serde(rename = "DIAS")]
    Days,
    #[serde(rename = "SEMANAS")]
    Weeks,
    #[serde(rename = "MESES")]
    Months,
    #[serde(rename = "ANOS")]
    Years,
}

impl Periodicity {
    pub fn as_str(&self) -> &str {
        match self {
            Periodicity::Days => "DIAS",
            Periodicity::Weeks => "SEMANAS",
            Periodicity::Months => "MESES",
            Periodicity::Years => "ANOS",
        }
    }

    pub fn next(&self) -> Periodicity {
        match self {
            Periodicity::Days => Periodicity::Weeks,
            Periodicity::Weeks => Periodicity::Months,
            Periodicity::Months => Periodicity::Years,
            Periodicity::Years => Periodicity::Days,
        }
    }

    pub fn prev(&self) -> Periodicity {
        match self {
            Periodicity::Days => Periodicity::Years,
            Periodicity::Weeks => Periodicity::Days,
            Periodicity::Months => Periodicity::Weeks,
            Periodicity::Years => Periodicity::Months,
        }
    }
}

/// A vaccine as stored by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub doses: u32,
    #[serde(rename = "periodicidade")]
    pub periodicity: Option<Periodicity>,
    #[serde(rename = "intervalo")]
    pub interval: Option<u32>,
}

/// Payload for creating a vaccine
///
/// Single-dose vaccines have no cadence: the backend expects
/// `periodicidade` and `intervalo` as explicit nulls in that case.
#[derive(Clone, Debug, Serialize)]
pub struct VaccineDraft {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub doses: u32,
    #[serde(rename = "periodicidade")]
    pub periodicity: Option<Periodicity>,
    #[serde(rename = "intervalo")]
    pub interval: Option<u32>,
}

impl VaccineDraft {
    /// Normalizes the cadence: a single-dose vaccine carries none
    pub fn normalized(mut self) -> Self {
        if self.doses <= 1 {
            self.periodicity = None;
            self.interval = None;
        }
        self
    }
}

/// An allergy as stored by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Allergy {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Payload for creating an allergy
#[derive(Clone, Debug, Serialize)]
pub struct AllergyDraft {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "MASCULINO")]
    Male,
    #[serde(rename = "FEMININO")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "MASCULINO",
            Sex::Female => "FEMININO",
        }
    }

    pub fn toggle(&self) -> Sex {
        match self {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Male,
        }
    }
}

/// Brazilian state codes for the UF select field
pub const BR_STATES: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// A registered user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "setor")]
    pub district: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "uf")]
    pub state: String,
    #[serde(rename = "alergias", default)]
    pub allergies: Vec<Allergy>,
}

impl User {
    /// Single-line address for table display
    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {}, {} - {}",
            self.street,
            self.number,
            self.district,
            self.city,
            self.state.to_uppercase()
        )
    }
}

/// Payload for creating a user (allergies are linked separately)
#[derive(Clone, Debug, Serialize)]
pub struct UserDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "setor")]
    pub district: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "uf")]
    pub state: String,
}

/// Payload linking an existing allergy to a user
#[derive(Clone, Debug, Serialize)]
pub struct LinkAllergyDraft {
    #[serde(rename = "alergiaId")]
    pub allergy_id: String,
}

/// Appointment lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Done,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AppointmentStatus::Scheduled => "SCHEDULED",
            AppointmentStatus::Done => "DONE",
            AppointmentStatus::Canceled => "CANCELED",
        }
    }

    /// Display rank: open appointments sort before settled ones
    pub fn rank(&self) -> u8 {
        match self {
            AppointmentStatus::Scheduled => 1,
            AppointmentStatus::Done => 2,
            AppointmentStatus::Canceled => 3,
        }
    }
}

/// A scheduled vaccination appointment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    #[serde(rename = "vacina")]
    pub vaccine: Vaccine,
    /// Zero-based dose index; shown one-based in tables
    #[serde(rename = "doseIdx")]
    pub dose_idx: u32,
    #[serde(rename = "usuario")]
    pub user: User,
    #[serde(rename = "dataSituacao")]
    pub status_date: Option<DateTime<Utc>>,
    #[serde(rename = "situacao")]
    pub status: AppointmentStatus,
}

/// Payload for scheduling an appointment
#[derive(Clone, Debug, Serialize)]
pub struct AppointmentDraft {
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    #[serde(rename = "vacinaId")]
    pub vaccine_id: String,
    #[serde(rename = "usuarioId")]
    pub user_id: String,
}

/// Outcome recorded when settling an appointment
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettleOutcome {
    Done,
    Canceled,
}

impl SettleOutcome {
    pub fn as_str(&self) -> &str {
        match self {
            SettleOutcome::Done => "DONE",
            SettleOutcome::Canceled => "CANCELED",
        }
    }

    pub fn toggle(&self) -> SettleOutcome {
        match self {
            SettleOutcome::Done => SettleOutcome::Canceled,
            SettleOutcome::Canceled => SettleOutcome::Done,
        }
    }
}

/// Body of `POST /agendas/{id}/baixa`
#[derive(Clone, Debug, Serialize)]
pub struct SettleDraft {
    #[serde(rename = "situacao")]
    pub outcome: SettleOutcome,
}

/// Body of `POST /agendas/{id}/reagendar`
#[derive(Clone, Debug, Serialize)]
pub struct RescheduleDraft {
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
}

/// Optional query filters for the appointments listing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub user_id: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
}

impl AppointmentFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.user_id.is_none()
            && self.date_start.is_none()
            && self.date_end.is_none()
    }
}

/// Uniform response envelope returned by every backend endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: u16,
    pub message: String,
    pub timestamp: i64,
    pub data: T,
}

/// Error body shape for validation failures
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "errorMessages", default)]
    pub error_messages: Vec<String>,
}

/// Orders appointments for display: scheduled first, then settled,
/// date ascending within each status group.
pub fn sort_appointments(appointments: &mut [Appointment]) {
    appointments.sort_by_key(|a| a.date);
    appointments.sort_by_key(|a| a.status.rank());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn vaccine(id: &str) -> Vaccine {
        Vaccine {
            id: id.to_string(),
            title: "BCG".to_string(),
            description: "Tuberculose".to_string(),
            doses: 1,
            periodicity: None,
            interval: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Maria".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
            sex: Sex::Female,
            street: "Rua A".to_string(),
            number: "10".to_string(),
            district: "Centro".to_string(),
            city: "Goiânia".to_string(),
            state: "GO".to_string(),
            allergies: Vec::new(),
        }
    }

    fn appointment(id: &str, status: AppointmentStatus, day: u32) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            notes: None,
            vaccine: vaccine("v1"),
            dose_idx: 0,
            user: user("u1"),
            status_date: None,
            status,
        }
    }

    #[test]
    fn test_decode_vaccine_wire_names() {
        let json = r#"{
            "id": "7",
            "titulo": "Hepatite B",
            "descricao": "Três doses",
            "doses": 3,
            "periodicidade": "MESES",
            "intervalo": 6
        }"#;
        let v: Vaccine = serde_json::from_str(json).unwrap();
        assert_eq!(v.title, "Hepatite B");
        assert_eq!(v.periodicity, Some(Periodicity::Months));
        assert_eq!(v.interval, Some(6));
    }

    #[test]
    fn test_single_dose_draft_drops_cadence() {
        let draft = VaccineDraft {
            title: "BCG".to_string(),
            description: "Dose única".to_string(),
            doses: 1,
            periodicity: Some(Periodicity::Days),
            interval: Some(30),
        }
        .normalized();

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["periodicidade"].is_null());
        assert!(value["intervalo"].is_null());
    }

    #[test]
    fn test_multi_dose_draft_keeps_cadence() {
        let draft = VaccineDraft {
            title: "Hepatite B".to_string(),
            description: String::new(),
            doses: 3,
            periodicity: Some(Periodicity::Months),
            interval: Some(6),
        }
        .normalized();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["periodicidade"], "MESES");
        assert_eq!(value["intervalo"], 6);
    }

    #[test]
    fn test_decode_envelope() {
        let json = r#"{
            "status": 200,
            "message": "OK",
            "timestamp": 1712000000,
            "data": [{"id": "1", "nome": "Dipirona"}]
        }"#;
        let envelope: ApiEnvelope<Vec<Allergy>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].name, "Dipirona");
    }

    #[test]
    fn test_decode_appointment() {
        let json = r#"{
            "id": "a1",
            "data": "2024-03-10T12:00:00Z",
            "observacoes": null,
            "vacina": {"id": "v1", "titulo": "BCG", "descricao": "", "doses": 1,
                       "periodicidade": null, "intervalo": null},
            "doseIdx": 0,
            "usuario": {"id": "u1", "nome": "Maria", "dataNascimento": "1990-05-20",
                        "sexo": "FEMININO", "logradouro": "Rua A", "numero": "10",
                        "setor": "Centro", "cidade": "Goiânia", "uf": "GO"},
            "dataSituacao": null,
            "situacao": "SCHEDULED"
        }"#;
        let a: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(a.status, AppointmentStatus::Scheduled);
        assert_eq!(a.vaccine.title, "BCG");
        assert!(a.user.allergies.is_empty());
    }

    #[test]
    fn test_settle_draft_wire_shape() {
        let body = serde_json::to_value(SettleDraft {
            outcome: SettleOutcome::Canceled,
        })
        .unwrap();
        assert_eq!(body["situacao"], "CANCELED");
    }

    #[test]
    fn test_sort_scheduled_first_then_date() {
        let mut list = vec![
            appointment("done-late", AppointmentStatus::Done, 20),
            appointment("sched-late", AppointmentStatus::Scheduled, 15),
            appointment("canceled", AppointmentStatus::Canceled, 1),
            appointment("sched-early", AppointmentStatus::Scheduled, 2),
            appointment("done-early", AppointmentStatus::Done, 5),
        ];
        sort_appointments(&mut list);

        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["sched-early", "sched-late", "done-early", "done-late", "canceled"]
        );
    }

    #[test]
    fn test_address_line_uppercases_state() {
        let mut u = user("u1");
        u.state = "go".to_string();
        assert_eq!(u.address_line(), "Rua A, 10, Centro, Goiânia - GO");
    }
}
