//! API messages - communication between App and API layers

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::cache::QueryKey;
use crate::models::{
    AllergyDraft, Appointment, AppointmentDraft, AppointmentFilter, Allergy, SettleOutcome, User,
    UserDraft, Vaccine, VaccineDraft,
};

/// Commands sent from the App layer to the API layer
#[derive(Debug, Clone)]
pub enum ApiCommand {
    FetchVaccines,
    FetchAllergies,
    FetchUsers,
    /// Filtered listing; `req` lets the app discard responses for an
    /// outdated filter
    FetchAppointments {
        req: u64,
        filter: AppointmentFilter,
    },
    CreateVaccine(VaccineDraft),
    DeleteVaccine {
        id: String,
    },
    CreateAllergy(AllergyDraft),
    DeleteAllergy {
        id: String,
    },
    CreateUser(UserDraft),
    DeleteUser {
        id: String,
    },
    LinkAllergy {
        user_id: String,
        allergy_id: String,
    },
    CreateAppointment(AppointmentDraft),
    DeleteAppointment {
        id: String,
    },
    SettleAppointment {
        id: String,
        outcome: SettleOutcome,
    },
    RescheduleAppointment {
        id: String,
        date: DateTime<Utc>,
    },
    /// Shutdown the API actor
    Shutdown,
}

/// Which mutation finished, so the app can route the outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    CreateVaccine,
    DeleteVaccine,
    CreateAllergy,
    DeleteAllergy,
    CreateUser,
    DeleteUser,
    LinkAllergy,
    CreateAppointment,
    DeleteAppointment,
    SettleAppointment,
    RescheduleAppointment,
}

impl Mutation {
    /// The cache key this mutation invalidates on success
    pub fn invalidates(&self) -> QueryKey {
        match self {
            Mutation::CreateVaccine | Mutation::DeleteVaccine => QueryKey::Vaccines,
            Mutation::CreateAllergy | Mutation::DeleteAllergy => QueryKey::Allergies,
            Mutation::CreateUser | Mutation::DeleteUser | Mutation::LinkAllergy => QueryKey::Users,
            Mutation::CreateAppointment
            | Mutation::DeleteAppointment
            | Mutation::SettleAppointment
            | Mutation::RescheduleAppointment => QueryKey::Appointments,
        }
    }

    /// Create mutations report failures inside their form dialog; the rest
    /// surface an error toast.
    pub fn reports_errors_in_dialog(&self) -> bool {
        matches!(
            self,
            Mutation::CreateVaccine
                | Mutation::CreateAllergy
                | Mutation::CreateUser
                | Mutation::CreateAppointment
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::CreateVaccine => "create-vaccine",
            Mutation::DeleteVaccine => "delete-vaccine",
            Mutation::CreateAllergy => "create-allergy",
            Mutation::DeleteAllergy => "delete-allergy",
            Mutation::CreateUser => "create-user",
            Mutation::DeleteUser => "delete-user",
            Mutation::LinkAllergy => "link-allergy",
            Mutation::CreateAppointment => "create-appointment",
            Mutation::DeleteAppointment => "delete-appointment",
            Mutation::SettleAppointment => "settle-appointment",
            Mutation::RescheduleAppointment => "reschedule-appointment",
        }
    }
}

/// Failure of a single API call; terminal for the in-flight action
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure, already phrased for humans
    #[error("{message}")]
    Http { message: String },
    /// Backend rejected the request with validation messages
    #[error("{}", .messages.join(", "))]
    Backend { status: u16, messages: Vec<String> },
    /// Response body did not match the envelope contract
    #[error("unexpected response body: {detail}")]
    Decode { detail: String },
}

impl ApiError {
    /// Individual messages for dialog alert lists
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Backend { messages, .. } if !messages.is_empty() => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Responses sent from the API layer back to the App layer
#[derive(Debug, Clone)]
pub enum ApiResult {
    Vaccines(Result<Vec<Vaccine>, ApiError>),
    Allergies(Result<Vec<Allergy>, ApiError>),
    Users(Result<Vec<User>, ApiError>),
    Appointments {
        req: u64,
        result: Result<Vec<Appointment>, ApiError>,
    },
    MutationDone {
        mutation: Mutation,
        result: Result<(), ApiError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_joins_messages() {
        let err = ApiError::Backend {
            status: 400,
            messages: vec!["titulo is required".to_string(), "doses must be >= 1".to_string()],
        };
        assert_eq!(err.to_string(), "titulo is required, doses must be >= 1");
        assert_eq!(err.messages().len(), 2);
    }

    #[test]
    fn test_http_error_single_message() {
        let err = ApiError::Http {
            message: "Connection failed: refused".to_string(),
        };
        assert_eq!(err.messages(), vec!["Connection failed: refused".to_string()]);
    }

    #[test]
    fn test_mutation_invalidation_keys() {
        assert_eq!(Mutation::CreateVaccine.invalidates(), QueryKey::Vaccines);
        assert_eq!(Mutation::LinkAllergy.invalidates(), QueryKey::Users);
        assert_eq!(
            Mutation::RescheduleAppointment.invalidates(),
            QueryKey::Appointments
        );
    }

    #[test]
    fn test_error_routing() {
        assert!(Mutation::CreateUser.reports_errors_in_dialog());
        assert!(!Mutation::DeleteUser.reports_errors_in_dialog());
        assert!(!Mutation::SettleAppointment.reports_errors_in_dialog());
    }
}
