//! HTTP client wrapper - executes backend calls and decodes the envelope

use chrono::SecondsFormat;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::messages::api::ApiError;
use crate::models::{
    local_to_utc, Allergy, AllergyDraft, ApiEnvelope, ApiErrorBody, Appointment, AppointmentDraft,
    AppointmentFilter, LinkAllergyDraft, RescheduleDraft, SettleDraft, SettleOutcome, User,
    UserDraft, Vaccine, VaccineDraft,
};

/// Thin wrapper around a shared `reqwest::Client` bound to the configured
/// backend address
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        use std::time::Duration;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        ApiClient { http, config }
    }

    // ========================
    // Listings
    // ========================

    pub async fn fetch_vaccines(&self) -> Result<Vec<Vaccine>, ApiError> {
        self.get_list("/vacinas", &[]).await
    }

    pub async fn fetch_allergies(&self) -> Result<Vec<Allergy>, ApiError> {
        self.get_list("/alergias", &[]).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list("/usuarios", &[]).await
    }

    pub async fn fetch_appointments(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.get_list("/agendas", &filter_query(filter)).await
    }

    // ========================
    // Mutations
    // ========================

    pub async fn create_vaccine(&self, draft: &VaccineDraft) -> Result<(), ApiError> {
        self.post("/vacinas", draft).await
    }

    pub async fn delete_vaccine(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/vacinas/{id}")).await
    }

    pub async fn create_allergy(&self, draft: &AllergyDraft) -> Result<(), ApiError> {
        self.post("/alergias", draft).await
    }

    pub async fn delete_allergy(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/alergias/{id}")).await
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<(), ApiError> {
        self.post("/usuarios", draft).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/usuarios/{id}")).await
    }

    pub async fn link_allergy(&self, user_id: &str, allergy_id: &str) -> Result<(), ApiError> {
        let draft = LinkAllergyDraft {
            allergy_id: allergy_id.to_string(),
        };
        self.post(&format!("/usuarios/{user_id}/alergias"), &draft).await
    }

    pub async fn create_appointment(&self, draft: &AppointmentDraft) -> Result<(), ApiError> {
        self.post("/agendas", draft).await
    }

    pub async fn delete_appointment(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/agendas/{id}")).await
    }

    pub async fn settle_appointment(
        &self,
        id: &str,
        outcome: SettleOutcome,
    ) -> Result<(), ApiError> {
        self.post(&format!("/agendas/{id}/baixa"), &SettleDraft { outcome })
            .await
    }

    pub async fn reschedule_appointment(
        &self,
        id: &str,
        date: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), ApiError> {
        self.post(
            &format!("/agendas/{id}/reagendar"),
            &RescheduleDraft { date },
        )
        .await
    }

    // ========================
    // Plumbing
    // ========================

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>, ApiError> {
        let url = self.config.endpoint(path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        if (200..300).contains(&status) {
            decode_list(&body)
        } else {
            Err(error_from_body(status, &body))
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        Self::check_mutation_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        Self::check_mutation_response(response).await
    }

    async fn check_mutation_response(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.map_err(transport_error)?;
        Err(error_from_body(status, &body))
    }
}

/// Expands the appointment filter into query parameters. Day filters cover
/// the full local day, converted to UTC instants.
pub fn filter_query(filter: &AppointmentFilter) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(status) = filter.status {
        params.push((String::from("situacao"), status.as_str().to_string()));
    }
    if let Some(start) = filter.date_start {
        if let Some(naive) = start.and_hms_opt(0, 0, 0) {
            params.push((
                String::from("dataStart"),
                local_to_utc(naive).to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
    }
    if let Some(end) = filter.date_end {
        if let Some(naive) = end.and_hms_milli_opt(23, 59, 59, 999) {
            params.push((
                String::from("dataEnd"),
                local_to_utc(naive).to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
    }
    if let Some(user_id) = &filter.user_id {
        params.push((String::from("usuarioId"), user_id.clone()));
    }

    params
}

/// Extracts `data` from a success envelope
fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    serde_json::from_str::<ApiEnvelope<Vec<T>>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode {
            detail: e.to_string(),
        })
}

/// Extracts validation messages from an error body; non-conforming bodies
/// degrade to the bare HTTP status.
fn error_from_body(status: u16, body: &str) -> ApiError {
    let messages = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error_messages)
        .unwrap_or_default();

    if messages.is_empty() {
        ApiError::Backend {
            status,
            messages: vec![format!("HTTP {status}")],
        }
    } else {
        ApiError::Backend { status, messages }
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    let message = if error.is_timeout() {
        String::from("Request timed out (30s)")
    } else if error.is_connect() {
        format!("Connection failed: {error}")
    } else {
        format!("Request failed: {error}")
    };
    ApiError::Http { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use crate::models::AppointmentStatus;

    #[test]
    fn test_decode_list_extracts_data() {
        let body = r#"{
            "status": 200,
            "message": "OK",
            "timestamp": 1712000000,
            "data": [{"id": "1", "nome": "Dipirona"}, {"id": "2", "nome": "Penicilina"}]
        }"#;
        let allergies: Vec<Allergy> = decode_list(body).unwrap();
        assert_eq!(allergies.len(), 2);
        assert_eq!(allergies[1].name, "Penicilina");
    }

    #[test]
    fn test_decode_list_rejects_malformed_body() {
        let result: Result<Vec<Allergy>, ApiError> = decode_list("<html>nope</html>");
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_error_body_with_messages() {
        let body = r#"{"status": 400, "message": "Bad Request",
                       "timestamp": 1712000000, "data": null,
                       "errorMessages": ["titulo is required"]}"#;
        let error = error_from_body(400, body);
        assert_eq!(error.to_string(), "titulo is required");
    }

    #[test]
    fn test_error_body_without_messages_degrades_to_status() {
        let error = error_from_body(500, "Internal Server Error");
        assert_eq!(error.to_string(), "HTTP 500");
    }

    #[test]
    fn test_empty_filter_emits_no_params() {
        assert!(filter_query(&AppointmentFilter::default()).is_empty());
    }

    #[test]
    fn test_full_filter_param_order_and_shape() {
        let filter = AppointmentFilter {
            status: Some(AppointmentStatus::Scheduled),
            user_id: Some(String::from("u1")),
            date_start: NaiveDate::from_ymd_opt(2024, 6, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 6, 30),
        };
        let params = filter_query(&filter);

        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["situacao", "dataStart", "dataEnd", "usuarioId"]);
        assert_eq!(params[0].1, "SCHEDULED");
        assert_eq!(params[3].1, "u1");

        // Date params are UTC instants a full local day apart
        let start: DateTime<Utc> = params[1].1.parse().unwrap();
        let end: DateTime<Utc> = params[2].1.parse().unwrap();
        let span = end - start;
        assert!(span > chrono::Duration::days(29));
        assert!(span < chrono::Duration::days(31));
    }
}
