//! # vaxadmin
//!
//! A terminal admin console for a vaccination scheduling backend.
//!
//! ## Features
//! - Vaccine, allergy, user and agenda management over the backend's REST API
//! - Keyed query cache with invalidation-on-mutation and automatic refetch
//! - Confirmation dialogs for destructive actions
//! - Settle ("baixa") and reschedule flows for agendas
//! - Filtered agenda listings (status, user, date range)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - API Layer (Tokio runtime)

pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiActor, ApiClient};
pub use app::{AppActor, AppState};
pub use cache::{Query, QueryCache, QueryKey, QueryStatus};
pub use config::Config;
pub use messages::{ApiCommand, ApiError, ApiResult, RenderState, UiEvent};
pub use models::{Allergy, Appointment, AppointmentStatus, User, Vaccine};
