//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and API layers.

pub mod api;
pub mod render;
pub mod ui_events;

pub use api::{ApiCommand, ApiError, ApiResult, Mutation};
pub use render::RenderState;
pub use ui_events::UiEvent;
