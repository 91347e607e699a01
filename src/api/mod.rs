//! API layer - backend call execution
//!
//! The API actor receives fetch/mutation commands and sends back results.

pub mod actor;
pub mod client;

pub use actor::ApiActor;
pub use client::ApiClient;
