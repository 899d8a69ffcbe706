//! Folio client library
//!
//! Typed contract layer for the Folio portfolio backend: the transport
//! adapter and read fetcher every consumer goes through, the error model
//! and display normalization, the portfolio resource clients, and the
//! assistant conversation flow.

pub mod models;
pub mod services;

pub use models::envelope::Envelope;
pub use services::api::error::{ApiError, ApiResult};
pub use services::api::{ApiClient, ApiConfig, ReadFetcher, Session};
pub use services::assistant::{AssistantFlow, AssistantTransport};
pub use services::notification::{LogNotifier, Notifier};
pub use services::portfolio::{PostApi, ProfileApi, ShowcaseApi};
