// Assistant Flow Service
//
// Drives the assistant panel's conversation: owns the state machine, the
// transport seam, and the notification sink. Network and validation
// failures during a turn are surfaced as notifications and never advance
// or break the machine.

pub mod state;

pub use state::{ChatEvent, ChatState};

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::models::assistant::{AssistantReply, AssistantRequest, ChatStep, ResultItem};
use crate::services::api::error::ENVELOPE_FALLBACK;
use crate::services::api::{normalize, ApiClient, ApiError, ApiResult};
use crate::services::notification::Notifier;

/// Assistant chat endpoint
const CHAT_PATH: &str = "/assistant/chat";

/// Notification shown when the user submits a blank message.
const EMPTY_INPUT_NOTICE: &str = "Please enter a message first.";

/// Transport seam for the assistant endpoint.
#[async_trait]
pub trait AssistantTransport: Send + Sync {
    async fn send_chat(&self, request: &AssistantRequest) -> ApiResult<AssistantReply>;
}

/// The assistant envelope carries the next step alongside the usual fields,
/// so it is decoded here instead of through the generic send path.
#[derive(Debug, Deserialize)]
struct ReplyWire {
    success: bool,
    message: Option<String>,
    step: Option<ChatStep>,
    #[serde(default)]
    data: Vec<ResultItem>,
}

fn decode_reply(status: Option<u16>, value: Value) -> ApiResult<AssistantReply> {
    let wire: ReplyWire = serde_json::from_value(value).map_err(|e| {
        log::warn!("[assistant] reply validation failed: {}", e);
        ApiError::Validation { status }
    })?;
    if !wire.success {
        return Err(ApiError::Envelope {
            message: wire
                .message
                .unwrap_or_else(|| ENVELOPE_FALLBACK.to_string()),
            status,
        });
    }
    let step = wire.step.ok_or_else(|| {
        log::warn!("[assistant] reply is missing the next step");
        ApiError::Validation { status }
    })?;
    Ok(AssistantReply {
        step,
        message: wire.message,
        items: wire.data,
    })
}

#[async_trait]
impl AssistantTransport for ApiClient {
    async fn send_chat(&self, request: &AssistantRequest) -> ApiResult<AssistantReply> {
        let (status, value) = self
            .request_value(Method::POST, CHAT_PATH, Some(request))
            .await?;
        decode_reply(status, value)
    }
}

/// One assistant panel instance. Created on open, dropped on close; nothing
/// persists across opens.
pub struct AssistantFlow<T: AssistantTransport, N: Notifier> {
    state: ChatState,
    transport: T,
    notifier: N,
}

impl<T: AssistantTransport, N: Notifier> AssistantFlow<T, N> {
    /// Open the panel: fresh state seeded with the assistant greeting.
    pub fn open(transport: T, notifier: N) -> Self {
        Self {
            state: ChatState::new(),
            transport,
            notifier,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    fn advance(&mut self, event: ChatEvent) {
        self.state = self.state.clone().apply(event);
    }

    /// Pick a project from the list step.
    pub fn select_project(&mut self, name: &str) {
        self.advance(ChatEvent::ProjectSelected(name.to_string()));
    }

    /// Send one user message through the assistant endpoint. A blank message
    /// is rejected with a notification; a failed turn is reported with the
    /// normalized error text and leaves the machine on its prior step.
    pub async fn send_message(&mut self, text: &str) {
        if self.state.is_loading {
            return;
        }
        let text = text.trim();
        if text.is_empty() {
            self.notifier.notify(EMPTY_INPUT_NOTICE);
            return;
        }

        let request = AssistantRequest {
            step: self.state.step,
            selected_project: self.state.selected_project.clone(),
            message: text.to_string(),
        };
        self.advance(ChatEvent::MessageSent(text.to_string()));

        match self.transport.send_chat(&request).await {
            Ok(reply) => self.advance(ChatEvent::ReplyReceived(reply)),
            Err(err) => {
                self.notifier.notify(&normalize::display_message(&err));
                self.advance(ChatEvent::ReplyFailed);
            }
        }
    }

    /// Return to the project list, dropping the last results.
    pub fn go_back(&mut self) {
        self.advance(ChatEvent::WentBack);
    }
}
