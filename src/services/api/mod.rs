// API Transport Adapter
//
// Wraps the HTTP client for all Folio backend calls: issues the request,
// translates transport failures, unwraps the fixed response envelope, and
// decodes the payload into its expected shape. Every exit is either a
// decoded value or an `ApiError`.

pub mod error;
pub mod fetcher;
pub mod normalize;

pub use error::{ApiError, ApiResult};
pub use fetcher::ReadFetcher;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::envelope::Envelope;
use error::ENVELOPE_FALLBACK;

/// Session context threaded explicitly through every call site; no ambient
/// auth state exists in this crate.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Session without credentials
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Session authenticated with a bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub session: Session,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            session: Session::anonymous(),
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }
}

/// Folio API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn api_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Issue a request and return the observed HTTP status plus the raw
    /// response body as JSON. Non-2xx responses are already translated here;
    /// callers only see bodies that arrived with a success status.
    pub(crate) async fn request_value<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<(Option<u16>, Value)>
    where
        B: Serialize + ?Sized,
    {
        let url = self.api_url(path);
        let mut request = self.http.request(method, &url);
        if let Some(token) = &self.config.session.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::from)?;

        if !(200..300).contains(&status) {
            return Err(non_success_error(status, &text));
        }

        let value = serde_json::from_str(&text).map_err(|e| {
            log::warn!("[api] {} returned a non-JSON body: {}", url, e);
            ApiError::Validation {
                status: Some(status),
            }
        })?;
        Ok((Some(status), value))
    }

    /// Core operation: issue `method` against `path` with an optional JSON
    /// body, unwrap the envelope, and decode the payload as `T`.
    pub async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, value) = self.request_value(method, path, body).await?;
        let data = unwrap_envelope(status, value)?;
        decode_payload(status, data)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<T, Value>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<T, Value>(Method::DELETE, path, None).await
    }
}

/// Translate a non-2xx response into the error model. Backend errors usually
/// still carry the envelope, so its `message` wins when present.
fn non_success_error(status: u16, body: &str) -> ApiError {
    let backend_message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));
    ApiError::Transport {
        message: backend_message.unwrap_or_else(|| normalize::http_display(Some(status), None)),
        status: Some(status),
    }
}

/// Unwrap the fixed `{ success, data, message }` envelope.
fn unwrap_envelope(status: Option<u16>, value: Value) -> ApiResult<Value> {
    let envelope: Envelope<Value> = serde_json::from_value(value).map_err(|e| {
        log::warn!("[api] malformed response envelope: {}", e);
        ApiError::Validation { status }
    })?;
    if !envelope.success {
        return Err(ApiError::Envelope {
            message: envelope
                .message
                .unwrap_or_else(|| ENVELOPE_FALLBACK.to_string()),
            status,
        });
    }
    Ok(envelope.data.unwrap_or(Value::Null))
}

/// Decode the unwrapped payload into its expected shape, logging the decode
/// diagnostic (it names the offending field) rather than surfacing it.
fn decode_payload<T: DeserializeOwned>(status: Option<u16>, data: Value) -> ApiResult<T> {
    serde_json::from_value(data).map_err(|e| {
        log::warn!("[api] response validation failed: {}", e);
        ApiError::Validation { status }
    })
}
