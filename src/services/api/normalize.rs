// Error Message Normalizer
//
// The single place any failure becomes user-facing text. UI layers call
// this and display the result; they never inspect error internals.

use std::error::Error as StdError;

use super::error::ApiError;

/// Fallback shown when a failure carries no usable message.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred.";

/// Map any error to a single display string for banners and toasts.
///
/// Total: never panics, never returns an empty string.
pub fn display_message(err: &(dyn StdError + 'static)) -> String {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return api.message().to_string();
    }
    if let Some(http) = err.downcast_ref::<reqwest::Error>() {
        return http_display(http.status().map(|s| s.as_u16()), None);
    }
    let text = err.to_string();
    if text.trim().is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    text
}

/// Display shape for bare HTTP failures: `[status] backend message` when the
/// backend said something, otherwise `HTTP Error: <status or Unknown status>`.
pub fn http_display(status: Option<u16>, backend_message: Option<&str>) -> String {
    match (status, backend_message) {
        (Some(status), Some(message)) if !message.trim().is_empty() => {
            format!("[{}] {}", status, message)
        }
        (Some(status), _) => format!("HTTP Error: {}", status),
        (None, _) => "HTTP Error: Unknown status".to_string(),
    }
}
