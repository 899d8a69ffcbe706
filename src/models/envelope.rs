// API response envelope
//
// Every Folio backend endpoint wraps its payload in the same JSON shape:
// `{ "success": bool, "data": <payload>, "message": "..." }`.

use serde::{Deserialize, Serialize};

/// Fixed response envelope returned by every backend endpoint.
///
/// `data` is unreliable whenever `success` is false; failure envelopes may
/// omit it entirely, so it deserializes as `None` in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_success_envelope_decodes() {
        let envelope: Envelope<Value> =
            serde_json::from_str(r#"{"success":true,"data":{"id":"p1"}}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap()["id"], "p1");
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_failure_envelope_without_data() {
        let envelope: Envelope<Value> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("nope"));
    }
}
