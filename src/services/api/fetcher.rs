// Read-Fetch Adapter
//
// GET-only specialization of the transport adapter for cache-layer
// consumers: a failed read must degrade to an empty/default state instead
// of surfacing as a hard error, so this adapter never fails.

use serde::de::DeserializeOwned;

use super::{ApiClient, ApiResult};

/// Read-only fetch adapter. Every failure (transport, envelope, or
/// validation) is logged and swallowed; callers always get a value.
pub struct ReadFetcher<'a> {
    client: &'a ApiClient,
}

impl<'a> ReadFetcher<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// GET `path` and decode the payload as `T`, returning `default` on any
    /// failure. Callers that expect a whole list name `Vec<_>` as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, default: T) -> T {
        or_default(self.client.get::<T>(path).await, default, path)
    }

    /// GET a list endpoint naming only the item type; the array payload is
    /// decoded as `Vec<T>`, empty on any failure. Equivalent to
    /// `fetch::<Vec<T>>(path, Vec::new())`, so wrapping the item type here
    /// and naming `Vec<T>` directly produce identical results.
    pub async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        self.fetch(path, Vec::new()).await
    }
}

/// The adapter's failure policy as a total function: log and fall back.
fn or_default<T>(result: ApiResult<T>, default: T, path: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::warn!("[fetch] GET {} failed ({}): {}", path, err.code(), err);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ApiError;

    #[test]
    fn test_ok_passes_through() {
        assert_eq!(or_default(Ok(7), 0, "/n"), 7);
    }

    #[test]
    fn test_transport_failure_returns_default() {
        let err = ApiError::Transport {
            message: "connection refused".to_string(),
            status: None,
        };
        assert_eq!(or_default::<Vec<i32>>(Err(err), vec![], "/posts"), vec![] as Vec<i32>);
    }

    #[test]
    fn test_envelope_failure_returns_default() {
        let err = ApiError::Envelope {
            message: "X".to_string(),
            status: Some(400),
        };
        assert_eq!(or_default(Err(err), 42, "/posts"), 42);
    }

    #[test]
    fn test_validation_failure_returns_exact_default() {
        let err = ApiError::Validation { status: Some(200) };
        let fallback = vec!["seed".to_string()];
        assert_eq!(
            or_default::<Vec<String>>(Err(err), fallback.clone(), "/tags"),
            fallback
        );
    }
}
