// Project showcase endpoints

use crate::models::portfolio::{Showcase, ShowcaseDraft};
use crate::services::api::{ApiClient, ApiResult, ReadFetcher};

pub struct ShowcaseApi {
    client: ApiClient,
}

impl ShowcaseApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a member's showcases. Degrades to an empty list on failure.
    pub async fn list_for(&self, username: &str) -> Vec<Showcase> {
        ReadFetcher::new(&self.client)
            .fetch_list(&format!(
                "/profiles/{}/showcases",
                urlencoding::encode(username)
            ))
            .await
    }

    /// Publish a new showcase.
    pub async fn create(&self, draft: &ShowcaseDraft) -> ApiResult<Showcase> {
        self.client.post("/showcases", draft).await
    }

    /// Replace an existing showcase.
    pub async fn update(&self, showcase_id: &str, draft: &ShowcaseDraft) -> ApiResult<Showcase> {
        self.client.put(&showcase_path(showcase_id), draft).await
    }

    /// Delete one of the viewer's showcases.
    pub async fn delete(&self, showcase_id: &str) -> ApiResult<()> {
        self.client.delete(&showcase_path(showcase_id)).await
    }
}

fn showcase_path(showcase_id: &str) -> String {
    format!("/showcases/{}", urlencoding::encode(showcase_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_path() {
        assert_eq!(showcase_path("s1"), "/showcases/s1");
    }
}
