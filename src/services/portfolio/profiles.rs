// Profile endpoints

use crate::models::portfolio::{Page, Profile, ProfileUpdate};
use crate::services::api::{ApiClient, ApiResult, ReadFetcher};

pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the signed-in member's own profile.
    pub async fn me(&self) -> ApiResult<Profile> {
        self.client.get("/profiles/me").await
    }

    /// Fetch a profile by username.
    pub async fn get(&self, username: &str) -> ApiResult<Profile> {
        self.client.get(&profile_path(username)).await
    }

    /// Update the signed-in member's profile; unset fields stay untouched.
    pub async fn update(&self, update: &ProfileUpdate) -> ApiResult<Profile> {
        self.client.put("/profiles/me", update).await
    }

    /// Browse member profiles. Degrades to an empty page on failure.
    pub async fn browse(&self, page: Page) -> Vec<Profile> {
        ReadFetcher::new(&self.client)
            .fetch_list(&format!("/profiles?{}", page.query()))
            .await
    }
}

fn profile_path(username: &str) -> String {
    format!("/profiles/{}", urlencoding::encode(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path_escapes_username() {
        assert_eq!(profile_path("ada"), "/profiles/ada");
        assert_eq!(profile_path("ada lovelace"), "/profiles/ada%20lovelace");
    }

    #[test]
    fn test_browse_path_shape() {
        let path = format!("/profiles?{}", Page::new(2, 10).query());
        assert_eq!(path, "/profiles?page=2&limit=10");
    }
}
