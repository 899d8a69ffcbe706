// Feed post endpoints

use crate::models::portfolio::{Comment, NewPost, Page, Post};
use crate::services::api::{ApiClient, ApiResult, ReadFetcher};

pub struct PostApi {
    client: ApiClient,
}

impl PostApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a page of the feed. Degrades to an empty page on failure.
    pub async fn list(&self, page: Page) -> Vec<Post> {
        ReadFetcher::new(&self.client)
            .fetch_list(&format!("/posts?{}", page.query()))
            .await
    }

    /// Publish a status update.
    pub async fn create(&self, body: &str) -> ApiResult<Post> {
        let payload = NewPost {
            body: body.to_string(),
        };
        self.client.post("/posts", &payload).await
    }

    /// Delete one of the viewer's own posts.
    pub async fn delete(&self, post_id: &str) -> ApiResult<()> {
        self.client.delete(&post_path(post_id, "")).await
    }

    /// Like a post; returns the post with its updated counters.
    pub async fn like(&self, post_id: &str) -> ApiResult<Post> {
        self.client
            .post(&post_path(post_id, "/like"), &serde_json::json!({}))
            .await
    }

    /// Remove the viewer's like; returns the post with its updated counters.
    pub async fn unlike(&self, post_id: &str) -> ApiResult<Post> {
        self.client.delete(&post_path(post_id, "/like")).await
    }

    /// Fetch a post's comments. Degrades to an empty list on failure.
    pub async fn comments(&self, post_id: &str) -> Vec<Comment> {
        ReadFetcher::new(&self.client)
            .fetch_list(&post_path(post_id, "/comments"))
            .await
    }

    /// Add a comment to a post.
    pub async fn comment(&self, post_id: &str, body: &str) -> ApiResult<Comment> {
        self.client
            .post(
                &post_path(post_id, "/comments"),
                &serde_json::json!({ "body": body }),
            )
            .await
    }
}

fn post_path(post_id: &str, suffix: &str) -> String {
    format!("/posts/{}{}", urlencoding::encode(post_id), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_paths() {
        assert_eq!(post_path("p1", ""), "/posts/p1");
        assert_eq!(post_path("p1", "/like"), "/posts/p1/like");
        assert_eq!(post_path("p1", "/comments"), "/posts/p1/comments");
    }

    #[test]
    fn test_list_path_shape() {
        let path = format!("/posts?{}", Page::default().query());
        assert_eq!(path, "/posts?page=1&limit=20");
    }
}
