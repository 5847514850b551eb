//! HTTP gateway - executes API calls with reqwest

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::models::{Comment, CommentDraft, NewComment, Post, User};
use crate::network::error::NetworkError;
use crate::network::gateway::ApiGateway;

/// `ApiGateway` backed by a JSON REST API
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpGateway {
            client: create_client(timeout),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, NetworkError> {
        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp)?;
        Ok(resp.json::<T>().await?)
    }
}

/// Reject non-2xx responses
fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, NetworkError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(NetworkError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        })
    }
}

#[async_trait]
impl ApiGateway for HttpGateway {
    async fn list_users(&self) -> Result<Vec<User>, NetworkError> {
        self.get_json(self.url("users")).await
    }

    async fn list_posts(&self, user_id: u64) -> Result<Vec<Post>, NetworkError> {
        self.get_json(self.url(&format!("posts?userId={}", user_id)))
            .await
    }

    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, NetworkError> {
        self.get_json(self.url(&format!("comments?postId={}", post_id)))
            .await
    }

    async fn create_comment(
        &self,
        draft: &CommentDraft,
        post_id: u64,
    ) -> Result<Comment, NetworkError> {
        let resp = self
            .client
            .post(self.url("comments"))
            .json(&NewComment::from_draft(draft, post_id))
            .send()
            .await?;
        let resp = check_status(resp)?;
        Ok(resp.json::<Comment>().await?)
    }

    async fn delete_comment(&self, comment_id: u64) -> Result<(), NetworkError> {
        let resp = self
            .client
            .delete(self.url(&format!("comments/{}", comment_id)))
            .send()
            .await?;
        check_status(resp)?;
        Ok(())
    }
}

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
