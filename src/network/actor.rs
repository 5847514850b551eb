//! Network actor - runs API calls in the Tokio runtime

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::gateway::ApiGateway;

/// Network actor that executes gateway commands.
///
/// Each command runs as its own task. There is no cancellation: once issued,
/// a request always resolves and its response is always sent.
pub struct NetworkActor<G: ApiGateway> {
    gateway: Arc<G>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl<G: ApiGateway> NetworkActor<G> {
    pub fn new(gateway: G, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            gateway: Arc::new(gateway),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => break,
                        Some(cmd) => self.spawn(cmd),
                    }
                }

                // Reap completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }

        tracing::info!(in_flight = self.active_requests.len(), "Network actor shutting down");
    }

    fn spawn(&mut self, cmd: NetworkCommand) {
        let gateway = Arc::clone(&self.gateway);
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            tracing::info!(id = ?cmd.id(), command = ?cmd, "Executing request");
            if let Some(response) = execute(gateway.as_ref(), cmd).await {
                if let Err(message) = response_result(&response) {
                    tracing::warn!(id = response.id(), error = %message, "Request failed");
                } else {
                    tracing::info!(id = response.id(), "Request completed");
                }
                let _ = response_tx.send(response);
            }
        });
    }
}

fn response_result(response: &NetworkResponse) -> Result<(), &str> {
    let err = match response {
        NetworkResponse::Users { result, .. } => result.as_ref().err(),
        NetworkResponse::Posts { result, .. } => result.as_ref().err(),
        NetworkResponse::Comments { result, .. } => result.as_ref().err(),
        NetworkResponse::CommentCreated { result, .. } => result.as_ref().err(),
        NetworkResponse::CommentDeleted { result, .. } => result.as_ref().err(),
    };
    match err {
        Some(message) => Err(message.as_str()),
        None => Ok(()),
    }
}

/// Run a single command against the gateway
pub async fn execute<G: ApiGateway + ?Sized>(
    gateway: &G,
    cmd: NetworkCommand,
) -> Option<NetworkResponse> {
    let response = match cmd {
        NetworkCommand::LoadUsers { id } => NetworkResponse::Users {
            id,
            result: gateway.list_users().await.map_err(|e| e.to_string()),
        },
        NetworkCommand::LoadPosts { id, user_id } => NetworkResponse::Posts {
            id,
            user_id,
            result: gateway.list_posts(user_id).await.map_err(|e| e.to_string()),
        },
        NetworkCommand::LoadComments { id, post_id } => NetworkResponse::Comments {
            id,
            post_id,
            result: gateway
                .list_comments(post_id)
                .await
                .map_err(|e| e.to_string()),
        },
        NetworkCommand::CreateComment { id, post_id, draft } => NetworkResponse::CommentCreated {
            id,
            post_id,
            result: gateway
                .create_comment(&draft, post_id)
                .await
                .map_err(|e| e.to_string()),
        },
        NetworkCommand::DeleteComment {
            id,
            post_id,
            comment_id,
        } => NetworkResponse::CommentDeleted {
            id,
            post_id,
            comment_id,
            result: gateway
                .delete_comment(comment_id)
                .await
                .map_err(|e| e.to_string()),
        },
        NetworkCommand::Shutdown => return None,
    };
    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, CommentDraft, Post, User};
    use crate::network::error::NetworkError;
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl ApiGateway for Offline {
        async fn list_users(&self) -> Result<Vec<User>, NetworkError> {
            Ok(vec![User::new(1, "Alice")])
        }

        async fn list_posts(&self, _user_id: u64) -> Result<Vec<Post>, NetworkError> {
            Err(NetworkError::other("offline"))
        }

        async fn list_comments(&self, _post_id: u64) -> Result<Vec<Comment>, NetworkError> {
            Err(NetworkError::other("offline"))
        }

        async fn create_comment(
            &self,
            _draft: &CommentDraft,
            _post_id: u64,
        ) -> Result<Comment, NetworkError> {
            Err(NetworkError::other("offline"))
        }

        async fn delete_comment(&self, _comment_id: u64) -> Result<(), NetworkError> {
            Err(NetworkError::other("offline"))
        }
    }

    #[tokio::test]
    async fn test_execute_keeps_request_tags() {
        let response = execute(&Offline, NetworkCommand::LoadPosts { id: 7, user_id: 1 })
            .await
            .unwrap();
        assert_eq!(response.id(), 7);
        assert_eq!(response_result(&response), Err("offline"));
        match response {
            NetworkResponse::Posts { user_id, result, .. } => {
                assert_eq!(user_id, 1);
                assert_eq!(result.unwrap_err(), "offline");
            }
            other => panic!("unexpected response: {other:?}"),
        }

        let users = execute(&Offline, NetworkCommand::LoadUsers { id: 1 }).await.unwrap();
        assert_eq!(response_result(&users), Ok(()));
    }

    #[tokio::test]
    async fn test_shutdown_produces_no_response() {
        assert!(execute(&Offline, NetworkCommand::Shutdown).await.is_none());
    }

    #[tokio::test]
    async fn test_actor_sends_responses_until_shutdown() {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(Offline, resp_tx).run(cmd_rx));

        cmd_tx.send(NetworkCommand::LoadUsers { id: 3 }).unwrap();
        let response = resp_rx.recv().await.unwrap();
        assert_eq!(response.id(), 3);

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
