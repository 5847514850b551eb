//! End-to-end flows through the App and Network actors with a scripted gateway

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use postboard::constants::{BODY_REQUIRED, COMMENT_DELETE_ERROR, NAME_REQUIRED, USERS_LOAD_ERROR};
use postboard::messages::render::CommentsView;
use postboard::messages::ui_events::FormField;
use postboard::{
    AppActor, ApiGateway, Comment, CommentDraft, NetworkActor, NetworkError, Post, RenderState,
    UiEvent, User,
};
use tokio::sync::mpsc;

#[derive(Default)]
struct Data {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    next_comment_id: u64,
    fail_users: bool,
    fail_delete: bool,
}

#[derive(Clone, Default)]
struct FakeApi {
    data: Arc<Mutex<Data>>,
    creates: Arc<AtomicUsize>,
}

impl FakeApi {
    fn scenario() -> Self {
        let api = FakeApi::default();
        {
            let mut data = api.data.lock().unwrap();
            data.users = vec![User::new(1, "Alice"), User::new(2, "Ann")];
            data.posts = vec![Post {
                id: 10,
                user_id: 1,
                title: "T".into(),
                body: "B".into(),
            }];
            data.next_comment_id = 100;
        }
        api
    }

    fn with(self, f: impl FnOnce(&mut Data)) -> Self {
        f(&mut *self.data.lock().unwrap());
        self
    }
}

#[async_trait]
impl ApiGateway for FakeApi {
    async fn list_users(&self) -> Result<Vec<User>, NetworkError> {
        let data = self.data.lock().unwrap();
        if data.fail_users {
            return Err(NetworkError::other("users unavailable"));
        }
        Ok(data.users.clone())
    }

    async fn list_posts(&self, user_id: u64) -> Result<Vec<Post>, NetworkError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, NetworkError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        draft: &CommentDraft,
        post_id: u64,
    ) -> Result<Comment, NetworkError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let mut data = self.data.lock().unwrap();
        let comment = Comment {
            id: data.next_comment_id,
            post_id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            body: draft.body.clone(),
        };
        data.next_comment_id += 1;
        data.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, comment_id: u64) -> Result<(), NetworkError> {
        let mut data = self.data.lock().unwrap();
        if data.fail_delete {
            return Err(NetworkError::other("delete refused"));
        }
        data.comments.retain(|c| c.id != comment_id);
        Ok(())
    }
}

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl Harness {
    fn start(api: FakeApi) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        tokio::spawn(NetworkActor::new(api, net_resp_tx).run(net_cmd_rx));
        tokio::spawn(AppActor::new(net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        Harness { ui_tx, render_rx }
    }

    fn send(&self, event: UiEvent) {
        self.ui_tx.send(event).unwrap();
    }

    fn type_text(&self, text: &str) {
        for c in text.chars() {
            self.send(UiEvent::FormChar(c));
        }
    }

    /// Receive render states until one matches
    async fn wait_for(&mut self, pred: impl Fn(&RenderState) -> bool) -> RenderState {
        let wait = async {
            loop {
                let state = self.render_rx.recv().await.expect("app actor stopped");
                if pred(&state) {
                    return state;
                }
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("timed out waiting for render state")
    }

    /// Select Alice and open her post 10
    async fn open_alice_post(&mut self) -> RenderState {
        self.wait_for(|s| !s.users_loading && !s.users.is_empty()).await;
        self.send(UiEvent::SelectUser(1));
        self.wait_for(|s| !s.posts_loading && !s.posts.is_empty()).await;
        self.send(UiEvent::OpenPost(10));
        self.wait_for(|s| s.selected_post_id() == Some(10) && !s.comments_loading)
            .await
    }
}

#[tokio::test]
async fn test_add_comment_to_empty_post() {
    let api = FakeApi::scenario();
    let mut app = Harness::start(api.clone());

    let state = app.open_alice_post().await;
    assert_eq!(state.selector_label(), "Alice");
    assert!(matches!(state.comments_view(), CommentsView::Empty));
    assert!(state.can_write_comment());

    app.send(UiEvent::ShowCommentForm);
    app.type_text("Bob");
    app.send(UiEvent::FormNextField);
    app.type_text("b@x.com");
    app.send(UiEvent::FormNextField);
    app.type_text("Hi");
    app.send(UiEvent::SubmitComment);

    let state = app
        .wait_for(|s| !s.form.submitting && !s.comments.is_empty())
        .await;
    assert_eq!(state.comments.len(), 1);
    assert_eq!(state.comments[0].id, 100);
    assert_eq!(state.comments[0].name, "Bob");
    assert!(matches!(state.comments_view(), CommentsView::List));

    // Author details stay for the next comment
    assert_eq!(state.form.value(FormField::Name), "Bob");
    assert_eq!(state.form.value(FormField::Email), "b@x.com");
    assert_eq!(state.form.value(FormField::Body), "");
    assert_eq!(api.creates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_delete_restores_comments_and_shows_error() {
    let api = FakeApi::scenario().with(|data| {
        data.fail_delete = true;
        for id in [1, 2] {
            data.comments.push(Comment {
                id,
                post_id: 10,
                name: "Bob".into(),
                email: "b@x.com".into(),
                body: format!("Comment {id}"),
            });
        }
    });
    let mut app = Harness::start(api);

    let state = app.open_alice_post().await;
    assert_eq!(state.comments.len(), 2);

    app.send(UiEvent::DeleteComment(1));
    let state = app.wait_for(|s| s.comments.len() == 1).await;
    assert_eq!(state.comments[0].id, 2);

    let state = app
        .wait_for(|s| s.comments_error.is_some() && s.comments.len() == 2)
        .await;
    assert_eq!(state.comments_error.as_deref(), Some(COMMENT_DELETE_ERROR));
    assert!(matches!(
        state.comments_view(),
        CommentsView::Error(COMMENT_DELETE_ERROR)
    ));
}

#[tokio::test]
async fn test_blank_submit_issues_no_request() {
    let api = FakeApi::scenario();
    let mut app = Harness::start(api.clone());
    app.open_alice_post().await;

    app.send(UiEvent::ShowCommentForm);
    app.send(UiEvent::SubmitComment);
    let state = app.wait_for(|s| s.form.has_errors()).await;

    assert_eq!(state.form.error(FormField::Name), Some(NAME_REQUIRED));
    assert_eq!(state.form.error(FormField::Body), Some(BODY_REQUIRED));
    assert!(!state.form.submitting);
    assert_eq!(api.creates.load(Ordering::SeqCst), 0);

    // Typing into the name field clears only its error
    app.type_text("B");
    let state = app
        .wait_for(|s| s.form.value(FormField::Name) == "B")
        .await;
    assert_eq!(state.form.error(FormField::Name), None);
    assert_eq!(state.form.error(FormField::Body), Some(BODY_REQUIRED));
}

#[tokio::test]
async fn test_users_failure_is_reported() {
    let api = FakeApi::scenario().with(|data| data.fail_users = true);
    let mut app = Harness::start(api);

    let state = app.wait_for(|s| !s.users_loading).await;
    assert_eq!(state.users_error.as_deref(), Some(USERS_LOAD_ERROR));
    assert!(state.users.is_empty());
}

#[tokio::test]
async fn test_switching_user_clears_open_post() {
    let mut app = Harness::start(FakeApi::scenario());
    app.open_alice_post().await;

    app.send(UiEvent::SelectUser(2));
    let state = app
        .wait_for(|s| s.selected_user.as_ref().map(|u| u.id) == Some(2) && !s.posts_loading)
        .await;
    assert!(state.selected_post.is_none());
    assert!(state.comments.is_empty());
    assert!(state.posts.is_empty());
}
