//! One post's detail screen: the post itself plus its comment thread.

use std::sync::Arc;

use remote::types::{Comment, Post};
use remote::RemoteApi;

use crate::container::{ErrorSignal, StateCell};
use crate::controller::{run_fetch, run_item_action};
use crate::scope::ControllerScope;

pub struct PostController {
    remote: Arc<dyn RemoteApi>,
    post_id: String,
    detail: StateCell<Post>,
    comments: StateCell<Vec<Comment>>,
    action_errors: ErrorSignal,
    scope: ControllerScope,
}

impl PostController {
    pub fn new(remote: Arc<dyn RemoteApi>, post_id: impl Into<String>) -> Self {
        Self {
            remote,
            post_id: post_id.into(),
            detail: StateCell::new(),
            comments: StateCell::new(),
            action_errors: ErrorSignal::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn detail(&self) -> &StateCell<Post> {
        &self.detail
    }

    pub fn comments(&self) -> &StateCell<Vec<Comment>> {
        &self.comments
    }

    pub fn action_errors(&self) -> &ErrorSignal {
        &self.action_errors
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    pub async fn load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let id = self.post_id.clone();
        run_fetch(&self.detail, refresh, async move {
            remote.get_post(&id).await
        })
        .await;
    }

    pub async fn load_comments(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let id = self.post_id.clone();
        run_fetch(&self.comments, refresh, async move {
            remote.get_comments(&id).await
        })
        .await;
    }

    /// Load both cells at screen entry, abandoned together on exit.
    pub fn spawn_load_all(&self) {
        let remote = Arc::clone(&self.remote);
        let id = self.post_id.clone();
        let detail = self.detail.clone();
        let comments = self.comments.clone();
        self.scope.spawn(async move {
            run_fetch(&detail, false, remote.get_post(&id)).await;
            run_fetch(&comments, false, remote.get_comments(&id)).await;
        });
    }

    /// Like or unlike the post shown; the detail cell is patched with the
    /// server's updated counters.
    pub async fn like(&self) {
        run_item_action(
            &self.detail,
            &self.action_errors,
            self.remote.like_post(&self.post_id),
            |post, updated| *post = updated,
        )
        .await;
    }

    pub async fn add_comment(&self, body: &str) {
        run_item_action(
            &self.comments,
            &self.action_errors,
            self.remote.add_comment(&self.post_id, body),
            |comments, created| comments.push(created),
        )
        .await;
    }

    pub async fn like_comment(&self, comment_id: &str) {
        run_item_action(
            &self.comments,
            &self.action_errors,
            self.remote.like_comment(comment_id),
            |comments, updated: Comment| {
                if let Some(slot) = comments.iter_mut().find(|c| c.id == updated.id) {
                    *slot = updated;
                }
            },
        )
        .await;
    }
}
