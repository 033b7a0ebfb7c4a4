//! The post feed: home, community, or author-scoped.

use std::sync::Arc;

use remote::types::{FeedQuery, NewPost, Post};
use remote::RemoteApi;

use crate::container::{ErrorSignal, StateCell};
use crate::controller::{run_fetch, run_item_action};
use crate::scope::ControllerScope;

pub struct FeedController {
    remote: Arc<dyn RemoteApi>,
    query: FeedQuery,
    posts: StateCell<Vec<Post>>,
    action_errors: ErrorSignal,
    scope: ControllerScope,
}

impl FeedController {
    pub fn new(remote: Arc<dyn RemoteApi>, query: FeedQuery) -> Self {
        Self {
            remote,
            query,
            posts: StateCell::new(),
            action_errors: ErrorSignal::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn posts(&self) -> &StateCell<Vec<Post>> {
        &self.posts
    }

    pub fn action_errors(&self) -> &ErrorSignal {
        &self.action_errors
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    /// Fetch the feed. `refresh` marks the load as an update over content
    /// already on screen (pull-to-refresh) rather than a first load.
    pub async fn load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let query = self.query.clone();
        run_fetch(&self.posts, refresh, async move {
            remote.get_posts(query).await
        })
        .await;
    }

    /// Fire-and-forget variant tied to the screen scope; the fetch is
    /// abandoned if the user navigates away before it lands.
    pub fn spawn_load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let query = self.query.clone();
        let posts = self.posts.clone();
        self.scope.spawn(async move {
            run_fetch(&posts, refresh, async move { remote.get_posts(query).await }).await;
        });
    }

    /// Like or unlike one post in place. No `Loading` transition; a
    /// failure goes to the ancillary signal and the list stays rendered.
    pub async fn like(&self, post_id: &str) {
        run_item_action(
            &self.posts,
            &self.action_errors,
            self.remote.like_post(post_id),
            |posts, updated: Post| {
                if let Some(slot) = posts.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated;
                }
            },
        )
        .await;
    }

    pub async fn delete(&self, post_id: &str) {
        let id = post_id.to_string();
        run_item_action(
            &self.posts,
            &self.action_errors,
            self.remote.delete_post(post_id),
            |posts, ()| posts.retain(|p| p.id != id),
        )
        .await;
    }

    /// Submit a draft; the created post is prepended to the rendered
    /// list. A no-op on the list unless the feed has loaded.
    pub async fn create(&self, draft: NewPost) {
        run_item_action(
            &self.posts,
            &self.action_errors,
            self.remote.create_post(draft),
            |posts, created| posts.insert(0, created),
        )
        .await;
    }
}
