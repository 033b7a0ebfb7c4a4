//! The `RemoteApi` trait: one method per backend operation.

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::types::{
    AuthPayload, ChatMessage, Comment, Community, Conversation, FeedQuery, LoginRequest, NewPost,
    Post, ProfilePatch, SignupRequest, User,
};

/// The sole boundary between the controllers and the network.
///
/// Controllers hold an `Arc<dyn RemoteApi>`; production wires in
/// [`HttpApi`](crate::http::HttpApi), tests wire in a scripted double.
/// Every method is a single request/response exchange; none of them
/// retries or caches.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    // ── Authentication ──────────────────────────────────────────
    async fn login(&self, req: LoginRequest) -> Result<AuthPayload, RemoteError>;
    async fn signup(&self, req: SignupRequest) -> Result<AuthPayload, RemoteError>;

    // ── Profiles ────────────────────────────────────────────────
    /// The signed-in user's own profile.
    async fn get_me(&self) -> Result<User, RemoteError>;
    async fn get_user(&self, user_id: &str) -> Result<User, RemoteError>;
    async fn update_profile(&self, patch: ProfilePatch) -> Result<User, RemoteError>;
    /// Follow or unfollow; returns the profile with the new follow state.
    async fn toggle_follow(&self, user_id: &str) -> Result<User, RemoteError>;

    // ── Posts ───────────────────────────────────────────────────
    async fn get_posts(&self, query: FeedQuery) -> Result<Vec<Post>, RemoteError>;
    async fn get_post(&self, post_id: &str) -> Result<Post, RemoteError>;
    async fn create_post(&self, draft: NewPost) -> Result<Post, RemoteError>;
    async fn delete_post(&self, post_id: &str) -> Result<(), RemoteError>;
    /// Like or unlike; returns the post with updated counters.
    async fn like_post(&self, post_id: &str) -> Result<Post, RemoteError>;

    // ── Comments ────────────────────────────────────────────────
    async fn get_comments(&self, post_id: &str) -> Result<Vec<Comment>, RemoteError>;
    async fn add_comment(&self, post_id: &str, body: &str) -> Result<Comment, RemoteError>;
    async fn like_comment(&self, comment_id: &str) -> Result<Comment, RemoteError>;

    // ── Communities ─────────────────────────────────────────────
    async fn get_communities(&self) -> Result<Vec<Community>, RemoteError>;
    /// Join or leave; returns the community with the new membership state.
    async fn join_community(&self, community_id: &str) -> Result<Community, RemoteError>;

    // ── Chat ────────────────────────────────────────────────────
    async fn get_conversations(&self) -> Result<Vec<Conversation>, RemoteError>;
    async fn get_messages(&self, conversation_id: &str) -> Result<Vec<ChatMessage>, RemoteError>;
    async fn send_message(
        &self,
        conversation_id: &str,
        body: &str,
    ) -> Result<ChatMessage, RemoteError>;
}
