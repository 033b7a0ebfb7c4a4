//! Scripted stand-in for the remote layer.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use remote::types::{
    AuthPayload, ChatMessage, Comment, Community, Conversation, FeedQuery, LoginRequest, NewPost,
    Post, ProfilePatch, SignupRequest, User,
};
use remote::{RemoteApi, RemoteError};

/// A `RemoteApi` whose responses are queued up front. Each call pops the
/// next scripted result for its operation and is recorded in `calls`;
/// an operation with an empty queue fails loudly so a test never passes
/// on an exchange it forgot to script.
#[derive(Default)]
pub struct MockRemote {
    pub calls: Mutex<Vec<String>>,
    login_results: Mutex<VecDeque<Result<AuthPayload, RemoteError>>>,
    signup_results: Mutex<VecDeque<Result<AuthPayload, RemoteError>>>,
    me_results: Mutex<VecDeque<Result<User, RemoteError>>>,
    user_results: Mutex<VecDeque<Result<User, RemoteError>>>,
    update_results: Mutex<VecDeque<Result<User, RemoteError>>>,
    follow_results: Mutex<VecDeque<Result<User, RemoteError>>>,
    posts_results: Mutex<VecDeque<Result<Vec<Post>, RemoteError>>>,
    post_results: Mutex<VecDeque<Result<Post, RemoteError>>>,
    create_results: Mutex<VecDeque<Result<Post, RemoteError>>>,
    delete_results: Mutex<VecDeque<Result<(), RemoteError>>>,
    like_results: Mutex<VecDeque<Result<Post, RemoteError>>>,
    comments_results: Mutex<VecDeque<Result<Vec<Comment>, RemoteError>>>,
    add_comment_results: Mutex<VecDeque<Result<Comment, RemoteError>>>,
    like_comment_results: Mutex<VecDeque<Result<Comment, RemoteError>>>,
    communities_results: Mutex<VecDeque<Result<Vec<Community>, RemoteError>>>,
    join_results: Mutex<VecDeque<Result<Community, RemoteError>>>,
    conversations_results: Mutex<VecDeque<Result<Vec<Conversation>, RemoteError>>>,
    messages_results: Mutex<VecDeque<Result<Vec<ChatMessage>, RemoteError>>>,
    send_results: Mutex<VecDeque<Result<ChatMessage, RemoteError>>>,
}

fn unscripted<T>(op: &str) -> Result<T, RemoteError> {
    Err(RemoteError::server(format!("unscripted call: {op}")))
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_login(&self, result: Result<AuthPayload, RemoteError>) {
        self.login_results.lock().unwrap().push_back(result);
    }

    pub fn script_signup(&self, result: Result<AuthPayload, RemoteError>) {
        self.signup_results.lock().unwrap().push_back(result);
    }

    pub fn script_me(&self, result: Result<User, RemoteError>) {
        self.me_results.lock().unwrap().push_back(result);
    }

    pub fn script_user(&self, result: Result<User, RemoteError>) {
        self.user_results.lock().unwrap().push_back(result);
    }

    pub fn script_update(&self, result: Result<User, RemoteError>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    pub fn script_follow(&self, result: Result<User, RemoteError>) {
        self.follow_results.lock().unwrap().push_back(result);
    }

    pub fn script_posts(&self, result: Result<Vec<Post>, RemoteError>) {
        self.posts_results.lock().unwrap().push_back(result);
    }

    pub fn script_post(&self, result: Result<Post, RemoteError>) {
        self.post_results.lock().unwrap().push_back(result);
    }

    pub fn script_create(&self, result: Result<Post, RemoteError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn script_delete(&self, result: Result<(), RemoteError>) {
        self.delete_results.lock().unwrap().push_back(result);
    }

    pub fn script_like(&self, result: Result<Post, RemoteError>) {
        self.like_results.lock().unwrap().push_back(result);
    }

    pub fn script_comments(&self, result: Result<Vec<Comment>, RemoteError>) {
        self.comments_results.lock().unwrap().push_back(result);
    }

    pub fn script_add_comment(&self, result: Result<Comment, RemoteError>) {
        self.add_comment_results.lock().unwrap().push_back(result);
    }

    pub fn script_like_comment(&self, result: Result<Comment, RemoteError>) {
        self.like_comment_results.lock().unwrap().push_back(result);
    }

    pub fn script_communities(&self, result: Result<Vec<Community>, RemoteError>) {
        self.communities_results.lock().unwrap().push_back(result);
    }

    pub fn script_join(&self, result: Result<Community, RemoteError>) {
        self.join_results.lock().unwrap().push_back(result);
    }

    pub fn script_conversations(&self, result: Result<Vec<Conversation>, RemoteError>) {
        self.conversations_results.lock().unwrap().push_back(result);
    }

    pub fn script_messages(&self, result: Result<Vec<ChatMessage>, RemoteError>) {
        self.messages_results.lock().unwrap().push_back(result);
    }

    pub fn script_send(&self, result: Result<ChatMessage, RemoteError>) {
        self.send_results.lock().unwrap().push_back(result);
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == op)
            .count()
    }

    fn record(&self, op: &str) {
        self.calls.lock().unwrap().push(op.to_string());
    }

    /// Pop the next scripted result. Yields to the scheduler first so the
    /// call has a real suspension point, like a network exchange does;
    /// concurrent watchers get to observe the transitional state.
    async fn pop<T>(
        &self,
        op: &str,
        queue: &Mutex<VecDeque<Result<T, RemoteError>>>,
    ) -> Result<T, RemoteError> {
        tokio::task::yield_now().await;
        self.record(op);
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| unscripted(op))
    }
}

#[async_trait]
impl RemoteApi for MockRemote {
    async fn login(&self, _req: LoginRequest) -> Result<AuthPayload, RemoteError> {
        self.pop("login", &self.login_results).await
    }

    async fn signup(&self, _req: SignupRequest) -> Result<AuthPayload, RemoteError> {
        self.pop("signup", &self.signup_results).await
    }

    async fn get_me(&self) -> Result<User, RemoteError> {
        self.pop("get_me", &self.me_results).await
    }

    async fn get_user(&self, _user_id: &str) -> Result<User, RemoteError> {
        self.pop("get_user", &self.user_results).await
    }

    async fn update_profile(&self, _patch: ProfilePatch) -> Result<User, RemoteError> {
        self.pop("update_profile", &self.update_results).await
    }

    async fn toggle_follow(&self, _user_id: &str) -> Result<User, RemoteError> {
        self.pop("toggle_follow", &self.follow_results).await
    }

    async fn get_posts(&self, _query: FeedQuery) -> Result<Vec<Post>, RemoteError> {
        self.pop("get_posts", &self.posts_results).await
    }

    async fn get_post(&self, _post_id: &str) -> Result<Post, RemoteError> {
        self.pop("get_post", &self.post_results).await
    }

    async fn create_post(&self, _draft: NewPost) -> Result<Post, RemoteError> {
        self.pop("create_post", &self.create_results).await
    }

    async fn delete_post(&self, _post_id: &str) -> Result<(), RemoteError> {
        self.pop("delete_post", &self.delete_results).await
    }

    async fn like_post(&self, _post_id: &str) -> Result<Post, RemoteError> {
        self.pop("like_post", &self.like_results).await
    }

    async fn get_comments(&self, _post_id: &str) -> Result<Vec<Comment>, RemoteError> {
        self.pop("get_comments", &self.comments_results).await
    }

    async fn add_comment(&self, _post_id: &str, _body: &str) -> Result<Comment, RemoteError> {
        self.pop("add_comment", &self.add_comment_results).await
    }

    async fn like_comment(&self, _comment_id: &str) -> Result<Comment, RemoteError> {
        self.pop("like_comment", &self.like_comment_results).await
    }

    async fn get_communities(&self) -> Result<Vec<Community>, RemoteError> {
        self.pop("get_communities", &self.communities_results).await
    }

    async fn join_community(&self, _community_id: &str) -> Result<Community, RemoteError> {
        self.pop("join_community", &self.join_results).await
    }

    async fn get_conversations(&self) -> Result<Vec<Conversation>, RemoteError> {
        self.pop("get_conversations", &self.conversations_results)
            .await
    }

    async fn get_messages(&self, _conversation_id: &str) -> Result<Vec<ChatMessage>, RemoteError> {
        self.pop("get_messages", &self.messages_results).await
    }

    async fn send_message(
        &self,
        _conversation_id: &str,
        _body: &str,
    ) -> Result<ChatMessage, RemoteError> {
        self.pop("send_message", &self.send_results).await
    }
}

pub fn sample_user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: None,
        bio: None,
        avatar_url: None,
        follower_count: 0,
        following_count: 0,
        followed: false,
    }
}

pub fn sample_post(id: &str, body: &str) -> Post {
    Post {
        id: id.to_string(),
        author: sample_user("u1", "ada"),
        body: body.to_string(),
        image_url: None,
        community_id: None,
        like_count: 0,
        comment_count: 0,
        liked: false,
        created_at: Utc::now(),
    }
}

pub fn sample_comment(id: &str, body: &str) -> Comment {
    Comment {
        id: id.to_string(),
        post_id: "p1".to_string(),
        author: sample_user("u1", "ada"),
        body: body.to_string(),
        like_count: 0,
        liked: false,
        created_at: Utc::now(),
    }
}

pub fn sample_community(id: &str, name: &str) -> Community {
    Community {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        member_count: 1,
        joined: false,
    }
}

pub fn sample_message(id: &str, body: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        conversation_id: "c1".to_string(),
        sender_id: "u1".to_string(),
        body: body.to_string(),
        sent_at: Utc::now(),
    }
}

pub fn sample_conversation(id: &str, peer: User) -> Conversation {
    Conversation {
        id: id.to_string(),
        peer,
        last_message: None,
        unread_count: 0,
    }
}
