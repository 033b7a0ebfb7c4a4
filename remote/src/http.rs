//! Reqwest-backed implementation of [`RemoteApi`].
//!
//! Every request passes through the authentication gate
//! ([`HttpApi::dispatch`]): the stored bearer token is injected when
//! present, `Accept`/`Content-Type` headers are pinned to JSON, and
//! failing responses have their message normalized by
//! [`normalize_error_message`] before they reach a controller. The status
//! code is never rewritten, only the message.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::client::RemoteApi;
use crate::credentials::{CredentialStore, ACCESS_TOKEN_KEY};
use crate::error::RemoteError;
use crate::types::{
    ApiEnvelope, AuthEnvelope, AuthPayload, ChatMessage, Comment, Community, Conversation,
    FeedQuery, LoginRequest, NewPost, Post, ProfilePatch, SignupRequest, User,
};

/// Upper bound on the authentication exchange. Exceeding it is treated
/// exactly like a transport failure.
const AUTH_TIMEOUT: Duration = Duration::from_secs(8);

pub struct HttpApi {
    http: reqwest::Client,
    base: Url,
    credentials: Arc<CredentialStore>,
    auth_timeout: Duration,
}

impl HttpApi {
    pub fn new(base: Url, credentials: Arc<CredentialStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
            credentials,
            auth_timeout: AUTH_TIMEOUT,
        }
    }

    /// Override the authentication timeout. Tests shorten it; production
    /// keeps the default.
    pub fn with_auth_timeout(mut self, timeout: Duration) -> Self {
        self.auth_timeout = timeout;
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        Ok(self.base.join(path)?)
    }

    /// Execute one exchange and return the raw body of a 2xx response.
    ///
    /// Non-2xx responses come back as [`RemoteError::Unauthorized`] for
    /// 401/403 and [`RemoteError::Server`] otherwise, with the message
    /// normalized from the body.
    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
        timeout: Option<Duration>,
    ) -> Result<String, RemoteError> {
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        if method != Method::GET {
            request = request.header(CONTENT_TYPE, "application/json");
        }
        // Absence of a token is not an error here: login and signup are
        // legal unauthenticated calls.
        if let Some(token) = self.credentials.get(ACCESS_TOKEN_KEY) {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(text);
        }

        let message = normalize_error_message(status, &text);
        debug!("{method} {url} failed: {status} {message}");
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(RemoteError::unauthorized(message))
        } else {
            Err(RemoteError::server(message))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let url = self.endpoint(path)?;
        self.get_json_url(url).await
    }

    async fn get_json_url<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        let text = self.dispatch(Method::GET, url, None, None).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;
        envelope.into_data()
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, RemoteError> {
        let url = self.endpoint(path)?;
        let body = body.map(serde_json::to_value).transpose()?;
        let text = self.dispatch(Method::POST, url, body, None).await?;
        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)?;
        envelope.into_data()
    }

    async fn delete_unit(&self, path: &str) -> Result<(), RemoteError> {
        let url = self.endpoint(path)?;
        let text = self.dispatch(Method::DELETE, url, None, None).await?;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(&text)?;
        envelope.into_unit()
    }

    async fn authenticate(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<AuthPayload, RemoteError> {
        let url = self.endpoint(path)?;
        let body = serde_json::to_value(body)?;
        let text = self
            .dispatch(Method::POST, url, Some(body), Some(self.auth_timeout))
            .await?;
        let envelope: AuthEnvelope = serde_json::from_str(&text)?;
        envelope.into_payload()
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn login(&self, req: LoginRequest) -> Result<AuthPayload, RemoteError> {
        self.authenticate("api/auth/login", &req).await
    }

    async fn signup(&self, req: SignupRequest) -> Result<AuthPayload, RemoteError> {
        self.authenticate("api/auth/signup", &req).await
    }

    async fn get_me(&self) -> Result<User, RemoteError> {
        self.get_json("api/users/me").await
    }

    async fn get_user(&self, user_id: &str) -> Result<User, RemoteError> {
        self.get_json(&format!("api/users/{user_id}")).await
    }

    async fn update_profile(&self, patch: ProfilePatch) -> Result<User, RemoteError> {
        self.post_json("api/users/me", Some(&patch)).await
    }

    async fn toggle_follow(&self, user_id: &str) -> Result<User, RemoteError> {
        self.post_json(&format!("api/users/{user_id}/follow"), None::<&()>)
            .await
    }

    async fn get_posts(&self, query: FeedQuery) -> Result<Vec<Post>, RemoteError> {
        let mut url = self.endpoint("api/posts")?;
        if query.community_id.is_some() || query.author_id.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(community) = &query.community_id {
                pairs.append_pair("community", community);
            }
            if let Some(author) = &query.author_id {
                pairs.append_pair("author", author);
            }
        }
        self.get_json_url(url).await
    }

    async fn get_post(&self, post_id: &str) -> Result<Post, RemoteError> {
        self.get_json(&format!("api/posts/{post_id}")).await
    }

    async fn create_post(&self, draft: NewPost) -> Result<Post, RemoteError> {
        self.post_json("api/posts", Some(&draft)).await
    }

    async fn delete_post(&self, post_id: &str) -> Result<(), RemoteError> {
        self.delete_unit(&format!("api/posts/{post_id}")).await
    }

    async fn like_post(&self, post_id: &str) -> Result<Post, RemoteError> {
        self.post_json(&format!("api/posts/{post_id}/like"), None::<&()>)
            .await
    }

    async fn get_comments(&self, post_id: &str) -> Result<Vec<Comment>, RemoteError> {
        self.get_json(&format!("api/posts/{post_id}/comments")).await
    }

    async fn add_comment(&self, post_id: &str, body: &str) -> Result<Comment, RemoteError> {
        self.post_json(
            &format!("api/posts/{post_id}/comments"),
            Some(&serde_json::json!({ "body": body })),
        )
        .await
    }

    async fn like_comment(&self, comment_id: &str) -> Result<Comment, RemoteError> {
        self.post_json(&format!("api/comments/{comment_id}/like"), None::<&()>)
            .await
    }

    async fn get_communities(&self) -> Result<Vec<Community>, RemoteError> {
        self.get_json("api/communities").await
    }

    async fn join_community(&self, community_id: &str) -> Result<Community, RemoteError> {
        self.post_json(&format!("api/communities/{community_id}/join"), None::<&()>)
            .await
    }

    async fn get_conversations(&self) -> Result<Vec<Conversation>, RemoteError> {
        self.get_json("api/chat/conversations").await
    }

    async fn get_messages(&self, conversation_id: &str) -> Result<Vec<ChatMessage>, RemoteError> {
        self.get_json(&format!("api/chat/conversations/{conversation_id}/messages"))
            .await
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        body: &str,
    ) -> Result<ChatMessage, RemoteError> {
        self.post_json(
            &format!("api/chat/conversations/{conversation_id}/messages"),
            Some(&serde_json::json!({ "body": body })),
        )
        .await
    }
}

/// Pull a human-readable message out of a failing response body.
///
/// The backend reports errors as a JSON object carrying an `error` field
/// (older endpoints use `err`). The body is parsed regardless of its
/// `Content-Type` parameters, so `application/json; charset=utf-8` works.
/// Anything that is not JSON, or JSON without a usable field, falls back
/// to the status's canonical reason phrase.
pub fn normalize_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "err", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
