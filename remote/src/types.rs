//! Domain DTOs and the backend response envelope.
//!
//! The envelope shape `{success, error, data}` is dictated by the backend;
//! every response is wrapped in it. Authentication responses additionally
//! carry the bearer token as a sibling of `data`, see [`AuthEnvelope`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RemoteError;

/// The uniform response wrapper used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, surfacing `success == false` as a server error
    /// with the envelope's `error` field verbatim.
    pub fn into_data(self) -> Result<T, RemoteError> {
        if !self.success {
            return Err(RemoteError::server(
                self.error
                    .unwrap_or_else(|| "Request rejected by server".to_string()),
            ));
        }
        self.data.ok_or(RemoteError::EmptyEnvelope)
    }

    /// Like [`into_data`](Self::into_data) for endpoints whose success
    /// response carries no payload (delete and friends).
    pub fn into_unit(self) -> Result<(), RemoteError> {
        if !self.success {
            return Err(RemoteError::server(
                self.error
                    .unwrap_or_else(|| "Request rejected by server".to_string()),
            ));
        }
        Ok(())
    }
}

/// Login/signup response: the token rides next to `data`, not inside it.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthEnvelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub data: Option<User>,
}

impl AuthEnvelope {
    pub fn into_payload(self) -> Result<AuthPayload, RemoteError> {
        if !self.success {
            return Err(RemoteError::server(
                self.error
                    .unwrap_or_else(|| "Request rejected by server".to_string()),
            ));
        }
        let token = self.token.ok_or(RemoteError::EmptyEnvelope)?;
        Ok(AuthPayload {
            token,
            user: self.data,
        })
    }
}

/// A successful authentication: the bearer token plus the signed-in user
/// when the backend includes it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthPayload {
    pub token: String,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub following_count: u32,
    /// Whether the signed-in user follows this profile.
    #[serde(default)]
    pub followed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: User,
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub community_id: Option<String>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    /// Whether the signed-in user has liked this post.
    #[serde(default)]
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author: User,
    pub body: String,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member_count: u32,
    /// Whether the signed-in user is a member.
    #[serde(default)]
    pub joined: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub peer: User,
    #[serde(default)]
    pub last_message: Option<ChatMessage>,
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Draft of a new post. `client_ref` is generated client-side so a retried
/// submission can be deduplicated by the backend.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_id: Option<String>,
    pub client_ref: String,
}

impl NewPost {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            image_url: None,
            community_id: None,
            client_ref: Uuid::new_v4().to_string(),
        }
    }

    pub fn in_community(mut self, community_id: impl Into<String>) -> Self {
        self.community_id = Some(community_id.into());
        self
    }
}

/// Partial profile update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Filter for the post feed. Empty means the home feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub community_id: Option<String>,
    pub author_id: Option<String>,
}

impl FeedQuery {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn community(id: impl Into<String>) -> Self {
        Self {
            community_id: Some(id.into()),
            author_id: None,
        }
    }

    pub fn author(id: impl Into<String>) -> Self {
        Self {
            community_id: None,
            author_id: Some(id.into()),
        }
    }
}
