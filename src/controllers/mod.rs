//! Per-screen controllers.
//!
//! One controller per screen concern: it owns the screen's state cells,
//! an [`ErrorSignal`](crate::container::ErrorSignal) for item-level
//! actions, and a [`ControllerScope`](crate::scope::ControllerScope) tied
//! to the screen's lifetime. All of them share the same
//! `Arc<dyn RemoteApi>`; none of them let an error escape past the
//! state they publish.

pub mod auth;
pub mod chat;
pub mod community;
pub mod feed;
pub mod post;
pub mod profile;

pub use auth::AuthController;
pub use chat::{ChatController, ConversationController};
pub use community::CommunityController;
pub use feed::FeedController;
pub use post::PostController;
pub use profile::ProfileController;
