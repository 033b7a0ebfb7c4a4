//! Chat screens: the conversation list and a single open thread.

use std::sync::Arc;

use remote::types::{ChatMessage, Conversation};
use remote::RemoteApi;

use crate::container::{ErrorSignal, StateCell};
use crate::controller::{run_fetch, run_item_action};
use crate::scope::ControllerScope;

/// The conversation overview screen.
pub struct ChatController {
    remote: Arc<dyn RemoteApi>,
    conversations: StateCell<Vec<Conversation>>,
    scope: ControllerScope,
}

impl ChatController {
    pub fn new(remote: Arc<dyn RemoteApi>) -> Self {
        Self {
            remote,
            conversations: StateCell::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn conversations(&self) -> &StateCell<Vec<Conversation>> {
        &self.conversations
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    pub async fn load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        run_fetch(&self.conversations, refresh, async move {
            remote.get_conversations().await
        })
        .await;
    }

    pub fn spawn_load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let conversations = self.conversations.clone();
        self.scope.spawn(async move {
            run_fetch(&conversations, refresh, remote.get_conversations()).await;
        });
    }
}

/// One open thread: its message history plus sending.
pub struct ConversationController {
    remote: Arc<dyn RemoteApi>,
    conversation_id: String,
    messages: StateCell<Vec<ChatMessage>>,
    action_errors: ErrorSignal,
    scope: ControllerScope,
}

impl ConversationController {
    pub fn new(remote: Arc<dyn RemoteApi>, conversation_id: impl Into<String>) -> Self {
        Self {
            remote,
            conversation_id: conversation_id.into(),
            messages: StateCell::new(),
            action_errors: ErrorSignal::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn messages(&self) -> &StateCell<Vec<ChatMessage>> {
        &self.messages
    }

    pub fn action_errors(&self) -> &ErrorSignal {
        &self.action_errors
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    pub async fn load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let id = self.conversation_id.clone();
        run_fetch(&self.messages, refresh, async move {
            remote.get_messages(&id).await
        })
        .await;
    }

    /// Send one message; the acknowledged message (with its server id and
    /// timestamp) is appended to the rendered history. A send failure
    /// goes to the ancillary signal and the history stays intact.
    pub async fn send(&self, body: &str) {
        run_item_action(
            &self.messages,
            &self.action_errors,
            self.remote.send_message(&self.conversation_id, body),
            |messages, sent| messages.push(sent),
        )
        .await;
    }
}
