//! The community directory screen.

use std::sync::Arc;

use remote::types::Community;
use remote::RemoteApi;

use crate::container::{ErrorSignal, StateCell};
use crate::controller::{run_fetch, run_item_action};
use crate::scope::ControllerScope;

pub struct CommunityController {
    remote: Arc<dyn RemoteApi>,
    communities: StateCell<Vec<Community>>,
    action_errors: ErrorSignal,
    scope: ControllerScope,
}

impl CommunityController {
    pub fn new(remote: Arc<dyn RemoteApi>) -> Self {
        Self {
            remote,
            communities: StateCell::new(),
            action_errors: ErrorSignal::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn communities(&self) -> &StateCell<Vec<Community>> {
        &self.communities
    }

    pub fn action_errors(&self) -> &ErrorSignal {
        &self.action_errors
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    pub async fn load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        run_fetch(&self.communities, refresh, async move {
            remote.get_communities().await
        })
        .await;
    }

    /// Join or leave one community in place; membership flips only on a
    /// successful remote call.
    pub async fn join(&self, community_id: &str) {
        run_item_action(
            &self.communities,
            &self.action_errors,
            self.remote.join_community(community_id),
            |communities, updated: Community| {
                if let Some(slot) = communities.iter_mut().find(|c| c.id == updated.id) {
                    *slot = updated;
                }
            },
        )
        .await;
    }
}
