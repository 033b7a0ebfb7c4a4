//! Profile screens: the signed-in user's own, or another user's.

use std::sync::Arc;

use remote::types::{ProfilePatch, User};
use remote::RemoteApi;

use crate::container::{ErrorSignal, StateCell};
use crate::controller::{run_fetch, run_item_action};
use crate::scope::ControllerScope;

/// Whose profile this screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileTarget {
    Me,
    User(String),
}

pub struct ProfileController {
    remote: Arc<dyn RemoteApi>,
    target: ProfileTarget,
    profile: StateCell<User>,
    action_errors: ErrorSignal,
    scope: ControllerScope,
}

impl ProfileController {
    pub fn new(remote: Arc<dyn RemoteApi>, target: ProfileTarget) -> Self {
        Self {
            remote,
            target,
            profile: StateCell::new(),
            action_errors: ErrorSignal::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn profile(&self) -> &StateCell<User> {
        &self.profile
    }

    pub fn action_errors(&self) -> &ErrorSignal {
        &self.action_errors
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    pub async fn load(&self, refresh: bool) {
        let remote = Arc::clone(&self.remote);
        let target = self.target.clone();
        run_fetch(&self.profile, refresh, async move {
            match target {
                ProfileTarget::Me => remote.get_me().await,
                ProfileTarget::User(id) => remote.get_user(&id).await,
            }
        })
        .await;
    }

    /// Follow or unfollow the shown profile. Only meaningful for
    /// [`ProfileTarget::User`]; the rendered profile is patched with the
    /// server's new follow state and counters.
    pub async fn toggle_follow(&self) {
        let ProfileTarget::User(id) = &self.target else {
            return;
        };
        run_item_action(
            &self.profile,
            &self.action_errors,
            self.remote.toggle_follow(id),
            |profile, updated| *profile = updated,
        )
        .await;
    }

    /// Save edits to the signed-in user's own profile.
    pub async fn update(&self, patch: ProfilePatch) {
        run_item_action(
            &self.profile,
            &self.action_errors,
            self.remote.update_profile(patch),
            |profile, updated| *profile = updated,
        )
        .await;
    }
}
