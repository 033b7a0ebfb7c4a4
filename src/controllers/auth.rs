//! Login, signup, and session teardown.

use std::sync::Arc;

use remote::types::{LoginRequest, SignupRequest};
use remote::{CredentialStore, RemoteApi, ACCESS_TOKEN_KEY};
use tracing::info;

use crate::container::StateCell;
use crate::controller::run_fetch;
use crate::scope::ControllerScope;
use crate::state::RequestState;

/// Controller behind the login and signup screens.
///
/// The session cell carries no payload; `Success(())` means "signed in,
/// token stored". The token write happens before the terminal emission,
/// so a subscriber reacting to `Success` can immediately issue
/// authenticated calls. A failed attempt leaves the store untouched.
pub struct AuthController {
    remote: Arc<dyn RemoteApi>,
    credentials: Arc<CredentialStore>,
    session: StateCell<()>,
    scope: ControllerScope,
}

impl AuthController {
    pub fn new(remote: Arc<dyn RemoteApi>, credentials: Arc<CredentialStore>) -> Self {
        Self {
            remote,
            credentials,
            session: StateCell::new(),
            scope: ControllerScope::new(),
        }
    }

    pub fn session(&self) -> &StateCell<()> {
        &self.session
    }

    pub fn scope(&self) -> &ControllerScope {
        &self.scope
    }

    /// Skip the login screen when a token survived from a previous run.
    pub fn restore_session(&self) {
        if self.credentials.token().is_some() {
            info!("restoring previous session from stored credential");
            self.session.emit(RequestState::Success(()));
        }
    }

    pub async fn log_in(&self, email: &str, password: &str) {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let remote = Arc::clone(&self.remote);
        let credentials = Arc::clone(&self.credentials);
        run_fetch(&self.session, false, async move {
            let payload = remote.login(request).await?;
            credentials.set(ACCESS_TOKEN_KEY, &payload.token);
            Ok(())
        })
        .await;
    }

    pub async fn sign_up(&self, username: &str, email: &str, password: &str) {
        let request = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let remote = Arc::clone(&self.remote);
        let credentials = Arc::clone(&self.credentials);
        run_fetch(&self.session, false, async move {
            let payload = remote.signup(request).await?;
            credentials.set(ACCESS_TOKEN_KEY, &payload.token);
            Ok(())
        })
        .await;
    }

    /// Drop the credential and reset the session to `Idle`. Purely local;
    /// the backend keeps no session state worth revoking.
    pub fn log_out(&self) {
        self.credentials.remove(ACCESS_TOKEN_KEY);
        self.session.emit(RequestState::Idle);
        info!("signed out");
    }
}
