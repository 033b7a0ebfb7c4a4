//! Controller lifecycle scopes.
//!
//! Each controller owns a [`ControllerScope`] created at screen enter and
//! torn down at screen exit. Work spawned through the scope races against
//! its cancellation token: once the scope shuts down, in-flight fetches
//! are abandoned and their eventual completion is discarded rather than
//! emitted into a cell nobody is watching. The wire request itself is not
//! interrupted mid-flight.

use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct ControllerScope {
    token: CancellationToken,
}

impl Default for ControllerScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Run `task` until completion or scope shutdown, whichever first.
    pub fn spawn<F>(&self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = task => {}
            }
        });
    }

    /// Tear the scope down, abandoning everything it spawned.
    pub fn shut_down(&self) {
        self.token.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ControllerScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
