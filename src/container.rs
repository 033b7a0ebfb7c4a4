//! State fan-out primitives.
//!
//! [`StateCell`] is the single-writer broadcast slot behind every screen
//! state: the owning controller emits, any number of watchers read. It is
//! built on `tokio::sync::watch`, which gives exactly the semantics the
//! screens need: the latest value is replayed immediately to a new
//! subscriber (a screen created after a fetch started still sees
//! `Loading`, not a gap), watchers never block one another, and a slow
//! watcher observes the most recent value rather than a backlog.
//!
//! [`ErrorSignal`] is the ancillary channel item-level actions report
//! through, so a failed "like" never blanks an already-rendered list.

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::state::{ErrorInfo, RequestState};

/// Single-writer broadcast container for one screen concern.
///
/// Cloning a `StateCell` clones the *write* handle; it exists so a
/// controller can move the cell into a spawned task. Subscribers get
/// [`StateWatcher`] read handles and cannot emit.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: std::sync::Arc<watch::Sender<RequestState<T>>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            tx: std::sync::Arc::clone(&self.tx),
        }
    }
}

impl<T> Default for StateCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateCell<T> {
    /// A fresh cell holding [`RequestState::Idle`].
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(RequestState::Idle);
        Self {
            tx: std::sync::Arc::new(tx),
        }
    }

    /// Replace the current value and wake every watcher.
    ///
    /// Emissions never fail: the value is stored even when no watcher is
    /// currently subscribed, so a later subscriber still replays it.
    pub fn emit(&self, next: RequestState<T>) {
        self.tx.send_replace(next);
    }

    /// Read handle replaying the latest value first.
    pub fn subscribe(&self) -> StateWatcher<T> {
        StateWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T: Clone> StateCell<T> {
    /// Synchronous snapshot of the latest emitted state.
    pub fn current(&self) -> RequestState<T> {
        self.tx.borrow().clone()
    }
}

/// Read handle onto a [`StateCell`]. Dropping it affects no other watcher.
#[derive(Debug)]
pub struct StateWatcher<T> {
    rx: watch::Receiver<RequestState<T>>,
}

impl<T: Clone> StateWatcher<T> {
    /// The latest value, replayed without waiting.
    pub fn latest(&self) -> RequestState<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next emission after the last one seen.
    /// Returns `false` once the owning cell is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl<T: Clone + Send + Sync + 'static> StateWatcher<T> {
    /// Adapt to a `Stream` for presentation layers that render from one:
    /// yields the current value immediately, then every change.
    pub fn into_stream(self) -> WatchStream<RequestState<T>> {
        WatchStream::new(self.rx)
    }
}

/// One-slot channel for errors raised by item-level actions.
///
/// An action failure is published with [`raise`](ErrorSignal::raise); the
/// presentation layer shows a transient notification and calls
/// [`acknowledge`](ErrorSignal::acknowledge), reverting the slot to empty.
/// The list state the action targeted is never touched.
#[derive(Debug, Clone)]
pub struct ErrorSignal {
    tx: std::sync::Arc<watch::Sender<Option<ErrorInfo>>>,
}

impl Default for ErrorSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx: std::sync::Arc::new(tx),
        }
    }

    pub fn raise(&self, err: ErrorInfo) {
        self.tx.send_replace(Some(err));
    }

    pub fn acknowledge(&self) {
        self.tx.send_replace(None);
    }

    pub fn current(&self) -> Option<ErrorInfo> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ErrorInfo>> {
        self.tx.subscribe()
    }
}
