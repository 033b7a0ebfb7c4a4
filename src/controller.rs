//! The fetch contract shared by every controller.
//!
//! All load paths run through [`run_fetch`], all item-level actions
//! through [`run_item_action`]; the controllers in
//! [`controllers`](crate::controllers) only decide which remote call to
//! issue and how to fold its result into their collections.

use std::future::Future;

use remote::RemoteError;
use tracing::debug;

use crate::container::{ErrorSignal, StateCell};
use crate::state::{ErrorInfo, RequestState};

/// Drive one fetch through its full lifecycle.
///
/// Emits the transitional `Loading` state first: `refreshing` is only set
/// when the caller asked for a refresh *and* the cell currently holds a
/// `Success` (a refresh implies there is something to refresh; from `Idle`
/// or `Failure` the same call is a first load). The awaited future is the
/// only suspension point. The terminal emission is `Success` on `Ok` and
/// `Failure` with the classified [`ErrorInfo`] on `Err`; errors never
/// propagate past this function and there is no automatic retry.
///
/// Overlapping calls on the same cell are neither coalesced nor
/// cancelled: each runs its own lifecycle and the cell reflects whichever
/// terminal state landed last, in network-completion order.
pub async fn run_fetch<T, Fut>(cell: &StateCell<T>, refresh: bool, fetch: Fut)
where
    T: Clone,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let refreshing = refresh && cell.current().is_success();
    cell.emit(RequestState::Loading { refreshing });

    match fetch.await {
        Ok(data) => cell.emit(RequestState::Success(data)),
        Err(err) => {
            debug!("fetch failed: {err}");
            cell.emit(RequestState::Failure(ErrorInfo::from(err)));
        }
    }
}

/// Patch the collection held by the current `Success` and re-emit it.
///
/// Returns `false` without emitting when the cell is not in `Success`;
/// item actions are only meaningful over already-rendered content.
pub fn patch_success<T, F>(cell: &StateCell<T>, patch: F) -> bool
where
    T: Clone,
    F: FnOnce(&mut T),
{
    match cell.current() {
        RequestState::Success(mut data) => {
            patch(&mut data);
            cell.emit(RequestState::Success(data));
            true
        }
        _ => false,
    }
}

/// Drive one item-level action (like, follow, delete, join).
///
/// On success the result is folded into the cell's `Success` data via
/// `apply` and re-emitted, with no `Loading` transition. On failure the
/// cell is left untouched and the error is raised on the ancillary
/// [`ErrorSignal`] instead, so a failed action never blanks a rendered
/// list.
pub async fn run_item_action<T, R, Fut, F>(
    cell: &StateCell<T>,
    errors: &ErrorSignal,
    action: Fut,
    apply: F,
) where
    T: Clone,
    Fut: Future<Output = Result<R, RemoteError>>,
    F: FnOnce(&mut T, R),
{
    match action.await {
        Ok(result) => {
            patch_success(cell, |data| apply(data, result));
        }
        Err(err) => {
            debug!("item action failed: {err}");
            errors.raise(ErrorInfo::from(err));
        }
    }
}
