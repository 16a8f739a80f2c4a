//! Process-wide authentication state.
//!
//! [`AuthStore`] holds the derived [`AuthState`] and at most one pending
//! auth check. Concurrent navigations join the pending check instead of
//! issuing their own. Every write bumps an epoch so a check that was
//! superseded by a login or logout cannot overwrite the newer state.

use std::sync::{Arc, Weak};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use serde::Serialize;

use skillswap_core::UserId;

use crate::guard::Admission;

/// Snapshot of the session as seen by guarded views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuthState {
    /// Whether the last settled check or login proved a session.
    pub is_authenticated: bool,
    /// The authenticated user.
    pub user_id: Option<UserId>,
    /// Whether an auth check is in flight.
    pub loading: bool,
}

impl AuthState {
    fn settled(user: Option<UserId>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user_id: user,
            loading: false,
        }
    }
}

/// An auth check any number of navigations can await.
pub(crate) type SharedCheck = Shared<BoxFuture<'static, Admission>>;

#[derive(Default)]
struct Inner {
    state: AuthState,
    epoch: u64,
    pending: Option<SharedCheck>,
}

/// Shared holder of [`AuthState`].
///
/// Cloning is cheap; clones observe and update the same state.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Arc<Mutex<Inner>>,
}

impl AuthStore {
    /// Create a store in the initial, unauthenticated state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.inner.lock().state
    }

    /// Join the pending check, or start one with `start`.
    ///
    /// `start` is only called when no check is pending. The returned future
    /// settles the state when it completes unless a login or logout has
    /// happened since it started.
    pub(crate) fn check_shared<F>(&self, start: F) -> SharedCheck
    where
        F: FnOnce() -> BoxFuture<'static, Admission>,
    {
        let mut inner = self.inner.lock();
        if let Some(pending) = &inner.pending {
            tracing::debug!("Joining pending auth check");
            return pending.clone();
        }

        inner.epoch += 1;
        let epoch = inner.epoch;
        let weak = Arc::downgrade(&self.inner);
        let check = start();

        let shared = async move {
            let admission = check.await;
            settle(&weak, epoch, &admission);
            admission
        }
        .boxed()
        .shared();

        inner.pending = Some(shared.clone());
        inner.state.loading = true;
        shared
    }

    /// Record a completed login or registration.
    pub(crate) fn record_login(&self, user: UserId) {
        self.replace(AuthState::settled(Some(user)));
    }

    /// Record a completed logout.
    pub(crate) fn record_logout(&self) {
        self.replace(AuthState::settled(None));
    }

    fn replace(&self, state: AuthState) {
        let mut inner = self.inner.lock();
        inner.epoch += 1;
        inner.pending = None;
        inner.state = state;
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("AuthStore")
            .field("state", &inner.state)
            .field("epoch", &inner.epoch)
            .finish_non_exhaustive()
    }
}

fn settle(inner: &Weak<Mutex<Inner>>, epoch: u64, admission: &Admission) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = inner.lock();

    if inner.epoch != epoch {
        tracing::debug!(epoch, current = inner.epoch, "Discarding superseded auth check");
        return;
    }

    inner.pending = None;
    inner.state = AuthState::settled(admission.context().map(|ctx| ctx.user.id));
}
