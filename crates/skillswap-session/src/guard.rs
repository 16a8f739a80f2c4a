//! Admission rule and per-navigation state machine.
//!
//! Both the server and the client guard decide through [`decide`]. The
//! rule fails closed: only a successful auth check naming a user admits.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use skillswap_client::GatewayError;
use skillswap_core::{AuthResponse, NavigationId, UserId};

use crate::checker::SessionChecker;

/// The authenticated user as seen by guarded views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    /// The user's ID.
    pub id: UserId,
}

/// Context handed to a guarded view once admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    /// The authenticated user.
    pub user: SessionUser,
}

impl SessionContext {
    /// Context for `id`.
    #[must_use]
    pub const fn for_user(id: UserId) -> Self {
        Self {
            user: SessionUser { id },
        }
    }
}

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Render the view with this context.
    Admit(SessionContext),
    /// Send the visitor to this path instead.
    Redirect(String),
}

impl Admission {
    /// The admitted context, if any.
    #[must_use]
    pub const fn context(&self) -> Option<&SessionContext> {
        match self {
            Self::Admit(ctx) => Some(ctx),
            Self::Redirect(_) => None,
        }
    }

    /// Returns `true` for `Admit`.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Admit(_))
    }
}

/// Apply the admission rule to an auth-check outcome.
///
/// Admits only `Ok` with `success: true` and a `user_id`. Everything else
/// redirects to `login_path`, including HTTP 200 with `success: false`.
#[must_use]
pub fn decide(outcome: Result<AuthResponse, GatewayError>, login_path: &str) -> Admission {
    match outcome {
        Ok(auth) => {
            if let Some(id) = auth.authenticated_user() {
                return Admission::Admit(SessionContext::for_user(id));
            }
            tracing::debug!(
                success = auth.success,
                message = ?auth.message,
                "Auth check did not prove a session"
            );
        }
        Err(err) => {
            tracing::warn!(kind = %err.kind(), error = %err, "Auth check failed");
        }
    }

    Admission::Redirect(login_path.to_string())
}

/// Guard using `checker`.
///
/// Without a credential this redirects immediately and makes no call.
pub async fn evaluate(checker: &dyn SessionChecker, login_path: &str) -> Admission {
    if !checker.has_credential() {
        tracing::debug!("No session credential");
        return Admission::Redirect(login_path.to_string());
    }

    decide(checker.check().await, login_path)
}

/// Where a navigation stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardPhase {
    /// The path is public; no check applies.
    Unguarded,
    /// Protected path, check not started.
    Unchecked,
    /// Waiting on the auth check.
    Checking,
    /// Admitted with this context.
    Admitted(SessionContext),
    /// Redirected to this path.
    Redirected(String),
}

impl GuardPhase {
    /// Short phase name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unguarded => "unguarded",
            Self::Unchecked => "unchecked",
            Self::Checking => "checking",
            Self::Admitted(_) => "admitted",
            Self::Redirected(_) => "redirected",
        }
    }

    /// Returns `true` once no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Unguarded | Self::Admitted(_) | Self::Redirected(_)
        )
    }
}

impl fmt::Display for GuardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Illegal navigation transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {action} a navigation in phase {from}")]
pub struct PhaseError {
    /// Phase the navigation was in.
    pub from: &'static str,
    /// Attempted transition.
    pub action: &'static str,
}

/// One navigation attempt and its guard phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    id: NavigationId,
    path: String,
    phase: GuardPhase,
}

impl Navigation {
    /// A navigation to a public path.
    #[must_use]
    pub fn unguarded(path: impl Into<String>) -> Self {
        Self::starting(path, GuardPhase::Unguarded)
    }

    /// A navigation to a protected path, not yet checked.
    #[must_use]
    pub fn protected(path: impl Into<String>) -> Self {
        Self::starting(path, GuardPhase::Unchecked)
    }

    fn starting(path: impl Into<String>, phase: GuardPhase) -> Self {
        Self {
            id: NavigationId::generate(),
            path: path.into(),
            phase,
        }
    }

    /// Navigation identity.
    #[must_use]
    pub const fn id(&self) -> NavigationId {
        self.id
    }

    /// Target path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &GuardPhase {
        &self.phase
    }

    /// `Unchecked` to `Checking`.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError` from any other phase.
    pub fn begin_check(&mut self) -> Result<(), PhaseError> {
        match self.phase {
            GuardPhase::Unchecked => {
                self.phase = GuardPhase::Checking;
                Ok(())
            }
            _ => Err(self.illegal("begin checking")),
        }
    }

    /// `Checking` to `Admitted` or `Redirected`.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError` from any other phase.
    pub fn resolve(&mut self, admission: Admission) -> Result<(), PhaseError> {
        if self.phase != GuardPhase::Checking {
            return Err(self.illegal("resolve"));
        }

        self.phase = match admission {
            Admission::Admit(ctx) => GuardPhase::Admitted(ctx),
            Admission::Redirect(target) => GuardPhase::Redirected(target),
        };
        Ok(())
    }

    /// The redirect target, once redirected.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.phase {
            GuardPhase::Redirected(target) => Some(target),
            _ => None,
        }
    }

    /// The admitted context, once admitted.
    #[must_use]
    pub const fn context(&self) -> Option<&SessionContext> {
        match &self.phase {
            GuardPhase::Admitted(ctx) => Some(ctx),
            _ => None,
        }
    }

    /// Returns `true` if the view may render.
    #[must_use]
    pub const fn may_render(&self) -> bool {
        matches!(
            self.phase,
            GuardPhase::Unguarded | GuardPhase::Admitted(_)
        )
    }

    const fn illegal(&self, action: &'static str) -> PhaseError {
        PhaseError {
            from: self.phase.name(),
            action,
        }
    }
}
