//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is built by the app shell at startup and handed to
//! every component that needs identity (navigation bar, login page, gated
//! dashboard route). The shell withholds routed content until the startup
//! session check resolves.
//!
//! INVARIANTS
//! ==========
//! - Authenticated iff a user is present; [`AuthState`] derives one from the
//!   other so they cannot disagree.
//! - Loading is only ever true before the startup check resolves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    loading: bool,
}

impl AuthState {
    /// Startup state while the session check is in flight.
    pub fn checking() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Resolve the startup check. A failed check looks exactly like
    /// "not signed in".
    pub fn from_session_check(result: Result<Option<User>, ApiError>) -> Self {
        match result {
            Ok(Some(user)) => Self::signed_in(user),
            Ok(None) | Err(_) => Self::signed_out(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// The two server calls the session store depends on.
pub trait SessionApi {
    fn current_user(&self) -> impl Future<Output = Result<Option<User>, ApiError>>;
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
}

/// [`SessionApi`] backed by the REST client.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestSession;

impl SessionApi for RestSession {
    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        crate::net::api::fetch_current_user().await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        crate::net::api::logout().await
    }
}

/// Run the startup "who am I" check. No retry.
pub async fn check_session(api: &impl SessionApi) -> AuthState {
    let result = api.current_user().await;
    match &result {
        Ok(Some(user)) => leptos::logging::log!("session restored for {}", user.username),
        Ok(None) => leptos::logging::log!("no active session"),
        Err(e) => leptos::logging::log!("session check ended without a user: {e}"),
    }
    AuthState::from_session_check(result)
}

/// Ask the server to end the session, then sign out locally whatever it said.
pub async fn sign_out(api: &impl SessionApi) -> AuthState {
    if let Err(e) = api.logout().await {
        leptos::logging::warn!("server logout failed, clearing local session anyway: {e}");
    }
    AuthState::signed_out()
}

/// Reactive holder for the single [`AuthState`] of the page session.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::checking()) }
    }

    /// Borrow the current state, tracked.
    pub fn with<R>(&self, f: impl FnOnce(&AuthState) -> R) -> R {
        self.state.with(f)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    /// Issue the startup check against the server. Browser only; the server
    /// render stays in the loading state.
    pub fn start(&self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                state.set(check_session(&RestSession).await);
            });
        }
    }

    /// Trust a user returned by a successful credential login.
    pub fn login(&self, user: User) {
        self.state.set(AuthState::signed_in(user));
    }

    /// Fire-and-forget logout; local state always ends signed out.
    pub fn logout(&self) {
        let state = self.state;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            state.set(sign_out(&RestSession).await);
        });
        #[cfg(not(feature = "hydrate"))]
        state.set(AuthState::signed_out());
    }
}
