//! Route gating for identity-dependent routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` is the only gated route. Its outcome is computed once from the
//! current [`AuthState`] and then rendered; there is no other guard layer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Where unauthenticated visitors of a gated route are sent.
pub const LOGIN_PATH: &str = "/login";

/// Exactly one of these is rendered for `/dashboard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardGate {
    /// Not signed in: redirect to [`LOGIN_PATH`].
    Redirect,
    /// Signed in as an admin: the publishing console.
    RenderAdmin,
    /// Signed in as anyone else: the profile page.
    RenderUser,
}

impl DashboardGate {
    /// Pure function of the session. The shell never routes while the startup
    /// check is loading, and a loading state has no user, so it redirects.
    pub fn resolve(auth: &AuthState) -> Self {
        match auth.user() {
            None => Self::Redirect,
            Some(user) if user.is_admin() => Self::RenderAdmin,
            Some(_) => Self::RenderUser,
        }
    }
}
