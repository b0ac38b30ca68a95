use std::cell::Cell;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::types::Role;

// =============================================================
// Helpers
// =============================================================

fn make_user(role: Role) -> User {
    User {
        id: 1,
        username: "zhang".to_owned(),
        email: "zhang@medcore.com".to_owned(),
        role,
    }
}

struct FakeSession {
    me: Result<Option<User>, ApiError>,
    logout: Result<(), ApiError>,
    logout_calls: Cell<u32>,
}

impl FakeSession {
    fn new(me: Result<Option<User>, ApiError>, logout: Result<(), ApiError>) -> Self {
        Self { me, logout, logout_calls: Cell::new(0) }
    }
}

impl SessionApi for FakeSession {
    async fn current_user(&self) -> Result<Option<User>, ApiError> {
        self.me.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout.clone()
    }
}

fn assert_consistent(state: &AuthState) {
    assert_eq!(state.is_authenticated(), state.user().is_some());
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn checking_is_loading_without_user() {
    let state = AuthState::checking();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert_consistent(&state);
}

#[test]
fn signed_in_is_authenticated_and_settled() {
    let state = AuthState::signed_in(make_user(Role::User));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_consistent(&state);
}

#[test]
fn signed_out_is_settled_without_user() {
    let state = AuthState::signed_out();
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert_consistent(&state);
}

#[test]
fn session_check_outcomes_are_consistent() {
    let outcomes = [
        Ok(Some(make_user(Role::Admin))),
        Ok(None),
        Err(ApiError::Rejected { message: None }),
        Err(ApiError::Transport("offline".to_owned())),
    ];
    for outcome in outcomes {
        let state = AuthState::from_session_check(outcome);
        assert!(!state.is_loading());
        assert_consistent(&state);
    }
}

// =============================================================
// Startup check
// =============================================================

#[test]
fn check_session_with_user_signs_in() {
    let api = FakeSession::new(Ok(Some(make_user(Role::Admin))), Ok(()));
    let state = block_on(check_session(&api));
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("zhang"));
}

#[test]
fn check_session_rejected_is_signed_out() {
    let api = FakeSession::new(Err(ApiError::Rejected { message: None }), Ok(()));
    assert_eq!(block_on(check_session(&api)), AuthState::signed_out());
}

#[test]
fn check_session_transport_failure_is_signed_out() {
    let api = FakeSession::new(Err(ApiError::Transport("refused".to_owned())), Ok(()));
    assert_eq!(block_on(check_session(&api)), AuthState::signed_out());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn sign_out_calls_server_once() {
    let api = FakeSession::new(Ok(None), Ok(()));
    let state = block_on(sign_out(&api));
    assert_eq!(api.logout_calls.get(), 1);
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn sign_out_clears_state_when_server_fails() {
    let api = FakeSession::new(Ok(None), Err(ApiError::Transport("timeout".to_owned())));
    assert_eq!(block_on(sign_out(&api)), AuthState::signed_out());
}

#[test]
fn sign_out_clears_state_when_server_rejects() {
    let api = FakeSession::new(Ok(None), Err(ApiError::Rejected { message: Some("未登录".to_owned()) }));
    assert_eq!(block_on(sign_out(&api)), AuthState::signed_out());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_loading_then_login_and_logout_settle() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        assert!(store.is_loading());
        assert_eq!(store.user(), None);

        store.login(make_user(Role::Admin));
        assert!(!store.is_loading());
        assert_eq!(store.user(), Some(make_user(Role::Admin)));
        assert!(store.with(AuthState::is_authenticated));

        store.logout();
        assert_eq!(store.with(Clone::clone), AuthState::signed_out());
        assert_eq!(store.user(), None);
    });
}
