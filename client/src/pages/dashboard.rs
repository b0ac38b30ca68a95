//! Gated dashboard route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` renders differently per session: anonymous visitors are sent
//! to `/login`, admins get the publish console, everyone else the personal
//! centre. The decision is [`DashboardGate::resolve`]; this page only maps it
//! to views. The shell never routes while the session check is pending, so
//! the gate always sees a settled state here.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::pages::admin::AdminPublishPage;
use crate::pages::profile::ProfilePage;
use crate::state::auth::SessionStore;
use crate::util::auth::{DashboardGate, LOGIN_PATH};

#[component]
pub fn DashboardPage(session: SessionStore) -> impl IntoView {
    let gate = Memo::new(move |_| session.with(DashboardGate::resolve));

    move || match gate.get() {
        DashboardGate::Redirect => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
        DashboardGate::RenderAdmin => view! { <AdminPublishPage/> }.into_any(),
        DashboardGate::RenderUser => match session.user() {
            Some(user) => view! { <ProfilePage user/> }.into_any(),
            None => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
        },
    }
}
