//! Top navigation bar: brand, category links, and the user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session for the user menu and the `cat` query parameter for the
//! active category indicator. Logout is delegated to the session store.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config::NAV_CATEGORIES;
use crate::net::types::{Role, User};
use crate::state::auth::SessionStore;

/// Link target for a category; the empty id is the home listing.
pub fn category_href(id: &str) -> String {
    if id.is_empty() { "/".to_owned() } else { format!("/?cat={id}") }
}

/// Label of the dashboard link for a signed-in user.
pub fn dashboard_label(user: &User) -> &'static str {
    match user.role {
        Role::Admin => "管理控制台",
        Role::User => "个人中心",
    }
}

#[component]
pub fn Navbar(session: SessionStore) -> impl IntoView {
    let query = use_query_map();
    let current_cat = Memo::new(move |_| query.with(|q| q.get("cat").unwrap_or_default()));

    let links = NAV_CATEGORIES
        .iter()
        .map(|cat| {
            let id = cat.id;
            let active = move || current_cat.get() == id;
            view! {
                <a class="navbar__link" class:navbar__link--active=active href=category_href(id)>
                    {cat.name}
                    <Show when=active>
                        <span class="navbar__indicator"></span>
                    </Show>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"⚕"</span>
                    <span class="navbar__title">"MedCore 医核心"</span>
                </a>
                <div class="navbar__categories">{links}</div>
                <div class="navbar__user">
                    {move || match session.user() {
                        Some(user) => {
                            view! {
                                <a href="/dashboard" class="navbar__dashboard">
                                    {dashboard_label(&user)}
                                </a>
                                <span class="navbar__username">{user.username.clone()}</span>
                                <button
                                    class="navbar__logout"
                                    title="退出登录"
                                    on:click=move |_| session.logout()
                                >
                                    "⎋"
                                </button>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <a href="/login" class="navbar__login">"登录"</a>
                                <a href="/register" class="navbar__register">"注册"</a>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
