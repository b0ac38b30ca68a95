//! Login page: email + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::auth::SessionStore;

pub const LOGIN_FAILED: &str = "登录失败";

/// Where a freshly signed-in user lands.
pub const AFTER_LOGIN_PATH: &str = "/dashboard";

pub fn login_failure_message(err: &ApiError) -> String {
    err.user_message(LOGIN_FAILED)
}

/// Build the request body; emails are trimmed, passwords sent as typed.
pub fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.trim().to_owned(),
        password: password.to_owned(),
    }
}

#[component]
pub fn LoginPage(session: SessionStore) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = login_request(&email.get(), &password.get());
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(user) => {
                        session.login(user);
                        navigate(AFTER_LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(login_failure_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h2>"账户登录"</h2>
                    <p class="auth-card__subtitle">"MedCore 专业医学资讯平台"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-form__error">{move || error.get()}</div>
                    </Show>
                    <label class="auth-form__label">
                        "邮箱地址"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "密码"
                        <input
                            class="auth-form__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        "立即登录"
                    </button>
                    <p class="auth-form__alt">
                        "还没有账号？ "
                        <a href="/register">"免费注册"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
