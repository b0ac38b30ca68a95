//! Registration page: details form, then emailed-code form.
//!
//! The step logic lives in [`RegisterFlow`]; this page only binds inputs,
//! sends the requests the flow hands back, and feeds answers into it.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::config::VERIFY_CODE_LEN;
use crate::net::types::RegisterRequest;
use crate::state::register::{RegisterFlow, VerifyOutcome};

/// Where a verified account is sent.
pub const AFTER_VERIFY_PATH: &str = "/login";

/// Whether the code form stays locked after a verify answer: only while the
/// page is being replaced by the login page.
pub fn stays_busy(outcome: VerifyOutcome, navigation: Option<Result<(), String>>) -> bool {
    match (outcome, navigation) {
        (VerifyOutcome::GoToLogin, Some(Ok(()))) => true,
        (VerifyOutcome::GoToLogin, Some(Err(e))) => {
            leptos::logging::warn!("navigation to {AFTER_VERIFY_PATH} failed: {e}");
            false
        }
        (VerifyOutcome::GoToLogin, None) => {
            leptos::logging::warn!("navigation to {AFTER_VERIFY_PATH} failed: no window");
            false
        }
        (VerifyOutcome::Stay, _) => false,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let flow = RwSignal::new(RegisterFlow::default());
    let details = RwSignal::new(RegisterRequest::default());
    let code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let awaiting_details = Memo::new(move |_| flow.with(|f| f.pending_email().is_none()));

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mut request = None;
        flow.update(|f| request = f.begin_details(&details.get()));
        let Some(request) = request else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(&request).await;
            flow.update(|f| f.details_outcome(&request.email, result));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mut request = None;
        flow.update(|f| request = f.begin_verify(&code.get()));
        let Some(request) = request else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::verify(&request).await;
            let mut outcome = VerifyOutcome::Stay;
            flow.update(|f| outcome = f.verify_outcome(result));
            let navigation = (outcome == VerifyOutcome::GoToLogin).then(|| {
                web_sys::window().map(|window| {
                    window.location().set_href(AFTER_VERIFY_PATH).map_err(|e| format!("{e:?}"))
                })
            });
            if !stays_busy(outcome, navigation.flatten()) {
                busy.set(false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let details_form = move || {
        view! {
            <form class="auth-form" on:submit=on_register>
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="用户名"
                    required
                    prop:value=move || details.with(|d| d.username.clone())
                    on:input=move |ev| details.update(|d| d.username = event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="邮箱"
                    required
                    prop:value=move || details.with(|d| d.email.clone())
                    on:input=move |ev| details.update(|d| d.email = event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="密码"
                    required
                    prop:value=move || details.with(|d| d.password.clone())
                    on:input=move |ev| details.update(|d| d.password = event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="确认密码"
                    required
                    prop:value=move || details.with(|d| d.confirm.clone())
                    on:input=move |ev| details.update(|d| d.confirm = event_target_value(&ev))
                />
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    "获取验证码"
                </button>
            </form>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header auth-card__header--dark">
                    <h2>"注册新账户"</h2>
                    <p class="auth-card__subtitle">"加入 MedCore 专业社区"</p>
                </div>
                <div class="auth-card__body">
                    <Show when=move || flow.with(|f| f.notice().is_some())>
                        <div class="auth-form__notice">
                            {move || flow.with(|f| f.notice().unwrap_or_default().to_owned())}
                        </div>
                    </Show>
                    <Show when=move || awaiting_details.get() fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_verify>
                                <div class="auth-form__hint">
                                    "已发送至 "
                                    <strong>
                                        {move || flow.with(|f| f.pending_email().unwrap_or_default().to_owned())}
                                    </strong>
                                </div>
                                <input
                                    class="auth-form__input auth-form__input--code"
                                    type="text"
                                    inputmode="numeric"
                                    maxlength=VERIFY_CODE_LEN.to_string()
                                    placeholder="输入6位验证码"
                                    required
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                />
                                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                                    "完成注册"
                                </button>
                            </form>
                        }
                    }>
                        {details_form}
                    </Show>
                </div>
            </div>
        </div>
    }
}
