//! Fallback for unmatched paths.

use leptos::prelude::*;

pub const NOT_FOUND: &str = "页面不存在";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2 class="not-found__title">"404"</h2>
            <p class="not-found__message">{NOT_FOUND}</p>
            <a class="not-found__home" href="/">"返回首页"</a>
        </div>
    }
}
