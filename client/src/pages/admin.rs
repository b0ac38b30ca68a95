//! Admin publish console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the dashboard for admin users. Submits title, body, category
//! and an optional attachment as one multipart request. The selected file is
//! a browser object, so it is held in local (non-`Send`) storage beside the
//! text draft and only exists in hydrated builds.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::config::publish_categories;
use crate::state::publish::{PublishDraft, PublishNotice};

/// Editor toolbar labels. Formatting is not wired up; the body is plain text.
pub const TOOLBAR: [&str; 8] = ["B", "I", "U", "H1", "List", "Link", "Image", "Quote"];

/// Sidebar entries; only publishing is implemented.
pub const SIDEBAR: [&str; 3] = ["发布文章", "用户管理", "系统设置"];

/// Notice classes for the result banner.
pub fn notice_class(notice: &PublishNotice) -> &'static str {
    if notice.is_success() { "publish__notice publish__notice--ok" } else { "publish__notice publish__notice--err" }
}

#[component]
pub fn AdminPublishPage() -> impl IntoView {
    let draft = RwSignal::new(PublishDraft::default());
    let notice = RwSignal::new(None::<PublishNotice>);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let selected_file = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = event_target::<web_sys::HtmlInputElement>(&ev).files().and_then(|files| files.get(0));
            draft.update(|d| d.attachment_name = file.as_ref().map(web_sys::File::name));
            selected_file.set_value(file);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft.get();
        if let Err(message) = current.validate() {
            notice.set(Some(PublishNotice::Failure(message.to_owned())));
            return;
        }
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let attachment = selected_file.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::publish_article(&current, attachment).await;
                let outcome = PublishNotice::from_result(&result);
                if outcome.is_success() {
                    draft.set(PublishDraft::default());
                    selected_file.set_value(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                } else {
                    leptos::logging::warn!("publish failed: {}", outcome.text());
                }
                notice.set(Some(outcome));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, file_input);
        }
    };

    view! {
        <div class="admin">
            <aside class="admin__sidebar">
                <h3 class="admin__brand">"管理控制台"</h3>
                <ul class="admin__menu">
                    {SIDEBAR
                        .iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let class = if i == 0 { "admin__menu-item admin__menu-item--active" } else { "admin__menu-item" };
                            view! { <li class=class>{*label}</li> }
                        })
                        .collect_view()}
                </ul>
            </aside>
            <section class="admin__main">
                <h2 class="admin__title">"发布新文章"</h2>
                {move || {
                    notice
                        .get()
                        .map(|n| view! { <div class=notice_class(&n)>{n.text().to_owned()}</div> })
                }}
                <form class="publish" on:submit=on_submit>
                    <label class="publish__label">
                        "文章标题"
                        <input
                            class="publish__input"
                            type="text"
                            required
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="publish__label">
                        "所属分类"
                        <select
                            class="publish__select"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        >
                            {publish_categories()
                                .map(|c| view! { <option value=c.id>{c.name}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="publish__editor">
                        <div class="publish__toolbar">
                            {TOOLBAR
                                .iter()
                                .map(|label| view! { <button class="publish__tool" type="button">{*label}</button> })
                                .collect_view()}
                        </div>
                        <textarea
                            class="publish__content"
                            rows="14"
                            required
                            prop:value=move || draft.with(|d| d.content.clone())
                            on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <label class="publish__label">
                        "附件"
                        <input
                            class="publish__file"
                            type="file"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                    </label>
                    {move || draft.with(PublishDraft::attachment_warning).map(|w| view! { <p class="publish__warning">{w}</p> })}
                    <button class="publish__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "发布中..." } else { "发布文章" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
