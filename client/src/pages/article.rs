//! Article detail page.
//!
//! The page spins until the article for the current id arrives. Unknown ids
//! and failed fetches keep spinning; there is no not-found state.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::spinner::Spinner;
use crate::net::api::attachment_url;
use crate::net::types::Article;
use crate::state::articles::DetailState;
use crate::util::text::format_datetime;

/// Badge text for articles without a category.
pub const GENERAL_BADGE: &str = "医学资讯";

pub fn author_label(article: &Article) -> String {
    match article.author_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("User {}", article.author_id),
    }
}

pub fn detail_badge(article: &Article) -> &str {
    if article.category.is_empty() { GENERAL_BADGE } else { &article.category }
}

/// Numeric id from the route segment; anything else never loads.
pub fn parse_article_id(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let article_id = Memo::new(move |_| params.with(|p| parse_article_id(p.get("id").as_deref())));
    let detail = RwSignal::new(DetailState::default());

    Effect::new(move || {
        let id = article_id.get();
        detail.update(|s| s.begin(id));

        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id {
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_article(id).await;
                    if let Err(e) = &result {
                        leptos::logging::warn!("article {id} unavailable: {e}");
                    }
                    detail.update(|s| {
                        s.apply(id, result);
                    });
                });
            }
        }
    });

    move || match detail.with(|s| s.article().cloned()) {
        None => view! { <div class="article-page article-page--loading"><Spinner/></div> }.into_any(),
        Some(article) => view! { <ArticleView article/> }.into_any(),
    }
}

#[component]
fn ArticleView(article: Article) -> impl IntoView {
    let badge = detail_badge(&article).to_owned();
    let author = author_label(&article);
    let published = format_datetime(&article.created_at);

    view! {
        <article class="article-page">
            <header class="article-page__header">
                <span class="article-page__badge">{badge}</span>
                <h1 class="article-page__title">{article.title}</h1>
                <div class="article-page__meta">
                    <span class="article-page__author">{author}</span>
                    <span class="article-page__date">{published}</span>
                </div>
            </header>
            <div class="article-page__content">{article.content}</div>
            {article
                .attachment
                .filter(|name| !name.is_empty())
                .map(|name| {
                    view! {
                        <div class="attachment">
                            <div class="attachment__info">
                                <p class="attachment__label">"附件资源"</p>
                                <p class="attachment__name">{name.clone()}</p>
                            </div>
                            <a
                                class="attachment__download"
                                href=attachment_url(&name)
                                target="_blank"
                                rel="noreferrer"
                            >
                                "下载"
                            </a>
                        </div>
                    }
                })}
        </article>
    }
}
