//! Summary card for one article in the listing grid.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::util::text::{format_date, preview};

/// Badge text for cards whose article has no category.
pub const UNCATEGORIZED: &str = "综合";

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = format!("/article/{}", article.id);
    let badge = if article.category.is_empty() {
        UNCATEGORIZED.to_owned()
    } else {
        article.category.clone()
    };

    view! {
        <a class="article-card" href=href>
            <div class="article-card__cover">
                <span class="article-card__icon" aria-hidden="true">"🗎"</span>
                <span class="article-card__badge">{badge}</span>
            </div>
            <div class="article-card__body">
                <h3 class="article-card__title">{article.title}</h3>
                <p class="article-card__preview">{preview(&article.content)}</p>
            </div>
            <div class="article-card__footer">
                <span class="article-card__date">{format_date(&article.created_at)}</span>
                <span class="article-card__more">"阅读全文 →"</span>
            </div>
        </a>
    }
}
