//! Home page: category-filtered article listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `cat` query parameter selects the category. The fetch is keyed by it:
//! it re-runs only when the parameter actually changes, and an answer for a
//! category the visitor already left is dropped.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::article_card::ArticleCard;
use crate::components::spinner::Spinner;
use crate::config::category_name;
use crate::state::articles::{ListingState, ListingView};

/// Heading fallback when the category id is not in the table.
pub const LATEST_HEADING: &str = "最新资讯";

pub fn category_heading(category: &str) -> &'static str {
    category_name(category).unwrap_or(LATEST_HEADING)
}

pub fn result_count_label(count: usize) -> String {
    format!("共找到 {count} 篇相关文章")
}

/// The hero banner only appears on the unfiltered home listing.
pub fn shows_hero(category: &str) -> bool {
    category.is_empty()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let category = Memo::new(move |_| query.with(|q| q.get("cat").unwrap_or_default()));

    let listing = RwSignal::new({
        let mut initial = ListingState::default();
        initial.begin(&category.get_untracked());
        initial
    });

    Effect::new(move || {
        let cat = category.get();
        listing.update(|s| s.begin(&cat));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let filter = (!cat.is_empty()).then(|| cat.clone());
            let result = crate::net::api::list_articles(filter).await;
            listing.update(|s| {
                if !s.apply(&cat, result) {
                    leptos::logging::log!("dropped stale listing for category {cat:?}");
                }
            });
        });
    });

    view! {
        <div class="home-page">
            <Show when=move || shows_hero(&category.get())>
                <section class="hero">
                    <span class="hero__tag">"MEDCORE UPDATE 2.0"</span>
                    <h1 class="hero__title">"连接医学前沿与临床实践"</h1>
                    <p class="hero__subtitle">"聚合全球医疗资讯，赋能专业医疗决策。"</p>
                </section>
            </Show>

            <section class="listing">
                <header class="listing__header">
                    <h2 class="listing__title">{move || category_heading(&category.get())}</h2>
                    <p class="listing__count">{move || result_count_label(listing.with(ListingState::count))}</p>
                </header>

                <Show when=move || listing.with(|s| s.error().is_some())>
                    <p class="listing__error">{move || listing.with(|s| s.error().unwrap_or_default().to_owned())}</p>
                </Show>

                {move || match listing.with(ListingState::view) {
                    ListingView::Loading => {
                        view! { <Spinner label="加载医学资讯中..."/> }.into_any()
                    }
                    ListingView::Empty => {
                        view! {
                            <div class="listing__empty">
                                <p>"暂无该分类的文章"</p>
                            </div>
                        }
                            .into_any()
                    }
                    ListingView::Grid(articles) => {
                        view! {
                            <div class="listing__grid">
                                {articles
                                    .into_iter()
                                    .map(|article| view! { <ArticleCard article/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
