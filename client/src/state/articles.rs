//! Listing and detail view state.
//!
//! DESIGN
//! ======
//! Each view owns its own state and fetch. Fetches are keyed by their input
//! (category, article id); an answer for a key that is no longer current is
//! dropped, so a slow response cannot overwrite a newer view.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use crate::net::error::ApiError;
use crate::net::types::Article;

const LIST_FAILED: &str = "文章加载失败";

/// What the listing grid area should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Empty,
    Grid(Vec<Article>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState {
    category: String,
    loading: bool,
    articles: Vec<Article>,
    error: Option<String>,
}

impl ListingState {
    /// Start a fetch for `category`, discarding whatever was shown.
    pub fn begin(&mut self, category: &str) {
        category.clone_into(&mut self.category);
        self.loading = true;
        self.articles.clear();
        self.error = None;
    }

    /// Apply a fetch answer. Returns `false` when it was for a stale category.
    pub fn apply(&mut self, category: &str, result: Result<Vec<Article>, ApiError>) -> bool {
        if category != self.category {
            return false;
        }
        self.loading = false;
        match result {
            Ok(articles) => self.articles = articles,
            Err(e) => {
                self.articles.clear();
                self.error = Some(e.user_message(LIST_FAILED));
            }
        }
        true
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn count(&self) -> usize {
        self.articles.len()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> ListingView {
        if self.loading {
            ListingView::Loading
        } else if self.articles.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Grid(self.articles.clone())
        }
    }
}

/// Detail page state. There is no not-found state: until an article for the
/// current id arrives the page keeps spinning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    id: Option<u64>,
    article: Option<Article>,
}

impl DetailState {
    pub fn begin(&mut self, id: Option<u64>) {
        self.id = id;
        self.article = None;
    }

    /// Apply a fetch answer. Returns `false` when it was for a stale id.
    pub fn apply(&mut self, id: u64, result: Result<Article, ApiError>) -> bool {
        if self.id != Some(id) {
            return false;
        }
        if let Ok(article) = result {
            self.article = Some(article);
        }
        true
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }
}
