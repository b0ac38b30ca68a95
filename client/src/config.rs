//! Static client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Endpoint bases are fixed at compile time (`MEDCORE_API_BASE`,
//! `MEDCORE_UPLOAD_BASE`) and default to same-origin paths that the host
//! forwards to the content API. Categories are a closed table, never fetched.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL for every REST call.
pub const API_BASE: &str = match option_env!("MEDCORE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Base URL for uploaded attachment downloads.
pub const UPLOAD_BASE: &str = match option_env!("MEDCORE_UPLOAD_BASE") {
    Some(base) => base,
    None => "/uploads",
};

/// Number of body characters shown on a listing card.
pub const PREVIEW_CHARS: usize = 100;

/// Length of the emailed registration code.
pub const VERIFY_CODE_LEN: usize = 6;

/// Category preselected on the publish form.
pub const DEFAULT_PUBLISH_CATEGORY: &str = "domestic";

/// Attachment extensions the content API stores; others are silently dropped.
pub const ATTACHMENT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "pdf"];

/// A listing filter tag and its display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

/// Navigation categories. The empty id is the unfiltered home listing.
pub const NAV_CATEGORIES: &[Category] = &[
    Category { id: "", name: "首页" },
    Category { id: "domestic", name: "国内资讯" },
    Category { id: "international", name: "国际视野" },
    Category { id: "clinical", name: "临床进展" },
    Category { id: "pharmacy", name: "药学前沿" },
];

/// Look up the display name for a category id.
pub fn category_name(id: &str) -> Option<&'static str> {
    NAV_CATEGORIES.iter().find(|c| c.id == id).map(|c| c.name)
}

/// Categories an article can be published under (everything but home).
pub fn publish_categories() -> impl Iterator<Item = &'static Category> {
    NAV_CATEGORIES.iter().filter(|c| !c.id.is_empty())
}
