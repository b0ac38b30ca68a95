use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_article(id: u64, category: &str) -> Article {
    Article {
        id,
        title: format!("文章 {id}"),
        content: "内容".to_owned(),
        category: category.to_owned(),
        author_id: 1,
        author_name: None,
        attachment: None,
        created_at: "2024-05-01T10:00:00".to_owned(),
    }
}

// =============================================================
// ListingState
// =============================================================

#[test]
fn begin_shows_loading() {
    let mut state = ListingState::default();
    state.begin("domestic");
    assert_eq!(state.view(), ListingView::Loading);
    assert_eq!(state.category(), "domestic");
}

#[test]
fn empty_result_shows_empty_state_never_grid() {
    let mut state = ListingState::default();
    state.begin("domestic");
    assert!(state.apply("domestic", Ok(Vec::new())));
    assert_eq!(state.view(), ListingView::Empty);
    assert_eq!(state.count(), 0);
}

#[test]
fn non_empty_result_shows_grid() {
    let mut state = ListingState::default();
    state.begin("");
    state.apply("", Ok(vec![make_article(1, "domestic"), make_article(2, "clinical")]));
    match state.view() {
        ListingView::Grid(items) => assert_eq!(items.len(), 2),
        other => panic!("expected grid, got {other:?}"),
    }
    assert_eq!(state.count(), 2);
}

#[test]
fn stale_category_answer_is_dropped() {
    let mut state = ListingState::default();
    state.begin("domestic");
    state.begin("clinical");
    assert!(!state.apply("domestic", Ok(vec![make_article(1, "domestic")])));
    assert_eq!(state.view(), ListingView::Loading);
    assert!(state.apply("clinical", Ok(vec![make_article(2, "clinical")])));
    assert_eq!(state.count(), 1);
}

#[test]
fn failure_shows_empty_state_with_message() {
    let mut state = ListingState::default();
    state.begin("");
    state.apply("", Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.view(), ListingView::Empty);
    assert_eq!(state.error(), Some("网络错误"));
}

#[test]
fn new_fetch_clears_previous_error_and_items() {
    let mut state = ListingState::default();
    state.begin("");
    state.apply("", Err(ApiError::Rejected { message: None }));
    assert_eq!(state.error(), Some("文章加载失败"));
    state.begin("pharmacy");
    assert_eq!(state.error(), None);
    assert_eq!(state.count(), 0);
}

// =============================================================
// DetailState
// =============================================================

#[test]
fn detail_starts_without_article() {
    let mut state = DetailState::default();
    state.begin(Some(3));
    assert!(state.article().is_none());
}

#[test]
fn detail_applies_matching_article() {
    let mut state = DetailState::default();
    state.begin(Some(3));
    assert!(state.apply(3, Ok(make_article(3, "clinical"))));
    assert_eq!(state.article().map(|a| a.id), Some(3));
}

#[test]
fn detail_drops_stale_article() {
    let mut state = DetailState::default();
    state.begin(Some(3));
    state.begin(Some(4));
    assert!(!state.apply(3, Ok(make_article(3, "clinical"))));
    assert!(state.article().is_none());
}

#[test]
fn detail_failure_keeps_spinning() {
    let mut state = DetailState::default();
    state.begin(Some(9));
    state.apply(9, Err(ApiError::Rejected { message: Some("文章不存在".to_owned()) }));
    assert!(state.article().is_none());
}

#[test]
fn detail_without_id_ignores_answers() {
    let mut state = DetailState::default();
    state.begin(None);
    assert!(!state.apply(1, Ok(make_article(1, ""))));
}
