use super::*;

#[test]
fn toolbar_has_eight_decorative_controls() {
    assert_eq!(TOOLBAR.len(), 8);
    assert_eq!(TOOLBAR[0], "B");
    assert_eq!(TOOLBAR[7], "Quote");
}

#[test]
fn publishing_is_the_first_sidebar_entry() {
    assert_eq!(SIDEBAR[0], "发布文章");
}

#[test]
fn notice_class_tracks_outcome() {
    let ok = PublishNotice::from_result(&Ok(()));
    assert!(notice_class(&ok).ends_with("--ok"));

    let err = PublishNotice::Failure("发布失败: 权限不足".to_owned());
    assert!(notice_class(&err).ends_with("--err"));
}
