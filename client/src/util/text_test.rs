use super::*;

#[test]
fn preview_truncates_to_char_count() {
    let body = "医".repeat(150);
    let out = preview(&body);
    assert_eq!(out.chars().count(), PREVIEW_CHARS + 3);
    assert!(out.ends_with("..."));
}

#[test]
fn preview_keeps_short_body_and_appends_ellipsis() {
    assert_eq!(preview("短讯"), "短讯...");
}

#[test]
fn format_date_handles_server_isoformat() {
    assert_eq!(format_date("2024-03-05T08:30:00.123456"), "2024-03-05");
    assert_eq!(format_date("2024-03-05T08:30:00"), "2024-03-05");
}

#[test]
fn format_date_handles_offset_timestamps() {
    assert_eq!(format_date("2024-03-05T08:30:00+08:00"), "2024-03-05");
}

#[test]
fn format_datetime_includes_minutes() {
    assert_eq!(format_datetime("2024-03-05T08:30:59"), "2024-03-05 08:30");
}

#[test]
fn unparsable_timestamps_pass_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_datetime(""), "");
}
