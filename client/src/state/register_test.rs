use super::*;

// =============================================================
// Helpers
// =============================================================

fn details(password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        username: "li".to_owned(),
        email: "li@medcore.com".to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

fn flow_awaiting_code() -> RegisterFlow {
    let mut flow = RegisterFlow::default();
    flow.details_outcome("li@medcore.com", Ok(()));
    flow
}

// =============================================================
// Details step
// =============================================================

#[test]
fn starts_awaiting_details_without_notice() {
    let flow = RegisterFlow::default();
    assert_eq!(flow.step(), &RegisterStep::AwaitingDetails);
    assert_eq!(flow.notice(), None);
}

#[test]
fn mismatched_passwords_produce_no_request() {
    let mut flow = RegisterFlow::default();
    assert_eq!(flow.begin_details(&details("secret1", "secret2")), None);
    assert_eq!(flow.notice(), Some("两次密码不一致"));
    assert_eq!(flow.step(), &RegisterStep::AwaitingDetails);
}

#[test]
fn matching_passwords_produce_request() {
    let mut flow = RegisterFlow::default();
    let req = flow.begin_details(&details("secret", "secret")).unwrap();
    assert_eq!(req.email, "li@medcore.com");
    assert_eq!(req.confirm, "secret");
}

#[test]
fn accepted_details_advance_to_code_step() {
    let flow = flow_awaiting_code();
    assert_eq!(flow.pending_email(), Some("li@medcore.com"));
    assert_eq!(flow.notice(), Some("验证码已发送，请查收邮件"));
}

#[test]
fn rejected_details_stay_with_server_message() {
    let mut flow = RegisterFlow::default();
    flow.details_outcome(
        "li@medcore.com",
        Err(ApiError::Rejected { message: Some("邮箱已注册".to_owned()) }),
    );
    assert_eq!(flow.step(), &RegisterStep::AwaitingDetails);
    assert_eq!(flow.notice(), Some("邮箱已注册"));
}

#[test]
fn rejected_details_without_message_use_fallback() {
    let mut flow = RegisterFlow::default();
    flow.details_outcome("li@medcore.com", Err(ApiError::Rejected { message: None }));
    assert_eq!(flow.notice(), Some("注册失败"));
}

#[test]
fn details_transport_failure_shows_network_error() {
    let mut flow = RegisterFlow::default();
    flow.details_outcome("li@medcore.com", Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(flow.step(), &RegisterStep::AwaitingDetails);
    assert_eq!(flow.notice(), Some("网络错误"));
}

#[test]
fn details_are_ignored_once_awaiting_code() {
    let mut flow = flow_awaiting_code();
    assert_eq!(flow.begin_details(&details("a", "a")), None);
    flow.details_outcome("other@medcore.com", Ok(()));
    assert_eq!(flow.pending_email(), Some("li@medcore.com"));
}

// =============================================================
// Code step
// =============================================================

#[test]
fn verify_before_details_is_ignored() {
    let mut flow = RegisterFlow::default();
    assert_eq!(flow.begin_verify("123456"), None);
    assert_eq!(flow.verify_outcome(Ok(())), VerifyOutcome::Stay);
}

#[test]
fn valid_code_builds_request_with_pending_email() {
    let mut flow = flow_awaiting_code();
    let req = flow.begin_verify(" 123456 ").unwrap();
    assert_eq!(req.email, "li@medcore.com");
    assert_eq!(req.code, "123456");
}

#[test]
fn short_or_non_numeric_code_is_refused_locally() {
    for code in ["12345", "1234567", "12a456", ""] {
        let mut flow = flow_awaiting_code();
        assert_eq!(flow.begin_verify(code), None, "code {code:?}");
        assert_eq!(flow.notice(), Some("请输入6位验证码"));
    }
}

#[test]
fn accepted_code_goes_to_login() {
    let mut flow = flow_awaiting_code();
    assert_eq!(flow.verify_outcome(Ok(())), VerifyOutcome::GoToLogin);
}

#[test]
fn rejected_code_stays_with_message() {
    let mut flow = flow_awaiting_code();
    let outcome = flow.verify_outcome(Err(ApiError::Rejected { message: Some("验证码错误或过期".to_owned()) }));
    assert_eq!(outcome, VerifyOutcome::Stay);
    assert_eq!(flow.notice(), Some("验证码错误或过期"));
    assert!(flow.pending_email().is_some());
}

#[test]
fn rejected_code_without_message_uses_fallback() {
    let mut flow = flow_awaiting_code();
    flow.verify_outcome(Err(ApiError::Rejected { message: None }));
    assert_eq!(flow.notice(), Some("验证失败"));
}
