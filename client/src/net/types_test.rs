use super::*;

// =============================================================
// Envelope parsing
// =============================================================

#[test]
fn empty_article_list_parses() {
    let env: ApiEnvelope<Vec<Article>> = parse_envelope(r#"{"success":true,"data":[]}"#).unwrap();
    assert_eq!(env.into_result(), Ok(Some(Vec::new())));
}

#[test]
fn rejection_carries_server_message() {
    let env: ApiEnvelope<User> = parse_envelope(r#"{"success":false,"message":"密码错误"}"#).unwrap();
    assert_eq!(
        env.into_data(),
        Err(ApiError::Rejected { message: Some("密码错误".to_owned()) })
    );
}

#[test]
fn explicit_null_data_is_absent() {
    let env: ApiEnvelope<User> = parse_envelope(r#"{"success":false,"data":null}"#).unwrap();
    assert_eq!(env.data, None);
    assert_eq!(env.message, None);
}

#[test]
fn success_without_data_fails_into_data() {
    let env: ApiEnvelope<Article> = parse_envelope(r#"{"success":true}"#).unwrap();
    assert_eq!(env.into_data(), Err(ApiError::Rejected { message: None }));
}

#[test]
fn success_without_data_is_ok_for_unit_calls() {
    let env: ApiEnvelope<serde_json::Value> = parse_envelope(r#"{"success":true,"message":"注册成功"}"#).unwrap();
    assert_eq!(env.into_result(), Ok(None));
}

#[test]
fn html_body_is_a_transport_failure() {
    let result = parse_envelope::<User>("<html>502 Bad Gateway</html>");
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

// =============================================================
// Users
// =============================================================

#[test]
fn user_role_parses_lowercase() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"username":"root","email":"r@x.cn","role":"admin"}"#).unwrap();
    assert!(user.is_admin());
}

#[test]
fn unknown_role_is_plain_user() {
    let user: User =
        serde_json::from_str(r#"{"id":2,"username":"ed","email":"e@x.cn","role":"editor"}"#).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.is_admin());
}

#[test]
fn missing_role_is_plain_user() {
    let user: User = serde_json::from_str(r#"{"id":3,"username":"li","email":"l@x.cn"}"#).unwrap();
    assert_eq!(user.role, Role::User);
}

// =============================================================
// Articles
// =============================================================

#[test]
fn article_parses_server_shape() {
    let json = r#"{
        "id": 7,
        "title": "新型疫苗进入三期临床",
        "content": "正文",
        "category": "clinical",
        "author_id": 1,
        "author_name": "root",
        "attachment": null,
        "created_at": "2024-03-05T08:30:00.123456"
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article.id, 7);
    assert_eq!(article.author_name.as_deref(), Some("root"));
    assert_eq!(article.attachment, None);
}

#[test]
fn article_without_category_defaults_empty() {
    let json = r#"{"id":1,"title":"t","content":"c","author_id":1,"created_at":"2024-01-01T00:00:00"}"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert!(article.category.is_empty());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_all_fields() {
    let req = RegisterRequest {
        username: "zhang".to_owned(),
        email: "z@x.cn".to_owned(),
        password: "pw".to_owned(),
        confirm: "pw".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"username":"zhang","email":"z@x.cn","password":"pw","confirm":"pw"})
    );
}

#[test]
fn verify_request_serializes_email_and_code() {
    let req = VerifyRequest { email: "z@x.cn".to_owned(), code: "123456".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"email":"z@x.cn","code":"123456"})
    );
}

// =============================================================
// Nullable columns
// =============================================================

#[test]
fn null_category_parses_as_uncategorized() {
    let body = r#"{"success":true,"data":[
        {"id":1,"title":"a","content":"x","category":null,"author_id":2,"created_at":"2024-03-01T08:00:00"},
        {"id":2,"title":"b","content":"y","category":"clinical","author_id":2,"created_at":"2024-03-02T08:00:00"}
    ]}"#;
    let articles = parse_envelope::<Vec<Article>>(body).unwrap().into_data().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].category, "");
    assert_eq!(articles[1].category, "clinical");
}

#[test]
fn null_role_parses_as_plain_user() {
    let body = r#"{"success":true,"data":{"id":3,"username":"li","email":"li@medcore.com","role":null}}"#;
    let user = parse_envelope::<User>(body).unwrap().into_data().unwrap();
    assert_eq!(user.role, Role::User);
    assert!(!user.is_admin());
}

#[test]
fn admin_role_still_parses() {
    let body = r#"{"success":true,"data":{"id":3,"username":"li","email":"li@medcore.com","role":"admin"}}"#;
    let user = parse_envelope::<User>(body).unwrap().into_data().unwrap();
    assert!(user.is_admin());
}
