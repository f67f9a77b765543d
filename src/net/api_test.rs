use super::*;

// =============================================================
// Error detail extraction
// =============================================================

#[test]
fn detail_message_reads_detail_field() {
    let body = serde_json::json!({"detail": "Username already exists."});
    assert_eq!(detail_message(&body), Some("Username already exists."));
}

#[test]
fn detail_message_ignores_missing_or_non_string_detail() {
    assert_eq!(detail_message(&serde_json::json!({})), None);
    assert_eq!(detail_message(&serde_json::Value::Null), None);
    assert_eq!(detail_message(&serde_json::json!({"detail": 42})), None);
    assert_eq!(
        detail_message(&serde_json::json!({"error": "nope"})),
        None
    );
}

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_base_defaults_outside_browser() {
    assert_eq!(api_base(), "/api");
}

#[test]
fn url_joins_base_and_path() {
    assert_eq!(url("/auth/me/"), "/api/auth/me/");
    assert_eq!(url("/admin/users/7/ban/"), "/api/admin/users/7/ban/");
}
