use super::*;

fn parse<T: serde::de::DeserializeOwned>(raw: &str) -> T {
    serde_json::from_str(raw).expect("valid wire payload")
}

// =============================================================
// Success shapes, one per endpoint family
// =============================================================

#[test]
fn current_session_unwraps_user_envelope() {
    let session: CurrentSession =
        parse(r#"{"user":{"username":"alice","email":"a@x.com"},"bio":"","display_name":""}"#);
    assert_eq!(session.user.username, "alice");
    assert_eq!(session.user.email.as_deref(), Some("a@x.com"));
}

#[test]
fn user_email_is_optional() {
    let user: User = parse(r#"{"username":"bob"}"#);
    assert!(user.email.is_none());
}

#[test]
fn admin_status_and_identity_parse() {
    let status: AdminStatus = parse(r#"{"configured":false}"#);
    assert!(!status.configured);

    let admin: AdminUser = parse(r#"{"id":1,"username":"root"}"#);
    assert_eq!(admin.id, 1);
    assert_eq!(admin.username, "root");
}

#[test]
fn managed_user_row_parses_with_null_join_date() {
    let user: ManagedUser = parse(
        r#"{"id":7,"username":"alice","email":"a@x.com","is_active":true,"date_joined":null}"#,
    );
    assert_eq!(user.id, 7);
    assert!(user.is_active);
    assert!(user.date_joined.is_none());
}

#[test]
fn post_parses_with_timestamps() {
    let post: Post = parse(
        r#"{"id":3,"title":"Hello","content":"body","published":true,
           "created_at":"2025-01-02T03:04:05Z","updated_at":null}"#,
    );
    assert!(post.published);
    assert_eq!(post.created_at.as_deref(), Some("2025-01-02T03:04:05Z"));
}

#[test]
fn banned_ip_reason_defaults_to_empty() {
    let ban: BannedIp = parse(r#"{"id":2,"ip_address":"10.0.0.9"}"#);
    assert_eq!(ban.reason, "");
}

// =============================================================
// Log row display helpers
// =============================================================

#[test]
fn audit_details_summary_skips_empty_object() {
    let row = AuditLogRow {
        action: "login".to_owned(),
        details: serde_json::json!({}),
        ..AuditLogRow::default()
    };
    assert!(row.details_summary().is_none());
}

#[test]
fn audit_details_summary_renders_compact_json() {
    let row = AuditLogRow {
        action: "unauthorized_attempt".to_owned(),
        details: serde_json::json!({"target": "/dashboard"}),
        ..AuditLogRow::default()
    };
    assert_eq!(
        row.details_summary().as_deref(),
        Some(r#"{"target":"/dashboard"}"#)
    );
}

#[test]
fn attack_user_agent_snippet_truncates_long_agents() {
    let row = AttackLogRow {
        details: serde_json::json!({"user_agent": "x".repeat(80)}),
        ..AttackLogRow::default()
    };
    let snippet = row.user_agent_snippet().expect("agent present");
    assert_eq!(snippet.chars().count(), 61);
    assert!(snippet.ends_with('…'));
}

#[test]
fn attack_user_agent_snippet_keeps_short_agents_whole() {
    let row = AttackLogRow {
        details: serde_json::json!({"user_agent": "curl/8.0"}),
        ..AttackLogRow::default()
    };
    assert_eq!(row.user_agent_snippet().as_deref(), Some("curl/8.0"));
}

#[test]
fn attack_user_agent_snippet_absent_when_missing_or_empty() {
    let row = AttackLogRow::default();
    assert!(row.user_agent_snippet().is_none());

    let row = AttackLogRow {
        details: serde_json::json!({"user_agent": ""}),
        ..AttackLogRow::default()
    };
    assert!(row.user_agent_snippet().is_none());
}
