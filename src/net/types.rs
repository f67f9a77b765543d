//! Serde wire types for the blog and admin REST endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Regular user identity as resolved from `/auth/me/` or returned by login.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Envelope returned by `/auth/me/`: the user plus profile fields we ignore.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CurrentSession {
    pub user: User,
}

/// Admin identity, distinct from [`User`]: the two session domains never mix.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
}

/// `/admin/status/` response: whether the one-time setup has run.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AdminStatus {
    pub configured: bool,
}

/// A blog post, both public and author-owned views.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A platform user row in the admin users table.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManagedUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub is_active: bool,
    #[serde(default)]
    pub date_joined: Option<String>,
}

/// One row of the admin audit log (user actions and security events).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuditLogRow {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub method: String,
    pub action: String,
    #[serde(default)]
    pub details: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AuditLogRow {
    /// Compact JSON rendering of the details object, or `None` when empty.
    pub fn details_summary(&self) -> Option<String> {
        match &self.details {
            serde_json::Value::Object(map) if !map.is_empty() => {
                serde_json::to_string(&self.details).ok()
            }
            _ => None,
        }
    }
}

/// One row of the admin traffic log (raw API requests).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrafficLogRow {
    pub id: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub path: String,
    pub method: String,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One row of the unauthorized/attack-attempt log.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttackLogRow {
    pub id: i64,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub path: String,
    pub method: String,
    #[serde(default)]
    pub details: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AttackLogRow {
    /// User agent recorded with the attempt, truncated for table display.
    pub fn user_agent_snippet(&self) -> Option<String> {
        let agent = self.details.get("user_agent")?.as_str()?;
        if agent.is_empty() {
            return None;
        }
        if agent.chars().count() <= 60 {
            Some(agent.to_owned())
        } else {
            let mut snippet: String = agent.chars().take(60).collect();
            snippet.push('…');
            Some(snippet)
        }
    }
}

/// An entry in the banned-IP list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BannedIp {
    pub id: i64,
    pub ip_address: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
