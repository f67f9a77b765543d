//! REST API helpers for communicating with the blog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, credentials
//! included so session cookies travel with every request. Server-side
//! (SSR): stubs returning `None`/empty/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Identity resolution (`fetch_current_user`, `admin_status`, `admin_me`)
//! returns `Option` and swallows failures: the caller degrades to the
//! anonymous / login-required default. User-initiated actions return
//! `Result<T, String>` where the error string is the server's `detail`
//! field when present, else a generic fallback.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdminUser, AttackLogRow, AuditLogRow, BannedIp, ManagedUser, Post, TrafficLogRow, User,
};

/// Base path for API requests. A `window.API_BASE` global overrides the
/// default, mirroring the deployment-time configurability of the origin.
pub fn api_base() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(value) =
                js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("API_BASE"))
            {
                if let Some(base) = value.as_string() {
                    if !base.is_empty() {
                        return base;
                    }
                }
            }
        }
    }
    "/api".to_owned()
}

fn url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Extract the server's `detail` error message from a JSON error body.
pub fn detail_message(body: &serde_json::Value) -> Option<&str> {
    body.get("detail").and_then(serde_json::Value::as_str)
}

#[cfg(feature = "hydrate")]
async fn failure_detail(resp: gloo_net::http::Response, fallback: &str) -> String {
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    detail_message(&body).map_or_else(|| fallback.to_owned(), ToOwned::to_owned)
}

// ---------------------------------------------------------------------
// Regular user session
// ---------------------------------------------------------------------

/// Fetch the currently authenticated user from `/auth/me/`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url("/auth/me/"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<crate::net::types::CurrentSession>()
            .await
            .ok()
            .map(|s| s.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /auth/login/`. Returns the authenticated user.
pub async fn login(username: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/auth/login/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Login failed").await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /auth/register/`.
pub async fn register(username: &str, email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/auth/register/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Registration failed").await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /auth/logout/`.
/// The response is ignored; local identity is cleared by the caller.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&url("/auth/logout/"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
}

// ---------------------------------------------------------------------
// Blog posts
// ---------------------------------------------------------------------

/// Fetch the public post list from `/posts/`. Failures yield an empty list.
pub async fn fetch_posts() -> Vec<Post> {
    fetch_list(&url("/posts/")).await
}

/// Fetch the signed-in author's posts from `/my-posts/`.
pub async fn fetch_my_posts() -> Vec<Post> {
    fetch_list(&url("/my-posts/")).await
}

/// Create a post via `POST /my-posts/`.
pub async fn create_post(title: &str, content: &str, published: bool) -> Result<Post, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/my-posts/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({
                "title": title,
                "content": content,
                "published": published,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Failed to create post").await);
        }
        resp.json::<Post>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, content, published);
        Err("not available on server".to_owned())
    }
}

/// Update a post via `PUT /my-posts/{id}/`, including the publish flag.
pub async fn update_post(
    id: i64,
    title: &str,
    content: &str,
    published: bool,
) -> Result<Post, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&url(&format!("/my-posts/{id}/")))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({
                "title": title,
                "content": content,
                "published": published,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Failed to update post").await);
        }
        resp.json::<Post>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, title, content, published);
        Err("not available on server".to_owned())
    }
}

// ---------------------------------------------------------------------
// Admin session
// ---------------------------------------------------------------------

/// Query `/admin/status/`: has the one-time admin setup run?
/// `None` on any failure; the caller falls back to the login state.
pub async fn admin_status() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url("/admin/status/"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<crate::net::types::AdminStatus>()
            .await
            .ok()
            .map(|s| s.configured)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Resolve the admin session from `/admin/me/`. `None` means login is needed.
pub async fn admin_me() -> Option<AdminUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url("/admin/me/"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AdminUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// One-time admin bootstrap via `POST /admin/setup/`.
pub async fn admin_setup(username: &str, password: &str) -> Result<AdminUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/admin/setup/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Setup failed").await);
        }
        resp.json::<AdminUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Admin sign-in via `POST /admin/login/`.
pub async fn admin_login(username: &str, password: &str) -> Result<AdminUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/admin/login/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Login failed").await);
        }
        resp.json::<AdminUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// End the admin session via `POST /admin/logout/`. The response is ignored.
pub async fn admin_logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&url("/admin/logout/"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
}

// ---------------------------------------------------------------------
// Admin: user management
// ---------------------------------------------------------------------

/// List platform users from `/admin/users/`.
pub async fn fetch_admin_users() -> Vec<ManagedUser> {
    fetch_list(&url("/admin/users/")).await
}

/// Create a platform user via `POST /admin/users/`.
pub async fn create_admin_user(
    username: &str,
    email: &str,
    password: &str,
) -> Result<ManagedUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/admin/users/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Failed").await);
        }
        resp.json::<ManagedUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Update a platform user via `PUT /admin/users/{id}/`.
/// A `None` password leaves the current one in place.
pub async fn update_admin_user(
    id: i64,
    email: &str,
    password: Option<&str>,
    is_active: bool,
) -> Result<ManagedUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut body = serde_json::json!({ "email": email, "is_active": is_active });
        if let Some(password) = password {
            body["password"] = serde_json::Value::String(password.to_owned());
        }
        let resp = gloo_net::http::Request::put(&url(&format!("/admin/users/{id}/")))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Failed").await);
        }
        resp.json::<ManagedUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, email, password, is_active);
        Err("not available on server".to_owned())
    }
}

/// Remove a platform user via `DELETE /admin/users/{id}/`. Errors ignored.
pub async fn delete_admin_user(id: i64) {
    fire_and_forget_delete(&url(&format!("/admin/users/{id}/"))).await;
}

/// Deactivate a user via `POST /admin/users/{id}/ban/`. Errors ignored.
pub async fn ban_user(id: i64) {
    fire_and_forget_post(&url(&format!("/admin/users/{id}/ban/"))).await;
}

/// Reactivate a user via `POST /admin/users/{id}/unban/`. Errors ignored.
pub async fn unban_user(id: i64) {
    fire_and_forget_post(&url(&format!("/admin/users/{id}/unban/"))).await;
}

// ---------------------------------------------------------------------
// Admin: logs
// ---------------------------------------------------------------------

/// Fetch the newest audit log rows, capped by `limit`.
pub async fn fetch_audit_logs(limit: u32) -> Vec<AuditLogRow> {
    fetch_list(&format!("{}?limit={limit}", url("/admin/audit/"))).await
}

/// Fetch the newest traffic log rows, capped by `limit`.
pub async fn fetch_traffic_logs(limit: u32) -> Vec<TrafficLogRow> {
    fetch_list(&format!("{}?limit={limit}", url("/admin/traffic/"))).await
}

/// Fetch the newest attack-attempt rows, capped by `limit`.
pub async fn fetch_attack_logs(limit: u32) -> Vec<AttackLogRow> {
    fetch_list(&format!("{}?limit={limit}", url("/admin/attacks/"))).await
}

// ---------------------------------------------------------------------
// Admin: banned IPs
// ---------------------------------------------------------------------

/// List banned IPs from `/admin/banned-ips/`.
pub async fn fetch_banned_ips() -> Vec<BannedIp> {
    fetch_list(&url("/admin/banned-ips/")).await
}

/// Ban an IP via `POST /admin/banned-ips/`.
pub async fn create_banned_ip(ip_address: &str, reason: &str) -> Result<BannedIp, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/admin/banned-ips/"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "ip_address": ip_address, "reason": reason }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err(failure_detail(resp, "Failed").await);
        }
        resp.json::<BannedIp>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ip_address, reason);
        Err("not available on server".to_owned())
    }
}

/// Lift a ban via `DELETE /admin/banned-ips/{id}/`. Errors ignored.
pub async fn delete_banned_ip(id: i64) {
    fire_and_forget_delete(&url(&format!("/admin/banned-ips/{id}/"))).await;
}

// ---------------------------------------------------------------------
// Shared request plumbing
// ---------------------------------------------------------------------

/// Credentialed GET of a JSON array; any failure degrades to an empty list.
async fn fetch_list<T: serde::de::DeserializeOwned>(full_url: &str) -> Vec<T> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get(full_url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<T>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = full_url;
        Vec::new()
    }
}

async fn fire_and_forget_post(full_url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(full_url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = full_url;
    }
}

async fn fire_and_forget_delete(full_url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::delete(full_url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = full_url;
    }
}
