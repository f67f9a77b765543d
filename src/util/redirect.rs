//! Post-login redirect slot backed by browser session storage.
//!
//! When an unauthenticated visitor hits a protected route, the attempted
//! path is remembered under a fixed key. A single slot, last write wins:
//! each new unauthorized attempt overwrites the previous one. A successful
//! login may consume the slot to send the visitor where they were headed.
//! Requires a browser environment; the SSR build is inert.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "unauthorized_attempt_url";

/// Pick the path to remember: an explicit override wins over the current
/// location, letting callers pin a redirect target independent of the URL.
pub fn gate_target(override_url: Option<&str>, current_path: &str) -> String {
    override_url
        .filter(|url| !url.is_empty())
        .unwrap_or(current_path)
        .to_owned()
}

/// Remember the attempted path for after login. Overwrites any prior value.
pub fn remember(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.set_item(STORAGE_KEY, path);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Take the remembered path, clearing the slot.
pub fn take() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.session_storage().ok().flatten()?;
        let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
        let _ = storage.remove_item(STORAGE_KEY);
        if value.is_empty() { None } else { Some(value) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
