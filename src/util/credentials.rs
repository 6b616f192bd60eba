//! Session token persistence.
//!
//! The bearer token lives in `localStorage` under a single named key, so a
//! session survives a page reload but not a different browser profile. The
//! token is opaque: nothing here inspects or validates its content. The
//! session layer is the only caller allowed to clear it in response to a
//! backend rejection.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "timetable_token";

/// Read the current session token, if one is stored.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store a new session token, replacing any previous one.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Erase the stored token. A no-op when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
