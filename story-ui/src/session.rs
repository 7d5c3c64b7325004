//! Explicit session context.
//!
//! The session is resolved once at app bootstrap and provided through Dioxus
//! context. Components that need an identity read it with `use_context`;
//! there is no ambient mutable auth state.

const USER_ID_KEY: &str = "story-forge.user_id";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    /// Resolve the session at bootstrap. Falls back to the default local
    /// user when no identity has been stored by a previous sign-in.
    pub fn bootstrap() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(USER_ID_KEY).ok().flatten());

        Self {
            user_id: stored.unwrap_or_else(|| "user-1".to_string()),
        }
    }
}
