//! The browser session: auth token and username kept in `sessionStorage`.
//!
//! The session is read once at startup and handed to the API client, so
//! requests never reach into storage on their own.

pub const TOKEN_KEY: &str = "auth-token";
pub const USERNAME_KEY: &str = "username";
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, username: Option<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self { token, username })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("there")
    }

    /// Reads the session from storage. `None` means the user is logged out.
    pub fn load() -> Option<Self> {
        let storage = session_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let username = storage.get_item(USERNAME_KEY).ok().flatten();
        Self::new(token, username)
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Forgets the session and sends the browser to the login route.
pub fn log_out() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
    log::info!("session cleared, redirecting to {}", LOGIN_ROUTE);
    if let Some(window) = web_sys::window() {
        if window.location().set_href(LOGIN_ROUTE).is_err() {
            log::error!("could not navigate to {}", LOGIN_ROUTE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_no_session() {
        assert_eq!(Session::new("  ", Some("ana".into())), None);
    }

    #[test]
    fn bearer_header_value() {
        let session = Session::new("abc.def", None).unwrap();
        assert_eq!(session.bearer(), "Bearer abc.def");
        assert_eq!(session.display_name(), "there");
    }
}
