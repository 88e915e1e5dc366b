use leptos::prelude::*;

/// Session held in memory for the lifetime of the page.
///
/// Nothing is persisted; a reload starts logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    token: Option<String>,
}

impl SessionStore {
    /// Stores the token. Blank tokens are refused and leave the session as it was.
    pub fn login(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.trim().is_empty() {
            return false;
        }
        self.token = Some(token);
        true
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Reactive handle to the session, provided once by the root component
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionStore>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionStore::default()),
        }
    }

    /// Runs `f` against the store; `None` once the signal is disposed
    pub fn try_update<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    pub fn logout(&self) {
        self.state.update(SessionStore::logout);
        log::info!("session closed");
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionStore::is_authenticated)
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_string))
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_then_logout() {
        let mut session = SessionStore::default();
        assert!(!session.is_authenticated());

        assert!(session.login("abc"));
        assert_eq!(session.token(), Some("abc"));

        session.logout();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_blank_token_is_refused() {
        let mut session = SessionStore::default();
        assert!(!session.login("   "));
        assert!(!session.is_authenticated());

        session.login("abc");
        assert!(!session.login(""));
        assert_eq!(session.token(), Some("abc"));
    }
}
