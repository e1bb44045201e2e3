//! Session: the stored token and the authentication guard around it.

use crate::ports::{Navigator, Page, TokenStore};

/// Owns the token store and the navigator used when the session ends.
///
/// Created once per page load and shared by the page's services and API
/// client.
#[derive(Debug, Clone)]
pub struct Session<S, N> {
    store: S,
    navigator: N,
}

impl<S: TokenStore, N: Navigator> Session<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Guard for authenticated pages.
    ///
    /// Returns the stored token. When there is none, navigates to the login
    /// page and returns `None`; the caller should render nothing further.
    pub fn check_auth(&self) -> Option<String> {
        let token = self.store.get();
        if token.is_none() {
            tracing::debug!("no session token, redirecting to login");
            self.navigator.navigate(Page::Login);
        }
        token
    }

    /// Guard for the login page: an existing token goes straight to the
    /// dashboard, without asking the backend whether it is still valid.
    ///
    /// Returns `true` when a redirect was issued.
    pub fn redirect_if_authenticated(&self) -> bool {
        if self.store.get().is_some() {
            self.navigator.navigate(Page::Dashboard);
            return true;
        }
        false
    }

    /// Clear the token and go back to the login page.
    pub fn logout(&self) {
        self.store.clear();
        self.navigator.navigate(Page::Login);
    }

    /// Value of the `Authorization` header.
    ///
    /// Built unconditionally: without a token it reads `Bearer null`, which
    /// the backend rejects like any other invalid token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let token = self.store.get();
        format!("Bearer {}", token.as_deref().unwrap_or("null"))
    }

    /// Persist a freshly issued token.
    pub fn store_token(&self, token: &str) {
        self.store.set(token);
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryStore(Arc<Mutex<Option<String>>>);

    impl TokenStore for MemoryStore {
        fn get(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn set(&self, token: &str) {
            *self.0.lock().unwrap() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.0.lock().unwrap() = None;
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator(Arc<Mutex<Vec<Page>>>);

    impl Navigator for RecordingNavigator {
        fn navigate(&self, page: Page) {
            self.0.lock().unwrap().push(page);
        }
    }

    fn session() -> (Session<MemoryStore, RecordingNavigator>, MemoryStore, RecordingNavigator) {
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();
        (Session::new(store.clone(), nav.clone()), store, nav)
    }

    #[test]
    fn should_redirect_to_login_when_no_token_stored() {
        let (session, _, nav) = session();
        assert_eq!(session.check_auth(), None);
        assert_eq!(*nav.0.lock().unwrap(), vec![Page::Login]);
    }

    #[test]
    fn should_return_exact_token_when_stored() {
        let (session, store, nav) = session();
        store.set("abc123");
        assert_eq!(session.check_auth().as_deref(), Some("abc123"));
        assert!(nav.0.lock().unwrap().is_empty());
    }

    #[test]
    fn should_clear_token_and_redirect_on_logout() {
        let (session, store, nav) = session();
        store.set("abc123");
        session.logout();
        assert_eq!(store.get(), None);
        assert_eq!(*nav.0.lock().unwrap(), vec![Page::Login]);
    }

    #[test]
    fn should_build_bearer_header_from_stored_token() {
        let (session, store, _) = session();
        store.set("abc123");
        assert_eq!(session.authorization_header(), "Bearer abc123");
    }

    #[test]
    fn should_build_bearer_null_header_when_no_token() {
        let (session, _, nav) = session();
        assert_eq!(session.authorization_header(), "Bearer null");
        assert!(nav.0.lock().unwrap().is_empty());
    }

    #[test]
    fn should_redirect_to_dashboard_when_already_authenticated() {
        let (session, store, nav) = session();
        assert!(!session.redirect_if_authenticated());
        store.set("abc123");
        assert!(session.redirect_if_authenticated());
        assert_eq!(*nav.0.lock().unwrap(), vec![Page::Dashboard]);
    }
}
