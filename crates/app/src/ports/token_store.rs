//! Token store port: persistence for the session token.

/// Storage for the bearer token issued at login.
///
/// Implementations are synchronous: the browser adapter is backed by
/// `localStorage`, tests by an in-memory cell.
pub trait TokenStore {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}
