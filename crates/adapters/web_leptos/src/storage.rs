//! Session token persisted in `localStorage`.

use maintrack_app::ports::TokenStore;
use web_sys::Storage;

/// Key under which the bearer token is stored.
const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// [`TokenStore`] backed by the browser's `localStorage`.
///
/// Storage being unavailable (private mode, disabled by policy) reads as "no
/// token" and makes writes no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        let stored = local_storage().is_some_and(|s| s.set_item(TOKEN_KEY, token).is_ok());
        if !stored {
            tracing::warn!("unable to persist session token");
        }
    }

    fn clear(&self) {
        let removed = local_storage().is_some_and(|s| s.remove_item(TOKEN_KEY).is_ok());
        if !removed {
            tracing::warn!("unable to remove session token");
        }
    }
}
