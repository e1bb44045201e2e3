//! Full-page navigation through `window.location`.

use maintrack_app::ports::{Navigator, Page};

/// [`Navigator`] that reloads the application at the page's route.
///
/// A full load drops every page's state, including anything derived from a
/// token that was just cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, page: Page) {
        tracing::debug!(path = page.path(), "navigating");
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(page.path()) {
            tracing::error!(error = ?err, path = page.path(), "navigation failed");
        }
    }
}
