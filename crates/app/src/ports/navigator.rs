//! Navigator port: moving between pages.

/// Top-level pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Equipments,
    Maintenances,
}

impl Page {
    /// Route path of the page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Equipments => "/equipments",
            Self::Maintenances => "/maintenances",
        }
    }
}

/// Performs a full navigation to another page.
///
/// Navigation tears down the current page together with its view-models.
pub trait Navigator {
    fn navigate(&self, page: Page);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_pages_to_route_paths() {
        assert_eq!(Page::Login.path(), "/login");
        assert_eq!(Page::Dashboard.path(), "/");
        assert_eq!(Page::Equipments.path(), "/equipments");
        assert_eq!(Page::Maintenances.path(), "/maintenances");
    }
}
