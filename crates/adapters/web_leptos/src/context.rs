//! Application context shared by every page.

use leptos::prelude::*;
use maintrack_app::services::auth_service::AuthService;
use maintrack_app::services::dashboard_service::DashboardService;
use maintrack_app::services::equipment_service::EquipmentService;
use maintrack_app::services::maintenance_service::MaintenanceService;
use maintrack_app::services::session::Session;

use crate::api::HttpApi;
use crate::config::Config;
use crate::navigation::BrowserNavigator;
use crate::storage::LocalStorageTokenStore;

pub type WebSession = Session<LocalStorageTokenStore, BrowserNavigator>;

/// Session and REST client, from which pages build their services.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub session: WebSession,
    api: HttpApi,
}

impl AppContext {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let session = Session::new(LocalStorageTokenStore, BrowserNavigator);
        let api = HttpApi::new(config.api.clone(), session.clone());
        Self { session, api }
    }

    #[must_use]
    pub fn auth_service(&self) -> AuthService<HttpApi, LocalStorageTokenStore, BrowserNavigator> {
        AuthService::new(self.api.clone(), self.session.clone())
    }

    #[must_use]
    pub fn dashboard_service(&self) -> DashboardService<HttpApi> {
        DashboardService::new(self.api.clone())
    }

    #[must_use]
    pub fn equipment_service(&self) -> EquipmentService<HttpApi> {
        EquipmentService::new(self.api.clone())
    }

    #[must_use]
    pub fn maintenance_service(&self) -> MaintenanceService<HttpApi> {
        MaintenanceService::new(self.api.clone())
    }
}

/// Access the application context.
///
/// Must be called within the component tree rendered by [`App`](crate::App).
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in context")
}
