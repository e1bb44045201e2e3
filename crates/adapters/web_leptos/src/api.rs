//! HTTP API client wrapping `gloo-net` for calls to the maintrack backend.

use gloo_net::http::{Request, RequestBuilder, Response};
use maintrack_app::ports::{AuthApi, EquipmentApi, MaintenanceApi};
use maintrack_app::services::session::Session;
use maintrack_domain::auth::{Credentials, LoginResponse, Registration};
use maintrack_domain::equipment::{Equipment, EquipmentPayload};
use maintrack_domain::error::ApiError;
use maintrack_domain::form_mode::{FormMode, WriteMethod};
use maintrack_domain::id::ResourceId;
use maintrack_domain::maintenance::{Maintenance, MaintenancePayload};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::navigation::BrowserNavigator;
use crate::storage::LocalStorageTokenStore;

/// JSON error body returned by the server on non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// A request that never completed, or a body that could not be (de)serialized.
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::debug!(status, ?message, url = %resp.url(), "request rejected");
    Err(ApiError::Http { status, message })
}

/// REST client for every backend endpoint.
///
/// Authenticated calls carry the session's `Authorization` header.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
    session: Session<LocalStorageTokenStore, BrowserNavigator>,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig, session: Session<LocalStorageTokenStore, BrowserNavigator>) -> Self {
        Self { config, session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", &self.session.authorization_header())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .authorized(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?.json().await.map_err(transport)
    }

    async fn write_json<B: Serialize>(
        &self,
        method: WriteMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        let builder = match method {
            WriteMethod::Post => Request::post(&url),
            WriteMethod::Put => Request::put(&url),
        };
        let resp = self
            .authorized(builder)
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .authorized(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await.map(|_| ())
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let resp = Request::post(&self.url("/auth/login"))
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let body: LoginResponse = check_response(resp)
            .await?
            .json()
            .await
            .map_err(transport)?;
        Ok(body.token)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let resp = Request::post(&self.url("/auth/register"))
            .json(registration)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await.map(|_| ())
    }
}

impl EquipmentApi for HttpApi {
    async fn list_equipments(&self) -> Result<Vec<Equipment>, ApiError> {
        self.get_json("/equipments").await
    }

    async fn get_equipment(&self, id: &ResourceId) -> Result<Equipment, ApiError> {
        self.get_json(&format!("/equipments/{id}")).await
    }

    async fn save_equipment(
        &self,
        mode: &FormMode,
        payload: &EquipmentPayload,
    ) -> Result<(), ApiError> {
        self.write_json(mode.method(), &mode.path("equipments"), payload)
            .await
    }

    async fn delete_equipment(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.delete(&format!("/equipments/{id}")).await
    }
}

impl MaintenanceApi for HttpApi {
    async fn list_maintenances(&self) -> Result<Vec<Maintenance>, ApiError> {
        self.get_json("/maintenances").await
    }

    async fn get_maintenance(&self, id: &ResourceId) -> Result<Maintenance, ApiError> {
        self.get_json(&format!("/maintenances/{id}")).await
    }

    async fn save_maintenance(
        &self,
        mode: &FormMode,
        payload: &MaintenancePayload,
    ) -> Result<(), ApiError> {
        self.write_json(mode.method(), &mode.path("maintenances"), payload)
            .await
    }

    async fn delete_maintenance(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.delete(&format!("/maintenances/{id}")).await
    }

    async fn list_equipment_options(&self) -> Result<Vec<Equipment>, ApiError> {
        self.get_json(&self.config.equipment_lookup_path).await
    }
}
