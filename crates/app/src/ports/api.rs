//! REST API ports: the backend as seen by the use-cases.

use std::future::Future;

use maintrack_domain::auth::{Credentials, Registration};
use maintrack_domain::equipment::{Equipment, EquipmentPayload};
use maintrack_domain::error::ApiError;
use maintrack_domain::form_mode::FormMode;
use maintrack_domain::id::ResourceId;
use maintrack_domain::maintenance::{Maintenance, MaintenancePayload};

/// Unauthenticated `/auth/*` endpoints.
pub trait AuthApi {
    /// `POST /auth/login`, returning the issued token.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<String, ApiError>>;

    /// `POST /auth/register`.
    fn register(&self, registration: &Registration)
    -> impl Future<Output = Result<(), ApiError>>;
}

/// Authenticated `/equipments` endpoints.
pub trait EquipmentApi {
    /// `GET /equipments`.
    fn list_equipments(&self) -> impl Future<Output = Result<Vec<Equipment>, ApiError>>;

    /// `GET /equipments/{id}`.
    fn get_equipment(&self, id: &ResourceId) -> impl Future<Output = Result<Equipment, ApiError>>;

    /// `POST /equipments` for [`FormMode::Create`], `PUT /equipments/{id}` for
    /// [`FormMode::Edit`].
    fn save_equipment(
        &self,
        mode: &FormMode,
        payload: &EquipmentPayload,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE /equipments/{id}`.
    fn delete_equipment(&self, id: &ResourceId) -> impl Future<Output = Result<(), ApiError>>;
}

/// Authenticated `/maintenances` endpoints, plus the equipment lookup used
/// by the maintenance form.
pub trait MaintenanceApi {
    /// `GET /maintenances`.
    fn list_maintenances(&self) -> impl Future<Output = Result<Vec<Maintenance>, ApiError>>;

    /// `GET /maintenances/{id}`.
    fn get_maintenance(
        &self,
        id: &ResourceId,
    ) -> impl Future<Output = Result<Maintenance, ApiError>>;

    /// `POST /maintenances` or `PUT /maintenances/{id}` depending on `mode`.
    fn save_maintenance(
        &self,
        mode: &FormMode,
        payload: &MaintenancePayload,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// `DELETE /maintenances/{id}`.
    fn delete_maintenance(&self, id: &ResourceId) -> impl Future<Output = Result<(), ApiError>>;

    /// Equipment list feeding the maintenance form's select and filter.
    ///
    /// Served from a separately configured path, see the web adapter's config.
    fn list_equipment_options(&self) -> impl Future<Output = Result<Vec<Equipment>, ApiError>>;
}
