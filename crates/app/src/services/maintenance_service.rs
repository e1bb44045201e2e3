//! Maintenance service: use-cases for managing maintenances.

use maintrack_domain::equipment::Equipment;
use maintrack_domain::error::ApiError;
use maintrack_domain::form_mode::FormMode;
use maintrack_domain::id::ResourceId;
use maintrack_domain::maintenance::{Maintenance, MaintenancePayload};

use crate::ports::MaintenanceApi;

/// Application service for maintenance CRUD operations.
#[derive(Debug, Clone)]
pub struct MaintenanceService<A> {
    api: A,
}

impl<A: MaintenanceApi> MaintenanceService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List all maintenances.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    pub async fn list_maintenances(&self) -> Result<Vec<Maintenance>, ApiError> {
        self.api.list_maintenances().await
    }

    /// Equipments selectable in the maintenance form and filter.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    pub async fn list_equipment_options(&self) -> Result<Vec<Equipment>, ApiError> {
        self.api.list_equipment_options().await
    }

    /// Fetch one maintenance for editing.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    #[tracing::instrument(skip(self))]
    pub async fn get_maintenance(&self, id: &ResourceId) -> Result<Maintenance, ApiError> {
        self.api.get_maintenance(id).await
    }

    /// Create or update a maintenance depending on `mode`.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    #[tracing::instrument(skip(self, payload), fields(equipment_id = %payload.equipment_id))]
    pub async fn save_maintenance(
        &self,
        mode: &FormMode,
        payload: &MaintenancePayload,
    ) -> Result<(), ApiError> {
        self.api.save_maintenance(mode, payload).await
    }

    /// Delete a maintenance by id.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    #[tracing::instrument(skip(self))]
    pub async fn delete_maintenance(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.api.delete_maintenance(id).await
    }
}
