//! Equipment service: use-cases for managing equipments.

use maintrack_domain::equipment::{Equipment, EquipmentPayload};
use maintrack_domain::error::ApiError;
use maintrack_domain::form_mode::FormMode;
use maintrack_domain::id::ResourceId;

use crate::ports::EquipmentApi;

/// Application service for equipment CRUD operations.
#[derive(Debug, Clone)]
pub struct EquipmentService<A> {
    api: A,
}

impl<A: EquipmentApi> EquipmentService<A> {
    /// Create a new service backed by the given API.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// List all equipments.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    pub async fn list_equipments(&self) -> Result<Vec<Equipment>, ApiError> {
        self.api.list_equipments().await
    }

    /// Fetch one equipment for editing.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    #[tracing::instrument(skip(self))]
    pub async fn get_equipment(&self, id: &ResourceId) -> Result<Equipment, ApiError> {
        self.api.get_equipment(id).await
    }

    /// Create or update an equipment depending on `mode`.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    #[tracing::instrument(skip(self, payload), fields(equipment_name = %payload.name))]
    pub async fn save_equipment(
        &self,
        mode: &FormMode,
        payload: &EquipmentPayload,
    ) -> Result<(), ApiError> {
        self.api.save_equipment(mode, payload).await
    }

    /// Delete an equipment by id.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] reported by the backend or the transport.
    #[tracing::instrument(skip(self))]
    pub async fn delete_equipment(&self, id: &ResourceId) -> Result<(), ApiError> {
        self.api.delete_equipment(id).await
    }
}
