//! Dashboard service: aggregate counters over both resources.

use maintrack_domain::error::ApiError;
use maintrack_domain::stats::{EquipmentStats, MaintenanceStats};

use crate::ports::{EquipmentApi, MaintenanceApi};

/// Counters for the dashboard. A section is `None` when its request was
/// answered with a non-success status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub equipments: Option<EquipmentStats>,
    pub maintenances: Option<MaintenanceStats>,
}

/// Application service computing the dashboard counters.
#[derive(Debug, Clone)]
pub struct DashboardService<A> {
    api: A,
}

impl<A: EquipmentApi + MaintenanceApi> DashboardService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch both lists concurrently and compute their counters.
    ///
    /// Both requests are awaited before anything is returned. A non-success
    /// status only blanks the affected section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError::Transport`] when either request fails to
    /// complete; the caller resets every counter in that case.
    #[tracing::instrument(skip(self))]
    pub async fn load_counts(&self) -> Result<DashboardCounts, ApiError> {
        let (equipments, maintenances) =
            tokio::join!(self.api.list_equipments(), self.api.list_maintenances());

        let equipments = match equipments {
            Ok(list) => Some(EquipmentStats::from_equipments(&list)),
            Err(err) if err.is_transport() => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "equipment counters unavailable");
                None
            }
        };
        let maintenances = match maintenances {
            Ok(list) => Some(MaintenanceStats::from_maintenances(&list)),
            Err(err) if err.is_transport() => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "maintenance counters unavailable");
                None
            }
        };

        Ok(DashboardCounts {
            equipments,
            maintenances,
        })
    }
}
