//! Dashboard counters.

use maintrack_domain::error::ApiError;
use maintrack_domain::stats::{EquipmentStats, MaintenanceStats};

use crate::services::dashboard_service::DashboardCounts;

/// The seven counters shown on the dashboard. All start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub equipments: EquipmentStats,
    pub maintenances: MaintenanceStats,
}

impl DashboardViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a load outcome. Sections the backend refused keep their previous
    /// values; a request that never completed zeroes everything.
    pub fn apply(&mut self, result: Result<DashboardCounts, ApiError>) {
        match result {
            Ok(counts) => {
                if let Some(equipments) = counts.equipments {
                    self.equipments = equipments;
                }
                if let Some(maintenances) = counts.maintenances {
                    self.maintenances = maintenances;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "dashboard load failed, resetting counters");
                *self = Self::default();
            }
        }
    }
}
