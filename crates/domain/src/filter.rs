//! Client-side filtering of in-memory snapshots.
//!
//! Filters never touch the network: they are pure functions of the snapshot
//! and the criteria. Every criterion is optional (an empty string matches
//! everything) and the criteria are combined with logical AND.

use crate::equipment::Equipment;
use crate::maintenance::Maintenance;

/// Criteria for the equipment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentFilter {
    /// Case-insensitive substring over name, type, location and description.
    pub search: String,
    /// Exact status.
    pub status: String,
    /// Exact equipment type.
    pub equipment_type: String,
}

impl EquipmentFilter {
    #[must_use]
    pub fn matches(&self, equipment: &Equipment) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || [
                equipment.name.as_str(),
                equipment.equipment_type.as_str(),
                equipment.location.as_str(),
                equipment.description.as_deref().unwrap_or_default(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&term));
        let matches_status = self.status.is_empty() || equipment.status == self.status;
        let matches_type =
            self.equipment_type.is_empty() || equipment.equipment_type == self.equipment_type;

        matches_search && matches_status && matches_type
    }

    /// The subset of `equipments` matching every criterion, in snapshot order.
    #[must_use]
    pub fn apply(&self, equipments: &[Equipment]) -> Vec<Equipment> {
        equipments
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Criteria for the maintenance list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceFilter {
    /// Case-insensitive substring over equipment name, description and technician name.
    pub search: String,
    /// Exact wire status (e.g. `in-progress`).
    pub status: String,
    /// Equipment id as selected in the dropdown, compared loosely.
    pub equipment_id: String,
}

impl MaintenanceFilter {
    #[must_use]
    pub fn matches(&self, maintenance: &Maintenance) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || [
                maintenance.equipment_name().unwrap_or_default(),
                maintenance.description.as_str(),
                maintenance.technician_name().unwrap_or_default(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&term));
        let matches_status = self.status.is_empty() || maintenance.status.as_str() == self.status;
        let matches_equipment = self.equipment_id.is_empty()
            || maintenance
                .equipment_ref_id()
                .is_some_and(|id| id.matches(&self.equipment_id));

        matches_search && matches_status && matches_equipment
    }

    /// The subset of `maintenances` matching every criterion, in snapshot order.
    #[must_use]
    pub fn apply(&self, maintenances: &[Maintenance]) -> Vec<Maintenance> {
        maintenances
            .iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect()
    }
}
