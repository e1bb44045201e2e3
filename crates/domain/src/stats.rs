//! Aggregate counters shown on the dashboard.

use crate::equipment::{Equipment, STATUS_ACTIVE, STATUS_UNDER_MAINTENANCE};
use crate::maintenance::{Maintenance, MaintenanceStatus};

/// Equipment counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentStats {
    pub total: usize,
    pub active: usize,
    pub under_maintenance: usize,
}

impl EquipmentStats {
    #[must_use]
    pub fn from_equipments(equipments: &[Equipment]) -> Self {
        Self {
            total: equipments.len(),
            active: equipments
                .iter()
                .filter(|e| e.status == STATUS_ACTIVE)
                .count(),
            under_maintenance: equipments
                .iter()
                .filter(|e| e.status == STATUS_UNDER_MAINTENANCE)
                .count(),
        }
    }
}

/// Maintenance counters. Cancelled maintenances only count towards the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl MaintenanceStats {
    #[must_use]
    pub fn from_maintenances(maintenances: &[Maintenance]) -> Self {
        let count = |status: MaintenanceStatus| {
            maintenances
                .iter()
                .filter(|m| m.status == status)
                .count()
        };
        Self {
            total: maintenances.len(),
            pending: count(MaintenanceStatus::Pending),
            in_progress: count(MaintenanceStatus::InProgress),
            completed: count(MaintenanceStatus::Completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ResourceId;

    fn equipment(status: &str) -> Equipment {
        Equipment {
            id: ResourceId::from(1),
            name: "Torno".to_string(),
            equipment_type: "Usinagem".to_string(),
            description: None,
            location: "Galpão A".to_string(),
            status: status.to_string(),
        }
    }

    fn maintenance(status: &str) -> Maintenance {
        Maintenance {
            id: ResourceId::from(1),
            equipment_id: None,
            equipment: None,
            description: String::new(),
            date: String::new(),
            status: MaintenanceStatus::from(status),
            performed_by: None,
        }
    }

    #[test]
    fn should_count_equipment_by_exact_status() {
        let list = vec![
            equipment("Ativo"),
            equipment("Ativo"),
            equipment("Manutenção"),
            equipment("ativo"),
            equipment("Inativo"),
        ];
        assert_eq!(
            EquipmentStats::from_equipments(&list),
            EquipmentStats {
                total: 5,
                active: 2,
                under_maintenance: 1,
            }
        );
    }

    #[test]
    fn should_count_maintenance_by_status() {
        let list = vec![
            maintenance("pending"),
            maintenance("in-progress"),
            maintenance("in-progress"),
            maintenance("completed"),
            maintenance("cancelled"),
            maintenance("on-hold"),
        ];
        assert_eq!(
            MaintenanceStats::from_maintenances(&list),
            MaintenanceStats {
                total: 6,
                pending: 1,
                in_progress: 2,
                completed: 1,
            }
        );
    }

    #[test]
    fn should_return_zeroes_for_empty_lists() {
        assert_eq!(EquipmentStats::from_equipments(&[]), EquipmentStats::default());
        assert_eq!(
            MaintenanceStats::from_maintenances(&[]),
            MaintenanceStats::default()
        );
    }
}
