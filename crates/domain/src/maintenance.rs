//! Maintenance: an intervention performed on an equipment.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::id::ResourceId;

/// Lifecycle status of a maintenance.
///
/// Unknown values coming from the backend are preserved in [`Other`](Self::Other)
/// and displayed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaintenanceStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl MaintenanceStatus {
    /// Statuses offered by the maintenance form and status filter.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Wire value, also used as the badge CSS class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pendente",
            Self::InProgress => "Em Andamento",
            Self::Completed => "Concluída",
            Self::Cancelled => "Cancelada",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for MaintenanceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "in-progress" => Self::InProgress,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for MaintenanceStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<MaintenanceStatus> for String {
    fn from(value: MaintenanceStatus) -> Self {
        match value {
            MaintenanceStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The equipment joined onto a maintenance by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRef {
    pub id: ResourceId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
}

/// The technician who performed a maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    #[serde(default)]
    pub name: String,
}

/// A maintenance record as returned by `GET /maintenances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<EquipmentRef>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<Technician>,
}

impl Maintenance {
    /// Id of the maintained equipment: the joined record first, then the raw foreign key.
    #[must_use]
    pub fn equipment_ref_id(&self) -> Option<&ResourceId> {
        self.equipment
            .as_ref()
            .map(|e| &e.id)
            .or(self.equipment_id.as_ref())
    }

    /// Name of the joined equipment, if the backend included it.
    #[must_use]
    pub fn equipment_name(&self) -> Option<&str> {
        self.equipment
            .as_ref()
            .map(|e| e.name.as_str())
            .filter(|n| !n.is_empty())
    }

    /// Type of the joined equipment, if the backend included it.
    #[must_use]
    pub fn equipment_type(&self) -> Option<&str> {
        self.equipment
            .as_ref()
            .and_then(|e| e.equipment_type.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Name of the technician, when one is recorded.
    #[must_use]
    pub fn technician_name(&self) -> Option<&str> {
        self.performed_by.as_ref().map(|t| t.name.as_str())
    }

    /// Calendar date of the maintenance.
    ///
    /// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. The date
    /// part is taken as written, without shifting to a local time zone.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(ts.date_naive());
        }
        NaiveDate::parse_from_str(self.date_input_value(), "%Y-%m-%d").ok()
    }

    /// Date formatted as `dd/mm/yyyy`, or the raw value when it cannot be parsed.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.calendar_date().map_or_else(
            || self.date.clone(),
            |d| d.format("%d/%m/%Y").to_string(),
        )
    }

    /// Value for a date input: everything before the first `T`.
    #[must_use]
    pub fn date_input_value(&self) -> &str {
        self.date.split('T').next().unwrap_or_default()
    }
}

/// Body of `POST /maintenances` and `PUT /maintenances/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePayload {
    pub equipment_id: String,
    pub description: String,
    pub date: String,
    pub status: MaintenanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 12,
            "equipmentId": 3,
            "equipment": { "id": 3, "name": "Compressor", "type": "Pneumático" },
            "description": "Troca de óleo",
            "date": "2024-03-05T00:00:00.000Z",
            "status": "in-progress",
            "performedBy": { "name": "Carlos" }
        }"#
    }

    #[test]
    fn should_deserialize_joined_maintenance() {
        let m: Maintenance = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(m.id, ResourceId::from(12));
        assert_eq!(m.status, MaintenanceStatus::InProgress);
        assert_eq!(m.equipment_name(), Some("Compressor"));
        assert_eq!(m.equipment_type(), Some("Pneumático"));
        assert_eq!(m.technician_name(), Some("Carlos"));
    }

    #[test]
    fn should_deserialize_without_optional_fields() {
        let json = r#"{"id":"a1","description":"Inspeção","date":"2024-01-02","status":"pending"}"#;
        let m: Maintenance = serde_json::from_str(json).unwrap();
        assert!(m.equipment.is_none());
        assert!(m.performed_by.is_none());
        assert_eq!(m.equipment_ref_id(), None);
    }

    #[test]
    fn should_map_status_labels_and_fall_back_to_raw_value() {
        assert_eq!(MaintenanceStatus::Pending.label(), "Pendente");
        assert_eq!(MaintenanceStatus::InProgress.label(), "Em Andamento");
        assert_eq!(MaintenanceStatus::Completed.label(), "Concluída");
        assert_eq!(MaintenanceStatus::Cancelled.label(), "Cancelada");
        assert_eq!(MaintenanceStatus::from("on-hold").label(), "on-hold");
    }

    #[test]
    fn should_preserve_unknown_status_on_the_wire() {
        let status: MaintenanceStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, MaintenanceStatus::Other("on-hold".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"on-hold\"");
    }

    #[test]
    fn should_prefer_joined_equipment_id_over_foreign_key() {
        let mut m: Maintenance = serde_json::from_str(sample_json()).unwrap();
        m.equipment_id = Some(ResourceId::from(99));
        assert_eq!(m.equipment_ref_id(), Some(&ResourceId::from(3)));
        m.equipment = None;
        assert_eq!(m.equipment_ref_id(), Some(&ResourceId::from(99)));
    }

    #[test]
    fn should_format_timestamp_as_brazilian_date() {
        let m: Maintenance = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(m.display_date(), "05/03/2024");
        assert_eq!(m.date_input_value(), "2024-03-05");
    }

    #[test]
    fn should_format_plain_date() {
        let mut m: Maintenance = serde_json::from_str(sample_json()).unwrap();
        m.date = "2023-12-31".to_string();
        assert_eq!(m.display_date(), "31/12/2023");
    }

    #[test]
    fn should_keep_raw_date_when_unparsable() {
        let mut m: Maintenance = serde_json::from_str(sample_json()).unwrap();
        m.date = "amanhã".to_string();
        assert_eq!(m.display_date(), "amanhã");
    }

    #[test]
    fn should_serialize_payload_in_camel_case() {
        let payload = MaintenancePayload {
            equipment_id: "3".to_string(),
            description: "Troca de óleo".to_string(),
            date: "2024-03-05".to_string(),
            status: MaintenanceStatus::Completed,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "equipmentId": "3",
                "description": "Troca de óleo",
                "date": "2024-03-05",
                "status": "completed",
            })
        );
    }
}
