//! Equipment: a tracked machine or asset with a free-text status.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::id::ResourceId;

/// Status value for equipment in normal operation.
pub const STATUS_ACTIVE: &str = "Ativo";
/// Status value for equipment currently under maintenance.
pub const STATUS_UNDER_MAINTENANCE: &str = "Manutenção";
/// Status value for equipment taken out of service.
pub const STATUS_INACTIVE: &str = "Inativo";

/// Status values offered by the equipment form. The backend accepts any text.
pub const STATUS_OPTIONS: [&str; 3] = [STATUS_ACTIVE, STATUS_UNDER_MAINTENANCE, STATUS_INACTIVE];

/// An equipment record as returned by `GET /equipments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
    pub status: String,
}

impl Equipment {
    /// The description, treating an empty string as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// CSS class for the status badge.
    ///
    /// Lower-cases the status and replaces the first `"ção"` with
    /// `"maintenance"`, so `"Manutenção"` yields `"manutenmaintenance"`.
    /// Stylesheets key on exactly these strings.
    #[must_use]
    pub fn status_class(&self) -> String {
        self.status.to_lowercase().replacen("ção", "maintenance", 1)
    }
}

/// Body of `POST /equipments` and `PUT /equipments/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EquipmentPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: String,
    pub description: String,
    pub location: String,
    pub status: String,
}

impl From<&Equipment> for EquipmentPayload {
    fn from(equipment: &Equipment) -> Self {
        Self {
            name: equipment.name.clone(),
            equipment_type: equipment.equipment_type.clone(),
            description: equipment.description.clone().unwrap_or_default(),
            location: equipment.location.clone(),
            status: equipment.status.clone(),
        }
    }
}

/// Distinct equipment types present in `equipments`, sorted.
#[must_use]
pub fn distinct_types(equipments: &[Equipment]) -> Vec<String> {
    equipments
        .iter()
        .map(|e| e.equipment_type.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipment(id: u64, kind: &str, status: &str) -> Equipment {
        Equipment {
            id: ResourceId::from(id),
            name: format!("Equipment {id}"),
            equipment_type: kind.to_string(),
            description: None,
            location: "Galpão A".to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn should_deserialize_backend_payload_with_type_field() {
        let json = r#"{"id":1,"name":"Torno","type":"Usinagem","location":"Galpão A","status":"Ativo"}"#;
        let parsed: Equipment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, ResourceId::from(1));
        assert_eq!(parsed.equipment_type, "Usinagem");
        assert!(parsed.description.is_none());
    }

    #[test]
    fn should_derive_status_class_from_lowercased_status() {
        assert_eq!(equipment(1, "x", "Ativo").status_class(), "ativo");
        assert_eq!(
            equipment(1, "x", "Manutenção").status_class(),
            "manutenmaintenance"
        );
        assert_eq!(equipment(1, "x", "Inativo").status_class(), "inativo");
    }

    #[test]
    fn should_replace_only_first_occurrence_in_status_class() {
        assert_eq!(
            equipment(1, "x", "Ção ção").status_class(),
            "maintenance ção"
        );
    }

    #[test]
    fn should_treat_empty_description_as_absent() {
        let mut e = equipment(1, "x", "Ativo");
        e.description = Some(String::new());
        assert_eq!(e.description(), None);
        e.description = Some("Motor trifásico".to_string());
        assert_eq!(e.description(), Some("Motor trifásico"));
    }

    #[test]
    fn should_list_distinct_types_sorted() {
        let list = vec![
            equipment(1, "Prensa", "Ativo"),
            equipment(2, "Compressor", "Ativo"),
            equipment(3, "Prensa", "Manutenção"),
        ];
        assert_eq!(distinct_types(&list), vec!["Compressor", "Prensa"]);
    }

    #[test]
    fn should_serialize_payload_without_id_and_with_empty_description() {
        let payload = EquipmentPayload::from(&equipment(9, "Prensa", "Ativo"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Equipment 9",
                "type": "Prensa",
                "description": "",
                "location": "Galpão A",
                "status": "Ativo",
            })
        );
    }
}
