//! Maintenances page state: snapshots, filters, form modal and dialogs.

use maintrack_domain::equipment::Equipment;
use maintrack_domain::error::ApiError;
use maintrack_domain::filter::MaintenanceFilter;
use maintrack_domain::form_mode::FormMode;
use maintrack_domain::id::ResourceId;
use maintrack_domain::maintenance::{Maintenance, MaintenancePayload};

use crate::messages::maintenance as text;
use crate::viewmodels::list::ListView;
use crate::viewmodels::notification::{Confirmation, Notification};

/// The add/edit form and the mode it submits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceModal {
    pub mode: FormMode,
    pub form: MaintenancePayload,
}

impl MaintenanceModal {
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            text::TITLE_EDIT
        } else {
            text::TITLE_ADD
        }
    }
}

/// One rendered maintenance card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceCard {
    pub id: ResourceId,
    pub title: String,
    pub status_class: String,
    pub status_label: String,
    pub date: String,
    pub technician: Option<String>,
    pub equipment_type: String,
    pub description: String,
    pub edit_label: String,
    pub delete_label: String,
}

impl From<&Maintenance> for MaintenanceCard {
    fn from(maintenance: &Maintenance) -> Self {
        let subject = maintenance.equipment_name().unwrap_or("equipamento");
        Self {
            id: maintenance.id.clone(),
            title: maintenance
                .equipment_name()
                .unwrap_or(text::UNKNOWN_EQUIPMENT)
                .to_string(),
            status_class: maintenance.status.as_str().to_string(),
            status_label: maintenance.status.label().to_string(),
            date: maintenance.display_date(),
            technician: maintenance.technician_name().map(str::to_string),
            equipment_type: maintenance
                .equipment_type()
                .unwrap_or(text::UNKNOWN_TYPE)
                .to_string(),
            description: maintenance.description.clone(),
            edit_label: format!("Editar manutenção de {subject}"),
            delete_label: format!("Excluir manutenção de {subject}"),
        }
    }
}

/// State of the maintenances page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenancesViewModel {
    all_maintenances: Vec<Maintenance>,
    rendered: Vec<Maintenance>,
    equipment_options: Vec<Equipment>,
    filter: MaintenanceFilter,
    modal: Option<MaintenanceModal>,
    notification: Option<Notification>,
    confirmation: Option<Confirmation<ResourceId>>,
}

impl MaintenancesViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of `GET /maintenances`. On success the snapshot is
    /// replaced and rendered in full; on failure the list is left untouched.
    pub fn loaded(&mut self, result: Result<Vec<Maintenance>, ApiError>) {
        match result {
            Ok(maintenances) => {
                self.rendered.clone_from(&maintenances);
                self.all_maintenances = maintenances;
            }
            Err(err) => {
                tracing::warn!(error = %err, "maintenance list unavailable");
                self.notification = Some(Notification::from_api_error(&err, text::LOAD_FAILED));
            }
        }
    }

    /// Apply the outcome of the equipment lookup feeding the form select and
    /// the equipment filter. Failures are logged only.
    pub fn equipments_loaded(&mut self, result: Result<Vec<Equipment>, ApiError>) {
        match result {
            Ok(equipments) => {
                self.filter.equipment_id.clear();
                self.equipment_options = equipments;
            }
            Err(err) => {
                tracing::warn!(error = %err, "equipment options unavailable");
            }
        }
    }

    #[must_use]
    pub fn all_maintenances(&self) -> &[Maintenance] {
        &self.all_maintenances
    }

    /// Maintenances currently shown, in snapshot order.
    #[must_use]
    pub fn rendered(&self) -> &[Maintenance] {
        &self.rendered
    }

    #[must_use]
    pub fn list_view(&self) -> ListView<MaintenanceCard> {
        ListView::build(
            &self.rendered,
            text::EMPTY_TITLE,
            text::EMPTY_HINT,
            |m| MaintenanceCard::from(m),
        )
    }

    /// Equipments offered by the form select and the equipment filter.
    #[must_use]
    pub fn equipment_options(&self) -> &[Equipment] {
        &self.equipment_options
    }

    #[must_use]
    pub fn filter(&self) -> &MaintenanceFilter {
        &self.filter
    }

    /// Replace the criteria and re-filter the snapshot.
    pub fn set_filter(&mut self, filter: MaintenanceFilter) {
        self.filter = filter;
        self.rendered = self.filter.apply(&self.all_maintenances);
    }

    pub fn set_search(&mut self, search: &str) {
        self.update_filter(|f| f.search = search.to_string());
    }

    pub fn set_status_filter(&mut self, status: &str) {
        self.update_filter(|f| f.status = status.to_string());
    }

    pub fn set_equipment_filter(&mut self, equipment_id: &str) {
        self.update_filter(|f| f.equipment_id = equipment_id.to_string());
    }

    fn update_filter(&mut self, change: impl FnOnce(&mut MaintenanceFilter)) {
        let mut filter = self.filter.clone();
        change(&mut filter);
        self.set_filter(filter);
    }

    #[must_use]
    pub fn modal(&self) -> Option<&MaintenanceModal> {
        self.modal.as_ref()
    }

    /// Form fields of the open modal, for two-way binding.
    pub fn form_mut(&mut self) -> Option<&mut MaintenancePayload> {
        self.modal.as_mut().map(|m| &mut m.form)
    }

    /// Open an empty form in create mode.
    pub fn show_modal(&mut self) {
        self.modal = Some(MaintenanceModal {
            mode: FormMode::Create,
            form: MaintenancePayload::default(),
        });
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// The request to issue for the open form, if any.
    #[must_use]
    pub fn submission(&self) -> Option<(FormMode, MaintenancePayload)> {
        self.modal
            .as_ref()
            .map(|m| (m.mode.clone(), m.form.clone()))
    }

    /// Apply a save outcome. Returns `true` when the list must be reloaded.
    /// The modal stays open on failure.
    pub fn saved(&mut self, mode: &FormMode, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.modal = None;
                let message = if mode.is_edit() {
                    text::UPDATED
                } else {
                    text::CREATED
                };
                self.notification = Some(Notification::success(message));
                true
            }
            Err(err) => {
                self.notification = Some(Notification::from_api_error(&err, text::SAVE_FAILED));
                false
            }
        }
    }

    /// Apply the outcome of `GET /maintenances/{id}`: open the filled form in
    /// edit mode, or report the failure.
    pub fn edit_loaded(&mut self, id: ResourceId, result: Result<Maintenance, ApiError>) {
        match result {
            Ok(maintenance) => {
                let form = MaintenancePayload {
                    equipment_id: maintenance
                        .equipment_ref_id()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    description: maintenance.description.clone(),
                    date: maintenance.date_input_value().to_string(),
                    status: maintenance.status.clone(),
                };
                self.modal = Some(MaintenanceModal {
                    mode: FormMode::Edit(id),
                    form,
                });
            }
            Err(err) => {
                self.notification = Some(Notification::from_api_error(&err, text::FETCH_FAILED));
            }
        }
    }

    /// Ask for confirmation before deleting `id`. Nothing is sent yet.
    pub fn request_delete(&mut self, id: ResourceId) {
        self.confirmation = Some(Confirmation {
            title: text::CONFIRM_DELETE_TITLE.to_string(),
            message: text::CONFIRM_DELETE_MESSAGE.to_string(),
            target: id,
        });
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&Confirmation<ResourceId>> {
        self.confirmation.as_ref()
    }

    /// Dismiss the confirmation and return the id to delete.
    pub fn confirm(&mut self) -> Option<ResourceId> {
        self.confirmation.take().map(|c| c.target)
    }

    pub fn cancel(&mut self) {
        self.confirmation = None;
    }

    /// Apply a delete outcome. Returns `true` when the list must be reloaded.
    pub fn deleted(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.notification = Some(Notification::success(text::DELETED));
                true
            }
            Err(err) => {
                self.notification = Some(Notification::from_api_error(&err, text::DELETE_FAILED));
                false
            }
        }
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maintrack_domain::maintenance::{EquipmentRef, MaintenanceStatus, Technician};

    fn maintenance(id: u64, equipment: Option<(u64, &str)>, status: MaintenanceStatus) -> Maintenance {
        Maintenance {
            id: ResourceId::from(id),
            equipment_id: equipment.map(|(eid, _)| ResourceId::from(eid)),
            equipment: equipment.map(|(eid, name)| EquipmentRef {
                id: ResourceId::from(eid),
                name: name.to_string(),
                equipment_type: Some("Usinagem".to_string()),
            }),
            description: "Troca de rolamentos".to_string(),
            date: "2024-03-05T00:00:00.000Z".to_string(),
            status,
            performed_by: None,
        }
    }

    fn snapshot() -> Vec<Maintenance> {
        let mut with_tech = maintenance(1, Some((3, "Torno CNC")), MaintenanceStatus::Pending);
        with_tech.performed_by = Some(Technician {
            name: "Carla".to_string(),
        });
        vec![
            with_tech,
            maintenance(2, Some((4, "Prensa 01")), MaintenanceStatus::Completed),
            maintenance(3, None, MaintenanceStatus::Other("paused".to_string())),
        ]
    }

    fn loaded_vm() -> MaintenancesViewModel {
        let mut vm = MaintenancesViewModel::new();
        vm.loaded(Ok(snapshot()));
        vm
    }

    #[test]
    fn should_render_empty_state_when_snapshot_is_empty() {
        let mut vm = MaintenancesViewModel::new();
        vm.loaded(Ok(Vec::new()));
        assert!(matches!(
            vm.list_view(),
            ListView::Empty {
                title: "Nenhuma manutenção encontrada",
                ..
            }
        ));
    }

    #[test]
    fn should_describe_cards_with_labels_and_fallbacks() {
        let vm = loaded_vm();
        let ListView::Cards(cards) = vm.list_view() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);

        assert_eq!(cards[0].title, "Torno CNC");
        assert_eq!(cards[0].status_label, "Pendente");
        assert_eq!(cards[0].status_class, "pending");
        assert_eq!(cards[0].date, "05/03/2024");
        assert_eq!(cards[0].technician.as_deref(), Some("Carla"));
        assert_eq!(cards[0].edit_label, "Editar manutenção de Torno CNC");

        assert_eq!(cards[1].technician, None);

        assert_eq!(cards[2].title, "Equipamento não identificado");
        assert_eq!(cards[2].equipment_type, "N/A");
        assert_eq!(cards[2].status_label, "paused");
        assert_eq!(cards[2].delete_label, "Excluir manutenção de equipamento");
    }

    #[test]
    fn should_filter_by_equipment_id_loosely() {
        let mut vm = loaded_vm();
        vm.set_equipment_filter("3");
        let ids: Vec<_> = vm.rendered().iter().map(|m| m.id.to_string()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn should_search_technician_without_failing_on_missing_one() {
        let mut vm = loaded_vm();
        vm.set_search("carla");
        assert_eq!(vm.rendered().len(), 1);

        vm.set_search("rolamentos");
        vm.set_status_filter("completed");
        assert_eq!(vm.rendered().len(), 1);
        assert_eq!(vm.all_maintenances().len(), 3);
    }

    #[test]
    fn should_only_log_when_equipment_lookup_fails() {
        let mut vm = loaded_vm();

        vm.equipments_loaded(Err(ApiError::Http {
            status: 404,
            message: None,
        }));

        assert!(vm.equipment_options().is_empty());
        assert!(vm.notification().is_none());
    }

    #[test]
    fn should_fill_edit_form_from_fetched_record() {
        let mut vm = loaded_vm();

        vm.edit_loaded(
            ResourceId::from(2),
            Ok(maintenance(2, Some((4, "Prensa 01")), MaintenanceStatus::Completed)),
        );

        let modal = vm.modal().unwrap();
        assert_eq!(modal.title(), "Editar Manutenção");
        assert_eq!(modal.form.equipment_id, "4");
        assert_eq!(modal.form.date, "2024-03-05");
        assert_eq!(modal.form.status, MaintenanceStatus::Completed);
    }

    #[test]
    fn should_open_blank_pending_form_when_adding() {
        let mut vm = loaded_vm();
        vm.show_modal();
        let modal = vm.modal().unwrap();
        assert_eq!(modal.title(), "Adicionar Manutenção");
        assert_eq!(modal.form.status, MaintenanceStatus::Pending);
        assert_eq!(modal.form.equipment_id, "");
    }

    #[test]
    fn should_use_feminine_wording_for_outcomes() {
        let mut vm = loaded_vm();
        vm.show_modal();
        assert!(vm.saved(&FormMode::Create, Ok(())));
        assert_eq!(
            vm.notification().unwrap().message,
            "Manutenção criada com sucesso!"
        );

        vm.request_delete(ResourceId::from(1));
        assert_eq!(vm.confirmation().unwrap().title, "Excluir Manutenção");
        assert_eq!(vm.confirm(), Some(ResourceId::from(1)));
        assert!(!vm.deleted(Err(ApiError::Http {
            status: 500,
            message: None,
        })));
        assert_eq!(
            vm.notification().unwrap().message,
            "Não foi possível excluir a manutenção."
        );
    }
}
