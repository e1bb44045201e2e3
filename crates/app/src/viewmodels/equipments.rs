//! Equipments page state: snapshot, filters, form modal and dialogs.

use maintrack_domain::equipment::{self, Equipment, EquipmentPayload, STATUS_ACTIVE};
use maintrack_domain::error::ApiError;
use maintrack_domain::filter::EquipmentFilter;
use maintrack_domain::form_mode::FormMode;
use maintrack_domain::id::ResourceId;

use crate::messages::equipment as text;
use crate::viewmodels::list::ListView;
use crate::viewmodels::notification::{Confirmation, Notification};

/// The add/edit form and the mode it submits in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentModal {
    pub mode: FormMode,
    pub form: EquipmentPayload,
}

impl EquipmentModal {
    fn create() -> Self {
        Self {
            mode: FormMode::Create,
            form: blank_form(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            text::TITLE_EDIT
        } else {
            text::TITLE_ADD
        }
    }
}

fn blank_form() -> EquipmentPayload {
    EquipmentPayload {
        status: STATUS_ACTIVE.to_string(),
        ..EquipmentPayload::default()
    }
}

/// One rendered equipment card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentCard {
    pub id: ResourceId,
    pub name: String,
    pub status: String,
    pub status_class: String,
    pub equipment_type: String,
    pub location: String,
    pub description: Option<String>,
    pub edit_label: String,
    pub delete_label: String,
}

impl From<&Equipment> for EquipmentCard {
    fn from(equipment: &Equipment) -> Self {
        Self {
            id: equipment.id.clone(),
            name: equipment.name.clone(),
            status: equipment.status.clone(),
            status_class: equipment.status_class(),
            equipment_type: equipment.equipment_type.clone(),
            location: equipment.location.clone(),
            description: equipment.description().map(str::to_string),
            edit_label: format!("Editar equipamento {}", equipment.name),
            delete_label: format!("Excluir equipamento {}", equipment.name),
        }
    }
}

/// State of the equipments page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentsViewModel {
    all_equipments: Vec<Equipment>,
    rendered: Vec<Equipment>,
    filter: EquipmentFilter,
    type_options: Vec<String>,
    modal: Option<EquipmentModal>,
    notification: Option<Notification>,
    confirmation: Option<Confirmation<ResourceId>>,
}

impl EquipmentsViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the outcome of `GET /equipments`.
    ///
    /// On success the snapshot is replaced and rendered in full, and the type
    /// options are rebuilt, which clears the selected type. The search and
    /// status criteria are kept but only take effect on the next filter change.
    /// On failure the list is left untouched.
    pub fn loaded(&mut self, result: Result<Vec<Equipment>, ApiError>) {
        match result {
            Ok(equipments) => {
                self.type_options = equipment::distinct_types(&equipments);
                self.filter.equipment_type.clear();
                self.rendered.clone_from(&equipments);
                self.all_equipments = equipments;
            }
            Err(err) => {
                tracing::warn!(error = %err, "equipment list unavailable");
                self.notification = Some(Notification::from_api_error(&err, text::LOAD_FAILED));
            }
        }
    }

    #[must_use]
    pub fn all_equipments(&self) -> &[Equipment] {
        &self.all_equipments
    }

    /// Equipments currently shown, in snapshot order.
    #[must_use]
    pub fn rendered(&self) -> &[Equipment] {
        &self.rendered
    }

    #[must_use]
    pub fn list_view(&self) -> ListView<EquipmentCard> {
        ListView::build(
            &self.rendered,
            text::EMPTY_TITLE,
            text::EMPTY_HINT,
            |e| EquipmentCard::from(e),
        )
    }

    #[must_use]
    pub fn filter(&self) -> &EquipmentFilter {
        &self.filter
    }

    /// Replace the criteria and re-filter the snapshot.
    pub fn set_filter(&mut self, filter: EquipmentFilter) {
        self.filter = filter;
        self.rendered = self.filter.apply(&self.all_equipments);
    }

    pub fn set_search(&mut self, search: &str) {
        self.update_filter(|f| f.search = search.to_string());
    }

    pub fn set_status_filter(&mut self, status: &str) {
        self.update_filter(|f| f.status = status.to_string());
    }

    pub fn set_type_filter(&mut self, equipment_type: &str) {
        self.update_filter(|f| f.equipment_type = equipment_type.to_string());
    }

    fn update_filter(&mut self, change: impl FnOnce(&mut EquipmentFilter)) {
        let mut filter = self.filter.clone();
        change(&mut filter);
        self.set_filter(filter);
    }

    /// Distinct types of the last loaded snapshot, sorted. The UI prepends the
    /// "all types" option.
    #[must_use]
    pub fn type_options(&self) -> &[String] {
        &self.type_options
    }

    #[must_use]
    pub fn modal(&self) -> Option<&EquipmentModal> {
        self.modal.as_ref()
    }

    /// Form fields of the open modal, for two-way binding.
    pub fn form_mut(&mut self) -> Option<&mut EquipmentPayload> {
        self.modal.as_mut().map(|m| &mut m.form)
    }

    /// Open an empty form in create mode.
    pub fn show_modal(&mut self) {
        self.modal = Some(EquipmentModal::create());
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// The request to issue for the open form, if any.
    #[must_use]
    pub fn submission(&self) -> Option<(FormMode, EquipmentPayload)> {
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

    /// Apply the outcome of `GET /equipments/{id}`: open the filled form in
    /// edit mode, or report the failure.
    pub fn edit_loaded(&mut self, id: ResourceId, result: Result<Equipment, ApiError>) {
        match result {
            Ok(equipment) => {
                self.modal = Some(EquipmentModal {
                    mode: FormMode::Edit(id),
                    form: EquipmentPayload::from(&equipment),
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

    /// Dismiss the confirmation without deleting anything.
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
    use crate::viewmodels::notification::NotificationKind;

    fn equipment(id: u64, name: &str, kind: &str, status: &str) -> Equipment {
        Equipment {
            id: ResourceId::from(id),
            name: name.to_string(),
            equipment_type: kind.to_string(),
            description: None,
            location: "Galpão A".to_string(),
            status: status.to_string(),
        }
    }

    fn snapshot() -> Vec<Equipment> {
        vec![
            equipment(1, "Torno CNC", "Usinagem", "Ativo"),
            equipment(2, "Prensa 01", "Prensa", "Manutenção"),
            equipment(3, "Fresadora", "Usinagem", "Ativo"),
        ]
    }

    fn loaded_vm() -> EquipmentsViewModel {
        let mut vm = EquipmentsViewModel::new();
        vm.loaded(Ok(snapshot()));
        vm
    }

    #[test]
    fn should_render_empty_state_when_snapshot_is_empty() {
        let mut vm = EquipmentsViewModel::new();
        vm.loaded(Ok(Vec::new()));
        assert_eq!(
            vm.list_view(),
            ListView::Empty {
                title: "Nenhum equipamento encontrado",
                hint: "Clique em \"Adicionar Equipamento\" para criar o primeiro equipamento.",
            }
        );
    }

    #[test]
    fn should_render_one_card_per_equipment() {
        let vm = loaded_vm();
        let ListView::Cards(cards) = vm.list_view() else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].status_class, "manutenmaintenance");
        assert_eq!(cards[0].edit_label, "Editar equipamento Torno CNC");
        assert_eq!(cards[0].delete_label, "Excluir equipamento Torno CNC");
        assert_eq!(cards[0].description, None);
    }

    #[test]
    fn should_rebuild_sorted_type_options_when_loaded() {
        let mut vm = loaded_vm();
        vm.set_type_filter("Prensa");

        vm.loaded(Ok(snapshot()));

        assert_eq!(vm.type_options(), ["Prensa", "Usinagem"]);
        assert_eq!(vm.filter().equipment_type, "");
    }

    #[test]
    fn should_render_full_list_after_reload_even_with_active_search() {
        let mut vm = loaded_vm();
        vm.set_search("torno");
        assert_eq!(vm.rendered().len(), 1);

        vm.loaded(Ok(snapshot()));

        assert_eq!(vm.rendered().len(), 3);
        assert_eq!(vm.filter().search, "torno");
    }

    #[test]
    fn should_combine_filters_when_several_are_set() {
        let mut vm = loaded_vm();
        vm.set_type_filter("Usinagem");
        vm.set_status_filter("Ativo");
        vm.set_search("fresa");

        let names: Vec<_> = vm.rendered().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Fresadora"]);
        assert_eq!(vm.all_equipments().len(), 3);
    }

    #[test]
    fn should_keep_list_when_load_fails() {
        let mut vm = loaded_vm();

        vm.loaded(Err(ApiError::Http {
            status: 500,
            message: None,
        }));

        assert_eq!(vm.rendered().len(), 3);
        let notification = vm.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Não foi possível carregar os equipamentos.");
    }

    #[test]
    fn should_open_blank_create_form_when_adding() {
        let mut vm = loaded_vm();
        vm.show_modal();

        let modal = vm.modal().unwrap();
        assert_eq!(modal.title(), "Adicionar Equipamento");
        assert_eq!(modal.mode, FormMode::Create);
        assert_eq!(modal.form.name, "");
        assert_eq!(modal.form.status, "Ativo");
    }

    #[test]
    fn should_submit_form_fields_in_current_mode() {
        let mut vm = loaded_vm();
        vm.show_modal();
        vm.form_mut().unwrap().name = "Serra".to_string();

        let (mode, payload) = vm.submission().unwrap();

        assert_eq!(mode, FormMode::Create);
        assert_eq!(payload.name, "Serra");
    }

    #[test]
    fn should_have_nothing_to_submit_when_modal_closed() {
        let mut vm = loaded_vm();
        vm.show_modal();
        vm.close_modal();
        assert!(vm.submission().is_none());
    }

    #[test]
    fn should_open_filled_edit_form_when_record_fetched() {
        let mut vm = loaded_vm();
        let mut record = equipment(2, "Prensa 01", "Prensa", "Manutenção");
        record.description = Some("Hidráulica".to_string());

        vm.edit_loaded(ResourceId::from(2), Ok(record));

        let modal = vm.modal().unwrap();
        assert_eq!(modal.title(), "Editar Equipamento");
        assert_eq!(modal.mode, FormMode::Edit(ResourceId::from(2)));
        assert_eq!(modal.form.description, "Hidráulica");
    }

    #[test]
    fn should_report_fetch_failure_when_edit_record_unavailable() {
        let mut vm = loaded_vm();
        vm.edit_loaded(
            ResourceId::from(9),
            Err(ApiError::Http {
                status: 404,
                message: None,
            }),
        );
        assert!(vm.modal().is_none());
        assert_eq!(
            vm.notification().unwrap().message,
            "Não foi possível carregar os dados do equipamento."
        );
    }

    #[test]
    fn should_close_modal_and_reload_when_save_succeeds() {
        let mut vm = loaded_vm();
        vm.edit_loaded(ResourceId::from(1), Ok(snapshot()[0].clone()));
        let (mode, _) = vm.submission().unwrap();

        let reload = vm.saved(&mode, Ok(()));

        assert!(reload);
        assert!(vm.modal().is_none());
        assert_eq!(
            vm.notification().unwrap().message,
            "Equipamento atualizado com sucesso!"
        );
    }

    #[test]
    fn should_keep_modal_open_when_save_fails() {
        let mut vm = loaded_vm();
        vm.show_modal();

        let reload = vm.saved(
            &FormMode::Create,
            Err(ApiError::Transport("offline".to_string())),
        );

        assert!(!reload);
        assert!(vm.modal().is_some());
        assert_eq!(vm.notification().unwrap().title, "Erro de Conexão");
    }

    #[test]
    fn should_only_yield_delete_target_after_confirm() {
        let mut vm = loaded_vm();
        vm.request_delete(ResourceId::from(5));
        assert_eq!(vm.confirmation().unwrap().title, "Excluir Equipamento");

        assert_eq!(vm.confirm(), Some(ResourceId::from(5)));
        assert!(vm.confirmation().is_none());
        assert_eq!(vm.confirm(), None);
    }

    #[test]
    fn should_yield_nothing_when_delete_cancelled() {
        let mut vm = loaded_vm();
        vm.request_delete(ResourceId::from(5));

        vm.cancel();

        assert!(vm.confirmation().is_none());
        assert_eq!(vm.confirm(), None);
    }

    #[test]
    fn should_report_delete_outcome() {
        let mut vm = loaded_vm();
        assert!(vm.deleted(Ok(())));
        assert_eq!(
            vm.notification().unwrap().message,
            "Equipamento excluído com sucesso!"
        );

        vm.dismiss_notification();
        assert!(!vm.deleted(Err(ApiError::Http {
            status: 500,
            message: None,
        })));
        assert_eq!(
            vm.notification().unwrap().message,
            "Não foi possível excluir o equipamento."
        );
    }
}
