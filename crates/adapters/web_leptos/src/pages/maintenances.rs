use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use maintrack_app::messages::maintenance as text;
use maintrack_app::viewmodels::list::ListView;
use maintrack_app::viewmodels::maintenances::{MaintenanceModal, MaintenancesViewModel};
use maintrack_domain::id::ResourceId;
use maintrack_domain::maintenance::MaintenanceStatus;

use super::form_field;
use crate::components::{ConfirmationModal, MaintenanceCard, Modal, Nav, NotificationModal};
use crate::context::use_app;

/// `(value, label)` pairs for a `<select>`.
type Options = Vec<(String, String)>;

fn status_options() -> Options {
    MaintenanceStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

/// Maintenance list with filters, add/edit modal and delete confirmation.
///
/// The maintenances and the equipment lookup are loaded independently.
#[component]
pub fn Maintenances() -> impl IntoView {
    let app = use_app();
    if app.session.check_auth().is_none() {
        return ().into_any();
    }

    let vm = RwSignal::new(MaintenancesViewModel::new());
    let service = StoredValue::new(app.maintenance_service());

    let reload = move || {
        let service = service.get_value();
        spawn_local(async move {
            let result = service.list_maintenances().await;
            vm.update(|v| v.loaded(result));
        });
    };
    reload();
    spawn_local({
        let service = service.get_value();
        async move {
            let result = service.list_equipment_options().await;
            vm.update(|v| v.equipments_loaded(result));
        }
    });

    let list_view = Memo::new(move |_| vm.with(MaintenancesViewModel::list_view));
    let equipment_options = Memo::new(move |_| {
        vm.with(|v| {
            v.equipment_options()
                .iter()
                .map(|e| (e.id.to_string(), e.name.clone()))
                .collect::<Options>()
        })
    });
    let equipment_filter = Memo::new(move |_| vm.with(|v| v.filter().equipment_id.clone()));
    let modal_title = Memo::new(move |_| vm.with(|v| v.modal().map(MaintenanceModal::title)));
    let notification = Memo::new(move |_| vm.with(|v| v.notification().cloned()));
    let confirmation = Memo::new(move |_| {
        vm.with(|v| {
            v.confirmation()
                .map(|c| (c.title.clone(), c.message.clone()))
        })
    });

    let (equipment_id, set_equipment_id) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.equipment_id),
        |v| v.form_mut().map(|f| &mut f.equipment_id),
    );
    let (description, set_description) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.description),
        |v| v.form_mut().map(|f| &mut f.description),
    );
    let (date, set_date) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.date),
        |v| v.form_mut().map(|f| &mut f.date),
    );
    let status = Memo::new(move |_| {
        vm.with(|v| v.modal().map(|m| m.form.status.as_str().to_string()))
            .unwrap_or_default()
    });
    let set_status = move |raw: String| {
        vm.update(|v| {
            if let Some(form) = v.form_mut() {
                form.status = MaintenanceStatus::from(raw);
            }
        });
    };

    let on_edit = Callback::new(move |id: ResourceId| {
        let service = service.get_value();
        spawn_local(async move {
            let result = service.get_maintenance(&id).await;
            vm.update(|v| v.edit_loaded(id, result));
        });
    });
    let on_delete = Callback::new(move |id: ResourceId| vm.update(|v| v.request_delete(id)));
    let on_confirm = Callback::new(move |()| {
        let Some(id) = vm.try_update(MaintenancesViewModel::confirm).flatten() else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.delete_maintenance(&id).await;
            if vm.try_update(|v| v.deleted(result)).unwrap_or(false) {
                reload();
            }
        });
    });
    let on_cancel = Callback::new(move |()| vm.update(MaintenancesViewModel::cancel));
    let on_dismiss =
        Callback::new(move |()| vm.update(MaintenancesViewModel::dismiss_notification));
    let on_close = Callback::new(move |()| vm.update(MaintenancesViewModel::close_modal));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((mode, payload)) = vm.with_untracked(MaintenancesViewModel::submission) else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.save_maintenance(&mode, &payload).await;
            if vm.try_update(|v| v.saved(&mode, result)).unwrap_or(false) {
                reload();
            }
        });
    };

    view! {
        <Nav/>
        <main class="main-content">
            <div class="page-header">
                <h1>"Manutenções"</h1>
                <button class="btn-primary" on:click=move |_| vm.update(MaintenancesViewModel::show_modal)>
                    {text::TITLE_ADD}
                </button>
            </div>

            <div class="filters">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Buscar manutenções..."
                    aria-label="Buscar manutenções"
                    on:input=move |ev| vm.update(|v| v.set_search(&event_target_value(&ev)))
                />
                <select
                    id="statusFilter"
                    aria-label="Filtrar por status"
                    on:change=move |ev| vm.update(|v| v.set_status_filter(&event_target_value(&ev)))
                >
                    <option value="">{text::ALL_STATUSES}</option>
                    {status_options()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <select
                    id="equipmentFilter"
                    aria-label="Filtrar por equipamento"
                    on:change=move |ev| vm.update(|v| v.set_equipment_filter(&event_target_value(&ev)))
                >
                    <option value="" selected=move || equipment_filter.get().is_empty()>
                        {text::ALL_EQUIPMENTS}
                    </option>
                    {move || {
                        equipment_options
                            .get()
                            .into_iter()
                            .map(|(id, name)| {
                                let selected = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || equipment_filter.get() == selected
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div id="maintenancesList" class="maintenances-grid" role="list" aria-live="polite">
                {move || match list_view.get() {
                    ListView::Empty { title, hint } => view! {
                        <div class="empty-state">
                            <h3>{title}</h3>
                            <p>{hint}</p>
                        </div>
                    }
                    .into_any(),
                    ListView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <MaintenanceCard card=card on_edit=on_edit on_delete=on_delete/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </main>

        {move || {
            modal_title.get().map(|title| view! {
                <Modal title=title on_close=on_close>
                    <form id="maintenanceForm" on:submit=on_submit>
                        <div class="form-group">
                            <label for="equipmentId">"Equipamento"</label>
                            <select
                                id="equipmentId"
                                required
                                on:change=move |ev| set_equipment_id(event_target_value(&ev))
                            >
                                <option value="" selected=move || equipment_id.get().is_empty()>
                                    {text::SELECT_EQUIPMENT}
                                </option>
                                {move || {
                                    equipment_options
                                        .get()
                                        .into_iter()
                                        .map(|(id, name)| {
                                            let selected = id.clone();
                                            view! {
                                                <option
                                                    value=id
                                                    selected=move || equipment_id.get() == selected
                                                >
                                                    {name}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="description">"Descrição"</label>
                            <textarea
                                id="description"
                                rows="3"
                                required
                                prop:value=description
                                on:input=move |ev| set_description(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="form-group">
                            <label for="date">"Data"</label>
                            <input
                                id="date"
                                type="date"
                                required
                                prop:value=date
                                on:input=move |ev| set_date(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="status">"Status"</label>
                            <select id="status" on:change=move |ev| set_status(event_target_value(&ev))>
                                {status_options()
                                    .into_iter()
                                    .map(|(value, label)| {
                                        let selected = value.clone();
                                        view! {
                                            <option value=value selected=move || status.get() == selected>
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                                "Cancelar"
                            </button>
                            <button type="submit" class="btn-primary">
                                "Salvar"
                            </button>
                        </div>
                    </form>
                </Modal>
            })
        }}

        <NotificationModal notification=notification on_dismiss=on_dismiss/>
        <ConfirmationModal prompt=confirmation on_cancel=on_cancel on_confirm=on_confirm/>
    }
    .into_any()
}
