use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use maintrack_app::messages::equipment as text;
use maintrack_app::viewmodels::equipments::{EquipmentModal, EquipmentsViewModel};
use maintrack_app::viewmodels::list::ListView;
use maintrack_domain::equipment::STATUS_OPTIONS;
use maintrack_domain::id::ResourceId;

use super::form_field;
use crate::components::{ConfirmationModal, EquipmentCard, Modal, Nav, NotificationModal};
use crate::context::use_app;

/// Equipment list with filters, add/edit modal and delete confirmation.
#[component]
pub fn Equipments() -> impl IntoView {
    let app = use_app();
    if app.session.check_auth().is_none() {
        return ().into_any();
    }

    let vm = RwSignal::new(EquipmentsViewModel::new());
    let service = StoredValue::new(app.equipment_service());

    let reload = move || {
        let service = service.get_value();
        spawn_local(async move {
            let result = service.list_equipments().await;
            vm.update(|v| v.loaded(result));
        });
    };
    reload();

    let list_view = Memo::new(move |_| vm.with(EquipmentsViewModel::list_view));
    let type_options = Memo::new(move |_| vm.with(|v| v.type_options().to_vec()));
    let type_filter = Memo::new(move |_| vm.with(|v| v.filter().equipment_type.clone()));
    let modal_title = Memo::new(move |_| vm.with(|v| v.modal().map(EquipmentModal::title)));
    let notification = Memo::new(move |_| vm.with(|v| v.notification().cloned()));
    let confirmation = Memo::new(move |_| {
        vm.with(|v| {
            v.confirmation()
                .map(|c| (c.title.clone(), c.message.clone()))
        })
    });

    let (name, set_name) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.name),
        |v| v.form_mut().map(|f| &mut f.name),
    );
    let (equipment_type, set_equipment_type) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.equipment_type),
        |v| v.form_mut().map(|f| &mut f.equipment_type),
    );
    let (location, set_location) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.location),
        |v| v.form_mut().map(|f| &mut f.location),
    );
    let (description, set_description) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.description),
        |v| v.form_mut().map(|f| &mut f.description),
    );
    let (status, set_status) = form_field(
        vm,
        |v| v.modal().map(|m| &m.form.status),
        |v| v.form_mut().map(|f| &mut f.status),
    );

    let on_edit = Callback::new(move |id: ResourceId| {
        let service = service.get_value();
        spawn_local(async move {
            let result = service.get_equipment(&id).await;
            vm.update(|v| v.edit_loaded(id, result));
        });
    });
    let on_delete = Callback::new(move |id: ResourceId| vm.update(|v| v.request_delete(id)));
    let on_confirm = Callback::new(move |()| {
        let Some(id) = vm.try_update(EquipmentsViewModel::confirm).flatten() else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.delete_equipment(&id).await;
            if vm.try_update(|v| v.deleted(result)).unwrap_or(false) {
                reload();
            }
        });
    });
    let on_cancel = Callback::new(move |()| vm.update(EquipmentsViewModel::cancel));
    let on_dismiss = Callback::new(move |()| vm.update(EquipmentsViewModel::dismiss_notification));
    let on_close = Callback::new(move |()| vm.update(EquipmentsViewModel::close_modal));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((mode, payload)) = vm.with_untracked(EquipmentsViewModel::submission) else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.save_equipment(&mode, &payload).await;
            if vm.try_update(|v| v.saved(&mode, result)).unwrap_or(false) {
                reload();
            }
        });
    };

    view! {
        <Nav/>
        <main class="main-content">
            <div class="page-header">
                <h1>"Equipamentos"</h1>
                <button class="btn-primary" on:click=move |_| vm.update(EquipmentsViewModel::show_modal)>
                    {text::TITLE_ADD}
                </button>
            </div>

            <div class="filters">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Buscar equipamentos..."
                    aria-label="Buscar equipamentos"
                    on:input=move |ev| vm.update(|v| v.set_search(&event_target_value(&ev)))
                />
                <select
                    id="statusFilter"
                    aria-label="Filtrar por status"
                    on:change=move |ev| vm.update(|v| v.set_status_filter(&event_target_value(&ev)))
                >
                    <option value="">{text::ALL_STATUSES}</option>
                    {STATUS_OPTIONS
                        .into_iter()
                        .map(|s| view! { <option value=s>{s}</option> })
                        .collect_view()}
                </select>
                <select
                    id="typeFilter"
                    aria-label="Filtrar por tipo"
                    on:change=move |ev| vm.update(|v| v.set_type_filter(&event_target_value(&ev)))
                >
                    <option value="" selected=move || type_filter.get().is_empty()>
                        {text::ALL_TYPES}
                    </option>
                    {move || {
                        type_options
                            .get()
                            .into_iter()
                            .map(|t| {
                                let selected = t.clone();
                                view! {
                                    <option
                                        value=t.clone()
                                        selected=move || type_filter.get() == selected
                                    >
                                        {t}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div id="equipmentsList" class="equipments-grid" role="list" aria-live="polite">
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
                        .map(|card| view! { <EquipmentCard card=card on_edit=on_edit on_delete=on_delete/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </main>

        {move || {
            modal_title.get().map(|title| view! {
                <Modal title=title on_close=on_close>
                    <form id="equipmentForm" on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Nome"</label>
                            <input
                                id="name"
                                type="text"
                                required
                                prop:value=name
                                on:input=move |ev| set_name(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="type">"Tipo"</label>
                            <input
                                id="type"
                                type="text"
                                required
                                prop:value=equipment_type
                                on:input=move |ev| set_equipment_type(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="location">"Localização"</label>
                            <input
                                id="location"
                                type="text"
                                required
                                prop:value=location
                                on:input=move |ev| set_location(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="status">"Status"</label>
                            <select id="status" on:change=move |ev| set_status(event_target_value(&ev))>
                                {STATUS_OPTIONS
                                    .into_iter()
                                    .map(|s| view! {
                                        <option value=s selected=move || status.get() == s>{s}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="description">"Descrição"</label>
                            <textarea
                                id="description"
                                rows="3"
                                prop:value=description
                                on:input=move |ev| set_description(event_target_value(&ev))
                            ></textarea>
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
