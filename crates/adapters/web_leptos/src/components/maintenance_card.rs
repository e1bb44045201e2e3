//! Card for one maintenance of the list.

use leptos::prelude::*;
use maintrack_app::viewmodels::maintenances::MaintenanceCard as Card;
use maintrack_domain::id::ResourceId;

#[component]
pub fn MaintenanceCard(
    card: Card,
    #[prop(into)] on_edit: Callback<ResourceId>,
    #[prop(into)] on_delete: Callback<ResourceId>,
) -> impl IntoView {
    let edit_id = card.id.clone();
    let delete_id = card.id;

    view! {
        <article class="maintenance-card" role="listitem">
            <div class="maintenance-header">
                <h3 class="maintenance-title">{card.title}</h3>
                <div class="maintenance-status">
                    <span class=format!("status-badge {}", card.status_class)>{card.status_label}</span>
                </div>
            </div>
            <div class="maintenance-info">
                <div class="info-item">
                    <span class="info-label">"Data"</span>
                    <span class="info-value">{card.date}</span>
                </div>
                {card.technician.map(|name| view! {
                    <div class="info-item">
                        <span class="info-label">"Técnico"</span>
                        <span class="info-value">{name}</span>
                    </div>
                })}
                <div class="info-item">
                    <span class="info-label">"Tipo"</span>
                    <span class="info-value">{card.equipment_type}</span>
                </div>
            </div>
            <div class="maintenance-description">{card.description}</div>
            <div class="maintenance-actions">
                <button class="btn-edit" aria-label=card.edit_label on:click=move |_| on_edit.run(edit_id.clone())>
                    "Editar"
                </button>
                <button class="btn-delete" aria-label=card.delete_label on:click=move |_| on_delete.run(delete_id.clone())>
                    "Excluir"
                </button>
            </div>
        </article>
    }
}
