//! Card for one equipment of the list.

use leptos::prelude::*;
use maintrack_app::viewmodels::equipments::EquipmentCard as Card;
use maintrack_domain::id::ResourceId;

#[component]
pub fn EquipmentCard(
    card: Card,
    #[prop(into)] on_edit: Callback<ResourceId>,
    #[prop(into)] on_delete: Callback<ResourceId>,
) -> impl IntoView {
    let edit_id = card.id.clone();
    let delete_id = card.id;

    view! {
        <article class="equipment-card" role="listitem">
            <div class="equipment-header">
                <h3 class="equipment-title">{card.name}</h3>
                <div class="equipment-status">
                    <span class=format!("status-badge {}", card.status_class)>{card.status}</span>
                </div>
            </div>
            <div class="equipment-info">
                <div class="info-item">
                    <span class="info-label">"Tipo"</span>
                    <span class="info-value">{card.equipment_type}</span>
                </div>
                <div class="info-item">
                    <span class="info-label">"Localização"</span>
                    <span class="info-value">{card.location}</span>
                </div>
            </div>
            {card.description.map(|d| view! { <div class="equipment-description">{d}</div> })}
            <div class="equipment-actions">
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
