use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_app().session;

    view! {
        <header class="header">
            <nav class="nav" aria-label="Navegação principal">
                <span class="brand">"Maintrack"</span>
                <ul>
                    <li><a href="/">"Dashboard"</a></li>
                    <li><a href="/equipments">"Equipamentos"</a></li>
                    <li><a href="/maintenances">"Manutenções"</a></li>
                </ul>
                <button id="logoutBtn" class="btn-logout" on:click=move |_| session.logout()>
                    "Sair"
                </button>
            </nav>
        </header>
    }
}
