use leptos::prelude::*;
use leptos::task::spawn_local;
use maintrack_app::viewmodels::dashboard::DashboardViewModel;

use crate::components::{Nav, StatCard};
use crate::context::use_app;

/// Dashboard page with the equipment and maintenance counters.
#[component]
pub fn Dashboard() -> impl IntoView {
    let app = use_app();
    if app.session.check_auth().is_none() {
        return ().into_any();
    }

    let vm = RwSignal::new(DashboardViewModel::new());
    let service = app.dashboard_service();
    spawn_local(async move {
        let result = service.load_counts().await;
        vm.update(|v| v.apply(result));
    });

    let count = move |pick: fn(&DashboardViewModel) -> usize| Signal::derive(move || vm.with(pick));

    view! {
        <Nav/>
        <main class="main-content">
            <h1>"Dashboard"</h1>
            <section class="stats-section" aria-label="Equipamentos">
                <h2>"Equipamentos"</h2>
                <div class="stats-grid">
                    <StatCard label="Total de Equipamentos" value=count(|v| v.equipments.total)/>
                    <StatCard label="Ativos" variant="active" value=count(|v| v.equipments.active)/>
                    <StatCard
                        label="Em Manutenção"
                        variant="maintenance"
                        value=count(|v| v.equipments.under_maintenance)
                    />
                </div>
            </section>
            <section class="stats-section" aria-label="Manutenções">
                <h2>"Manutenções"</h2>
                <div class="stats-grid">
                    <StatCard label="Total de Manutenções" value=count(|v| v.maintenances.total)/>
                    <StatCard label="Pendentes" variant="pending" value=count(|v| v.maintenances.pending)/>
                    <StatCard
                        label="Em Andamento"
                        variant="in-progress"
                        value=count(|v| v.maintenances.in_progress)
                    />
                    <StatCard
                        label="Concluídas"
                        variant="completed"
                        value=count(|v| v.maintenances.completed)
                    />
                </div>
            </section>
        </main>
    }
    .into_any()
}
