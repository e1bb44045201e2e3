use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod navigation;
mod pages;
pub mod storage;

use config::Config;
use context::AppContext;
use pages::{Dashboard, Equipments, Login, Maintenances, NotFound};

/// Root application component.
#[component]
pub fn App(
    /// Loaded configuration.
    config: Config,
) -> impl IntoView {
    provide_context(AppContext::new(&config));

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/login") view=Login/>
                <Route path=path!("/") view=Dashboard/>
                <Route path=path!("/equipments") view=Equipments/>
                <Route path=path!("/maintenances") view=Maintenances/>
            </Routes>
        </Router>
    }
}
