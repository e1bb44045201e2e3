use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use maintrack_app::ports::{Navigator, Page};
use maintrack_app::viewmodels::auth::{AuthPanel, AuthViewModel, FollowUp};

use super::sleep;
use crate::context::{WebSession, use_app};

/// Login and registration forms. Only one of them is visible at a time.
#[component]
pub fn Login() -> impl IntoView {
    let app = use_app();
    if app.session.redirect_if_authenticated() {
        return ().into_any();
    }

    let service = StoredValue::new(app.auth_service());
    let session = StoredValue::new(app.session);
    let vm = RwSignal::new(AuthViewModel::new());

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let register_name = RwSignal::new(String::new());
    let register_email = RwSignal::new(String::new());
    let register_password = RwSignal::new(String::new());

    let panel = Memo::new(move |_| vm.with(AuthViewModel::panel));
    let login_first = NodeRef::<html::Input>::new();
    let register_first = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        let target = match panel.get() {
            AuthPanel::Login => login_first,
            AuthPanel::Register => register_first,
        };
        request_animation_frame(move || {
            if let Some(input) = target.get_untracked() {
                let _ = input.focus();
            }
        });
    });

    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = login_email.get_untracked();
        let password = login_password.get_untracked();
        let Some(credentials) = vm.try_update(|v| v.begin_login(&email, &password)).flatten()
        else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.login(&credentials).await;
            let follow_up = vm.try_update(|v| v.finish_login(result)).flatten();
            run_follow_up(follow_up, vm, session.get_value()).await;
        });
    };

    let on_register = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = register_name.get_untracked();
        let email = register_email.get_untracked();
        let password = register_password.get_untracked();
        let Some(registration) = vm
            .try_update(|v| v.begin_register(&name, &email, &password))
            .flatten()
        else {
            return;
        };
        let service = service.get_value();
        spawn_local(async move {
            let result = service.register(&registration).await;
            let follow_up = vm.try_update(|v| v.finish_register(result)).flatten();
            run_follow_up(follow_up, vm, session.get_value()).await;
        });
    };

    let banner = move || {
        vm.with(|v| {
            v.banner()
                .map(|b| view! { <div class=b.class() role="alert">{b.text.clone()}</div> })
        })
    };

    view! {
        <main class="auth-container">
            <div class="auth-card">
                <h1 class="auth-title">"Maintrack"</h1>
                {banner}
                <form
                    id="loginForm"
                    class="auth-form"
                    class:hidden=move || panel.get() != AuthPanel::Login
                    on:submit=on_login
                >
                    <div class="form-group">
                        <label for="loginEmail">"E-mail"</label>
                        <input id="loginEmail" type="email" node_ref=login_first bind:value=login_email/>
                    </div>
                    <div class="form-group">
                        <label for="loginPassword">"Senha"</label>
                        <input id="loginPassword" type="password" bind:value=login_password/>
                    </div>
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || vm.with(AuthViewModel::login_busy)
                    >
                        {move || vm.with(AuthViewModel::login_button_label)}
                    </button>
                    <p class="auth-switch">
                        "Não tem uma conta? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            vm.update(AuthViewModel::show_register);
                        }>"Cadastre-se"</a>
                    </p>
                </form>
                <form
                    id="registerForm"
                    class="auth-form"
                    class:hidden=move || panel.get() != AuthPanel::Register
                    on:submit=on_register
                >
                    <div class="form-group">
                        <label for="registerName">"Nome"</label>
                        <input id="registerName" type="text" node_ref=register_first bind:value=register_name/>
                    </div>
                    <div class="form-group">
                        <label for="registerEmail">"E-mail"</label>
                        <input id="registerEmail" type="email" bind:value=register_email/>
                    </div>
                    <div class="form-group">
                        <label for="registerPassword">"Senha"</label>
                        <input id="registerPassword" type="password" bind:value=register_password/>
                    </div>
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || vm.with(AuthViewModel::register_busy)
                    >
                        {move || vm.with(AuthViewModel::register_button_label)}
                    </button>
                    <p class="auth-switch">
                        "Já tem uma conta? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            vm.update(AuthViewModel::show_login);
                        }>"Entrar"</a>
                    </p>
                </form>
            </div>
        </main>
    }
    .into_any()
}

async fn run_follow_up(follow_up: Option<FollowUp>, vm: RwSignal<AuthViewModel>, session: WebSession) {
    match follow_up {
        Some(FollowUp::GoToDashboard { after }) => {
            sleep(after).await;
            session.navigator().navigate(Page::Dashboard);
        }
        Some(FollowUp::ShowLogin { after }) => {
            sleep(after).await;
            vm.update(AuthViewModel::show_login);
        }
        None => {}
    }
}
