use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Página não encontrada"</h1>
            <p>"A página que você procura não existe."</p>
            <p>
                <a href="/">"Voltar ao início"</a>
            </p>
        </div>
    }
}
