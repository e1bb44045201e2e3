//! Cancel/Confirm dialog guarding a destructive action.

use leptos::prelude::*;

#[component]
pub fn ConfirmationModal(
    /// Title and message of the pending confirmation, if any.
    #[prop(into)]
    prompt: Signal<Option<(String, String)>>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    move || {
        prompt.get().map(|(title, message)| {
            view! {
                <div class="confirmation-modal show" role="alertdialog" aria-modal="true">
                    <div class="confirmation-content">
                        <h3 class="confirmation-title">{title}</h3>
                        <p class="confirmation-message">{message}</p>
                        <div class="confirmation-actions">
                            <button class="btn-secondary" on:click=move |_| on_cancel.run(())>
                                "Cancelar"
                            </button>
                            <button class="btn-danger" on:click=move |_| on_confirm.run(())>
                                "Confirmar"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
