//! Overlay dialog hosting a resource form.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Modal overlay with a title bar and close button.
///
/// Clicking the overlay itself closes it; clicks inside the content do not.
#[component]
pub fn Modal(
    /// Title shown in the header.
    title: &'static str,
    /// Called when the close button or the overlay is clicked.
    #[prop(into)]
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_backdrop = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <div class="modal" style="display: flex" role="dialog" aria-modal="true" on:click=on_backdrop>
            <div class="modal-content">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="close" aria-label="Fechar" on:click=move |_| on_close.run(())>
                        "\u{00D7}"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
