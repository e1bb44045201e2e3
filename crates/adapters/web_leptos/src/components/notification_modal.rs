//! Single-button notification dialog.

use leptos::prelude::*;
use maintrack_app::viewmodels::notification::{Notification, NotificationKind};

#[component]
pub fn NotificationModal(
    /// The notification to show, if any.
    #[prop(into)]
    notification: Signal<Option<Notification>>,
    /// Called when OK is clicked.
    #[prop(into)]
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notification.get().map(|n| {
            let icon = match n.kind {
                NotificationKind::Success => "\u{2713}",
                NotificationKind::Error => "\u{2715}",
            };
            view! {
                <div class="notification-modal show" role="alertdialog" aria-modal="true">
                    <div class="notification-content">
                        <div class=format!("notification-icon {}", n.kind.class())>{icon}</div>
                        <h3 class="notification-title">{n.title}</h3>
                        <p class="notification-message">{n.message}</p>
                        <button class="btn-primary" on:click=move |_| on_dismiss.run(())>"OK"</button>
                    </div>
                </div>
            }
        })
    }
}
