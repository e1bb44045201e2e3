mod dashboard;
mod equipments;
mod login;
mod maintenances;
mod not_found;

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

pub use dashboard::Dashboard;
pub use equipments::Equipments;
pub use login::Login;
pub use maintenances::Maintenances;
pub use not_found::NotFound;

/// Wait for `after` without blocking the UI thread.
pub(crate) async fn sleep(after: Duration) {
    let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
}

/// Two-way binding between an input and a text field of the open form.
///
/// The returned memo only notifies when the field itself changes, so typing
/// does not re-render the rest of the modal.
pub(crate) fn form_field<V>(
    vm: RwSignal<V>,
    get: fn(&V) -> Option<&String>,
    get_mut: fn(&mut V) -> Option<&mut String>,
) -> (Memo<String>, impl Fn(String) + Copy + 'static)
where
    V: Send + Sync + 'static,
{
    let value = Memo::new(move |_| vm.with(|v| get(v).cloned().unwrap_or_default()));
    let set = move |input: String| {
        vm.update(|v| {
            if let Some(field) = get_mut(v) {
                *field = input;
            }
        });
    };
    (value, set)
}
