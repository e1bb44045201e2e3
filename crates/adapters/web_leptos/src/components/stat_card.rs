//! Stat card component for displaying a labelled counter.

use leptos::prelude::*;

/// A card displaying a label and a reactive count.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Extra CSS class, e.g. `pending`.
    #[prop(optional)]
    variant: &'static str,
    /// The count to display.
    #[prop(into)]
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {variant}")>
            <span class="stat-label">{label}</span>
            <span class="stat-value" aria-live="polite">{value}</span>
        </div>
    }
}
