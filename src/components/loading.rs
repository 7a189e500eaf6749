//! Loading Component
//!
//! Placeholder shown while a component's display state is not yet loaded.

use leptos::*;

/// Static text placeholder. A failed fetch leaves the owning component in
/// this state, so it doubles as the failure view.
#[component]
pub fn LoadingMessage(
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <p class="loading-message">{text}</p>
    }
}
