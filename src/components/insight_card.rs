//! Insight Card Component
//!
//! Fetches the aggregate insights headline and renders its two fields as
//! labeled text.

use leptos::*;

use crate::api::{self, InsightsSummary};
use crate::components::loading::LoadingMessage;

/// Insight card component
///
/// Display state is `None` until the fetch resolves, then the whole payload
/// at once. Failures are logged and leave the state at `None`, which keeps
/// the loading placeholder up.
#[component]
pub fn InsightCard() -> impl IntoView {
    let (insights, set_insights) = create_signal(None::<InsightsSummary>);

    // Fetch once on mount (reads no signals, so the effect runs once)
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_insights().await {
                Ok(summary) => {
                    set_insights.set(Some(summary));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch insights: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="insight-card">
            <h2>"Weekly Insights"</h2>

            {move || match insights.get() {
                Some(data) => view! {
                    <dl class="insight-fields">
                        <div class="insight-field">
                            <dt>"Summary"</dt>
                            <dd>{data.summary}</dd>
                        </div>
                        <div class="insight-field">
                            <dt>"Date range"</dt>
                            <dd>{data.date_range}</dd>
                        </div>
                    </dl>
                }.into_view(),
                None => view! {
                    <LoadingMessage text="Loading insights..." />
                }.into_view(),
            }}
        </div>
    }
}
