//! Dashboard Page
//!
//! Composes the insights headline and the time-series chart. The two cards
//! fetch independently and neither waits for the other.

use leptos::*;

use crate::components::{InsightCard, TimeSeriesChart};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <section class="card">
                <InsightCard />
            </section>

            <section class="card">
                <TimeSeriesChart />
            </section>
        </div>
    }
}
