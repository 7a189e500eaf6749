//! App Root Component
//!
//! Application shell: static heading, routes, and the API status footer.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="shell">
                <header class="shell-header">
                    <h1>"Mental Health Dashboard"</h1>
                </header>

                <main class="shell-main">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer showing API reachability, probed once on startup
#[component]
fn Footer() -> impl IntoView {
    let (connected, set_connected) = create_signal(None::<bool>);

    create_effect(move |_| {
        spawn_local(async move {
            let healthy = matches!(api::check_health().await, Ok(h) if h.status == "ok");
            set_connected.set(Some(healthy));
        });
    });

    view! {
        <footer class="shell-footer">
            {move || match connected.get() {
                None => view! {
                    <span class="status status-unknown">"Checking API..."</span>
                }.into_view(),
                Some(true) => view! {
                    <span class="status status-ok">"API connected"</span>
                }.into_view(),
                Some(false) => view! {
                    <span class="status status-down">"API unreachable"</span>
                }.into_view(),
            }}
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="not-found-link">"Go to Dashboard"</A>
        </div>
    }
}
