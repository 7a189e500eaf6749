//! Mental Health Dashboard
//!
//! Single-page dashboard for mental health trend data, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Headline insights summary for the current reporting period
//! - Multi-series time-series chart (anxiety, depression, sleep issues)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It consumes two read-only JSON endpoints on the trends API;
//! all state is component-local and discarded on reload.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
