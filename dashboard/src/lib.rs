//! ==============================================================================
//! lib.rs - Websites Backoffice Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm admin panel for claim websites. lists websites page by
//!     page, creates new ones with their claim urls, and edits the claim
//!     window and toggles of existing ones.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the websites api via fetch
//!     - form and list logic lives in the `shared` crate
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use shared::paths;
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod config;

use components::{Header, Toaster, Toasts, WebsiteForm, WebsitesList};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(config::log_level());
    log::info!("websites backoffice, api at {}", config::API_BASE);
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    Toasts::provide();

    view! {
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=paths::WEBSITES/> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("websites"))
                        view=WebsitesList
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("websites"), StaticSegment("new"))
                        view=WebsiteForm
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("websites"), ParamSegment("claim_name"))
                        view=WebsiteForm
                    />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
