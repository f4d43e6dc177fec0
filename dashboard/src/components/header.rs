//! Header component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::paths;


#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Backoffice"</h1>
                <p class="subtitle">"Claim campaign websites"</p>
            </div>
            <nav class="header-nav">
                <A href=paths::WEBSITES>"Websites"</A>
                <A href=paths::NEW_WEBSITE>"New website"</A>
            </nav>
        </header>
    }
}
