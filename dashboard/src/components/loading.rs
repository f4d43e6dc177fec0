//! Loading placeholder

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            " Loading..."
        </div>
    }
}
