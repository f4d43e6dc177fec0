//! Check / cross icon used by the website and claim url tables

use leptos::prelude::*;

#[component]
pub fn StatusIcon(
    on: bool,
    on_label: &'static str,
    off_label: &'static str,
) -> impl IntoView {
    let label = if on { on_label } else { off_label };

    view! {
        <span class="status-icon" title=label aria-label=label>
            {if on { "✅" } else { "❌" }}
        </span>
    }
}
