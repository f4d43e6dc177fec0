//! Page controls for the website list

use leptos::prelude::*;
use shared::pagination::page_items;
use shared::{PageItem, WebsitesQuery};

#[component]
pub fn Paginator(query: RwSignal<WebsitesQuery>, total: RwSignal<u64>) -> impl IntoView {
    let select = move |page: u32| {
        if query.with_untracked(|q| q.page) == page {
            return;
        }
        query.update(|q| *q = q.with_page(page));
        scroll_to_top();
    };

    view! {
        <nav class="pagination">
            {move || {
                let current = query.with(|q| q.page);
                let count = query.with(|q| q.page_count(total.get()));

                view! {
                    <button
                        class="page-link"
                        disabled={current == 0}
                        on:click=move |_| select(current.saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    {page_items(current, count).into_iter().map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class={if page == current { "page-link active" } else { "page-link" }}
                                on:click=move |_| select(page)
                            >
                                {page + 1}
                            </button>
                        }.into_any(),
                        PageItem::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
                    }).collect::<Vec<_>>()}
                    <button
                        class="page-link"
                        disabled={current + 1 >= count}
                        on:click=move |_| select(current + 1)
                    >
                        "Next"
                    </button>
                }
            }}
        </nav>
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
