//! ==============================================================================
//! websites_list.rs - paginated website table
//! ==============================================================================
//!
//! one `WebsitesQuery` signal drives the view: the effect below re-fetches
//! whenever it changes. rows from the last successful fetch stay on screen
//! when a later fetch fails.
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use shared::pagination::{active_filter_value, parse_active_filter, parse_limit, LIMIT_OPTIONS};
use shared::paths;
use shared::{RequestSeq, Website, WebsitesQuery};

use crate::api;
use crate::components::{use_toasts, Loading, Paginator, StatusIcon};

#[component]
pub fn WebsitesList() -> impl IntoView {
    let toasts = use_toasts();

    let query = RwSignal::new(WebsitesQuery::default());
    let websites = RwSignal::new(Vec::<Website>::new());
    let total = RwSignal::new(0u64);
    let fetching = RwSignal::new(true);
    let seq = RwSignal::new(RequestSeq::default());

    // fetch on mount and on every page / limit / filter change
    Effect::new(move || {
        let q = query.get();
        let Some(ticket) = seq.try_update(|s| s.begin()) else {
            return;
        };
        fetching.set(true);
        log::debug!("fetching websites: {}", q.to_query_string());

        leptos::task::spawn_local(async move {
            let result = api::get_websites(&q).await;

            if !seq.try_with_untracked(|s| s.is_current(ticket)).unwrap_or(false) {
                log::debug!("dropping stale websites response for page {}", q.page);
                return;
            }

            match result {
                Ok(page) => {
                    websites.set(page.websites);
                    total.set(page.total);
                }
                Err(e) => {
                    log::error!("websites fetch failed: {e}");
                    toasts.error("Error while fetching websites", false);
                }
            }
            fetching.set(false);
        });
    });

    view! {
        <Title text="Websites"/>
        <div class="admin-table websites">
            <h2>"Websites"</h2>

            <div class="filters-container websites">
                <div class="filter">
                    <select
                        class="filter-select"
                        on:change=move |ev| {
                            let active = parse_active_filter(&event_target_value(&ev));
                            query.update(|q| *q = q.with_active(active));
                        }
                    >
                        <option value=active_filter_value(None)>"Filter by status"</option>
                        <option value=active_filter_value(Some(true))>"Active"</option>
                        <option value=active_filter_value(Some(false))>"Inactive"</option>
                    </select>
                </div>
                <div class="filter new-button">
                    <A href=paths::NEW_WEBSITE>
                        <span class="button">"Create new"</span>
                    </A>
                </div>
            </div>

            <div class="secondary-filters">
                "Results per page: "
                <select on:change=move |ev| {
                    let limit = parse_limit(&event_target_value(&ev));
                    query.update(|q| *q = q.with_limit(limit));
                }>
                    {LIMIT_OPTIONS.iter().map(|limit| view! {
                        <option value=limit.to_string()>{*limit}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            {move || {
                if fetching.get() {
                    return view! {
                        <div class="table-section">
                            <TableHeaders/>
                            <Loading/>
                        </div>
                    }.into_any();
                }

                let rows = websites.get();
                if rows.is_empty() {
                    return view! { <div class="no-results">"No Websites found"</div> }.into_any();
                }

                view! {
                    <div class="table-section">
                        <TableHeaders/>
                        <div class="admin-table-row website-table">
                            {rows.into_iter().enumerate().map(|(index, website)| view! {
                                <WebsiteRow index=index website=website/>
                            }).collect::<Vec<_>>()}
                        </div>
                        <Show when=move || query.with(|q| q.needs_pagination(total.get()))>
                            <Paginator query=query total=total/>
                        </Show>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn TableHeaders() -> impl IntoView {
    view! {
        <div class="row table-header">
            <div class="col-md-3">"ClaimName"</div>
            <div class="col-md-5">"Total / Claimed"</div>
            <div class="col-md-1 center">"Captcha"</div>
            <div class="col-md-1 center">"Active"</div>
            <div class="col-md-1"></div>
        </div>
    }
}

#[component]
fn WebsiteRow(index: usize, website: Website) -> impl IntoView {
    let edit_href = paths::edit_website(&website.claim_name);
    let deliveries = website.deliveries_summary();

    view! {
        <div class={if index % 2 == 0 { "row even" } else { "row odd" }}>
            <div class="col-md-3 ellipsis">{website.claim_name}</div>
            <div class="col-md-5 ellipsis">{deliveries}</div>
            <div class="col-md-1 center status">
                <StatusIcon on=website.captcha on_label="Enabled" off_label="Disabled"/>
            </div>
            <div class="col-md-1 center status">
                <StatusIcon on=website.active on_label="Active" off_label="Inactive"/>
            </div>
            <div class="col-md-1 center edit-icon-container">
                <A href=edit_href>
                    <span class="edit-icon" title="Edit website">"✏️"</span>
                </A>
            </div>
        </div>
    }
}
