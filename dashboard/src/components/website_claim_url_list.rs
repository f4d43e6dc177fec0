//! Read-only table of the claim urls of one website

use leptos::prelude::*;
use shared::WebsiteClaimUrl;

use crate::components::StatusIcon;

#[component]
pub fn WebsiteClaimUrlList(claim_name: String, claims: Vec<WebsiteClaimUrl>) -> impl IntoView {
    if claims.is_empty() {
        return view! { <div class="website-claimurl-list no-results">"No claim urls"</div> }.into_any();
    }

    view! {
        <div class="website-claimurl-list">
            <div class="row website-claimurl-list-title">
                <div class="col-xs-4">"Claim URL"</div>
                <div class="col-xs-2">"Created"</div>
                <div class="col-xs-2">"IP"</div>
                <div class="col-xs-2">"Claimed Time"</div>
                <div class="col-xs-1 center">"Claimed"</div>
                <div class="col-xs-1"></div>
            </div>
            {claims.into_iter().enumerate().map(|(i, claim)| {
                // the removal page is served by the host, not by this app
                let remove_href = claim.removal_path(&claim_name);
                let claimed_time = claim.claimed_time_label().to_string();
                let WebsiteClaimUrl { claim_url, time, ip, claimed, .. } = claim;
                let claim_href = claim_url.clone();

                view! {
                    <div class={if i % 2 == 0 { "row website-claimurl-list-row even" } else { "row website-claimurl-list-row odd" }}>
                        <div class="col-xs-4 ellipsis">
                            <a href=claim_href rel="noopener noreferrer" target="_blank">
                                {claim_url}
                            </a>
                        </div>
                        <div class="col-xs-2">{time}</div>
                        <div class="col-xs-2">{ip.unwrap_or_default()}</div>
                        <div class="col-xs-2">{claimed_time}</div>
                        <div class="col-xs-1 center">
                            <StatusIcon on=claimed on_label="Claimed" off_label="Pending"/>
                        </div>
                        <div class="col-xs-1 center">
                            {remove_href.map(|href| view! {
                                <a href=href rel="external">
                                    <span class="remove-icon" title="Remove claim url">"🗑️"</span>
                                </a>
                            })}
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }.into_any()
}
