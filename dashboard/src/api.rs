//! ==============================================================================
//! api.rs - API client for the websites backend
//! ==============================================================================
//!
//! api:
//!     GET  /websites?limit=&offset=[&active=]   -> WebsitesPage
//!     GET  /websites/:claimName                 -> Website
//!     GET  /websites/:claimName/claim-urls      -> [WebsiteClaimUrl]
//!     POST /websites                            WebsitePayload -> Website
//!     PUT  /websites/:claimName                 WebsitePayload -> Website
//!
//! non-2xx responses are read as {"message": "..."} when possible.
//!
//! ==============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::paths::encode_segment;
use shared::{ApiError, Website, WebsiteClaimUrl, WebsitePayload, WebsitesPage, WebsitesQuery};

use crate::config::API_BASE;

// ==============================================================================
// API functions
// ==============================================================================

/// Fetch one website by claim name
pub async fn get_website(claim_name: &str) -> Result<Website, ApiError> {
    let response = Request::get(&website_url(claim_name))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Fetch the claim urls of one website
pub async fn get_website_claim_urls(claim_name: &str) -> Result<Vec<WebsiteClaimUrl>, ApiError> {
    let response = Request::get(&format!("{}/claim-urls", website_url(claim_name)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Fetch one page of websites
pub async fn get_websites(query: &WebsitesQuery) -> Result<WebsitesPage, ApiError> {
    let response = Request::get(&format!("{}/websites?{}", API_BASE, query.to_query_string()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Create a website together with its claim urls
pub async fn create_website(payload: &WebsitePayload) -> Result<Website, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = Request::post(&format!("{}/websites", API_BASE))
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Update schedule and toggles of an existing website
pub async fn update_website(payload: &WebsitePayload) -> Result<Website, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = Request::put(&website_url(&payload.claim_name))
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

// ==============================================================================
// helpers
// ==============================================================================

fn website_url(claim_name: &str) -> String {
    format!("{}/websites/{}", API_BASE, encode_segment(claim_name))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} {} -> {}", response.url(), status, body);
        return Err(ApiError::from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
