//! ==============================================================================
//! website.rs - website and claim url wire types
//! ==============================================================================
//!
//! purpose:
//!     json shapes exchanged with the websites api. field names are camelCase
//!     on the wire, snake_case in rust.
//!
//! relationships:
//!     - used by: form (payload construction, edit-mode reconstruction)
//!     - used by: dashboard api client and views
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

use crate::paths;

// ==============================================================================
// website
// ==============================================================================

/// a claim campaign managed from the backoffice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    /// unique identifier, also used as the url path segment
    pub claim_name: String,
    /// creation timestamp as rendered by the api
    #[serde(default)]
    pub created: Option<String>,
    /// claim window start
    #[serde(default)]
    pub from: Option<String>,
    /// claim window end
    #[serde(default)]
    pub to: Option<String>,
    pub captcha: bool,
    pub active: bool,
    /// aggregate delivery counts, absent on freshly created websites
    #[serde(default)]
    pub deliveries_count: Option<DeliveriesCount>,
}

impl Website {
    /// "total/claimed" as shown in the list, "-" when the api sent no counts
    pub fn deliveries_summary(&self) -> String {
        match &self.deliveries_count {
            Some(count) => format!("{}/{}", count.total, count.claimed),
            None => "-".to_string(),
        }
    }
}

/// delivered vs claimed counts for one website
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveriesCount {
    pub total: u64,
    pub claimed: u64,
}

// ==============================================================================
// claim urls
// ==============================================================================

/// one claimable url belonging to a website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteClaimUrl {
    pub claim_url: String,
    /// created timestamp
    pub time: String,
    /// origin ip of the claimant
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub claimed_time: Option<String>,
    pub claimed: bool,
    pub claim_name: String,
}

impl WebsiteClaimUrl {
    /// claimed time, or the placeholder used by the claim url table
    pub fn claimed_time_label(&self) -> &str {
        match self.claimed_time.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "Not claimed",
        }
    }

    /// removal link target, only while the url is still unclaimed
    pub fn removal_path(&self, claim_name: &str) -> Option<String> {
        (!self.claimed).then(|| paths::claim_url(claim_name, &self.claim_url))
    }
}

// ==============================================================================
// list + write payloads
// ==============================================================================

/// one page of websites plus the unpaginated total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsitesPage {
    pub websites: Vec<Website>,
    pub total: u64,
}

/// body for create and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsitePayload {
    pub claim_name: String,
    pub claim_urls: Vec<String>,
    pub from: String,
    pub to: String,
    pub captcha: bool,
    pub active: bool,
}

/// error body returned by the api on rejected requests
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_decodes_camel_case() {
        let json = r#"{
            "claimName": "summer-promo",
            "created": "2024-05-01T08:00:00Z",
            "from": "01-Jun-2024 10:00:00+00",
            "to": "02-Jun-2024 10:00:00+00",
            "captcha": false,
            "active": true,
            "deliveriesCount": {"total": 12, "claimed": 5}
        }"#;
        let website: Website = serde_json::from_str(json).unwrap();
        assert_eq!(website.claim_name, "summer-promo");
        assert_eq!(website.from.as_deref(), Some("01-Jun-2024 10:00:00+00"));
        assert_eq!(website.deliveries_summary(), "12/5");
    }

    #[test]
    fn test_website_without_counts() {
        let json = r#"{"claimName": "a", "captcha": true, "active": false}"#;
        let website: Website = serde_json::from_str(json).unwrap();
        assert!(website.deliveries_count.is_none());
        assert!(website.from.is_none());
        assert_eq!(website.deliveries_summary(), "-");
    }

    #[test]
    fn test_claim_url_placeholder() {
        let json = r#"{
            "claimUrl": "https://a.com/x",
            "time": "2024-06-01 10:00",
            "ip": "10.0.0.1",
            "claimedTime": null,
            "claimed": false,
            "claimName": "summer-promo"
        }"#;
        let claim: WebsiteClaimUrl = serde_json::from_str(json).unwrap();
        assert_eq!(claim.claimed_time_label(), "Not claimed");

        let claimed = WebsiteClaimUrl {
            claimed_time: Some("2024-06-01 11:00".into()),
            claimed: true,
            ..claim
        };
        assert_eq!(claimed.claimed_time_label(), "2024-06-01 11:00");
    }

    fn claim(claim_url: &str, claimed: bool) -> WebsiteClaimUrl {
        WebsiteClaimUrl {
            claim_url: claim_url.into(),
            time: "2024-06-01 10:00".into(),
            ip: None,
            claimed_time: None,
            claimed,
            claim_name: "summer-promo".into(),
        }
    }

    #[test]
    fn test_removal_only_for_unclaimed() {
        assert_eq!(
            claim("https://a.com/x", false).removal_path("summer-promo").as_deref(),
            Some("/admin/websites/summer-promo/claims/https%3A%2F%2Fa.com%2Fx")
        );
        assert_eq!(claim("https://a.com/x", true).removal_path("summer-promo"), None);
    }

    #[test]
    fn test_removal_path_escapes_slashes_and_queries() {
        let path = claim("https://a.com/p/q?ref=mail&x=1", false)
            .removal_path("promo/2024")
            .unwrap();
        assert_eq!(
            path,
            "/admin/websites/promo%2F2024/claims/https%3A%2F%2Fa.com%2Fp%2Fq%3Fref%3Dmail%26x%3D1"
        );
        assert_eq!(path.matches('/').count(), 5);
        assert!(!path.contains('?'));
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let payload = WebsitePayload {
            claim_name: "summer-promo".into(),
            claim_urls: vec!["https://a.com".into()],
            from: "01-Jun-2024 10:00:00+00".into(),
            to: "02-Jun-2024 10:00:00+00".into(),
            captcha: false,
            active: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["claimName"], "summer-promo");
        assert_eq!(json["claimUrls"][0], "https://a.com");
        assert_eq!(json["active"], true);
    }

    #[test]
    fn test_error_body_message_optional() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"name taken"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("name taken"));
        let empty: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.message.is_none());
    }
}
