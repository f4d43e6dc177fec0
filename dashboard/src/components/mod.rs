//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod loading;
mod paginator;
mod status_icon;
mod toasts;
mod website_claim_url_list;
mod website_form;
mod websites_list;

pub use header::Header;
pub use loading::Loading;
pub use paginator::Paginator;
pub use status_icon::StatusIcon;
pub use toasts::{use_toasts, Toaster, Toasts};
pub use website_claim_url_list::WebsiteClaimUrlList;
pub use website_form::WebsiteForm;
pub use websites_list::WebsitesList;
