//! ==============================================================================
//! lib.rs - shared types and logic for the websites backoffice
//! ==============================================================================
//!
//! purpose:
//!     everything the dashboard needs that does not touch the browser: api
//!     wire types, the website form model and its validation, claim window
//!     formatting, list pagination, toast and request bookkeeping.
//!
//! relationships:
//!     - used by: dashboard (views, api client)
//!
//! constraints:
//!     no wasm or browser dependencies here. the workspace default members
//!     include only this crate, so plain `cargo test` runs natively.
//!
//! ==============================================================================

pub mod claim_urls;
pub mod error;
pub mod fetch;
pub mod form;
pub mod notify;
pub mod pagination;
pub mod paths;
pub mod schedule;
pub mod website;

pub use error::ApiError;
pub use fetch::{FetchState, RequestSeq, RequestTicket};
pub use form::{FieldErrors, FormField, FormMode, SubmitError, WebsiteFormValues};
pub use notify::{Appearance, Toast, ToastQueue};
pub use pagination::{PageItem, WebsitesQuery};
pub use schedule::{ScheduleError, ScheduleFields, TzOffset};
pub use website::{DeliveriesCount, Website, WebsiteClaimUrl, WebsitePayload, WebsitesPage};
