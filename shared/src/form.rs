//! ==============================================================================
//! form.rs - website create/edit form model
//! ==============================================================================
//!
//! purpose:
//!     holds the raw values the website form edits and turns them into a
//!     `WebsitePayload`, or into the errors the form has to show.
//!
//! validation order:
//!     1. field checks (name, claim urls, each schedule field). every failing
//!        field gets an inline message, all of them are reported at once.
//!     2. only when every field is valid: start must be strictly before end.
//!        this one is reported as `SubmitError::WindowOrder` (a toast, not a
//!        field error).
//!
//! modes:
//!     create  claim name editable and checked, claim url list required
//!     edit    claim name comes from the route as stored, claim urls are not
//!             resent
//!
//! ==============================================================================

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::claim_urls::parse_claim_urls;
use crate::schedule::{compose, format_timestamp, parse_date, parse_time, ScheduleFields, TzOffset};
use crate::website::{Website, WebsitePayload};

pub const CLAIM_NAME_MAX_LEN: usize = 100;
pub const CLAIM_NAME_REQUIRED: &str = "Website name is required";
/// names that collide with static admin routes
pub const RESERVED_CLAIM_NAMES: [&str; 1] = ["new"];
pub const CLAIM_URLS_REQUIRED: &str = "A claim urls list is required";

// ==============================================================================
// mode
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { claim_name: String },
}

impl FormMode {
    /// edit mode when the route carries a non-empty claim name
    pub fn from_route_param(param: Option<String>) -> Self {
        match param {
            Some(claim_name) if !claim_name.is_empty() => FormMode::Edit { claim_name },
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Website",
            FormMode::Edit { .. } => "Edit Website",
        }
    }
}

// ==============================================================================
// errors
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    ClaimName,
    ClaimUrls,
    StartDate,
    StartTime,
    StartOffset,
    EndDate,
    EndTime,
    EndOffset,
}

/// inline messages keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error("Start date must be before end date")]
    WindowOrder,
}

// ==============================================================================
// values
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebsiteFormValues {
    pub claim_name: String,
    /// raw textarea contents, one url per line
    pub claim_urls: String,
    pub start: ScheduleFields,
    pub end: ScheduleFields,
    pub captcha: bool,
    pub active: bool,
}

impl Default for WebsiteFormValues {
    fn default() -> Self {
        Self {
            claim_name: String::new(),
            claim_urls: String::new(),
            start: ScheduleFields::default(),
            end: ScheduleFields::default(),
            captcha: false,
            active: true,
        }
    }
}

impl WebsiteFormValues {
    /// initial values for edit mode
    ///
    /// a stored bound that cannot be split back into fields is left blank so
    /// the schema asks for it again.
    pub fn from_website(website: &Website) -> Self {
        let bound = |label: &str, raw: Option<&str>| match raw {
            Some(raw) => ScheduleFields::from_timestamp(raw).unwrap_or_else(|e| {
                log::warn!("website {}: unreadable {label} `{raw}`: {e}", website.claim_name);
                ScheduleFields::default()
            }),
            None => ScheduleFields::default(),
        };

        Self {
            claim_name: website.claim_name.clone(),
            claim_urls: String::new(),
            start: bound("start", website.from.as_deref()),
            end: bound("end", website.to.as_deref()),
            captcha: website.captcha,
            active: website.active,
        }
    }

    pub fn validate(&self, mode: &FormMode) -> Result<WebsitePayload, SubmitError> {
        let mut errors = FieldErrors::default();

        // an existing name is taken as the backend stored it
        let claim_name = match mode {
            FormMode::Create => {
                let name = self.claim_name.trim().to_string();
                if let Err(message) = check_claim_name(&name) {
                    errors.insert(FormField::ClaimName, message);
                }
                name
            }
            FormMode::Edit { claim_name } => {
                if claim_name.trim().is_empty() {
                    errors.insert(FormField::ClaimName, CLAIM_NAME_REQUIRED);
                }
                claim_name.clone()
            }
        };

        let claim_urls = match mode {
            FormMode::Create => match parse_claim_urls(&self.claim_urls) {
                Ok(urls) if urls.is_empty() => {
                    errors.insert(FormField::ClaimUrls, CLAIM_URLS_REQUIRED);
                    urls
                }
                Ok(urls) => urls,
                Err(e) => {
                    errors.insert(FormField::ClaimUrls, e.to_string());
                    Vec::new()
                }
            },
            FormMode::Edit { .. } => Vec::new(),
        };

        let start = resolve_bound(
            &self.start,
            [FormField::StartDate, FormField::StartTime, FormField::StartOffset],
            &mut errors,
        );
        let end = resolve_bound(
            &self.end,
            [FormField::EndDate, FormField::EndTime, FormField::EndOffset],
            &mut errors,
        );

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if errors.is_empty() => (start, end),
            _ => return Err(SubmitError::Invalid(errors)),
        };

        if start >= end {
            return Err(SubmitError::WindowOrder);
        }

        let from = format_timestamp(&start).map_err(|e| single(FormField::StartOffset, e))?;
        let to = format_timestamp(&end).map_err(|e| single(FormField::EndOffset, e))?;

        Ok(WebsitePayload {
            claim_name,
            claim_urls,
            from,
            to,
            captcha: self.captcha,
            active: self.active,
        })
    }
}

// ==============================================================================
// helpers
// ==============================================================================

/// rules for a new name, which becomes a url path segment
fn check_claim_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(CLAIM_NAME_REQUIRED.to_string());
    }
    if RESERVED_CLAIM_NAMES.contains(&name) {
        return Err(format!("Website name `{name}` is reserved"));
    }
    if name.chars().count() > CLAIM_NAME_MAX_LEN {
        return Err(format!("Website name must be at most {CLAIM_NAME_MAX_LEN} characters"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err("Website name may only contain letters, digits, '-' and '_'".to_string());
    }
    Ok(())
}

/// parse one bound, recording a message per failing sub-field
fn resolve_bound(
    fields: &ScheduleFields,
    [date_field, time_field, offset_field]: [FormField; 3],
    errors: &mut FieldErrors,
) -> Option<DateTime<FixedOffset>> {
    let date = required(&fields.date, "Date is required")
        .and_then(|raw| parse_date(raw).map_err(|e| e.to_string()));
    let time = required(&fields.time, "Time is required")
        .and_then(|raw| parse_time(raw).map_err(|e| e.to_string()));
    let offset = required(&fields.offset, "Timezone is required")
        .and_then(|raw| TzOffset::parse(raw).map_err(|e| e.to_string()));

    match (date, time, offset) {
        (Ok(date), Ok(time), Ok(offset)) => match compose(date, time, offset) {
            Ok(at) => Some(at),
            Err(e) => {
                errors.insert(date_field, e.to_string());
                None
            }
        },
        (date, time, offset) => {
            if let Err(m) = date {
                errors.insert(date_field, m);
            }
            if let Err(m) = time {
                errors.insert(time_field, m);
            }
            if let Err(m) = offset {
                errors.insert(offset_field, m);
            }
            None
        }
    }
}

fn required<'a>(raw: &'a str, message: &str) -> Result<&'a str, String> {
    if raw.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(raw)
    }
}

fn single(field: FormField, error: impl ToString) -> SubmitError {
    let mut errors = FieldErrors::default();
    errors.insert(field, error.to_string());
    SubmitError::Invalid(errors)
}

// ==============================================================================
// tests
// ==============================================================================
