//! ==============================================================================
//! website_form.rs - create / edit website
//! ==============================================================================
//!
//! routes:
//!     /admin/websites/new          create mode
//!     /admin/websites/:claim_name  edit mode
//!
//! edit mode loads the website and then its claim urls, and shows the spinner
//! until both arrive. a failed load raises a sticky toast and leaves the
//! spinner up.
//!
//! on submit the values go through `WebsiteFormValues::validate`:
//!     - field errors render inline under their inputs
//!     - a start that is not before the end raises a toast
//!     - a rejected write raises a sticky toast with the server's message
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use shared::paths;
use shared::{
    ApiError, FetchState, FieldErrors, FormField, FormMode, ScheduleFields, SubmitError,
    TzOffset, WebsiteClaimUrl, WebsiteFormValues,
};

use crate::api;
use crate::components::{use_toasts, Loading, WebsiteClaimUrlList};

// ==============================================================================
// page
// ==============================================================================

#[component]
pub fn WebsiteForm() -> impl IntoView {
    let toasts = use_toasts();
    let mode = FormMode::from_route_param(use_params_map().get_untracked().get("claim_name"));
    let title = mode.title();

    let values = RwSignal::new(WebsiteFormValues::default());
    let claims = RwSignal::new(match &mode {
        FormMode::Create => FetchState::Idle,
        FormMode::Edit { .. } => FetchState::Loading,
    });

    // load the website being edited
    if let FormMode::Edit { claim_name } = &mode {
        let claim_name = claim_name.clone();
        Effect::new(move || {
            let claim_name = claim_name.clone();
            leptos::task::spawn_local(async move {
                log::debug!("loading website {claim_name}");
                match load_website(&claim_name).await {
                    Ok((website, urls)) => {
                        values.set(WebsiteFormValues::from_website(&website));
                        claims.set(FetchState::Loaded(urls));
                    }
                    Err(e) => {
                        log::error!("loading website {claim_name} failed: {e}");
                        toasts.error("Error while fetching website", false);
                        claims.set(FetchState::Failed(e.to_string()));
                    }
                }
            });
        });
    }

    let is_edit = mode.is_edit();

    view! {
        <Title text=title/>
        <div class="bk-container">
            {move || {
                let ready = !is_edit || claims.with(|c| c.loaded().is_some());
                if !ready {
                    return view! {
                        <h2>{title}</h2>
                        <Loading/>
                    }.into_any();
                }
                view! { <WebsiteFormBody mode=mode.clone() values=values claims=claims/> }.into_any()
            }}
        </div>
    }
}

async fn load_website(
    claim_name: &str,
) -> Result<(shared::Website, Vec<WebsiteClaimUrl>), ApiError> {
    let website = api::get_website(claim_name).await?;
    let urls = api::get_website_claim_urls(claim_name).await?;
    Ok((website, urls))
}

// ==============================================================================
// form body
// ==============================================================================

#[component]
fn WebsiteFormBody(
    mode: FormMode,
    values: RwSignal<WebsiteFormValues>,
    claims: RwSignal<FetchState<Vec<WebsiteClaimUrl>>>,
) -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let is_edit = mode.is_edit();
    let title = mode.title();
    let edit_name = match &mode {
        FormMode::Edit { claim_name } => claim_name.clone(),
        FormMode::Create => String::new(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let payload = match values.with_untracked(|v| v.validate(&mode)) {
            Ok(payload) => payload,
            Err(SubmitError::Invalid(field_errors)) => {
                log::debug!("website form has {} invalid field(s)", field_errors.len());
                errors.set(field_errors);
                return;
            }
            Err(e @ SubmitError::WindowOrder) => {
                errors.set(FieldErrors::default());
                toasts.error(e.to_string(), true);
                return;
            }
        };

        errors.set(FieldErrors::default());
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = if is_edit {
                api::update_website(&payload).await
            } else {
                api::create_website(&payload).await
            };

            match result {
                Ok(website) => {
                    log::info!("saved website {}", website.claim_name);
                    toasts.success(format!("Website {} saved", website.claim_name));
                    navigate(paths::WEBSITES, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("saving website {} failed: {e}", payload.claim_name);
                    toasts.error(e.user_message(), false);
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="website-admin-form" on:submit=on_submit>
            <h2>{title}</h2>

            <div class="form-section">
                <h3>"General Info"</h3>
                <div class="bk-form-row">
                    <label>"Website Name"</label>
                    <input
                        type="text"
                        class=move || input_class(errors, FormField::ClaimName)
                        disabled=is_edit
                        prop:value=move || values.with(|v| v.claim_name.clone())
                        on:input=move |ev| values.update(|v| v.claim_name = event_target_value(&ev))
                    />
                    {field_error(errors, FormField::ClaimName)}
                </div>
            </div>

            <Show when=move || !is_edit>
                <div class="form-section">
                    <h3>"Claim Urls List"</h3>
                    <div class="bk-form-row">
                        <label>"List of Claim Urls for the Website, one per line"</label>
                        <textarea
                            class=move || input_class(errors, FormField::ClaimUrls)
                            prop:value=move || values.with(|v| v.claim_urls.clone())
                            on:input=move |ev| values.update(|v| v.claim_urls = event_target_value(&ev))
                        ></textarea>
                        {field_error(errors, FormField::ClaimUrls)}
                    </div>
                </div>
            </Show>

            <div class="form-section">
                <h3>"Claim Window"</h3>
                <ScheduleInputs bound=Bound::Start values=values errors=errors/>
                <ScheduleInputs bound=Bound::End values=values errors=errors/>
            </div>

            <div class="form-section">
                <label class="checkbox-field">
                    <input
                        type="checkbox"
                        prop:checked=move || values.with(|v| v.captcha)
                        on:change=move |ev| values.update(|v| v.captcha = event_target_checked(&ev))
                    />
                    " Captcha"
                </label>
                <label class="checkbox-field">
                    <input
                        type="checkbox"
                        prop:checked=move || values.with(|v| v.active)
                        on:change=move |ev| values.update(|v| v.active = event_target_checked(&ev))
                    />
                    " Active Website"
                </label>
            </div>

            <div class="form-section">
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() {
                        view! { <span class="spinner"></span> " Saving..." }.into_any()
                    } else {
                        view! { "Submit" }.into_any()
                    }}
                </button>
            </div>

            {move || is_edit.then(|| {
                let urls = claims.with(|c| c.loaded().cloned()).unwrap_or_default();
                view! { <WebsiteClaimUrlList claim_name=edit_name.clone() claims=urls/> }
            })}
        </form>
    }
}

// ==============================================================================
// claim window inputs
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Start,
    End,
}

impl Bound {
    fn label(self) -> &'static str {
        match self {
            Bound::Start => "Start",
            Bound::End => "End",
        }
    }

    fn fields(self, values: &WebsiteFormValues) -> &ScheduleFields {
        match self {
            Bound::Start => &values.start,
            Bound::End => &values.end,
        }
    }

    fn fields_mut(self, values: &mut WebsiteFormValues) -> &mut ScheduleFields {
        match self {
            Bound::Start => &mut values.start,
            Bound::End => &mut values.end,
        }
    }

    /// date, time, offset
    fn form_fields(self) -> [FormField; 3] {
        match self {
            Bound::Start => [FormField::StartDate, FormField::StartTime, FormField::StartOffset],
            Bound::End => [FormField::EndDate, FormField::EndTime, FormField::EndOffset],
        }
    }
}

#[component]
fn ScheduleInputs(
    bound: Bound,
    values: RwSignal<WebsiteFormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let [date_field, time_field, offset_field] = bound.form_fields();

    view! {
        <div class="schedule-row">
            <h4>{bound.label()}</h4>
            <div class="bk-form-row col-xs-4">
                <label>"Date"</label>
                <input
                    type="date"
                    class=move || input_class(errors, date_field)
                    prop:value=move || values.with(|v| bound.fields(v).date.clone())
                    on:input=move |ev| values.update(|v| bound.fields_mut(v).date = event_target_value(&ev))
                />
                {field_error(errors, date_field)}
            </div>
            <div class="bk-form-row col-xs-4">
                <label>"Time"</label>
                <input
                    type="time"
                    class=move || input_class(errors, time_field)
                    prop:value=move || values.with(|v| bound.fields(v).time.clone())
                    on:input=move |ev| values.update(|v| bound.fields_mut(v).time = event_target_value(&ev))
                />
                {field_error(errors, time_field)}
            </div>
            <div class="bk-form-row col-xs-4">
                <label>"Timezone"</label>
                <select
                    class=move || input_class(errors, offset_field)
                    on:change=move |ev| values.update(|v| bound.fields_mut(v).offset = event_target_value(&ev))
                >
                    {TzOffset::options().into_iter().map(|offset| {
                        let value = offset.to_string();
                        let current = value.clone();
                        view! {
                            <option
                                value=value.clone()
                                prop:selected=move || values.with(|v| bound.fields(v).offset == current)
                            >
                                {format!("UTC{value}")}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
                {field_error(errors, offset_field)}
            </div>
        </div>
    }
}

// ==============================================================================
// helpers
// ==============================================================================

fn input_class(errors: RwSignal<FieldErrors>, field: FormField) -> &'static str {
    if errors.with(|e| e.get(field).is_some()) {
        "error"
    } else {
        ""
    }
}

fn field_error(errors: RwSignal<FieldErrors>, field: FormField) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field).map(str::to_string))
            .map(|message| view! { <p class="bk-error">{message}</p> })
    }
}
