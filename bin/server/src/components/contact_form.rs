//! The contact form, driven by a client-side [`ContactFlow`].

use crate::pages::contact::submit_contact;
use chrono::Utc;
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use lichtpunt_contact::{
    ContactFlow, ContactForm as FormModel, FieldError, FlowOptions, FormTag, SubmissionState,
    Transition,
};
use lichtpunt_core::{Locale, UI, UiText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    fn label(self, ui: &UiText) -> &'static str {
        match self {
            Self::Name => ui.form_name,
            Self::Email => ui.form_email,
            Self::Phone => ui.form_phone,
            Self::Message => ui.form_message,
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Name | Self::Message => "text",
        }
    }

    fn error(self) -> Option<FieldError> {
        match self {
            Self::Name => Some(FieldError::NameRequired),
            Self::Email => Some(FieldError::EmailInvalid),
            Self::Message => Some(FieldError::MessageRequired),
            Self::Phone => None,
        }
    }

    fn value(self, form: &FormModel) -> &str {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Phone => &form.phone,
            Self::Message => &form.message,
        }
    }

    fn value_mut(self, form: &mut FormModel) -> &mut String {
        match self {
            Self::Name => &mut form.name,
            Self::Email => &mut form.email,
            Self::Phone => &mut form.phone,
            Self::Message => &mut form.message,
        }
    }
}

/// Contact form for one page.
///
/// `tag` identifies the page in the submission; `options` decide between
/// redirecting to the thank-you page and an in-place success message.
#[component]
pub fn ContactForm(
    locale: Locale,
    #[prop(into)] tag: String,
    options: FlowOptions,
) -> impl IntoView {
    let ui = UI.get(locale);
    let id_prefix = tag.clone();
    let flow = RwSignal::new(ContactFlow::new(
        FormModel::new(FormTag::new(tag), locale),
        options,
    ));
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let state = Memo::new(move |_| flow.with(ContactFlow::state));
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if let Err(failed) = flow.with_untracked(|f| f.form().validate()) {
            errors.set(failed);
            return;
        }
        errors.set(Vec::new());

        // `None` while a submission is already in flight.
        let Some(submission) = flow.try_update(|f| f.begin(Utc::now())).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let delivered = submit_contact(submission).await.is_ok();
            let Some(transition) = flow.try_update(|f| f.finish(delivered)) else {
                return;
            };
            if let Transition::Success {
                redirect,
                auto_reset,
                ..
            } = transition
            {
                if let Some(path) = redirect {
                    navigate(&path, NavigateOptions::default());
                }
                if let Some(delay) = auto_reset {
                    set_timeout(move || flow.update(ContactFlow::reset_to_idle), delay);
                }
            }
        });
    };

    let field = move |field: Field| {
        let id = format!("{id_prefix}-{}", field.id());
        let value = move || flow.with(|f| field.value(f.form()).to_string());
        let on_input = move |ev: Event| {
            flow.update(|f| *field.value_mut(f.form_mut()) = event_target_value(&ev));
        };
        let required = field.error().is_some();

        let control = if field == Field::Message {
            view! {
                <textarea
                    id=id.clone()
                    name=field.id()
                    rows="5"
                    required=required
                    prop:value=value
                    on:input=on_input
                ></textarea>
            }
            .into_any()
        } else {
            view! {
                <input
                    id=id.clone()
                    type=field.input_type()
                    name=field.id()
                    required=required
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        };

        let error = move || {
            field
                .error()
                .filter(|e| errors.with(|errors| errors.contains(e)))
                .map(|e| view! { <p class="field-error">{e.message(locale)}</p> })
        };

        view! {
            <div class="form-field">
                <label for=id>{field.label(ui)}</label>
                {control}
                {error}
            </div>
        }
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            {field(Field::Name)}
            {field(Field::Email)}
            {field(Field::Phone)}
            {field(Field::Message)}
            <label class="form-checkbox">
                <input
                    type="checkbox"
                    name="newsletter"
                    prop:checked=move || flow.with(|f| f.form().newsletter)
                    on:change=move |ev| {
                        flow.update(|f| f.form_mut().newsletter = event_target_checked(&ev));
                    }
                />
                {ui.form_newsletter}
            </label>
            <button type="submit" class="cta-button" disabled=move || state.get().is_submitting()>
                {move || if state.get().is_submitting() { ui.form_submitting } else { ui.form_submit }}
            </button>
            {move || match state.get() {
                SubmissionState::Success => {
                    Some(
                        view! { <p class="form-status success" role="status">{ui.form_success}</p> }
                            .into_any(),
                    )
                }
                SubmissionState::Error => {
                    Some(
                        view! { <p class="form-status error" role="alert">{ui.form_error}</p> }
                            .into_any(),
                    )
                }
                SubmissionState::Idle | SubmissionState::Submitting => None,
            }}
        </form>
    }
}
