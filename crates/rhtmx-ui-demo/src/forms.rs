// File: src/forms.rs
// Purpose: GET/POST handlers and markup for the /forms demo page

use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::State, response::Html, Form};
use chrono::Local;
use maud::{html, Markup};
use rhtmx_ui::{
    CurrentValue, FieldNames, OptionCollector, PageContext, RecordFields, SelectConfig,
    SelectMarkup, SelectOption, SelectRenderer, ToastKind, ToastRenderer, ToastRequest,
};

use crate::config::DemoConfig;
use crate::error::AppError;
use crate::layout;
use crate::model::{ContactForm, FormsPage};
use crate::AppState;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your form has been submitted successfully.";

pub async fn show(State(state): State<Arc<AppState>>) -> Html<String> {
    let page = FormsPage::sample(Local::now().date_naive());
    Html(render(&state.config, &page, &[]).into_string())
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let contact = ContactForm::from_fields(&fields)?;
    let submitted = serde_json::to_string(&contact)?;
    tracing::info!(form = %submitted, "Form submitted");

    let mut page = FormsPage::sample(Local::now().date_naive());
    page.contact = contact;

    let flash = [ToastRequest::success(SUCCESS_MESSAGE)];
    Ok(Html(render(&state.config, &page, &flash).into_string()))
}

/// Full page: contact form, toast triggers, the toast container, and any
/// queued notifications.
pub fn render(config: &DemoConfig, page: &FormsPage, flash: &[ToastRequest]) -> Markup {
    let mut ctx = PageContext::new();
    let contact = &page.contact;
    let contact_date = contact
        .preferred_contact_date
        .map(|date| date.format("%Y-%m-%d").to_string());

    let body = html! {
        main class="max-w-3xl mx-auto py-10 px-4 space-y-10" {
            header {
                h1 class="text-3xl font-bold text-gray-900" { "Forms" }
                p class="mt-2 text-gray-600" {
                    "Searchable selects and toast notifications, rendered on the server."
                }
            }

            form method="post" action="/forms" class="bg-white shadow rounded-lg p-6 space-y-6" {
                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    (text_field("first_name", "First Name", "text", &contact.first_name, true))
                    (text_field("last_name", "Last Name", "text", &contact.last_name, true))
                    (text_field("email", "Email Address", "email", &contact.email, true))
                    (text_field("phone", "Phone Number", "tel", contact.phone.as_deref().unwrap_or_default(), false))
                    (text_field("preferred_contact_date", "Preferred Contact Date", "date", contact_date.as_deref().unwrap_or_default(), false))
                    (country_select(config, page))
                    (department_select(config, page))
                    (contact_method_select(contact))
                }

                (services_select(config, page))
                (team_select(config, page))

                div {
                    label for="message" class="block text-sm font-medium text-gray-700 mb-1" { "Message" }
                    textarea id="message" name="message" rows="4"
                        class="w-full rounded-md border border-gray-300 px-3 py-2" { (contact.message) }
                }

                label class="flex items-center gap-2 text-sm text-gray-700" {
                    input type="checkbox" name="subscribe_to_newsletter"
                        checked[contact.subscribe_to_newsletter];
                    "Subscribe to Newsletter"
                }

                button type="submit"
                    class="px-4 py-2 rounded-md bg-blue-600 text-white font-medium hover:bg-blue-700" {
                    "Submit"
                }
            }

            section class="bg-white shadow rounded-lg p-6" {
                h2 class="text-xl font-semibold text-gray-900 mb-4" { "Toast notifications" }
                div class="flex flex-wrap gap-3" {
                    @for kind in ToastKind::ALL {
                        (toast_button(kind))
                    }
                }
            }
        }

        (ToastRenderer::mount(&mut ctx, &config.toast))
        (ToastRenderer::dispatch_script(flash))
    };

    layout::page("Forms - RHTMX UI", body)
}

fn text_field(name: &str, label: &str, input_type: &str, value: &str, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            input id=(name) name=(name) type=(input_type) value=(value) required[required]
                class="w-full rounded-md border border-gray-300 px-3 py-2";
        }
    }
}

fn select_config(config: &DemoConfig, name: &str, label: &str) -> SelectConfig {
    SelectConfig::new(name)
        .label(label)
        .searchable(config.select.searchable)
}

fn country_select(config: &DemoConfig, page: &FormsPage) -> SelectMarkup {
    let select = select_config(config, "country", "Country").placeholder("Select a country");
    let mut options = OptionCollector::new(select.multiple);
    options.extend_fields(
        &page.countries,
        &FieldNames::default(),
        &page.contact.country.clone().into(),
    );
    SelectRenderer::render_collected(options, &select)
}

fn department_select(config: &DemoConfig, page: &FormsPage) -> SelectMarkup {
    let select = select_config(config, "department", "Department");
    let current: CurrentValue = page.contact.department.clone().into();

    let mut options = OptionCollector::new(select.multiple);
    options.declare(SelectOption::new("", "Not sure yet"));
    options.extend_records(
        page.departments.iter(),
        |d| RecordFields::new(d.value, d.text),
        &current,
    );
    SelectRenderer::render_collected(options, &select)
}

fn contact_method_select(contact: &ContactForm) -> SelectMarkup {
    let method = contact.preferred_contact_method.as_str();
    let select = SelectConfig::new("preferred_contact_method")
        .label("Preferred Contact Method")
        .searchable(false);

    let options = [("email", "Email"), ("phone", "Phone"), ("sms", "Text Message")]
        .into_iter()
        .map(|(value, text)| SelectOption::new(value, text).selected(method == value))
        .chain([SelectOption::new("pigeon", "Carrier Pigeon").disabled(true)])
        .collect::<Vec<_>>();
    SelectRenderer::render(&options, &select)
}

fn services_select(config: &DemoConfig, page: &FormsPage) -> SelectMarkup {
    let select = select_config(config, "interested_services", "Services of Interest")
        .multiple(true)
        .placeholder("Select services");
    let mut options = OptionCollector::new(select.multiple);
    options.extend_records(
        page.services.iter(),
        |s| RecordFields::new(s.value, s.text),
        &page.contact.interested_services.as_slice().into(),
    );
    SelectRenderer::render_collected(options, &select)
}

/// Team members come from the user list; inactive users can't be picked.
fn team_select(config: &DemoConfig, page: &FormsPage) -> SelectMarkup {
    let select = select_config(config, "team_members", "Team Members")
        .multiple(true)
        .placeholder("Select team members");

    let inactive: HashSet<String> = page
        .users
        .iter()
        .filter(|user| user.is_inactive())
        .map(|user| user.id.to_string())
        .collect();

    let mut collector = OptionCollector::new(select.multiple);
    collector.extend_records(
        page.users.iter(),
        |user| RecordFields::new(user.id, &user.name),
        &page.contact.team_members.as_slice().into(),
    );
    let options: Vec<SelectOption> = collector
        .finish()
        .into_iter()
        .map(|option| {
            let disabled = inactive.contains(&option.value);
            option.disabled(disabled)
        })
        .collect();
    SelectRenderer::render(&options, &select)
}

fn toast_button(kind: ToastKind) -> Markup {
    let (label, message, class) = match kind {
        ToastKind::Success => ("Success", "Your changes have been saved.", "bg-green-600 hover:bg-green-700"),
        ToastKind::Error => ("Error", "Something went wrong. Please try again.", "bg-red-600 hover:bg-red-700"),
        ToastKind::Warning => ("Warning", "Your session expires in 5 minutes.", "bg-yellow-500 hover:bg-yellow-600"),
        ToastKind::Info => ("Info", "A new version is available.", "bg-blue-600 hover:bg-blue-700"),
        ToastKind::Default => ("Default", "Heads up!", "bg-gray-600 hover:bg-gray-700"),
    };
    let request = ToastRequest::new(message, kind);

    html! {
        button type="button" onclick=(request.show_call())
            class={ "px-4 py-2 rounded-md text-white font-medium " (class) } {
            (label)
        }
    }
}
