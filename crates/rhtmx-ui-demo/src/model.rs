// File: src/model.rs
// Purpose: View model and sample data for the forms demo page

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::AppError;

/// Contact form bound to the demo page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact_date: Option<NaiveDate>,
    pub country: Option<String>,
    pub department: Option<String>,
    pub interested_services: Vec<String>,
    pub team_members: Vec<String>,
    pub message: String,
    pub subscribe_to_newsletter: bool,
    pub preferred_contact_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
    pub join_date: NaiveDate,
}

impl UserInfo {
    pub fn is_inactive(&self) -> bool {
        self.status == "Inactive"
    }
}

/// A value/text pair known at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub text: &'static str,
}

const fn choice(value: &'static str, text: &'static str) -> Choice {
    Choice { value, text }
}

pub const DEPARTMENTS: &[Choice] = &[
    choice("engineering", "Engineering"),
    choice("marketing", "Marketing"),
    choice("sales", "Sales"),
    choice("support", "Customer Support"),
    choice("hr", "Human Resources"),
];

pub const SERVICES: &[Choice] = &[
    choice("consulting", "Consulting"),
    choice("development", "Software Development"),
    choice("design", "UI/UX Design"),
    choice("testing", "Quality Assurance"),
    choice("devops", "DevOps & Infrastructure"),
    choice("training", "Training & Support"),
];

/// Everything the forms page renders
#[derive(Debug, Clone)]
pub struct FormsPage {
    pub contact: ContactForm,
    pub users: Vec<UserInfo>,
    /// Shaped like records deserialized from an API, read by field name
    pub countries: Vec<Value>,
    pub departments: &'static [Choice],
    pub services: &'static [Choice],
}

impl FormsPage {
    /// Sample data, with dates relative to `today`
    pub fn sample(today: NaiveDate) -> Self {
        let months_ago = |n| today.checked_sub_months(Months::new(n)).unwrap_or(today);
        let user = |id, name: &str, email: &str, status: &str, role: &str, join_date| UserInfo {
            id,
            name: name.to_string(),
            email: email.to_string(),
            status: status.to_string(),
            role: role.to_string(),
            join_date,
        };

        Self {
            contact: ContactForm {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                preferred_contact_date: today.checked_add_days(Days::new(7)),
                subscribe_to_newsletter: true,
                preferred_contact_method: "email".to_string(),
                ..Default::default()
            },
            users: vec![
                user(1, "Alice Johnson", "alice@example.com", "Active", "Administrator", months_ago(6)),
                user(2, "Bob Smith", "bob@example.com", "Inactive", "User", months_ago(12)),
                user(3, "Carol Williams", "carol@example.com", "Active", "Moderator", months_ago(3)),
                user(4, "David Brown", "david@example.com", "Active", "User", months_ago(8)),
                user(
                    5,
                    "Emma Davis",
                    "emma@example.com",
                    "Pending",
                    "User",
                    today.checked_sub_days(Days::new(15)).unwrap_or(today),
                ),
                user(6, "Frank Wilson", "frank@example.com", "Active", "User", months_ago(2)),
            ],
            countries: vec![
                json!({ "Value": "us", "Text": "United States" }),
                json!({ "Value": "uk", "Text": "United Kingdom" }),
                json!({ "Value": "ca", "Text": "Canada" }),
                json!({ "Value": "au", "Text": "Australia" }),
                json!({ "Value": "de", "Text": "Germany" }),
                json!({ "Value": "fr", "Text": "France" }),
            ],
            departments: DEPARTMENTS,
            services: SERVICES,
        }
    }
}

impl ContactForm {
    /// Rebuild the form from urlencoded pairs. Multi-select values arrive as
    /// `name[0]`, `name[1]`, ... and are collected in index order.
    pub fn from_fields(fields: &[(String, String)]) -> Result<Self, AppError> {
        let preferred_contact_date = match single(fields, "preferred_contact_date") {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                AppError::BadRequest(format!("Invalid preferred contact date: '{}'", raw))
            })?),
            None => None,
        };

        Ok(Self {
            first_name: single(fields, "first_name").unwrap_or_default(),
            last_name: single(fields, "last_name").unwrap_or_default(),
            email: single(fields, "email").unwrap_or_default(),
            phone: single(fields, "phone"),
            preferred_contact_date,
            country: single(fields, "country"),
            department: single(fields, "department"),
            interested_services: indexed(fields, "interested_services"),
            team_members: indexed(fields, "team_members"),
            message: single(fields, "message").unwrap_or_default(),
            subscribe_to_newsletter: single(fields, "subscribe_to_newsletter")
                .is_some_and(|v| v == "on" || v == "true"),
            preferred_contact_method: single(fields, "preferred_contact_method")
                .unwrap_or_else(|| "email".to_string()),
        })
    }
}

/// Last non-empty value submitted under `name`
fn single(fields: &[(String, String)], name: &str) -> Option<String> {
    fields
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn indexed(fields: &[(String, String)], name: &str) -> Vec<String> {
    let mut values: Vec<(usize, &str)> = fields
        .iter()
        .filter_map(|(key, value)| {
            let index = key
                .strip_prefix(name)?
                .strip_prefix('[')?
                .strip_suffix(']')?
                .parse()
                .ok()?;
            Some((index, value.as_str()))
        })
        .collect();
    values.sort_by_key(|(index, _)| *index);

    values
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| value.to_string())
        .collect()
}
