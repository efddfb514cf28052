// File: src/select/config.rs
// Purpose: Per-render configuration for the select component

use serde::{Deserialize, Serialize};

/// Select configuration. Every field has a default, so a partial TOML/JSON
/// table deserializes into a usable config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Allow several values; submits `name[0]`, `name[1]`, ...
    pub multiple: bool,

    /// Show the search box above the option list
    pub searchable: bool,

    /// Button text when nothing is selected
    pub placeholder: Option<String>,

    pub search_placeholder: String,

    pub no_results_text: String,

    /// Label of the select-all row (multiple only)
    pub select_all_text: String,

    /// Tailwind max-height class for the dropdown panel
    pub max_height_class: String,

    /// Form field name of the hidden input(s)
    pub input_name: String,

    /// Element id of the toggle button; falls back to `input_name`
    pub input_id: String,

    pub label: Option<String>,

    /// Extra classes for the wrapper element
    pub css_class: Option<String>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            searchable: true,
            placeholder: None,
            search_placeholder: "Search...".to_string(),
            no_results_text: "No results found".to_string(),
            select_all_text: "Select All".to_string(),
            max_height_class: "max-h-60".to_string(),
            input_name: String::new(),
            input_id: String::new(),
            label: None,
            css_class: None,
        }
    }
}

impl SelectConfig {
    pub fn new(input_name: impl Into<String>) -> Self {
        Self {
            input_name: input_name.into(),
            ..Self::default()
        }
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = input_id.into();
        self
    }

    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Placeholder shown when nothing is selected.
    pub fn placeholder_text(&self) -> &str {
        match &self.placeholder {
            Some(placeholder) => placeholder,
            None if self.multiple => "Select options",
            None => "Select option",
        }
    }

    pub fn element_id(&self) -> &str {
        if self.input_id.is_empty() {
            &self.input_name
        } else {
            &self.input_id
        }
    }
}
