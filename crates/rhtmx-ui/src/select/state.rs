// File: src/select/state.rs
// Purpose: Rust model of the select's client-side state and methods
//
// The renderer emits these operations as Alpine methods (toggle, close,
// selectOption, isSelected, getDisplayText, filteredOptions, selectAll).
// The server uses this model to pre-compute what the client shows first.

use super::config::SelectConfig;
use super::option::SelectOption;

/// Committed selection: a scalar (`""` when empty) or a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(String),
    Many(Vec<String>),
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(value) => value.is_empty(),
            Selection::Many(values) => values.is_empty(),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            Selection::Single(value) if value.is_empty() => Vec::new(),
            Selection::Single(value) => vec![value.as_str()],
            Selection::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectState {
    pub open: bool,
    pub search: String,
    selected: Selection,
    options: Vec<SelectOption>,
    placeholder: String,
}

impl SelectState {
    /// Initial state. The selection is seeded from options flagged `selected`:
    /// the first one for single-select, all of them for multiple.
    pub fn new(options: Vec<SelectOption>, config: &SelectConfig) -> Self {
        let selected = if config.multiple {
            Selection::Many(
                options
                    .iter()
                    .filter(|o| o.selected)
                    .map(|o| o.value.clone())
                    .collect(),
            )
        } else {
            Selection::Single(
                options
                    .iter()
                    .find(|o| o.selected)
                    .map(|o| o.value.clone())
                    .unwrap_or_default(),
            )
        };

        Self {
            open: false,
            search: String::new(),
            selected,
            options,
            placeholder: config.placeholder_text().to_string(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selected
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn select_option(&mut self, option: &SelectOption) {
        if option.disabled {
            return;
        }
        match &mut self.selected {
            Selection::Many(values) => {
                if values.contains(&option.value) {
                    values.retain(|v| v != &option.value);
                } else {
                    values.push(option.value.clone());
                }
            }
            Selection::Single(value) => {
                *value = option.value.clone();
                self.close();
            }
        }
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        match &self.selected {
            Selection::Many(values) => values.contains(&option.value),
            Selection::Single(value) => value == &option.value,
        }
    }

    pub fn display_text(&self) -> String {
        let single = match &self.selected {
            Selection::Single(value) if value.is_empty() => return self.placeholder.clone(),
            Selection::Single(value) => value,
            Selection::Many(values) => match values.as_slice() {
                [] => return self.placeholder.clone(),
                [only] => only,
                _ => return format!("{} selected", values.len()),
            },
        };

        self.options
            .iter()
            .find(|o| &o.value == single)
            .map(|o| o.text.clone())
            .unwrap_or_else(|| single.clone())
    }

    /// Options whose text contains the search text, ignoring case.
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        if self.search.is_empty() {
            return self.options.iter().collect();
        }
        let term = self.search.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.text.to_lowercase().contains(&term))
            .collect()
    }

    /// Multiple only: select every enabled filtered option, or deselect them
    /// all when they are already selected.
    pub fn select_all(&mut self) {
        let targets: Vec<String> = self
            .filtered_options()
            .into_iter()
            .filter(|o| !o.disabled)
            .map(|o| o.value.clone())
            .collect();

        let Selection::Many(values) = &mut self.selected else {
            return;
        };

        if targets.iter().all(|t| values.contains(t)) {
            values.retain(|v| !targets.contains(v));
        } else {
            for target in targets {
                if !values.contains(&target) {
                    values.push(target);
                }
            }
        }
    }
}
