// File: src/select/option.rs
// Purpose: Option collection from declarative entries and record sources

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One selectable entry, normalized from whichever source supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            selected: false,
            disabled: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Value/text pair read from one record. `None` means the field did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub value: Option<String>,
    pub text: Option<String>,
}

impl RecordFields {
    pub fn new(value: impl ToString, text: impl ToString) -> Self {
        Self {
            value: Some(value.to_string()),
            text: Some(text.to_string()),
        }
    }

    /// Record without a text field; the value doubles as the text.
    pub fn value_only(value: impl ToString) -> Self {
        Self {
            value: Some(value.to_string()),
            text: None,
        }
    }
}

/// The bound model value used to pre-select options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurrentValue {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl CurrentValue {
    /// Exact string comparison, no trimming or case folding.
    ///
    /// A `Many` value only matches when the select is multiple; a
    /// single-select bound to a list never pre-selects anything.
    pub fn matches(&self, value: &str, multiple: bool) -> bool {
        match self {
            CurrentValue::None => false,
            CurrentValue::Single(current) => current == value,
            CurrentValue::Many(values) => multiple && values.iter().any(|v| v == value),
        }
    }
}

impl From<&str> for CurrentValue {
    fn from(value: &str) -> Self {
        CurrentValue::Single(value.to_string())
    }
}

impl From<String> for CurrentValue {
    fn from(value: String) -> Self {
        CurrentValue::Single(value)
    }
}

impl<T: Into<CurrentValue>> From<Option<T>> for CurrentValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl From<Vec<String>> for CurrentValue {
    fn from(values: Vec<String>) -> Self {
        CurrentValue::Many(values)
    }
}

impl From<&[String]> for CurrentValue {
    fn from(values: &[String]) -> Self {
        CurrentValue::Many(values.to_vec())
    }
}

/// Field names for records that are only known at runtime (JSON objects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    pub value: String,
    pub text: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            value: "Value".to_string(),
            text: "Text".to_string(),
        }
    }
}

impl FieldNames {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// Read the configured fields from a JSON record.
    pub fn extract(&self, record: &JsonValue) -> RecordFields {
        RecordFields {
            value: record.get(&self.value).and_then(scalar_to_string),
            text: record.get(&self.text).and_then(scalar_to_string),
        }
    }
}

fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

/// Accumulates options for one select, declarative entries first and
/// record-source entries after, in the order they are added.
///
/// ```rust
/// use rhtmx_ui::{CurrentValue, OptionCollector, RecordFields, SelectOption};
///
/// struct Country { code: &'static str, name: &'static str }
/// let countries = [Country { code: "us", name: "United States" }, Country { code: "ca", name: "Canada" }];
///
/// let mut collector = OptionCollector::new(false);
/// collector.declare(SelectOption::new("", "None"));
/// collector.extend_records(&countries, |c| RecordFields::new(c.code, c.name), &"ca".into());
///
/// let options = collector.finish();
/// assert_eq!(options.len(), 3);
/// assert!(options[2].selected);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionCollector {
    multiple: bool,
    options: Vec<SelectOption>,
}

impl OptionCollector {
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            options: Vec::new(),
        }
    }

    /// Append an explicitly declared option as-is.
    pub fn declare(&mut self, option: SelectOption) -> &mut Self {
        self.options.push(option);
        self
    }

    /// Append one option per record, reading value and text through `accessor`.
    pub fn extend_records<I, R, F>(
        &mut self,
        records: I,
        accessor: F,
        current: &CurrentValue,
    ) -> &mut Self
    where
        I: IntoIterator<Item = R>,
        F: Fn(&R) -> RecordFields,
    {
        self.extend_optional_records(records.into_iter().map(Some), accessor, current)
    }

    /// Like [`extend_records`](Self::extend_records), skipping `None` records.
    pub fn extend_optional_records<I, R, F>(
        &mut self,
        records: I,
        accessor: F,
        current: &CurrentValue,
    ) -> &mut Self
    where
        I: IntoIterator<Item = Option<R>>,
        F: Fn(&R) -> RecordFields,
    {
        let before = self.options.len();
        let mut skipped = 0usize;

        for record in records {
            let Some(record) = record else {
                skipped += 1;
                continue;
            };
            let fields = accessor(&record);
            self.push_record(fields, current);
        }

        tracing::debug!(
            added = self.options.len() - before,
            skipped,
            "collected record options"
        );
        self
    }

    /// Append options from JSON records by field name. `null` records are skipped.
    pub fn extend_fields<'a, I>(
        &mut self,
        records: I,
        names: &FieldNames,
        current: &CurrentValue,
    ) -> &mut Self
    where
        I: IntoIterator<Item = &'a JsonValue>,
    {
        self.extend_optional_records(
            records
                .into_iter()
                .map(|record| (!record.is_null()).then_some(record)),
            |record| names.extract(record),
            current,
        )
    }

    fn push_record(&mut self, fields: RecordFields, current: &CurrentValue) {
        // A record with no resolvable value still becomes an option with value ""
        let value = fields.value.unwrap_or_default();
        let text = fields.text.unwrap_or_else(|| value.clone());
        let selected = current.matches(&value, self.multiple);

        self.options.push(SelectOption {
            value,
            text,
            selected,
            disabled: false,
        });
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn finish(self) -> Vec<SelectOption> {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Department {
        id: u32,
        name: Option<&'static str>,
    }

    fn departments() -> Vec<Department> {
        vec![
            Department { id: 1, name: Some("Engineering") },
            Department { id: 2, name: None },
            Department { id: 3, name: Some("Sales") },
        ]
    }

    #[test]
    fn test_one_option_per_record_in_order() {
        let mut collector = OptionCollector::new(false);
        collector.extend_records(
            departments(),
            |d| RecordFields {
                value: Some(d.id.to_string()),
                text: d.name.map(str::to_string),
            },
            &CurrentValue::None,
        );

        let values: Vec<&str> = collector.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_text_falls_back_to_value() {
        let mut collector = OptionCollector::new(false);
        collector.extend_records(
            departments(),
            |d| RecordFields {
                value: Some(d.id.to_string()),
                text: d.name.map(str::to_string),
            },
            &CurrentValue::None,
        );

        assert_eq!(collector.options()[1].text, "2");
        assert_eq!(collector.options()[2].text, "Sales");
    }

    #[test]
    fn test_missing_value_still_emitted() {
        let mut collector = OptionCollector::new(false);
        collector.extend_records(["x"], |_| RecordFields::default(), &CurrentValue::None);

        assert_eq!(collector.options(), &[SelectOption::new("", "")]);
    }

    #[test]
    fn test_null_records_skipped() {
        let records = vec![Some("a"), None, Some("b")];
        let mut collector = OptionCollector::new(false);
        collector.extend_optional_records(records, |r| RecordFields::value_only(r), &CurrentValue::None);

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.options()[1].value, "b");
    }

    #[test]
    fn test_single_current_value_selects_exactly_one() {
        let mut collector = OptionCollector::new(false);
        collector.extend_records(
            ["us", "uk", "ca"],
            |code| RecordFields::value_only(code),
            &"uk".into(),
        );

        let selected: Vec<bool> = collector.options().iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn test_multiple_current_values_select_members() {
        let current = CurrentValue::from(vec!["design".to_string(), "devops".to_string()]);
        let mut collector = OptionCollector::new(true);
        collector.extend_records(
            ["consulting", "design", "testing", "devops"],
            |s| RecordFields::value_only(s),
            &current,
        );

        let selected: Vec<&str> = collector
            .options()
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["design", "devops"]);
    }

    #[test]
    fn test_list_value_does_not_match_single_select() {
        let current = CurrentValue::from(vec!["a".to_string()]);
        let mut collector = OptionCollector::new(false);
        collector.extend_records(["a"], |s| RecordFields::value_only(s), &current);

        assert!(!collector.options()[0].selected);
    }

    #[test]
    fn test_selection_uses_exact_equality() {
        let mut collector = OptionCollector::new(false);
        collector.extend_records(
            ["US", "us", " us"],
            |s| RecordFields::value_only(s),
            &"us".into(),
        );

        let selected: Vec<bool> = collector.options().iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn test_declared_options_come_first() {
        let mut collector = OptionCollector::new(false);
        collector.declare(SelectOption::new("", "Choose...").disabled(true));
        collector.extend_records(["hr"], |s| RecordFields::value_only(s), &CurrentValue::None);
        collector.declare(SelectOption::new("other", "Other").selected(true));

        let options = collector.finish();
        assert_eq!(options[0], SelectOption::new("", "Choose...").disabled(true));
        assert_eq!(options[1].value, "hr");
        assert!(options[2].selected);
    }

    #[test]
    fn test_duplicate_values_kept() {
        let mut collector = OptionCollector::new(false);
        collector.extend_records(["a", "a"], |s| RecordFields::value_only(s), &"a".into());

        assert_eq!(collector.len(), 2);
        assert!(collector.options().iter().all(|o| o.selected));
    }

    #[test]
    fn test_json_records_by_field_name() {
        let records = vec![
            json!({ "Value": "us", "Text": "United States" }),
            json!(null),
            json!({ "Value": 42, "Text": null }),
            json!({ "Text": "No value" }),
            json!({ "Value": true, "Text": ["nested"] }),
        ];
        let mut collector = OptionCollector::new(false);
        collector.extend_fields(&records, &FieldNames::default(), &"42".into());

        let options = collector.finish();
        assert_eq!(
            options,
            vec![
                SelectOption::new("us", "United States"),
                SelectOption::new("42", "42").selected(true),
                SelectOption::new("", "No value"),
                SelectOption::new("true", "true"),
            ]
        );
    }

    #[test]
    fn test_custom_field_names() {
        let records = vec![json!({ "code": "fr", "label": "France" })];
        let mut collector = OptionCollector::new(false);
        collector.extend_fields(&records, &FieldNames::new("code", "label"), &CurrentValue::None);

        assert_eq!(collector.options()[0], SelectOption::new("fr", "France"));
    }

    #[test]
    fn test_current_value_conversions() {
        assert_eq!(CurrentValue::from(None::<String>), CurrentValue::None);
        assert_eq!(CurrentValue::from(Some("x")), CurrentValue::Single("x".to_string()));
        let list = vec!["a".to_string()];
        assert_eq!(CurrentValue::from(list.as_slice()), CurrentValue::Many(list.clone()));
    }
}
