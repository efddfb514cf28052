// File: src/select/render.rs
// Purpose: Markup and Alpine state generation for the select component

use maud::{Markup, Render};

use super::config::SelectConfig;
use super::option::{OptionCollector, SelectOption};
use super::state::{Selection, SelectState};
use crate::icons::{self, icon};
use crate::js::{js_string, AlpineData};
use crate::markup::Element;

const BUTTON_CLASS: &str = "relative w-full bg-white border border-gray-300 rounded-md shadow-sm pl-3 pr-10 py-2 text-left cursor-default focus:outline-none focus:ring-1 focus:ring-blue-500 focus:border-blue-500 sm:text-sm";
const PANEL_CLASS: &str = "absolute z-10 mt-1 w-full bg-white shadow-lg rounded-md py-1 text-base ring-1 ring-black ring-opacity-5 overflow-auto focus:outline-none sm:text-sm";
const SEARCH_INPUT_CLASS: &str = "block w-full pl-8 pr-3 py-2 border border-gray-300 rounded-md leading-5 bg-white placeholder-gray-500 focus:outline-none focus:placeholder-gray-400 focus:ring-1 focus:ring-blue-500 focus:border-blue-500 sm:text-sm";
const OPTION_CLASS: &str = "cursor-pointer select-none relative py-2 pl-3 pr-9 hover:bg-blue-50";

/// Rendered select: the markup and the `x-data` descriptor it carries.
#[derive(Debug, Clone)]
pub struct SelectMarkup {
    pub html: Markup,
    pub state: String,
}

impl Render for SelectMarkup {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.html.0);
    }
}

/// Renders a dropdown select whose filtering, selection and display text are
/// evaluated client-side against the embedded options snapshot.
///
/// ```rust
/// use rhtmx_ui::{SelectConfig, SelectOption, SelectRenderer};
///
/// let options = vec![
///     SelectOption::new("us", "United States"),
///     SelectOption::new("ca", "Canada").selected(true),
/// ];
/// let select = SelectRenderer::render(&options, &SelectConfig::new("country"));
///
/// assert!(select.state.contains("selected: 'ca'"));
/// assert!(select.html.0.contains(r#"name="country""#));
/// ```
pub struct SelectRenderer;

impl SelectRenderer {
    pub fn render(options: &[SelectOption], config: &SelectConfig) -> SelectMarkup {
        tracing::debug!(
            name = %config.input_name,
            options = options.len(),
            multiple = config.multiple,
            searchable = config.searchable,
            "rendering select"
        );

        let state = SelectState::new(options.to_vec(), config);
        let descriptor = state_descriptor(&state, config);

        let wrapper = Element::new("div")
            .attr("x-data", descriptor.clone())
            .class("relative w-full")
            .class(config.css_class.as_deref().unwrap_or_default())
            .child_if(config.label.is_some(), || label(config))
            .child(
                Element::new("div")
                    .class("relative")
                    .child(toggle_button(&state, config))
                    .child(dropdown_panel(config)),
            )
            .child(hidden_inputs(&state, config));

        SelectMarkup {
            html: wrapper.render(),
            state: descriptor,
        }
    }

    pub fn render_collected(collector: OptionCollector, config: &SelectConfig) -> SelectMarkup {
        Self::render(&collector.finish(), config)
    }
}

/// The `x-data` object: state fields plus the named methods page code relies on.
pub(crate) fn state_descriptor(state: &SelectState, config: &SelectConfig) -> String {
    let placeholder = js_string(config.placeholder_text());

    let data = AlpineData::new()
        .bool("open", false)
        .string("search", "");

    let data = match state.selection() {
        Selection::Single(value) => data.string("selected", value),
        Selection::Many(values) => data.string_list("selected", values),
    };

    let data = data
        .raw("options", &options_literal(state.options()))
        .method("toggle()", "this.open = !this.open;")
        .method("close()", "this.open = false; this.search = '';");

    let data = if config.multiple {
        data.method(
            "selectOption(option)",
            "if (option.disabled) return; \
             if (this.selected.includes(option.value)) { this.selected = this.selected.filter(item => item !== option.value); } \
             else { this.selected.push(option.value); }",
        )
        .method("isSelected(option)", "return this.selected.includes(option.value);")
        .method(
            "getDisplayText()",
            &format!(
                "if (this.selected.length === 0) return {}; \
                 if (this.selected.length === 1) {{ const option = this.options.find(opt => opt.value === this.selected[0]); return option ? option.text : this.selected[0]; }} \
                 return this.selected.length + ' selected';",
                placeholder
            ),
        )
    } else {
        data.method(
            "selectOption(option)",
            "if (option.disabled) return; this.selected = option.value; this.close();",
        )
        .method("isSelected(option)", "return this.selected === option.value;")
        .method(
            "getDisplayText()",
            &format!(
                "if (!this.selected) return {}; \
                 const option = this.options.find(opt => opt.value === this.selected); \
                 return option ? option.text : this.selected;",
                placeholder
            ),
        )
    };

    let data = data.method(
        "filteredOptions()",
        "if (!this.search) return this.options; \
         const term = this.search.toLowerCase(); \
         return this.options.filter(option => option.text.toLowerCase().includes(term));",
    );

    let data = if config.multiple {
        data.method(
            "selectAll()",
            "const targets = this.filteredOptions().filter(option => !option.disabled); \
             if (targets.every(option => this.selected.includes(option.value))) { this.selected = this.selected.filter(value => !targets.some(option => option.value === value)); } \
             else { targets.forEach(option => { if (!this.selected.includes(option.value)) this.selected.push(option.value); }); }",
        )
    } else {
        data
    };

    data.build()
}

fn options_literal(options: &[SelectOption]) -> String {
    let items: Vec<String> = options
        .iter()
        .map(|o| {
            format!(
                "{{ value: {}, text: {}, disabled: {} }}",
                js_string(&o.value),
                js_string(&o.text),
                o.disabled
            )
        })
        .collect();
    format!("[{}]", items.join(", "))
}

fn label(config: &SelectConfig) -> Element {
    Element::new("label")
        .attr("for", config.element_id())
        .class("block text-sm font-medium text-gray-700 mb-1")
        .text(config.label.clone().unwrap_or_default())
}

fn toggle_button(state: &SelectState, config: &SelectConfig) -> Element {
    Element::new("button")
        .attr("id", config.element_id())
        .attr("type", "button")
        .attr("@click", "toggle()")
        .attr("aria-haspopup", "listbox")
        .attr(":aria-expanded", "open.toString()")
        .class(BUTTON_CLASS)
        .attr(":class", "{ 'ring-1 ring-blue-500 border-blue-500': open }")
        .child(
            Element::new("span")
                .class("block truncate")
                .attr("x-text", "getDisplayText()")
                .text(state.display_text()),
        )
        .child(
            Element::new("span")
                .class("absolute inset-y-0 right-0 flex items-center pr-2 pointer-events-none")
                .child(
                    Element::new("div")
                        .attr(":class", "{ 'rotate-180': open }")
                        .class("transition-transform duration-200")
                        .markup(icon(icons::CHEVRON_DOWN, "w-5 h-5 text-gray-400")),
                ),
        )
}

fn dropdown_panel(config: &SelectConfig) -> Element {
    Element::new("div")
        .attr("x-show", "open")
        .attr("@click.away", "close()")
        .attr("@keydown.escape.window", "close()")
        .attr("x-transition:enter", "transition ease-out duration-100")
        .attr("x-transition:enter-start", "transform opacity-0 scale-95")
        .attr("x-transition:enter-end", "transform opacity-100 scale-100")
        .attr("x-transition:leave", "transition ease-in duration-75")
        .attr("x-transition:leave-start", "transform opacity-100 scale-100")
        .attr("x-transition:leave-end", "transform opacity-0 scale-95")
        .attr("role", "listbox")
        .class(PANEL_CLASS)
        .class(&config.max_height_class)
        .flag("x-cloak")
        .child_if(config.searchable, || search_box(config))
        .child_if(config.multiple, || select_all_row(config))
        .child(
            Element::new("div")
                .attr("x-show", "filteredOptions().length === 0")
                .class("px-3 py-2 text-gray-500")
                .text(config.no_results_text.clone()),
        )
        .child(option_rows())
}

fn search_box(config: &SelectConfig) -> Element {
    Element::new("div")
        .class("px-2 py-2 border-b border-gray-200")
        .child(
            Element::new("div")
                .class("relative")
                .child(
                    Element::new("div")
                        .class("absolute inset-y-0 left-0 pl-2 flex items-center pointer-events-none")
                        .markup(icon(icons::SEARCH, "w-4 h-4 text-gray-400")),
                )
                .child(
                    Element::void("input")
                        .attr("type", "text")
                        .attr("x-model", "search")
                        .attr("placeholder", config.search_placeholder.clone())
                        .attr("autocomplete", "off")
                        .class(SEARCH_INPUT_CLASS),
                ),
        )
}

fn select_all_row(config: &SelectConfig) -> Element {
    Element::new("div")
        .attr("x-show", "filteredOptions().length > 0")
        .attr("@click", "selectAll()")
        .class("cursor-pointer select-none py-2 pl-3 pr-9 text-blue-600 font-medium border-b border-gray-100 hover:bg-blue-50")
        .text(config.select_all_text.clone())
}

fn option_rows() -> Element {
    // Keyed by position so duplicate values each get a row
    Element::new("template")
        .attr("x-for", "(option, index) in filteredOptions()")
        .attr(":key", "index")
        .child(
            Element::new("div")
                .attr("@click", "selectOption(option)")
                .attr("role", "option")
                .attr(":aria-selected", "isSelected(option).toString()")
                .attr(":aria-disabled", "option.disabled.toString()")
                .class(OPTION_CLASS)
                .attr(
                    ":class",
                    "{ 'bg-blue-50': isSelected(option), 'opacity-50 cursor-not-allowed': option.disabled }",
                )
                .child(
                    Element::new("span")
                        .class("block truncate")
                        .attr(":class", "{ 'font-semibold': isSelected(option) }")
                        .attr("x-text", "option.text"),
                )
                .child(
                    Element::new("span")
                        .attr("x-show", "isSelected(option)")
                        .class("absolute inset-y-0 right-0 flex items-center pr-4 text-blue-600")
                        .markup(icon(icons::CHECK, "w-4 h-4")),
                ),
        )
}

fn hidden_inputs(state: &SelectState, config: &SelectConfig) -> Element {
    if config.multiple {
        let name = js_string(&config.input_name);
        // One input per selected value: name[0], name[1], ...
        Element::new("template")
            .attr("x-for", "(value, index) in selected")
            .attr(":key", "index")
            .child(
                Element::void("input")
                    .attr("type", "hidden")
                    .attr(":name", format!("{} + '[' + index + ']'", name))
                    .attr(":value", "value"),
            )
    } else {
        let initial = match state.selection() {
            Selection::Single(value) => value.clone(),
            Selection::Many(_) => String::new(),
        };
        Element::void("input")
            .attr("type", "hidden")
            .attr("name", config.input_name.clone())
            .attr(":value", "selected")
            .attr("value", initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn countries() -> Vec<SelectOption> {
        vec![
            SelectOption::new("us", "United States"),
            SelectOption::new("uk", "United Kingdom"),
            SelectOption::new("ca", "Canada"),
        ]
    }

    #[test]
    fn test_single_select_descriptor() {
        let select = SelectRenderer::render(&countries(), &SelectConfig::new("country"));

        assert!(select.state.starts_with("{ open: false, search: '', selected: '', options: ["));
        assert!(select.state.contains("{ value: 'us', text: 'United States', disabled: false }"));
        for method in [
            "toggle()",
            "close()",
            "selectOption(option)",
            "isSelected(option)",
            "getDisplayText()",
            "filteredOptions()",
        ] {
            assert!(select.state.contains(method), "missing {}", method);
        }
        assert!(!select.state.contains("selectAll()"));
        assert!(select.state.contains("return 'Select option';"));
    }

    #[test]
    fn test_single_select_descriptor_exact() {
        let options = vec![
            SelectOption::new("us", "United States"),
            SelectOption::new("ca", "Canada"),
        ];
        let select =
            SelectRenderer::render(&options, &SelectConfig::new("country").placeholder("Pick one"));

        assert_eq!(
            select.state,
            "{ open: false, search: '', selected: '', \
             options: [{ value: 'us', text: 'United States', disabled: false }, \
             { value: 'ca', text: 'Canada', disabled: false }], \
             toggle() { this.open = !this.open; }, \
             close() { this.open = false; this.search = ''; }, \
             selectOption(option) { if (option.disabled) return; this.selected = option.value; this.close(); }, \
             isSelected(option) { return this.selected === option.value; }, \
             getDisplayText() { if (!this.selected) return 'Pick one'; \
             const option = this.options.find(opt => opt.value === this.selected); \
             return option ? option.text : this.selected; }, \
             filteredOptions() { if (!this.search) return this.options; \
             const term = this.search.toLowerCase(); \
             return this.options.filter(option => option.text.toLowerCase().includes(term)); } }"
        );
    }

    #[test]
    fn test_multi_select_methods_exact() {
        let select = SelectRenderer::render(
            &countries(),
            &SelectConfig::new("countries").multiple(true).placeholder("Pick some"),
        );

        for method in [
            "selectOption(option) { if (option.disabled) return; \
             if (this.selected.includes(option.value)) { this.selected = this.selected.filter(item => item !== option.value); } \
             else { this.selected.push(option.value); } }",
            "isSelected(option) { return this.selected.includes(option.value); }",
            "getDisplayText() { if (this.selected.length === 0) return 'Pick some'; \
             if (this.selected.length === 1) { const option = this.options.find(opt => opt.value === this.selected[0]); return option ? option.text : this.selected[0]; } \
             return this.selected.length + ' selected'; }",
            "selectAll() { const targets = this.filteredOptions().filter(option => !option.disabled); \
             if (targets.every(option => this.selected.includes(option.value))) { this.selected = this.selected.filter(value => !targets.some(option => option.value === value)); } \
             else { targets.forEach(option => { if (!this.selected.includes(option.value)) this.selected.push(option.value); }); } }",
        ] {
            assert!(select.state.contains(method), "missing {}", method);
        }
    }

    #[test]
    fn test_server_display_text_matches_model() {
        // The span's SSR text and the model must agree for each selection shape
        let config = SelectConfig::new("countries").multiple(true).placeholder("Pick some");
        for selected in [vec![], vec![1], vec![0, 2]] {
            let mut options = countries();
            for &i in &selected {
                options[i].selected = true;
            }
            let expected = SelectState::new(options.clone(), &config).display_text();
            let select = SelectRenderer::render(&options, &config);
            let span = format!(r#"x-text="getDisplayText()">{}</span>"#, expected);
            assert!(select.html.0.contains(&span), "missing {}", span);
        }
        assert_eq!(
            SelectState::new(countries(), &config).display_text(),
            "Pick some"
        );
    }

    #[test]
    fn test_multi_select_descriptor() {
        let select =
            SelectRenderer::render(&countries(), &SelectConfig::new("countries").multiple(true));

        assert!(select.state.contains("selected: []"));
        assert!(select.state.contains("this.selected.includes(option.value)"));
        assert!(select.state.contains("' selected'"));
        assert!(select.state.contains("selectAll()"));
    }

    #[test]
    fn test_selected_options_seed_state() {
        let mut options = countries();
        options[0].selected = true;
        options[2].selected = true;
        let select = SelectRenderer::render(&options, &SelectConfig::new("c").multiple(true));

        assert!(select.state.contains("selected: ['us', 'ca']"));
        assert!(select.html.0.contains(">2 selected</span>"));
    }

    #[test]
    fn test_initial_display_text_rendered() {
        let mut options = countries();
        options[1].selected = true;
        let select = SelectRenderer::render(&options, &SelectConfig::new("country"));

        assert!(select
            .html
            .0
            .contains(r#"<span class="block truncate" x-text="getDisplayText()">United Kingdom</span>"#));
        assert!(select.html.0.contains(r#"value="uk""#));
    }

    #[test]
    fn test_search_box_only_when_searchable() {
        let with = SelectRenderer::render(&countries(), &SelectConfig::new("c"));
        let without = SelectRenderer::render(&countries(), &SelectConfig::new("c").searchable(false));

        assert!(with.html.0.contains(r#"x-model="search""#));
        assert!(with.html.0.contains(r#"placeholder="Search...""#));
        assert!(!without.html.0.contains(r#"x-model="search""#));
    }

    #[test]
    fn test_no_results_row() {
        let select = SelectRenderer::render(&[], &SelectConfig::new("c"));
        assert!(select
            .html
            .0
            .contains(r#"<div x-show="filteredOptions().length === 0" class="px-3 py-2 text-gray-500">No results found</div>"#));
        assert!(select.state.contains("options: []"));
    }

    #[test]
    fn test_single_hidden_input() {
        let select = SelectRenderer::render(&countries(), &SelectConfig::new("country"));
        assert!(select
            .html
            .0
            .contains(r#"<input type="hidden" name="country" :value="selected" value="">"#));
    }

    #[test]
    fn test_multi_hidden_inputs_are_indexed() {
        let select = SelectRenderer::render(&countries(), &SelectConfig::new("services").multiple(true));
        let html = select.html.0;

        assert!(html.contains(r#"x-for="(value, index) in selected""#));
        assert!(html.contains(r#":name="'services' + '[' + index + ']'""#));
        assert!(!html.contains(r#"name="services""#));
    }

    #[test]
    fn test_label_and_ids() {
        let config = SelectConfig::new("department")
            .input_id("dept")
            .label("Department")
            .css_class("mb-4");
        let html = SelectRenderer::render(&countries(), &config).html.0;

        assert!(html.starts_with("<div x-data="));
        assert!(html.contains(r#"class="relative w-full mb-4""#));
        assert!(html.contains(r#"<label for="dept" class="block text-sm font-medium text-gray-700 mb-1">Department</label>"#));
        assert!(html.contains(r#"<button id="dept" type="button""#));
    }

    #[test]
    fn test_descriptor_is_attribute_escaped() {
        let options = vec![SelectOption::new("a", "Say \"hi\"")];
        let select = SelectRenderer::render(&options, &SelectConfig::new("c"));

        assert!(select.state.contains(r#"text: 'Say \"hi\"'"#));
        // Inside the attribute every double quote is an entity
        assert!(select.html.0.contains(r#"text: 'Say \&quot;hi\&quot;'"#));
    }

    #[test]
    fn test_max_height_class_applied() {
        let mut config = SelectConfig::new("c");
        config.max_height_class = "max-h-40".to_string();
        let html = SelectRenderer::render(&countries(), &config).html.0;
        assert!(html.contains("overflow-auto focus:outline-none sm:text-sm max-h-40"));
    }

    #[test]
    fn test_render_collected() {
        let mut collector = OptionCollector::new(false);
        collector.declare(SelectOption::new("x", "X").selected(true));
        let select = SelectRenderer::render_collected(collector, &SelectConfig::new("c"));
        assert_eq!(
            select.state.split(", options").next(),
            Some("{ open: false, search: '', selected: 'x'")
        );
    }
}
