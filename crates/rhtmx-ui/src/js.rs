// File: src/js.rs
// Purpose: JavaScript literal escaping and the Alpine x-data object builder

use std::fmt::Write;

/// Quote `value` as a single-quoted JavaScript string literal.
///
/// Quotes, backslashes and line terminators are escaped so user-controlled
/// text can't terminate the literal. `<`, `>` and `&` are hex-escaped so the
/// literal is also inert inside a `<script>` element or an HTML attribute.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    escape_js_into(&mut out, value);
    out.push('\'');
    out
}

fn escape_js_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\x3C"),
            '>' => out.push_str("\\x3E"),
            '&' => out.push_str("\\x26"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

/// JS array literal of quoted strings: `['a', 'b']`.
pub fn js_string_array<S: AsRef<str>>(values: &[S]) -> String {
    let items: Vec<String> = values.iter().map(|v| js_string(v.as_ref())).collect();
    format!("[{}]", items.join(", "))
}

/// Builder for the object literal placed in an `x-data` attribute.
///
/// Entries keep insertion order. Property values go through [`js_string`];
/// method bodies are trusted code assembled by the component itself.
///
/// ```rust
/// use rhtmx_ui::AlpineData;
///
/// let data = AlpineData::new()
///     .bool("open", false)
///     .string("search", "")
///     .method("toggle()", "this.open = !this.open;")
///     .build();
///
/// assert_eq!(data, "{ open: false, search: '', toggle() { this.open = !this.open; } }");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlpineData {
    entries: Vec<String>,
}

impl AlpineData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bool(self, name: &str, value: bool) -> Self {
        self.raw(name, if value { "true" } else { "false" })
    }

    pub fn number(self, name: &str, value: u64) -> Self {
        self.raw(name, &value.to_string())
    }

    pub fn string(self, name: &str, value: &str) -> Self {
        self.raw(name, &js_string(value))
    }

    pub fn string_list<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        self.raw(name, &js_string_array(values))
    }

    /// Property whose value is an already-built JS expression.
    pub fn raw(mut self, name: &str, expr: &str) -> Self {
        self.entries.push(format!("{}: {}", name, expr));
        self
    }

    /// Method shorthand entry, `signature { body }`.
    pub fn method(mut self, signature: &str, body: &str) -> Self {
        self.entries.push(format!("{} {{ {} }}", signature, body));
        self
    }

    pub fn build(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }
        format!("{{ {} }}", self.entries.join(", "))
    }
}
