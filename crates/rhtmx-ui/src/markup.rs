// File: src/markup.rs
// Purpose: Typed markup tree for Alpine attribute names (@click, :class, x-transition:enter)
// that the html! macro grammar does not accept

use maud::{Escaper, Markup, Render};
use std::fmt::Write;

#[derive(Debug, Clone)]
enum Node {
    Element(Element),
    Text(String),
    Markup(Markup),
}

/// An HTML element with ordered attributes and children.
///
/// Attribute values and text children are escaped on render; `Markup`
/// children are inserted as-is. Implements [`maud::Render`], so an element can
/// be spliced into any `html!` template with `(element)`.
///
/// ```rust
/// use rhtmx_ui::Element;
///
/// let button = Element::new("button")
///     .attr("type", "button")
///     .attr("@click", "toggle()")
///     .text("Open");
///
/// assert_eq!(
///     button.to_html(),
///     r#"<button type="button" @click="toggle()">Open</button>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
    void: bool,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            void: false,
        }
    }

    /// Element without a closing tag (`input`, `meta`, ...). Children are ignored.
    pub fn void(tag: &'static str) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute rendered without a value, e.g. `x-cloak`.
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    /// Appends to the `class` attribute, creating it on first use.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref().trim();
        if classes.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(name, _)| *name == "class") {
            Some((_, Some(existing))) => {
                existing.push(' ');
                existing.push_str(classes);
            }
            _ => self.attrs.push(("class", Some(classes.to_string()))),
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn child_if(self, condition: bool, child: impl FnOnce() -> Element) -> Self {
        if condition {
            self.child(child())
        } else {
            self
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Pre-rendered markup, inserted without escaping.
    pub fn markup(mut self, markup: Markup) -> Self {
        self.children.push(Node::Markup(markup));
        self
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

fn escape_into(buffer: &mut String, text: &str) {
    // Writing into a String cannot fail
    let _ = Escaper::new(buffer).write_str(text);
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.tag);
        for (name, value) in &self.attrs {
            buffer.push(' ');
            buffer.push_str(name);
            if let Some(value) = value {
                buffer.push_str("=\"");
                escape_into(buffer, value);
                buffer.push('"');
            }
        }
        buffer.push('>');

        if self.void {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.render_to(buffer),
                Node::Text(text) => escape_into(buffer, text),
                Node::Markup(markup) => buffer.push_str(&markup.0),
            }
        }

        buffer.push_str("</");
        buffer.push_str(self.tag);
        buffer.push('>');
    }
}
