// File: src/icons.rs
// Purpose: Outline SVG icons (24x24, stroke) shared by the components

use maud::{html, Markup};

pub const CHEVRON_DOWN: &str = "M19 9l-7 7-7-7";
pub const SEARCH: &str = "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z";
pub const CHECK: &str = "M5 13l4 4L19 7";
pub const CLOSE: &str = "M6 18L18 6M6 6l12 12";
pub const CHECK_CIRCLE: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
pub const X_CIRCLE: &str = "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z";
pub const INFO_CIRCLE: &str = "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
pub const WARNING: &str = "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z";
pub const DOTS_CIRCLE: &str = "M8 12h.01M12 12h.01M16 12h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

/// Render a single-path outline icon.
pub fn icon(path: &str, class: &str) -> Markup {
    html! {
        svg class=(class) fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(path) {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_markup() {
        let svg = icon(CHECK, "w-4 h-4").into_string();
        assert!(svg.starts_with(r#"<svg class="w-4 h-4" fill="none""#));
        assert!(svg.contains(r#"d="M5 13l4 4L19 7""#));
        assert!(svg.ends_with("</path></svg>"));
    }
}
