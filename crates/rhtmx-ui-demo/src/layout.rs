// File: src/layout.rs
// Purpose: Full HTML page shell with Tailwind and Alpine.js loaded from CDN

use maud::{html, Markup, PreEscaped, DOCTYPE};

const TAILWIND_SCRIPT_TAG: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;
const ALPINE_SCRIPT_TAG: &str =
    r#"<script src="https://cdn.jsdelivr.net/npm/alpinejs@3.x.x/dist/cdn.min.js" defer></script>"#;

/// Renders a full HTML page. Alpine is deferred, so inline component scripts
/// in `body` run before it initializes.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                (PreEscaped(TAILWIND_SCRIPT_TAG))
                style { "[x-cloak] { display: none !important; }" }
                (PreEscaped(ALPINE_SCRIPT_TAG))
            }
            body class="bg-gray-50 min-h-screen" {
                (body)
            }
        }
    }
}
