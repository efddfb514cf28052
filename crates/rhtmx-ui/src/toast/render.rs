// File: src/toast/render.rs
// Purpose: Toast container markup, client script and server-queued notifications

use maud::{html, Markup, PreEscaped, Render};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::{ToastConfig, ToastKind};
use crate::icons::{self, icon};
use crate::js::js_string;
use crate::markup::Element;
use crate::page::PageContext;

/// Id of the keyframes `<style>` element, checked before inserting it again.
pub const STYLE_ID: &str = "rhtmx-toast-animations";

const KEYFRAMES_CSS: &str = "
    @keyframes shrink {
      0% { width: 100%; }
      100% { width: 0%; }
    }
    @keyframes bounce-in {
      0% { transform: scale(0.8); opacity: 0; }
      70% { transform: scale(1.05); opacity: 1; }
      100% { transform: scale(1); opacity: 1; }
    }
    .toast-bounce-in {
      animation: bounce-in 0.5s ease-out forwards;
    }
";

const TOAST_CLASS: &str = "flex items-center p-4 mb-1 text-gray-800 rounded-lg shadow-lg transform transition-all duration-500 ease-out relative overflow-hidden backdrop-blur-sm bg-opacity-95";

// Config-independent, so built once per process
static TOAST_TEMPLATE: Lazy<String> = Lazy::new(|| toast_template().to_html());

/// Rendered toast container plus the script that backs it.
#[derive(Debug, Clone)]
pub struct ToastMarkup {
    pub container_id: String,
    pub html: Markup,
    pub script: String,
}

impl Render for ToastMarkup {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.html.0);
        buffer.push_str("<script>");
        buffer.push_str(&self.script);
        buffer.push_str("</script>");
    }
}

pub struct ToastRenderer;

impl ToastRenderer {
    /// Container markup and script for one toast stack.
    ///
    /// The script is safe to include any number of times per page: the style
    /// block, the `toastComponent` factory and `window.toast` are each
    /// installed only when absent.
    pub fn render(config: &ToastConfig) -> ToastMarkup {
        let container_id = format!("toast-container-{}", Uuid::new_v4().simple());

        tracing::debug!(
            id = %container_id,
            position = %config.position,
            sound = config.enable_sound,
            "rendering toast container"
        );

        let component = format!(
            "toastComponent({{ defaultDuration: {}, enableSound: {} }})",
            config.default_duration_ms, config.enable_sound
        );

        let container = Element::new("div")
            .attr("id", container_id.clone())
            .class(config.container_classes())
            .attr("x-data", component)
            .attr("x-init", "init()")
            .attr("@toast.window", "add($event.detail)")
            .attr("aria-live", "polite")
            .markup(PreEscaped(TOAST_TEMPLATE.clone()));

        ToastMarkup {
            container_id,
            html: container.render(),
            script: client_script(config),
        }
    }

    /// Render into a page: the keyframes `<style>` is emitted server-side the
    /// first time per page, followed by the container and its script.
    pub fn mount(page: &mut PageContext, config: &ToastConfig) -> Markup {
        let toast = Self::render(config);
        html! {
            @if page.install(STYLE_ID) {
                style id=(STYLE_ID) { (PreEscaped(KEYFRAMES_CSS)) }
            }
            (toast)
        }
    }

    /// Script that shows `requests` once Alpine has initialized the page,
    /// e.g. a flash message after a form post.
    pub fn dispatch_script(requests: &[ToastRequest]) -> Markup {
        if requests.is_empty() {
            return html! {};
        }
        let calls: Vec<String> = requests.iter().map(ToastRequest::show_call).collect();
        let script = format!(
            "document.addEventListener('alpine:initialized', () => {{ {}; }});",
            calls.join("; ")
        );
        html! {
            script { (PreEscaped(script)) }
        }
    }
}

fn toast_template() -> Element {
    let accent = kind_class_map(ToastKind::accent_classes);
    let progress = kind_class_map(ToastKind::progress_class);

    let kind_icons = ToastKind::ALL.iter().map(|kind| {
        Element::new("template")
            .attr("x-if", format!("toast.type === '{}'", kind.as_str()))
            .markup(icon(kind.icon_path(), &kind.icon_class()))
    });

    Element::new("template")
        .attr("x-for", "(toast, index) in toasts")
        .attr(":key", "toast.id")
        .child(
            Element::new("div")
                .attr(":class", accent)
                .class(TOAST_CLASS)
                .attr("role", "status")
                .attr(":style", "`transition-delay: ${index * 100}ms`")
                .attr("x-transition:enter", "translate-x-full opacity-0 scale-95")
                .attr("x-transition:enter-start", "translate-x-full opacity-0 scale-95")
                .attr("x-transition:enter-end", "translate-x-0 opacity-100 scale-100")
                .attr("x-transition:leave", "translate-x-0 opacity-100 scale-100")
                .attr("x-transition:leave-start", "translate-x-0 opacity-100 scale-100")
                .attr("x-transition:leave-end", "translate-x-full opacity-0 scale-95")
                // Progress bar shrinks over the toast's lifetime
                .child(
                    Element::new("div")
                        .class("absolute bottom-0 left-0 h-1 bg-opacity-40")
                        .attr(":class", progress)
                        .attr(
                            ":style",
                            "`width: 100%; animation: shrink ${toast.duration}ms linear forwards;`",
                        ),
                )
                .child(Element::new("div").class("flex-shrink-0 mr-3").children(kind_icons))
                .child(
                    Element::new("div").class("flex-1").child(
                        Element::new("div")
                            .class("font-medium")
                            .attr("x-text", "toast.message"),
                    ),
                )
                .child(
                    Element::new("button")
                        .attr("type", "button")
                        .attr("@click", "remove(toast.id)")
                        .class("ml-3 p-1 rounded-full hover:bg-gray-200 focus:outline-none focus:ring-2 focus:ring-gray-300 transition-colors duration-200")
                        .attr("aria-label", "Close toast")
                        .markup(icon(icons::CLOSE, "w-4 h-4 text-gray-500")),
                ),
        )
}

/// Alpine class object keyed on `toast.type`, one entry per kind.
fn kind_class_map(classes: impl Fn(&ToastKind) -> String) -> String {
    let entries: Vec<String> = ToastKind::ALL
        .iter()
        .map(|kind| format!("'{}': toast.type === '{}'", classes(kind), kind.as_str()))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

fn client_script(config: &ToastConfig) -> String {
    let default_duration = config.default_duration_ms;
    let sound_detail = if config.enable_sound {
        "\n            sound: options.sound || null,"
    } else {
        ""
    };

    format!(
        r#"
if (!document.getElementById('{style_id}')) {{
  const style = document.createElement('style');
  style.id = '{style_id}';
  style.textContent = `{keyframes}`;
  document.head.appendChild(style);
}}

if (!window.toastComponent) {{
  window.toastComponent = function (settings) {{
    return {{
      toasts: [],
      defaultDuration: settings.defaultDuration,
      enableSound: settings.enableSound,
      init() {{}},
      add(toast) {{
        const id = Date.now().toString() + Math.random().toString(36).slice(2, 11);
        const duration = toast.duration || this.defaultDuration;
        this.toasts.push({{
          id,
          message: toast.message,
          type: toast.type || 'default',
          duration,
        }});
        if (this.enableSound && toast.sound) {{
          const audio = new Audio(toast.sound);
          audio.volume = 0.5;
          audio.play().catch((e) => console.log('Audio play failed:', e));
        }}
        setTimeout(() => this.remove(id), duration);
      }},
      remove(id) {{
        this.toasts = this.toasts.filter((toast) => toast.id !== id);
      }},
    }};
  }};
}}

if (!window.toast) {{
  window.toast = {{
    show(message, type = 'default', duration = {default_duration}, options = {{}}) {{
      window.dispatchEvent(
        new CustomEvent('toast', {{
          detail: {{
            message,
            type,
            duration,{sound_detail}
          }},
        }})
      );
    }},
    success(message, duration = {default_duration}) {{
      this.show(message, 'success', duration);
    }},
    error(message, duration = {default_duration}) {{
      this.show(message, 'error', duration);
    }},
    info(message, duration = {default_duration}) {{
      this.show(message, 'info', duration);
    }},
    warning(message, duration = {default_duration}) {{
      this.show(message, 'warning', duration);
    }},
  }};
}}
"#,
        style_id = STYLE_ID,
        keyframes = KEYFRAMES_CSS,
        default_duration = default_duration,
        sound_detail = sound_detail,
    )
}

/// A notification to show, either queued server-side or fed to [`ToastStore`](super::ToastStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRequest {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: ToastKind,
    #[serde(rename = "duration", alias = "duration_ms", default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub sound: Option<String>,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: None,
            sound: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Warning)
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn sound(mut self, url: impl Into<String>) -> Self {
        self.sound = Some(url.into());
        self
    }

    /// `window.toast.show(...)` call for this request. A missing duration is
    /// passed as `undefined` so the page default applies.
    pub fn show_call(&self) -> String {
        let duration = self
            .duration_ms
            .map(|d| d.to_string())
            .unwrap_or_else(|| "undefined".to_string());
        let options = match &self.sound {
            Some(sound) => format!("{{ sound: {} }}", js_string(sound)),
            None => "{}".to_string(),
        };
        format!(
            "window.toast.show({}, {}, {}, {})",
            js_string(&self.message),
            js_string(self.kind.as_str()),
            duration,
            options
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastPosition;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_container_attributes() {
        let config = ToastConfig::default().position(ToastPosition::BottomCenter);
        let toast = ToastRenderer::render(&config);
        let html = toast.html.0.clone();

        assert!(toast.container_id.starts_with("toast-container-"));
        assert!(html.starts_with(&format!(r#"<div id="{}""#, toast.container_id)));
        assert!(html.contains(
            r#"class="fixed bottom-4 left-1/2 transform -translate-x-1/2 z-50 flex flex-col gap-3 w-full max-w-sm""#
        ));
        assert!(html.contains(
            r#"x-data="toastComponent({ defaultDuration: 3000, enableSound: false })""#
        ));
        assert!(html.contains(r#"@toast.window="add($event.detail)""#));
    }

    #[test]
    fn test_container_ids_unique() {
        let config = ToastConfig::default();
        let a = ToastRenderer::render(&config);
        let b = ToastRenderer::render(&config);
        assert_ne!(a.container_id, b.container_id);
    }

    #[test]
    fn test_template_has_every_kind() {
        let html = ToastRenderer::render(&ToastConfig::default()).html.0;

        for kind in ToastKind::ALL {
            assert!(html.contains(&format!(r#"x-if="toast.type === '{}'""#, kind.as_str())));
            assert!(html.contains(&kind.accent_classes()));
            assert!(html.contains(&kind.progress_class()));
        }
        assert!(html.contains("animation: shrink ${toast.duration}ms linear forwards;"));
        assert!(html.contains(r#"@click="remove(toast.id)""#));
        assert!(html.contains(r#"x-text="toast.message""#));
    }

    #[test]
    fn test_script_guards_and_defaults() {
        let script = ToastRenderer::render(&ToastConfig::default().default_duration_ms(5000)).script;

        assert!(script.contains("if (!document.getElementById('rhtmx-toast-animations'))"));
        assert!(script.contains("if (!window.toastComponent)"));
        assert!(script.contains("if (!window.toast)"));
        assert!(script.contains("show(message, type = 'default', duration = 5000, options = {})"));
        assert!(script.contains("success(message, duration = 5000)"));
        assert!(script.contains("new CustomEvent('toast'"));
        assert!(!script.contains("sound: options.sound"));
    }

    #[test]
    fn test_script_with_sound() {
        let script = ToastRenderer::render(&ToastConfig::default().enable_sound(true)).script;
        assert!(script.contains("sound: options.sound || null,"));
        assert!(script.contains("audio.play().catch("));
    }

    #[test]
    fn test_render_includes_script() {
        let markup = ToastRenderer::render(&ToastConfig::default()).render().into_string();
        assert!(markup.contains("</div><script>"));
        assert!(markup.ends_with("</script>"));
    }

    #[test]
    fn test_mount_installs_style_once() {
        let mut page = PageContext::new();
        let config = ToastConfig::default();
        let first = ToastRenderer::mount(&mut page, &config).into_string();
        let second = ToastRenderer::mount(&mut page, &config).into_string();

        assert!(first.starts_with(r#"<style id="rhtmx-toast-animations">"#));
        assert!(!second.contains("<style"));
        assert!(page.is_installed(STYLE_ID));
    }

    #[test]
    fn test_show_call() {
        let call = ToastRequest::success("Saved").duration_ms(2000).show_call();
        assert_eq!(call, "window.toast.show('Saved', 'success', 2000, {})");

        let call = ToastRequest::new("It's <done>", ToastKind::Default)
            .sound("/ding.mp3")
            .show_call();
        assert_eq!(
            call,
            r"window.toast.show('It\'s \x3Cdone\x3E', 'default', undefined, { sound: '/ding.mp3' })"
        );
    }

    #[test]
    fn test_dispatch_script() {
        assert_eq!(ToastRenderer::dispatch_script(&[]).into_string(), "");

        let script = ToastRenderer::dispatch_script(&[
            ToastRequest::success("Thanks!"),
            ToastRequest::warning("</script><b>"),
        ])
        .into_string();

        assert!(script.starts_with("<script>document.addEventListener('alpine:initialized'"));
        assert!(script.contains("window.toast.show('Thanks!', 'success', undefined, {})"));
        assert_eq!(script.matches("</script>").count(), 1);
    }

    #[test]
    fn test_request_deserializes_event_detail() {
        let request: ToastRequest = serde_json::from_str(
            r#"{ "message": "Saved", "type": "success", "duration": 2000, "sound": "/ding.mp3" }"#,
        )
        .unwrap();
        assert_eq!(
            request,
            ToastRequest::success("Saved").duration_ms(2000).sound("/ding.mp3")
        );
    }

    #[test]
    fn test_request_unknown_type_falls_back_to_default() {
        let request: ToastRequest =
            serde_json::from_str(r#"{ "message": "Hi", "type": "bogus" }"#).unwrap();
        assert_eq!(request.kind, ToastKind::Default);
        assert_eq!(request.duration_ms, None);

        let missing: ToastRequest = serde_json::from_str(r#"{ "message": "Hi" }"#).unwrap();
        assert_eq!(missing.kind, ToastKind::Default);
    }

    #[test]
    fn test_request_serializes_as_event_detail() {
        let json = serde_json::to_value(ToastRequest::warning("Careful").duration_ms(500)).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["duration"], 500);
    }
}
