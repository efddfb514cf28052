// File: src/toast/mod.rs
// Purpose: Toast notification container and the page-wide window.toast API

mod config;
mod render;
mod store;

pub use config::{ToastConfig, ToastKind, ToastPosition};
pub use render::{ToastMarkup, ToastRenderer, ToastRequest, STYLE_ID};
pub use store::{Silent, SoundError, SoundPlayer, Toast, ToastStore};
