// RHTMX UI - server-rendered Alpine.js components
// Select dropdowns and toast notifications built on Maud markup

pub mod icons;
pub mod js;
pub mod markup;
pub mod page;

// Components
pub mod select;
pub mod toast;

// Re-export Maud for templates
pub use maud::{html as maud, Markup, PreEscaped, DOCTYPE};

// Re-export component types
pub use js::{js_string, AlpineData};
pub use markup::Element;
pub use page::PageContext;
pub use select::{
    CurrentValue, FieldNames, OptionCollector, RecordFields, SelectConfig, SelectMarkup,
    SelectOption, SelectRenderer, SelectState,
};
pub use toast::{
    SoundError, SoundPlayer, Toast, ToastConfig, ToastKind, ToastMarkup, ToastPosition,
    ToastRenderer, ToastRequest, ToastStore,
};
