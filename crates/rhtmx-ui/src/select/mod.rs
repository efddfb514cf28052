// File: src/select/mod.rs
// Purpose: Searchable single/multi select dropdown driven by Alpine.js

mod config;
mod option;
mod render;
mod state;

pub use config::SelectConfig;
pub use option::{CurrentValue, FieldNames, OptionCollector, RecordFields, SelectOption};
pub use render::{SelectMarkup, SelectRenderer};
pub use state::{Selection, SelectState};
