// File: src/page.rs
// Purpose: Per-page render context for assets that must appear once per document

use std::collections::HashSet;

/// Tracks which page-wide assets (style blocks, global scripts) have already
/// been emitted while rendering one document.
///
/// Create one per page render. Components call [`PageContext::install`] before
/// emitting a shared asset and skip it when the id is already present, the
/// same guard the client scripts apply with `document.getElementById`.
#[derive(Debug, Default)]
pub struct PageContext {
    installed: HashSet<&'static str>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as installed. Returns `true` only on the first call for `id`.
    pub fn install(&mut self, id: &'static str) -> bool {
        self.installed.insert(id)
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.installed.contains(id)
    }
}
