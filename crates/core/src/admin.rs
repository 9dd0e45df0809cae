//! Admin working copy of the template list.
//!
//! The registry in [`crate::template`] is immutable; the admin surface
//! operates on a short-lived in-memory copy. Deleting a template here only
//! removes it from the copy -- nothing is persisted, and a reset (or a
//! process restart) restores the full catalog.

use crate::template::TemplateId;

/// Mutable, process-local view of the template catalog for the admin UI.
#[derive(Debug, Clone)]
pub struct TemplateWorkingCopy {
    templates: Vec<TemplateId>,
}

impl TemplateWorkingCopy {
    /// Start from the full registry.
    pub fn new() -> Self {
        Self {
            templates: TemplateId::ALL.to_vec(),
        }
    }

    /// Remaining templates, in display order.
    pub fn list(&self) -> &[TemplateId] {
        &self.templates
    }

    /// Remove a template from the working copy. Returns `false` if it was
    /// already removed.
    pub fn remove(&mut self, id: TemplateId) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| *t != id);
        self.templates.len() < before
    }

    /// Restore the working copy to the full registry.
    pub fn reset(&mut self) {
        self.templates = TemplateId::ALL.to_vec();
    }
}

impl Default for TemplateWorkingCopy {
    fn default() -> Self {
        Self::new()
    }
}
