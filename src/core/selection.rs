//! Ente selection for a new Supervisor
//!
//! Insertion-ordered set of [`EnteSinSupervisor`] keyed by `id`.

use super::models::EnteSinSupervisor;

/// Text shown for missing optional Ente details
pub const NOT_SPECIFIED: &str = "No especificado";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnteSelection {
    entries: Vec<EnteSinSupervisor>,
}

impl EnteSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an Ente; a second add of the same id is a no-op
    pub fn add(&mut self, ente: EnteSinSupervisor) -> bool {
        if self.contains(&ente.id) {
            return false;
        }
        self.entries.push(ente);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<EnteSinSupervisor> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn entries(&self) -> &[EnteSinSupervisor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Identifiers sent as `entesIds`
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    /// Candidates not already selected, in backend order
    pub fn available<'a>(&self, candidates: &'a [EnteSinSupervisor]) -> Vec<&'a EnteSinSupervisor> {
        candidates.iter().filter(|c| !self.contains(&c.id)).collect()
    }
}

/// Display value for an optional detail
pub fn or_not_specified(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NOT_SPECIFIED)
}
