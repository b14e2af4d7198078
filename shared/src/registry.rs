use std::collections::HashMap;

/// Click counts keyed by marker label. Markers sharing a label share a count.
#[derive(Debug, Clone, Default)]
pub struct MarkerClickRegistry {
    counts: HashMap<String, u32>,
}

impl MarkerClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `label`, starting from 0 when absent. Returns the new count.
    pub fn bump(&mut self, label: &str) -> u32 {
        let slot = self.counts.entry(label.to_string()).or_insert(0);
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.counts.get(label).copied()
    }

    /// Count shown in a popup; absent labels read as 0.
    pub fn count(&self, label: &str) -> u32 {
        self.get(label).unwrap_or(0)
    }

    pub fn set_zero(&mut self, label: &str) {
        self.counts.insert(label.to_string(), 0);
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
