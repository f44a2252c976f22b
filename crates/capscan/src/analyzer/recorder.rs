//! Ordered capability recording.

use rustc_hash::FxHashSet;

/// Set of recorded capability identifiers.
///
/// Keeps first-seen order so manifests are stable across runs: recording an
/// identifier twice is a no-op, and iteration yields identifiers in the
/// order they were first observed.
#[derive(Debug, Default)]
pub struct CapabilitySet {
    entries: Vec<&'static str>,
    seen: FxHashSet<&'static str>,
}

impl CapabilitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one capability. Duplicates are ignored.
    pub fn record(&mut self, capability: &'static str) {
        if self.seen.insert(capability) {
            self.entries.push(capability);
        }
    }

    /// Record a batch of capabilities in order.
    pub fn record_all(&mut self, capabilities: &[&'static str]) {
        for capability in capabilities {
            self.record(capability);
        }
    }

    /// True if `capability` has been recorded and not since removed.
    pub fn contains(&self, capability: &str) -> bool {
        self.seen.contains(capability)
    }

    /// Keep only entries the predicate accepts, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|entry| keep(entry));
        self.seen = self.entries.iter().copied().collect();
    }

    /// Recorded capabilities in first-seen order.
    pub fn entries(&self) -> &[&'static str] {
        &self.entries
    }

    /// Iterate recorded capabilities in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }

    /// Number of recorded capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_first_seen_order() {
        let mut set = CapabilitySet::new();
        set.record("Symbol");
        set.record("Promise");
        set.record("Symbol");
        set.record("Map");

        assert_eq!(set.entries(), &["Symbol", "Promise", "Map"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_record_all_preserves_batch_order() {
        let mut set = CapabilitySet::new();
        set.record("Symbol.iterator");
        set.record_all(&["Symbol", "Symbol.iterator", "Map"]);

        assert_eq!(set.entries(), &["Symbol.iterator", "Symbol", "Map"]);
    }

    #[test]
    fn test_retain_drops_entries_and_membership() {
        let mut set = CapabilitySet::new();
        set.record_all(&["Array", "Array.prototype.flat", "Symbol"]);

        set.retain(|entry| !entry.starts_with("Array"));

        assert_eq!(set.entries(), &["Symbol"]);
        assert!(!set.contains("Array"));
        assert!(!set.contains("Array.prototype.flat"));

        // Removed entries can be recorded again.
        set.record("Array");
        assert_eq!(set.entries(), &["Symbol", "Array"]);
    }

    #[test]
    fn test_empty_set() {
        let set = CapabilitySet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains("Symbol"));
        assert_eq!(set.iter().count(), 0);
    }
}
