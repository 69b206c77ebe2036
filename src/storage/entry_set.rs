//! Ordered set of free-text entries
//!
//! Used for ingredients and dietary restrictions: values are trimmed,
//! duplicates (exact match) are dropped on insert and insertion order is
//! kept for display.

/// Insertion-ordered, duplicate-free list of strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: Vec<String>,
}

impl EntrySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one value after trimming
    ///
    /// Returns false when the trimmed value is empty or already present.
    pub fn insert(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.entries.push(value.to_string());
        true
    }

    /// Split `raw` on commas and insert every non-empty part
    ///
    /// Returns how many new entries were added.
    pub fn insert_comma_separated(&mut self, raw: &str) -> usize {
        raw.split(',').filter(|part| self.insert(part)).count()
    }

    /// Remove a value; returns true if it was present
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != value);
        self.entries.len() != before
    }

    /// Remove the entry at `index`, if it exists
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Check whether `value` is present
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }

    /// Entries in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Owned copy of the entries, for request bodies
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
