use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts that remember first-seen order, so equal counts come
/// out of [`most_common`](FrequencyCounter::most_common) in the order the
/// keys first appeared.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.add(key);
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest counts first, at most `limit` entries when given.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    pub fn into_entries(self) -> Vec<(K, usize)> {
        self.entries
    }
}
