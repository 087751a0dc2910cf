use crate::*;
use std::collections::HashMap;

/// Sparse value estimates keyed by [`StateKey`].
///
/// Unseen keys read as zero without being inserted. Entries are never
/// removed, and iteration follows insertion order so that every scan over
/// the table is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable {
    index: HashMap<StateKey, usize>,
    entries: Vec<(StateKey, Value)>,
}

impl QTable {
    pub fn get(&self, key: &StateKey) -> Value {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1)
            .unwrap_or_default()
    }
    pub fn set(&mut self, key: StateKey, value: Value) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, value));
            }
        }
    }
    pub fn contains(&self, key: &StateKey) -> bool {
        self.index.contains_key(key)
    }
    /// Index of the highest valued candidate; the first one wins ties.
    /// Returns 0 for an empty slice.
    pub fn argmax(&self, candidates: &[StateKey]) -> usize {
        candidates
            .iter()
            .map(|key| self.get(key))
            .enumerate()
            .fold((0, Value::NEG_INFINITY), |(best, max), (i, value)| {
                if value > max { (i, value) } else { (best, max) }
            })
            .0
    }
    /// Highest valued entry; the earliest inserted wins ties.
    pub fn best(&self) -> Option<(StateKey, Value)> {
        self.entries
            .iter()
            .fold(None, |best: Option<(StateKey, Value)>, &(key, value)| match best {
                Some((_, max)) if value <= max => best,
                _ => Some((key, value)),
            })
    }
    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(StateKey, Value)> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
