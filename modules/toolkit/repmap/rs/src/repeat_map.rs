use ahash::{HashMap, HashMapExt};

use crate::occurrence::Occurrence;

/// Ordered mapping from an uppercase substring to its occurrences. Entries keep their
/// insertion order and are additionally indexed by value; the position of an entry is a
/// stable identifier of the substring for the lifetime of the map.
#[derive(Debug, Clone, Default)]
pub struct RepeatMap {
    entries: Vec<(String, Vec<Occurrence>)>,
    index: HashMap<String, usize>,
}

impl RepeatMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[Occurrence]> {
        self.position(key).map(|ind| self.entries[ind].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insertion position of the key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Entry at the given insertion position.
    pub fn entry(&self, position: usize) -> (&str, &[Occurrence]) {
        let (key, occurrences) = &self.entries[position];
        (key.as_str(), occurrences.as_slice())
    }

    /// Append an occurrence to the key, creating the entry at the end of the map if needed.
    /// The key is only allocated when it is seen for the first time.
    pub fn push(&mut self, key: &str, occurrence: Occurrence) {
        match self.index.get(key) {
            Some(&ind) => self.entries[ind].1.push(occurrence),
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), vec![occurrence]));
            }
        }
    }

    /// Set the occurrences of a key. An existing key keeps its position and its previous
    /// occurrences are returned.
    pub fn insert(&mut self, key: String, occurrences: Vec<Occurrence>) -> Option<Vec<Occurrence>> {
        match self.index.get(&key) {
            Some(&ind) => Some(std::mem::replace(&mut self.entries[ind].1, occurrences)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, occurrences));
                None
            }
        }
    }

    /// Keep only the entries matching the predicate, preserving their relative order.
    pub fn retain(&mut self, mut predicate: impl FnMut(&str, &[Occurrence]) -> bool) {
        self.entries
            .retain(|(key, occurrences)| predicate(key.as_str(), occurrences.as_slice()));

        self.index.clear();
        for (ind, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), ind);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries
            .iter()
            .map(|(key, occurrences)| (key.as_str(), occurrences.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl PartialEq for RepeatMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for RepeatMap {}

impl FromIterator<(String, Vec<Occurrence>)> for RepeatMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<Occurrence>)>>(iter: T) -> Self {
        let mut map = RepeatMap::new();
        for (key, occurrences) in iter {
            map.insert(key, occurrences);
        }
        map
    }
}

impl IntoIterator for RepeatMap {
    type Item = (String, Vec<Occurrence>);
    type IntoIter = std::vec::IntoIter<(String, Vec<Occurrence>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
