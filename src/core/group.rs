//! A named category of phrases with its bucket index.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use rustc_hash::FxHashMap;

use super::bucket::bucket_key;
use super::config::StoreConfig;
use super::engine::{scan, EntityMatch};
use super::store::StoreError;

/// Bucket index of a group: key -> every phrase sharing that key.
///
/// This is the read-only view the matching engine works against while a
/// group's read lock is held.
#[derive(Debug, Default)]
pub struct GroupIndex {
    buckets: FxHashMap<String, Vec<Vec<char>>>,
    max_len: usize,
    len: usize,
}

impl GroupIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            max_len: 0,
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, phrase: Vec<char>) {
        self.max_len = self.max_len.max(phrase.len());
        self.len += 1;
        self.buckets
            .entry(bucket_key(&phrase))
            .or_default()
            .push(phrase);
    }

    /// Phrases stored under `key`, empty if none.
    #[inline]
    pub fn bucket(&self, key: &str) -> &[Vec<char>] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Longest phrase length seen, in code points.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of stored phrases, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every stored phrase, in no particular order.
    pub fn phrases(&self) -> impl Iterator<Item = &[char]> {
        self.buckets.values().flatten().map(Vec::as_slice)
    }
}

/// A named group of phrases.
///
/// Additions take the write lock; lookups and searches share the read lock.
/// Phrases are never removed and duplicates are kept as separate entries.
#[derive(Debug)]
pub struct Group {
    name: String,
    index: RwLock<GroupIndex>,
}

impl Group {
    /// Create an empty group with room for `capacity` buckets.
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            index: RwLock::new(GroupIndex::with_capacity(capacity)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a single phrase.
    ///
    /// # Errors
    /// Returns [`StoreError::EmptyPhrase`] for an empty phrase,
    /// [`StoreError::LineBreak`] for a phrase containing `\n` or `\r` and
    /// [`StoreError::InvalidState`] if a previous writer panicked.
    pub fn add_phrase(&self, phrase: &[char]) -> Result<(), StoreError> {
        self.add_phrases(std::iter::once(phrase))
    }

    /// Add a batch of phrases under a single write lock.
    ///
    /// The batch is checked before anything is inserted, so a rejected batch
    /// leaves the group unchanged.
    pub fn add_phrases<I, P>(&self, phrases: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[char]>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().to_vec())
            .collect();
        if phrases.iter().any(Vec::is_empty) {
            return Err(StoreError::EmptyPhrase(self.name.clone()));
        }
        // Phrase lists hold one phrase per line
        if phrases
            .iter()
            .any(|p| p.iter().any(|&c| c == '\n' || c == '\r'))
        {
            return Err(StoreError::LineBreak(self.name.clone()));
        }

        let mut index = self.index.write().map_err(|_| {
            StoreError::InvalidState(format!("group '{}' lock poisoned", self.name))
        })?;
        for phrase in phrases {
            index.insert(phrase);
        }
        Ok(())
    }

    /// Shared read access to the bucket index.
    ///
    /// A poisoned lock is recovered: the index is only ever appended to, so a
    /// reader still sees a consistent set of complete phrases.
    pub fn read(&self) -> RwLockReadGuard<'_, GroupIndex> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the phrases stored under `key`, empty if none.
    pub fn lookup(&self, key: &str) -> Vec<Vec<char>> {
        self.read().bucket(key).to_vec()
    }

    pub fn max_len(&self) -> usize {
        self.read().max_len()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of every stored phrase.
    pub fn phrases(&self) -> Vec<Vec<char>> {
        self.read().phrases().map(<[char]>::to_vec).collect()
    }

    /// Search `text` for this group's phrases only.
    pub fn find<'t>(&self, text: &'t [char], config: &StoreConfig) -> Vec<EntityMatch<'t>> {
        let index = self.read();
        scan(text, &[&*index], config)
            .pop()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_add_and_lookup() {
        let group = Group::new("skills", 16);
        group.add_phrase(&chars("PHP")).unwrap();
        group.add_phrase(&chars("PRC")).unwrap();
        group.add_phrase(&chars("Golang")).unwrap();

        assert_eq!(group.lookup("php003"), vec![chars("PHP")]);
        assert_eq!(group.lookup("prc003"), vec![chars("PRC")]);
        assert!(group.lookup("rust004").is_empty());
        assert_eq!(group.max_len(), 6);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_duplicates_kept() {
        let group = Group::new("skills", 16);
        group
            .add_phrases([chars("php"), chars("PHP"), chars("php")])
            .unwrap();

        assert_eq!(group.len(), 3);
        assert_eq!(group.lookup("php003").len(), 3);
    }

    #[test]
    fn test_empty_phrase_rejected() {
        let group = Group::new("skills", 16);
        let result = group.add_phrases([chars("Rust"), Vec::new()]);
        assert!(matches!(result, Err(StoreError::EmptyPhrase(ref name)) if name == "skills"));
        assert!(group.is_empty());
        assert_eq!(group.max_len(), 0);
    }

    #[test]
    fn test_line_break_rejected() {
        let group = Group::new("locations", 16);
        for phrase in ["new\nyork", "new\r\nyork", "trailing\r"] {
            let result = group.add_phrases([chars("Sydney"), chars(phrase)]);
            assert!(
                matches!(result, Err(StoreError::LineBreak(ref name)) if name == "locations"),
                "{:?} should be rejected",
                phrase
            );
        }
        assert!(group.is_empty());
    }

    #[test]
    fn test_phrases_snapshot() {
        let group = Group::new("locations", 16);
        group
            .add_phrases([chars("Sydney"), chars("San Francisco, USA")])
            .unwrap();

        let mut phrases: Vec<String> = group
            .phrases()
            .into_iter()
            .map(|p| p.into_iter().collect())
            .collect();
        phrases.sort();
        assert_eq!(phrases, vec!["San Francisco, USA", "Sydney"]);
    }

    #[test]
    fn test_find_single_group() {
        let group = Group::new("jobTitles", 16);
        group.add_phrase(&chars("golang developer")).unwrap();

        let text = chars("jack was a Golang Developer from sydney");
        let found = group.find(&text, &StoreConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_text(), "Golang Developer");
        assert_eq!(found[0].offset, 11);
    }
}
