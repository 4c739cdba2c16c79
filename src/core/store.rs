//! Registry of named phrase groups.

use std::sync::{Arc, PoisonError, RwLock};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use super::config::StoreConfig;
use super::engine::{scan, EntityMatch, OwnedMatch};
use super::group::{Group, GroupIndex};

/// Errors raised when adding phrases to a store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid store state: {0}")]
    InvalidState(String),
    #[error("Empty phrase rejected for group '{0}'")]
    EmptyPhrase(String),
    #[error("Phrase with a line break rejected for group '{0}'")]
    LineBreak(String),
}

/// Matches per group name for one searched input.
pub type SearchResults<'t> = FxHashMap<String, Vec<EntityMatch<'t>>>;

/// Matches per group name that own their text.
pub type OwnedSearchResults = FxHashMap<String, Vec<OwnedMatch>>;

/// A collection of phrase groups searched together in one pass.
///
/// Groups are created up front with [`Store::with_groups`] or on first use by
/// [`Store::add`]. The store can be shared between threads; searches may run
/// concurrently with each other and with additions to other groups.
///
/// # Example
///
/// ```
/// use phrasemark::Store;
///
/// let store = Store::with_groups(["skills"]);
/// store.add_str("skills", ["PHP", "golang"]).unwrap();
///
/// let text: Vec<char> = "Maybe php, or Go.".chars().collect();
/// let results = store.search_all(&text);
/// assert_eq!(results["skills"][0].to_text(), "php");
/// assert_eq!(results["skills"][0].offset, 6);
/// ```
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    groups: RwLock<FxHashMap<String, Arc<Group>>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl Store {
    /// Create an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            groups: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create a store with the default configuration and the given empty groups.
    pub fn with_groups<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config_and_groups(StoreConfig::default(), names)
    }

    /// Create a store with the given configuration and empty groups.
    pub fn with_config_and_groups<I, S>(config: StoreConfig, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let group = Arc::new(Group::new(name.clone(), config.group_capacity));
                (name, group)
            })
            .collect();
        Self {
            config,
            groups: RwLock::new(groups),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get a group by name.
    pub fn group(&self, name: &str) -> Option<Arc<Group>> {
        self.groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Get a group by name, creating it if it does not exist yet.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidState`] if the registry lock was poisoned.
    pub fn ensure_group(&self, name: &str) -> Result<Arc<Group>, StoreError> {
        if let Some(group) = self.group(name) {
            return Ok(group);
        }

        let mut groups = self
            .groups
            .write()
            .map_err(|_| StoreError::InvalidState("group registry lock poisoned".to_string()))?;
        // Another writer may have created it between the two locks
        let group = groups
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(group = name, "creating group");
                Arc::new(Group::new(name, self.config.group_capacity))
            })
            .clone();
        Ok(group)
    }

    /// Add phrases to a group, creating the group if needed.
    ///
    /// # Errors
    /// Returns [`StoreError::EmptyPhrase`] if any phrase is empty and
    /// [`StoreError::LineBreak`] if any phrase contains `\n` or `\r` (nothing
    /// is added in either case), and [`StoreError::InvalidState`] on a
    /// poisoned lock.
    pub fn add<I, P>(&self, name: &str, phrases: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[char]>,
    {
        // The registry lock is released before the group lock is taken
        let group = self.ensure_group(name)?;
        group.add_phrases(phrases)
    }

    /// Add phrases given as strings.
    pub fn add_str<I, S>(&self, name: &str, phrases: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<Vec<char>> = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .collect();
        self.add(name, phrases)
    }

    /// Names of all groups, sorted.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }

    /// Snapshot of the registered groups, sorted by name.
    pub(crate) fn groups(&self) -> Vec<Arc<Group>> {
        let mut groups: Vec<Arc<Group>> = self
            .groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        groups.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        groups
    }

    /// Search `text` for the phrases of every group in a single pass.
    ///
    /// Every registered group has an entry in the result, empty when nothing
    /// matched.
    ///
    /// Unlike additions, this holds a shared read guard on every group for
    /// the whole pass. It cannot deadlock: the registry lock is released
    /// before any group guard is taken, guards are taken in group name
    /// order, and writers never hold more than one lock at a time.
    pub fn search_all<'t>(&self, text: &'t [char]) -> SearchResults<'t> {
        // Sorted by name, so guards are always taken in the same order
        let groups = self.groups();
        let guards: Vec<_> = groups.iter().map(|g| g.read()).collect();
        let indexes: Vec<&GroupIndex> = guards.iter().map(|g| &**g).collect();

        let matches = scan(text, &indexes, &self.config);

        groups
            .iter()
            .zip(matches)
            .map(|(group, found)| (group.name().to_string(), found))
            .collect()
    }

    /// Search a string, returning matches that own their text.
    pub fn search_str(&self, text: &str) -> OwnedSearchResults {
        let chars: Vec<char> = text.chars().collect();
        let results: OwnedSearchResults = self
            .search_all(&chars)
            .into_iter()
            .map(|(name, found)| (name, found.into_iter().map(OwnedMatch::from).collect()))
            .collect();
        results
    }

    /// Search a single group. An unknown group yields no matches.
    pub fn search_group<'t>(&self, name: &str, text: &'t [char]) -> Vec<EntityMatch<'t>> {
        match self.group(name) {
            Some(group) => group.find(text, &self.config),
            None => Vec::new(),
        }
    }

    /// Search many documents in parallel.
    pub fn search_batch(&self, texts: &[String]) -> Vec<OwnedSearchResults> {
        texts.par_iter().map(|text| self.search_str(text)).collect()
    }
}
