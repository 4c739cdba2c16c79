//! Tuning knobs for a [`Store`](super::Store).
//!
//! Configuration is passed explicitly at construction so that several stores
//! with different tuning can live in the same process.

/// Default maximum entity length in code points.
///
/// Phrases longer than this can still be added, but the matching engine
/// never builds a candidate long enough to reach them.
pub const DEFAULT_MAX_ENTITY_LEN: usize = 30;

/// Default number of buckets to allocate up front for a new group.
pub const DEFAULT_GROUP_CAPACITY: usize = 1000;

/// Default number of recent words kept in the sliding window.
pub const DEFAULT_WINDOW_CAPACITY: usize = 20;

/// Configuration shared by a store, its groups and the matching engine.
///
/// # Example
///
/// ```
/// use phrasemark::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_max_entity_len(64)
///     .with_window_capacity(32);
/// assert_eq!(config.max_entity_len, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Upper bound, in code points, on any candidate span.
    pub max_entity_len: usize,
    /// Initial bucket table sizing hint for each group.
    pub group_capacity: usize,
    /// Number of word spans the sliding window holds.
    pub window_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entity_len: DEFAULT_MAX_ENTITY_LEN,
            group_capacity: DEFAULT_GROUP_CAPACITY,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Set the maximum entity length in code points.
    pub fn with_max_entity_len(mut self, max_entity_len: usize) -> Self {
        self.max_entity_len = max_entity_len;
        self
    }

    /// Set the initial bucket table size for new groups.
    pub fn with_group_capacity(mut self, group_capacity: usize) -> Self {
        self.group_capacity = group_capacity;
        self
    }

    /// Set the sliding window capacity. Zero is clamped to one.
    pub fn with_window_capacity(mut self, window_capacity: usize) -> Self {
        self.window_capacity = window_capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.max_entity_len, 30);
        assert_eq!(config.group_capacity, 1000);
        assert_eq!(config.window_capacity, 20);
    }

    #[test]
    fn test_window_capacity_clamped() {
        let config = StoreConfig::default().with_window_capacity(0);
        assert_eq!(config.window_capacity, 1);
    }
}
