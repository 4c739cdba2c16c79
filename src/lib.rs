//! Phrasemark - fast multi-word phrase detection
//!
//! Finds registered phrases ("entities") from many named groups in a text in
//! a single pass:
//! - Case-insensitive matching that reports the input's own casing
//! - Code-point offsets, so multi-byte scripts index per character
//! - Bucketed lookups keyed by a folded prefix and exact length
//! - Every overlapping or nested match is reported
//! - Concurrent readers, serialized writers per group
//! - Rayon-parallel directory loading and batch search
//!
//! ```
//! use phrasemark::Store;
//!
//! let store = Store::with_groups(["locations", "jobTitles"]);
//! store.add_str("locations", ["San Francisco, USA"]).unwrap();
//! store.add_str("jobTitles", ["golang developer"]).unwrap();
//!
//! let results = store.search_str("A Golang developer from San Francisco, USA.");
//! assert_eq!(results["jobTitles"][0].text, "Golang developer");
//! assert_eq!(results["locations"][0].offset, 24);
//! ```

pub mod core;

pub use crate::core::{
    bucket_key, dump_group, is_separator, load_phrases, word_spans, DirLoad, EntityMatch, Group,
    LoadError, OwnedMatch, OwnedSearchResults, SearchResults, Span, Store, StoreConfig,
    StoreError, DEFAULT_GROUP_CAPACITY, DEFAULT_MAX_ENTITY_LEN, DEFAULT_WINDOW_CAPACITY,
    ENTITY_FILE_SUFFIX,
};
