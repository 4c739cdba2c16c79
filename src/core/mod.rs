//! Core matching engine for phrasemark.
//!
//! # Architecture
//!
//! The core is organized from the leaves up:
//!
//! - [`tokenizer`]: word boundary detection over code points
//! - [`bucket`]: case-folded prefix plus length keys used to prune candidates
//! - [`window`]: fixed-capacity ring buffer of recent word spans
//! - [`Group`]: a named bucket index of phrases
//! - [`engine`]: the single-pass scan shared by all groups
//! - [`Store`]: the registry of groups and the public search API
//! - [`loader`]: one-phrase-per-line load and dump, directory load and save
//!
//! # Performance Notes
//!
//! - **Single pass**: the input is tokenized once no matter how many groups
//!   are searched
//! - **Length pruning**: candidates longer than any group's longest phrase,
//!   or the configured maximum, stop the backward walk early
//! - **FxHashMap buckets**: keys are short strings, hashed with Fx
//! - **Key buffer reuse**: candidate keys are written into one buffer per scan
//! - **Rayon**: directory loads and batch searches run in parallel

pub mod bucket;
mod config;
pub mod engine;
mod group;
pub mod loader;
mod store;
pub mod tokenizer;
pub mod window;

pub use bucket::{bucket_key, write_bucket_key};
pub use config::{
    StoreConfig, DEFAULT_GROUP_CAPACITY, DEFAULT_MAX_ENTITY_LEN, DEFAULT_WINDOW_CAPACITY,
};
pub use engine::{scan, EntityMatch, OwnedMatch};
pub use group::{Group, GroupIndex};
pub use loader::{dump_group, load_phrases, DirLoad, LoadError, ENTITY_FILE_SUFFIX};
pub use store::{OwnedSearchResults, SearchResults, Store, StoreError};
pub use tokenizer::{is_separator, word_spans, Span, WordBoundaries};
pub use window::SpanWindow;
