//! Loading and saving phrase lists.
//!
//! Phrase lists are plain text with one phrase per line. On disk each group
//! lives in its own `<group>.entities.csv` file inside a directory:
//!
//! ```text
//! dictionary/
//!   locations.entities.csv
//!   jobTitles.entities.csv
//!   skills.entities.csv
//! ```
//!
//! Directory loads read every file concurrently. A file that fails to load
//! does not stop the others; its error is reported alongside the store.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::StoreConfig;
use super::group::Group;
use super::store::{Store, StoreError};

/// File name suffix of a group's phrase list.
pub const ENTITY_FILE_SUFFIX: &str = ".entities.csv";

/// Errors that can occur when loading or saving phrase lists.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error reading {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: Box<LoadError>,
    },
    #[error("No entity files found in {}", .0.display())]
    NoEntityFiles(PathBuf),
    #[error("All {} entity files failed to load", .0.len())]
    AllSourcesFailed(Vec<LoadError>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A store loaded from a directory, with the files that failed to load.
#[derive(Debug)]
pub struct DirLoad {
    pub store: Store,
    pub failures: Vec<LoadError>,
}

/// Add every non-empty line of `reader` as a phrase of group `name`.
///
/// The whole reader is consumed before the store is touched: if reading
/// fails, neither the group nor any of its phrases is added. The group is
/// created even if the reader holds no phrases. Returns the number of
/// phrases added.
pub fn load_phrases<R: BufRead>(reader: R, store: &Store, name: &str) -> Result<usize, LoadError> {
    let max_entity_len = store.config().max_entity_len;

    let mut phrases = Vec::new();
    for line in reader.lines() {
        let phrase: Vec<char> = line?.chars().collect();
        if phrase.is_empty() {
            continue;
        }
        if phrase.len() > max_entity_len {
            debug!(
                group = name,
                len = phrase.len(),
                max_entity_len,
                "phrase longer than the maximum entity length will never match"
            );
        }
        phrases.push(phrase);
    }

    let count = phrases.len();
    store.ensure_group(name)?.add_phrases(phrases)?;
    Ok(count)
}

/// Write every phrase of `group` to `writer`, one per line.
pub fn dump_group<W: Write>(group: &Group, writer: W) -> Result<(), LoadError> {
    let mut writer = BufWriter::new(writer);
    let index = group.read();
    for phrase in index.phrases() {
        let line: String = phrase.iter().collect();
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// File name used to persist a group.
fn group_file_name(name: &str) -> String {
    format!("{}{}", name.replace('/', "_"), ENTITY_FILE_SUFFIX)
}

/// Group name for a phrase list file, if the file name carries the suffix.
fn group_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.strip_suffix(ENTITY_FILE_SUFFIX)?;
    (!name.is_empty()).then(|| name.to_string())
}

fn load_file(path: &Path, store: &Store, name: &str) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load_phrases(BufReader::new(file), store, name)
}

impl Store {
    /// Load a store from the `<group>.entities.csv` files in `dir`.
    ///
    /// Files are read in parallel. Succeeds if at least one file loaded;
    /// errors from the other files are returned in [`DirLoad::failures`].
    ///
    /// # Errors
    /// - [`LoadError::Io`] if the directory cannot be listed
    /// - [`LoadError::NoEntityFiles`] if it holds no phrase list files
    /// - [`LoadError::AllSourcesFailed`] if every file failed to load
    pub fn from_dir(dir: impl AsRef<Path>, config: StoreConfig) -> Result<DirLoad, LoadError> {
        let dir = dir.as_ref();
        let mut sources = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = group_name(&path) {
                sources.push((path, name));
            }
        }
        if sources.is_empty() {
            return Err(LoadError::NoEntityFiles(dir.to_path_buf()));
        }

        let store = Store::new(config);
        let outcomes: Vec<Result<usize, LoadError>> = sources
            .par_iter()
            .map(|(path, name)| {
                load_file(path, &store, name).map_err(|e| {
                    warn!(path = %path.display(), error = %e, "failed to load entity file");
                    LoadError::Source {
                        path: path.clone(),
                        source: Box::new(e),
                    }
                })
            })
            .collect();

        let mut loaded = 0;
        let mut phrases = 0;
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(n) => {
                    loaded += 1;
                    phrases += n;
                }
                Err(e) => failures.push(e),
            }
        }
        if loaded == 0 {
            return Err(LoadError::AllSourcesFailed(failures));
        }

        info!(
            dir = %dir.display(),
            groups = loaded,
            phrases,
            failed = failures.len(),
            "loaded entity store"
        );
        Ok(DirLoad { store, failures })
    }

    /// Write every group to `<group>.entities.csv` in `dir`, which must exist.
    ///
    /// A `/` in a group name is written as `_`.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<(), LoadError> {
        let dir = dir.as_ref();
        let groups = self.groups();
        for group in &groups {
            let path = dir.join(group_file_name(group.name()));
            let file = File::create(&path)?;
            dump_group(group, file)?;
        }
        info!(dir = %dir.display(), groups = groups.len(), "saved entity store");
        Ok(())
    }
}
