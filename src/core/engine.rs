//! Single-pass multi-group matching engine.
//!
//! The engine walks the input once. Every time a word closes it is pushed
//! onto a [`SpanWindow`], and every run of consecutive words ending at that
//! word becomes a candidate span. Candidates are pruned by length, then by
//! bucket key, and only the few phrases sharing a bucket are compared
//! character by character.
//!
//! # Algorithm
//!
//! For each closed word `p2`, walk the window from `p2` back to the oldest
//! span `p1`:
//!
//! 1. The candidate is `[p1.start, p2.end)`. Its length grows with every
//!    step back, so once it exceeds the length limit the walk stops.
//! 2. Groups whose longest phrase is shorter than the candidate are skipped.
//! 3. The remaining groups are probed with the candidate's bucket key and
//!    every phrase of equal length is compared case-insensitively.
//!
//! Overlapping and nested matches are all reported.

use super::bucket::write_bucket_key;
use super::config::StoreConfig;
use super::group::GroupIndex;
use super::tokenizer::WordBoundaries;
use super::window::SpanWindow;

/// A phrase occurrence, borrowing the matched text from the input.
///
/// `text` keeps the casing found in the input, not the registered casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityMatch<'t> {
    pub text: &'t [char],
    /// Code-point index of the first matched character.
    pub offset: usize,
}

impl EntityMatch<'_> {
    /// Length of the match in code points.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Code-point index one past the last matched character.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// The matched text as a `String`.
    pub fn to_text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn to_owned_match(&self) -> OwnedMatch {
        OwnedMatch {
            text: self.to_text(),
            offset: self.offset,
        }
    }
}

/// An [`EntityMatch`] that owns its text, for results that outlive the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedMatch {
    pub text: String,
    pub offset: usize,
}

impl From<EntityMatch<'_>> for OwnedMatch {
    fn from(m: EntityMatch<'_>) -> Self {
        m.to_owned_match()
    }
}

/// Scan `text` once against every group index.
///
/// The returned vector is parallel to `groups`: entry `i` holds the matches
/// for `groups[i]`, in the order they were found.
pub fn scan<'t>(
    text: &'t [char],
    groups: &[&GroupIndex],
    config: &StoreConfig,
) -> Vec<Vec<EntityMatch<'t>>> {
    let mut results: Vec<Vec<EntityMatch<'t>>> = groups.iter().map(|_| Vec::new()).collect();

    // No candidate can be longer than the longest phrase of any group
    let limit = groups
        .iter()
        .map(|g| g.max_len())
        .max()
        .unwrap_or(0)
        .min(config.max_entity_len);
    if limit == 0 {
        return results;
    }

    let mut window = SpanWindow::with_capacity(config.window_capacity);
    let mut key = String::with_capacity(16);

    for word in WordBoundaries::new(text) {
        // Evicted spans are too old to start a candidate ending here
        let _ = window.push(word);

        for p1 in window.iter_recent() {
            let len = word.end - p1.start;
            if len > limit {
                break;
            }
            let candidate = &text[p1.start..word.end];

            let mut keyed = false;
            for (slot, group) in groups.iter().enumerate() {
                if len > group.max_len() {
                    continue;
                }
                if !keyed {
                    write_bucket_key(candidate, &mut key);
                    keyed = true;
                }
                for phrase in group.bucket(&key) {
                    // Keys carry the length, but a collision must never match
                    if phrase.len() != len {
                        continue;
                    }
                    if eq_ignore_case(phrase, candidate) {
                        results[slot].push(EntityMatch {
                            text: candidate,
                            offset: p1.start,
                        });
                    }
                }
            }
        }
    }

    results
}

/// Compare two equal-length character slices ignoring case.
#[inline]
fn eq_ignore_case(a: &[char], b: &[char]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x == y || x.to_lowercase().eq(y.to_lowercase()))
}
