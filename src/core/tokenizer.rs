//! Word boundary detection over code-point sequences.
//!
//! A word is a maximal run of characters that are neither Unicode
//! punctuation nor whitespace. All offsets are code-point indices into the
//! input slice, never byte offsets, so multi-byte scripts get
//! single-character granularity.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Half-open `[start, end)` code-point range of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Returns true if `c` separates words: any Unicode punctuation
/// (Pc, Pd, Ps, Pe, Pi, Pf, Po) or whitespace.
#[inline]
pub fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return c.is_whitespace() || (c.is_ascii_punctuation() && is_ascii_punct_category(c));
    }
    c.is_whitespace() || c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// ASCII punctuation in the `char::is_ascii_punctuation` sense also covers
/// symbols (`$`, `+`, `<`, `=`, `>`, `^`, `` ` ``, `|`, `~`), which belong to
/// the Symbol categories and are part of words.
#[inline]
fn is_ascii_punct_category(c: char) -> bool {
    !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~')
}

/// Lazy iterator over the word spans of a character slice.
///
/// End of input acts as an implicit separator, so a trailing word that is
/// not followed by punctuation or whitespace is still yielded.
#[derive(Debug, Clone)]
pub struct WordBoundaries<'a> {
    text: &'a [char],
    pos: usize,
}

impl<'a> WordBoundaries<'a> {
    pub fn new(text: &'a [char]) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for WordBoundaries<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let text = self.text;

        // Skip separators up to the next word start
        while self.pos < text.len() && is_separator(text[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= text.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < text.len() && !is_separator(text[self.pos]) {
            self.pos += 1;
        }
        Some(Span::new(start, self.pos))
    }
}

/// Collect every word span of `text` in order.
///
/// # Example
///
/// ```
/// use phrasemark::{word_spans, Span};
///
/// let text: Vec<char> = "hello, 世界".chars().collect();
/// assert_eq!(word_spans(&text), vec![Span::new(0, 5), Span::new(7, 9)]);
/// ```
pub fn word_spans(text: &[char]) -> Vec<Span> {
    WordBoundaries::new(text).collect()
}
