//! Fixed-capacity ring buffer of recent word spans.

use super::tokenizer::Span;

/// The most recent word spans seen during a scan, oldest evicted first.
///
/// Slots are allocated once; pushing past capacity overwrites the oldest
/// span in place and hands it back to the caller.
#[derive(Debug, Clone)]
pub struct SpanWindow {
    slots: Vec<Span>,
    /// Index of the oldest span.
    head: usize,
    len: usize,
}

impl SpanWindow {
    /// Create an empty window holding at most `capacity` spans (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Span::default(); capacity.max(1)],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Push a span as the most recent entry.
    ///
    /// Returns the evicted oldest span if the window was full.
    pub fn push(&mut self, span: Span) -> Option<Span> {
        let cap = self.slots.len();
        if self.len < cap {
            let tail = (self.head + self.len) % cap;
            self.slots[tail] = span;
            self.len += 1;
            None
        } else {
            let evicted = std::mem::replace(&mut self.slots[self.head], span);
            self.head = (self.head + 1) % cap;
            Some(evicted)
        }
    }

    /// The most recently pushed span.
    pub fn latest(&self) -> Option<Span> {
        if self.len == 0 {
            return None;
        }
        Some(self.slots[(self.head + self.len - 1) % self.slots.len()])
    }

    /// Iterate from the most recent span back to the oldest.
    pub fn iter_recent(&self) -> impl Iterator<Item = Span> + '_ {
        let cap = self.slots.len();
        (0..self.len)
            .rev()
            .map(move |i| self.slots[(self.head + i) % cap])
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
