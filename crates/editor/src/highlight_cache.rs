// Chunk: docs/chunks/highlight_cache - Memoized segments for the current line
//!
//! The current line is re-tokenized after every edit, but many events leave
//! its text untouched (ignored keys, dropped keystrokes at the length cap,
//! height measurements). The cache keys the segments by the exact text they
//! were computed from, so unchanged text is never tokenized twice.

use code_window_buffer::Segment;
use code_window_syntax::Highlighter;

/// Segments for one text value.
#[derive(Debug, Default)]
pub struct HighlightCache {
    text: String,
    segments: Vec<Segment>,
    misses: u64,
}

impl HighlightCache {
    /// Creates an empty cache (valid for the empty string).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the segments for `text`, tokenizing only if `text` differs from
    /// the cached value.
    pub fn get_or_tokenize(&mut self, text: &str, highlighter: &Highlighter) -> &[Segment] {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.segments = highlighter.tokenize(text);
            self.misses += 1;
        }
        &self.segments
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// How many times the cache had to tokenize.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
