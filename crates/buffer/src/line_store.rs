// Chunk: docs/chunks/line_store - Committed lines plus the editable current line
//!
//! The line store: a fixed prologue, the lines the user has committed, and one
//! mutable current line.
//!
//! Every mutation returns an [`EditOutcome`]. Edits that would break the
//! length cap or have nothing to act on are silent no-ops reported as
//! [`EditOutcome::Unchanged`].

use crate::types::{EditOutcome, Line, Segment};

/// The indent unit inserted by the indent key.
pub const INDENT: &str = "  ";

/// Ordered committed lines plus the raw text of the line being edited.
///
/// Invariant: `current_text().chars().count() <= max_line_length()` at all
/// times. Prologue lines are never mutated or removed.
#[derive(Debug, Clone)]
pub struct LineStore {
    prologue: Vec<Line>,
    prologue_shown: usize,
    committed: Vec<Line>,
    current: String,
    /// Character count of `current`, kept alongside to avoid rescanning
    current_len: usize,
    max_line_length: usize,
}

impl LineStore {
    /// Creates a store with the given prologue and an empty current line.
    ///
    /// `prologue_shown` is clamped to the number of prologue lines.
    pub fn new(prologue: Vec<Line>, prologue_shown: usize, max_line_length: usize) -> Self {
        let prologue_shown = prologue_shown.min(prologue.len());
        Self {
            prologue,
            prologue_shown,
            committed: Vec::new(),
            current: String::new(),
            current_len: 0,
            max_line_length,
        }
    }

    /// Returns the prologue lines that are currently shown.
    pub fn prologue(&self) -> &[Line] {
        &self.prologue[..self.prologue_shown]
    }

    /// Number of prologue lines currently shown.
    pub fn prologue_count(&self) -> usize {
        self.prologue_shown
    }

    /// Returns the lines committed by the user, oldest first.
    pub fn committed(&self) -> &[Line] {
        &self.committed
    }

    /// Iterates over every finished line: shown prologue, then committed.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.prologue().iter().chain(self.committed.iter())
    }

    pub fn current_text(&self) -> &str {
        &self.current
    }

    /// Character count of the current line.
    pub fn current_len(&self) -> usize {
        self.current_len
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Appends a character to the current line if there is room.
    pub fn push_char(&mut self, ch: char) -> EditOutcome {
        if self.current_len >= self.max_line_length {
            return EditOutcome::Unchanged;
        }
        self.current.push(ch);
        self.current_len += 1;
        EditOutcome::CurrentLineChanged
    }

    /// Appends one [`INDENT`] unit if the result still fits.
    pub fn indent(&mut self) -> EditOutcome {
        let indent_len = INDENT.chars().count();
        if self.current_len + indent_len > self.max_line_length {
            return EditOutcome::Unchanged;
        }
        self.current.push_str(INDENT);
        self.current_len += indent_len;
        EditOutcome::CurrentLineChanged
    }

    /// Finalizes the current line.
    ///
    /// `tokenize` turns the raw current text into segments; the result is
    /// appended as a committed line and the current line is reset. An empty
    /// current line commits an empty line.
    pub fn commit<F>(&mut self, tokenize: F) -> EditOutcome
    where
        F: FnOnce(&str) -> Vec<Segment>,
    {
        let text = std::mem::take(&mut self.current);
        self.current_len = 0;

        let line = Line::user(tokenize(&text));
        debug_assert_eq!(line.text(), text, "segments must reconstruct the committed text");
        self.committed.push(line);
        EditOutcome::Committed
    }

    /// Deletes backward.
    ///
    /// Removes the last character of the current line. On an empty current
    /// line, pulls the last committed line back into the current line
    /// (merge-up). With nothing to delete, does nothing.
    pub fn delete_backward(&mut self) -> EditOutcome {
        if self.current.pop().is_some() {
            self.current_len -= 1;
            return EditOutcome::CurrentLineChanged;
        }

        match self.committed.pop() {
            Some(line) => {
                self.current = line.text();
                self.current_len = self.current.chars().count();
                EditOutcome::MergedUp
            }
            None => EditOutcome::Unchanged,
        }
    }
}
