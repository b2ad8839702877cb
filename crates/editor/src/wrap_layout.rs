// Chunk: docs/chunks/row_estimator - Gutter row count from wrapped lines
//!
//! Row estimation for the line-number gutter.
//!
//! Finished lines are never measured; with a monospace font their wrapped
//! height follows from the character count alone:
//!
//! ```text
//! rows(line)    = max(1, ceil(line.char_count / cols_per_row))
//! rows(current) = max(1, ceil(measured_height_px / row_height_px))
//! total         = prologue_shown + Σ rows(committed) + rows(current)
//! ```
//!
//! The current line is the exception: it is measured by the host, since its
//! rendered height is what the user actually sees while typing.

use code_window_buffer::Line;

/// Stateless row calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowEstimator {
    /// Height of one visual row in pixels
    row_height_px: f32,
    /// Characters that fit on one visual row
    cols_per_row: usize,
}

impl RowEstimator {
    /// Creates an estimator.
    ///
    /// `cols_per_row` is clamped to at least 1.
    pub fn new(row_height_px: f32, cols_per_row: usize) -> Self {
        Self {
            row_height_px,
            cols_per_row: cols_per_row.max(1),
        }
    }

    #[inline]
    pub fn row_height_px(&self) -> f32 {
        self.row_height_px
    }

    #[inline]
    pub fn cols_per_row(&self) -> usize {
        self.cols_per_row
    }

    /// Rows covered by a rendered element of the given height.
    ///
    /// Rounds up and never returns less than 1. Heights that are not a
    /// positive finite number count as one row.
    pub fn rows_for_height(&self, height_px: f32) -> usize {
        let rows = (height_px / self.row_height_px).ceil();
        if rows.is_finite() && rows >= 1.0 {
            rows as usize
        } else {
            1
        }
    }

    /// Rows needed for a line of `char_count` characters (at least 1).
    #[inline]
    pub fn rows_for_chars(&self, char_count: usize) -> usize {
        char_count.div_ceil(self.cols_per_row).max(1)
    }

    /// Height a line of `char_count` characters would render at.
    ///
    /// For hosts that cannot measure the current line themselves.
    pub fn estimate_height_px(&self, char_count: usize) -> f32 {
        self.rows_for_chars(char_count) as f32 * self.row_height_px
    }

    /// Total rows for the gutter.
    ///
    /// Each shown prologue line counts as one row; committed lines wrap by
    /// character count; the current line counts by its measured height.
    pub fn total_rows<'a>(
        &self,
        prologue_shown: usize,
        committed: impl IntoIterator<Item = &'a Line>,
        current_height_px: f32,
    ) -> usize {
        let committed_rows: usize = committed
            .into_iter()
            .map(|line| self.rows_for_chars(line.char_count()))
            .sum();
        prologue_shown + committed_rows + self.rows_for_height(current_height_px)
    }
}

// =============================================================================
// Tests
// =============================================================================
