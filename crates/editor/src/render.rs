// Chunk: docs/chunks/demo_binary - Terminal rendering of an editor snapshot
//!
//! Plain-text and ANSI rendering of an [`EditorSnapshot`].
//!
//! Each line is hard-wrapped at `max_line_length` characters, which is the
//! same rule the row estimator uses, so the printed gutter lines up with the
//! printed rows. The current line is followed by a block cursor.

use std::fmt::Write;

use code_window_buffer::{ColorTag, Segment};
use code_window_syntax::{Rgb, Theme};

use crate::editor_state::EditorSnapshot;

const RESET: &str = "\x1b[0m";
const CURSOR: char = '█';

/// A visual row: the segments (or pieces of segments) that fit on it.
type Row = Vec<(String, ColorTag)>;

/// Splits a line's segments into rows of at most `width` characters.
fn wrap_segments(segments: &[Segment], width: usize) -> Vec<Row> {
    let width = width.max(1);
    let mut rows = vec![Row::new()];
    let mut used = 0;

    for segment in segments {
        let mut piece = String::new();
        for ch in segment.text.chars() {
            if used == width {
                if let Some(row) = rows.last_mut().filter(|_| !piece.is_empty()) {
                    row.push((std::mem::take(&mut piece), segment.tag));
                }
                rows.push(Row::new());
                used = 0;
            }
            piece.push(ch);
            used += 1;
        }
        if let Some(row) = rows.last_mut().filter(|_| !piece.is_empty()) {
            row.push((piece, segment.tag));
        }
    }
    rows
}

fn paint(out: &mut String, text: &str, color: Option<Rgb>) {
    match color {
        Some(Rgb { r, g, b }) => {
            let _ = write!(out, "\x1b[38;2;{};{};{}m{}{}", r, g, b, text, RESET);
        }
        None => out.push_str(text),
    }
}

/// Renders the snapshot with a line-number gutter.
///
/// With `theme` set, segment colors are emitted as 24-bit ANSI escapes;
/// otherwise the output is plain text.
pub fn render(snapshot: &EditorSnapshot, theme: Option<&Theme>) -> String {
    let width = snapshot.max_line_length;
    let mut rows: Vec<Row> = snapshot
        .lines
        .iter()
        .flat_map(|line| wrap_segments(line.segments(), width))
        .collect();

    let mut current = wrap_segments(&snapshot.current_segments, width);
    if let Some(last) = current.last_mut() {
        last.push((CURSOR.to_string(), ColorTag::Default));
    }
    rows.extend(current);

    // The measured height may claim more rows than were printed
    while rows.len() < snapshot.row_count {
        rows.push(Row::new());
    }

    let digits = snapshot.row_count.max(rows.len()).to_string().len();
    let mut out = String::new();
    for (number, row) in (1..).zip(&rows) {
        let label = format!("{:>digits$} │ ", number, digits = digits);
        paint(&mut out, &label, theme.map(|t| t.color(ColorTag::Comment)));
        for (text, tag) in row {
            paint(&mut out, text, theme.map(|t| t.color(*tag)));
        }
        out.push('\n');
    }
    out
}
