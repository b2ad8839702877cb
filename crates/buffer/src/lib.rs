// Chunk: docs/chunks/segment_model - Colored segments and committed lines
// Chunk: docs/chunks/line_store - Committed lines plus the editable current line

//! code-window-buffer: the line model behind the code window.
//!
//! # Overview
//!
//! - [`Segment`] / [`ColorTag`]: a run of text and its display category.
//! - [`Line`]: a finished line, either from the fixed prologue or committed
//!   by the user.
//! - [`LineStore`]: the committed lines plus one editable current line.
//!
//! # Example
//!
//! ```
//! use code_window_buffer::{EditOutcome, LineStore, Segment};
//!
//! let mut store = LineStore::new(Vec::new(), 0, 60);
//! store.push_char('x');
//! assert_eq!(store.current_text(), "x");
//!
//! let outcome = store.commit(|text| vec![Segment::plain(text)]);
//! assert_eq!(outcome, EditOutcome::Committed);
//! assert_eq!(store.committed()[0].text(), "x");
//!
//! // Backspace on the now-empty current line pulls it back up.
//! assert_eq!(store.delete_backward(), EditOutcome::MergedUp);
//! assert_eq!(store.current_text(), "x");
//! ```

mod line_store;
mod types;

pub use line_store::{LineStore, INDENT};
pub use types::{ColorTag, EditOutcome, Line, LineOrigin, Segment};
