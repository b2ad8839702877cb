// Chunk: docs/chunks/editor_state - Key-driven editor state machine
//!
//! code-window library interface.
//!
//! A simulated code editor: a fixed prologue of pre-highlighted lines, then
//! an editable region where each typed line is highlighted as Python.
//!
//! ```
//! use code_window::{CodeWindow, EditorConfig, Key, KeyEvent};
//!
//! let mut window = CodeWindow::new(EditorConfig::default()).unwrap();
//! for ch in "x = 1".chars() {
//!     window.handle_key(&KeyEvent::char(ch));
//! }
//! window.handle_key(&KeyEvent::plain(Key::Return));
//!
//! assert_eq!(window.committed()[0].text(), "x = 1");
//! assert_eq!(window.row_count(), 8);
//! ```
//!
//! The data model lives in `code-window-buffer`, the tokenizer in
//! `code-window-syntax`, and the key types in `code-window-input`; the
//! commonly used ones are re-exported here.

mod config;
mod editor_event;
mod editor_state;
mod error;
mod event_channel;
mod highlight_cache;
mod prologue;
pub mod render;
mod wrap_layout;

pub use config::{
    EditorConfig, DEFAULT_MAX_LINE_LENGTH, DEFAULT_ROW_HEIGHT_PX, MAX_LINE_LENGTH_ENV,
    ROW_HEIGHT_ENV,
};
pub use editor_event::EditorEvent;
pub use editor_state::{CodeWindow, EditorSnapshot};
pub use error::ConfigError;
pub use event_channel::{create_event_channel, EventReceiver, EventSender, HeightObserver};
pub use highlight_cache::HighlightCache;
pub use prologue::student_prologue;
pub use wrap_layout::RowEstimator;

pub use code_window_buffer::{ColorTag, Line, LineOrigin, Segment};
pub use code_window_input::{Key, KeyEvent, Modifiers};
pub use code_window_syntax::{tokenize, Theme};
