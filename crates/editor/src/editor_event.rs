// Chunk: docs/chunks/editor_state - Events the code window reacts to
//! Editor event types.
//!
//! The host delivers two kinds of input: key presses, and passive
//! notifications that the rendered current line changed height.

use code_window_input::KeyEvent;

/// Everything the editor reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A keyboard event (key down)
    Key(KeyEvent),

    /// The rendered current line was measured at this height, in pixels
    MeasuredHeight(f32),
}

impl From<KeyEvent> for EditorEvent {
    fn from(event: KeyEvent) -> Self {
        EditorEvent::Key(event)
    }
}
