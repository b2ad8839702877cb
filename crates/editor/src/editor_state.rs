// Chunk: docs/chunks/editor_state - Key-driven editor state machine
//!
//! Editor state container.
//!
//! [`CodeWindow`] consolidates all mutable editor state: the line store, the
//! memoized highlighting of the current line, the last measured height of
//! the rendered current line, and the gutter row count derived from them.
//!
//! Every event is applied synchronously and completely: the buffer is
//! mutated, the current line is re-highlighted, and the row count is
//! recomputed before the call returns.

use code_window_buffer::{EditOutcome, Line, LineStore, Segment};
use code_window_input::{Key, KeyEvent};
use code_window_syntax::Highlighter;
use tracing::{debug, trace};

use crate::config::EditorConfig;
use crate::editor_event::EditorEvent;
use crate::error::ConfigError;
use crate::event_channel::{create_event_channel, EventReceiver, EventSender, HeightObserver, ObserverSlot};
use crate::highlight_cache::HighlightCache;
use crate::wrap_layout::RowEstimator;

/// Owned copy of everything a presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    /// Shown prologue lines followed by committed user lines
    pub lines: Vec<Line>,
    pub current_text: String,
    pub current_segments: Vec<Segment>,
    /// Total visual rows, the length of the gutter
    pub row_count: usize,
    pub max_line_length: usize,
}

impl EditorSnapshot {
    /// Line-number labels for the gutter, `1..=row_count`.
    pub fn gutter(&self) -> impl Iterator<Item = usize> {
        1..=self.row_count
    }
}

/// The simulated code editor.
#[derive(Debug)]
pub struct CodeWindow {
    store: LineStore,
    highlighter: Highlighter,
    /// Segments for the current line, keyed by its text
    current: HighlightCache,
    estimator: RowEstimator,
    /// Last height reported for the rendered current line
    measured_height_px: f32,
    row_count: usize,
    sender: EventSender,
    receiver: EventReceiver,
    observers: ObserverSlot,
}

impl Default for CodeWindow {
    fn default() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }
}

impl CodeWindow {
    /// Creates an editor from `config`.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        let prologue = config.prologue_lines();
        let store = LineStore::new(prologue, config.prologue_shown, config.max_line_length);
        let estimator = RowEstimator::new(config.row_height_px, config.max_line_length);
        let (sender, receiver) = create_event_channel();

        let mut window = Self {
            store,
            highlighter: Highlighter::new(config.vocabulary),
            current: HighlightCache::new(),
            estimator,
            measured_height_px: config.row_height_px,
            row_count: 0,
            sender,
            receiver,
            observers: ObserverSlot::default(),
        };
        window.relayout();
        window
    }

    // ==================== Events ====================

    /// Applies one event. Returns true if the visible output changed.
    pub fn handle_event(&mut self, event: EditorEvent) -> bool {
        match event {
            EditorEvent::Key(key) => self.handle_key(&key),
            EditorEvent::MeasuredHeight(height_px) => self.set_measured_height(height_px),
        }
    }

    /// Applies one key press. Returns true if the buffer changed.
    ///
    /// Tab indents, Enter commits, Backspace deletes or merges up, and a
    /// printable character is appended. Held modifiers only matter for
    /// printable characters. Everything else is ignored.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let outcome = match event.key {
            Key::Tab => self.store.indent(),
            Key::Return => {
                let (cache, highlighter) = (&mut self.current, &self.highlighter);
                let outcome = self
                    .store
                    .commit(|text| cache.get_or_tokenize(text, highlighter).to_vec());
                debug!(committed = self.store.committed().len(), "committed line");
                outcome
            }
            Key::Backspace => {
                let outcome = self.store.delete_backward();
                if outcome == EditOutcome::MergedUp {
                    debug!(
                        committed = self.store.committed().len(),
                        len = self.store.current_len(),
                        "merged line back into current line"
                    );
                }
                outcome
            }
            Key::Char(ch) if event.is_printable() => self.store.push_char(ch),
            _ => {
                trace!(?event, "ignored key");
                return false;
            }
        };

        if outcome.is_unchanged() {
            trace!(?event, len = self.store.current_len(), "key had no effect");
            return false;
        }

        self.refresh_current();
        self.relayout();
        true
    }

    /// Records a new measured height of the rendered current line.
    ///
    /// Returns true if the row count changed.
    pub fn set_measured_height(&mut self, height_px: f32) -> bool {
        self.measured_height_px = height_px;
        let before = self.row_count;
        self.relayout();
        before != self.row_count
    }

    /// Applies every event queued through [`sender`](Self::sender) or a
    /// [`HeightObserver`], in order. Returns true if any changed the output.
    pub fn process_pending_events(&mut self) -> bool {
        let mut changed = false;
        while let Some(event) = self.receiver.try_next() {
            changed |= self.handle_event(event);
        }
        changed
    }

    /// A sender for queuing events from elsewhere in the host.
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Attaches a height observer, detaching any previous one.
    ///
    /// Measurements pushed through it are queued and applied by
    /// [`process_pending_events`](Self::process_pending_events).
    pub fn observe_height(&mut self) -> HeightObserver {
        HeightObserver::attach(self.sender.clone(), self.observers.clone())
    }

    /// Returns true while a height observer is attached.
    pub fn has_height_observer(&self) -> bool {
        self.observers.is_attached()
    }

    fn refresh_current(&mut self) {
        self.current
            .get_or_tokenize(self.store.current_text(), &self.highlighter);
    }

    fn relayout(&mut self) {
        self.row_count = self.estimator.total_rows(
            self.store.prologue().len(),
            self.store.committed(),
            self.measured_height_px,
        );
    }

    // ==================== Accessors ====================

    /// Shown prologue lines followed by committed user lines.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.store.lines()
    }

    pub fn prologue(&self) -> &[Line] {
        self.store.prologue()
    }

    pub fn committed(&self) -> &[Line] {
        self.store.committed()
    }

    pub fn current_text(&self) -> &str {
        self.store.current_text()
    }

    /// Highlighted segments of the current line.
    pub fn current_segments(&self) -> &[Segment] {
        self.current.segments()
    }

    /// Character count of the current line.
    pub fn current_len(&self) -> usize {
        self.store.current_len()
    }

    pub fn max_line_length(&self) -> usize {
        self.store.max_line_length()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Line-number labels for the gutter, `1..=row_count`.
    pub fn gutter(&self) -> impl Iterator<Item = usize> {
        1..=self.row_count
    }

    pub fn estimator(&self) -> &RowEstimator {
        &self.estimator
    }

    pub fn measured_height_px(&self) -> f32 {
        self.measured_height_px
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Number of times the current line had to be re-tokenized.
    pub fn tokenize_count(&self) -> u64 {
        self.current.misses()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            lines: self.lines().cloned().collect(),
            current_text: self.current_text().to_string(),
            current_segments: self.current_segments().to_vec(),
            row_count: self.row_count,
            max_line_length: self.max_line_length(),
        }
    }
}

impl Drop for CodeWindow {
    fn drop(&mut self) {
        if self.observers.is_attached() {
            debug!("detaching height observer on teardown");
        }
        self.observers.detach_all();
    }
}

// =============================================================================
// Tests
// =============================================================================
