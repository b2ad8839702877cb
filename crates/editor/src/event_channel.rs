// Chunk: docs/chunks/editor_state - Ordered event queue and height observer
//! Event channel and height observer.
//!
//! Event sources (the key handler, the host's resize/measurement callback)
//! send [`EditorEvent`]s into one channel. The editor drains it in order, so
//! each event is fully applied before the next one is looked at.
//!
//! The height observer is the editor's subscription to the host's layout
//! measurements. Only one observer is attached at a time; attaching a new
//! one detaches the old one, and so does dropping it or tearing down the
//! editor. A detached observer's measurements are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SendError, Sender};
use std::sync::Arc;

use code_window_input::KeyEvent;
use tracing::debug;

use crate::editor_event::EditorEvent;

/// Sender half of the event channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<EditorEvent>,
}

/// Receiver half of the event channel, owned by the editor.
#[derive(Debug)]
pub struct EventReceiver {
    receiver: Receiver<EditorEvent>,
}

/// Creates a new event channel pair.
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    let (sender, receiver) = mpsc::channel();
    (EventSender { sender }, EventReceiver { receiver })
}

impl EventSender {
    pub fn send(&self, event: EditorEvent) -> Result<(), SendError<EditorEvent>> {
        self.sender.send(event)
    }

    /// Sends a key event to the channel.
    pub fn send_key(&self, event: KeyEvent) -> Result<(), SendError<EditorEvent>> {
        self.send(event.into())
    }

    /// Sends a height measurement to the channel.
    pub fn send_measured_height(&self, height_px: f32) -> Result<(), SendError<EditorEvent>> {
        self.send(EditorEvent::MeasuredHeight(height_px))
    }
}

impl EventReceiver {
    /// Takes the next pending event without blocking.
    pub fn try_next(&self) -> Option<EditorEvent> {
        self.receiver.try_recv().ok()
    }
}

/// Identifies the attached observer; 0 means none.
#[derive(Debug, Default, Clone)]
pub(crate) struct ObserverSlot {
    active: Arc<AtomicU64>,
    next: Arc<AtomicU64>,
}

impl ObserverSlot {
    pub(crate) fn is_attached(&self) -> bool {
        self.active.load(Ordering::SeqCst) != 0
    }

    /// Detaches whichever observer is attached.
    pub(crate) fn detach_all(&self) {
        self.active.store(0, Ordering::SeqCst);
    }
}

/// Subscription that forwards the host's measurements of the current line.
///
/// Dropping it detaches it.
#[derive(Debug)]
pub struct HeightObserver {
    sender: EventSender,
    slot: ObserverSlot,
    id: u64,
}

impl HeightObserver {
    /// Attaches a new observer, detaching any previous one.
    pub(crate) fn attach(sender: EventSender, slot: ObserverSlot) -> Self {
        let id = slot.next.fetch_add(1, Ordering::SeqCst) + 1;
        let previous = slot.active.swap(id, Ordering::SeqCst);
        if previous != 0 {
            debug!(previous, "replacing height observer");
        }
        debug!(id, "height observer attached");
        Self { sender, slot, id }
    }

    /// Returns true while this observer is the editor's attached observer.
    pub fn is_attached(&self) -> bool {
        self.slot.active.load(Ordering::SeqCst) == self.id
    }

    /// Reports a new measured height of the current line.
    ///
    /// Returns false if the observer is detached or the editor is gone; the
    /// measurement is dropped in that case.
    pub fn observe(&self, height_px: f32) -> bool {
        self.is_attached() && self.sender.send_measured_height(height_px).is_ok()
    }
}

impl Drop for HeightObserver {
    fn drop(&mut self) {
        let detached = self
            .slot
            .active
            .compare_exchange(self.id, 0, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if detached {
            debug!(id = self.id, "height observer detached");
        }
    }
}
