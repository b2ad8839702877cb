// Chunk: docs/chunks/key_input - Key event model for the code window
//!
//! Key event types delivered by the host environment.
//!
//! The host (a browser keydown handler, a terminal reader, a test harness)
//! reports each key press as a key identifier plus the modifier flags that
//! were held. This crate turns that into a small Rust-native vocabulary the
//! editor state machine can match on without caring where the event came from.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::default())
    }

    /// Creates a KeyEvent for a named key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::default())
    }

    /// Builds an event from a host key identifier.
    ///
    /// Returns `None` when the identifier does not name a key this crate
    /// knows about; callers treat that as an ignored key.
    pub fn from_name(name: &str, modifiers: Modifiers) -> Option<Self> {
        Key::from_name(name).map(|key| Self::new(key, modifiers))
    }

    /// Returns true if this event types a visible character.
    ///
    /// A printable event is a single non-control character with no
    /// control, alt or meta key held. Shift is allowed since it is already
    /// folded into the character.
    pub fn is_printable(&self) -> bool {
        match self.key {
            Key::Char(ch) => !ch.is_control() && !self.modifiers.has_command_modifier(),
            _ => false,
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub ctrl: bool,
    /// Alt / Option key
    pub alt: bool,
    /// Meta / Command / Windows key
    pub meta: bool,
}

impl Modifiers {
    /// Modifiers with only shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Returns true if ctrl, alt or meta is held.
    ///
    /// These turn a character key into a shortcut rather than text input.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    /// Function key F1-F24
    Function(u8),
    /// A modifier key pressed on its own (Shift, Control, Alt, Meta, CapsLock)
    Modifier,
}

impl Key {
    /// Maps a host key identifier to a key.
    ///
    /// Accepts the DOM `KeyboardEvent.key` spellings (`"Enter"`, `"Tab"`,
    /// `"ArrowLeft"`, `"F5"`, ...) and any single character. Returns `None`
    /// for identifiers such as `"Dead"` or `"Unidentified"`.
    pub fn from_name(name: &str) -> Option<Key> {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(ch));
        }

        let key = match name {
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Enter" | "Return" => Key::Return,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Insert" => Key::Insert,
            "Shift" | "Control" | "Alt" | "Meta" | "CapsLock" | "AltGraph" => Key::Modifier,
            "Spacebar" => Key::Char(' '),
            _ => {
                let n = name.strip_prefix('F')?.parse::<u8>().ok()?;
                if (1..=24).contains(&n) {
                    Key::Function(n)
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }
}
